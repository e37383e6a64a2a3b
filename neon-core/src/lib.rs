//! Core contract for the Neon provider
//!
//! Defines the uniform Create/Read/Update/Delete lifecycle every
//! resource mapper implements, the not-found sentinel returned by
//! reads, and the shared error taxonomy. Implementations live in the
//! provider crate; this crate carries no network code.

pub mod error;
pub mod kind;
pub mod lifecycle;

pub use error::{BoxError, LifecycleError, LifecycleResult};
pub use kind::ResourceKind;
pub use lifecycle::{ReadOutcome, ResourceLifecycle};
