//! Typed client for the Neon control-plane API
//!
//! One authenticated HTTP exchange per call against
//! `https://console.neon.tech/api/v2`. Request and response bodies are
//! JSON with each resource nested under its singular key
//! (`{"project": {...}}`). Non-2xx responses are classified
//! structurally by status code; there are no retries.

pub mod branches;
pub mod client;
pub mod databases;
pub mod endpoints;
pub mod error;
pub mod projects;
pub mod roles;

pub use branches::BranchRecord;
pub use client::{ApiClient, DEFAULT_BASE_URL};
pub use databases::DatabaseRecord;
pub use endpoints::EndpointRecord;
pub use error::{ApiError, ApiResult};
pub use projects::ProjectRecord;
pub use roles::RoleRecord;
