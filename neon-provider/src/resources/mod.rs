//! Resource mappers, one per remotely managed kind
//!
//! Each mapper is a thin, deterministic translation between its
//! Args/State pair and the control-plane wire records. State is
//! always Args plus server-assigned fields, and server-assigned
//! fields only ever come from the remote system.

mod branch;
mod database;
mod endpoint;
mod project;
mod role;

pub use branch::{Branch, BranchArgs, BranchState};
pub use database::{Database, DatabaseArgs, DatabaseState};
pub use endpoint::{Endpoint, EndpointArgs, EndpointState};
pub use project::{Project, ProjectArgs, ProjectState};
pub use role::{Role, RoleArgs, RoleState};
