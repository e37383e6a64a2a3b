//! Neon provider
//!
//! Maps the five remotely managed resource kinds (project, branch,
//! endpoint, database, role) onto the control-plane REST API through
//! the uniform [`neon_core::ResourceLifecycle`] contract: preview
//! short-circuiting, not-found idempotence on read and delete, and
//! replacement instead of update for immutable fields.

pub mod config;
pub mod provider;
pub mod resources;

pub use config::{ExistingBranchPolicy, ProviderConfig};
pub use provider::NeonProvider;
pub use resources::{
    Branch, BranchArgs, BranchState, Database, DatabaseArgs, DatabaseState, Endpoint,
    EndpointArgs, EndpointState, Project, ProjectArgs, ProjectState, Role, RoleArgs, RoleState,
};
