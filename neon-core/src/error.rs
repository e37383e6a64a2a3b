//! Lifecycle error taxonomy

use thiserror::Error;

use crate::kind::ResourceKind;

/// Transport-level cause attached to operation failures.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors surfaced to the host runtime by lifecycle operations.
///
/// There is no local recovery beyond the not-found handling inside
/// Read and Delete; everything here propagates to the caller.
#[derive(Debug, Error)]
pub enum LifecycleError {
    /// No credentials are available to the mapper; never retried.
    #[error("missing provider configuration")]
    MissingConfig,

    /// Configuration was supplied but failed validation.
    #[error("invalid provider configuration: {0}")]
    InvalidConfig(String),

    /// A create call failed against the control plane.
    #[error("failed to create {kind}: {source}")]
    CreateFailed {
        kind: ResourceKind,
        #[source]
        source: BoxError,
    },

    /// A refresh failed for a reason other than the record being gone.
    #[error("failed to read {kind}: {source}")]
    ReadFailed {
        kind: ResourceKind,
        #[source]
        source: BoxError,
    },

    /// An update call failed against the control plane.
    #[error("failed to update {kind}: {source}")]
    UpdateFailed {
        kind: ResourceKind,
        #[source]
        source: BoxError,
    },

    /// A delete failed for a reason other than the record being gone.
    #[error("failed to delete {kind}: {source}")]
    DeleteFailed {
        kind: ResourceKind,
        #[source]
        source: BoxError,
    },

    /// Update attempted to change a field that requires replacement.
    #[error("{kind} field {field} is immutable; the resource must be replaced")]
    ImmutableField {
        kind: ResourceKind,
        field: &'static str,
    },
}

impl LifecycleError {
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }

    pub fn create_failed(
        kind: ResourceKind,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::CreateFailed {
            kind,
            source: Box::new(source),
        }
    }

    pub fn read_failed(
        kind: ResourceKind,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::ReadFailed {
            kind,
            source: Box::new(source),
        }
    }

    pub fn update_failed(
        kind: ResourceKind,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::UpdateFailed {
            kind,
            source: Box::new(source),
        }
    }

    pub fn delete_failed(
        kind: ResourceKind,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::DeleteFailed {
            kind,
            source: Box::new(source),
        }
    }
}

/// Result type for lifecycle operations.
pub type LifecycleResult<T> = Result<T, LifecycleError>;
