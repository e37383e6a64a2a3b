//! The uniform lifecycle contract shared by every resource mapper

use async_trait::async_trait;

use crate::error::LifecycleResult;
use crate::kind::ResourceKind;

/// Result of refreshing a resource from the remote system.
///
/// `Missing` is the not-found sentinel: the remote record no longer
/// exists and the host runtime must drop the resource from tracked
/// state. It is deliberately not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadOutcome<A, S> {
    /// The record still exists; args and state are rebuilt from it.
    Found { id: String, args: A, state: S },
    /// The record is gone from the remote system.
    Missing,
}

impl<A, S> ReadOutcome<A, S> {
    pub fn found(id: impl Into<String>, args: A, state: S) -> Self {
        Self::Found {
            id: id.into(),
            args,
            state,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }
}

/// Lifecycle operations for one resource kind.
///
/// Every mapper follows the same state machine:
/// `absent -> (create) -> present -> (update)* -> present -> (delete) -> absent`.
/// `read` is a pure projection; it may discover `absent` from any
/// `present` assumption and reports that via [`ReadOutcome::Missing`]
/// rather than an error.
///
/// With `preview` set, `create` and `update` synthesize their result
/// locally and must not touch the network or require credentials.
/// Each non-preview operation issues exactly one remote call; there
/// are no retries and no shared mutable state between calls.
#[async_trait]
pub trait ResourceLifecycle: Send + Sync {
    /// Desired-state fields supplied by the caller.
    type Args: Send + Sync;
    /// Args plus server-assigned fields. Server-assigned fields are
    /// never client-generated.
    type State: Send + Sync;

    /// Kind this mapper manages.
    const KIND: ResourceKind;

    /// Create the resource, or synthesize its state under preview
    /// (server-assigned fields stay empty).
    async fn create(&self, args: &Self::Args, preview: bool) -> LifecycleResult<Self::State>;

    /// Refresh args and state from the remote record. A missing
    /// record yields [`ReadOutcome::Missing`] with no error.
    async fn read(
        &self,
        id: &str,
        args: &Self::Args,
        state: &Self::State,
    ) -> LifecycleResult<ReadOutcome<Self::Args, Self::State>>;

    /// Apply the mutable fields of `args`, preserving server-assigned
    /// fields from `old`. Changing an immutable field is rejected.
    async fn update(
        &self,
        id: &str,
        old: &Self::State,
        args: &Self::Args,
        preview: bool,
    ) -> LifecycleResult<Self::State>;

    /// Remove the resource. A record that is already gone counts as
    /// a successful delete.
    async fn delete(&self, id: &str, state: &Self::State) -> LifecycleResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Minimal mapper used to exercise the contract shape.
    struct MockLifecycle;

    #[async_trait]
    impl ResourceLifecycle for MockLifecycle {
        type Args = String;
        type State = String;

        const KIND: ResourceKind = ResourceKind::Project;

        async fn create(&self, args: &String, preview: bool) -> LifecycleResult<String> {
            if preview {
                return Ok(args.clone());
            }
            Ok(format!("{args}-created"))
        }

        async fn read(
            &self,
            _id: &str,
            _args: &String,
            _state: &String,
        ) -> LifecycleResult<ReadOutcome<String, String>> {
            Ok(ReadOutcome::Missing)
        }

        async fn update(
            &self,
            _id: &str,
            _old: &String,
            args: &String,
            _preview: bool,
        ) -> LifecycleResult<String> {
            Ok(args.clone())
        }

        async fn delete(&self, _id: &str, _state: &String) -> LifecycleResult<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn mock_lifecycle_preview_create_echoes_args() {
        let mapper = MockLifecycle;
        let state = mapper.create(&"dev".to_string(), true).await.unwrap();
        assert_eq!(state, "dev");
    }

    #[tokio::test]
    async fn mock_lifecycle_read_reports_missing() {
        let mapper = MockLifecycle;
        let outcome = mapper
            .read("dev", &"dev".to_string(), &"dev".to_string())
            .await
            .unwrap();
        assert!(outcome.is_missing());
    }

    #[test]
    fn test_found_carries_id() {
        let outcome: ReadOutcome<String, String> =
            ReadOutcome::found("proj_123", "a".into(), "s".into());
        match outcome {
            ReadOutcome::Found { id, .. } => assert_eq!(id, "proj_123"),
            ReadOutcome::Missing => panic!("expected Found"),
        }
    }
}
