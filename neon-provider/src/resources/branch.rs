//! Branch resource mapper
//!
//! Creation asks the control plane to provision a default read-only
//! compute endpoint atomically with the branch; the resulting state
//! carries only branch fields.

use async_trait::async_trait;
use neon_api::{ApiClient, BranchRecord};
use neon_core::{LifecycleError, LifecycleResult, ReadOutcome, ResourceKind, ResourceLifecycle};
use serde::{Deserialize, Serialize};

use crate::config::ExistingBranchPolicy;

/// Desired state for a branch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BranchArgs {
    /// Immutable after creation; changing it forces replacement.
    pub project_id: String,
    pub name: String,
}

/// Persisted state: args plus the server-assigned id and timestamp.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BranchState {
    #[serde(flatten)]
    pub args: BranchArgs,
    pub id: String,
    pub created_at: String,
}

impl From<BranchRecord> for BranchState {
    fn from(record: BranchRecord) -> Self {
        Self {
            args: BranchArgs {
                project_id: record.project_id,
                name: record.name,
            },
            id: record.id,
            created_at: record.created_at,
        }
    }
}

/// Mapper for the branch lifecycle.
#[derive(Debug, Clone)]
pub struct Branch {
    client: Option<ApiClient>,
    existing: ExistingBranchPolicy,
}

impl Branch {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client: Some(client),
            existing: ExistingBranchPolicy::default(),
        }
    }

    /// Mapper without credentials; only preview operations succeed.
    pub fn detached() -> Self {
        Self {
            client: None,
            existing: ExistingBranchPolicy::default(),
        }
    }

    pub fn with_existing_policy(mut self, policy: ExistingBranchPolicy) -> Self {
        self.existing = policy;
        self
    }

    fn client(&self) -> LifecycleResult<&ApiClient> {
        self.client.as_ref().ok_or(LifecycleError::MissingConfig)
    }
}

#[async_trait]
impl ResourceLifecycle for Branch {
    type Args = BranchArgs;
    type State = BranchState;

    const KIND: ResourceKind = ResourceKind::Branch;

    async fn create(&self, args: &BranchArgs, preview: bool) -> LifecycleResult<BranchState> {
        if preview {
            return Ok(BranchState {
                args: args.clone(),
                ..BranchState::default()
            });
        }

        let client = self.client()?;
        match client.create_branch(&args.project_id, &args.name).await {
            Ok(record) => Ok(record.into()),
            Err(e) if e.is_conflict() && self.existing == ExistingBranchPolicy::AdoptExisting => {
                // The item path accepts the name as the key.
                let record = client
                    .get_branch(&args.project_id, &args.name)
                    .await
                    .map_err(|e| LifecycleError::create_failed(Self::KIND, e))?;
                Ok(record.into())
            }
            Err(e) => Err(LifecycleError::create_failed(Self::KIND, e)),
        }
    }

    async fn read(
        &self,
        id: &str,
        _args: &BranchArgs,
        state: &BranchState,
    ) -> LifecycleResult<ReadOutcome<BranchArgs, BranchState>> {
        match self
            .client()?
            .get_branch(&state.args.project_id, &state.id)
            .await
        {
            Ok(record) => {
                let state = BranchState::from(record);
                Ok(ReadOutcome::found(id, state.args.clone(), state))
            }
            Err(e) if e.is_not_found() => Ok(ReadOutcome::Missing),
            Err(e) => Err(LifecycleError::read_failed(Self::KIND, e)),
        }
    }

    async fn update(
        &self,
        _id: &str,
        old: &BranchState,
        args: &BranchArgs,
        preview: bool,
    ) -> LifecycleResult<BranchState> {
        if args.project_id != old.args.project_id {
            return Err(LifecycleError::ImmutableField {
                kind: Self::KIND,
                field: "projectId",
            });
        }
        if preview {
            return Ok(BranchState {
                args: args.clone(),
                id: old.id.clone(),
                created_at: old.created_at.clone(),
            });
        }

        let record = self
            .client()?
            .update_branch(&old.args.project_id, &old.id, &args.name)
            .await
            .map_err(|e| LifecycleError::update_failed(Self::KIND, e))?;
        Ok(record.into())
    }

    async fn delete(&self, _id: &str, state: &BranchState) -> LifecycleResult<()> {
        match self
            .client()?
            .delete_branch(&state.args.project_id, &state.id)
            .await
        {
            Ok(()) => Ok(()),
            Err(e) if e.is_not_found() => Ok(()),
            Err(e) => Err(LifecycleError::delete_failed(Self::KIND, e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> BranchArgs {
        BranchArgs {
            project_id: "proj_123".into(),
            name: "dev".into(),
        }
    }

    #[tokio::test]
    async fn preview_create_carries_only_branch_args() {
        let state = Branch::detached().create(&args(), true).await.unwrap();
        assert_eq!(state.args, args());
        assert!(state.id.is_empty());
        assert!(state.created_at.is_empty());
    }

    #[tokio::test]
    async fn update_rejects_project_move() {
        let old = BranchState {
            args: args(),
            id: "br-dev-1".into(),
            created_at: "2024-01-02T00:00:00Z".into(),
        };
        let moved = BranchArgs {
            project_id: "proj_999".into(),
            ..args()
        };

        let error = Branch::detached()
            .update("dev", &old, &moved, true)
            .await
            .unwrap_err();
        assert!(matches!(
            error,
            LifecycleError::ImmutableField { field: "projectId", .. }
        ));
    }
}
