//! Role resource mapper
//!
//! The wire record omits the owning project and branch ids, so the
//! mapper carries them over from args or prior state. A role's id is
//! its name.

use async_trait::async_trait;
use neon_api::{ApiClient, RoleRecord};
use neon_core::{LifecycleError, LifecycleResult, ReadOutcome, ResourceKind, ResourceLifecycle};
use serde::{Deserialize, Serialize};

/// Desired state for a role.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleArgs {
    /// Immutable after creation; changing it forces replacement.
    pub project_id: String,
    /// Immutable after creation; changing it forces replacement.
    pub branch_id: String,
    pub name: String,
}

/// Persisted state: args plus the server-derived id (the role name)
/// and the creation timestamp. The server-generated password is never
/// persisted here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleState {
    #[serde(flatten)]
    pub args: RoleArgs,
    pub id: String,
    pub created_at: String,
}

impl RoleState {
    fn from_record(record: RoleRecord, project_id: &str, branch_id: &str) -> Self {
        Self {
            args: RoleArgs {
                project_id: project_id.to_string(),
                branch_id: branch_id.to_string(),
                name: record.name.clone(),
            },
            id: record.name,
            created_at: record.created_at,
        }
    }
}

/// Mapper for the role lifecycle.
#[derive(Debug, Clone)]
pub struct Role {
    client: Option<ApiClient>,
}

impl Role {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client: Some(client),
        }
    }

    /// Mapper without credentials; only preview operations succeed.
    pub fn detached() -> Self {
        Self { client: None }
    }

    fn client(&self) -> LifecycleResult<&ApiClient> {
        self.client.as_ref().ok_or(LifecycleError::MissingConfig)
    }
}

#[async_trait]
impl ResourceLifecycle for Role {
    type Args = RoleArgs;
    type State = RoleState;

    const KIND: ResourceKind = ResourceKind::Role;

    async fn create(&self, args: &RoleArgs, preview: bool) -> LifecycleResult<RoleState> {
        if preview {
            return Ok(RoleState {
                args: args.clone(),
                ..RoleState::default()
            });
        }

        let record = self
            .client()?
            .create_role(&args.project_id, &args.branch_id, &args.name)
            .await
            .map_err(|e| LifecycleError::create_failed(Self::KIND, e))?;
        Ok(RoleState::from_record(
            record,
            &args.project_id,
            &args.branch_id,
        ))
    }

    async fn read(
        &self,
        id: &str,
        _args: &RoleArgs,
        state: &RoleState,
    ) -> LifecycleResult<ReadOutcome<RoleArgs, RoleState>> {
        match self
            .client()?
            .get_role(&state.args.project_id, &state.args.branch_id, &state.args.name)
            .await
        {
            Ok(record) => {
                let state = RoleState::from_record(
                    record,
                    &state.args.project_id,
                    &state.args.branch_id,
                );
                Ok(ReadOutcome::found(id, state.args.clone(), state))
            }
            Err(e) if e.is_not_found() => Ok(ReadOutcome::Missing),
            Err(e) => Err(LifecycleError::read_failed(Self::KIND, e)),
        }
    }

    async fn update(
        &self,
        _id: &str,
        old: &RoleState,
        args: &RoleArgs,
        preview: bool,
    ) -> LifecycleResult<RoleState> {
        if args.project_id != old.args.project_id {
            return Err(LifecycleError::ImmutableField {
                kind: Self::KIND,
                field: "projectId",
            });
        }
        if args.branch_id != old.args.branch_id {
            return Err(LifecycleError::ImmutableField {
                kind: Self::KIND,
                field: "branchId",
            });
        }
        if preview {
            return Ok(RoleState {
                args: args.clone(),
                id: old.id.clone(),
                created_at: old.created_at.clone(),
            });
        }

        let record = self
            .client()?
            .update_role(
                &old.args.project_id,
                &old.args.branch_id,
                &old.args.name,
                &args.name,
            )
            .await
            .map_err(|e| LifecycleError::update_failed(Self::KIND, e))?;
        Ok(RoleState::from_record(
            record,
            &old.args.project_id,
            &old.args.branch_id,
        ))
    }

    async fn delete(&self, _id: &str, state: &RoleState) -> LifecycleResult<()> {
        match self
            .client()?
            .delete_role(&state.args.project_id, &state.args.branch_id, &state.args.name)
            .await
        {
            Ok(()) => Ok(()),
            Err(e) if e.is_not_found() => Ok(()),
            Err(e) => Err(LifecycleError::delete_failed(Self::KIND, e)),
        }
    }
}
