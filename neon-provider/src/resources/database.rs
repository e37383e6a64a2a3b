//! Database resource mapper
//!
//! The remote identifier is numeric and is stringified for state;
//! renames are addressed by the previous name.

use async_trait::async_trait;
use neon_api::{ApiClient, DatabaseRecord};
use neon_core::{LifecycleError, LifecycleResult, ReadOutcome, ResourceKind, ResourceLifecycle};
use serde::{Deserialize, Serialize};

/// Desired state for a database.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseArgs {
    /// Immutable after creation; changing it forces replacement.
    pub project_id: String,
    /// Immutable after creation; changing it forces replacement.
    pub branch_id: String,
    pub name: String,
}

/// Persisted state: args plus the stringified numeric id and the
/// creation timestamp.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseState {
    #[serde(flatten)]
    pub args: DatabaseArgs,
    pub id: String,
    pub created_at: String,
}

impl From<DatabaseRecord> for DatabaseState {
    fn from(record: DatabaseRecord) -> Self {
        Self {
            args: DatabaseArgs {
                project_id: record.project_id,
                branch_id: record.branch_id,
                name: record.name,
            },
            id: record.id.to_string(),
            created_at: record.created_at,
        }
    }
}

/// Mapper for the database lifecycle.
#[derive(Debug, Clone)]
pub struct Database {
    client: Option<ApiClient>,
}

impl Database {
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
impl ResourceLifecycle for Database {
    type Args = DatabaseArgs;
    type State = DatabaseState;

    const KIND: ResourceKind = ResourceKind::Database;

    async fn create(&self, args: &DatabaseArgs, preview: bool) -> LifecycleResult<DatabaseState> {
        if preview {
            return Ok(DatabaseState {
                args: args.clone(),
                ..DatabaseState::default()
            });
        }

        let record = self
            .client()?
            .create_database(&args.project_id, &args.branch_id, &args.name)
            .await
            .map_err(|e| LifecycleError::create_failed(Self::KIND, e))?;
        Ok(record.into())
    }

    async fn read(
        &self,
        id: &str,
        _args: &DatabaseArgs,
        state: &DatabaseState,
    ) -> LifecycleResult<ReadOutcome<DatabaseArgs, DatabaseState>> {
        match self
            .client()?
            .get_database(&state.args.project_id, &state.args.branch_id, &state.args.name)
            .await
        {
            Ok(record) => {
                let state = DatabaseState::from(record);
                Ok(ReadOutcome::found(id, state.args.clone(), state))
            }
            Err(e) if e.is_not_found() => Ok(ReadOutcome::Missing),
            Err(e) => Err(LifecycleError::read_failed(Self::KIND, e)),
        }
    }

    async fn update(
        &self,
        _id: &str,
        old: &DatabaseState,
        args: &DatabaseArgs,
        preview: bool,
    ) -> LifecycleResult<DatabaseState> {
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
            return Ok(DatabaseState {
                args: args.clone(),
                id: old.id.clone(),
                created_at: old.created_at.clone(),
            });
        }

        let record = self
            .client()?
            .update_database(
                &old.args.project_id,
                &old.args.branch_id,
                &old.args.name,
                &args.name,
            )
            .await
            .map_err(|e| LifecycleError::update_failed(Self::KIND, e))?;
        Ok(record.into())
    }

    async fn delete(&self, _id: &str, state: &DatabaseState) -> LifecycleResult<()> {
        match self
            .client()?
            .delete_database(&state.args.project_id, &state.args.branch_id, &state.args.name)
            .await
        {
            Ok(()) => Ok(()),
            Err(e) if e.is_not_found() => Ok(()),
            Err(e) => Err(LifecycleError::delete_failed(Self::KIND, e)),
        }
    }
}
