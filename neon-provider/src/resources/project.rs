//! Project resource mapper

use async_trait::async_trait;
use neon_api::{ApiClient, ProjectRecord};
use neon_core::{LifecycleError, LifecycleResult, ReadOutcome, ResourceKind, ResourceLifecycle};
use serde::{Deserialize, Serialize};

/// Desired state for a project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectArgs {
    pub name: String,
    /// Immutable after creation; changing it forces replacement.
    pub region_id: String,
}

/// Persisted state: args plus the server-assigned id and timestamp.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectState {
    #[serde(flatten)]
    pub args: ProjectArgs,
    pub id: String,
    pub created_at: String,
}

impl From<ProjectRecord> for ProjectState {
    fn from(record: ProjectRecord) -> Self {
        Self {
            args: ProjectArgs {
                name: record.name,
                region_id: record.region_id,
            },
            id: record.id,
            created_at: record.created_at,
        }
    }
}

/// Mapper for the project lifecycle.
#[derive(Debug, Clone)]
pub struct Project {
    client: Option<ApiClient>,
}

impl Project {
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
impl ResourceLifecycle for Project {
    type Args = ProjectArgs;
    type State = ProjectState;

    const KIND: ResourceKind = ResourceKind::Project;

    async fn create(&self, args: &ProjectArgs, preview: bool) -> LifecycleResult<ProjectState> {
        if preview {
            return Ok(ProjectState {
                args: args.clone(),
                ..ProjectState::default()
            });
        }

        let record = self
            .client()?
            .create_project(&args.name, &args.region_id)
            .await
            .map_err(|e| LifecycleError::create_failed(Self::KIND, e))?;
        Ok(record.into())
    }

    async fn read(
        &self,
        id: &str,
        _args: &ProjectArgs,
        state: &ProjectState,
    ) -> LifecycleResult<ReadOutcome<ProjectArgs, ProjectState>> {
        match self.client()?.get_project(&state.id).await {
            Ok(record) => {
                let state = ProjectState::from(record);
                Ok(ReadOutcome::found(id, state.args.clone(), state))
            }
            Err(e) if e.is_not_found() => Ok(ReadOutcome::Missing),
            Err(e) => Err(LifecycleError::read_failed(Self::KIND, e)),
        }
    }

    async fn update(
        &self,
        _id: &str,
        old: &ProjectState,
        args: &ProjectArgs,
        preview: bool,
    ) -> LifecycleResult<ProjectState> {
        if args.region_id != old.args.region_id {
            return Err(LifecycleError::ImmutableField {
                kind: Self::KIND,
                field: "regionId",
            });
        }
        if preview {
            return Ok(ProjectState {
                args: args.clone(),
                id: old.id.clone(),
                created_at: old.created_at.clone(),
            });
        }

        let record = self
            .client()?
            .update_project(&old.id, &args.name)
            .await
            .map_err(|e| LifecycleError::update_failed(Self::KIND, e))?;
        Ok(record.into())
    }

    async fn delete(&self, _id: &str, state: &ProjectState) -> LifecycleResult<()> {
        match self.client()?.delete_project(&state.id).await {
            Ok(()) => Ok(()),
            Err(e) if e.is_not_found() => Ok(()),
            Err(e) => Err(LifecycleError::delete_failed(Self::KIND, e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> ProjectArgs {
        ProjectArgs {
            name: "acme".into(),
            region_id: "us-east-1".into(),
        }
    }

    #[tokio::test]
    async fn preview_create_synthesizes_state_without_credentials() {
        let state = Project::detached().create(&args(), true).await.unwrap();
        assert_eq!(state.args, args());
        assert!(state.id.is_empty());
        assert!(state.created_at.is_empty());
    }

    #[tokio::test]
    async fn preview_update_preserves_server_assigned_fields() {
        let old = ProjectState {
            args: args(),
            id: "proj_123".into(),
            created_at: "2024-01-01T00:00:00Z".into(),
        };
        let renamed = ProjectArgs {
            name: "acme-prod".into(),
            ..args()
        };

        let state = Project::detached()
            .update("acme", &old, &renamed, true)
            .await
            .unwrap();
        assert_eq!(state.args.name, "acme-prod");
        assert_eq!(state.id, "proj_123");
        assert_eq!(state.created_at, "2024-01-01T00:00:00Z");
    }

    #[tokio::test]
    async fn update_rejects_region_change() {
        let old = ProjectState {
            args: args(),
            id: "proj_123".into(),
            created_at: "2024-01-01T00:00:00Z".into(),
        };
        let moved = ProjectArgs {
            region_id: "eu-west-1".into(),
            ..args()
        };

        let error = Project::detached()
            .update("acme", &old, &moved, true)
            .await
            .unwrap_err();
        assert!(matches!(
            error,
            LifecycleError::ImmutableField { field: "regionId", .. }
        ));
    }

    #[tokio::test]
    async fn non_preview_without_client_is_missing_config() {
        let error = Project::detached().create(&args(), false).await.unwrap_err();
        assert!(matches!(error, LifecycleError::MissingConfig));
    }

    #[test]
    fn test_state_serializes_host_facing_camel_case() {
        let state = ProjectState {
            args: args(),
            id: "proj_123".into(),
            created_at: "2024-01-01T00:00:00Z".into(),
        };
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["regionId"], "us-east-1");
        assert_eq!(json["createdAt"], "2024-01-01T00:00:00Z");
        assert_eq!(json["id"], "proj_123");
    }
}
