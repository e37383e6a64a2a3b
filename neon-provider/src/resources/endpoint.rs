//! Endpoint resource mapper
//!
//! Endpoints are the one kind with an extra server-assigned field:
//! the connection hostname.

use async_trait::async_trait;
use neon_api::{ApiClient, EndpointRecord};
use neon_core::{LifecycleError, LifecycleResult, ReadOutcome, ResourceKind, ResourceLifecycle};
use serde::{Deserialize, Serialize};

/// Desired state for a compute endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndpointArgs {
    /// Immutable after creation; changing it forces replacement.
    pub project_id: String,
    pub branch_id: String,
    #[serde(rename = "type")]
    pub endpoint_type: String,
}

/// Persisted state: args plus the server-assigned id, host, and
/// timestamp.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndpointState {
    #[serde(flatten)]
    pub args: EndpointArgs,
    pub id: String,
    pub host: String,
    pub created_at: String,
}

impl From<EndpointRecord> for EndpointState {
    fn from(record: EndpointRecord) -> Self {
        Self {
            args: EndpointArgs {
                project_id: record.project_id,
                branch_id: record.branch_id,
                endpoint_type: record.endpoint_type,
            },
            id: record.id,
            host: record.host,
            created_at: record.created_at,
        }
    }
}

/// Mapper for the endpoint lifecycle.
#[derive(Debug, Clone)]
pub struct Endpoint {
    client: Option<ApiClient>,
}

impl Endpoint {
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
impl ResourceLifecycle for Endpoint {
    type Args = EndpointArgs;
    type State = EndpointState;

    const KIND: ResourceKind = ResourceKind::Endpoint;

    async fn create(&self, args: &EndpointArgs, preview: bool) -> LifecycleResult<EndpointState> {
        if preview {
            return Ok(EndpointState {
                args: args.clone(),
                ..EndpointState::default()
            });
        }

        let record = self
            .client()?
            .create_endpoint(&args.project_id, &args.branch_id, &args.endpoint_type)
            .await
            .map_err(|e| LifecycleError::create_failed(Self::KIND, e))?;
        Ok(record.into())
    }

    async fn read(
        &self,
        id: &str,
        _args: &EndpointArgs,
        state: &EndpointState,
    ) -> LifecycleResult<ReadOutcome<EndpointArgs, EndpointState>> {
        match self
            .client()?
            .get_endpoint(&state.args.project_id, &state.id)
            .await
        {
            Ok(record) => {
                let state = EndpointState::from(record);
                Ok(ReadOutcome::found(id, state.args.clone(), state))
            }
            Err(e) if e.is_not_found() => Ok(ReadOutcome::Missing),
            Err(e) => Err(LifecycleError::read_failed(Self::KIND, e)),
        }
    }

    async fn update(
        &self,
        _id: &str,
        old: &EndpointState,
        args: &EndpointArgs,
        preview: bool,
    ) -> LifecycleResult<EndpointState> {
        if args.project_id != old.args.project_id {
            return Err(LifecycleError::ImmutableField {
                kind: Self::KIND,
                field: "projectId",
            });
        }
        if preview {
            return Ok(EndpointState {
                args: args.clone(),
                id: old.id.clone(),
                host: old.host.clone(),
                created_at: old.created_at.clone(),
            });
        }

        let record = self
            .client()?
            .update_endpoint(
                &old.args.project_id,
                &old.id,
                &args.branch_id,
                &args.endpoint_type,
            )
            .await
            .map_err(|e| LifecycleError::update_failed(Self::KIND, e))?;
        Ok(record.into())
    }

    async fn delete(&self, _id: &str, state: &EndpointState) -> LifecycleResult<()> {
        match self
            .client()?
            .delete_endpoint(&state.args.project_id, &state.id)
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

    fn args() -> EndpointArgs {
        EndpointArgs {
            project_id: "proj_123".into(),
            branch_id: "br-dev-1".into(),
            endpoint_type: "read_write".into(),
        }
    }

    fn old_state() -> EndpointState {
        EndpointState {
            args: args(),
            id: "ep-1".into(),
            host: "ep-1.us-east-1.aws.neon.tech".into(),
            created_at: "2024-01-03T00:00:00Z".into(),
        }
    }

    #[tokio::test]
    async fn preview_update_keeps_host_and_allows_branch_and_type_changes() {
        let retargeted = EndpointArgs {
            branch_id: "br-main-1".into(),
            endpoint_type: "read_only".into(),
            ..args()
        };

        let state = Endpoint::detached()
            .update("ep", &old_state(), &retargeted, true)
            .await
            .unwrap();
        assert_eq!(state.args.branch_id, "br-main-1");
        assert_eq!(state.args.endpoint_type, "read_only");
        assert_eq!(state.host, "ep-1.us-east-1.aws.neon.tech");
        assert_eq!(state.id, "ep-1");
    }

    #[test]
    fn test_type_serializes_under_its_wire_name() {
        let json = serde_json::to_value(args()).unwrap();
        assert_eq!(json["type"], "read_write");
        assert_eq!(json["branchId"], "br-dev-1");
    }
}
