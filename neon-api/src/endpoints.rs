//! Endpoint wire records and calls

use serde::Deserialize;
use serde_json::json;

use crate::client::ApiClient;
use crate::error::ApiResult;

/// Server record for a compute endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct EndpointRecord {
    pub id: String,
    /// Connection hostname assigned by the control plane.
    pub host: String,
    pub project_id: String,
    pub branch_id: String,
    #[serde(rename = "type")]
    pub endpoint_type: String,
    pub created_at: String,
}

#[derive(Deserialize)]
struct EndpointEnvelope {
    endpoint: EndpointRecord,
}

impl ApiClient {
    pub async fn create_endpoint(
        &self,
        project_id: &str,
        branch_id: &str,
        endpoint_type: &str,
    ) -> ApiResult<EndpointRecord> {
        let body = json!({
            "endpoint": { "branch_id": branch_id, "type": endpoint_type },
        });
        let envelope: EndpointEnvelope = self
            .post(&format!("/projects/{project_id}/endpoints"), &body)
            .await?;
        Ok(envelope.endpoint)
    }

    pub async fn get_endpoint(
        &self,
        project_id: &str,
        endpoint_id: &str,
    ) -> ApiResult<EndpointRecord> {
        let envelope: EndpointEnvelope = self
            .get(&format!("/projects/{project_id}/endpoints/{endpoint_id}"))
            .await?;
        Ok(envelope.endpoint)
    }

    /// Branch and type are the mutable endpoint fields.
    pub async fn update_endpoint(
        &self,
        project_id: &str,
        endpoint_id: &str,
        branch_id: &str,
        endpoint_type: &str,
    ) -> ApiResult<EndpointRecord> {
        let body = json!({
            "endpoint": { "branch_id": branch_id, "type": endpoint_type },
        });
        let envelope: EndpointEnvelope = self
            .patch(
                &format!("/projects/{project_id}/endpoints/{endpoint_id}"),
                &body,
            )
            .await?;
        Ok(envelope.endpoint)
    }

    pub async fn delete_endpoint(&self, project_id: &str, endpoint_id: &str) -> ApiResult<()> {
        self.delete(&format!("/projects/{project_id}/endpoints/{endpoint_id}"))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_field_round_trips_through_rename() {
        let body = r#"{"endpoint":{"id":"ep-1","host":"ep-1.us-east-1.aws.neon.tech","project_id":"proj_123","branch_id":"br-dev-1","type":"read_write","created_at":"2024-01-01T00:00:00Z"}}"#;
        let envelope: EndpointEnvelope = serde_json::from_str(body).unwrap();
        assert_eq!(envelope.endpoint.endpoint_type, "read_write");
        assert_eq!(envelope.endpoint.host, "ep-1.us-east-1.aws.neon.tech");
    }
}
