//! Project wire records and calls

use serde::Deserialize;
use serde_json::json;

use crate::client::ApiClient;
use crate::error::ApiResult;

/// Server record for a project.
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectRecord {
    pub id: String,
    pub name: String,
    pub region_id: String,
    pub created_at: String,
}

#[derive(Deserialize)]
struct ProjectEnvelope {
    project: ProjectRecord,
}

impl ApiClient {
    pub async fn create_project(&self, name: &str, region_id: &str) -> ApiResult<ProjectRecord> {
        let body = json!({ "project": { "name": name, "region_id": region_id } });
        let envelope: ProjectEnvelope = self.post("/projects", &body).await?;
        Ok(envelope.project)
    }

    pub async fn get_project(&self, project_id: &str) -> ApiResult<ProjectRecord> {
        let envelope: ProjectEnvelope = self.get(&format!("/projects/{project_id}")).await?;
        Ok(envelope.project)
    }

    /// Name is the only mutable project field.
    pub async fn update_project(&self, project_id: &str, name: &str) -> ApiResult<ProjectRecord> {
        let body = json!({ "project": { "name": name } });
        let envelope: ProjectEnvelope = self
            .patch(&format!("/projects/{project_id}"), &body)
            .await?;
        Ok(envelope.project)
    }

    pub async fn delete_project(&self, project_id: &str) -> ApiResult<()> {
        self.delete(&format!("/projects/{project_id}")).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_parses_from_envelope() {
        let body = r#"{"project":{"id":"proj_123","name":"acme","region_id":"us-east-1","created_at":"2024-01-01T00:00:00Z"}}"#;
        let envelope: ProjectEnvelope = serde_json::from_str(body).unwrap();
        assert_eq!(envelope.project.id, "proj_123");
        assert_eq!(envelope.project.region_id, "us-east-1");
    }
}
