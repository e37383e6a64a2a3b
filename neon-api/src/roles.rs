//! Role wire records and calls
//!
//! Role records omit the owning project and branch ids; callers carry
//! those. The item path is keyed by role name.

use serde::Deserialize;
use serde_json::json;

use crate::client::ApiClient;
use crate::error::ApiResult;

/// Server record for a role.
#[derive(Debug, Clone, Deserialize)]
pub struct RoleRecord {
    pub name: String,
    /// Only present in the create response. Never synthesized
    /// client-side.
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub protected: bool,
    pub created_at: String,
}

#[derive(Deserialize)]
struct RoleEnvelope {
    role: RoleRecord,
}

impl ApiClient {
    pub async fn create_role(
        &self,
        project_id: &str,
        branch_id: &str,
        name: &str,
    ) -> ApiResult<RoleRecord> {
        let body = json!({ "role": { "name": name } });
        let envelope: RoleEnvelope = self
            .post(
                &format!("/projects/{project_id}/branches/{branch_id}/roles"),
                &body,
            )
            .await?;
        Ok(envelope.role)
    }

    pub async fn get_role(
        &self,
        project_id: &str,
        branch_id: &str,
        name: &str,
    ) -> ApiResult<RoleRecord> {
        let envelope: RoleEnvelope = self
            .get(&format!(
                "/projects/{project_id}/branches/{branch_id}/roles/{name}"
            ))
            .await?;
        Ok(envelope.role)
    }

    pub async fn update_role(
        &self,
        project_id: &str,
        branch_id: &str,
        name: &str,
        new_name: &str,
    ) -> ApiResult<RoleRecord> {
        let body = json!({ "role": { "name": new_name } });
        let envelope: RoleEnvelope = self
            .patch(
                &format!("/projects/{project_id}/branches/{branch_id}/roles/{name}"),
                &body,
            )
            .await?;
        Ok(envelope.role)
    }

    pub async fn delete_role(
        &self,
        project_id: &str,
        branch_id: &str,
        name: &str,
    ) -> ApiResult<()> {
        self.delete(&format!(
            "/projects/{project_id}/branches/{branch_id}/roles/{name}"
        ))
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_response_carries_password() {
        let body = r#"{"role":{"name":"app_rw","password":"s3cret","protected":false,"created_at":"2024-01-01T00:00:00Z"}}"#;
        let envelope: RoleEnvelope = serde_json::from_str(body).unwrap();
        assert_eq!(envelope.role.password.as_deref(), Some("s3cret"));
    }

    #[test]
    fn test_read_response_omits_password_and_protected() {
        let body = r#"{"role":{"name":"app_rw","created_at":"2024-01-01T00:00:00Z"}}"#;
        let envelope: RoleEnvelope = serde_json::from_str(body).unwrap();
        assert!(envelope.role.password.is_none());
        assert!(!envelope.role.protected);
    }
}
