//! Database wire records and calls
//!
//! Databases are the one kind whose remote identifier is numeric;
//! everything else uses opaque string ids. The item path is keyed by
//! database name, not id.

use serde::Deserialize;
use serde_json::json;

use crate::client::ApiClient;
use crate::error::ApiResult;

/// Owner assigned to databases created through the provider.
const DEFAULT_OWNER: &str = "default";

/// Server record for a database.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseRecord {
    pub id: i64,
    pub name: String,
    pub owner_name: String,
    pub project_id: String,
    pub branch_id: String,
    pub created_at: String,
}

#[derive(Deserialize)]
struct DatabaseEnvelope {
    database: DatabaseRecord,
}

impl ApiClient {
    pub async fn create_database(
        &self,
        project_id: &str,
        branch_id: &str,
        name: &str,
    ) -> ApiResult<DatabaseRecord> {
        let body = json!({
            "database": { "name": name, "owner_name": DEFAULT_OWNER },
        });
        let envelope: DatabaseEnvelope = self
            .post(
                &format!("/projects/{project_id}/branches/{branch_id}/databases"),
                &body,
            )
            .await?;
        Ok(envelope.database)
    }

    pub async fn get_database(
        &self,
        project_id: &str,
        branch_id: &str,
        name: &str,
    ) -> ApiResult<DatabaseRecord> {
        let envelope: DatabaseEnvelope = self
            .get(&format!(
                "/projects/{project_id}/branches/{branch_id}/databases/{name}"
            ))
            .await?;
        Ok(envelope.database)
    }

    /// Renames are addressed by the current name.
    pub async fn update_database(
        &self,
        project_id: &str,
        branch_id: &str,
        name: &str,
        new_name: &str,
    ) -> ApiResult<DatabaseRecord> {
        let body = json!({ "database": { "name": new_name } });
        let envelope: DatabaseEnvelope = self
            .patch(
                &format!("/projects/{project_id}/branches/{branch_id}/databases/{name}"),
                &body,
            )
            .await?;
        Ok(envelope.database)
    }

    pub async fn delete_database(
        &self,
        project_id: &str,
        branch_id: &str,
        name: &str,
    ) -> ApiResult<()> {
        self.delete(&format!(
            "/projects/{project_id}/branches/{branch_id}/databases/{name}"
        ))
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_id_parses_as_i64() {
        let body = r#"{"database":{"id":9007199254740993,"name":"app","owner_name":"default","project_id":"proj_123","branch_id":"br-dev-1","created_at":"2024-01-01T00:00:00Z"}}"#;
        let envelope: DatabaseEnvelope = serde_json::from_str(body).unwrap();
        // Beyond f64's integer precision; must survive as i64.
        assert_eq!(envelope.database.id, 9_007_199_254_740_993);
    }
}
