//! Branch wire records and calls

use serde::Deserialize;
use serde_json::json;

use crate::client::ApiClient;
use crate::error::ApiResult;

/// Server record for a branch. The endpoints provisioned alongside a
/// branch are not part of it.
#[derive(Debug, Clone, Deserialize)]
pub struct BranchRecord {
    pub id: String,
    pub name: String,
    pub project_id: String,
    pub created_at: String,
}

#[derive(Deserialize)]
struct BranchEnvelope {
    branch: BranchRecord,
}

impl ApiClient {
    /// Creates a branch and asks the control plane to provision a
    /// default read-only compute endpoint atomically with it. The
    /// response is still a single branch record.
    pub async fn create_branch(&self, project_id: &str, name: &str) -> ApiResult<BranchRecord> {
        let body = json!({
            "branch": { "name": name },
            "endpoints": [{ "type": "read_only" }],
        });
        let envelope: BranchEnvelope = self
            .post(&format!("/projects/{project_id}/branches"), &body)
            .await?;
        Ok(envelope.branch)
    }

    /// The item path accepts the branch id or its name as the key.
    pub async fn get_branch(&self, project_id: &str, branch_id: &str) -> ApiResult<BranchRecord> {
        let envelope: BranchEnvelope = self
            .get(&format!("/projects/{project_id}/branches/{branch_id}"))
            .await?;
        Ok(envelope.branch)
    }

    pub async fn update_branch(
        &self,
        project_id: &str,
        branch_id: &str,
        name: &str,
    ) -> ApiResult<BranchRecord> {
        let body = json!({ "branch": { "name": name } });
        let envelope: BranchEnvelope = self
            .patch(&format!("/projects/{project_id}/branches/{branch_id}"), &body)
            .await?;
        Ok(envelope.branch)
    }

    pub async fn delete_branch(&self, project_id: &str, branch_id: &str) -> ApiResult<()> {
        self.delete(&format!("/projects/{project_id}/branches/{branch_id}"))
            .await
    }
}
