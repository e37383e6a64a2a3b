//! Provider configuration
//!
//! Configuration is an explicit value handed to constructors; mappers
//! never reach for ambient or process-global state.

use neon_api::{ApiClient, DEFAULT_BASE_URL};
use neon_core::{LifecycleError, LifecycleResult};

/// What to do when branch creation collides with an existing branch
/// of the same name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExistingBranchPolicy {
    /// Propagate the conflict as a create failure.
    #[default]
    Reject,
    /// Fetch the existing branch by name and adopt it.
    AdoptExisting,
}

/// Provider-level configuration supplied by the host.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// Bearer token for the control-plane API. Required.
    pub api_key: String,
    /// Control-plane origin. Overridable for tests.
    pub base_url: String,
    /// Idempotent-create policy for branches.
    pub existing_branch: ExistingBranchPolicy,
}

impl ProviderConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            existing_branch: ExistingBranchPolicy::default(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_existing_branch(mut self, policy: ExistingBranchPolicy) -> Self {
        self.existing_branch = policy;
        self
    }

    pub fn validate(&self) -> LifecycleResult<()> {
        if self.api_key.is_empty() {
            return Err(LifecycleError::invalid_config("apiKey is required"));
        }
        Ok(())
    }

    /// Fresh client per mapper; the transport holds no shared state.
    pub(crate) fn client(&self) -> LifecycleResult<ApiClient> {
        let client = ApiClient::new(&self.api_key)
            .map_err(|e| LifecycleError::invalid_config(e.to_string()))?;
        Ok(client.with_base_url(&self.base_url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_api_key_is_rejected() {
        let error = ProviderConfig::new("").validate().unwrap_err();
        assert_eq!(
            error.to_string(),
            "invalid provider configuration: apiKey is required"
        );
    }

    #[test]
    fn test_defaults() {
        let config = ProviderConfig::new("neon_api_key_12345678");
        assert!(config.validate().is_ok());
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.existing_branch, ExistingBranchPolicy::Reject);
    }
}
