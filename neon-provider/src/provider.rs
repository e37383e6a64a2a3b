//! Provider entry point

use neon_core::{LifecycleResult, ResourceKind};

use crate::config::ProviderConfig;
use crate::resources::{Branch, Database, Endpoint, Project, Role};

/// Host-facing provider: validates configuration once, then hands out
/// resource mappers wired to the control plane.
#[derive(Debug, Clone)]
pub struct NeonProvider {
    config: ProviderConfig,
}

impl NeonProvider {
    pub fn new(config: ProviderConfig) -> LifecycleResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Kinds this provider manages.
    pub fn resource_kinds(&self) -> [ResourceKind; 5] {
        ResourceKind::ALL
    }

    pub fn projects(&self) -> LifecycleResult<Project> {
        Ok(Project::new(self.config.client()?))
    }

    pub fn branches(&self) -> LifecycleResult<Branch> {
        Ok(Branch::new(self.config.client()?).with_existing_policy(self.config.existing_branch))
    }

    pub fn endpoints(&self) -> LifecycleResult<Endpoint> {
        Ok(Endpoint::new(self.config.client()?))
    }

    pub fn databases(&self) -> LifecycleResult<Database> {
        Ok(Database::new(self.config.client()?))
    }

    pub fn roles(&self) -> LifecycleResult<Role> {
        Ok(Role::new(self.config.client()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction_validates_config() {
        assert!(NeonProvider::new(ProviderConfig::new("")).is_err());
        assert!(NeonProvider::new(ProviderConfig::new("neon_key_1234")).is_ok());
    }

    #[test]
    fn test_registry_lists_all_five_kinds() {
        let provider = NeonProvider::new(ProviderConfig::new("neon_key_1234")).unwrap();
        assert_eq!(provider.resource_kinds(), ResourceKind::ALL);
    }
}
