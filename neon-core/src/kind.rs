//! Resource kinds managed by the provider

use std::fmt;

/// Category of remotely managed object.
///
/// Branch belongs to a Project; Endpoint, Database, and Role belong to
/// a Branch within a Project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Project,
    Branch,
    Endpoint,
    Database,
    Role,
}

impl ResourceKind {
    /// Every kind the provider manages.
    pub const ALL: [ResourceKind; 5] = [
        ResourceKind::Project,
        ResourceKind::Branch,
        ResourceKind::Endpoint,
        ResourceKind::Database,
        ResourceKind::Role,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Project => "project",
            ResourceKind::Branch => "branch",
            ResourceKind::Endpoint => "endpoint",
            ResourceKind::Database => "database",
            ResourceKind::Role => "role",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
