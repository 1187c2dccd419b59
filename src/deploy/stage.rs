// ABOUTME: Named pipeline stages in execution order.
// ABOUTME: Used in error messages, logs, and the run report.

use std::fmt;

/// A step of the deployment pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    LoadConfig,
    RuntimePreflight,
    Image,
    Session,
    ResourceGroup,
    Registry,
    RegistryLogin,
    Tag,
    Scan,
    Push,
    ListRepositories,
    Container,
    RegistryAdmin,
    Credentials,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::LoadConfig => "load configuration",
            Stage::RuntimePreflight => "container runtime check",
            Stage::Image => "local image",
            Stage::Session => "Azure session",
            Stage::ResourceGroup => "resource group",
            Stage::Registry => "container registry",
            Stage::RegistryLogin => "registry login",
            Stage::Tag => "tag image",
            Stage::Scan => "vulnerability scan",
            Stage::Push => "push image",
            Stage::ListRepositories => "list repositories",
            Stage::Container => "container instance",
            Stage::RegistryAdmin => "enable registry admin",
            Stage::Credentials => "registry credentials",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
