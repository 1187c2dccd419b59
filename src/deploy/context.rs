// ABOUTME: Mutable working state owned by one pipeline run.
// ABOUTME: Wraps the immutable config plus the effective container name.

use crate::config::DeploymentConfig;
use crate::types::ContainerName;

/// State threaded through the pipeline stages.
///
/// The effective container name starts as the configured one and changes at
/// most once, when the operator picks a new name after a collision.
#[derive(Debug, Clone)]
pub struct DeploymentContext {
    config: DeploymentConfig,
    container_name: ContainerName,
    renamed_from: Option<ContainerName>,
}

impl DeploymentContext {
    pub fn new(config: DeploymentConfig) -> Self {
        let container_name = config.container_name.clone();
        Self {
            config,
            container_name,
            renamed_from: None,
        }
    }

    pub fn config(&self) -> &DeploymentConfig {
        &self.config
    }

    /// Container name that will actually be created.
    pub fn container_name(&self) -> &ContainerName {
        &self.container_name
    }

    /// Configured name, if the operator renamed the container.
    pub fn renamed_from(&self) -> Option<&ContainerName> {
        self.renamed_from.as_ref()
    }

    pub fn rename_container(&mut self, name: ContainerName) {
        let previous = std::mem::replace(&mut self.container_name, name);
        self.renamed_from.get_or_insert(previous);
    }
}
