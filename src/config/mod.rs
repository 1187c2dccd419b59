// ABOUTME: Deployment configuration loaded from environment variables.
// ABOUTME: Reads an optional dotenv file first, then validates the six required parameters.

use std::path::Path;

use crate::error::{Error, Result};
use crate::types::{ContainerName, ImageRef, RegistryName};

pub const ENV_FILENAME: &str = ".env";

pub const RESOURCE_GROUP: &str = "RESOURCE_GROUP";
pub const LOCATION: &str = "LOCATION";
pub const ACR_NAME: &str = "ACR_NAME";
pub const IMAGE_NAME: &str = "IMAGE_NAME";
pub const CONTAINER_NAME: &str = "CONTAINER_NAME";
pub const IMAGE_TAG: &str = "IMAGE_TAG";

/// Required variables, in the order they are checked.
pub const REQUIRED_VARS: [&str; 6] = [
    RESOURCE_GROUP,
    LOCATION,
    ACR_NAME,
    IMAGE_NAME,
    CONTAINER_NAME,
    IMAGE_TAG,
];

/// Immutable deployment parameters, validated once at load time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentConfig {
    pub resource_group: String,
    pub location: String,
    pub registry: RegistryName,
    pub image: ImageRef,
    pub container_name: ContainerName,
}

impl DeploymentConfig {
    /// Load from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using an arbitrary variable lookup.
    ///
    /// Presence of every variable is checked before any value is parsed, so
    /// the first missing one in `REQUIRED_VARS` order is the one reported.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let resource_group = require(&lookup, RESOURCE_GROUP)?;
        let location = require(&lookup, LOCATION)?;
        let acr_name = require(&lookup, ACR_NAME)?;
        let image_name = require(&lookup, IMAGE_NAME)?;
        let container_name = require(&lookup, CONTAINER_NAME)?;
        let image_tag = require(&lookup, IMAGE_TAG)?;

        let registry = RegistryName::new(&acr_name)
            .map_err(|e| Error::InvalidConfig(format!("{ACR_NAME}: {e}")))?;
        let image = ImageRef::new(&image_name, &image_tag)
            .map_err(|e| Error::InvalidConfig(format!("{IMAGE_NAME}/{IMAGE_TAG}: {e}")))?;
        let container_name = ContainerName::new(&container_name)
            .map_err(|e| Error::InvalidConfig(format!("{CONTAINER_NAME}: {e}")))?;

        Ok(Self {
            resource_group,
            location,
            registry,
            image,
            container_name,
        })
    }

    /// The image as it is published to the registry.
    pub fn registry_image(&self) -> ImageRef {
        self.image.in_registry(&self.registry)
    }
}

fn require<F>(lookup: &F, key: &'static str) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or(Error::MissingEnvVar(key))
}

/// Load a dotenv file into the process environment.
///
/// With no explicit path, `.env` in `dir` is used when present. An explicit
/// path that does not exist is an error. Variables already set in the
/// environment are left untouched.
pub fn load_env_file(dir: &Path, explicit: Option<&Path>) -> Result<()> {
    let path = match explicit {
        Some(path) if !path.is_file() => {
            return Err(Error::EnvFileNotFound(path.to_path_buf()));
        }
        Some(path) => path.to_path_buf(),
        None => {
            let path = dir.join(ENV_FILENAME);
            if !path.is_file() {
                return Ok(());
            }
            path
        }
    };

    dotenvy::from_path(&path)?;
    tracing::debug!(path = %path.display(), "loaded env file");
    Ok(())
}
