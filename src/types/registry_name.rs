// ABOUTME: Azure Container Registry name validation.
// ABOUTME: Derives the registry login server used to qualify image references.

use std::fmt;
use thiserror::Error;

/// Domain under which every Azure Container Registry is served.
pub const REGISTRY_DOMAIN: &str = "azurecr.io";

#[derive(Debug, Error)]
pub enum RegistryNameError {
    #[error("registry name cannot be empty")]
    Empty,

    #[error("registry name must be between 5 and 50 characters, got {0}")]
    InvalidLength(usize),

    #[error("invalid character in registry name: '{0}' (only lowercase letters and digits)")]
    InvalidChar(char),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RegistryName(String);

impl RegistryName {
    pub fn new(value: &str) -> Result<Self, RegistryNameError> {
        let value = value.trim();
        if value.is_empty() {
            return Err(RegistryNameError::Empty);
        }

        if !(5..=50).contains(&value.len()) {
            return Err(RegistryNameError::InvalidLength(value.len()));
        }

        if let Some(c) = value
            .chars()
            .find(|c| !c.is_ascii_lowercase() && !c.is_ascii_digit())
        {
            return Err(RegistryNameError::InvalidChar(c));
        }

        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Login server host, e.g. `myacr.azurecr.io`.
    pub fn login_server(&self) -> String {
        format!("{}.{}", self.0, REGISTRY_DOMAIN)
    }
}

impl fmt::Display for RegistryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
