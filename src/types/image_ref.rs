// ABOUTME: Container image reference built from an image name and tag.
// ABOUTME: Renders local (`name:tag`) and registry-qualified (`host/name:tag`) forms.

use std::fmt;
use thiserror::Error;

use super::RegistryName;

#[derive(Debug, Error)]
pub enum ParseImageRefError {
    #[error("image name cannot be empty")]
    EmptyName,

    #[error("image tag cannot be empty")]
    EmptyTag,

    #[error("invalid character in image name: {0}")]
    InvalidNameChar(char),

    #[error("invalid character in image tag: {0}")]
    InvalidTagChar(char),

    #[error("image tag exceeds maximum length of 128 characters")]
    TagTooLong,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef {
    registry: Option<String>,
    name: String,
    tag: String,
}

impl ImageRef {
    /// Build a local image reference from separately configured name and tag.
    pub fn new(name: &str, tag: &str) -> Result<Self, ParseImageRefError> {
        let name = name.trim();
        let tag = tag.trim();

        if name.is_empty() {
            return Err(ParseImageRefError::EmptyName);
        }
        if tag.is_empty() {
            return Err(ParseImageRefError::EmptyTag);
        }

        for c in name.chars() {
            if !c.is_ascii_lowercase()
                && !c.is_ascii_digit()
                && c != '/'
                && c != '.'
                && c != '-'
                && c != '_'
            {
                return Err(ParseImageRefError::InvalidNameChar(c));
            }
        }

        if tag.len() > 128 {
            return Err(ParseImageRefError::TagTooLong);
        }
        for c in tag.chars() {
            if !c.is_ascii_alphanumeric() && c != '.' && c != '-' && c != '_' {
                return Err(ParseImageRefError::InvalidTagChar(c));
            }
        }

        Ok(Self {
            registry: None,
            name: name.to_string(),
            tag: tag.to_string(),
        })
    }

    /// The same image qualified with the registry's login server.
    pub fn in_registry(&self, registry: &RegistryName) -> Self {
        Self {
            registry: Some(registry.login_server()),
            ..self.clone()
        }
    }

    pub fn registry(&self) -> Option<&str> {
        self.registry.as_deref()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ref registry) = self.registry {
            write!(f, "{}/", registry)?;
        }
        write!(f, "{}:{}", self.name, self.tag)
    }
}
