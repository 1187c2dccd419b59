// ABOUTME: Azure Container Instances name validation.
// ABOUTME: Names follow RFC 1123 label rules and derive the public DNS label.

use std::fmt;
use thiserror::Error;

/// Prefix joined to the container name to form its DNS label.
pub const DNS_LABEL_PREFIX: &str = "dns-";

#[derive(Debug, Error)]
pub enum ContainerNameError {
    #[error("container name cannot be empty")]
    Empty,

    #[error("container name exceeds maximum length of 63 characters")]
    TooLong,

    #[error("container name cannot start with a hyphen")]
    StartsWithHyphen,

    #[error("container name cannot end with a hyphen")]
    EndsWithHyphen,

    #[error("container name must be lowercase")]
    NotLowercase,

    #[error("invalid character in container name: '{0}'")]
    InvalidChar(char),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContainerName(String);

impl ContainerName {
    pub fn new(value: &str) -> Result<Self, ContainerNameError> {
        let value = value.trim();
        if value.is_empty() {
            return Err(ContainerNameError::Empty);
        }

        if value.len() > 63 {
            return Err(ContainerNameError::TooLong);
        }

        if value.starts_with('-') {
            return Err(ContainerNameError::StartsWithHyphen);
        }

        if value.ends_with('-') {
            return Err(ContainerNameError::EndsWithHyphen);
        }

        for c in value.chars() {
            if c.is_ascii_uppercase() {
                return Err(ContainerNameError::NotLowercase);
            }
            if !c.is_ascii_lowercase() && !c.is_ascii_digit() && c != '-' {
                return Err(ContainerNameError::InvalidChar(c));
            }
        }

        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// DNS label requested for the container's public IP: `dns-<name>`.
    pub fn dns_label(&self) -> String {
        format!("{DNS_LABEL_PREFIX}{}", self.0)
    }

    /// Public FQDN Azure assigns to the DNS label in the given location.
    pub fn fqdn(&self, location: &str) -> String {
        format!("{}.{}.azurecontainer.io", self.dns_label(), location)
    }
}

impl fmt::Display for ContainerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
