// ABOUTME: Validated domain types for deployment parameters.
// ABOUTME: Image references, registry names, and container names.

mod container_name;
mod image_ref;
mod registry_name;

pub use container_name::{ContainerName, ContainerNameError, DNS_LABEL_PREFIX};
pub use image_ref::{ImageRef, ParseImageRefError};
pub use registry_name::{REGISTRY_DOMAIN, RegistryName, RegistryNameError};
