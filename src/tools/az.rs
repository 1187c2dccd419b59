// ABOUTME: Azure CLI command lines for session, resource group, registry, and container.
// ABOUTME: Fixed provisioning parameters (SKU, shape, port) live here.

use crate::process::CommandLine;
use crate::types::{ContainerName, ImageRef, RegistryName};

const AZ: &str = "az";

/// Service tier for newly created registries.
pub const REGISTRY_SKU: &str = "Basic";
/// vCPUs requested for the container instance.
pub const CONTAINER_CPU: u32 = 1;
/// Memory in GiB requested for the container instance.
pub const CONTAINER_MEMORY_GB: u32 = 1;
/// The single port published by the container instance.
pub const CONTAINER_PORT: u16 = 5000;

pub fn account_show() -> CommandLine {
    CommandLine::new(AZ).args(["account", "show"])
}

pub fn login() -> CommandLine {
    CommandLine::new(AZ).arg("login").inherit_stdio()
}

pub fn group_show(resource_group: &str) -> CommandLine {
    CommandLine::new(AZ).args(["group", "show", "--name", resource_group])
}

pub fn group_create(resource_group: &str, location: &str) -> CommandLine {
    CommandLine::new(AZ).args([
        "group",
        "create",
        "--name",
        resource_group,
        "--location",
        location,
    ])
}

pub fn acr_show(registry: &RegistryName) -> CommandLine {
    CommandLine::new(AZ).args(["acr", "show", "--name", registry.as_str()])
}

pub fn acr_create(registry: &RegistryName, resource_group: &str) -> CommandLine {
    CommandLine::new(AZ).args([
        "acr",
        "create",
        "--resource-group",
        resource_group,
        "--name",
        registry.as_str(),
        "--sku",
        REGISTRY_SKU,
    ])
}

pub fn acr_login(registry: &RegistryName) -> CommandLine {
    CommandLine::new(AZ)
        .args(["acr", "login", "--name", registry.as_str()])
        .inherit_stdio()
}

pub fn acr_repository_list(registry: &RegistryName) -> CommandLine {
    CommandLine::new(AZ).args([
        "acr",
        "repository",
        "list",
        "--name",
        registry.as_str(),
        "--output",
        "table",
    ])
}

pub fn acr_enable_admin(registry: &RegistryName) -> CommandLine {
    CommandLine::new(AZ).args([
        "acr",
        "update",
        "--name",
        registry.as_str(),
        "--admin-enabled",
        "true",
    ])
}

pub fn acr_credential_username(registry: &RegistryName) -> CommandLine {
    acr_credential_query(registry, "username")
}

pub fn acr_credential_password(registry: &RegistryName) -> CommandLine {
    acr_credential_query(registry, "passwords[0].value")
}

fn acr_credential_query(registry: &RegistryName, query: &str) -> CommandLine {
    CommandLine::new(AZ).args([
        "acr",
        "credential",
        "show",
        "--name",
        registry.as_str(),
        "--query",
        query,
        "--output",
        "tsv",
    ])
}

pub fn container_show(resource_group: &str, container: &ContainerName) -> CommandLine {
    CommandLine::new(AZ).args([
        "container",
        "show",
        "--resource-group",
        resource_group,
        "--name",
        container.as_str(),
    ])
}

/// Everything `az container create` needs besides the fixed shape.
#[derive(Debug)]
pub struct ContainerCreate<'a> {
    pub resource_group: &'a str,
    pub location: &'a str,
    pub name: &'a ContainerName,
    pub image: &'a ImageRef,
    pub registry: &'a RegistryName,
    pub username: &'a str,
    pub password: &'a str,
}

pub fn container_create(request: &ContainerCreate<'_>) -> CommandLine {
    CommandLine::new(AZ)
        .args(["container", "create", "--resource-group", request.resource_group])
        .args(["--name", request.name.as_str()])
        .arg("--image")
        .arg(request.image.to_string())
        .arg("--cpu")
        .arg(CONTAINER_CPU.to_string())
        .arg("--memory")
        .arg(CONTAINER_MEMORY_GB.to_string())
        .arg("--registry-login-server")
        .arg(request.registry.login_server())
        .args(["--registry-username", request.username])
        .arg("--registry-password")
        .secret_arg(request.password)
        .arg("--dns-name-label")
        .arg(request.name.dns_label())
        .args(["--ip-address", "Public"])
        .args(["--location", request.location])
        .arg("--ports")
        .arg(CONTAINER_PORT.to_string())
}
