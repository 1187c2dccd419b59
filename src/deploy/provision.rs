// ABOUTME: Azure-side prerequisites: CLI session, resource group, and registry.
// ABOUTME: The group is ensured before the registry, which is created inside it.

use crate::diagnostics::{Diagnostics, Warning};
use crate::error::Result;
use crate::interaction::Interaction;
use crate::process::ProcessRunner;
use crate::tools::az;

use super::{DeploymentContext, EnsureResource, Ensured, Executor, Stage};

pub async fn ensure_session<R, I>(exec: &Executor<'_, R, I>) -> Result<Ensured>
where
    R: ProcessRunner + ?Sized,
    I: Interaction + ?Sized,
{
    EnsureResource {
        stage: Stage::Session,
        description: "Azure CLI session".to_string(),
        probe: az::account_show(),
        create: az::login(),
        prompt: "You are not logged in to Azure. Log in now?".to_string(),
    }
    .ensure(exec)
    .await
}

pub async fn ensure_resource_group<R, I>(
    exec: &Executor<'_, R, I>,
    ctx: &DeploymentContext,
) -> Result<Ensured>
where
    R: ProcessRunner + ?Sized,
    I: Interaction + ?Sized,
{
    let config = ctx.config();
    let group = &config.resource_group;
    EnsureResource {
        stage: Stage::ResourceGroup,
        description: format!("resource group {group}"),
        probe: az::group_show(group),
        create: az::group_create(group, &config.location),
        prompt: format!(
            "Resource group {group} does not exist. Create it in {}?",
            config.location
        ),
    }
    .ensure(exec)
    .await
}

pub async fn ensure_registry<R, I>(
    exec: &Executor<'_, R, I>,
    ctx: &DeploymentContext,
) -> Result<Ensured>
where
    R: ProcessRunner + ?Sized,
    I: Interaction + ?Sized,
{
    let config = ctx.config();
    let registry = &config.registry;
    EnsureResource {
        stage: Stage::Registry,
        description: format!("container registry {registry}"),
        probe: az::acr_show(registry),
        create: az::acr_create(registry, &config.resource_group),
        prompt: format!(
            "Container registry {registry} does not exist. Create it ({} tier)?",
            az::REGISTRY_SKU
        ),
    }
    .ensure(exec)
    .await
}

/// Log the local Docker client in to the registry. Repeating it is harmless,
/// so it is never gated; a failure is recorded and the push decides.
pub async fn login_registry<R, I>(
    exec: &Executor<'_, R, I>,
    ctx: &DeploymentContext,
    diag: &mut Diagnostics,
) where
    R: ProcessRunner + ?Sized,
    I: Interaction + ?Sized,
{
    let registry = &ctx.config().registry;
    exec.output.info(&format!("Logging in to registry {registry}..."));

    match exec
        .run_checked(Stage::RegistryLogin, &az::acr_login(registry))
        .await
    {
        Ok(_) => exec
            .output
            .success(&format!("Logged in to {}.", registry.login_server())),
        Err(e) => diag.warn(Warning::registry_login(e.to_string())),
    }
}
