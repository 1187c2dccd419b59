// ABOUTME: Container instance deployment with name-collision handling.
// ABOUTME: Existing instances are never overwritten; the operator may pick one new name.

use std::fmt;

use crate::error::{Error, Result};
use crate::interaction::Interaction;
use crate::process::ProcessRunner;
use crate::tools::az::{self, ContainerCreate};
use crate::types::{ContainerName, RegistryName};

use super::{DeploymentContext, Executor, ProbeResult, Stage, probe};

/// Result of the container stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContainerOutcome {
    /// A new instance was created.
    Created { name: ContainerName, fqdn: String },
    /// An instance with this name already existed and the operator chose
    /// not to deploy under another name.
    Kept { name: ContainerName },
}

impl ContainerOutcome {
    pub fn name(&self) -> &ContainerName {
        match self {
            ContainerOutcome::Created { name, .. } | ContainerOutcome::Kept { name } => name,
        }
    }
}

/// Registry admin credentials, fetched right before container creation.
pub struct RegistryCredentials {
    pub username: String,
    pub password: String,
}

impl RegistryCredentials {
    pub async fn fetch<R, I>(exec: &Executor<'_, R, I>, registry: &RegistryName) -> Result<Self>
    where
        R: ProcessRunner + ?Sized,
        I: Interaction + ?Sized,
    {
        let username = read_credential(exec, &az::acr_credential_username(registry)).await?;
        let password = read_credential(exec, &az::acr_credential_password(registry)).await?;
        Ok(Self { username, password })
    }
}

impl fmt::Debug for RegistryCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistryCredentials")
            .field("username", &self.username)
            .field("password", &"****")
            .finish()
    }
}

async fn read_credential<R, I>(
    exec: &Executor<'_, R, I>,
    command: &crate::process::CommandLine,
) -> Result<String>
where
    R: ProcessRunner + ?Sized,
    I: Interaction + ?Sized,
{
    let output = exec.run_checked(Stage::Credentials, command).await?;
    let value = output.stdout_trimmed();
    if value.is_empty() {
        return Err(Error::ToolFailed {
            stage: Stage::Credentials,
            command: command.to_string(),
            exit_code: output.exit_code,
            stderr: "empty value returned".to_string(),
        });
    }
    Ok(value.to_string())
}

/// Create the container instance unless one with the same name exists.
///
/// On a collision the operator can supply one new name; that name is not
/// probed again. Declining the rename ends the stage without error.
pub async fn deploy<R, I>(
    exec: &Executor<'_, R, I>,
    ctx: &mut DeploymentContext,
) -> Result<ContainerOutcome>
where
    R: ProcessRunner + ?Sized,
    I: Interaction + ?Sized,
{
    let group = ctx.config().resource_group.clone();
    let name = ctx.container_name().clone();
    exec.output.info(&format!(
        "Checking whether container {name} exists in resource group {group}..."
    ));

    match probe(exec.runner, &az::container_show(&group, &name)).await {
        ProbeResult::Exists => {
            exec.output.info(&format!("Container {name} already exists."));
            if !exec.interaction.confirm("Deploy the container under a different name?").await? {
                exec.output.info(&format!("Keeping existing container {name}."));
                return Ok(ContainerOutcome::Kept { name });
            }

            let answer = exec.interaction.prompt("New container name: ").await?;
            let renamed = ContainerName::new(&answer)
                .map_err(|e| Error::InvalidConfig(format!("new container name: {e}")))?;
            tracing::info!(from = %name, to = %renamed, "container renamed");
            ctx.rename_container(renamed);
        }
        ProbeResult::Absent | ProbeResult::ProbeFailed(_) => {
            exec.output.info(&format!("Container {name} does not exist. Creating it..."));
        }
    }

    create(exec, ctx).await
}

async fn create<R, I>(
    exec: &Executor<'_, R, I>,
    ctx: &DeploymentContext,
) -> Result<ContainerOutcome>
where
    R: ProcessRunner + ?Sized,
    I: Interaction + ?Sized,
{
    let config = ctx.config();
    let registry = &config.registry;
    let name = ctx.container_name();

    exec.output.info(&format!("Enabling admin access on registry {registry}..."));
    exec.run_checked(Stage::RegistryAdmin, &az::acr_enable_admin(registry)).await?;
    exec.output.success(&format!("Admin access enabled on registry {registry}."));

    let credentials = RegistryCredentials::fetch(exec, registry).await?;
    let image = config.registry_image();

    exec.output.info(&format!("Creating container {name}..."));
    let command = az::container_create(&ContainerCreate {
        resource_group: &config.resource_group,
        location: &config.location,
        name,
        image: &image,
        registry,
        username: &credentials.username,
        password: &credentials.password,
    });
    exec.run_checked(Stage::Container, &command).await?;

    let fqdn = name.fqdn(&config.location);
    exec.output.success(&format!("Container {name} created."));
    Ok(ContainerOutcome::Created {
        name: name.clone(),
        fqdn,
    })
}
