// ABOUTME: Local image lifecycle: runtime preflight, build, tag, scan gate, push, listing.
// ABOUTME: Only the build is confirm-gated as an ensure step; tag and push always run.

use crate::diagnostics::{Diagnostics, Warning};
use crate::error::Result;
use crate::interaction::Interaction;
use crate::process::ProcessRunner;
use crate::tools::{az, docker, grype};
use crate::types::ImageRef;

use super::{DeploymentContext, EnsureResource, Ensured, Executor, Stage};

/// Fail unless the container runtime daemon answers. There is nothing to
/// create here, so no confirmation is offered.
pub async fn preflight<R, I>(exec: &Executor<'_, R, I>) -> Result<()>
where
    R: ProcessRunner + ?Sized,
    I: Interaction + ?Sized,
{
    exec.output.info("Checking that Docker is running...");
    exec.run_checked(Stage::RuntimePreflight, &docker::info()).await?;
    exec.output.success("Docker is running.");
    Ok(())
}

pub async fn ensure_image<R, I>(
    exec: &Executor<'_, R, I>,
    ctx: &DeploymentContext,
) -> Result<Ensured>
where
    R: ProcessRunner + ?Sized,
    I: Interaction + ?Sized,
{
    let image = &ctx.config().image;
    EnsureResource {
        stage: Stage::Image,
        description: format!("Docker image {image}"),
        probe: docker::image_inspect(image),
        create: docker::build(image),
        prompt: format!("Image {image} does not exist. Build it from the current directory?"),
    }
    .ensure(exec)
    .await
}

/// Tag the local image with its registry reference and return that reference.
pub async fn tag<R, I>(exec: &Executor<'_, R, I>, ctx: &DeploymentContext) -> Result<ImageRef>
where
    R: ProcessRunner + ?Sized,
    I: Interaction + ?Sized,
{
    let config = ctx.config();
    let target = config.registry_image();
    exec.output.info(&format!("Tagging {} as {target}...", config.image));
    exec.run_checked(Stage::Tag, &docker::tag(&config.image, &target)).await?;
    exec.output.success(&format!("Tagged {target}."));
    Ok(target)
}

/// Scan the local image and ask whether to publish it anyway.
///
/// The scanner must run successfully, but its findings are not parsed: the
/// question is asked after every scan, including a clean one.
pub async fn scan_gate<R, I>(exec: &Executor<'_, R, I>, ctx: &DeploymentContext) -> Result<()>
where
    R: ProcessRunner + ?Sized,
    I: Interaction + ?Sized,
{
    let image = &ctx.config().image;
    exec.output.info(&format!("Scanning {image} for vulnerabilities with Grype..."));
    exec.run_checked(Stage::Scan, &grype::scan(image)).await?;

    exec.output.error("Review the vulnerabilities reported for the image above.");
    exec.gate(
        "Push the image to the registry despite the reported vulnerabilities?",
        "Deployment cancelled because of vulnerabilities in the image.",
    )
    .await?;
    exec.output.info("Continuing despite the reported vulnerabilities.");
    Ok(())
}

pub async fn push<R, I>(exec: &Executor<'_, R, I>, target: &ImageRef) -> Result<()>
where
    R: ProcessRunner + ?Sized,
    I: Interaction + ?Sized,
{
    exec.output.info(&format!("Pushing {target}..."));
    exec.run_checked(Stage::Push, &docker::push(target)).await?;
    exec.output.success(&format!("Pushed {target}."));
    Ok(())
}

/// Print the registry's repositories. Display only; failure is a warning.
pub async fn list_repositories<R, I>(
    exec: &Executor<'_, R, I>,
    ctx: &DeploymentContext,
    diag: &mut Diagnostics,
) where
    R: ProcessRunner + ?Sized,
    I: Interaction + ?Sized,
{
    let registry = &ctx.config().registry;
    exec.output.info(&format!("Repositories in registry {registry}:"));

    match exec
        .run_checked(Stage::ListRepositories, &az::acr_repository_list(registry))
        .await
    {
        Ok(output) => exec.output.block(&output.stdout),
        Err(e) => diag.warn(Warning::repository_listing(e.to_string())),
    }
}
