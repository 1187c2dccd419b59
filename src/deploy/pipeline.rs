// ABOUTME: Fixed-order pipeline driver and its run report.
// ABOUTME: Every stage returns a Result; the first error ends the run.

use crate::config::DeploymentConfig;
use crate::diagnostics::{Diagnostics, Warning};
use crate::error::Result;
use crate::interaction::Interaction;
use crate::output::Output;
use crate::process::ProcessRunner;
use crate::tools::az::CONTAINER_PORT;
use crate::types::{ContainerName, ImageRef};

use super::{ContainerOutcome, DeploymentContext, Ensured, Executor, Stage};
use super::{container, image, provision};

/// Actions announced before the operator confirms the run.
pub const CHECKLIST: [&str; 6] = [
    "Load the required environment variables.",
    "Check that Docker is running and the image exists, building it if needed.",
    "Make sure the Azure session, resource group, and container registry exist.",
    "Tag the image and scan it for vulnerabilities.",
    "Push the image to Azure Container Registry.",
    "Create the Azure container instance.",
];

const BANNER: &str = "==================== AZURE CONTAINER DEPLOY ====================";

/// What a completed run did.
#[derive(Debug)]
pub struct DeployReport {
    /// Registry reference that was pushed.
    pub image: ImageRef,
    /// Outcome of each ensure step, in execution order.
    pub ensured: Vec<(Stage, Ensured)>,
    pub container: ContainerOutcome,
    /// Configured container name, when the operator deployed under another.
    pub renamed_from: Option<ContainerName>,
    pub warnings: Vec<Warning>,
}

impl DeployReport {
    pub fn ensured(&self, stage: Stage) -> Option<Ensured> {
        self.ensured
            .iter()
            .find(|(s, _)| *s == stage)
            .map(|(_, outcome)| *outcome)
    }

    /// Public URL of a newly created container.
    pub fn url(&self) -> Option<String> {
        match &self.container {
            ContainerOutcome::Created { fqdn, .. } => {
                Some(format!("http://{fqdn}:{CONTAINER_PORT}"))
            }
            ContainerOutcome::Kept { .. } => None,
        }
    }
}

/// Drives one deployment from confirmation to container creation.
pub struct Pipeline<'a, R: ?Sized, I: ?Sized> {
    exec: Executor<'a, R, I>,
}

impl<'a, R, I> Pipeline<'a, R, I>
where
    R: ProcessRunner + ?Sized,
    I: Interaction + ?Sized,
{
    pub fn new(runner: &'a R, interaction: &'a I, output: &'a Output) -> Self {
        Self {
            exec: Executor::new(runner, interaction, output),
        }
    }

    /// Run every stage in order.
    ///
    /// `load` is called after the operator confirms and before any external
    /// command, so a configuration error never leaves side effects behind.
    pub async fn run<F>(&self, load: F) -> Result<DeployReport>
    where
        F: FnOnce() -> Result<DeploymentConfig>,
    {
        let exec = &self.exec;

        self.confirm_intent().await?;

        exec.output.info(BANNER);
        tracing::info!(stage = %Stage::LoadConfig, "starting");
        let mut ctx = DeploymentContext::new(load()?);
        let mut diag = Diagnostics::default();
        let mut ensured = Vec::new();

        image::preflight(exec).await?;
        ensured.push((Stage::Image, image::ensure_image(exec, &ctx).await?));
        ensured.push((Stage::Session, provision::ensure_session(exec).await?));
        ensured.push((
            Stage::ResourceGroup,
            provision::ensure_resource_group(exec, &ctx).await?,
        ));
        ensured.push((
            Stage::Registry,
            provision::ensure_registry(exec, &ctx).await?,
        ));
        provision::login_registry(exec, &ctx, &mut diag).await;

        let target = image::tag(exec, &ctx).await?;
        image::scan_gate(exec, &ctx).await?;
        image::push(exec, &target).await?;
        image::list_repositories(exec, &ctx, &mut diag).await;

        let container = container::deploy(exec, &mut ctx).await?;

        let report = DeployReport {
            image: target,
            ensured,
            container,
            renamed_from: ctx.renamed_from().cloned(),
            warnings: diag.into_warnings(),
        };
        self.summarize(&report);
        Ok(report)
    }

    async fn confirm_intent(&self) -> Result<()> {
        let output = self.exec.output;
        output.info("This will perform the following actions:");
        for (i, step) in CHECKLIST.iter().enumerate() {
            output.info(&format!("    {}. {step}", i + 1));
        }
        self.exec.gate("Continue with the deployment?", "Deployment cancelled.").await?;
        output.success("Deployment confirmed.");
        Ok(())
    }

    fn summarize(&self, report: &DeployReport) {
        let output = self.exec.output;
        for warning in &report.warnings {
            output.warning(&warning.message);
        }
        output.info(BANNER);
        match &report.container {
            ContainerOutcome::Created { name, .. } => {
                if let Some(original) = &report.renamed_from {
                    output.info(&format!(
                        "Container {original} already existed; deployed as {name}."
                    ));
                }
                output.success(&format!("Deployment complete. Container {name} is running."));
                if let Some(url) = report.url() {
                    output.info(&format!("Available at {url}"));
                }
            }
            ContainerOutcome::Kept { name } => {
                output.success(&format!(
                    "Deployment complete. Image {} pushed; container {name} left unchanged.",
                    report.image
                ));
            }
        }
    }
}
