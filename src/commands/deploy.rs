// ABOUTME: Deploy command implementation.
// ABOUTME: Wires the terminal, the system process runner, and the pipeline.

use azdeploy::config::DeploymentConfig;
use azdeploy::deploy::Pipeline;
use azdeploy::error::Result;
use azdeploy::interaction::TerminalInteraction;
use azdeploy::output::{Output, OutputMode};
use azdeploy::process::SystemRunner;

/// Run the full deployment against the real tools.
pub async fn deploy(mut output: Output) -> Result<()> {
    output.start_timer();
    let interaction = TerminalInteraction::new(output.clone());
    let runner = SystemRunner::new().stdout_to_stderr(output.mode() == OutputMode::Json);
    let pipeline = Pipeline::new(&runner, &interaction, &output);

    let report = pipeline.run(DeploymentConfig::from_env).await?;
    tracing::info!(
        image = %report.image,
        container = %report.container.name(),
        warnings = report.warnings.len(),
        "deployment finished"
    );
    Ok(())
}
