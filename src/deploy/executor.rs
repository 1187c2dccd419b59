// ABOUTME: Shared handles every stage needs: process runner, operator, and output.
// ABOUTME: Maps non-zero exits and declined confirmations onto fatal errors.

use crate::error::{Error, Result};
use crate::interaction::Interaction;
use crate::output::Output;
use crate::process::{CommandLine, ProcessOutput, ProcessRunner};

use super::Stage;

/// Borrowed collaborators for one pipeline run.
pub struct Executor<'a, R: ?Sized, I: ?Sized> {
    pub runner: &'a R,
    pub interaction: &'a I,
    pub output: &'a Output,
}

impl<'a, R, I> Executor<'a, R, I>
where
    R: ProcessRunner + ?Sized,
    I: Interaction + ?Sized,
{
    pub fn new(runner: &'a R, interaction: &'a I, output: &'a Output) -> Self {
        Self {
            runner,
            interaction,
            output,
        }
    }

    /// Run a command; any exit status is returned to the caller.
    pub async fn run(&self, stage: Stage, command: &CommandLine) -> Result<ProcessOutput> {
        self.runner
            .run(command)
            .await
            .map_err(|source| Error::Process { stage, source })
    }

    /// Run a command whose failure has no recovery path.
    pub async fn run_checked(&self, stage: Stage, command: &CommandLine) -> Result<ProcessOutput> {
        let output = self.run(stage, command).await?;
        if output.success() {
            Ok(output)
        } else {
            Err(Error::ToolFailed {
                stage,
                command: command.to_string(),
                exit_code: output.exit_code,
                stderr: output.stderr,
            })
        }
    }

    /// Ask a gating question; a "no" ends the run with `declined`.
    pub async fn gate(&self, prompt: &str, declined: impl Into<String>) -> Result<()> {
        if self.interaction.confirm(prompt).await? {
            Ok(())
        } else {
            let declined = declined.into();
            tracing::info!(reason = %declined, "operator declined");
            Err(Error::Declined(declined))
        }
    }
}
