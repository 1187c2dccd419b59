// ABOUTME: The ensure-resource pattern: probe, confirm if absent, create.
// ABOUTME: An existing resource is never touched again, which makes re-runs idempotent.

use crate::error::Result;
use crate::interaction::Interaction;
use crate::process::{CommandLine, ProcessRunner};

use super::{Executor, Stage};

/// Outcome of an existence check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeResult {
    Exists,
    Absent,
    /// The probe could not run at all.
    ProbeFailed(String),
}

/// What an ensure step did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ensured {
    Skipped,
    Created,
}

/// Run an existence probe.
///
/// The tools report "not found" through a non-zero exit, which cannot be told
/// apart from other failures, so any non-zero exit is `Absent`. Only a probe
/// that fails to start is `ProbeFailed`; callers treat both the same way.
pub async fn probe<R>(runner: &R, command: &CommandLine) -> ProbeResult
where
    R: ProcessRunner + ?Sized,
{
    match runner.run(command).await {
        Ok(output) if output.success() => ProbeResult::Exists,
        Ok(output) => {
            tracing::debug!(
                command = %command,
                exit_code = ?output.exit_code,
                "probe reported absent"
            );
            ProbeResult::Absent
        }
        Err(e) => {
            tracing::warn!(command = %command, error = %e, "probe failed to run");
            ProbeResult::ProbeFailed(e.to_string())
        }
    }
}

/// A resource that is created on demand.
#[derive(Debug, Clone)]
pub struct EnsureResource {
    pub stage: Stage,
    /// Human-readable identity, e.g. `resource group rg-demo`.
    pub description: String,
    pub probe: CommandLine,
    pub create: CommandLine,
    /// Question asked before creating.
    pub prompt: String,
}

impl EnsureResource {
    pub async fn ensure<R, I>(&self, exec: &Executor<'_, R, I>) -> Result<Ensured>
    where
        R: ProcessRunner + ?Sized,
        I: Interaction + ?Sized,
    {
        exec.output.info(&format!("Checking {}...", self.description));

        match probe(exec.runner, &self.probe).await {
            ProbeResult::Exists => {
                exec.output.success(&format!("Found {}.", self.description));
                return Ok(Ensured::Skipped);
            }
            ProbeResult::Absent => {
                exec.output.warning(&format!("Not found: {}.", self.description));
            }
            ProbeResult::ProbeFailed(reason) => {
                exec.output.warning(&format!("Could not check {}: {reason}", self.description));
            }
        }

        exec.gate(
            &self.prompt,
            format!("Deployment cancelled: {} is required.", self.description),
        )
        .await?;

        exec.output.info(&format!("Creating {}...", self.description));
        exec.run_checked(self.stage, &self.create).await?;
        exec.output.success(&format!("Created {}.", self.description));
        tracing::info!(stage = %self.stage, "resource created");

        Ok(Ensured::Created)
    }
}
