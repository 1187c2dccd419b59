// ABOUTME: ProcessRunner trait and the tokio-backed system implementation.
// ABOUTME: Returns exit status and output; interpreting a non-zero status is up to the caller.

use async_trait::async_trait;
use snafu::ResultExt;
use tokio::process::Command;

use super::command::{CommandLine, Stdio};
use super::error::{ProcessError, SpawnSnafu, WaitSnafu};

/// Exit status and output of a finished command.
#[derive(Debug, Clone, Default)]
pub struct ProcessOutput {
    /// Exit code, `None` when the process was killed by a signal.
    pub exit_code: Option<i32>,
    /// Standard output (empty for inherited stdio).
    pub stdout: String,
    /// Standard error (empty for inherited stdio).
    pub stderr: String,
}

impl ProcessOutput {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }

    /// Trimmed stdout, as `az ... -o tsv` prints a trailing newline.
    pub fn stdout_trimmed(&self) -> &str {
        self.stdout.trim()
    }
}

/// Runs external commands to completion.
#[async_trait]
pub trait ProcessRunner: Send + Sync {
    async fn run(&self, command: &CommandLine) -> Result<ProcessOutput, ProcessError>;
}

/// Runs commands on the local machine.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner {
    stdout_to_stderr: bool,
}

impl SystemRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Route the stdout of inherited-stdio children to our stderr, leaving
    /// stdout to the caller's own output.
    pub fn stdout_to_stderr(mut self, enabled: bool) -> Self {
        self.stdout_to_stderr = enabled;
        self
    }
}

#[async_trait]
impl ProcessRunner for SystemRunner {
    async fn run(&self, command: &CommandLine) -> Result<ProcessOutput, ProcessError> {
        tracing::debug!(command = %command, "running");

        let mut cmd = Command::new(command.program());
        cmd.args(command.arguments());

        let output = match command.stdio() {
            Stdio::Capture => {
                let output = cmd
                    .stdin(std::process::Stdio::null())
                    .stdout(std::process::Stdio::piped())
                    .stderr(std::process::Stdio::piped())
                    .output()
                    .await
                    .context(SpawnSnafu {
                        program: command.program(),
                    })?;
                ProcessOutput {
                    exit_code: output.status.code(),
                    stdout: String::from_utf8_lossy(&output.stdout).to_string(),
                    stderr: String::from_utf8_lossy(&output.stderr).to_string(),
                }
            }
            Stdio::Inherit => {
                if self.stdout_to_stderr {
                    cmd.stdout(std::io::stderr());
                }
                let mut child = cmd.spawn().context(SpawnSnafu {
                    program: command.program(),
                })?;
                let status = child.wait().await.context(WaitSnafu {
                    program: command.program(),
                })?;
                ProcessOutput {
                    exit_code: status.code(),
                    ..Default::default()
                }
            }
        };

        tracing::debug!(
            command = %command,
            exit_code = ?output.exit_code,
            "finished"
        );

        Ok(output)
    }
}
