// ABOUTME: Process spawn error types with SNAFU pattern.
// ABOUTME: A non-zero exit is not an error here; only failing to run the program is.

use snafu::Snafu;

/// Failure to execute a program at all (missing binary, broken pipe).
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum ProcessError {
    #[snafu(display("failed to start `{program}`: {source}"))]
    Spawn {
        program: String,
        source: std::io::Error,
    },

    #[snafu(display("failed while waiting for `{program}`: {source}"))]
    Wait {
        program: String,
        source: std::io::Error,
    },
}

impl ProcessError {
    /// Program that could not be run.
    pub fn program(&self) -> &str {
        match self {
            ProcessError::Spawn { program, .. } | ProcessError::Wait { program, .. } => program,
        }
    }
}
