// ABOUTME: Application-wide error types for azdeploy.
// ABOUTME: Uses thiserror; every variant is fatal and maps to exit status 1.

use std::path::PathBuf;
use thiserror::Error;

use crate::deploy::Stage;
use crate::process::ProcessError;

#[derive(Debug, Error)]
pub enum Error {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(&'static str),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("env file not found: {0}")]
    EnvFileNotFound(PathBuf),

    #[error("failed to read env file: {0}")]
    EnvFile(#[from] dotenvy::Error),

    #[error("{0}")]
    Declined(String),

    #[error(
        "{stage} failed: `{command}` exited with {}{}",
        describe_exit(.exit_code),
        describe_stderr(.stderr)
    )]
    ToolFailed {
        stage: Stage,
        command: String,
        exit_code: Option<i32>,
        stderr: String,
    },

    #[error("{stage} failed: {source}")]
    Process {
        stage: Stage,
        #[source]
        source: ProcessError,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error kind for programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A required parameter is missing or malformed.
    Configuration,
    /// An external command failed at a step with no recovery path.
    UnrecoverableTool,
    /// The operator answered a confirmation negatively.
    UserDeclined,
    /// Terminal I/O failed.
    Internal,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::MissingEnvVar(_)
            | Error::InvalidConfig(_)
            | Error::EnvFileNotFound(_)
            | Error::EnvFile(_) => ErrorKind::Configuration,
            Error::ToolFailed { .. } | Error::Process { .. } => ErrorKind::UnrecoverableTool,
            Error::Declined(_) => ErrorKind::UserDeclined,
            Error::Io(_) => ErrorKind::Internal,
        }
    }

    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        1
    }
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {code}"),
        None => "no status (terminated by signal)".to_string(),
    }
}

fn describe_stderr(stderr: &str) -> String {
    let stderr = stderr.trim();
    if stderr.is_empty() {
        String::new()
    } else {
        format!(": {stderr}")
    }
}

pub type Result<T> = std::result::Result<T, Error>;
