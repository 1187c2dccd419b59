// ABOUTME: External command execution behind the ProcessRunner trait.
// ABOUTME: Structured argument vectors, captured output, and the tokio-backed runner.

mod command;
mod error;
mod runner;

pub use command::{CommandLine, Stdio};
pub use error::ProcessError;
pub use runner::{ProcessOutput, ProcessRunner, SystemRunner};
