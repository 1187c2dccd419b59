// ABOUTME: Library root for azdeploy - exposes the pipeline and its ports for testing.
// ABOUTME: The main binary is in main.rs.

pub mod config;
pub mod deploy;
pub mod diagnostics;
pub mod error;
pub mod interaction;
pub mod output;
pub mod process;
pub mod tools;
pub mod types;
