// ABOUTME: Argument vectors for the external tools the pipeline drives.
// ABOUTME: One module per tool: container runtime, Azure CLI, and vulnerability scanner.

pub mod az;
pub mod docker;
pub mod grype;
