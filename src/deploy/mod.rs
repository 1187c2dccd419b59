// ABOUTME: Deployment pipeline: ensure-resource steps composed into a fixed sequence.
// ABOUTME: Exports the stages, the context threaded through them, and the pipeline driver.

mod container;
mod context;
mod ensure;
mod executor;
mod image;
mod pipeline;
mod provision;
mod stage;

pub use container::{ContainerOutcome, RegistryCredentials};
pub use context::DeploymentContext;
pub use ensure::{EnsureResource, Ensured, ProbeResult, probe};
pub use executor::Executor;
pub use pipeline::{CHECKLIST, DeployReport, Pipeline};
pub use stage::Stage;
