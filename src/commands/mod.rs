// ABOUTME: Command module aggregator for the azdeploy CLI.
// ABOUTME: Re-exports the deploy and config command handlers.

mod config;
mod deploy;

pub use config::show_config;
pub use deploy::deploy;
