// ABOUTME: Entry point for the azdeploy CLI application.
// ABOUTME: Parses arguments, sets up logging, and maps errors to the exit status.

mod cli;
mod commands;

use azdeploy::config;
use azdeploy::error::{ErrorKind, Result};
use azdeploy::output::Output;
use clap::Parser;
use cli::{Cli, Commands};
use std::env;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber based on verbose flag
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let output = Output::new(cli.output_mode());
    let result = run(cli, output.clone()).await;

    if let Err(e) = result {
        match e.kind() {
            ErrorKind::UserDeclined => output.error(&e.to_string()),
            _ => output.error(&format!("Error: {e}")),
        }
        std::process::exit(e.exit_code());
    }
}

async fn run(cli: Cli, output: Output) -> Result<()> {
    let cwd = env::current_dir()?;
    match cli.command {
        Commands::Deploy { env_file } => {
            config::load_env_file(&cwd, env_file.as_deref())?;
            commands::deploy(output).await
        }
        Commands::Config { env_file } => {
            config::load_env_file(&cwd, env_file.as_deref())?;
            commands::show_config(&output)
        }
    }
}
