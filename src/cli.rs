// ABOUTME: Command-line interface definition using clap derive macros.
// ABOUTME: Defines the subcommands and global output flags.

use azdeploy::output::OutputMode;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "azdeploy")]
#[command(
    about = "Publish a container image to Azure Container Registry and run it on Azure Container Instances"
)]
#[command(version)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only print results, warnings, errors, and questions
    #[arg(short, long, global = true, conflicts_with = "json")]
    pub quiet: bool,

    /// Print JSON lines instead of formatted text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn output_mode(&self) -> OutputMode {
        if self.json {
            OutputMode::Json
        } else if self.quiet {
            OutputMode::Quiet
        } else {
            OutputMode::Normal
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build, scan, and push the image, then create the container instance
    Deploy {
        /// Load variables from this file instead of ./.env
        #[arg(long, value_name = "PATH")]
        env_file: Option<PathBuf>,
    },

    /// Validate the configuration and show the derived deployment targets
    Config {
        /// Load variables from this file instead of ./.env
        #[arg(long, value_name = "PATH")]
        env_file: Option<PathBuf>,
    },
}
