use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands::{
    init_command, resolve_command, select_command, status_command, unset_command,
};

#[derive(Parser)]
#[command(name = "kernel-runner")]
#[command(version, about = "Select the Python interpreter backing notebook kernels", long_about = None)]
#[command(after_help = "ENVIRONMENT:\n    RUST_LOG=debug    Enable debug logging")]
pub struct KernelRunner {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve the interpreter for the kernel backend
    #[command(visible_alias = "r")]
    Resolve {
        /// Workspace directory (defaults to the current directory)
        #[arg(short, long)]
        workspace: Option<String>,

        /// Print the resolved interpreter as JSON
        #[arg(short, long)]
        json: bool,

        /// Cancel the lookup after this many milliseconds and fall back
        /// to the configured default
        #[arg(long = "timeout-ms")]
        timeout_ms: Option<u64>,
    },
    /// Select an interpreter from the configured candidates
    #[command(visible_alias = "s")]
    Select {
        /// Workspace directory (defaults to the current directory)
        #[arg(short, long)]
        workspace: Option<String>,

        /// Select the interpreter at this path instead of picking
        #[arg(short, long)]
        path: Option<String>,
    },
    /// Show the persisted and configured selection state
    Status {
        /// Workspace directory (defaults to the current directory)
        #[arg(short, long)]
        workspace: Option<String>,

        /// Print the status as JSON
        #[arg(short, long)]
        json: bool,
    },
    /// Clear the persisted interpreter selection
    Unset {
        /// Workspace directory (defaults to the current directory)
        #[arg(short, long)]
        workspace: Option<String>,

        /// Also delete the selection file itself
        #[arg(long)]
        all: bool,
    },
    /// Initialize kernel-runner configuration for a workspace
    Init {
        /// Custom working directory (defaults to the current directory)
        #[arg(long)]
        cwd: Option<String>,

        /// Force overwrite an existing configuration file
        #[arg(short, long)]
        force: bool,
    },
}

impl Commands {
    /// Execute the command
    pub async fn execute(self) -> Result<()> {
        match self {
            Commands::Resolve {
                workspace,
                json,
                timeout_ms,
            } => resolve_command(workspace.as_deref(), json, timeout_ms).await,
            Commands::Select { workspace, path } => {
                select_command(workspace.as_deref(), path.as_deref()).await
            }
            Commands::Status { workspace, json } => {
                status_command(workspace.as_deref(), json).await
            }
            Commands::Unset { workspace, all } => unset_command(workspace.as_deref(), all).await,
            Commands::Init { cwd, force } => init_command(cwd.as_deref(), force),
        }
    }
}
