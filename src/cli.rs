use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Swap screen view-model: validate collaborator snapshots and render the
/// state the wallet's swap screen would show.
#[derive(Parser)]
#[command(name = "swap-view", version, about)]
pub struct Cli {
    /// Log level when RUST_LOG is not set (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Output the JSON schema for swap screen snapshots
    Schema,

    /// Output an example swap screen snapshot to stdout
    Example,

    /// Validate a swap screen snapshot JSON file
    Validate {
        /// Path to the snapshot JSON file
        file: PathBuf,
    },

    /// Compute and print the swap screen state for a snapshot
    Render {
        /// Path to the snapshot JSON file
        file: PathBuf,

        /// View config JSON (router label, provider, contract registry)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Output format: text (default) or json
        #[arg(long, default_value = "text")]
        format: String,
    },
}
