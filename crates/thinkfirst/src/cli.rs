use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "thinkfirst")]
#[command(version)]
#[command(about = "Pause and reflect before opening an AI chat")]
pub struct Cli {
    /// Directory holding counters.json (defaults to $THINKFIRST_HOME or ~/.thinkfirst)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the session tracker over line-delimited JSON events (stdin/stdout)
    Host {
        /// Keep counters in memory only
        #[arg(long)]
        ephemeral: bool,
    },

    /// Show streak and completion statistics
    Stats {
        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Report whether a URL is a watched destination
    Check { url: String },

    /// Print version information
    Version,
}
