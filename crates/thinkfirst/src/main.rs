mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    // stdout carries protocol lines, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let data_dir = cli.data_dir.as_deref();

    match cli.command {
        Commands::Host { ephemeral } => commands::host::run(data_dir, ephemeral),
        Commands::Stats { json } => commands::stats::run(data_dir, json),
        Commands::Check { url } => commands::check::run(&url),
        Commands::Version => commands::version::run(),
    }
}
