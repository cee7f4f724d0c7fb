//! The CLI can do a few things. This provides a central point where those things are routed and
//! then done, making it easier to test this crate deterministically.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use google_ads_configuration::environment::ProcessEnvironment;
use google_ads_node_cli::{run, Command, Context};

/// The command-line arguments.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// The path to the configuration directory.
    #[arg(long = "context", env = "NODE_CONFIGURATION_DIRECTORY")]
    pub context_path: Option<PathBuf>,
    /// The command to invoke.
    #[command(subcommand)]
    pub subcommand: Command,
}

#[tokio::main]
pub async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let context_path = match args.context_path {
        None => std::env::current_dir()?,
        Some(path) => path,
    };
    run(
        args.subcommand,
        Context {
            context_path,
            environment: ProcessEnvironment,
        },
    )
    .await?;
    Ok(())
}
