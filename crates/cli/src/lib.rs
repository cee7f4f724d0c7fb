//! Commands that prepare and check the configuration directory of the Google Ads node.

use std::path::PathBuf;

use clap::Subcommand;

use google_ads_configuration as configuration;
use google_ads_configuration::environment::Environment;

/// The various contextual bits and bobs we need to run.
pub struct Context<Env: Environment> {
    pub context_path: PathBuf,
    pub environment: Env,
}

/// The command invoked by the user.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Initialize a configuration in the current (empty) directory.
    Initialize {
        /// Leave out the fallback credentials, so every request must send its own.
        #[arg(long)]
        without_credentials: bool,
    },
    /// Check that the configuration can be used with the current environment.
    Validate,
}

/// Run a command in a given directory.
pub async fn run(command: Command, context: Context<impl Environment>) -> anyhow::Result<()> {
    match command {
        Command::Initialize {
            without_credentials,
        } => initialize(without_credentials, context).await?,
        Command::Validate => validate(context).await?,
    };
    Ok(())
}

/// Initialize an empty directory with an empty configuration.
///
/// This creates `configuration.json`, and `schema.json` next to it for editor support.
///
/// Any existing configuration is left alone: the directory must be empty.
async fn initialize(
    without_credentials: bool,
    context: Context<impl Environment>,
) -> anyhow::Result<()> {
    let has_entries = match tokio::fs::read_dir(&context.context_path).await {
        Ok(mut entries) => entries.next_entry().await?.is_some(),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => false,
        Err(err) => return Err(err.into()),
    };
    if has_entries {
        anyhow::bail!(
            "Cannot initialize {}: the directory is not empty.",
            context.context_path.display()
        );
    }

    let parsed = if without_credentials {
        configuration::ParsedConfiguration::empty()
    } else {
        configuration::ParsedConfiguration::initial()
    };
    configuration::write_parsed_configuration(parsed, &context.context_path).await?;

    tracing::info!(
        path = %context.context_path.display(),
        "initialized configuration"
    );
    Ok(())
}

/// Parse the configuration and resolve it against the environment, reporting the first problem.
async fn validate(context: Context<impl Environment>) -> anyhow::Result<()> {
    let parsed = configuration::parse_configuration(&context.context_path).await?;
    let runtime = configuration::make_runtime_configuration(parsed, context.environment)?;
    if runtime.credentials.refresh_token.is_none() {
        tracing::warn!("no refresh token is configured; every request must send credentials");
    }
    Ok(())
}
