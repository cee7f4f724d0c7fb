//! A command line and HTTP server for any [`Node`].

use std::error::Error;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use clap::{Parser, Subcommand};
use prometheus::{Encoder, Registry, TextEncoder};
use tracing::{info_span, Instrument};
use tracing_subscriber::EnvFilter;

use crate::models;
use crate::node::{ErrorResponse, Node, NodeSetup, Result};

pub const DEFAULT_PORT: u16 = 8080;

#[derive(Parser)]
struct CliArgs {
    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Subcommand)]
enum Command {
    /// Serve the node over HTTP.
    Serve(ServeCommand),
    /// Print the node description as JSON.
    Describe,
}

#[derive(Clone, clap::Args)]
struct ServeCommand {
    #[arg(long, value_name = "DIRECTORY", env = "NODE_CONFIGURATION_DIRECTORY")]
    configuration: PathBuf,
    #[arg(long, value_name = "PORT", env = "NODE_PORT", default_value_t = DEFAULT_PORT)]
    port: u16,
}

/// What the HTTP handlers share.
pub struct ServerState<N: Node> {
    configuration: N::Configuration,
    state: N::State,
    metrics: Registry,
}

impl<N: Node> ServerState<N> {
    pub fn configuration(&self) -> &N::Configuration {
        &self.configuration
    }

    pub fn state(&self) -> &N::State {
        &self.state
    }

    pub fn metrics(&self) -> &Registry {
        &self.metrics
    }
}

/// Parse the command line and run the requested command.
pub async fn default_main_with<Setup>(setup: Setup) -> std::result::Result<(), Box<dyn Error>>
where
    Setup: NodeSetup,
    Setup::Node: 'static,
    <Setup::Node as Node>::Configuration: 'static,
    <Setup::Node as Node>::State: 'static,
{
    init_tracing();

    let CliArgs { command } = CliArgs::parse();
    match command {
        Command::Serve(serve_command) => serve(setup, serve_command).await,
        Command::Describe => {
            let description = <Setup::Node as Node>::describe().await;
            println!("{}", serde_json::to_string_pretty(&description)?);
            Ok(())
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // a subscriber may already be installed by an embedding program
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init();
}

async fn serve<Setup>(setup: Setup, command: ServeCommand) -> std::result::Result<(), Box<dyn Error>>
where
    Setup: NodeSetup,
    Setup::Node: 'static,
    <Setup::Node as Node>::Configuration: 'static,
    <Setup::Node as Node>::State: 'static,
{
    let server_state = init_server_state(setup, &command.configuration).await?;
    let router = create_router(server_state);

    let address = SocketAddr::from(([0, 0, 0, 0], command.port));
    tracing::info!(%address, "starting server");

    axum::Server::bind(&address)
        .serve(router.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "unable to listen for the shutdown signal");
    }
    tracing::info!("shutting down");
}

/// Parse the configuration and initialize the state of a node.
pub async fn init_server_state<Setup: NodeSetup>(
    setup: Setup,
    configuration_dir: impl AsRef<Path> + Send,
) -> Result<ServerState<Setup::Node>> {
    let mut metrics = Registry::new();
    let configuration = setup.parse_configuration(configuration_dir).await?;
    let state = setup.try_init_state(&configuration, &mut metrics).await?;
    Ok(ServerState {
        configuration,
        state,
        metrics,
    })
}

/// The HTTP routes of a node.
pub fn create_router<N>(state: ServerState<N>) -> Router
where
    N: Node + 'static,
    N::Configuration: 'static,
    N::State: 'static,
{
    Router::new()
        .route("/health", get(get_health::<N>))
        .route("/describe", get(get_describe::<N>))
        .route("/credentials", get(get_credentials::<N>))
        .route("/execute", post(post_execute::<N>))
        .route("/metrics", get(get_metrics::<N>))
        .with_state(Arc::new(state))
}

async fn get_health<N: Node>(State(state): State<Arc<ServerState<N>>>) -> Result<()> {
    N::health_check(&state.configuration, &state.state).await
}

async fn get_describe<N: Node>() -> Json<models::NodeDescription> {
    Json(N::describe().await)
}

async fn get_credentials<N: Node>() -> Json<Vec<models::CredentialType>> {
    Json(N::credential_types().await)
}

async fn post_execute<N: Node>(
    State(state): State<Arc<ServerState<N>>>,
    Json(context): Json<models::ExecutionContext>,
) -> Result<Json<models::ExecuteResponse>> {
    N::execute(&state.configuration, &state.state, context)
        .instrument(info_span!("Execute node"))
        .await
        .map(Json)
}

async fn get_metrics<N: Node>(State(state): State<Arc<ServerState<N>>>) -> Result<String> {
    N::fetch_metrics(&state.configuration, &state.state)?;
    let mut buffer = vec![];
    TextEncoder::new()
        .encode(&state.metrics.gather(), &mut buffer)
        .map_err(|err| ErrorResponse::from_error(&err))?;
    String::from_utf8(buffer).map_err(|err| {
        ErrorResponse::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            err.to_string(),
            serde_json::Value::Null,
        )
    })
}
