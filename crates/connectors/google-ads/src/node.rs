//! This defines a `Node` implementation for Google Ads.

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info_span, Instrument};

use google_ads_configuration as configuration;
use google_ads_configuration::environment::Environment;
use node_sdk::models;
use node_sdk::node::{self, ErrorResponse, Node, NodeSetup, Result};
use query_engine_execution::executor::QueryExecutor;

use super::credentials;
use super::description;
use super::execute;
use super::state;

pub struct GoogleAds;

#[async_trait]
impl Node for GoogleAds {
    /// The parsed configuration
    type Configuration = Arc<configuration::Configuration>;
    /// The unserializable, transient state
    type State = Arc<state::State>;

    /// Update any metrics from the state
    ///
    /// All metrics of this node are updated as requests are served.
    fn fetch_metrics(_configuration: &Self::Configuration, _state: &Self::State) -> Result<()> {
        Ok(())
    }

    /// The node is healthy once it has started. Checking Google Ads would need
    /// credentials, which may only arrive with requests.
    async fn health_check(
        _configuration: &Self::Configuration,
        _state: &Self::State,
    ) -> Result<()> {
        Ok(())
    }

    async fn describe() -> models::NodeDescription {
        description::get_description()
    }

    async fn credential_types() -> Vec<models::CredentialType> {
        credentials::get_credential_types()
    }

    /// Run the node over the items of one invocation.
    async fn execute(
        configuration: &Self::Configuration,
        state: &Self::State,
        context: models::ExecutionContext,
    ) -> Result<models::ExecuteResponse> {
        execute::execute(configuration, state, context)
            .await
            .map_err(|err| {
                let response = err.error.to_error_response(err.item);
                tracing::error!(
                    meta.signal_type = "log",
                    event.domain = "node",
                    event.name = "Execution error",
                    name = "Execution error",
                    body = %err.error,
                    error = true,
                );
                response
            })
    }
}

pub struct GoogleAdsSetup<Env: Environment> {
    environment: Env,
    executor: Option<Arc<dyn QueryExecutor>>,
}

impl<Env: Environment> GoogleAdsSetup<Env> {
    pub fn new(environment: Env) -> Self {
        Self {
            environment,
            executor: None,
        }
    }

    /// Send queries to the given executor instead of Google Ads.
    #[must_use]
    pub fn with_executor(mut self, executor: Arc<dyn QueryExecutor>) -> Self {
        self.executor = Some(executor);
        self
    }
}

#[async_trait]
impl<Env: Environment + Send + Sync> NodeSetup for GoogleAdsSetup<Env> {
    type Node = GoogleAds;

    /// Validate the configuration directory provided by the user,
    /// returning a configuration error or a validated `Node::Configuration`.
    async fn parse_configuration(
        &self,
        configuration_dir: impl AsRef<Path> + Send,
    ) -> Result<<Self::Node as Node>::Configuration> {
        // Note that we don't log validation errors, because they are part of the normal business
        // operation of configuration validation, i.e. they don't represent an error condition that
        // signifies that anything has gone wrong with the node process or infrastructure.
        let parsed_configuration = configuration::parse_configuration(configuration_dir)
            .instrument(info_span!("parse configuration"))
            .await
            .map_err(|error| match error {
                configuration::error::ParseConfigurationError::ParseError {
                    file_path,
                    line,
                    column,
                    message,
                } => node::ParseError::ParseError(node::LocatedError {
                    file_path,
                    line,
                    column,
                    message,
                }),
                configuration::error::ParseConfigurationError::UnsupportedVersion {
                    file_path,
                    version,
                    expected,
                } => node::ParseError::ValidateError(node::InvalidSetting {
                    file_path,
                    setting: "version".to_string(),
                    message: format!("version {version} is not supported, expected {expected}"),
                }),
                configuration::error::ParseConfigurationError::IoErrorButStringified(inner) => {
                    node::ParseError::IoError(inner)
                }
            })?;

        let runtime_configuration =
            configuration::make_runtime_configuration(parsed_configuration, &self.environment)
                .map_err(|error| match error {
                    configuration::error::MakeRuntimeConfigurationError::InvalidApiSetting {
                        file_path,
                        setting,
                        message,
                    } => node::ParseError::ValidateError(node::InvalidSetting {
                        file_path,
                        setting: setting.to_string(),
                        message,
                    }),
                })?;

        Ok(Arc::new(runtime_configuration))
    }

    /// Initialize the node's in-memory state.
    ///
    /// This registers the node's metrics and builds the Google Ads client.
    async fn try_init_state(
        &self,
        configuration: &<Self::Node as Node>::Configuration,
        metrics: &mut prometheus::Registry,
    ) -> Result<<Self::Node as Node>::State> {
        state::create_state(configuration, metrics, self.executor.clone())
            .instrument(info_span!("Initialise state"))
            .await
            .map(Arc::new)
            .map_err(|err| ErrorResponse::from_error(&err))
            .map_err(|err| {
                tracing::error!(
                    meta.signal_type = "log",
                    event.domain = "node",
                    event.name = "Initialization error",
                    name = "Initialization error",
                    body = %err,
                    error = true,
                );
                err
            })
    }
}
