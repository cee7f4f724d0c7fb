//! Transient state used by the node.
//!
//! This is initialized on startup.

use std::sync::Arc;

use thiserror::Error;
use tracing::{info_span, Instrument};

use google_ads_configuration::Configuration;
use query_engine_execution::client::{ClientSettings, GoogleAdsClient};
use query_engine_execution::executor::QueryExecutor;
use query_engine_execution::metrics;

/// State for our node.
#[derive(Clone)]
pub struct State {
    pub metrics: metrics::Metrics,
    pub executor: Arc<dyn QueryExecutor>,
}

/// Set up metrics and the Google Ads client, unless an executor is supplied.
pub async fn create_state(
    configuration: &Configuration,
    metrics_registry: &mut prometheus::Registry,
    executor: Option<Arc<dyn QueryExecutor>>,
) -> Result<State, InitializationError> {
    let metrics = async { metrics::Metrics::initialize(metrics_registry) }
        .instrument(info_span!("Setup metrics"))
        .await
        .map_err(InitializationError::MetricsError)?;

    let executor = match executor {
        Some(executor) => executor,
        None => {
            let client = GoogleAdsClient::new(ClientSettings {
                base_url: configuration.api.base_url.to_string(),
                api_version: configuration.api.api_version.clone(),
                timeout: configuration.api.timeout,
            })
            .map_err(InitializationError::ClientError)?;
            Arc::new(client)
        }
    };

    Ok(State { metrics, executor })
}

/// State initialization error.
#[derive(Debug, Error)]
pub enum InitializationError {
    #[error("error initializing metrics: {0}")]
    MetricsError(prometheus::Error),
    #[error("error initializing the Google Ads client: {0}")]
    ClientError(query_engine_execution::error::Error),
}
