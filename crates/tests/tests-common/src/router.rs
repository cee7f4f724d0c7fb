//! Routers serving the node against a stand-in executor.

use std::sync::Arc;

use google_ads_configuration::environment::FixedEnvironment;
use google_ads_configuration::version1::{
    DEFAULT_CLIENT_ID_VARIABLE, DEFAULT_CLIENT_SECRET_VARIABLE, DEFAULT_DEVELOPER_TOKEN_VARIABLE,
    DEFAULT_REFRESH_TOKEN_VARIABLE,
};
use google_ads_node::node::GoogleAdsSetup;
use query_engine_execution::executor::QueryExecutor;

use crate::deployment::helpers::get_path_from_project_root;

pub const DEPLOYMENT_PATH: &str = "static/deployment";

pub const CONFIGURED_REFRESH_TOKEN: &str = "configured-refresh-token";

/// Creates a router from the test deployment, with every credential configured.
pub async fn create_router(executor: Arc<dyn QueryExecutor>) -> axum::Router {
    create_router_with_environment(
        executor,
        FixedEnvironment::from([
            (DEFAULT_CLIENT_ID_VARIABLE.into(), "configured-client".to_string()),
            (DEFAULT_CLIENT_SECRET_VARIABLE.into(), "configured-secret".to_string()),
            (DEFAULT_DEVELOPER_TOKEN_VARIABLE.into(), "configured-developer".to_string()),
            (DEFAULT_REFRESH_TOKEN_VARIABLE.into(), CONFIGURED_REFRESH_TOKEN.to_string()),
        ]),
    )
    .await
}

/// Creates a router from the test deployment with the given environment.
pub async fn create_router_with_environment(
    executor: Arc<dyn QueryExecutor>,
    environment: FixedEnvironment,
) -> axum::Router {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    let setup = GoogleAdsSetup::new(environment).with_executor(executor);

    // work out where the deployment configs live
    let test_deployment_dir = get_path_from_project_root(DEPLOYMENT_PATH);

    // initialise server state with the static configuration.
    let state = node_sdk::default_main::init_server_state(setup, test_deployment_dir)
        .await
        .unwrap();

    node_sdk::default_main::create_router(state)
}
