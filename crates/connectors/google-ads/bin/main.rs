use std::process::ExitCode;

use google_ads_configuration::environment::ProcessEnvironment;
use google_ads_node::node::GoogleAdsSetup;
use node_sdk::default_main::default_main_with;

#[tokio::main]
pub async fn main() -> ExitCode {
    let result = default_main_with(GoogleAdsSetup::new(ProcessEnvironment)).await;
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{error}");
            ExitCode::FAILURE
        }
    }
}
