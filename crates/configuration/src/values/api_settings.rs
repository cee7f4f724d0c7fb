use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "https://googleads.googleapis.com";
pub const DEFAULT_API_VERSION: &str = "v20";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 60;

/// How to reach the Google Ads API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApiSettings {
    /// Root of the Google Ads REST API.
    #[serde(default = "base_url_default")]
    pub base_url: String,
    /// The API version queries are sent to, e.g. "v20".
    #[serde(default = "api_version_default")]
    pub api_version: String,
    /// Timeout of a single HTTP request, in seconds.
    #[serde(default = "timeout_seconds_default")]
    pub timeout_seconds: u64,
}

impl ApiSettings {
    pub fn is_default(&self) -> bool {
        self == &ApiSettings::default()
    }
}

impl Default for ApiSettings {
    fn default() -> ApiSettings {
        ApiSettings {
            base_url: base_url_default(),
            api_version: api_version_default(),
            timeout_seconds: timeout_seconds_default(),
        }
    }
}

fn base_url_default() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn api_version_default() -> String {
    DEFAULT_API_VERSION.to_string()
}

fn timeout_seconds_default() -> u64 {
    DEFAULT_TIMEOUT_SECONDS
}
