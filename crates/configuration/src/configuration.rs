//! Runtime configuration for the node.

use std::fmt;
use std::time::Duration;

/// The 'Configuration' type collects all the information necessary to serve requests at runtime.
///
/// Values of this type are produced from a 'ParsedConfiguration' using
/// 'make_runtime_configuration', with every secret read from the environment.
#[derive(Debug, Clone)]
pub struct Configuration {
    pub credentials: ConfiguredCredentials,
    pub api: ApiConnection,
}

/// Fallback credentials. A value is absent when the configuration does not mention it or
/// its environment variable is not set.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ConfiguredCredentials {
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    pub developer_token: Option<String>,
    pub refresh_token: Option<String>,
}

impl fmt::Debug for ConfiguredCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let redacted = |value: &Option<String>| value.as_ref().map(|_| "<redacted>");
        f.debug_struct("ConfiguredCredentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &redacted(&self.client_secret))
            .field("developer_token", &redacted(&self.developer_token))
            .field("refresh_token", &redacted(&self.refresh_token))
            .finish()
    }
}

/// Validated API settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConnection {
    pub base_url: url::Url,
    pub api_version: String,
    pub timeout: Duration,
}
