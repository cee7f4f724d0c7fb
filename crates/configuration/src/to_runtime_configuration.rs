//! Convert a parsed configuration into the runtime configuration.

use std::path::PathBuf;
use std::time::Duration;

use crate::configuration::{ApiConnection, Configuration, ConfiguredCredentials};
use crate::environment::Environment;
use crate::error::MakeRuntimeConfigurationError;
use crate::values::{ApiSettings, Secret};
use crate::version1::{ParsedConfiguration, CONFIGURATION_FILENAME};

/// Convert the parsed configuration metadata to internal engine metadata
/// that can be used by the translation and execution steps.
pub fn make_runtime_configuration(
    parsed_config: ParsedConfiguration,
    environment: impl Environment,
) -> Result<Configuration, MakeRuntimeConfigurationError> {
    let credentials = match parsed_config.credentials {
        None => ConfiguredCredentials::default(),
        Some(settings) => ConfiguredCredentials {
            client_id: resolve("clientId", &settings.client_id.0, &environment),
            client_secret: resolve("clientSecret", &settings.client_secret.0, &environment),
            developer_token: resolve("developerToken", &settings.developer_token.0, &environment),
            refresh_token: resolve("refreshToken", &settings.refresh_token.0, &environment),
        },
    };

    Ok(Configuration {
        credentials,
        api: api_connection(parsed_config.api_settings)?,
    })
}

/// Read a secret. A missing variable leaves the credential unset, since requests may
/// bring their own credentials.
fn resolve(name: &str, secret: &Secret, environment: &impl Environment) -> Option<String> {
    match secret {
        Secret::Plain(value) => Some(value.clone()),
        Secret::FromEnvironment { variable } => match environment.read(variable) {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::warn!(credential = name, "{err}; the credential is not configured");
                None
            }
        },
    }
    .filter(|value| !value.is_empty())
}

fn api_connection(settings: ApiSettings) -> Result<ApiConnection, MakeRuntimeConfigurationError> {
    let invalid = |setting: &'static str, message: String| {
        MakeRuntimeConfigurationError::InvalidApiSetting {
            file_path: PathBuf::from(CONFIGURATION_FILENAME),
            setting,
            message,
        }
    };

    let base_url = url::Url::parse(&settings.base_url)
        .map_err(|err| invalid("apiSettings.baseUrl", format!("{}: {err}", settings.base_url)))?;
    if !matches!(base_url.scheme(), "http" | "https") {
        return Err(invalid(
            "apiSettings.baseUrl",
            format!("{}: only http and https are supported", settings.base_url),
        ));
    }
    if settings.api_version.is_empty() || settings.api_version.contains('/') {
        return Err(invalid(
            "apiSettings.apiVersion",
            format!("'{}' is not an API version", settings.api_version),
        ));
    }
    if settings.timeout_seconds == 0 {
        return Err(invalid(
            "apiSettings.timeoutSeconds",
            "the timeout must be at least one second".to_string(),
        ));
    }

    Ok(ApiConnection {
        base_url,
        api_version: settings.api_version,
        timeout: Duration::from_secs(settings.timeout_seconds),
    })
}
