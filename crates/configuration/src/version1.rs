//! The first version of the configuration format.

use std::path::Path;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tokio::fs;

use crate::error::{ParseConfigurationError, WriteParsedConfigurationError};
use crate::values::{
    ApiSettings, ClientId, ClientSecret, DeveloperToken, RefreshToken, Secret, Variable,
};

pub const CURRENT_VERSION: u32 = 1;
pub const CONFIGURATION_FILENAME: &str = "configuration.json";
pub const CONFIGURATION_JSONSCHEMA_FILENAME: &str = "schema.json";

pub const DEFAULT_CLIENT_ID_VARIABLE: &str = "GOOGLE_ADS_CLIENT_ID";
pub const DEFAULT_CLIENT_SECRET_VARIABLE: &str = "GOOGLE_ADS_CLIENT_SECRET";
pub const DEFAULT_DEVELOPER_TOKEN_VARIABLE: &str = "GOOGLE_ADS_DEVELOPER_TOKEN";
pub const DEFAULT_REFRESH_TOKEN_VARIABLE: &str = "GOOGLE_ADS_REFRESH_TOKEN";

/// The configuration of the node as it is stored on disk.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ParsedConfiguration {
    /// Which version of the configuration format are we using
    pub version: u32,
    /// Credentials used when the host does not send any with a request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credentials: Option<CredentialSettings>,
    #[serde(default, skip_serializing_if = "ApiSettings::is_default")]
    pub api_settings: ApiSettings,
}

/// Fallback Google Ads credentials.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CredentialSettings {
    /// OAuth2 client id.
    pub client_id: ClientId,
    /// OAuth2 client secret.
    pub client_secret: ClientSecret,
    /// Google Ads API developer token.
    pub developer_token: DeveloperToken,
    /// OAuth2 refresh token of the account queries are made on behalf of.
    pub refresh_token: RefreshToken,
}

impl CredentialSettings {
    /// Read every credential from its default environment variable.
    pub fn from_default_variables() -> Self {
        let from = |name: &str| Secret::FromEnvironment {
            variable: Variable::new(name),
        };
        CredentialSettings {
            client_id: ClientId(from(DEFAULT_CLIENT_ID_VARIABLE)),
            client_secret: ClientSecret(from(DEFAULT_CLIENT_SECRET_VARIABLE)),
            developer_token: DeveloperToken(from(DEFAULT_DEVELOPER_TOKEN_VARIABLE)),
            refresh_token: RefreshToken(from(DEFAULT_REFRESH_TOKEN_VARIABLE)),
        }
    }
}

impl ParsedConfiguration {
    /// The configuration written by `initialize`.
    pub fn initial() -> Self {
        ParsedConfiguration {
            version: CURRENT_VERSION,
            credentials: Some(CredentialSettings::from_default_variables()),
            api_settings: ApiSettings::default(),
        }
    }

    /// A configuration without fallback credentials.
    pub fn empty() -> Self {
        ParsedConfiguration {
            version: CURRENT_VERSION,
            credentials: None,
            api_settings: ApiSettings::default(),
        }
    }
}

/// Parse the configuration format from a directory.
pub async fn parse_configuration(
    configuration_dir: impl AsRef<Path>,
) -> Result<ParsedConfiguration, ParseConfigurationError> {
    let configuration_file = configuration_dir.as_ref().join(CONFIGURATION_FILENAME);

    let configuration_file_contents =
        fs::read_to_string(&configuration_file)
            .await
            .map_err(|err| {
                ParseConfigurationError::IoErrorButStringified(format!(
                    "{}: {}",
                    &configuration_file.display(),
                    err
                ))
            })?;

    let parsed_config: ParsedConfiguration = serde_json::from_str(&configuration_file_contents)
        .map_err(|error| ParseConfigurationError::ParseError {
            file_path: configuration_file.clone(),
            line: error.line(),
            column: error.column(),
            message: error.to_string(),
        })?;

    if parsed_config.version != CURRENT_VERSION {
        return Err(ParseConfigurationError::UnsupportedVersion {
            file_path: configuration_file,
            version: parsed_config.version,
            expected: CURRENT_VERSION,
        });
    }

    Ok(parsed_config)
}

/// Write the parsed configuration and its JSON schema into a directory on disk.
pub async fn write_parsed_configuration(
    parsed_config: ParsedConfiguration,
    out_dir: impl AsRef<Path>,
) -> Result<(), WriteParsedConfigurationError> {
    let configuration_file = out_dir.as_ref().to_owned().join(CONFIGURATION_FILENAME);
    fs::create_dir_all(out_dir.as_ref()).await?;

    // create the configuration file
    fs::write(
        configuration_file,
        serde_json::to_string_pretty(&parsed_config)
            .map_err(|e| WriteParsedConfigurationError::IoError(e.into()))?
            + "\n",
    )
    .await?;

    // create the jsonschema file
    let configuration_jsonschema_file_path = out_dir
        .as_ref()
        .to_owned()
        .join(CONFIGURATION_JSONSCHEMA_FILENAME);

    let output = schemars::schema_for!(ParsedConfiguration);
    fs::write(
        &configuration_jsonschema_file_path,
        serde_json::to_string_pretty(&output)
            .map_err(|e| WriteParsedConfigurationError::IoError(e.into()))?
            + "\n",
    )
    .await?;

    Ok(())
}
