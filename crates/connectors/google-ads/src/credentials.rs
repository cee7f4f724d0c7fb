//! The credential type of the node, and how the credentials of a request are resolved.

use std::fmt;

use serde::Deserialize;
use serde_json::{Map, Value};

use google_ads_configuration::ConfiguredCredentials;
use node_sdk::models::{CredentialType, NodeProperty, PropertyType, TypeOptions};
use query_engine_execution::client::ADWORDS_SCOPE;
use query_engine_execution::executor::Credentials;

use crate::error::NodeError;

pub const CREDENTIAL_TYPE_NAME: &str = "googleAdsOAuth2Api";

/// Declare the OAuth2 credential type. Everything but the developer token is filled in
/// by the host's generic OAuth2 flow.
pub fn get_credential_types() -> Vec<CredentialType> {
    let hidden = |display_name: &str, name: &str, default: &str| {
        NodeProperty::new(display_name, name, PropertyType::Hidden, default)
    };

    vec![CredentialType {
        name: CREDENTIAL_TYPE_NAME.to_string(),
        display_name: "Google Ads OAuth2 API".to_string(),
        documentation_url: "https://developers.google.com/google-ads/api/docs/oauth/overview"
            .to_string(),
        icon: "file:googleAds.svg".to_string(),
        extends: vec!["oAuth2Api".to_string()],
        properties: vec![
            hidden("Grant Type", "grantType", "authorizationCode"),
            hidden(
                "Authorization URL",
                "authUrl",
                "https://accounts.google.com/o/oauth2/v2/auth",
            ),
            hidden(
                "Access Token URL",
                "accessTokenUrl",
                "https://oauth2.googleapis.com/token",
            ),
            hidden(
                "Auth URI Query Parameters",
                "authQueryParameters",
                "access_type=offline&prompt=consent",
            ),
            hidden("Authentication", "authentication", "body"),
            hidden("Scope", "scope", ADWORDS_SCOPE),
            NodeProperty::new(
                "Developer Token",
                "developerToken",
                PropertyType::String,
                "",
            )
            .required()
            .with_type_options(TypeOptions {
                rows: None,
                password: Some(true),
            })
            .with_description("Your Google Ads API developer token"),
        ],
    }]
}

/// Decrypted credential data as the host sends it.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct HostCredentials {
    #[serde(default)]
    client_id: String,
    #[serde(default)]
    client_secret: String,
    #[serde(default)]
    developer_token: String,
    #[serde(default)]
    oauth_token_data: Option<OAuthTokenData>,
}

#[derive(Deserialize)]
struct OAuthTokenData {
    #[serde(default)]
    refresh_token: Option<String>,
}

/// The credentials of one invocation. The refresh token is checked per item.
#[derive(Clone, PartialEq, Eq)]
pub struct InvocationCredentials {
    client_id: String,
    client_secret: String,
    developer_token: String,
    refresh_token: Option<String>,
}

impl fmt::Debug for InvocationCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InvocationCredentials")
            .field("client_id", &self.client_id)
            .field("has_refresh_token", &self.refresh_token.is_some())
            .finish_non_exhaustive()
    }
}

impl InvocationCredentials {
    /// Use the credentials sent with the request, or else the configured ones.
    pub fn resolve(
        sent: Option<&Map<String, Value>>,
        configured: &ConfiguredCredentials,
    ) -> Result<Self, NodeError> {
        match sent {
            Some(data) => Self::from_host(data),
            None => Self::from_configuration(configured),
        }
    }

    fn from_host(data: &Map<String, Value>) -> Result<Self, NodeError> {
        let host: HostCredentials = serde_json::from_value(Value::Object(data.clone()))
            .map_err(|err| NodeError::CredentialsNotFound(format!("malformed credentials: {err}")))?;
        Ok(InvocationCredentials {
            client_id: required("clientId", host.client_id)?,
            client_secret: required("clientSecret", host.client_secret)?,
            developer_token: required("developerToken", host.developer_token)?,
            refresh_token: host
                .oauth_token_data
                .and_then(|token_data| token_data.refresh_token),
        })
    }

    fn from_configuration(configured: &ConfiguredCredentials) -> Result<Self, NodeError> {
        let configured_value = |name: &str, value: &Option<String>| {
            value.clone().ok_or_else(|| {
                NodeError::CredentialsNotFound(format!(
                    "no credentials were sent and '{name}' is not configured"
                ))
            })
        };
        Ok(InvocationCredentials {
            client_id: configured_value("clientId", &configured.client_id)?,
            client_secret: configured_value("clientSecret", &configured.client_secret)?,
            developer_token: configured_value("developerToken", &configured.developer_token)?,
            refresh_token: configured.refresh_token.clone(),
        })
    }

    /// The credentials to query with, once a refresh token is known to be present.
    pub fn for_query(&self) -> Result<Credentials, NodeError> {
        match self.refresh_token.as_deref() {
            None | Some("") => Err(NodeError::MissingCredential),
            Some(refresh_token) => Ok(Credentials {
                client_id: self.client_id.clone(),
                client_secret: self.client_secret.clone(),
                developer_token: self.developer_token.clone(),
                refresh_token: refresh_token.to_string(),
            }),
        }
    }
}

fn required(name: &str, value: String) -> Result<String, NodeError> {
    if value.is_empty() {
        Err(NodeError::CredentialsNotFound(format!(
            "the credentials are missing '{name}'"
        )))
    } else {
        Ok(value)
    }
}
