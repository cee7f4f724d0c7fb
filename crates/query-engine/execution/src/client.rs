//! A Google Ads REST client implementing [`QueryExecutor`].

use std::collections::HashSet;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info_span, Instrument};
use url::Url;
use yup_oauth2::authorized_user::AuthorizedUserSecret;

use query_engine_gaql::gaql::execution_plan::CustomerTarget;

use crate::error::Error;
use crate::executor::{Credentials, QueryExecutor, Row};

/// The OAuth2 scope of the Google Ads API.
pub const ADWORDS_SCOPE: &str = "https://www.googleapis.com/auth/adwords";

const AUTHORIZED_USER_KEY_TYPE: &str = "authorized_user";

/// Where and how to reach the Google Ads API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    pub base_url: String,
    pub api_version: String,
    pub timeout: Duration,
}

/// Queries the `googleAds:search` REST endpoint, following result pages.
#[derive(Debug, Clone)]
pub struct GoogleAdsClient {
    http: reqwest::Client,
    settings: ClientSettings,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchRequest<'a> {
    query: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    page_token: Option<&'a str>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchResponse {
    #[serde(default)]
    results: Vec<Row>,
    #[serde(default)]
    next_page_token: Option<String>,
}

impl GoogleAdsClient {
    pub fn new(settings: ClientSettings) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .timeout(settings.timeout)
            .build()?;
        Ok(GoogleAdsClient { http, settings })
    }

    /// The search endpoint of a customer.
    pub fn search_url(&self, customer_id: &str) -> Result<Url, Error> {
        Ok(Url::parse(&format!(
            "{}/{}/customers/{}/googleAds:search",
            self.settings.base_url.trim_end_matches('/'),
            self.settings.api_version,
            customer_id
        ))?)
    }

    /// Exchange the refresh token for an access token.
    async fn access_token(&self, credentials: &Credentials) -> Result<String, Error> {
        let secret = AuthorizedUserSecret {
            client_id: credentials.client_id.clone(),
            client_secret: credentials.client_secret.clone(),
            refresh_token: credentials.refresh_token.clone(),
            key_type: AUTHORIZED_USER_KEY_TYPE.to_string(),
        };
        let exchange = async {
            let authenticator = yup_oauth2::AuthorizedUserAuthenticator::builder(secret)
                .build()
                .await
                .map_err(|err| Error::Authentication(err.to_string()))?;
            authenticator
                .token(&[ADWORDS_SCOPE])
                .await
                .map_err(|err| Error::Authentication(err.to_string()))
        };
        let token = within(self.settings.timeout, exchange).await?;
        token
            .token()
            .map(str::to_string)
            .ok_or_else(|| Error::Authentication("no access token was issued".to_string()))
    }

    /// Run a query with an access token that is already known, following every result page.
    pub async fn search_with_token(
        &self,
        access_token: &str,
        credentials: &Credentials,
        customer: &CustomerTarget,
        query: &str,
    ) -> Result<Vec<Row>, Error> {
        let url = self.search_url(&customer.customer_id)?;

        let mut rows = vec![];
        let mut seen_tokens = HashSet::new();
        let mut page_token: Option<String> = None;
        loop {
            let request = SearchRequest {
                query,
                page_token: page_token.as_deref(),
            };
            let page = self
                .search_page(&url, access_token, credentials, customer, &request)
                .instrument(info_span!("Fetch result page", rows_so_far = rows.len()))
                .await?;
            rows.extend(page.results.into_iter().map(normalize_row));
            match page.next_page_token {
                Some(token) if !token.is_empty() => {
                    if !seen_tokens.insert(token.clone()) {
                        return Err(Error::Decode(format!(
                            "the page token '{token}' was returned twice"
                        )));
                    }
                    page_token = Some(token);
                }
                _ => break,
            }
        }
        Ok(rows)
    }

    async fn search_page(
        &self,
        url: &Url,
        access_token: &str,
        credentials: &Credentials,
        customer: &CustomerTarget,
        request: &SearchRequest<'_>,
    ) -> Result<SearchResponse, Error> {
        let mut builder = self
            .http
            .post(url.clone())
            .bearer_auth(access_token)
            .header("developer-token", &credentials.developer_token)
            .json(request);
        if let Some(login_customer_id) = &customer.login_customer_id {
            builder = builder.header("login-customer-id", login_customer_id);
        }

        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Api {
                status: status.as_u16(),
                message: api_error_message(&body),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|err| Error::Decode(err.to_string()))
    }
}

#[async_trait]
impl QueryExecutor for GoogleAdsClient {
    async fn search(
        &self,
        credentials: &Credentials,
        customer: &CustomerTarget,
        query: &str,
    ) -> Result<Vec<Row>, Error> {
        let access_token = self
            .access_token(credentials)
            .instrument(info_span!("Refresh access token"))
            .await?;
        self.search_with_token(&access_token, credentials, customer, query).await
    }
}

/// Fail with [`Error::Authentication`] when the token exchange outlives the request timeout.
async fn within<T>(
    timeout: Duration,
    exchange: impl std::future::Future<Output = Result<T, Error>>,
) -> Result<T, Error> {
    tokio::time::timeout(timeout, exchange)
        .await
        .map_err(|_| {
            Error::Authentication(format!(
                "the token exchange did not finish within {} seconds",
                timeout.as_secs()
            ))
        })?
}

/// Pull the human-readable message out of a Google API error body, falling back to the
/// body itself.
fn api_error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|value| {
            value
                .pointer("/error/message")
                .and_then(Value::as_str)
                .map(str::to_string)
        })
        .unwrap_or_else(|| body.to_string())
}

/// Rename the REST API's camelCase keys to their GAQL snake_case names, at every depth.
fn normalize_row(row: Row) -> Row {
    row.into_iter()
        .map(|(key, value)| (to_snake_case(&key), normalize_value(value)))
        .collect()
}

fn normalize_value(value: Value) -> Value {
    match value {
        Value::Object(object) => Value::Object(normalize_row(object)),
        Value::Array(values) => Value::Array(values.into_iter().map(normalize_value).collect()),
        other => other,
    }
}

fn to_snake_case(key: &str) -> String {
    let mut snake = String::with_capacity(key.len() + 4);
    for (index, c) in key.chars().enumerate() {
        if c.is_ascii_uppercase() {
            if index > 0 {
                snake.push('_');
            }
            snake.push(c.to_ascii_lowercase());
        } else {
            snake.push(c);
        }
    }
    snake
}
