//! The traits a node implements, and the errors it reports to the host.

use std::error::Error;
use std::fmt;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::Value;

use crate::models;

pub type Result<T> = std::result::Result<T, ErrorResponse>;

/// An error reported to the host, with the HTTP status it is served with.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorResponse {
    status_code: StatusCode,
    body: models::ErrorResponseBody,
}

impl ErrorResponse {
    pub fn new(status_code: StatusCode, message: impl Into<String>, details: Value) -> Self {
        ErrorResponse {
            status_code,
            body: models::ErrorResponseBody {
                message: message.into(),
                details,
            },
        }
    }

    /// An internal error.
    pub fn from_error<E: Error + ?Sized>(error: &E) -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            error.to_string(),
            Value::Null,
        )
    }

    /// The request or its parameters cannot be handled.
    pub fn bad_request<E: Error + ?Sized>(error: &E) -> Self {
        Self::new(StatusCode::BAD_REQUEST, error.to_string(), Value::Null)
    }

    /// The credentials cannot be used.
    pub fn unauthorized<E: Error + ?Sized>(error: &E) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, error.to_string(), Value::Null)
    }

    pub fn status_code(&self) -> StatusCode {
        self.status_code
    }

    pub fn message(&self) -> &str {
        &self.body.message
    }
}

impl fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.body.message)
    }
}

impl Error for ErrorResponse {}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        (self.status_code, Json(self.body)).into_response()
    }
}

/// A configuration directory that cannot be used.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("error parsing configuration: {0}")]
    ParseError(LocatedError),
    #[error("invalid configuration: {0}")]
    ValidateError(InvalidSetting),
    #[error("error reading configuration: {0}")]
    IoError(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}:{line}:{column}: {message}", .file_path.display())]
pub struct LocatedError {
    pub file_path: PathBuf,
    pub line: usize,
    pub column: usize,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}: {setting}: {message}", .file_path.display())]
pub struct InvalidSetting {
    pub file_path: PathBuf,
    pub setting: String,
    pub message: String,
}

impl From<ParseError> for ErrorResponse {
    fn from(error: ParseError) -> Self {
        let details = match &error {
            ParseError::ParseError(located) => serde_json::json!({
                "file_path": located.file_path,
                "line": located.line,
                "column": located.column,
            }),
            ParseError::ValidateError(invalid) => serde_json::json!({
                "file_path": invalid.file_path,
                "setting": invalid.setting,
            }),
            ParseError::IoError(_) => Value::Null,
        };
        ErrorResponse::new(StatusCode::INTERNAL_SERVER_ERROR, error.to_string(), details)
    }
}

/// A node, served by [`crate::default_main`].
///
/// The node itself holds no data: everything it needs comes from its configuration, its
/// transient state, and the request.
#[async_trait]
pub trait Node {
    /// The validated configuration.
    type Configuration: Send + Sync;
    /// The unserializable, transient state.
    type State: Send + Sync;

    /// Update any metrics from the state.
    fn fetch_metrics(configuration: &Self::Configuration, state: &Self::State) -> Result<()>;

    /// Check that the node is ready to serve requests.
    async fn health_check(configuration: &Self::Configuration, state: &Self::State)
        -> Result<()>;

    /// The node description shown in the host's editor.
    async fn describe() -> models::NodeDescription;

    /// The credential types the node declares.
    async fn credential_types() -> Vec<models::CredentialType>;

    /// Run the node over all items of one invocation.
    async fn execute(
        configuration: &Self::Configuration,
        state: &Self::State,
        context: models::ExecutionContext,
    ) -> Result<models::ExecuteResponse>;
}

/// How to build a [`Node`]'s configuration and state on startup.
#[async_trait]
pub trait NodeSetup {
    type Node: Node;

    /// Validate the configuration directory, returning a `Node::Configuration`.
    async fn parse_configuration(
        &self,
        configuration_dir: impl AsRef<Path> + Send,
    ) -> Result<<Self::Node as Node>::Configuration>;

    /// Initialize the node's in-memory state, registering its metrics.
    async fn try_init_state(
        &self,
        configuration: &<Self::Node as Node>::Configuration,
        metrics: &mut prometheus::Registry,
    ) -> Result<<Self::Node as Node>::State>;
}
