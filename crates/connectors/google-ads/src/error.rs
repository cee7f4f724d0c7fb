//! Errors of a node invocation.

use node_sdk::node::ErrorResponse;
use query_engine_execution::error::Error as ExecutionError;
use query_engine_translation::translation::error::Error as TranslationError;

#[derive(Debug, thiserror::Error)]
pub enum NodeError {
    /// The credentials carry no refresh token. Reported per item.
    #[error("No refresh token found in credentials. Please re-authenticate with Google Ads.")]
    MissingCredential,
    /// No usable credentials for the whole invocation.
    #[error("Unable to use the Google Ads credentials: {0}")]
    CredentialsNotFound(String),
    #[error("{0}")]
    Translation(#[from] TranslationError),
    #[error("{0}")]
    Execution(#[from] ExecutionError),
}

impl NodeError {
    /// Serve the error with a status that tells the host whose fault it is.
    pub fn to_error_response(&self, item: Option<usize>) -> ErrorResponse {
        let response = match self {
            NodeError::MissingCredential
            | NodeError::CredentialsNotFound(_)
            | NodeError::Execution(ExecutionError::Authentication(_)) => {
                ErrorResponse::unauthorized(self)
            }
            NodeError::Translation(_) => ErrorResponse::bad_request(self),
            NodeError::Execution(_) => ErrorResponse::from_error(self),
        };
        match item {
            None => response,
            Some(item) => ErrorResponse::new(
                response.status_code(),
                response.message(),
                serde_json::json!({ "item": item }),
            ),
        }
    }
}
