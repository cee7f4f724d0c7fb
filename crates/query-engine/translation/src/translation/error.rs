//! Errors for translation.

use query_engine_metadata::metadata::UnknownValue;
use thiserror::Error;

/// A type for translation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("The parameter '{0}' is required.")]
    MissingParameter(String),
    #[error("Invalid value for parameter '{parameter}': {message}")]
    InvalidParameter { parameter: String, message: String },
    #[error("Unknown resource '{0}'.")]
    UnknownResource(String),
    #[error("Unknown operation '{operation}' for resource '{resource}'.")]
    UnknownOperation { resource: String, operation: String },
}

impl Error {
    pub fn invalid_parameter(parameter: &str, message: impl Into<String>) -> Self {
        Error::InvalidParameter {
            parameter: parameter.to_string(),
            message: message.into(),
        }
    }

    /// An option value outside its closed set.
    pub fn unknown_value(parameter: &str, unknown: &UnknownValue) -> Self {
        Error::invalid_parameter(parameter, unknown.to_string())
    }
}
