//! Metadata about the Google Ads resources, operations and filters understood by the node.

pub mod campaign;
pub mod filters;
pub mod flatten;
pub mod resources;

// re-export without modules
pub use campaign::*;
pub use filters::*;
pub use flatten::*;
pub use resources::*;

use thiserror::Error;

/// A value that is not a member of one of the closed sets of options.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{value}' is not a valid {kind}")]
pub struct UnknownValue {
    pub kind: &'static str,
    pub value: String,
}

impl UnknownValue {
    pub fn new(kind: &'static str, value: impl Into<String>) -> Self {
        UnknownValue {
            kind,
            value: value.into(),
        }
    }
}
