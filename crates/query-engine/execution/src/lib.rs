//! Query execution against the Google Ads API.

pub mod client;
pub mod error;
pub mod execution;
pub mod executor;
pub mod flatten;
pub mod metrics;
