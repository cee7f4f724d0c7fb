//! Translate the parameters of a node item to an ExecutionPlan (GAQL) to be run against Google Ads.

pub mod error;
pub mod helpers;
pub mod query;
pub mod request;
