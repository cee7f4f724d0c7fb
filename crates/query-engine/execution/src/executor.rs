//! The capability of running a GAQL query for a customer.

use std::fmt;

use async_trait::async_trait;
use query_engine_gaql::gaql::execution_plan::CustomerTarget;

use crate::error::Error;

/// A result row, or a flattened record. Keys keep the order they arrived in.
pub type Row = serde_json::Map<String, serde_json::Value>;

/// What is needed to query Google Ads on behalf of a user.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
    pub developer_token: String,
    pub refresh_token: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("developer_token", &"<redacted>")
            .field("refresh_token", &"<redacted>")
            .finish()
    }
}

/// Runs GAQL queries.
///
/// Implementations return the nested rows in the order Google Ads produced them, with
/// field names in GAQL (snake_case) form.
#[async_trait]
pub trait QueryExecutor: Send + Sync {
    async fn search(
        &self,
        credentials: &Credentials,
        customer: &CustomerTarget,
        query: &str,
    ) -> Result<Vec<Row>, Error>;
}
