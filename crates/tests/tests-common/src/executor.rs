//! A stand-in for Google Ads that records what it is asked.

use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use serde_json::Value;

use query_engine_execution::error::Error;
use query_engine_execution::executor::{Credentials, QueryExecutor, Row};
use query_engine_gaql::gaql::execution_plan::CustomerTarget;

/// One call made to the executor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub customer: CustomerTarget,
    pub query: String,
    pub refresh_token: String,
}

enum Response {
    Rows(Vec<Row>),
    Failure { status: u16, message: String },
}

/// Answers every query with the same canned response.
pub struct RecordingExecutor {
    response: Response,
    calls: Mutex<Vec<RecordedCall>>,
}

impl RecordingExecutor {
    /// Answer with these rows. Every element of `rows` must be an object.
    pub fn returning(rows: Value) -> Arc<Self> {
        let rows = match rows {
            Value::Array(rows) => rows
                .into_iter()
                .filter_map(|row| match row {
                    Value::Object(row) => Some(row),
                    _ => None,
                })
                .collect(),
            _ => vec![],
        };
        Arc::new(RecordingExecutor {
            response: Response::Rows(rows),
            calls: Mutex::new(vec![]),
        })
    }

    /// Answer with an API error.
    pub fn failing(status: u16, message: &str) -> Arc<Self> {
        Arc::new(RecordingExecutor {
            response: Response::Failure {
                status,
                message: message.to_string(),
            },
            calls: Mutex::new(vec![]),
        })
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl QueryExecutor for RecordingExecutor {
    async fn search(
        &self,
        credentials: &Credentials,
        customer: &CustomerTarget,
        query: &str,
    ) -> Result<Vec<Row>, Error> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(RecordedCall {
                customer: customer.clone(),
                query: query.to_string(),
                refresh_token: credentials.refresh_token.clone(),
            });
        match &self.response {
            Response::Rows(rows) => Ok(rows.clone()),
            Response::Failure { status, message } => Err(Error::Api {
                status: *status,
                message: message.clone(),
            }),
        }
    }
}
