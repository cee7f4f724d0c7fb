//! Implement the execute endpoint: run every input item and collect the output records.

use serde_json::{Map, Value};
use tracing::{info_span, Instrument};

use google_ads_configuration::Configuration;
use node_sdk::models::{
    ExecuteResponse, ExecutionContext, InputItem, NodeExecutionData, PairedItem,
};
use query_engine_execution::execution;
use query_engine_execution::executor::Row;
use query_engine_metadata::metadata::Resource;
use query_engine_translation::translation;

use crate::credentials::InvocationCredentials;
use crate::error::NodeError;
use crate::state::State;

/// The outcome of an invocation. An error aborts the invocation; when the host asked to
/// continue on failure, item errors become records instead.
#[derive(Debug)]
pub struct InvocationError {
    pub item: Option<usize>,
    pub error: NodeError,
}

/// Execute all items of an invocation in order.
pub async fn execute(
    configuration: &Configuration,
    state: &State,
    context: ExecutionContext,
) -> Result<ExecuteResponse, InvocationError> {
    let credentials =
        InvocationCredentials::resolve(context.credentials.as_ref(), &configuration.credentials)
            .map_err(|error| InvocationError { item: None, error })?;

    // the resource is read once, from the first item, and applies to all of them
    let resource = match context.items.first() {
        None => return Ok(ExecuteResponse::default()),
        Some(first) => translation::request::resource(&first.parameters),
    };

    let mut items = vec![];
    for (index, item) in context.items.iter().enumerate() {
        let outcome = execute_item(state, &credentials, &resource, item)
            .instrument(info_span!("Execute item", item = index))
            .await;

        match outcome {
            Ok(records) => items.extend(records.into_iter().map(|json| NodeExecutionData {
                json,
                paired_item: Some(PairedItem { item: index }),
            })),
            Err(error) => {
                state.metrics.record_item_error();
                tracing::error!(
                    meta.signal_type = "log",
                    event.domain = "node",
                    event.name = "Item error",
                    name = "Item error",
                    body = %error,
                    item = index,
                    continue_on_fail = context.continue_on_fail,
                    error = true,
                );
                if !context.continue_on_fail {
                    return Err(InvocationError {
                        item: Some(index),
                        error,
                    });
                }
                items.push(NodeExecutionData {
                    json: error_record(&error),
                    paired_item: Some(PairedItem { item: index }),
                });
            }
        }
    }

    Ok(ExecuteResponse { items })
}

/// Build, run and flatten the query of one item.
async fn execute_item(
    state: &State,
    credentials: &InvocationCredentials,
    resource: &Result<Resource, translation::error::Error>,
    item: &InputItem,
) -> Result<Vec<Row>, NodeError> {
    // checked before anything else, so no query is built without a refresh token
    let query_credentials = credentials.for_query()?;

    let resource = resource.clone()?;
    let plan = async {
        let request = translation::request::decode(resource, &item.parameters)?;
        translation::query::translate(&request)
    }
    .instrument(info_span!("Plan query"))
    .await?;

    let records = execution::execute(
        state.executor.as_ref(),
        &state.metrics,
        &query_credentials,
        plan,
    )
    .await?;

    Ok(records)
}

fn error_record(error: &NodeError) -> Map<String, Value> {
    let mut record = Map::new();
    record.insert("error".to_string(), Value::String(error.to_string()));
    record
}
