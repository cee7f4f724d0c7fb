//! Execute an execution plan against Google Ads.

use tracing::{info_span, Instrument};

use query_engine_gaql::gaql::execution_plan::ExecutionPlan;

use crate::error::Error;
use crate::executor::{Credentials, QueryExecutor, Row};
use crate::flatten;
use crate::metrics::Metrics;

/// Run the plan's query and flatten every result row with the plan's strategy.
///
/// Records come back in the order Google Ads returned the rows.
pub async fn execute(
    executor: &dyn QueryExecutor,
    metrics: &Metrics,
    credentials: &Credentials,
    plan: ExecutionPlan,
) -> Result<Vec<Row>, Error> {
    let query = plan.query.query_gaql().gaql;

    tracing::info!(
        generated_gaql = %query,
        customer_id = %plan.customer.customer_id,
        login_customer_id = ?plan.customer.login_customer_id,
    );

    let timer = metrics.time_query();
    let result = executor
        .search(credentials, &plan.customer, &query)
        .instrument(info_span!("Google Ads search"))
        .await;
    timer.observe_duration();

    let rows = match result {
        Ok(rows) => {
            metrics.record_successful_query(rows.len());
            rows
        }
        Err(err) => {
            metrics.record_failed_query();
            return Err(err);
        }
    };

    let records = async {
        rows.into_iter()
            .map(|row| flatten::flatten(&plan.flatten, row))
            .collect()
    }
    .instrument(info_span!("Flatten rows"))
    .await;

    Ok(records)
}
