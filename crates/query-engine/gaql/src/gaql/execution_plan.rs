//! Definition of an execution plan to be run against Google Ads.

use query_engine_metadata::metadata::FlattenStrategy;

use super::ast;
use super::string;

/// Everything needed to run one query and shape its results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionPlan {
    pub customer: CustomerTarget,
    pub query: Query,
    pub flatten: FlattenStrategy,
}

/// The account a query runs against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerTarget {
    /// The client customer id, digits only.
    pub customer_id: String,
    /// The manager account the request goes through, digits only.
    pub login_customer_id: Option<String>,
}

/// The query of an execution plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// A query built by the node.
    Select(ast::Select),
    /// A query supplied verbatim by the user.
    Raw(String),
}

impl Query {
    /// Extract the query component as GAQL.
    pub fn query_gaql(&self) -> string::GAQL {
        match self {
            Query::Select(select) => {
                let mut gaql = string::GAQL::new();
                select.to_gaql(&mut gaql);
                gaql
            }
            Query::Raw(raw) => string::GAQL::from_raw(raw.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_queries_are_not_modified() {
        let raw = "  SELECT campaign.id\n\tFROM campaign -- 'quoted'\n".to_string();
        assert_eq!(Query::Raw(raw.clone()).query_gaql().gaql, raw);
    }
}
