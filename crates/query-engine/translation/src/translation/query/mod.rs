//! Translate a typed node request into an execution plan.

mod campaigns;

use query_engine_gaql::gaql::execution_plan::{CustomerTarget, ExecutionPlan, Query};
use query_engine_metadata::metadata::FlattenStrategy;

use super::error::Error;
use super::helpers;
use super::request::{
    NodeRequest, QueryRequest, CAMPAIGN_ID_PARAMETER, CLIENT_CUSTOMER_ID_PARAMETER,
    MANAGER_CUSTOMER_ID_PARAMETER,
};

/// Translate a request into an execution plan.
pub fn translate(request: &NodeRequest) -> Result<ExecutionPlan, Error> {
    let customer = CustomerTarget {
        customer_id: helpers::customer_id(CLIENT_CUSTOMER_ID_PARAMETER, &request.client_customer_id)?,
        login_customer_id: helpers::login_customer_id(
            MANAGER_CUSTOMER_ID_PARAMETER,
            &request.manager_customer_id,
        )?,
    };

    let (query, flatten) = match &request.query {
        QueryRequest::ListCampaigns { date_range, status } => (
            Query::Select(campaigns::list(*date_range, *status)),
            FlattenStrategy::campaign(),
        ),
        QueryRequest::GetCampaignById { id } => (
            Query::Select(campaigns::by_id(helpers::campaign_id(
                CAMPAIGN_ID_PARAMETER,
                id,
            )?)),
            FlattenStrategy::campaign(),
        ),
        QueryRequest::RawQuery { gaql } => (Query::Raw(gaql.clone()), FlattenStrategy::PrefixFlatten),
    };

    let plan = ExecutionPlan {
        customer,
        query,
        flatten,
    };
    tracing::debug!(plan = ?plan, "translated request");
    Ok(plan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use query_engine_metadata::metadata::{CampaignStatus, DateRange};

    fn list(date_range: Option<DateRange>, status: Option<CampaignStatus>) -> NodeRequest {
        NodeRequest {
            manager_customer_id: "999-888-7777".to_string(),
            client_customer_id: "666-555-4444".to_string(),
            query: QueryRequest::ListCampaigns { date_range, status },
        }
    }

    fn gaql(request: &NodeRequest) -> String {
        translate(request).unwrap().query.query_gaql().gaql
    }

    #[test]
    fn listing_without_filters_has_only_the_base_predicate() {
        let query = gaql(&list(None, None));
        assert!(query.ends_with("FROM campaign WHERE campaign.id > 0"));
        assert!(!query.contains("segments.date DURING"));
        assert!(!query.contains("campaign.status ="));
    }

    #[test]
    fn every_date_range_adds_a_during_clause() {
        for range in enum_iterator::all::<DateRange>() {
            let query = gaql(&list(Some(range), None));
            assert!(
                query.ends_with(&format!(
                    "WHERE campaign.id > 0 AND segments.date DURING {}",
                    range.as_gaql()
                )),
                "{query}"
            );
        }
    }

    #[test]
    fn every_status_adds_a_quoted_status_clause() {
        for status in enum_iterator::all::<CampaignStatus>() {
            let query = gaql(&list(None, Some(status)));
            assert!(
                query.ends_with(&format!(
                    "WHERE campaign.id > 0 AND campaign.status = '{}'",
                    status.as_gaql()
                )),
                "{query}"
            );
        }
    }

    #[test]
    fn date_range_comes_before_status() {
        let query = gaql(&list(Some(DateRange::Yesterday), Some(CampaignStatus::Paused)));
        assert!(query.ends_with(
            "WHERE campaign.id > 0 AND segments.date DURING YESTERDAY AND campaign.status = 'PAUSED'"
        ));
    }

    #[test]
    fn campaign_id_is_stripped_and_unquoted() {
        let request = NodeRequest {
            query: QueryRequest::GetCampaignById {
                id: "123-456".to_string(),
            },
            ..list(None, None)
        };
        assert!(gaql(&request).ends_with("FROM campaign WHERE campaign.id = 123456"));
    }

    #[test]
    fn plans_target_the_stripped_customer_ids() {
        let plan = translate(&list(None, None)).unwrap();
        assert_eq!(
            plan.customer,
            CustomerTarget {
                customer_id: "6665554444".to_string(),
                login_customer_id: Some("9998887777".to_string()),
            }
        );
        assert_eq!(plan.flatten, FlattenStrategy::campaign());
    }

    #[test]
    fn raw_queries_are_passed_through_and_prefix_flattened() {
        let raw = "SELECT ad_group.id FROM ad_group WHERE ad_group.name = \"a'b\"";
        let plan = translate(&NodeRequest {
            query: QueryRequest::RawQuery {
                gaql: raw.to_string(),
            },
            ..list(None, None)
        })
        .unwrap();
        assert_eq!(plan.query, Query::Raw(raw.to_string()));
        assert_eq!(plan.query.query_gaql().gaql, raw);
        assert_eq!(plan.flatten, FlattenStrategy::PrefixFlatten);
    }

    #[test]
    fn invalid_customer_ids_fail_translation() {
        let request = NodeRequest {
            client_customer_id: "abc".to_string(),
            ..list(None, None)
        };
        assert!(matches!(
            translate(&request),
            Err(Error::InvalidParameter { parameter, .. }) if parameter == "clientCustomerId"
        ));
    }
}
