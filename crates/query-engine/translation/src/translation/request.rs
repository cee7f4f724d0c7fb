//! Decode the parameters of a node item into a typed request.

use query_engine_metadata::metadata::{CampaignOperation, CampaignStatus, DateRange, Resource};

use super::error::Error;
use super::helpers::{self, Parameters};

pub const RESOURCE_PARAMETER: &str = "resource";
pub const OPERATION_PARAMETER: &str = "operation";
pub const MANAGER_CUSTOMER_ID_PARAMETER: &str = "managerCustomerId";
pub const CLIENT_CUSTOMER_ID_PARAMETER: &str = "clientCustomerId";
pub const CAMPAIGN_ID_PARAMETER: &str = "campaignId";
pub const ADDITIONAL_OPTIONS_PARAMETER: &str = "additionalOptions";
pub const DATE_RANGE_PARAMETER: &str = "dateRange";
pub const CAMPAIGN_STATUS_PARAMETER: &str = "campaignStatus";
pub const GAQL_QUERY_PARAMETER: &str = "gaqlQuery";

/// A request for one node item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeRequest {
    /// The manager account, as entered (hyphens allowed).
    pub manager_customer_id: String,
    /// The client account, as entered (hyphens allowed).
    pub client_customer_id: String,
    pub query: QueryRequest,
}

/// What to ask Google Ads for. Account ids do not change the shape of the query and live
/// on [`NodeRequest`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryRequest {
    ListCampaigns {
        date_range: Option<DateRange>,
        status: Option<CampaignStatus>,
    },
    GetCampaignById {
        id: String,
    },
    RawQuery {
        gaql: String,
    },
}

/// Read the resource selector. The host evaluates it once, from the first item.
pub fn resource(parameters: &Parameters) -> Result<Resource, Error> {
    match helpers::optional_string(parameters, RESOURCE_PARAMETER)? {
        None => Ok(Resource::Campaign),
        Some(value) => value
            .parse()
            .map_err(|_| Error::UnknownResource(value.to_string())),
    }
}

/// Decode one item's parameters for the given resource.
pub fn decode(resource: Resource, parameters: &Parameters) -> Result<NodeRequest, Error> {
    let manager_customer_id =
        helpers::require_string(parameters, MANAGER_CUSTOMER_ID_PARAMETER)?.to_string();
    let client_customer_id =
        helpers::require_string(parameters, CLIENT_CUSTOMER_ID_PARAMETER)?.to_string();

    let query = match resource {
        Resource::Campaign => decode_campaign(parameters)?,
        Resource::CustomQuery => QueryRequest::RawQuery {
            gaql: helpers::require_string(parameters, GAQL_QUERY_PARAMETER)?.to_string(),
        },
    };

    Ok(NodeRequest {
        manager_customer_id,
        client_customer_id,
        query,
    })
}

fn decode_campaign(parameters: &Parameters) -> Result<QueryRequest, Error> {
    let operation = match helpers::optional_string(parameters, OPERATION_PARAMETER)? {
        None => CampaignOperation::DEFAULT,
        Some(value) => value.parse().map_err(|_| Error::UnknownOperation {
            resource: Resource::Campaign.to_string(),
            operation: value.to_string(),
        })?,
    };

    match operation {
        CampaignOperation::GetAll => {
            let options = helpers::optional_object(parameters, ADDITIONAL_OPTIONS_PARAMETER)?;
            let (date_range, status) = match options {
                None => (None, None),
                Some(options) => (
                    helpers::optional_string(options, DATE_RANGE_PARAMETER)?,
                    helpers::optional_string(options, CAMPAIGN_STATUS_PARAMETER)?,
                ),
            };
            Ok(QueryRequest::ListCampaigns {
                date_range: DateRange::from_option(date_range)
                    .map_err(|err| Error::unknown_value(DATE_RANGE_PARAMETER, &err))?,
                status: CampaignStatus::from_option(status)
                    .map_err(|err| Error::unknown_value(CAMPAIGN_STATUS_PARAMETER, &err))?,
            })
        }
        CampaignOperation::Get => Ok(QueryRequest::GetCampaignById {
            id: helpers::require_string(parameters, CAMPAIGN_ID_PARAMETER)?.to_string(),
        }),
    }
}
