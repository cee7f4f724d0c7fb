//! The campaign report queries.

use query_engine_gaql::gaql::ast::{Literal, Select, Where};
use query_engine_gaql::gaql::helpers;
use query_engine_metadata::metadata::{
    CampaignStatus, DateRange, CAMPAIGN_FIELDS, CAMPAIGN_ID_FIELD, CAMPAIGN_RESOURCE,
    CAMPAIGN_STATUS_FIELD, SEGMENTS_DATE_FIELD,
};

fn campaign_select(where_: Where) -> Select {
    let mut select = helpers::simple_select(
        CAMPAIGN_FIELDS.iter().map(|field| helpers::field(field)).collect(),
        helpers::resource(CAMPAIGN_RESOURCE),
    );
    select.where_ = where_;
    select
}

/// List campaigns with their metrics.
///
/// `campaign.id > 0` holds for every campaign; it is there so the optional filters can
/// always be appended with `AND`. The date range filter precedes the status filter.
pub fn list(date_range: Option<DateRange>, status: Option<CampaignStatus>) -> Select {
    let mut conditions = vec![helpers::greater_than(
        helpers::field(CAMPAIGN_ID_FIELD),
        Literal::Int64(0),
    )];
    if let Some(range) = date_range {
        conditions.push(helpers::during(helpers::field(SEGMENTS_DATE_FIELD), range));
    }
    if let Some(status) = status {
        conditions.push(helpers::equals(
            helpers::field(CAMPAIGN_STATUS_FIELD),
            Literal::String(status.as_gaql().to_string()),
        ));
    }
    campaign_select(Where(conditions))
}

/// Select a single campaign with its metrics.
pub fn by_id(id: i64) -> Select {
    campaign_select(Where(vec![helpers::equals(
        helpers::field(CAMPAIGN_ID_FIELD),
        Literal::Int64(id),
    )]))
}
