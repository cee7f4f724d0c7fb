//! The fixed shape of the campaign report.

/// The resource the campaign operations select from.
pub const CAMPAIGN_RESOURCE: &str = "campaign";

/// The fields selected by the campaign operations, in query order.
pub const CAMPAIGN_FIELDS: [&str; 19] = [
    "campaign.id",
    "campaign.name",
    "campaign_budget.amount_micros",
    "campaign_budget.period",
    "campaign.status",
    "campaign.optimization_score",
    "campaign.advertising_channel_type",
    "campaign.advertising_channel_sub_type",
    "metrics.impressions",
    "metrics.interactions",
    "metrics.interaction_rate",
    "metrics.average_cost",
    "metrics.cost_micros",
    "metrics.conversions",
    "metrics.cost_per_conversion",
    "metrics.conversions_from_interactions_rate",
    "metrics.video_views",
    "metrics.average_cpm",
    "metrics.ctr",
];

/// The campaign identifier field.
pub const CAMPAIGN_ID_FIELD: &str = "campaign.id";

/// The campaign serving status field.
pub const CAMPAIGN_STATUS_FIELD: &str = "campaign.status";

/// The date segment used by date range filters.
pub const SEGMENTS_DATE_FIELD: &str = "segments.date";

/// Row namespaces merged into a campaign record, in merge order.
pub const CAMPAIGN_NAMESPACES: [&str; 3] = ["campaign", "metrics", "campaign_budget"];
