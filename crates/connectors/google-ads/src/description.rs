//! The node description shown in the host's editor.

use enum_iterator::all;
use serde_json::json;

use node_sdk::models::{
    ConnectionType, CredentialRequirement, NodeDefaults, NodeDescription, NodeProperty,
    OptionValue, PropertyOption, PropertyType, TypeOptions,
};
use query_engine_metadata::metadata::{
    CampaignOperation, CampaignStatus, DateRange, Resource, ALL_STATUSES, ALL_TIME,
};
use query_engine_translation::translation::request::{
    ADDITIONAL_OPTIONS_PARAMETER, CAMPAIGN_ID_PARAMETER, CAMPAIGN_STATUS_PARAMETER,
    CLIENT_CUSTOMER_ID_PARAMETER, DATE_RANGE_PARAMETER, GAQL_QUERY_PARAMETER,
    MANAGER_CUSTOMER_ID_PARAMETER, OPERATION_PARAMETER, RESOURCE_PARAMETER,
};

use crate::credentials::CREDENTIAL_TYPE_NAME;

pub const NODE_NAME: &str = "googleAds";
pub const NODE_DISPLAY_NAME: &str = "Google Ads";
/// Saved workflows refer to the notice by this name.
pub const MICROS_NOTICE_NAME: &str = "campaigsNotice";

pub const DEFAULT_GAQL_QUERY: &str = "SELECT campaign.id, campaign.name FROM campaign LIMIT 10";

const GAQL_QUERY_DESCRIPTION: &str = "Google Ads Query Language (GAQL) query. See \
    <a href=\"https://developers.google.com/google-ads/api/docs/query/overview\">GAQL \
    documentation</a> for syntax.";

/// Describe the node.
pub fn get_description() -> NodeDescription {
    NodeDescription {
        display_name: NODE_DISPLAY_NAME.to_string(),
        name: NODE_NAME.to_string(),
        icon: "file:googleAds.svg".to_string(),
        group: vec!["transform".to_string()],
        version: 1,
        subtitle: r#"={{$parameter["operation"] + ": " + $parameter["resource"]}}"#.to_string(),
        description: "Use the Google Ads API".to_string(),
        defaults: NodeDefaults {
            name: NODE_DISPLAY_NAME.to_string(),
        },
        usable_as_tool: true,
        inputs: vec![ConnectionType::Main],
        outputs: vec![ConnectionType::Main],
        credentials: vec![CredentialRequirement {
            name: CREDENTIAL_TYPE_NAME.to_string(),
            required: true,
        }],
        properties: properties(),
    }
}

fn properties() -> Vec<NodeProperty> {
    let every_resource: Vec<&str> = all::<Resource>().map(Resource::as_str).collect();
    let campaign = [Resource::Campaign.as_str()];

    vec![
        NodeProperty::new(
            "Resource",
            RESOURCE_PARAMETER,
            PropertyType::Options,
            Resource::Campaign.as_str(),
        )
        .no_data_expression()
        .with_options(
            all::<Resource>()
                .map(|resource| PropertyOption::value(resource.display_name(), resource.as_str()))
                .collect(),
        ),
        NodeProperty::new(
            "Operation",
            OPERATION_PARAMETER,
            PropertyType::Options,
            CampaignOperation::DEFAULT.as_str(),
        )
        .no_data_expression()
        .shown_when(RESOURCE_PARAMETER, campaign)
        .with_options(all::<CampaignOperation>().map(operation_option).collect()),
        NodeProperty::new(
            "Manager Customer ID",
            MANAGER_CUSTOMER_ID_PARAMETER,
            PropertyType::String,
            "",
        )
        .required()
        .with_placeholder("9998887777")
        .with_description("The manager account the request is made through. Hyphens are ignored.")
        .shown_when(RESOURCE_PARAMETER, every_resource.clone()),
        NodeProperty::new(
            "Client Customer ID",
            CLIENT_CUSTOMER_ID_PARAMETER,
            PropertyType::String,
            "",
        )
        .required()
        .with_placeholder("6665554444")
        .with_description("The account to query. Hyphens are ignored.")
        .shown_when(RESOURCE_PARAMETER, every_resource),
        NodeProperty::new(
            "Divide field names expressed with <i>micros</i> by 1,000,000 to get the actual value",
            MICROS_NOTICE_NAME,
            PropertyType::Notice,
            "",
        )
        .shown_when(RESOURCE_PARAMETER, campaign),
        NodeProperty::new("Campaign ID", CAMPAIGN_ID_PARAMETER, PropertyType::String, "")
            .required()
            .with_description("ID of the campaign")
            .shown_when(RESOURCE_PARAMETER, campaign)
            .shown_when(OPERATION_PARAMETER, [CampaignOperation::Get.as_str()]),
        NodeProperty::new(
            "Additional Options",
            ADDITIONAL_OPTIONS_PARAMETER,
            PropertyType::Collection,
            json!({}),
        )
        .with_placeholder("Add Option")
        .shown_when(RESOURCE_PARAMETER, campaign)
        .shown_when(OPERATION_PARAMETER, [CampaignOperation::GetAll.as_str()])
        .with_options(vec![
            PropertyOption::Property(date_range_property()),
            PropertyOption::Property(campaign_status_property()),
        ]),
        NodeProperty::new(
            "GAQL Query",
            GAQL_QUERY_PARAMETER,
            PropertyType::String,
            DEFAULT_GAQL_QUERY,
        )
        .required()
        .with_type_options(TypeOptions {
            rows: Some(10),
            password: None,
        })
        .with_description(GAQL_QUERY_DESCRIPTION)
        .shown_when(RESOURCE_PARAMETER, [Resource::CustomQuery.as_str()]),
    ]
}

fn operation_option(operation: CampaignOperation) -> PropertyOption {
    PropertyOption::Value(OptionValue {
        name: operation.display_name().to_string(),
        value: operation.as_str().into(),
        description: Some(operation.description().to_string()),
        action: Some(operation.action().to_string()),
    })
}

fn date_range_property() -> NodeProperty {
    let mut options = vec![PropertyOption::value("All Time", ALL_TIME)];
    options.extend(
        all::<DateRange>().map(|range| PropertyOption::value(range.display_name(), range.as_gaql())),
    );
    NodeProperty::new("Date Range", DATE_RANGE_PARAMETER, PropertyType::Options, ALL_TIME)
        .with_description("Only include metrics from this period")
        .with_options(options)
}

fn campaign_status_property() -> NodeProperty {
    let mut options = vec![PropertyOption::value("All", ALL_STATUSES)];
    options.extend(
        all::<CampaignStatus>()
            .map(|status| PropertyOption::value(status.display_name(), status.as_gaql())),
    );
    NodeProperty::new(
        "Campaign Status",
        CAMPAIGN_STATUS_PARAMETER,
        PropertyType::Options,
        ALL_STATUSES,
    )
    .with_description("Only include campaigns with this status")
    .with_options(options)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn property<'a>(description: &'a NodeDescription, name: &str) -> &'a NodeProperty {
        description
            .properties
            .iter()
            .find(|property| property.name == name)
            .unwrap()
    }

    fn option_values(property: &NodeProperty) -> Vec<String> {
        property
            .options
            .iter()
            .map(|option| match option {
                PropertyOption::Value(value) => value.value.as_str().unwrap().to_string(),
                PropertyOption::Property(property) => property.name.clone(),
            })
            .collect()
    }

    #[test]
    fn resources_default_to_campaign() {
        let description = get_description();
        let resource = property(&description, "resource");
        assert_eq!(resource.default, json!("campaign"));
        assert_eq!(option_values(resource), vec!["campaign", "customQuery"]);
    }

    #[test]
    fn date_ranges_offer_all_time_first() {
        let description = get_description();
        let additional_options = property(&description, "additionalOptions");
        let date_range = match &additional_options.options[0] {
            PropertyOption::Property(property) => property,
            PropertyOption::Value(_) => panic!("expected a nested property"),
        };
        let values = option_values(date_range);
        assert_eq!(values.len(), 13);
        assert_eq!(values[0], "allTime");
        assert!(values.contains(&"LAST_WEEK_MON_SUN".to_string()));
    }

    #[test]
    fn campaign_id_is_only_shown_for_get() {
        let description = get_description();
        let campaign_id = property(&description, "campaignId");
        let show = &campaign_id.display_options.as_ref().unwrap().show;
        assert_eq!(show["operation"], vec!["get"]);
        assert_eq!(show["resource"], vec!["campaign"]);
    }

    #[test]
    fn customer_ids_are_shown_for_every_resource() {
        let description = get_description();
        for name in ["managerCustomerId", "clientCustomerId"] {
            let show = &property(&description, name)
                .display_options
                .as_ref()
                .unwrap()
                .show;
            assert_eq!(show["resource"], vec!["campaign", "customQuery"]);
        }
    }

    #[test]
    fn the_micros_notice_keeps_its_published_name() {
        let description = get_description();
        let notice = property(&description, "campaigsNotice");
        assert_eq!(notice.property_type, PropertyType::Notice);
        assert_eq!(
            notice.display_options.as_ref().unwrap().show["resource"],
            vec!["campaign"]
        );
        assert!(description
            .properties
            .iter()
            .all(|property| property.name != "campaignsNotice"));
    }
}
