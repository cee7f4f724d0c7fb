mod common;

use axum::http::StatusCode;
use serde_json::json;
use similar_asserts::assert_eq;

use google_ads_configuration::environment::FixedEnvironment;
use query_engine_gaql::gaql::execution_plan::CustomerTarget;
use tests_common::executor::RecordingExecutor;
use tests_common::router::{create_router, create_router_with_environment, CONFIGURED_REFRESH_TOKEN};

const MISSING_REFRESH_TOKEN: &str =
    "No refresh token found in credentials. Please re-authenticate with Google Ads.";

/// A row as the executor returns it, keys already in GAQL snake_case.
fn campaign_row() -> serde_json::Value {
    json!({
        "campaign": { "resource_name": "customers/6665554444/campaigns/123", "id": "123", "name": "Spring" },
        "metrics": { "clicks": "10", "ctr": 0.25 },
        "campaign_budget": { "amount_micros": "5000000" }
    })
}

#[tokio::test]
async fn list_campaigns_with_filters() {
    let executor = RecordingExecutor::returning(json!([campaign_row()]));
    let router = create_router(executor.clone()).await;

    let (status, body) = common::run_execute(router, &common::read_goldenfile("list_campaigns")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "items": [{
                "json": {
                    "resource_name": "customers/6665554444/campaigns/123",
                    "id": "123",
                    "name": "Spring",
                    "clicks": "10",
                    "ctr": 0.25,
                    "amount_micros": "5000000"
                },
                "pairedItem": { "item": 0 }
            }]
        })
    );

    let calls = executor.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(
        calls[0].customer,
        CustomerTarget {
            customer_id: "6665554444".to_string(),
            login_customer_id: Some("9998887777".to_string()),
        }
    );
    assert!(calls[0]
        .query
        .ends_with("WHERE campaign.id > 0 AND segments.date DURING LAST_7_DAYS AND campaign.status = 'ENABLED'"));
    assert_eq!(calls[0].refresh_token.as_str(), "sent-refresh-token");
}

#[tokio::test]
async fn custom_query_is_sent_verbatim_and_prefix_flattened() {
    let executor = RecordingExecutor::returning(json!([{
        "ad_group": { "id": "7", "name": "Shoes" },
        "metrics": { "clicks": "3" }
    }]));
    let router = create_router(executor.clone()).await;
    let context = common::read_goldenfile("custom_query");

    let (status, body) = common::run_execute(router, &context).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["items"][0]["json"],
        json!({ "ad_group_id": "7", "ad_group_name": "Shoes", "metrics_clicks": "3" })
    );

    let calls = executor.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(
        json!(calls[0].query),
        context["items"][0]["parameters"]["gaqlQuery"]
    );
    assert_eq!(calls[0].customer.login_customer_id, None);
}

#[tokio::test]
async fn missing_refresh_token_fails_without_querying() {
    let executor = RecordingExecutor::returning(json!([campaign_row()]));
    let router = create_router(executor.clone()).await;

    let (status, body) =
        common::run_execute(router, &common::read_goldenfile("missing_refresh_token")).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], json!(MISSING_REFRESH_TOKEN));
    assert_eq!(body["details"], json!({ "item": 0 }));
    assert!(executor.calls().is_empty());
}

#[tokio::test]
async fn missing_refresh_token_becomes_one_error_per_item_when_continuing() {
    let executor = RecordingExecutor::returning(json!([campaign_row()]));
    let router = create_router(executor.clone()).await;
    let mut context = common::read_goldenfile("missing_refresh_token");
    context["continueOnFail"] = json!(true);

    let (status, body) = common::run_execute(router, &context).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "items": [
                { "json": { "error": MISSING_REFRESH_TOKEN }, "pairedItem": { "item": 0 } },
                { "json": { "error": MISSING_REFRESH_TOKEN }, "pairedItem": { "item": 1 } }
            ]
        })
    );
    assert!(executor.calls().is_empty());
}

#[tokio::test]
async fn a_failing_item_does_not_stop_the_others_when_continuing() {
    let executor = RecordingExecutor::returning(json!([campaign_row()]));
    let router = create_router(executor.clone()).await;

    let (status, body) = common::run_execute(router, &common::read_goldenfile("mixed_items")).await;

    assert_eq!(status, StatusCode::OK);
    let items = body["items"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["pairedItem"], json!({ "item": 0 }));
    assert!(items[0]["json"]["error"]
        .as_str()
        .unwrap()
        .contains("campaignId"));
    assert_eq!(items[1]["json"]["id"], json!("123"));
    assert_eq!(items[1]["pairedItem"], json!({ "item": 1 }));

    let calls = executor.calls();
    assert_eq!(calls.len(), 1);
    assert!(calls[0].query.ends_with("WHERE campaign.id = 123456"));
}

#[tokio::test]
async fn a_failing_item_aborts_the_invocation() {
    let executor = RecordingExecutor::returning(json!([campaign_row()]));
    let router = create_router(executor.clone()).await;
    let mut context = common::read_goldenfile("mixed_items");
    context["continueOnFail"] = json!(false);

    let (status, body) = common::run_execute(router, &context).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"], json!({ "item": 0 }));
    assert!(executor.calls().is_empty());
}

#[tokio::test]
async fn query_failures_are_reported() {
    let executor = RecordingExecutor::failing(400, "Error in query: unexpected input FORM.");
    let router = create_router(executor.clone()).await;

    let (status, body) = common::run_execute(router, &common::read_goldenfile("custom_query")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains("Error in query: unexpected input FORM."));
    assert_eq!(executor.calls().len(), 1);
}

#[tokio::test]
async fn query_failures_become_error_records_when_continuing() {
    let executor = RecordingExecutor::failing(400, "Error in query: unexpected input FORM.");
    let router = create_router(executor.clone()).await;
    let mut context = common::read_goldenfile("custom_query");
    context["continueOnFail"] = json!(true);

    let (status, body) = common::run_execute(router, &context).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["items"][0]["json"]["error"],
        json!("Google Ads API error (400): Error in query: unexpected input FORM.")
    );
}

#[tokio::test]
async fn configured_credentials_are_used_when_none_are_sent() {
    let executor = RecordingExecutor::returning(json!([]));
    let router = create_router(executor.clone()).await;
    let mut context = common::read_goldenfile("list_campaigns");
    context.as_object_mut().unwrap().remove("credentials");

    let (status, body) = common::run_execute(router, &context).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "items": [] }));
    let calls = executor.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].refresh_token.as_str(), CONFIGURED_REFRESH_TOKEN);
}

#[tokio::test]
async fn no_credentials_at_all_is_unauthorized() {
    let executor = RecordingExecutor::returning(json!([]));
    let router = create_router_with_environment(executor.clone(), FixedEnvironment::default()).await;
    let mut context = common::read_goldenfile("list_campaigns");
    context.as_object_mut().unwrap().remove("credentials");

    let (status, body) = common::run_execute(router, &context).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["details"], serde_json::Value::Null);
    assert!(executor.calls().is_empty());
}

#[tokio::test]
async fn no_items_produce_no_output() {
    let executor = RecordingExecutor::returning(json!([campaign_row()]));
    let router = create_router(executor.clone()).await;
    let mut context = common::read_goldenfile("list_campaigns");
    context["items"] = json!([]);

    let (status, body) = common::run_execute(router, &context).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "items": [] }));
    assert!(executor.calls().is_empty());
}

#[tokio::test]
async fn unknown_resource_is_an_item_error() {
    let executor = RecordingExecutor::returning(json!([]));
    let router = create_router(executor.clone()).await;
    let mut context = common::read_goldenfile("custom_query");
    context["items"][0]["parameters"]["resource"] = json!("adGroup");
    context["continueOnFail"] = json!(true);

    let (status, body) = common::run_execute(router, &context).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["items"][0]["json"]["error"],
        json!("Unknown resource 'adGroup'.")
    );
    assert!(executor.calls().is_empty());
}
