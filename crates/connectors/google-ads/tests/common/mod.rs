//! Common functions used across test cases.
#![allow(dead_code)]

use std::fs;

use axum::http::StatusCode;
use axum_test_helper::TestClient;

/// Post an execution context to the node and return the status and the response body.
pub async fn run_execute(router: axum::Router, context: &serde_json::Value) -> (StatusCode, serde_json::Value) {
    let client = TestClient::new(router);

    let res = client
        .post("/execute")
        .body(context.to_string())
        .header("Content-Type", "application/json")
        .send()
        .await;

    let status = res.status();
    (status, res.json().await)
}

/// Read the execution context of a golden file test.
pub fn read_goldenfile(testname: &str) -> serde_json::Value {
    let request = fs::read_to_string(format!("tests/goldenfiles/{testname}.json"))
        .unwrap_or_else(|err| panic!("unable to read golden file {testname}: {err}"));
    serde_json::from_str(&request).unwrap()
}

/// Get a JSON document from the node.
pub async fn get_json(router: axum::Router, path: &str) -> (StatusCode, serde_json::Value) {
    let client = TestClient::new(router);
    let res = client.get(path).send().await;
    let status = res.status();
    (status, res.json().await)
}
