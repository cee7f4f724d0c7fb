use std::fs;
use std::path::PathBuf;

use query_engine_translation::translation;

/// Translate the request of a golden test directory and render the resulting plan.
pub fn test_translation(testname: &str) -> anyhow::Result<String> {
    let directory = PathBuf::from("tests/goldenfiles").join(testname);

    let request: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(directory.join("request.json"))?)?;
    let parameters = match request {
        serde_json::Value::Object(parameters) => parameters,
        other => anyhow::bail!("request.json must contain an object, found {other}"),
    };

    let resource = translation::request::resource(&parameters)?;
    let request = translation::request::decode(resource, &parameters)?;
    let plan = translation::query::translate(&request)?;

    Ok(format!(
        "{}\n\n{:?}\n{:?}",
        plan.query.query_gaql().gaql,
        plan.customer,
        plan.flatten
    ))
}
