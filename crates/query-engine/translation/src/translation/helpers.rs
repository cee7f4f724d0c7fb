//! Helpers for reading node parameters and normalizing account identifiers.

use serde_json::Value;

use super::error::Error;

/// The evaluated parameters of one node item.
pub type Parameters = serde_json::Map<String, Value>;

/// Extract a required string parameter.
pub fn require_string<'a>(parameters: &'a Parameters, name: &str) -> Result<&'a str, Error> {
    optional_string(parameters, name)?.ok_or_else(|| Error::MissingParameter(name.to_string()))
}

/// Extract an optional string parameter. `null` counts as absent.
pub fn optional_string<'a>(parameters: &'a Parameters, name: &str) -> Result<Option<&'a str>, Error> {
    match parameters.get(name) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(value)) => Ok(Some(value)),
        Some(other) => Err(Error::invalid_parameter(
            name,
            format!("expected a string, got {}", json_type(other)),
        )),
    }
}

/// Extract an optional object parameter, such as a collection of additional options.
pub fn optional_object<'a>(
    parameters: &'a Parameters,
    name: &str,
) -> Result<Option<&'a Parameters>, Error> {
    match parameters.get(name) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Object(value)) => Ok(Some(value)),
        Some(other) => Err(Error::invalid_parameter(
            name,
            format!("expected an object, got {}", json_type(other)),
        )),
    }
}

/// Remove every hyphen, so `123-456-7890` becomes `1234567890`.
pub fn strip_hyphens(id: &str) -> String {
    id.replace('-', "")
}

/// Normalize a customer id: hyphens are stripped and what remains must be digits.
pub fn customer_id(parameter: &str, value: &str) -> Result<String, Error> {
    let id = strip_hyphens(value);
    if id.is_empty() || !id.chars().all(|c| c.is_ascii_digit()) {
        Err(Error::invalid_parameter(
            parameter,
            format!("'{value}' is not a customer id (digits with optional hyphens)"),
        ))
    } else {
        Ok(id)
    }
}

/// Normalize a manager (login) customer id. An empty id means the request is not made
/// through a manager account.
pub fn login_customer_id(parameter: &str, value: &str) -> Result<Option<String>, Error> {
    if strip_hyphens(value).is_empty() {
        Ok(None)
    } else {
        customer_id(parameter, value).map(Some)
    }
}

/// Normalize a campaign id into the integer compared against `campaign.id`.
pub fn campaign_id(parameter: &str, value: &str) -> Result<i64, Error> {
    let id = strip_hyphens(value);
    if id.is_empty() || !id.chars().all(|c| c.is_ascii_digit()) {
        return Err(Error::invalid_parameter(
            parameter,
            format!("'{value}' is not a campaign id (digits with optional hyphens)"),
        ));
    }
    id.parse().map_err(|_| {
        Error::invalid_parameter(parameter, format!("'{value}' is out of range for a campaign id"))
    })
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
