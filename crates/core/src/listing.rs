use serde::{Deserialize, Deserializer, Serialize};

/// Error returned when a response body cannot be decoded into listings
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("invalid JSON: {0}")]
    InvalidJson(String),

    #[error("expected a JSON array, found {0}")]
    NotAnArray(&'static str),
}

/// Food truck permit record as returned by the open-data API
///
/// Every field is optional: the API omits keys freely and the filter is the
/// only place that decides whether a record is usable.
#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct TruckListing {
    #[serde(rename = "start24", default, deserialize_with = "string_or_absent")]
    pub start_time: Option<String>,
    #[serde(rename = "end24", default, deserialize_with = "string_or_absent")]
    pub end_time: Option<String>,
    #[serde(
        rename = "dayofweekstr",
        default,
        deserialize_with = "string_or_absent"
    )]
    pub day_of_week: Option<String>,
    #[serde(rename = "applicant", default, deserialize_with = "string_or_absent")]
    pub vendor_name: Option<String>,
    #[serde(rename = "location", default, deserialize_with = "string_or_absent")]
    pub address: Option<String>,
}

/// Keeps string values, stringifies numbers and booleans, and treats `null`,
/// arrays and objects as absent.
fn string_or_absent<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        Some(serde_json::Value::Bool(b)) => Some(b.to_string()),
        _ => None,
    })
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

/// Decode a response body into truck listings
///
/// The body must be a JSON array. Objects become listings in source order;
/// array elements that are not objects carry no listing and are dropped.
pub fn decode_listings(body: &str) -> Result<Vec<TruckListing>, DecodeError> {
    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|e| DecodeError::InvalidJson(e.to_string()))?;

    let elements = match value {
        serde_json::Value::Array(elements) => elements,
        other => return Err(DecodeError::NotAnArray(json_type_name(&other))),
    };

    Ok(elements
        .into_iter()
        .filter(|element| element.is_object())
        .filter_map(|element| serde_json::from_value::<TruckListing>(element).ok())
        .collect())
}
