//! Defensive parsing of the `get_activity` response.
//!
//! Each field is read on its own: a missing, null or non-numeric value
//! becomes 0.0 without affecting the others.

use serde_json::Value;

use crate::model::{Activity, ActivityField};

/// Location of the activity object inside the response envelope.
const DATA_PATH: &str = "response.data";

/// Parses a raw response body into an [`Activity`].
///
/// Never fails. A body that is not JSON yields an all-zero activity.
pub fn parse_activity(body: &[u8]) -> Activity {
    let document: Value = match serde_json::from_slice(body) {
        Ok(document) => document,
        Err(err) => {
            tracing::warn!("Tautulli response is not valid JSON: {}", err);
            Value::Null
        }
    };
    let data = lookup(&document, DATA_PATH);

    let mut activity = Activity::default();
    for field in ActivityField::ALL {
        let value = data
            .map(|data| float_at(data, field.json_key()))
            .unwrap_or_default();
        activity.set(field, value);
    }
    activity
}

/// Follows a dotted path through nested objects.
pub fn lookup<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.')
        .filter(|segment| !segment.is_empty())
        .try_fold(value, |current, segment| current.get(segment))
}

/// Reads a float from `path`, or 0.0 on any traversal or type failure.
pub fn float_at(value: &Value, path: &str) -> f64 {
    lookup(value, path).map(as_float).unwrap_or_default()
}

// Tautulli sends some counters as strings ("stream_count": "2").
fn as_float(value: &Value) -> f64 {
    match value {
        Value::Number(number) => number.as_f64().unwrap_or_default(),
        Value::String(text) => text.trim().parse::<f64>().unwrap_or_default(),
        _ => 0.0,
    }
}
