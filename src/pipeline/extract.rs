//! Field extraction from pipeline result mappings
//!
//! Upstream stages may wrap a single datum in a one-element list for
//! batching. [`extract`] undoes that so callers get the raw datum.

use serde_json::{Map, Value};

/// Pure: look up `key` in a result mapping, unwrapping one level of list
///
/// Returns `None` when the key is missing. A non-empty array yields its
/// first element; anything else, including an empty array, is returned
/// unchanged.
///
/// # Examples
///
/// ```
/// use pipeline_inspect::pipeline::extract;
/// use serde_json::json;
///
/// let results = json!({"points": [[0.0, 1.0, 2.0]], "sample_idx": 7});
/// let results = results.as_object().unwrap();
///
/// assert_eq!(extract(results, "points"), Some(&json!([0.0, 1.0, 2.0])));
/// assert_eq!(extract(results, "sample_idx"), Some(&json!(7)));
/// assert_eq!(extract(results, "img"), None);
/// ```
pub fn extract<'a>(results: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    let value = results.get(key)?;
    match value {
        Value::Array(items) => Some(items.first().unwrap_or(value)),
        _ => Some(value),
    }
}
