//! Lenient readers for extraction payloads.
//!
//! Extraction output is untyped JSON: depths arrive as numbers, numeric
//! strings or `null`, and list entries are occasionally not objects at all.
//! Everything in this module answers "missing" with `None` (or an empty
//! list) instead of an error, so callers only ever branch on `Option`.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Read a finite number from a JSON value.
///
/// Accepts JSON numbers and numeric strings such as `"1,250"`, `" 980.5 "`
/// or `"4500 ft"`. Returns `None` for everything else, including `NaN`.
pub fn number(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => number_str(s),
        _ => None,
    };
    parsed.filter(|v| v.is_finite())
}

/// Read a finite number from free text, with the same leniency as [`number`].
pub fn number_str(s: &str) -> Option<f64> {
    let mut cleaned = s.trim().replace(',', "");
    for suffix in ["ft", "'"] {
        if let Some(rest) = cleaned.strip_suffix(suffix) {
            cleaned = rest.trim_end().to_string();
        }
    }
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Read a non-empty, trimmed string from a JSON value. Numbers are rendered
/// as their JSON text so that `12345` and `"12345"` read the same.
pub fn text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// True when a value counts as "present": not null, not a blank string,
/// not an empty list or object.
pub fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(s) => !s.trim().is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
        Value::Bool(_) | Value::Number(_) => true,
    }
}

/// `deserialize_with` adapter for optional numeric fields.
pub fn opt_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(number))
}

/// `deserialize_with` adapter for optional text fields.
pub fn opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(text))
}

/// `deserialize_with` adapter for record lists.
///
/// `null` or a non-list reads as an empty list; entries that do not
/// deserialize into `T` are dropped one by one.
pub fn list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    let items = match value {
        Some(Value::Array(items)) => items,
        Some(Value::Null) | None => return Ok(Vec::new()),
        Some(other) => {
            tracing::debug!(kind = value_kind(&other), "expected a list, reading as empty");
            return Ok(Vec::new());
        }
    };

    let mut out = Vec::with_capacity(items.len());
    for (idx, item) in items.into_iter().enumerate() {
        match serde_json::from_value::<T>(item) {
            Ok(parsed) => out.push(parsed),
            Err(e) => tracing::debug!(index = idx, error = %e, "dropped malformed list entry"),
        }
    }
    Ok(out)
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_number_from_json_number() {
        assert_eq!(number(&json!(150)), Some(150.0));
        assert_eq!(number(&json!(12.5)), Some(12.5));
    }

    #[test]
    fn test_number_from_numeric_string() {
        assert_eq!(number(&json!("1,250")), Some(1250.0));
        assert_eq!(number(&json!(" 980.5 ")), Some(980.5));
        assert_eq!(number(&json!("4500 ft")), Some(4500.0));
    }

    #[test]
    fn test_number_rejects_garbage() {
        assert_eq!(number(&json!("unknown")), None);
        assert_eq!(number(&json!("")), None);
        assert_eq!(number(&json!("NaN")), None);
        assert_eq!(number(&json!(null)), None);
        assert_eq!(number(&json!([1])), None);
    }

    #[test]
    fn test_text_trims_and_rejects_blank() {
        assert_eq!(text(&json!("  42-001-12345 ")), Some("42-001-12345".into()));
        assert_eq!(text(&json!("   ")), None);
        assert_eq!(text(&json!(12345)), Some("12345".into()));
        assert_eq!(text(&json!(null)), None);
    }

    #[test]
    fn test_is_present() {
        assert!(is_present(&json!([{ "depth": 10 }])));
        assert!(is_present(&json!(0)));
        assert!(!is_present(&json!([])));
        assert!(!is_present(&json!("")));
        assert!(!is_present(&json!(null)));
    }

    #[derive(Debug, Deserialize)]
    struct Holder {
        #[serde(default, deserialize_with = "opt_f64")]
        depth: Option<f64>,
        #[serde(default, deserialize_with = "list")]
        items: Vec<Item>,
    }

    #[derive(Debug, Deserialize)]
    struct Item {
        name: String,
    }

    #[test]
    fn test_list_drops_malformed_entries() {
        let h: Holder = serde_json::from_value(json!({
            "depth": "2,000",
            "items": [{ "name": "a" }, "junk", { "name": "b" }, 7]
        }))
        .unwrap();
        assert_eq!(h.depth, Some(2000.0));
        let names: Vec<&str> = h.items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn test_list_null_and_missing() {
        let h: Holder = serde_json::from_value(json!({ "items": null })).unwrap();
        assert!(h.items.is_empty());
        assert!(h.depth.is_none());

        let h: Holder = serde_json::from_value(json!({ "items": "n/a" })).unwrap();
        assert!(h.items.is_empty());
    }
}
