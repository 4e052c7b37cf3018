use crate::loose;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProcessingStatus {
    #[default]
    Pending,
    Processing,
    Completed,
    Failed,
    #[serde(other)]
    Other,
}

impl fmt::Display for ProcessingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessingStatus::Pending => write!(f, "pending"),
            ProcessingStatus::Processing => write!(f, "processing"),
            ProcessingStatus::Completed => write!(f, "completed"),
            ProcessingStatus::Failed => write!(f, "failed"),
            ProcessingStatus::Other => write!(f, "other"),
        }
    }
}

/// One uploaded file as returned by the jobs API, with its extraction result.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobFile {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub job_id: Option<String>,
    #[serde(default)]
    pub filename: String,
    #[serde(default)]
    pub processing_status: ProcessingStatus,
    /// Schema-shaped extraction output. Absent until processing completes.
    #[serde(default)]
    pub result: Option<Value>,
}

impl JobFile {
    /// The extraction result, but only once processing has completed.
    pub fn completed_result(&self) -> Option<&Value> {
        if self.processing_status != ProcessingStatus::Completed {
            return None;
        }
        self.result.as_ref().filter(|v| !v.is_null())
    }

    pub fn document(&self) -> ExtractedDocument<'_> {
        match &self.result {
            Some(value) => ExtractedDocument::new(value),
            None => ExtractedDocument::empty(),
        }
    }
}

/// A depth interval for one named formation, in measured feet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormationInterval {
    pub from: Option<f64>,
    pub to: Option<f64>,
    pub formation: Option<String>,
}

impl FormationInterval {
    pub fn new(from: f64, to: f64, formation: &str) -> Self {
        Self {
            from: Some(from),
            to: Some(to),
            formation: Some(formation.to_string()),
        }
    }

    /// Both bounds, when both are present and finite.
    pub fn bounds(&self) -> Option<(f64, f64)> {
        match (self.from, self.to) {
            (Some(from), Some(to)) if from.is_finite() && to.is_finite() => Some((from, to)),
            _ => None,
        }
    }
}

/// Read-only view over an extraction result object.
///
/// Every accessor returns `None` (or an empty slice) when the field is
/// absent, null, blank or of the wrong shape.
#[derive(Debug, Clone, Copy)]
pub struct ExtractedDocument<'a> {
    fields: Option<&'a Map<String, Value>>,
}

impl<'a> ExtractedDocument<'a> {
    pub fn new(result: &'a Value) -> Self {
        Self {
            fields: result.as_object(),
        }
    }

    pub fn empty() -> Self {
        Self { fields: None }
    }

    /// Raw field value, with `null` treated as absent.
    pub fn get(&self, key: &str) -> Option<&'a Value> {
        self.fields?.get(key).filter(|v| !v.is_null())
    }

    pub fn text(&self, key: &str) -> Option<String> {
        self.get(key).and_then(loose::text)
    }

    pub fn number(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(loose::number)
    }

    pub fn list(&self, key: &str) -> &'a [Value] {
        match self.get(key) {
            Some(Value::Array(items)) => items.as_slice(),
            _ => &[],
        }
    }

    /// True when the field holds something other than null, blank or empty.
    pub fn has(&self, key: &str) -> bool {
        self.get(key).is_some_and(loose::is_present)
    }

    pub fn api_number(&self) -> Option<String> {
        self.text("api_number")
    }

    pub fn elevation(&self) -> Option<f64> {
        self.number("elevation")
    }

    pub fn measured_depth(&self) -> Option<f64> {
        self.number("measured_depth")
    }

    /// Formation rows in document order. Entries that are not objects are
    /// skipped; missing bounds stay `None`.
    pub fn formations(&self) -> Vec<FormationInterval> {
        self.list("formations")
            .iter()
            .filter_map(Value::as_object)
            .map(|row| FormationInterval {
                from: row.get("from").and_then(loose::number),
                to: row.get("to").and_then(loose::number),
                formation: ["formation_name", "formation", "name"]
                    .iter()
                    .find_map(|k| row.get(*k).and_then(loose::text)),
            })
            .collect()
    }

    /// Number of entries in a list field (zero when absent).
    pub fn list_len(&self, key: &str) -> usize {
        self.list(key).len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unknown_status_maps_to_other() {
        let file: JobFile = serde_json::from_value(json!({
            "filename": "a.pdf",
            "processing_status": "queued_for_review"
        }))
        .unwrap();
        assert_eq!(file.processing_status, ProcessingStatus::Other);
    }

    #[test]
    fn test_completed_result_requires_completed_status() {
        let mut file = JobFile {
            filename: "a.pdf".into(),
            processing_status: ProcessingStatus::Processing,
            result: Some(json!({ "elevation": 1200 })),
            ..Default::default()
        };
        assert!(file.completed_result().is_none());

        file.processing_status = ProcessingStatus::Completed;
        assert!(file.completed_result().is_some());

        file.result = Some(Value::Null);
        assert!(file.completed_result().is_none());
    }

    #[test]
    fn test_document_accessors() {
        let value = json!({
            "api_number": " 42-123-45678 ",
            "elevation": "1,150",
            "measured_depth": null,
            "casing": [],
            "pluggings": [{ "depth": 100 }]
        });
        let doc = ExtractedDocument::new(&value);
        assert_eq!(doc.api_number(), Some("42-123-45678".into()));
        assert_eq!(doc.elevation(), Some(1150.0));
        assert_eq!(doc.measured_depth(), None);
        assert!(!doc.has("casing"));
        assert!(doc.has("pluggings"));
        assert_eq!(doc.list_len("pluggings"), 1);
        assert_eq!(doc.list_len("missing"), 0);
    }

    #[test]
    fn test_non_object_result_reads_as_empty() {
        let value = json!(["not", "an", "object"]);
        let doc = ExtractedDocument::new(&value);
        assert!(doc.get("elevation").is_none());
        assert!(doc.formations().is_empty());
    }

    #[test]
    fn test_formations_name_aliases_and_null_bounds() {
        let value = json!({
            "formations": [
                { "from": 0, "to": 120, "formation_name": "Surface Sand" },
                { "from": "120", "to": null, "formation": "Shale" },
                "garbage",
                { "from": 300, "to": 450, "name": "Lime" }
            ]
        });
        let formations = ExtractedDocument::new(&value).formations();
        assert_eq!(formations.len(), 3);
        assert_eq!(formations[0].formation.as_deref(), Some("Surface Sand"));
        assert_eq!(formations[1].from, Some(120.0));
        assert_eq!(formations[1].bounds(), None);
        assert_eq!(formations[2].formation.as_deref(), Some("Lime"));
    }
}
