use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Info => write!(f, "info"),
        }
    }
}

/// One finding from a single constraint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstraintCheck {
    /// Stable identifier of the constraint, e.g. "elevation".
    pub name: String,
    pub passed: bool,
    /// Human-readable explanation shown in badges and tooltips.
    pub message: String,
    pub severity: Severity,
    /// Structured evidence (compared values, gaps, deltas).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl ConstraintCheck {
    pub fn pass(name: &str, message: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            passed: true,
            message: message.into(),
            severity: Severity::Info,
            details: None,
        }
    }

    pub fn fail(name: &str, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            passed: false,
            message: message.into(),
            severity,
            details: None,
        }
    }

    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }
}

/// Result of comparing the permit number in a filename with the one in the data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermitCheck {
    pub has_violation: bool,
    pub filename_permit: Option<String>,
    pub data_permit: Option<String>,
    pub message: String,
}

/// Counts of failed checks per severity, for status badges.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstraintSummary {
    pub total: usize,
    pub passed: usize,
    pub errors: usize,
    pub warnings: usize,
}

impl ConstraintSummary {
    pub fn is_clean(&self) -> bool {
        self.errors == 0 && self.warnings == 0
    }
}

/// Tally a list of findings.
pub fn summarize(checks: &[ConstraintCheck]) -> ConstraintSummary {
    let mut summary = ConstraintSummary {
        total: checks.len(),
        ..Default::default()
    };
    for check in checks {
        if check.passed {
            summary.passed += 1;
            continue;
        }
        match check.severity {
            Severity::Error => summary.errors += 1,
            Severity::Warning => summary.warnings += 1,
            Severity::Info => {}
        }
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_summarize_counts_failures_by_severity() {
        let checks = vec![
            ConstraintCheck::pass("a", "ok"),
            ConstraintCheck::fail("b", Severity::Error, "bad"),
            ConstraintCheck::fail("c", Severity::Warning, "hmm"),
            ConstraintCheck::fail("d", Severity::Error, "bad"),
        ];
        let s = summarize(&checks);
        assert_eq!(s.total, 4);
        assert_eq!(s.passed, 1);
        assert_eq!(s.errors, 2);
        assert_eq!(s.warnings, 1);
        assert!(!s.is_clean());
    }

    #[test]
    fn test_summarize_empty_is_clean() {
        assert!(summarize(&[]).is_clean());
    }

    #[test]
    fn test_check_serializes_lowercase_severity() {
        let check = ConstraintCheck::fail("elevation", Severity::Error, "Elevation is missing")
            .with_details(json!({ "elevation": null }));
        let v = serde_json::to_value(&check).unwrap();
        assert_eq!(v["severity"], "error");
        assert_eq!(v["passed"], false);
        assert!(v["details"].is_object());

        let v = serde_json::to_value(ConstraintCheck::pass("casing", "ok")).unwrap();
        assert!(v.get("details").is_none());
    }
}
