use crate::constraints::outcome::PermitCheck;
use crate::model::{ExtractedDocument, JobFile};
use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

/// Filename patterns, tried in order. The first one that matches wins, so a
/// bare digit run takes precedence over the labelled forms.
static FILENAME_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(\d+)",
        r"(?i)permit[_-]?(\d+)",
        r"(?i)(\d+)[_-]?permit",
        r"\[(\d+)\]",
        r"\((\d+)\)",
    ]
    .iter()
    .filter_map(|p| Regex::new(p).ok())
    .collect()
});

/// Field names under which extraction schemas commonly store the permit number.
pub const PERMIT_FIELD_ALIASES: &[&str] = &[
    "permit_number",
    "permitNumber",
    "permit_no",
    "permitNo",
    "permit_num",
    "permit",
    "permit_id",
    "permitId",
    "Permit Number",
    "PERMIT_NUMBER",
    "drilling_permit",
];

const MISSING_DATA_MESSAGE: &str = "Cannot compare permit numbers - missing data";

/// Pull a permit number out of a filename.
pub fn permit_from_filename(filename: &str) -> Option<String> {
    FILENAME_PATTERNS.iter().find_map(|re| {
        re.captures(filename)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    })
}

/// Pull a permit number out of extracted data: the first alias holding a
/// non-empty string, reduced to its digits. A string with no digits at all
/// (e.g. "N/A") still wins the alias scan and reads as missing.
pub fn permit_from_data(doc: &ExtractedDocument<'_>) -> Option<String> {
    let raw = PERMIT_FIELD_ALIASES.iter().find_map(|key| {
        doc.get(key)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
    })?;
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        None
    } else {
        Some(digits)
    }
}

/// Canonical form for comparison: trimmed, without leading zeros.
pub fn normalize_permit(raw: &str) -> String {
    let stripped = raw.trim().trim_start_matches('0');
    if stripped.is_empty() {
        "0".to_string()
    } else {
        stripped.to_string()
    }
}

/// Compare the permit number in a file's name with the one in its
/// extracted data. Missing data on either side counts as a violation.
pub fn check_permit_number_match(file: &JobFile) -> PermitCheck {
    let filename_permit = permit_from_filename(&file.filename);
    let data_permit = permit_from_data(&file.document());

    let (has_violation, message) = match (&filename_permit, &data_permit) {
        (Some(from_name), Some(from_data)) => {
            if normalize_permit(from_name) == normalize_permit(from_data) {
                (
                    false,
                    format!("Permit number {from_name} matches extracted data"),
                )
            } else {
                (
                    true,
                    format!(
                        "Permit number mismatch: filename has \"{from_name}\", data has \"{from_data}\""
                    ),
                )
            }
        }
        _ => (true, MISSING_DATA_MESSAGE.to_string()),
    };

    PermitCheck {
        has_violation,
        filename_permit,
        data_permit,
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ProcessingStatus;
    use serde_json::json;

    fn file(filename: &str, result: Value) -> JobFile {
        JobFile {
            filename: filename.into(),
            processing_status: ProcessingStatus::Completed,
            result: Some(result),
            ..Default::default()
        }
    }

    #[test]
    fn test_filename_bare_digits() {
        assert_eq!(permit_from_filename("PERMIT12345.pdf"), Some("12345".into()));
        assert_eq!(permit_from_filename("0045678_log.pdf"), Some("0045678".into()));
    }

    #[test]
    fn test_filename_first_digit_run_wins() {
        // Ambiguous names yield the first digit run, right or wrong.
        assert_eq!(
            permit_from_filename("report_v2_permit_88123.pdf"),
            Some("2".into())
        );
    }

    #[test]
    fn test_filename_without_digits() {
        assert_eq!(permit_from_filename("well_report.pdf"), None);
    }

    #[test]
    fn test_data_aliases_in_order() {
        let value = json!({ "permitNumber": "P-00123", "permit": "999" });
        let doc = ExtractedDocument::new(&value);
        assert_eq!(permit_from_data(&doc), Some("00123".into()));
    }

    #[test]
    fn test_data_first_non_empty_string_wins() {
        let value = json!({ "permit_number": "N/A", "permit_no": "12345" });
        let doc = ExtractedDocument::new(&value);
        assert_eq!(permit_from_data(&doc), None);

        let value = json!({ "permit_number": "  ", "permit_no": "12345" });
        let doc = ExtractedDocument::new(&value);
        assert_eq!(permit_from_data(&doc), Some("12345".into()));
    }

    #[test]
    fn test_data_ignores_non_string_values() {
        let value = json!({ "permit_number": 4411, "permit_no": null });
        let doc = ExtractedDocument::new(&value);
        assert_eq!(permit_from_data(&doc), None);
    }

    #[test]
    fn test_placeholder_permit_is_missing_data() {
        let check = check_permit_number_match(&file(
            "12345.pdf",
            json!({ "permit_number": "N/A", "permit_no": "12345" }),
        ));
        assert!(check.has_violation);
        assert!(check.data_permit.is_none());
        assert_eq!(check.message, MISSING_DATA_MESSAGE);
    }

    #[test]
    fn test_normalize_permit() {
        assert_eq!(normalize_permit(" 012345 "), "12345");
        assert_eq!(normalize_permit("000"), "0");
        assert_eq!(normalize_permit(""), "0");
    }

    #[test]
    fn test_leading_zero_match() {
        let check = check_permit_number_match(&file(
            "PERMIT12345.pdf",
            json!({ "permit_number": "012345" }),
        ));
        assert!(!check.has_violation);
        assert_eq!(check.filename_permit.as_deref(), Some("12345"));
        assert_eq!(check.data_permit.as_deref(), Some("012345"));
    }

    #[test]
    fn test_mismatch_quotes_both_values() {
        let check =
            check_permit_number_match(&file("77001.pdf", json!({ "permit_number": "77010" })));
        assert!(check.has_violation);
        assert!(check.message.contains("\"77001\""));
        assert!(check.message.contains("\"77010\""));
    }

    #[test]
    fn test_missing_filename_permit_is_violation() {
        let check = check_permit_number_match(&file(
            "well_report.pdf",
            json!({ "permit_number": "12345" }),
        ));
        assert!(check.has_violation);
        assert!(check.filename_permit.is_none());
        assert_eq!(check.message, "Cannot compare permit numbers - missing data");
    }

    #[test]
    fn test_missing_data_permit_is_violation() {
        let check = check_permit_number_match(&file("12345.pdf", json!({})));
        assert!(check.has_violation);
        assert!(check.data_permit.is_none());
    }
}
