//! Typed well record consumed by the diagram layout.
//!
//! Every field is optional and every list tolerates `null` or malformed
//! entries, so any extraction payload deserializes.

use crate::loose;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WellboreModel {
    #[serde(default, deserialize_with = "loose::opt_string")]
    pub well_name: Option<String>,
    #[serde(default, deserialize_with = "loose::opt_string")]
    pub api_number: Option<String>,
    #[serde(default, deserialize_with = "loose::opt_string")]
    pub permit_number: Option<String>,
    #[serde(default, deserialize_with = "loose::opt_f64")]
    pub elevation: Option<f64>,
    #[serde(default, deserialize_with = "loose::opt_f64")]
    pub measured_depth: Option<f64>,
    #[serde(default, deserialize_with = "loose::opt_f64")]
    pub true_depth: Option<f64>,
    /// Deviation class as written on the form, e.g. "Straight" or "Directional".
    #[serde(default, deserialize_with = "loose::opt_string")]
    pub deviation: Option<String>,
    #[serde(default, deserialize_with = "loose::list")]
    pub formations: Vec<Formation>,
    #[serde(default, deserialize_with = "loose::list")]
    pub casing: Vec<CasingString>,
    #[serde(default, deserialize_with = "loose::list")]
    pub perforation_intervals: Vec<Perforation>,
    #[serde(default, deserialize_with = "loose::list")]
    pub pluggings: Vec<Plugging>,
    #[serde(default, deserialize_with = "loose::list")]
    pub downhole_tools: Vec<DownholeTool>,
    #[serde(default, deserialize_with = "loose::list")]
    pub shows_depths: Vec<Show>,
}

impl WellboreModel {
    /// True when the deviation class marks a vertical well.
    pub fn is_straight(&self) -> bool {
        self.deviation
            .as_deref()
            .is_some_and(|d| d.trim().eq_ignore_ascii_case("straight"))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Formation {
    #[serde(default, deserialize_with = "loose::opt_f64")]
    pub from: Option<f64>,
    #[serde(default, deserialize_with = "loose::opt_f64")]
    pub to: Option<f64>,
    #[serde(
        default,
        alias = "formation",
        alias = "name",
        deserialize_with = "loose::opt_string"
    )]
    pub formation_name: Option<String>,
}

impl Formation {
    pub fn new(from: f64, to: f64, name: &str) -> Self {
        Self {
            from: Some(from),
            to: Some(to),
            formation_name: Some(name.to_string()),
        }
    }

    /// Lower-cased, trimmed name used for merge and legend identity.
    pub fn name_key(&self) -> String {
        self.formation_name
            .as_deref()
            .map(|n| n.trim().to_lowercase())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CasingString {
    #[serde(default, rename = "type", deserialize_with = "loose::opt_string")]
    pub casing_type: Option<String>,
    /// Nominal pipe size as written, e.g. `"9 5/8"` or `7`.
    #[serde(default, deserialize_with = "loose::opt_string")]
    pub size: Option<String>,
    /// Setting depth (shoe) in feet.
    #[serde(
        default,
        rename = "Interval",
        alias = "interval",
        alias = "depth",
        deserialize_with = "loose::opt_f64"
    )]
    pub interval: Option<f64>,
    #[serde(default, deserialize_with = "loose::opt_string")]
    pub cement_type: Option<String>,
    #[serde(default, deserialize_with = "loose::opt_f64")]
    pub bags_of_cement: Option<f64>,
    #[serde(default, deserialize_with = "loose::opt_string")]
    pub weight: Option<String>,
    #[serde(default, deserialize_with = "loose::opt_string")]
    pub grade: Option<String>,
    /// Top of cement; free text because forms often say "Surface".
    #[serde(default, deserialize_with = "loose::opt_string")]
    pub top_of_cement: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Perforation {
    #[serde(default, deserialize_with = "loose::opt_f64")]
    pub from: Option<f64>,
    #[serde(default, deserialize_with = "loose::opt_f64")]
    pub to: Option<f64>,
    #[serde(default, deserialize_with = "loose::opt_string")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "loose::opt_string")]
    pub formation: Option<String>,
    #[serde(default, deserialize_with = "loose::opt_f64")]
    pub shots: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Plugging {
    #[serde(default, deserialize_with = "loose::opt_f64")]
    pub depth: Option<f64>,
    /// Free-text interval, e.g. `"4500-4650"` or `"surface to 60"`.
    #[serde(default, deserialize_with = "loose::opt_string")]
    pub interval: Option<String>,
    #[serde(default, rename = "type", deserialize_with = "loose::opt_string")]
    pub plug_type: Option<String>,
    #[serde(default, deserialize_with = "loose::opt_string")]
    pub details: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DownholeTool {
    #[serde(default, rename = "type", deserialize_with = "loose::opt_string")]
    pub tool_type: Option<String>,
    #[serde(default, deserialize_with = "loose::opt_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "loose::opt_f64")]
    pub depth: Option<f64>,
    #[serde(default, deserialize_with = "loose::opt_f64")]
    pub bottom_depth: Option<f64>,
    #[serde(default, deserialize_with = "loose::opt_string")]
    pub size: Option<String>,
    #[serde(default, deserialize_with = "loose::opt_string")]
    pub inner_diameter: Option<String>,
    #[serde(default, deserialize_with = "loose::opt_string")]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Show {
    #[serde(default, deserialize_with = "loose::opt_f64")]
    pub depth: Option<f64>,
    #[serde(default, deserialize_with = "loose::opt_string")]
    pub formation: Option<String>,
    #[serde(default, deserialize_with = "loose::opt_string")]
    pub oil_or_gas: Option<String>,
}

/// Parse a nominal pipe size in inches: `"7"`, `"9.625"`, `"9 5/8"`,
/// `"13-3/8\""`, `"5 1/2 in"`.
pub fn parse_size_inches(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .trim()
        .trim_end_matches(|c: char| c.is_alphabetic() || c == '"' || c == '.' || c.is_whitespace())
        .replace('-', " ");

    let mut total = 0.0;
    let mut seen = false;
    for part in cleaned.split_whitespace() {
        if let Some((num, den)) = part.split_once('/') {
            let num: f64 = num.parse().ok()?;
            let den: f64 = den.parse().ok()?;
            if den == 0.0 {
                return None;
            }
            total += num / den;
        } else {
            total += part.parse::<f64>().ok()?;
        }
        seen = true;
    }

    if seen && total.is_finite() && total > 0.0 {
        Some(total)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_full_record() {
        let well: WellboreModel = serde_json::from_value(json!({
            "well_name": "Smith #1",
            "elevation": 1210,
            "measured_depth": "5,200",
            "true_depth": 5100,
            "deviation": "Straight",
            "formations": [{ "from": 0, "to": 400, "formation_name": "Sand" }],
            "casing": [{ "type": "Surface", "size": "8 5/8", "Interval": 450, "top_of_cement": "Surface" }],
            "perforation_intervals": [{ "from": 4800, "to": 4820, "status": "open", "shots": 40 }],
            "pluggings": [{ "depth": 4700, "interval": "4650-4700", "type": "CIBP" }],
            "downhole_tools": [{ "type": "Packer", "depth": 4750 }],
            "shows_depths": [{ "depth": 4810, "oil_or_gas": "Oil" }]
        }))
        .unwrap();

        assert_eq!(well.measured_depth, Some(5200.0));
        assert!(well.is_straight());
        assert_eq!(well.casing[0].interval, Some(450.0));
        assert_eq!(well.casing[0].casing_type.as_deref(), Some("Surface"));
        assert_eq!(well.pluggings[0].plug_type.as_deref(), Some("CIBP"));
        assert_eq!(well.downhole_tools[0].tool_type.as_deref(), Some("Packer"));
        assert_eq!(well.shows_depths.len(), 1);
    }

    #[test]
    fn test_lowercase_interval_alias() {
        let casing: CasingString =
            serde_json::from_value(json!({ "interval": "1,200", "size": 7 })).unwrap();
        assert_eq!(casing.interval, Some(1200.0));
        assert_eq!(casing.size.as_deref(), Some("7"));
    }

    #[test]
    fn test_null_lists_and_garbage_entries() {
        let well: WellboreModel = serde_json::from_value(json!({
            "formations": null,
            "casing": ["surface casing", { "type": "Production", "Interval": 5000 }],
            "pluggings": "none"
        }))
        .unwrap();
        assert!(well.formations.is_empty());
        assert_eq!(well.casing.len(), 1);
        assert!(well.pluggings.is_empty());
    }

    #[test]
    fn test_formation_name_key() {
        let f = Formation::new(0.0, 10.0, "  Shale ");
        assert_eq!(f.name_key(), "shale");
        assert_eq!(Formation::default().name_key(), "");
    }

    #[test]
    fn test_parse_size_inches() {
        assert_eq!(parse_size_inches("7"), Some(7.0));
        assert_eq!(parse_size_inches("9.625"), Some(9.625));
        assert_eq!(parse_size_inches("9 5/8"), Some(9.625));
        assert_eq!(parse_size_inches("13-3/8\""), Some(13.375));
        assert_eq!(parse_size_inches("5 1/2 in"), Some(5.5));
        assert_eq!(parse_size_inches("unknown"), None);
        assert_eq!(parse_size_inches(""), None);
        assert_eq!(parse_size_inches("1/0"), None);
    }
}
