use crate::error::WelldocError;
use crate::rules::schema::RuleSet;

const DEFAULT_JSON: &str = include_str!("../../rules/default.json");

/// Available predefined rulesets.
pub const PRESETS: &[&str] = &["default"];

/// Load a predefined ruleset by name.
pub fn load_preset(name: &str) -> Result<RuleSet, WelldocError> {
    match name {
        "default" => {
            let ruleset: RuleSet = serde_json::from_str(DEFAULT_JSON)?;
            Ok(ruleset)
        }
        _ => Err(WelldocError::RulesetInvalid(format!(
            "unknown preset '{}'. Available: {}",
            name,
            PRESETS.join(", ")
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_default_preset() {
        let rs = load_preset("default").unwrap();
        assert_eq!(rs.min_elevation_ft, 100.0);
        assert_eq!(rs.min_formation_count, 10);
        assert_eq!(rs.depth_coverage_tolerance_ft, 10.0);
        assert!(rs.permit_check_jobs.is_none());
    }

    #[test]
    fn test_default_preset_matches_default_impl() {
        let rs = load_preset("default").unwrap();
        let d = RuleSet::default();
        assert_eq!(rs.min_elevation_ft, d.min_elevation_ft);
        assert_eq!(rs.min_formation_count, d.min_formation_count);
        assert_eq!(rs.depth_coverage_tolerance_ft, d.depth_coverage_tolerance_ft);
    }

    #[test]
    fn test_unknown_preset() {
        assert!(load_preset("xyz").is_err());
    }
}
