pub mod builtin;
pub mod schema;

use crate::error::WelldocError;
use schema::RuleSet;
use std::path::Path;

/// Read a ruleset file. Read and syntax errors carry the file path; a
/// ruleset that parses but fails validation is `RulesetInvalid`.
pub fn load_rules(path: &Path) -> Result<RuleSet, WelldocError> {
    let load_failed = |reason: String| WelldocError::RulesetLoad {
        path: path.to_path_buf(),
        reason,
    };
    let content = std::fs::read_to_string(path).map_err(|e| load_failed(e.to_string()))?;
    let ruleset = serde_json::from_str(&content).map_err(|e| load_failed(e.to_string()))?;
    validated(ruleset)
}

/// Ruleset held in memory, such as an embedded preset.
pub fn parse_rules_str(json: &str) -> Result<RuleSet, WelldocError> {
    validated(serde_json::from_str(json)?)
}

fn validated(ruleset: RuleSet) -> Result<RuleSet, WelldocError> {
    validate_rules(&ruleset)?;
    Ok(ruleset)
}

/// Validate that a ruleset is well-formed.
pub fn validate_rules(ruleset: &RuleSet) -> Result<(), WelldocError> {
    if ruleset.name.trim().is_empty() {
        return Err(WelldocError::RulesetInvalid("name must not be empty".into()));
    }

    if !ruleset.min_elevation_ft.is_finite() {
        return Err(WelldocError::RulesetInvalid(
            "min_elevation_ft must be a finite number".into(),
        ));
    }

    let tolerance = ruleset.depth_coverage_tolerance_ft;
    if !tolerance.is_finite() || tolerance < 0.0 {
        return Err(WelldocError::RulesetInvalid(format!(
            "depth_coverage_tolerance_ft must be a non-negative number, got {}",
            tolerance
        )));
    }

    if let Some(ref jobs) = ruleset.permit_check_jobs {
        if jobs.iter().any(|id| id.trim().is_empty()) {
            return Err(WelldocError::RulesetInvalid(
                "permit_check_jobs must not contain empty job IDs".into(),
            ));
        }
    }

    Ok(())
}
