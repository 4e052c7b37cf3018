use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Thresholds and gates for the constraint battery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleSet {
    pub name: String,
    pub version: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Elevation must be strictly above this many feet.
    #[serde(default = "default_min_elevation_ft")]
    pub min_elevation_ft: f64,
    /// Minimum number of formation rows for a complete log.
    #[serde(default = "default_min_formation_count")]
    pub min_formation_count: usize,
    /// Allowed difference between measured depth and the deepest formation bottom.
    #[serde(default = "default_depth_coverage_tolerance_ft")]
    pub depth_coverage_tolerance_ft: f64,
    /// If set, the permit cross-check only runs for files in these jobs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permit_check_jobs: Option<BTreeSet<String>>,
}

impl RuleSet {
    /// Whether the permit cross-check applies to a file from the given job.
    pub fn permit_check_enabled(&self, job_id: Option<&str>) -> bool {
        match &self.permit_check_jobs {
            None => true,
            Some(jobs) => job_id.is_some_and(|id| jobs.contains(id)),
        }
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            name: "default".to_string(),
            version: "1.0".to_string(),
            description: None,
            min_elevation_ft: default_min_elevation_ft(),
            min_formation_count: default_min_formation_count(),
            depth_coverage_tolerance_ft: default_depth_coverage_tolerance_ft(),
            permit_check_jobs: None,
        }
    }
}

fn default_min_elevation_ft() -> f64 {
    100.0
}

fn default_min_formation_count() -> usize {
    10
}

fn default_depth_coverage_tolerance_ft() -> f64 {
    10.0
}
