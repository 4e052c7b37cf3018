pub mod constraints;
pub mod error;
pub mod layout;
pub mod loose;
pub mod model;
pub mod render;
pub mod rules;
pub mod well;

pub use constraints::{
    check_file_constraints, check_file_constraints_with, check_formation_continuity,
    check_permit_number_match, summarize,
};
pub use error::WelldocError;
pub use layout::{layout_wellbore, CanvasSize, WellboreLayout};

use model::JobFile;
use std::path::Path;
use well::WellboreModel;

/// Read a job-file envelope from a JSON file.
pub fn load_job_file(path: &Path) -> Result<JobFile, WelldocError> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Read a wellbore record from a JSON file.
///
/// Accepts either a bare record or a job-file envelope whose `result` holds
/// the record.
pub fn load_wellbore(path: &Path) -> Result<WellboreModel, WelldocError> {
    let content = std::fs::read_to_string(path)?;
    let value: serde_json::Value = serde_json::from_str(&content)?;
    let record = match value.get("result") {
        Some(result) if result.is_object() => result.clone(),
        _ => value,
    };
    Ok(serde_json::from_value(record)?)
}
