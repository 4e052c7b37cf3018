use serde::Serialize;
use serde_json::json;
use welldoc_core::constraints::{ConstraintCheck, ConstraintSummary};
use welldoc_core::error::WelldocError;

pub fn print<T: Serialize>(value: &T) -> Result<(), WelldocError> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}

pub fn print_checks(
    checks: &[ConstraintCheck],
    summary: &ConstraintSummary,
) -> Result<(), WelldocError> {
    print(&json!({
        "summary": summary,
        "checks": checks,
    }))
}
