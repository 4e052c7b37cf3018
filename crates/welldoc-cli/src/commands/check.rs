use std::path::PathBuf;
use welldoc_core::error::WelldocError;
use welldoc_core::rules::builtin;
use welldoc_core::rules::schema::RuleSet;

use crate::output;

pub fn run(
    input_file: PathBuf,
    rule_file: Option<PathBuf>,
    preset: Option<String>,
    output_format: &str,
) -> Result<(), WelldocError> {
    let rules: RuleSet = match (rule_file, preset) {
        (Some(path), _) => welldoc_core::rules::load_rules(&path)?,
        (None, Some(name)) => builtin::load_preset(&name)?,
        (None, None) => builtin::load_preset("default")?,
    };

    tracing::debug!(ruleset = %rules.name, version = %rules.version, "loaded ruleset");

    let file = welldoc_core::load_job_file(&input_file)?;
    let checks = welldoc_core::check_file_constraints_with(&file, &rules);
    let summary = welldoc_core::summarize(&checks);

    match output_format {
        "json" => output::json::print_checks(&checks, &summary)?,
        _ => output::table::print_checks(&file, &rules, &checks, &summary),
    }

    Ok(())
}
