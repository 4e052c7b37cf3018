use welldoc_core::constraints::{ConstraintCheck, ConstraintSummary, PermitCheck, Severity};
use welldoc_core::model::JobFile;
use welldoc_core::rules::schema::RuleSet;

fn marker(check: &ConstraintCheck) -> &'static str {
    if check.passed {
        return "ok";
    }
    match check.severity {
        Severity::Error => "FAIL",
        Severity::Warning => "WARN",
        Severity::Info => "info",
    }
}

pub fn print_checks(
    file: &JobFile,
    rules: &RuleSet,
    checks: &[ConstraintCheck],
    summary: &ConstraintSummary,
) {
    println!("=== {} ===\n", file.filename);

    if checks.is_empty() {
        println!(
            "  No checks run: file is {} (checks apply once processing completes)\n",
            file.processing_status
        );
        return;
    }

    println!("  Ruleset: {} (v{})\n", rules.name, rules.version);

    let name_width = checks
        .iter()
        .map(|c| c.name.len())
        .max()
        .unwrap_or(20);

    println!("  {:<6}{:<width$}  Message", "", "Check", width = name_width);
    println!("  {}", "-".repeat(6 + name_width + 2 + 40));
    for check in checks {
        println!(
            "  {:<6}{:<width$}  {}",
            marker(check),
            check.name,
            check.message,
            width = name_width
        );
    }

    println!();
    println!(
        "  {} of {} passed, {} error(s), {} warning(s)",
        summary.passed, summary.total, summary.errors, summary.warnings
    );
    println!();
}

pub fn print_permit(file: &JobFile, check: &PermitCheck) {
    println!("=== {} ===\n", file.filename);
    println!(
        "  Filename permit: {}",
        check.filename_permit.as_deref().unwrap_or("-")
    );
    println!(
        "  Data permit:     {}",
        check.data_permit.as_deref().unwrap_or("-")
    );
    println!();
    let status = if check.has_violation { "FAIL" } else { "ok" };
    println!("  {}  {}", status, check.message);
    println!();
}
