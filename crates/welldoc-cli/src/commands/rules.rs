use std::path::Path;
use welldoc_core::error::WelldocError;
use welldoc_core::rules::builtin;
use welldoc_core::rules::schema::RuleSet;

pub fn list() -> Result<(), WelldocError> {
    println!("Available predefined rulesets:\n");
    for name in builtin::PRESETS {
        let rs = builtin::load_preset(name)?;
        println!("  {:<10} {} (v{})", name, rs.name, rs.version);
        if let Some(ref desc) = rs.description {
            println!("             {}", desc);
        }
        println!();
    }
    Ok(())
}

pub fn show(preset: &str) -> Result<(), WelldocError> {
    let rs = builtin::load_preset(preset)?;
    println!("{}", serde_json::to_string_pretty(&rs)?);
    Ok(())
}

pub fn validate(file: &Path) -> Result<(), WelldocError> {
    let rs = welldoc_core::rules::load_rules(file)?;

    println!("Ruleset '{}' (v{}) is valid.", rs.name, rs.version);
    print_thresholds(&rs);

    // Legal but probably unintended settings
    let mut warnings = Vec::new();
    if rs.min_formation_count == 0 {
        warnings.push("min_formation_count is 0, the formation count check always passes".to_string());
    }
    if rs.min_elevation_ft < 0.0 {
        warnings.push(format!(
            "min_elevation_ft is negative ({}), any recorded elevation passes",
            rs.min_elevation_ft
        ));
    }
    if rs.permit_check_jobs.as_ref().is_some_and(|jobs| jobs.is_empty()) {
        warnings.push("permit_check_jobs is empty, the permit check never runs".to_string());
    }

    if !warnings.is_empty() {
        println!("\nWarnings:");
        for w in &warnings {
            println!("  - {}", w);
        }
    }

    Ok(())
}

fn print_thresholds(rs: &RuleSet) {
    println!("  Minimum elevation:        > {} ft", rs.min_elevation_ft);
    println!("  Minimum formation count:  {}", rs.min_formation_count);
    println!("  Depth coverage tolerance: {} ft", rs.depth_coverage_tolerance_ft);
    match &rs.permit_check_jobs {
        None => println!("  Permit check:             all jobs"),
        Some(jobs) => {
            let listed: Vec<&str> = jobs.iter().map(String::as_str).collect();
            println!("  Permit check:             jobs {}", listed.join(", "));
        }
    }
}
