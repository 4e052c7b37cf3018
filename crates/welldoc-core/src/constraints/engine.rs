use crate::constraints::continuity::check_formation_continuity;
use crate::constraints::outcome::{ConstraintCheck, Severity};
use crate::constraints::permit::check_permit_number_match;
use crate::model::{ExtractedDocument, FormationInterval, JobFile};
use crate::rules::schema::RuleSet;
use serde_json::json;

/// List fields that must be present and non-empty, in check order.
const REQUIRED_LISTS: &[(&str, &str)] = &[
    ("perforation_intervals", "Perforation intervals"),
    ("pluggings", "Pluggings"),
    ("shows_depths", "Shows depths"),
    ("casing", "Casing"),
];

/// Run the constraint battery with the default thresholds.
pub fn check_file_constraints(file: &JobFile) -> Vec<ConstraintCheck> {
    check_file_constraints_with(file, &RuleSet::default())
}

/// Run the constraint battery against one file.
///
/// Returns no findings until the file has completed processing and carries
/// a result. The order of findings is fixed: permit, API number, elevation,
/// formation count, depth coverage, continuity, then the list checks.
pub fn check_file_constraints_with(file: &JobFile, rules: &RuleSet) -> Vec<ConstraintCheck> {
    let Some(result) = file.completed_result() else {
        tracing::debug!(
            filename = %file.filename,
            status = %file.processing_status,
            "constraints not applicable yet"
        );
        return Vec::new();
    };

    let doc = ExtractedDocument::new(result);
    let formations = doc.formations();
    let mut checks = Vec::with_capacity(10);

    if rules.permit_check_enabled(file.job_id.as_deref()) {
        checks.push(permit_check(file));
    }
    checks.push(api_number_check(&doc));
    checks.push(elevation_check(&doc, rules));
    checks.push(formation_count_check(doc.list_len("formations"), rules));
    checks.push(depth_coverage_check(doc.measured_depth(), &formations, rules));
    checks.push(continuity_check(&formations));
    for (field, label) in REQUIRED_LISTS {
        checks.push(required_list_check(&doc, field, label));
    }

    tracing::debug!(
        filename = %file.filename,
        checks = checks.len(),
        failed = checks.iter().filter(|c| !c.passed).count(),
        "evaluated constraints"
    );

    checks
}

fn permit_check(file: &JobFile) -> ConstraintCheck {
    let permit = check_permit_number_match(file);
    let details = json!({
        "filename_permit": permit.filename_permit,
        "data_permit": permit.data_permit,
    });
    let check = if permit.has_violation {
        ConstraintCheck::fail("permit_number_match", Severity::Error, permit.message)
    } else {
        ConstraintCheck::pass("permit_number_match", permit.message)
    };
    check.with_details(details)
}

fn api_number_check(doc: &ExtractedDocument<'_>) -> ConstraintCheck {
    match doc.api_number() {
        Some(api) => ConstraintCheck::pass("api_number", format!("API number present: {api}")),
        None => ConstraintCheck::fail("api_number", Severity::Error, "API number is missing"),
    }
}

fn elevation_check(doc: &ExtractedDocument<'_>, rules: &RuleSet) -> ConstraintCheck {
    let min = rules.min_elevation_ft;
    match doc.elevation() {
        None => ConstraintCheck::fail("elevation", Severity::Error, "Elevation is missing"),
        Some(elevation) if elevation > min => {
            ConstraintCheck::pass("elevation", format!("Elevation {elevation} ft"))
        }
        Some(elevation) => ConstraintCheck::fail(
            "elevation",
            Severity::Error,
            format!("Elevation {elevation} ft is not above the {min} ft minimum"),
        )
        .with_details(json!({ "elevation": elevation, "minimum": min })),
    }
}

/// Counts every entry in the list, well-formed or not.
fn formation_count_check(count: usize, rules: &RuleSet) -> ConstraintCheck {
    let min = rules.min_formation_count;
    if count >= min {
        ConstraintCheck::pass("formation_count", format!("Found {count} formations"))
    } else {
        ConstraintCheck::fail(
            "formation_count",
            Severity::Error,
            format!("Found {count} formations, expected at least {min}"),
        )
        .with_details(json!({ "count": count, "minimum": min }))
    }
}

fn depth_coverage_check(
    measured_depth: Option<f64>,
    formations: &[FormationInterval],
    rules: &RuleSet,
) -> ConstraintCheck {
    let deepest = formations
        .iter()
        .filter_map(|f| f.to)
        .filter(|to| to.is_finite())
        .max_by(f64::total_cmp);

    let (Some(md), Some(bottom)) = (measured_depth, deepest) else {
        return ConstraintCheck::fail(
            "formation_depth_coverage",
            Severity::Warning,
            "Cannot check formation depth coverage - missing measured depth or formations",
        );
    };

    let tolerance = rules.depth_coverage_tolerance_ft;
    let delta = (md - bottom).abs();
    let details = json!({
        "measured_depth": md,
        "deepest_formation_to": bottom,
        "difference": delta,
    });

    if delta <= tolerance {
        ConstraintCheck::pass(
            "formation_depth_coverage",
            format!(
                "Deepest formation bottom {bottom} ft is within {tolerance} ft of measured depth {md} ft"
            ),
        )
        .with_details(details)
    } else {
        ConstraintCheck::fail(
            "formation_depth_coverage",
            Severity::Error,
            format!(
                "Measured depth {md} ft differs from deepest formation bottom {bottom} ft by {delta} ft (tolerance {tolerance} ft)"
            ),
        )
        .with_details(details)
    }
}

fn continuity_check(formations: &[FormationInterval]) -> ConstraintCheck {
    let continuity = check_formation_continuity(formations);
    if continuity.is_continuous {
        return ConstraintCheck::pass("formation_continuity", "Formations are continuous");
    }

    let listed: Vec<String> = continuity
        .gaps
        .iter()
        .map(|g| format!("{}-{} ft ({} ft)", g.from, g.to, g.gap))
        .collect();
    ConstraintCheck::fail(
        "formation_continuity",
        Severity::Warning,
        format!(
            "Found {} gap(s) between formations: {}",
            continuity.gaps.len(),
            listed.join(", ")
        ),
    )
    .with_details(json!({ "gaps": continuity.gaps }))
}

fn required_list_check(doc: &ExtractedDocument<'_>, field: &str, label: &str) -> ConstraintCheck {
    if doc.has(field) {
        ConstraintCheck::pass(
            field,
            format!("{label} present ({} entries)", doc.list_len(field)),
        )
    } else {
        ConstraintCheck::fail(field, Severity::Error, format!("{label} missing"))
    }
}
