use crate::model::FormationInterval;
use serde::{Deserialize, Serialize};

/// A break between one formation's bottom and the next one's top.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FormationGap {
    pub from: f64,
    pub to: f64,
    pub gap: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormationContinuity {
    pub is_continuous: bool,
    pub gaps: Vec<FormationGap>,
}

/// Check that consecutive formations (ordered by top depth) touch exactly.
///
/// Rows with a missing or non-finite bound are ignored. Fewer than two
/// usable rows is continuous. Bounds are compared with exact equality, so
/// depths differing by a fraction of a foot still register as a gap.
pub fn check_formation_continuity(formations: &[FormationInterval]) -> FormationContinuity {
    let mut valid: Vec<(f64, f64)> = formations
        .iter()
        .filter_map(FormationInterval::bounds)
        .collect();

    if valid.len() < 2 {
        return FormationContinuity {
            is_continuous: true,
            gaps: Vec::new(),
        };
    }

    valid.sort_by(|a, b| a.0.total_cmp(&b.0));

    let gaps: Vec<FormationGap> = valid
        .windows(2)
        .filter(|pair| pair[1].0 != pair[0].1)
        .map(|pair| FormationGap {
            from: pair[0].1,
            to: pair[1].0,
            gap: (pair[1].0 - pair[0].1).abs(),
        })
        .collect();

    FormationContinuity {
        is_continuous: gaps.is_empty(),
        gaps,
    }
}
