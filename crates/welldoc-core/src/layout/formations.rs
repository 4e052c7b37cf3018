use crate::layout::canvas::Canvas;
use crate::layout::scale::{cmp_depth, DepthScale};
use crate::well::Formation;
use serde::Serialize;
use std::collections::HashSet;

/// Maximum distance in feet between one formation's bottom and the next
/// one's top for the two rows to merge.
pub const MERGE_ADJACENCY_FT: f64 = 1.0;

/// Fallback fills for formation names with no recognised lithology.
const PALETTE: &[&str] = &[
    "#fef3c7", "#dcfce7", "#e0e7ff", "#fce7f3", "#ccfbf1", "#fae8ff", "#ffedd5", "#e0f2fe",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Lithology {
    Shale,
    Sandstone,
    Limestone,
    Dolomite,
    Salt,
    Anhydrite,
    Coal,
    Granite,
    Other,
}

impl Lithology {
    /// Guess the rock type from a formation name.
    pub fn from_name_loose(name: &str) -> Lithology {
        let lower = name.to_lowercase();
        if lower.contains("shale") {
            Lithology::Shale
        } else if lower.contains("sand") {
            Lithology::Sandstone
        } else if lower.contains("lime") {
            Lithology::Limestone
        } else if lower.contains("dolo") {
            Lithology::Dolomite
        } else if lower.contains("salt") {
            Lithology::Salt
        } else if lower.contains("anhy") {
            Lithology::Anhydrite
        } else if lower.contains("coal") {
            Lithology::Coal
        } else if lower.contains("granite") || lower.contains("basement") {
            Lithology::Granite
        } else {
            Lithology::Other
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Lithology::Shale => "shale",
            Lithology::Sandstone => "sandstone",
            Lithology::Limestone => "limestone",
            Lithology::Dolomite => "dolomite",
            Lithology::Salt => "salt",
            Lithology::Anhydrite => "anhydrite",
            Lithology::Coal => "coal",
            Lithology::Granite => "granite",
            Lithology::Other => "other",
        }
    }

    pub fn pattern_id(self) -> Option<&'static str> {
        match self {
            Lithology::Shale => Some("pattern-shale"),
            Lithology::Sandstone => Some("pattern-sand"),
            Lithology::Limestone => Some("pattern-lime"),
            Lithology::Dolomite => Some("pattern-dolomite"),
            _ => None,
        }
    }
}

/// Fill colour for a formation name. Named lithologies get fixed colours;
/// anything else picks a palette entry from the name so it stays stable.
pub fn formation_color(name: &str) -> &'static str {
    match Lithology::from_name_loose(name) {
        Lithology::Shale => "#9ca3af",
        Lithology::Sandstone => "#fde68a",
        Lithology::Limestone => "#bfdbfe",
        Lithology::Dolomite => "#c4b5fd",
        Lithology::Salt => "#f8fafc",
        Lithology::Anhydrite => "#e9d5ff",
        Lithology::Coal => "#374151",
        Lithology::Granite => "#fca5a5",
        Lithology::Other => {
            let key = name.trim().to_lowercase();
            let sum: usize = key.bytes().map(usize::from).sum();
            PALETTE[sum % PALETTE.len()]
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormationBand {
    pub name: Option<String>,
    pub from: Option<f64>,
    pub to: Option<f64>,
    pub x: f64,
    pub y_top: f64,
    pub y_bottom: f64,
    pub width: f64,
    pub height: f64,
    pub lithology: Lithology,
    pub color: &'static str,
    pub pattern: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendEntry {
    pub name: String,
    pub lithology: Lithology,
    pub color: &'static str,
    pub pattern: Option<&'static str>,
}

/// Sort formations by top depth and collapse consecutive rows that share a
/// name and touch (within [`MERGE_ADJACENCY_FT`]) into one interval.
///
/// Names compare trimmed and case-insensitively. Rows with a missing top
/// sort last and never merge.
pub fn merge_formations(formations: &[Formation]) -> Vec<Formation> {
    let mut sorted = formations.to_vec();
    sorted.sort_by(|a, b| cmp_depth(a.from, b.from));

    let mut merged: Vec<Formation> = Vec::with_capacity(sorted.len());
    for formation in sorted {
        if let Some(prev) = merged.last_mut() {
            if touches(prev.to, formation.from) && prev.name_key() == formation.name_key() {
                if let Some(to) = formation.to {
                    prev.to = Some(to);
                }
                continue;
            }
        }
        merged.push(formation);
    }
    merged
}

fn touches(prev_to: Option<f64>, next_from: Option<f64>) -> bool {
    match (prev_to, next_from) {
        (Some(to), Some(from)) if to.is_finite() && from.is_finite() => {
            (from - to).abs() <= MERGE_ADJACENCY_FT
        }
        _ => false,
    }
}

/// One legend entry per distinct formation name, in first-seen order.
pub fn unique_formations(merged: &[Formation]) -> Vec<LegendEntry> {
    let mut seen = HashSet::new();
    let mut legend = Vec::new();
    for formation in merged {
        let key = formation.name_key();
        if key.is_empty() || !seen.insert(key) {
            continue;
        }
        let name = formation
            .formation_name
            .as_deref()
            .map(str::trim)
            .unwrap_or_default()
            .to_string();
        let lithology = Lithology::from_name_loose(&name);
        legend.push(LegendEntry {
            color: formation_color(&name),
            pattern: lithology.pattern_id(),
            lithology,
            name,
        });
    }
    legend
}

/// Full-width bands for the merged formations.
pub fn place_formations(
    merged: &[Formation],
    scale: &DepthScale,
    canvas: &Canvas,
) -> Vec<FormationBand> {
    let x = canvas.plot_left();
    let width = (canvas.plot_right() - canvas.plot_left()).max(0.0);

    merged
        .iter()
        .map(|f| {
            let label = f.formation_name.as_deref().unwrap_or_default();
            let lithology = Lithology::from_name_loose(label);
            let y_top = scale.depth_to_y(f.from);
            let y_bottom = scale.depth_to_y(f.to);
            FormationBand {
                name: f.formation_name.clone(),
                from: f.from,
                to: f.to,
                x,
                y_top,
                y_bottom,
                width,
                height: (y_bottom - y_top).max(0.0),
                lithology,
                color: formation_color(label),
                pattern: lithology.pattern_id(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::canvas::CanvasSize;

    #[test]
    fn test_merge_same_name_adjacent() {
        let merged = merge_formations(&[
            Formation::new(0.0, 50.0, "Shale"),
            Formation::new(50.0, 100.0, "Shale"),
        ]);
        assert_eq!(merged, vec![Formation::new(0.0, 100.0, "Shale")]);
    }

    #[test]
    fn test_different_names_never_merge() {
        let merged = merge_formations(&[
            Formation::new(0.0, 50.0, "Shale"),
            Formation::new(50.0, 100.0, "Sand"),
        ]);
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn test_merge_is_case_and_whitespace_insensitive() {
        let merged = merge_formations(&[
            Formation::new(0.0, 50.0, "Shale"),
            Formation::new(50.5, 100.0, " SHALE "),
        ]);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].to, Some(100.0));
        assert_eq!(merged[0].formation_name.as_deref(), Some("Shale"));
    }

    #[test]
    fn test_gap_over_one_foot_does_not_merge() {
        let merged = merge_formations(&[
            Formation::new(0.0, 50.0, "Shale"),
            Formation::new(52.0, 100.0, "Shale"),
        ]);
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn test_merge_sorts_first_and_chains() {
        let merged = merge_formations(&[
            Formation::new(100.0, 150.0, "Shale"),
            Formation::new(0.0, 50.0, "Shale"),
            Formation::new(50.0, 100.0, "Shale"),
            Formation::new(150.0, 300.0, "Lime"),
        ]);
        assert_eq!(
            merged,
            vec![
                Formation::new(0.0, 150.0, "Shale"),
                Formation::new(150.0, 300.0, "Lime")
            ]
        );
    }

    #[test]
    fn test_missing_top_sorts_last_and_stays_separate() {
        let orphan = Formation {
            from: None,
            to: Some(10.0),
            formation_name: Some("Shale".into()),
        };
        let merged = merge_formations(&[orphan.clone(), Formation::new(0.0, 10.0, "Shale")]);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[1], orphan);
    }

    #[test]
    fn test_unique_formations_first_occurrence_wins() {
        let legend = unique_formations(&[
            Formation::new(0.0, 50.0, "Shale"),
            Formation::new(50.0, 80.0, "Sand"),
            Formation::new(80.0, 90.0, "shale "),
            Formation {
                formation_name: Some("   ".into()),
                ..Default::default()
            },
            Formation::default(),
        ]);
        let names: Vec<&str> = legend.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Shale", "Sand"]);
        assert_eq!(legend[0].pattern, Some("pattern-shale"));
    }

    #[test]
    fn test_lithology_from_name() {
        assert_eq!(Lithology::from_name_loose("Upper Shale"), Lithology::Shale);
        assert_eq!(Lithology::from_name_loose("Red Sandstone"), Lithology::Sandstone);
        assert_eq!(Lithology::from_name_loose("Wolfcamp"), Lithology::Other);
    }

    #[test]
    fn test_formation_color_is_stable() {
        assert_eq!(formation_color("Wolfcamp"), formation_color(" wolfcamp "));
        assert_eq!(formation_color("Shale"), "#9ca3af");
    }

    #[test]
    fn test_place_formations_heights() {
        let canvas = CanvasSize::Medium.canvas();
        let scale = DepthScale::new(6300.0, &canvas);
        let bands = place_formations(
            &[
                Formation::new(0.0, 630.0, "Sand"),
                Formation {
                    from: Some(700.0),
                    to: None,
                    formation_name: None,
                },
            ],
            &scale,
            &canvas,
        );
        assert_eq!(bands[0].y_top, 40.0);
        assert_eq!(bands[0].height, 63.0);
        assert_eq!(bands[0].width, 300.0);
        assert_eq!(bands[0].name.as_deref(), Some("Sand"));
        assert_eq!(bands[0].lithology, Lithology::Sandstone);
        assert_eq!(bands[0].color, formation_color("Sand"));
        assert_eq!(bands[0].pattern, Some("pattern-sand"));
        // Missing bottom maps to the top margin, leaving a zero-height band
        assert_eq!(bands[1].height, 0.0);
        assert!(bands[1].name.is_none());
        assert_eq!(bands[1].lithology, Lithology::Other);
    }
}
