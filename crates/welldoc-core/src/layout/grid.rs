use crate::layout::scale::DepthScale;
use serde::Serialize;

/// Candidate spacings between depth gridlines, in feet.
const STEPS: &[f64] = &[50.0, 100.0, 250.0, 500.0, 1000.0, 2000.0, 2500.0, 5000.0];
pub const MAX_GRIDLINES: usize = 12;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridLine {
    pub depth: f64,
    pub y: f64,
    pub label: String,
}

/// Smallest step that keeps the gridline count within [`MAX_GRIDLINES`].
pub fn grid_step(max_depth: f64) -> f64 {
    if !max_depth.is_finite() || max_depth <= 0.0 {
        return STEPS[0];
    }
    let fits = |step: f64| (max_depth / step).floor() < MAX_GRIDLINES as f64;
    if let Some(step) = STEPS.iter().copied().find(|s| fits(*s)) {
        return step;
    }
    let mut step = STEPS[STEPS.len() - 1];
    while !fits(step) {
        step *= 2.0;
    }
    step
}

/// Horizontal depth gridlines from surface to the scale's maximum depth.
pub fn gridlines(scale: &DepthScale) -> Vec<GridLine> {
    let max = scale.max_depth;
    if !max.is_finite() || max <= 0.0 {
        return vec![GridLine {
            depth: 0.0,
            y: scale.depth_to_y(Some(0.0)),
            label: "0 ft".into(),
        }];
    }

    let step = grid_step(max);
    let count = (max / step).floor() as usize;
    (0..=count)
        .map(|i| {
            let depth = i as f64 * step;
            GridLine {
                depth,
                y: scale.depth_to_y(Some(depth)),
                label: format!("{depth} ft"),
            }
        })
        .collect()
}
