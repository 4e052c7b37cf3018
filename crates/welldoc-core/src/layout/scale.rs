use crate::layout::canvas::Canvas;
use crate::well::WellboreModel;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Depth used when the record carries no usable depth at all.
pub const DEFAULT_MAX_DEPTH: f64 = 1000.0;

/// Linear depth-to-pixel mapping shared by every feature in one diagram.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DepthScale {
    pub max_depth: f64,
    pub pixels_per_foot: f64,
    pub margin_top: f64,
}

impl DepthScale {
    /// Scale that fits `max_depth` feet into the canvas plot height. A zero,
    /// negative or non-finite depth gives a scale of 0.
    pub fn new(max_depth: f64, canvas: &Canvas) -> Self {
        let pixels_per_foot = if max_depth.is_finite() && max_depth > 0.0 {
            canvas.plot_height() / max_depth
        } else {
            0.0
        };
        Self {
            max_depth,
            pixels_per_foot,
            margin_top: canvas.margin_top,
        }
    }

    pub fn from_model(model: &WellboreModel, canvas: &Canvas) -> Self {
        Self::new(max_depth(model), canvas)
    }

    /// Vertical pixel position for a depth. Missing or non-finite depths
    /// map to the top of the plot.
    pub fn depth_to_y(&self, depth: Option<f64>) -> f64 {
        let Some(depth) = depth else {
            return self.margin_top;
        };
        let y = self.margin_top + depth * self.pixels_per_foot;
        if y.is_finite() {
            y
        } else {
            tracing::debug!(depth, "non-finite depth, placing at top of plot");
            self.margin_top
        }
    }

    /// Pixel length of a depth span.
    pub fn feet_to_px(&self, feet: f64) -> f64 {
        let px = feet.abs() * self.pixels_per_foot;
        if px.is_finite() {
            px
        } else {
            0.0
        }
    }
}

/// Deepest depth mentioned anywhere in the record, or [`DEFAULT_MAX_DEPTH`].
pub fn max_depth(model: &WellboreModel) -> f64 {
    let depths = model
        .formations
        .iter()
        .map(|f| f.to)
        .chain(model.casing.iter().map(|c| c.interval))
        .chain(model.perforation_intervals.iter().map(|p| p.to))
        .chain(model.pluggings.iter().map(|p| p.depth))
        .chain([model.measured_depth, model.true_depth]);

    depths
        .flatten()
        .filter(|d| d.is_finite())
        .max_by(f64::total_cmp)
        .unwrap_or_else(|| {
            tracing::debug!(default = DEFAULT_MAX_DEPTH, "no usable depths, using default");
            DEFAULT_MAX_DEPTH
        })
}

/// Approximate true vertical depth for a measured depth.
///
/// Uses the well's overall TVD/MD ratio when both totals are known. This is
/// a straight-line approximation, not a survey-based trajectory.
pub fn get_tvd(model: &WellboreModel, md: f64) -> f64 {
    if let (Some(total_md), Some(total_tvd)) = (model.measured_depth, model.true_depth) {
        if total_md > 0.0 {
            return md * (total_tvd / total_md);
        }
    }
    // Straight and unknown deviation both fall back to MD
    md
}

/// Order optional depths ascending with missing values last.
pub fn cmp_depth(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a.filter(|d| d.is_finite()), b.filter(|d| d.is_finite())) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
