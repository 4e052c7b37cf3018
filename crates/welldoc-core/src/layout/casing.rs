use crate::layout::scale::{cmp_depth, DepthScale};
use crate::loose;
use crate::well::{parse_size_inches, CasingString};
use serde::Serialize;

/// Width drawn for uncased hole.
pub const OPEN_HOLE_WIDTH: f64 = 20.0;
/// Pixels per inch of nominal pipe size.
pub const PX_PER_INCH: f64 = 4.0;
pub const MIN_PIPE_WIDTH: f64 = 12.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CasingTube {
    pub label: String,
    pub size: Option<String>,
    pub depth: Option<f64>,
    pub x: f64,
    pub y_top: f64,
    pub y_bottom: f64,
    pub width: f64,
    pub height: f64,
}

/// Cement in the annulus behind an inner string, drawn at the width of the
/// string outside it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CementBand {
    pub cement_type: Option<String>,
    pub top_depth: Option<f64>,
    pub bottom_depth: Option<f64>,
    pub x: f64,
    pub y_top: f64,
    pub y_bottom: f64,
    pub width: f64,
    pub height: f64,
}

/// Drawn width of a casing string: from its nominal size when readable,
/// otherwise a default for its type.
pub fn casing_width(casing: &CasingString) -> f64 {
    if let Some(inches) = casing.size.as_deref().and_then(parse_size_inches) {
        return (inches * PX_PER_INCH).max(MIN_PIPE_WIDTH);
    }
    let kind = casing
        .casing_type
        .as_deref()
        .unwrap_or_default()
        .to_lowercase();
    if kind.contains("surface") {
        60.0
    } else if kind.contains("intermediate") {
        40.0
    } else if kind.contains("production") {
        24.0
    } else if kind.contains("drive") {
        50.0
    } else {
        35.0
    }
}

/// Casing strings ordered by setting depth, shallowest first.
pub fn sorted_casing(casing: &[CasingString]) -> Vec<&CasingString> {
    let mut sorted: Vec<&CasingString> = casing.iter().collect();
    sorted.sort_by(|a, b| cmp_depth(a.interval, b.interval));
    sorted
}

/// Width of the narrowest string still set at `depth`, or open hole.
pub fn bore_width_at(casing: &[CasingString], depth: Option<f64>) -> f64 {
    let Some(depth) = depth.filter(|d| d.is_finite()) else {
        return OPEN_HOLE_WIDTH;
    };
    casing
        .iter()
        .filter(|c| c.interval.is_some_and(|shoe| shoe >= depth))
        .map(casing_width)
        .min_by(f64::total_cmp)
        .unwrap_or(OPEN_HOLE_WIDTH)
}

/// Depth of the top of cement; `None` means surface.
fn top_of_cement(casing: &CasingString) -> Option<f64> {
    let raw = casing.top_of_cement.as_deref()?;
    if raw.to_lowercase().contains("surface") {
        return None;
    }
    loose::number_str(raw)
}

/// Tubes hang from surface to each string's setting depth; a cement band
/// fills between each pair of adjacent strings.
pub fn place_casings(
    casing: &[CasingString],
    scale: &DepthScale,
    center_x: f64,
) -> (Vec<CasingTube>, Vec<CementBand>) {
    let sorted = sorted_casing(casing);
    let surface_y = scale.margin_top;

    let tubes: Vec<CasingTube> = sorted
        .iter()
        .map(|c| {
            let width = casing_width(c);
            let y_bottom = scale.depth_to_y(c.interval);
            CasingTube {
                label: c.casing_type.clone().unwrap_or_else(|| "Casing".into()),
                size: c.size.clone(),
                depth: c.interval,
                x: center_x - width / 2.0,
                y_top: surface_y,
                y_bottom,
                width,
                height: (y_bottom - surface_y).max(0.0),
            }
        })
        .collect();

    let cement: Vec<CementBand> = sorted
        .windows(2)
        .map(|pair| {
            let (outer, inner) = (pair[0], pair[1]);
            let width = casing_width(outer);
            let top_depth = top_of_cement(inner);
            let y_top = scale.depth_to_y(top_depth);
            let y_bottom = scale.depth_to_y(inner.interval);
            CementBand {
                cement_type: inner.cement_type.clone(),
                top_depth,
                bottom_depth: inner.interval,
                x: center_x - width / 2.0,
                y_top,
                y_bottom,
                width,
                height: (y_bottom - y_top).max(0.0),
            }
        })
        .collect();

    (tubes, cement)
}
