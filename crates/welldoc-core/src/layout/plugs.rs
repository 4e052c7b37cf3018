use crate::layout::casing::bore_width_at;
use crate::layout::scale::DepthScale;
use crate::well::{CasingString, Plugging};
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

static INTERVAL_RANGE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(\d+)\s*[-–]\s*(\d+)").ok());

/// Plug thickness, in feet, when only a single depth is known.
pub const POINT_PLUG_FT: f64 = 10.0;
/// Lower bound on a point plug's drawn thickness.
pub const MIN_PLUG_PX: f64 = 8.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PlugPlacement {
    /// Interval text gave a numeric range.
    Range,
    /// Interval text said the plug runs up to surface.
    Surface,
    /// Only a depth is known; drawn at a fixed thickness around it.
    Point,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlugBlock {
    pub plug_type: Option<String>,
    pub details: Option<String>,
    pub placement: PlugPlacement,
    pub top_depth: Option<f64>,
    pub bottom_depth: Option<f64>,
    pub x: f64,
    pub y_top: f64,
    pub y_bottom: f64,
    pub width: f64,
    pub height: f64,
}

/// Read a numeric range such as `"4500-4650"` or `"4500 – 4650"`.
pub fn parse_interval_range(interval: &str) -> Option<(f64, f64)> {
    let re = (*INTERVAL_RANGE).as_ref()?;
    let caps = re.captures(interval)?;
    let a: f64 = caps.get(1)?.as_str().parse().ok()?;
    let b: f64 = caps.get(2)?.as_str().parse().ok()?;
    Some((a.min(b), a.max(b)))
}

/// Blocks for each plug, sized to the bore at the plug depth.
pub fn place_plugs(
    pluggings: &[Plugging],
    casing: &[CasingString],
    scale: &DepthScale,
    center_x: f64,
) -> Vec<PlugBlock> {
    pluggings
        .iter()
        .map(|plug| place_plug(plug, casing, scale, center_x))
        .collect()
}

fn place_plug(
    plug: &Plugging,
    casing: &[CasingString],
    scale: &DepthScale,
    center_x: f64,
) -> PlugBlock {
    let interval = plug.interval.as_deref().unwrap_or_default();
    let range = parse_interval_range(interval);

    let (placement, top_depth, bottom_depth, y_top, y_bottom) = if let Some((top, bottom)) = range {
        (
            PlugPlacement::Range,
            Some(top),
            Some(bottom),
            scale.depth_to_y(Some(top)),
            scale.depth_to_y(Some(bottom)),
        )
    } else if interval.to_lowercase().contains("surface") {
        (
            PlugPlacement::Surface,
            Some(0.0),
            plug.depth,
            scale.margin_top,
            scale.depth_to_y(plug.depth),
        )
    } else {
        let center = scale.depth_to_y(plug.depth);
        let half = scale.feet_to_px(POINT_PLUG_FT).max(MIN_PLUG_PX) / 2.0;
        (
            PlugPlacement::Point,
            plug.depth,
            plug.depth,
            center - half,
            center + half,
        )
    };

    let width = bore_width_at(casing, plug.depth.or(bottom_depth));
    PlugBlock {
        plug_type: plug.plug_type.clone(),
        details: plug.details.clone(),
        placement,
        top_depth,
        bottom_depth,
        x: center_x - width / 2.0,
        y_top,
        y_bottom,
        width,
        height: (y_bottom - y_top).max(0.0),
    }
}
