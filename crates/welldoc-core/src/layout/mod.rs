//! Wellbore schematic geometry.
//!
//! [`layout_wellbore`] turns a [`WellboreModel`] into plain positioned
//! primitives. Every renderer draws from the same [`WellboreLayout`], so the
//! screen and print diagrams cannot disagree on where anything sits.

pub mod canvas;
pub mod casing;
pub mod formations;
pub mod grid;
pub mod perforations;
pub mod plugs;
pub mod scale;
pub mod tools;

pub use canvas::{Canvas, CanvasSize};
pub use scale::{get_tvd, max_depth, DepthScale};

use crate::well::WellboreModel;
use casing::{CasingTube, CementBand};
use formations::{FormationBand, LegendEntry};
use grid::GridLine;
use perforations::PerforationMarker;
use plugs::PlugBlock;
use serde::Serialize;
use tools::{ShowMarker, ToolGlyph};

/// Well metadata printed above the diagram.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WellHeader {
    pub well_name: Option<String>,
    pub api_number: Option<String>,
    pub permit_number: Option<String>,
    pub elevation: Option<f64>,
    pub measured_depth: Option<f64>,
    /// TVD at total depth, from the MD/TVD approximation.
    pub true_vertical_depth: Option<f64>,
    pub deviation: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WellboreLayout {
    pub size: CanvasSize,
    pub canvas: Canvas,
    pub scale: DepthScale,
    pub center_x: f64,
    pub header: WellHeader,
    pub gridlines: Vec<GridLine>,
    pub formations: Vec<FormationBand>,
    pub legend: Vec<LegendEntry>,
    pub casings: Vec<CasingTube>,
    pub cement: Vec<CementBand>,
    pub perforations: Vec<PerforationMarker>,
    pub plugs: Vec<PlugBlock>,
    pub tools: Vec<ToolGlyph>,
    pub shows: Vec<ShowMarker>,
}

/// Compute the full diagram geometry for one well.
pub fn layout_wellbore(model: &WellboreModel, size: CanvasSize) -> WellboreLayout {
    let canvas = size.canvas();
    let scale = DepthScale::from_model(model, &canvas);
    let center_x = canvas.center_x();

    let merged = formations::merge_formations(&model.formations);
    let (casings, cement) = casing::place_casings(&model.casing, &scale, center_x);

    let header = WellHeader {
        well_name: model.well_name.clone(),
        api_number: model.api_number.clone(),
        permit_number: model.permit_number.clone(),
        elevation: model.elevation,
        measured_depth: model.measured_depth,
        true_vertical_depth: model.measured_depth.map(|md| get_tvd(model, md)),
        deviation: model.deviation.clone(),
    };

    tracing::debug!(
        size = %size,
        max_depth = scale.max_depth,
        pixels_per_foot = scale.pixels_per_foot,
        formations = merged.len(),
        casings = casings.len(),
        "laid out wellbore"
    );

    WellboreLayout {
        size,
        canvas,
        scale,
        center_x,
        header,
        gridlines: grid::gridlines(&scale),
        formations: formations::place_formations(&merged, &scale, &canvas),
        legend: formations::unique_formations(&merged),
        casings,
        cement,
        perforations: perforations::place_perforations(
            &model.perforation_intervals,
            &model.casing,
            &scale,
            center_x,
        ),
        plugs: plugs::place_plugs(&model.pluggings, &model.casing, &scale, center_x),
        tools: tools::place_tools(&model.downhole_tools, &model.casing, &scale, center_x),
        shows: tools::place_shows(&model.shows_depths, &model.casing, &scale, center_x),
    }
}
