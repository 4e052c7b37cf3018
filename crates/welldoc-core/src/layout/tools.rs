use crate::layout::casing::{bore_width_at, MIN_PIPE_WIDTH, PX_PER_INCH};
use crate::layout::scale::DepthScale;
use crate::well::{parse_size_inches, CasingString, DownholeTool, Show};
use serde::Serialize;

/// Horizontal offset of show markers from the bore wall.
pub const SHOW_OFFSET: f64 = 12.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolSymbol {
    Chevron,
    CrossedBox,
    Cylinder,
    NarrowRect,
    Circle,
}

impl ToolSymbol {
    /// Pick a glyph from the tool type text.
    pub fn from_type(tool_type: &str) -> ToolSymbol {
        let lower = tool_type.to_lowercase();
        if lower.contains("packer") {
            ToolSymbol::Chevron
        } else if lower.contains("valve") {
            ToolSymbol::CrossedBox
        } else if lower.contains("pump") {
            ToolSymbol::Cylinder
        } else if lower.contains("nipple") {
            ToolSymbol::NarrowRect
        } else {
            ToolSymbol::Circle
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolGlyph {
    pub label: String,
    pub symbol: ToolSymbol,
    pub depth: Option<f64>,
    pub bottom_depth: Option<f64>,
    pub status: Option<String>,
    pub x: f64,
    pub y: f64,
    pub y_bottom: Option<f64>,
    pub width: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ShowKind {
    Oil,
    Gas,
    OilAndGas,
    Unknown,
}

impl ShowKind {
    pub fn from_str_loose(s: &str) -> ShowKind {
        let lower = s.to_lowercase();
        match (lower.contains("oil"), lower.contains("gas")) {
            (true, true) => ShowKind::OilAndGas,
            (true, false) => ShowKind::Oil,
            (false, true) => ShowKind::Gas,
            (false, false) => ShowKind::Unknown,
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            ShowKind::Oil => "#166534",
            ShowKind::Gas => "#dc2626",
            ShowKind::OilAndGas => "#9333ea",
            ShowKind::Unknown => "#6b7280",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShowMarker {
    pub depth: Option<f64>,
    pub formation: Option<String>,
    pub kind: ShowKind,
    pub x: f64,
    pub y: f64,
    pub color: &'static str,
}

/// Glyphs for downhole tools, centred on the bore.
pub fn place_tools(
    tools: &[DownholeTool],
    casing: &[CasingString],
    scale: &DepthScale,
    center_x: f64,
) -> Vec<ToolGlyph> {
    tools
        .iter()
        .map(|tool| {
            let tool_type = tool.tool_type.as_deref().unwrap_or_default();
            let width = tool
                .size
                .as_deref()
                .and_then(parse_size_inches)
                .map(|inches| (inches * PX_PER_INCH).max(MIN_PIPE_WIDTH))
                .unwrap_or_else(|| bore_width_at(casing, tool.depth));
            let label = tool
                .name
                .clone()
                .or_else(|| tool.tool_type.clone())
                .unwrap_or_else(|| "Tool".into());
            ToolGlyph {
                label,
                symbol: ToolSymbol::from_type(tool_type),
                depth: tool.depth,
                bottom_depth: tool.bottom_depth,
                status: tool.status.clone(),
                x: center_x,
                y: scale.depth_to_y(tool.depth),
                y_bottom: tool
                    .bottom_depth
                    .filter(|d| d.is_finite())
                    .map(|d| scale.depth_to_y(Some(d))),
                width,
            }
        })
        .collect()
}

/// Markers beside the bore for each oil or gas show.
pub fn place_shows(
    shows: &[Show],
    casing: &[CasingString],
    scale: &DepthScale,
    center_x: f64,
) -> Vec<ShowMarker> {
    shows
        .iter()
        .map(|show| {
            let kind = show
                .oil_or_gas
                .as_deref()
                .map(ShowKind::from_str_loose)
                .unwrap_or(ShowKind::Unknown);
            ShowMarker {
                depth: show.depth,
                formation: show.formation.clone(),
                kind,
                x: center_x + bore_width_at(casing, show.depth) / 2.0 + SHOW_OFFSET,
                y: scale.depth_to_y(show.depth),
                color: kind.color(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::canvas::CanvasSize;
    use crate::layout::casing::OPEN_HOLE_WIDTH;

    fn scale() -> DepthScale {
        DepthScale::new(6300.0, &CanvasSize::Medium.canvas())
    }

    #[test]
    fn test_symbol_from_type() {
        assert_eq!(ToolSymbol::from_type("Model R Packer"), ToolSymbol::Chevron);
        assert_eq!(ToolSymbol::from_type("Safety VALVE"), ToolSymbol::CrossedBox);
        assert_eq!(ToolSymbol::from_type("rod pump"), ToolSymbol::Cylinder);
        assert_eq!(ToolSymbol::from_type("Seating Nipple"), ToolSymbol::NarrowRect);
        assert_eq!(ToolSymbol::from_type("anchor"), ToolSymbol::Circle);
        assert_eq!(ToolSymbol::from_type(""), ToolSymbol::Circle);
    }

    #[test]
    fn test_show_kind() {
        assert_eq!(ShowKind::from_str_loose("Oil"), ShowKind::Oil);
        assert_eq!(ShowKind::from_str_loose("GAS"), ShowKind::Gas);
        assert_eq!(ShowKind::from_str_loose("oil & gas"), ShowKind::OilAndGas);
        assert_eq!(ShowKind::from_str_loose("water"), ShowKind::Unknown);
    }

    #[test]
    fn test_place_tools() {
        let tools = vec![
            DownholeTool {
                tool_type: Some("Packer".into()),
                depth: Some(5000.0),
                bottom_depth: Some(5010.0),
                ..Default::default()
            },
            DownholeTool {
                name: Some("SN".into()),
                tool_type: Some("Seating nipple".into()),
                size: Some("2 7/8".into()),
                depth: None,
                ..Default::default()
            },
        ];
        let glyphs = place_tools(&tools, &[], &scale(), 220.0);

        assert_eq!(glyphs[0].label, "Packer");
        assert_eq!(glyphs[0].symbol, ToolSymbol::Chevron);
        assert_eq!(glyphs[0].y, 540.0);
        assert!(glyphs[0].y_bottom.is_some());
        assert_eq!(glyphs[0].width, OPEN_HOLE_WIDTH);

        assert_eq!(glyphs[1].label, "SN");
        assert_eq!(glyphs[1].y, 40.0);
        assert_eq!(glyphs[1].width, 11.5_f64.max(MIN_PIPE_WIDTH));
        assert!(glyphs[1].y_bottom.is_none());
    }

    #[test]
    fn test_place_shows() {
        let shows = vec![Show {
            depth: Some(1000.0),
            oil_or_gas: Some("Gas".into()),
            formation: Some("Morrow".into()),
        }];
        let markers = place_shows(&shows, &[], &scale(), 220.0);
        assert_eq!(markers[0].kind, ShowKind::Gas);
        assert_eq!(markers[0].x, 220.0 + 10.0 + SHOW_OFFSET);
        assert_eq!(markers[0].y, 140.0);
        assert_eq!(markers[0].color, "#dc2626");
    }
}
