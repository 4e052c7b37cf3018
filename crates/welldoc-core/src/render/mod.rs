//! SVG output for a computed [`WellboreLayout`].
//!
//! Both renderers call [`write_diagram`] for the schematic itself and only
//! differ in what they place around it.

pub mod print;
pub mod svg;

use crate::layout::tools::{ToolGlyph, ToolSymbol};
use crate::layout::WellboreLayout;
use std::fmt::{self, Write};

const GRID_COLOR: &str = "#e5e7eb";
const LABEL_COLOR: &str = "#374151";
const CASING_COLOR: &str = "#1f2937";
const CEMENT_COLOR: &str = "#a8a29e";
const PLUG_COLOR: &str = "#57534e";
const TOOL_COLOR: &str = "#2563eb";
/// Drawn height of a tool with no bottom depth.
const TOOL_HEIGHT: f64 = 10.0;
const SHOW_RADIUS: f64 = 4.0;

/// Escape text for use in SVG content and attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

/// Fill attribute for a shape with a base colour and optional overlay pattern.
fn fill_for(color: &str, pattern: Option<&str>) -> String {
    match pattern {
        Some(id) => format!("url(#{id})"),
        None => color.to_string(),
    }
}

/// Pattern definitions referenced by formation bands and perforations.
pub(crate) fn write_defs(out: &mut String) -> fmt::Result {
    writeln!(out, "<defs>")?;
    writeln!(
        out,
        r##"<pattern id="pattern-shale" width="12" height="6" patternUnits="userSpaceOnUse"><rect width="12" height="6" fill="#9ca3af"/><line x1="0" y1="3" x2="12" y2="3" stroke="#4b5563" stroke-width="0.6"/></pattern>"##
    )?;
    writeln!(
        out,
        r##"<pattern id="pattern-sand" width="8" height="8" patternUnits="userSpaceOnUse"><rect width="8" height="8" fill="#fde68a"/><circle cx="2" cy="2" r="0.8" fill="#92400e"/><circle cx="6" cy="6" r="0.8" fill="#92400e"/></pattern>"##
    )?;
    writeln!(
        out,
        r##"<pattern id="pattern-lime" width="16" height="8" patternUnits="userSpaceOnUse"><rect width="16" height="8" fill="#bfdbfe"/><path d="M0 0H16M0 4H16M8 0V4M0 4V8M16 4V8" stroke="#1e40af" stroke-width="0.5" fill="none"/></pattern>"##
    )?;
    writeln!(
        out,
        r##"<pattern id="pattern-dolomite" width="16" height="8" patternUnits="userSpaceOnUse"><rect width="16" height="8" fill="#c4b5fd"/><path d="M0 0H16M0 4H16M2 0L6 4M10 4L14 8" stroke="#5b21b6" stroke-width="0.5" fill="none"/></pattern>"##
    )?;
    writeln!(
        out,
        r##"<pattern id="pattern-crosshatch" width="6" height="6" patternUnits="userSpaceOnUse"><rect width="6" height="6" fill="#ef4444"/><path d="M0 0L6 6M6 0L0 6" stroke="#7f1d1d" stroke-width="0.7"/></pattern>"##
    )?;
    writeln!(out, "</defs>")
}

/// The schematic: gridlines, formation bands, cement, casing, perforations,
/// plugs, tools and shows, in back-to-front order.
pub(crate) fn write_diagram(out: &mut String, layout: &WellboreLayout) -> fmt::Result {
    let canvas = &layout.canvas;

    writeln!(out, r#"<g class="gridlines">"#)?;
    for line in &layout.gridlines {
        writeln!(
            out,
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{GRID_COLOR}" stroke-width="1"/>"#,
            canvas.plot_left(),
            line.y,
            canvas.plot_right(),
            line.y
        )?;
        writeln!(
            out,
            r#"<text x="{}" y="{}" font-size="9" text-anchor="end" fill="{LABEL_COLOR}">{}</text>"#,
            canvas.plot_left() - 4.0,
            line.y + 3.0,
            escape(&line.label)
        )?;
    }
    writeln!(out, "</g>")?;

    writeln!(out, r#"<g class="formations">"#)?;
    for band in &layout.formations {
        writeln!(
            out,
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}" opacity="0.6"/>"#,
            band.x,
            band.y_top,
            band.width,
            band.height,
            fill_for(band.color, band.pattern)
        )?;
        if let Some(name) = &band.name {
            writeln!(
                out,
                r#"<text x="{}" y="{}" font-size="9" fill="{LABEL_COLOR}">{}</text>"#,
                band.x + 3.0,
                band.y_top + 10.0,
                escape(name)
            )?;
        }
    }
    writeln!(out, "</g>")?;

    writeln!(out, r#"<g class="cement">"#)?;
    for band in &layout.cement {
        writeln!(
            out,
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{CEMENT_COLOR}"/>"#,
            band.x, band.y_top, band.width, band.height
        )?;
    }
    writeln!(out, "</g>")?;

    writeln!(out, r#"<g class="casing">"#)?;
    for tube in &layout.casings {
        writeln!(
            out,
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="none" stroke="{CASING_COLOR}" stroke-width="2"/>"#,
            tube.x, tube.y_top, tube.width, tube.height
        )?;
        let label = match &tube.size {
            Some(size) => format!("{} {}", tube.label, size),
            None => tube.label.clone(),
        };
        writeln!(
            out,
            r#"<text x="{}" y="{}" font-size="8" fill="{CASING_COLOR}">{}</text>"#,
            tube.x + tube.width + 2.0,
            tube.y_bottom,
            escape(&label)
        )?;
    }
    writeln!(out, "</g>")?;

    writeln!(out, r#"<g class="perforations">"#)?;
    for perf in &layout.perforations {
        writeln!(
            out,
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}"/>"#,
            perf.x,
            perf.y_top,
            perf.width,
            perf.height,
            fill_for(perf.fill, perf.pattern)
        )?;
    }
    writeln!(out, "</g>")?;

    writeln!(out, r#"<g class="plugs">"#)?;
    for plug in &layout.plugs {
        writeln!(
            out,
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{PLUG_COLOR}"/>"#,
            plug.x, plug.y_top, plug.width, plug.height
        )?;
    }
    writeln!(out, "</g>")?;

    writeln!(out, r#"<g class="tools">"#)?;
    for tool in &layout.tools {
        write_tool(out, tool)?;
    }
    writeln!(out, "</g>")?;

    writeln!(out, r#"<g class="shows">"#)?;
    for show in &layout.shows {
        writeln!(
            out,
            r#"<circle cx="{}" cy="{}" r="{SHOW_RADIUS}" fill="{}"/>"#,
            show.x, show.y, show.color
        )?;
    }
    writeln!(out, "</g>")
}

fn write_tool(out: &mut String, tool: &ToolGlyph) -> fmt::Result {
    let half = tool.width / 2.0;
    let (x, y) = (tool.x, tool.y);
    let height = tool
        .y_bottom
        .map(|bottom| (bottom - y).max(TOOL_HEIGHT))
        .unwrap_or(TOOL_HEIGHT);

    match tool.symbol {
        ToolSymbol::Chevron => writeln!(
            out,
            r#"<polyline points="{},{} {},{} {},{}" fill="none" stroke="{TOOL_COLOR}" stroke-width="2"/>"#,
            x - half,
            y,
            x,
            y + height,
            x + half,
            y
        )?,
        ToolSymbol::CrossedBox => writeln!(
            out,
            r#"<rect x="{0}" y="{1}" width="{2}" height="{3}" fill="none" stroke="{TOOL_COLOR}"/><path d="M{0} {1}L{4} {5}M{4} {1}L{0} {5}" stroke="{TOOL_COLOR}"/>"#,
            x - half,
            y,
            tool.width,
            height,
            x + half,
            y + height
        )?,
        ToolSymbol::Cylinder => writeln!(
            out,
            r#"<rect x="{}" y="{}" width="{}" height="{}" rx="{}" fill="{TOOL_COLOR}" opacity="0.7"/>"#,
            x - half,
            y,
            tool.width,
            height,
            half.min(4.0)
        )?,
        ToolSymbol::NarrowRect => writeln!(
            out,
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{TOOL_COLOR}"/>"#,
            x - half / 2.0,
            y,
            half,
            height
        )?,
        ToolSymbol::Circle => writeln!(
            out,
            r#"<circle cx="{}" cy="{}" r="{}" fill="{TOOL_COLOR}"/>"#,
            x,
            y,
            (half / 2.0).max(3.0)
        )?,
    }
    writeln!(
        out,
        r#"<text x="{}" y="{}" font-size="8" fill="{TOOL_COLOR}">{}</text>"#,
        x + half + 3.0,
        y + 4.0,
        escape(&tool.label)
    )
}
