use crate::error::WelldocError;
use crate::layout::WellboreLayout;
use crate::render::{escape, write_defs, write_diagram};
use std::fmt::Write;

const LEGEND_ROW: f64 = 16.0;
const LEGEND_SWATCH: f64 = 10.0;

/// Interactive diagram: the schematic with a legend strip under the plot.
pub fn render_screen(layout: &WellboreLayout) -> Result<String, WelldocError> {
    let canvas = &layout.canvas;
    let legend_top = canvas.height;
    let height = legend_top + LEGEND_ROW * layout.legend.len() as f64 + LEGEND_ROW / 2.0;

    let mut out = String::new();
    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{height}" viewBox="0 0 {w} {height}" font-family="sans-serif">"#,
        w = canvas.width
    )?;
    write_defs(&mut out)?;

    if let Some(name) = &layout.header.well_name {
        writeln!(
            out,
            r#"<text x="{}" y="{}" font-size="12" font-weight="bold" text-anchor="middle">{}</text>"#,
            layout.center_x,
            canvas.margin_top / 2.0 + 4.0,
            escape(name)
        )?;
    }

    write_diagram(&mut out, layout)?;

    writeln!(out, r#"<g class="legend">"#)?;
    for (i, entry) in layout.legend.iter().enumerate() {
        let y = legend_top + LEGEND_ROW * i as f64;
        let fill = match entry.pattern {
            Some(id) => format!("url(#{id})"),
            None => entry.color.to_string(),
        };
        writeln!(
            out,
            r##"<rect x="{}" y="{}" width="{LEGEND_SWATCH}" height="{LEGEND_SWATCH}" fill="{}" stroke="#6b7280" stroke-width="0.5"/>"##,
            canvas.plot_left(),
            y,
            fill
        )?;
        writeln!(
            out,
            r#"<text x="{}" y="{}" font-size="10">{}</text>"#,
            canvas.plot_left() + LEGEND_SWATCH + 4.0,
            y + LEGEND_SWATCH - 1.0,
            escape(&entry.name)
        )?;
    }
    writeln!(out, "</g>")?;

    writeln!(out, "</svg>")?;
    Ok(out)
}
