use crate::error::WelldocError;
use crate::layout::WellboreLayout;
use crate::render::{escape, write_defs, write_diagram};
use std::fmt::Write;

const ROW: f64 = 18.0;
const TABLE_PAD: f64 = 8.0;
const BORDER: &str = "#9ca3af";

fn feet(value: Option<f64>) -> String {
    value.map(|v| format!("{v} ft")).unwrap_or_else(|| "-".into())
}

fn text(value: Option<&str>) -> String {
    value.unwrap_or("-").to_string()
}

/// Print layout: a metadata table, the schematic, then a legend table.
pub fn render_print(layout: &WellboreLayout) -> Result<String, WelldocError> {
    let canvas = &layout.canvas;
    let header = &layout.header;
    let rows = [
        ("Well", text(header.well_name.as_deref())),
        ("API number", text(header.api_number.as_deref())),
        ("Permit number", text(header.permit_number.as_deref())),
        ("Elevation", feet(header.elevation)),
        ("Measured depth", feet(header.measured_depth)),
        ("True vertical depth", feet(header.true_vertical_depth)),
        ("Deviation", text(header.deviation.as_deref())),
    ];

    let table_width = canvas.width - 2.0 * TABLE_PAD;
    let label_width = table_width * 0.45;
    let header_height = ROW * rows.len() as f64 + 2.0 * TABLE_PAD;
    let legend_top = header_height + canvas.height;
    let legend_height = ROW * (layout.legend.len() + 1) as f64 + TABLE_PAD;
    let height = legend_top + legend_height;

    let mut out = String::new();
    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{height}" viewBox="0 0 {w} {height}" font-family="serif">"#,
        w = canvas.width
    )?;
    write_defs(&mut out)?;
    writeln!(out, r#"<rect width="100%" height="100%" fill="white"/>"#)?;

    writeln!(out, r#"<g class="header-table">"#)?;
    for (i, (label, value)) in rows.iter().enumerate() {
        let y = TABLE_PAD + ROW * i as f64;
        writeln!(
            out,
            r#"<rect x="{TABLE_PAD}" y="{y}" width="{table_width}" height="{ROW}" fill="none" stroke="{BORDER}" stroke-width="0.5"/>"#
        )?;
        writeln!(
            out,
            r#"<line x1="{x}" y1="{y}" x2="{x}" y2="{y2}" stroke="{BORDER}" stroke-width="0.5"/>"#,
            x = TABLE_PAD + label_width,
            y2 = y + ROW
        )?;
        writeln!(
            out,
            r#"<text x="{}" y="{}" font-size="10" font-weight="bold">{}</text>"#,
            TABLE_PAD + 4.0,
            y + ROW - 5.0,
            escape(label)
        )?;
        writeln!(
            out,
            r#"<text x="{}" y="{}" font-size="10">{}</text>"#,
            TABLE_PAD + label_width + 4.0,
            y + ROW - 5.0,
            escape(value)
        )?;
    }
    writeln!(out, "</g>")?;

    writeln!(out, r#"<g class="diagram" transform="translate(0,{header_height})">"#)?;
    write_diagram(&mut out, layout)?;
    writeln!(out, "</g>")?;

    writeln!(out, r#"<g class="legend-table">"#)?;
    writeln!(
        out,
        r#"<text x="{}" y="{}" font-size="10" font-weight="bold">Formation</text>"#,
        TABLE_PAD + 4.0,
        legend_top + ROW - 5.0
    )?;
    writeln!(
        out,
        r#"<text x="{}" y="{}" font-size="10" font-weight="bold">Lithology</text>"#,
        TABLE_PAD + label_width + 4.0,
        legend_top + ROW - 5.0
    )?;
    for (i, entry) in layout.legend.iter().enumerate() {
        let y = legend_top + ROW * (i + 1) as f64;
        let fill = match entry.pattern {
            Some(id) => format!("url(#{id})"),
            None => entry.color.to_string(),
        };
        writeln!(
            out,
            r#"<rect x="{TABLE_PAD}" y="{y}" width="{table_width}" height="{ROW}" fill="none" stroke="{BORDER}" stroke-width="0.5"/>"#
        )?;
        writeln!(
            out,
            r#"<rect x="{}" y="{}" width="10" height="10" fill="{}"/>"#,
            TABLE_PAD + 4.0,
            y + 4.0,
            fill
        )?;
        writeln!(
            out,
            r#"<text x="{}" y="{}" font-size="10">{}</text>"#,
            TABLE_PAD + 18.0,
            y + ROW - 5.0,
            escape(&entry.name)
        )?;
        writeln!(
            out,
            r#"<text x="{}" y="{}" font-size="10">{}</text>"#,
            TABLE_PAD + label_width + 4.0,
            y + ROW - 5.0,
            entry.lithology.as_str()
        )?;
    }
    writeln!(out, "</g>")?;

    writeln!(out, "</svg>")?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{layout_wellbore, CanvasSize};
    use crate::well::{Formation, WellboreModel};

    fn model() -> WellboreModel {
        WellboreModel {
            well_name: Some("State 7".into()),
            api_number: Some("15-051-26000".into()),
            elevation: Some(1925.0),
            measured_depth: Some(3600.0),
            formations: vec![
                Formation::new(0.0, 1800.0, "Dolomite"),
                Formation::new(1800.0, 3600.0, "Arbuckle"),
            ],
            ..Default::default()
        }
    }

    #[test]
    fn test_render_print_header_table() {
        let layout = layout_wellbore(&model(), CanvasSize::Medium);
        let svg = render_print(&layout).unwrap();
        assert!(svg.contains(">State 7</text>"));
        assert!(svg.contains(">15-051-26000</text>"));
        assert!(svg.contains(">1925 ft</text>"));
        assert!(svg.contains(">3600 ft</text>"));
        // Permit number is absent
        assert!(svg.contains(">-</text>"));
    }

    #[test]
    fn test_render_print_legend_table() {
        let layout = layout_wellbore(&model(), CanvasSize::Medium);
        let svg = render_print(&layout).unwrap();
        assert!(svg.contains(">dolomite</text>"));
        assert!(svg.contains(">other</text>"));
        assert!(svg.contains(">Arbuckle</text>"));
    }

    #[test]
    fn test_print_and_screen_share_geometry() {
        let layout = layout_wellbore(&model(), CanvasSize::Large);
        let mut diagram = String::new();
        crate::render::write_diagram(&mut diagram, &layout).unwrap();

        let print = render_print(&layout).unwrap();
        let screen = crate::render::svg::render_screen(&layout).unwrap();
        assert!(print.contains(&diagram));
        assert!(screen.contains(&diagram));
    }
}
