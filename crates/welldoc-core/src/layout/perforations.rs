use crate::layout::casing::bore_width_at;
use crate::layout::scale::DepthScale;
use crate::well::{CasingString, Perforation};
use serde::Serialize;

/// How far perforation marks stick out on each side of the bore.
pub const PERFORATION_WING: f64 = 8.0;
pub const MIN_PERFORATION_HEIGHT: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PerforationStatus {
    Open,
    Squeezed,
    Closed,
    Other,
}

impl PerforationStatus {
    pub fn from_str_loose(s: &str) -> PerforationStatus {
        let lower = s.trim().to_lowercase();
        if lower.contains("squeez") {
            PerforationStatus::Squeezed
        } else if lower.contains("closed") {
            PerforationStatus::Closed
        } else if lower.contains("open") {
            PerforationStatus::Open
        } else {
            PerforationStatus::Other
        }
    }

    pub fn fill(self) -> &'static str {
        match self {
            PerforationStatus::Open => "#22c55e",
            PerforationStatus::Squeezed | PerforationStatus::Closed => "#ef4444",
            PerforationStatus::Other => "#fca5a5",
        }
    }

    pub fn pattern_id(self) -> Option<&'static str> {
        match self {
            PerforationStatus::Squeezed | PerforationStatus::Closed => Some("pattern-crosshatch"),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerforationMarker {
    pub from: Option<f64>,
    pub to: Option<f64>,
    pub status: PerforationStatus,
    pub formation: Option<String>,
    pub shots: Option<f64>,
    pub x: f64,
    pub y_top: f64,
    pub y_bottom: f64,
    pub width: f64,
    pub height: f64,
    pub fill: &'static str,
    pub pattern: Option<&'static str>,
}

/// Marks across the bore for each perforated interval, coloured by status.
pub fn place_perforations(
    perforations: &[Perforation],
    casing: &[CasingString],
    scale: &DepthScale,
    center_x: f64,
) -> Vec<PerforationMarker> {
    perforations
        .iter()
        .map(|p| {
            let status = p
                .status
                .as_deref()
                .map(PerforationStatus::from_str_loose)
                .unwrap_or(PerforationStatus::Other);
            let width = bore_width_at(casing, p.from) + 2.0 * PERFORATION_WING;
            let y_top = scale.depth_to_y(p.from);
            let y_bottom = scale.depth_to_y(p.to);
            PerforationMarker {
                from: p.from,
                to: p.to,
                status,
                formation: p.formation.clone(),
                shots: p.shots,
                x: center_x - width / 2.0,
                y_top,
                y_bottom,
                width,
                height: (y_bottom - y_top).max(MIN_PERFORATION_HEIGHT),
                fill: status.fill(),
                pattern: status.pattern_id(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::canvas::CanvasSize;

    #[test]
    fn test_status_from_str() {
        assert_eq!(PerforationStatus::from_str_loose("Open"), PerforationStatus::Open);
        assert_eq!(PerforationStatus::from_str_loose("squeezed"), PerforationStatus::Squeezed);
        assert_eq!(PerforationStatus::from_str_loose("CLOSED"), PerforationStatus::Closed);
        assert_eq!(PerforationStatus::from_str_loose("unknown"), PerforationStatus::Other);
    }

    #[test]
    fn test_status_styles() {
        assert_eq!(PerforationStatus::Open.fill(), "#22c55e");
        assert_eq!(PerforationStatus::Open.pattern_id(), None);
        assert_eq!(PerforationStatus::Squeezed.fill(), "#ef4444");
        assert_eq!(PerforationStatus::Closed.pattern_id(), Some("pattern-crosshatch"));
        assert_eq!(PerforationStatus::Other.fill(), "#fca5a5");
    }

    #[test]
    fn test_place_perforations() {
        let canvas = CanvasSize::Medium.canvas();
        let scale = DepthScale::new(6300.0, &canvas);
        let casing = vec![CasingString {
            casing_type: Some("Production".into()),
            interval: Some(6300.0),
            ..Default::default()
        }];
        let perfs = vec![
            Perforation {
                from: Some(5000.0),
                to: Some(5100.0),
                status: Some("open".into()),
                ..Default::default()
            },
            Perforation::default(),
        ];
        let markers = place_perforations(&perfs, &casing, &scale, 220.0);

        assert_eq!(markers[0].status, PerforationStatus::Open);
        assert_eq!(markers[0].width, 40.0);
        assert_eq!(markers[0].x, 200.0);
        assert_eq!(markers[0].y_top, 540.0);

        // No depths: pinned to the top margin at minimum height
        assert_eq!(markers[1].status, PerforationStatus::Other);
        assert_eq!(markers[1].y_top, 40.0);
        assert_eq!(markers[1].height, MIN_PERFORATION_HEIGHT);
    }
}
