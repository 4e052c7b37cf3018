use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CanvasSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl CanvasSize {
    pub fn from_str_loose(s: &str) -> Option<CanvasSize> {
        match s.trim().to_lowercase().as_str() {
            "small" | "s" => Some(CanvasSize::Small),
            "medium" | "m" => Some(CanvasSize::Medium),
            "large" | "l" => Some(CanvasSize::Large),
            _ => None,
        }
    }

    pub fn canvas(self) -> Canvas {
        match self {
            CanvasSize::Small => Canvas {
                width: 280.0,
                height: 500.0,
                margin_top: 30.0,
                margin_bottom: 20.0,
                margin_left: 50.0,
                margin_right: 20.0,
            },
            CanvasSize::Medium => Canvas {
                width: 400.0,
                height: 700.0,
                margin_top: 40.0,
                margin_bottom: 30.0,
                margin_left: 70.0,
                margin_right: 30.0,
            },
            CanvasSize::Large => Canvas {
                width: 560.0,
                height: 1000.0,
                margin_top: 50.0,
                margin_bottom: 40.0,
                margin_left: 90.0,
                margin_right: 40.0,
            },
        }
    }
}

impl fmt::Display for CanvasSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CanvasSize::Small => write!(f, "small"),
            CanvasSize::Medium => write!(f, "medium"),
            CanvasSize::Large => write!(f, "large"),
        }
    }
}

/// Fixed drawing area in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
    pub margin_top: f64,
    pub margin_bottom: f64,
    pub margin_left: f64,
    pub margin_right: f64,
}

impl Canvas {
    /// Vertical pixels available for depth.
    pub fn plot_height(&self) -> f64 {
        (self.height - self.margin_top - self.margin_bottom).max(0.0)
    }

    pub fn plot_left(&self) -> f64 {
        self.margin_left
    }

    pub fn plot_right(&self) -> f64 {
        self.width - self.margin_right
    }

    /// Horizontal centre line of the wellbore.
    pub fn center_x(&self) -> f64 {
        self.margin_left + (self.plot_right() - self.plot_left()) / 2.0
    }
}
