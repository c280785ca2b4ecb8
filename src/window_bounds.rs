use serde::{Deserialize, Serialize};

use crate::{DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH, MIN_WINDOW_WIDTH};

/// On-screen rectangle of the main window in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct WindowBounds {
    pub(crate) x: i32,
    pub(crate) y: i32,
    pub(crate) width: u32,
    pub(crate) height: u32,
}

impl WindowBounds {
    pub(crate) fn from_logical(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x: x.round() as i32,
            y: y.round() as i32,
            width: width.round().max(0.0) as u32,
            height: height.round().max(0.0) as u32,
        }
    }
}

/// Geometry the main window is built with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct WindowGeometry {
    pub(crate) width: u32,
    pub(crate) height: u32,
    /// `None` lets the window be centered.
    pub(crate) position: Option<(i32, i32)>,
    pub(crate) min_width: u32,
}

impl WindowGeometry {
    pub(crate) fn from_bounds(bounds: Option<WindowBounds>) -> Self {
        match bounds {
            Some(bounds) => Self {
                width: bounds.width,
                height: bounds.height,
                position: Some((bounds.x, bounds.y)),
                min_width: MIN_WINDOW_WIDTH,
            },
            None => Self::default(),
        }
    }
}

impl Default for WindowGeometry {
    fn default() -> Self {
        Self {
            width: DEFAULT_WINDOW_WIDTH,
            height: DEFAULT_WINDOW_HEIGHT,
            position: None,
            min_width: MIN_WINDOW_WIDTH,
        }
    }
}
