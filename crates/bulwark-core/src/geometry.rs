//! Point arithmetic used by all movement and collision code.

use serde::{Deserialize, Serialize};

use crate::constants::{CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::types::Point;

/// Euclidean distance between two points. Never negative.
pub fn distance(a: Point, b: Point) -> f64 {
    a.distance(b)
}

/// Unit vector pointing from `a` toward `b`.
///
/// Callers must not pass coincident points: movement code only asks for a
/// direction after the arrival test has ruled out a distance below one step.
pub fn direction(a: Point, b: Point) -> Point {
    debug_assert!(a != b, "direction() called with coincident points");
    (b - a) / distance(a, b)
}

/// Heading from `a` to `b` in radians, `atan2(dy, dx)` in canvas space.
pub fn heading(a: Point, b: Point) -> f64 {
    (b.y - a.y).atan2(b.x - a.x)
}

/// Ratio between the canvas as displayed on screen and its logical size.
///
/// Converting device pixels to logical coordinates belongs to the input
/// producer, which runs before anything reaches the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasScale {
    pub displayed_width: f64,
    pub displayed_height: f64,
}

impl Default for CanvasScale {
    fn default() -> Self {
        Self {
            displayed_width: CANVAS_WIDTH,
            displayed_height: CANVAS_HEIGHT,
        }
    }
}

impl CanvasScale {
    pub fn new(displayed_width: f64, displayed_height: f64) -> Self {
        Self {
            displayed_width,
            displayed_height,
        }
    }

    /// Map a pixel coordinate on the displayed canvas into logical canvas space.
    ///
    /// A zero-sized display falls back to an identity mapping on that axis.
    pub fn to_canvas(&self, px: f64, py: f64) -> Point {
        let sx = if self.displayed_width > 0.0 {
            CANVAS_WIDTH / self.displayed_width
        } else {
            1.0
        };
        let sy = if self.displayed_height > 0.0 {
            CANVAS_HEIGHT / self.displayed_height
        } else {
            1.0
        };
        Point::new(px * sx, py * sy)
    }
}
