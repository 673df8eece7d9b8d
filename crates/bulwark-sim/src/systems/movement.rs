//! Straight-line movement toward a fixed point, with the shared arrival test.

use bulwark_core::geometry::{direction, distance};
use bulwark_core::types::Point;

/// Result of advancing one tick toward a target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Advance {
    /// Remaining distance was below one step; the mover resolves this tick.
    Arrived,
    /// New position one step closer to the target.
    Moved(Point),
}

/// Advance `pos` by `speed` toward `target`.
///
/// Arrival is `distance < speed`, so a mover never overshoots without
/// resolving, and `direction` is never asked for coincident points.
pub fn advance(pos: Point, target: Point, speed: f64) -> Advance {
    if distance(pos, target) < speed {
        Advance::Arrived
    } else {
        Advance::Moved(pos + direction(pos, target) * speed)
    }
}
