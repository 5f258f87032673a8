//! Direction handling.
//!
//! Ranking and positioning always run top-to-bottom. For LR/RL the node box is
//! swapped before positioning and the axes are swapped back afterwards; BT/RL mirror
//! the rank axis.

use crate::graph::Point;
use crate::options::Direction;

/// Node box as seen by the top-to-bottom positioning step.
pub(crate) fn adjust(direction: Direction, width: f64, height: f64) -> (f64, f64) {
    if direction.is_horizontal() {
        (height, width)
    } else {
        (width, height)
    }
}

pub(crate) fn undo(direction: Direction, points: &mut [Point]) {
    if direction.is_reversed() {
        for p in points.iter_mut() {
            p.y = -p.y;
        }
    }
    if direction.is_horizontal() {
        for p in points.iter_mut() {
            (p.x, p.y) = (p.y, p.x);
        }
    }
}
