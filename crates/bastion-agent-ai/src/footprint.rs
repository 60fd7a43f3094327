//! Nearest-defended-point queries against the structure footprint.
//!
//! The nearest point is approximated radially: it is where the ray from the
//! structure's center through the agent leaves the footprint. For a rectangle
//! this is not the true nearest edge point.

use bastion_core::components::Structure;
use bastion_core::types::{Footprint, Position};

/// Source of the point an agent walks toward and measures its reach against.
pub trait NearestPointQuery {
    fn nearest_point(&self, from: Position) -> Position;
}

impl NearestPointQuery for Structure {
    fn nearest_point(&self, from: Position) -> Position {
        radial_exit_point(&self.footprint, self.position, from)
    }
}

/// Exit point of the ray `center -> from` through `footprint`.
/// A point already inside the footprint is its own nearest point.
pub fn radial_exit_point(footprint: &Footprint, center: Position, from: Position) -> Position {
    let offset = from - center;
    let len = offset.length();
    if len <= f64::EPSILON {
        return center;
    }
    let dir = offset / len;

    let reach = match *footprint {
        Footprint::Circle { radius } => radius,
        Footprint::Rect { half_extents } => {
            let tx = if dir.x.abs() > f64::EPSILON {
                half_extents.x / dir.x.abs()
            } else {
                f64::INFINITY
            };
            let ty = if dir.y.abs() > f64::EPSILON {
                half_extents.y / dir.y.abs()
            } else {
                f64::INFINITY
            };
            tx.min(ty)
        }
    };

    if len <= reach {
        from
    } else {
        center + dir * reach
    }
}
