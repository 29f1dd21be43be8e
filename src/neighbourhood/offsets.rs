//! Offset enumeration.

use super::NeighbourhoodShape;

/// Every `(dx, dy)` within `radius` of the origin under `shape`, origin excluded.
///
/// Offsets come out row by row (`dy` outer, `dx` inner, both ascending), so the
/// order is the same on every call.
///
/// ```
/// use ltl_engine::neighbourhood::offsets;
/// use ltl_engine::NeighbourhoodShape;
///
/// let von_neumann = offsets(NeighbourhoodShape::VonNeumann, 1);
/// assert_eq!(von_neumann, vec![(0, -1), (-1, 0), (1, 0), (0, 1)]);
/// ```
#[must_use]
pub fn offsets(shape: NeighbourhoodShape, radius: u8) -> Vec<(i32, i32)> {
    let r = i32::from(radius);
    let mut out = Vec::with_capacity(shape.neighbour_count(radius));
    for dy in -r..=r {
        for dx in -r..=r {
            if (dx, dy) != (0, 0) && shape.contains(dx, dy, radius) {
                out.push((dx, dy));
            }
        }
    }
    out
}
