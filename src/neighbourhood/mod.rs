//! Neighbourhood geometry.
//!
//! A neighbourhood is a shape plus a radius. It decides which relative
//! coordinates count as neighbours of a cell:
//!
//! - **Moore** (`"NM"`): Chebyshev distance, `max(|dx|, |dy|) <= r`,
//!   giving `(2r+1)^2 - 1` neighbours.
//! - **Von Neumann** (`"NN"`): Manhattan distance, `|dx| + |dy| <= r`,
//!   giving `2r(r+1)` neighbours.
//!
//! Everything here is pure. The board computes its offset table once at
//! construction and reuses it for every generation.

mod offsets;
mod shape;

pub use offsets::offsets;
pub use shape::NeighbourhoodShape;
