//! Neighbourhood shape and its two-letter code.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::offsets::offsets;
use crate::core::{EngineError, EngineRng};

const MOORE: &str = "NM";
const VON_NEUMANN: &str = "NN";

/// Distance metric used to enumerate neighbours within a radius.
///
/// Serialized as its two-letter code (`"NM"` or `"NN"`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum NeighbourhoodShape {
    /// Chebyshev distance: the full square around the cell.
    Moore,
    /// Manhattan distance: the diamond around the cell.
    VonNeumann,
}

impl NeighbourhoodShape {
    /// Both shapes, in a fixed order.
    pub const ALL: [NeighbourhoodShape; 2] = [Self::Moore, Self::VonNeumann];

    /// The two-letter code for this shape.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Moore => MOORE,
            Self::VonNeumann => VON_NEUMANN,
        }
    }

    /// Is `(dx, dy)` within `radius` of the origin under this metric?
    ///
    /// The origin itself is included; callers that want neighbours only
    /// must exclude it.
    #[must_use]
    pub fn contains(self, dx: i32, dy: i32, radius: u8) -> bool {
        let r = i32::from(radius);
        match self {
            Self::Moore => dx.abs().max(dy.abs()) <= r,
            Self::VonNeumann => dx.abs() + dy.abs() <= r,
        }
    }

    /// Number of neighbours a cell has at `radius`, origin excluded.
    ///
    /// ```
    /// use ltl_engine::NeighbourhoodShape;
    ///
    /// assert_eq!(NeighbourhoodShape::Moore.neighbour_count(1), 8);
    /// assert_eq!(NeighbourhoodShape::VonNeumann.neighbour_count(1), 4);
    /// ```
    #[must_use]
    pub fn neighbour_count(self, radius: u8) -> usize {
        let r = usize::from(radius);
        match self {
            Self::Moore => (2 * r + 1) * (2 * r + 1) - 1,
            Self::VonNeumann => 2 * r * (r + 1),
        }
    }

    /// Relative coordinates of every neighbour at `radius`.
    #[must_use]
    pub fn offsets(self, radius: u8) -> Vec<(i32, i32)> {
        offsets(self, radius)
    }

    /// Pick a shape with a fair coin.
    pub fn random(rng: &mut EngineRng) -> Self {
        if rng.gen_bool(0.5) {
            Self::Moore
        } else {
            Self::VonNeumann
        }
    }
}

impl FromStr for NeighbourhoodShape {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            MOORE => Ok(Self::Moore),
            VON_NEUMANN => Ok(Self::VonNeumann),
            _ => Err(EngineError::Parse {
                code: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for NeighbourhoodShape {
    type Error = EngineError;

    fn try_from(code: String) -> Result<Self, Self::Error> {
        code.parse()
    }
}

impl From<NeighbourhoodShape> for String {
    fn from(shape: NeighbourhoodShape) -> Self {
        shape.code().to_string()
    }
}

impl std::fmt::Display for NeighbourhoodShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
