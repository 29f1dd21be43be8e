//! The validated ruleset.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::debug;

use super::interval::Interval;
use super::record::ConfigRecord;
use crate::core::{EngineError, EngineRng, Result};
use crate::neighbourhood::NeighbourhoodShape;

/// Smallest allowed neighbourhood radius.
pub const MIN_RADIUS: u8 = 1;
/// Largest allowed neighbourhood radius.
pub const MAX_RADIUS: u8 = 10;
/// Largest allowed number of decay stages.
pub const MAX_AGING_DEPTH: u8 = 25;

/// Immutable Larger-than-Life ruleset.
///
/// Every field satisfies its domain for the lifetime of the value: the only
/// ways to get one are [`Configuration::new`], [`Configuration::randomize`],
/// [`Configuration::generate`], parsing a rulestring, or deserializing a
/// [`ConfigRecord`], and all of them validate.
///
/// ```
/// use ltl_engine::{Configuration, NeighbourhoodShape};
///
/// let life = Configuration::new(1, 0, false, (2, 3), (3, 3), NeighbourhoodShape::Moore).unwrap();
/// assert_eq!(life.to_string(), "R1,C0,M0,S2..3,B3..3,NM");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "ConfigRecord", into = "ConfigRecord")]
pub struct Configuration {
    radius: u8,
    aging_depth: u8,
    aging_enabled: bool,
    survival: Interval,
    birth: Interval,
    shape: NeighbourhoodShape,
}

impl Configuration {
    /// Create a configuration, validating every field.
    ///
    /// # Errors
    ///
    /// [`EngineError::Validation`] if `radius` is outside `1..=10`,
    /// `aging_depth` is above 25, or either interval has `min > max`.
    pub fn new(
        radius: u8,
        aging_depth: u8,
        aging_enabled: bool,
        survival: (u16, u16),
        birth: (u16, u16),
        shape: NeighbourhoodShape,
    ) -> Result<Self> {
        if !(MIN_RADIUS..=MAX_RADIUS).contains(&radius) {
            return Err(EngineError::validation(
                "radius",
                format!("must be in {MIN_RADIUS}..={MAX_RADIUS}, got {radius}"),
            ));
        }
        if aging_depth > MAX_AGING_DEPTH {
            return Err(EngineError::validation(
                "decayStates",
                format!("must be in 0..={MAX_AGING_DEPTH}, got {aging_depth}"),
            ));
        }
        let survival = Interval::checked("survivalInterval", survival.0, survival.1)?;
        let birth = Interval::checked("birthInterval", birth.0, birth.1)?;

        Ok(Self {
            radius,
            aging_depth,
            aging_enabled,
            survival,
            birth,
            shape,
        })
    }

    /// Random configuration, reproducible when `seed` is given.
    pub fn randomize(seed: Option<u64>) -> Self {
        let mut rng = EngineRng::from_seed_or_entropy(seed);
        debug!(seed = rng.seed(), "randomizing configuration");
        Self::generate(&mut rng)
    }

    /// Draw every field uniformly from its domain using `rng`.
    pub fn generate(rng: &mut EngineRng) -> Self {
        let radius = rng.gen_range(MIN_RADIUS..=MAX_RADIUS);
        let aging_depth = rng.gen_range(0..=MAX_AGING_DEPTH);
        let aging_enabled = rng.gen_bool(0.5);
        let survival = Interval::random(rng);
        let birth = Interval::random(rng);
        let shape = NeighbourhoodShape::random(rng);

        Self {
            radius,
            aging_depth,
            aging_enabled,
            survival,
            birth,
            shape,
        }
    }

    #[must_use]
    pub const fn radius(&self) -> u8 {
        self.radius
    }

    /// Number of decay stages.
    #[must_use]
    pub const fn aging_depth(&self) -> u8 {
        self.aging_depth
    }

    #[must_use]
    pub const fn aging_enabled(&self) -> bool {
        self.aging_enabled
    }

    /// Live-neighbour counts that keep a live cell alive.
    #[must_use]
    pub const fn survival(&self) -> Interval {
        self.survival
    }

    /// Live-neighbour counts that bring a dead cell to life.
    #[must_use]
    pub const fn birth(&self) -> Interval {
        self.birth
    }

    #[must_use]
    pub const fn shape(&self) -> NeighbourhoodShape {
        self.shape
    }

    /// Do live cells that fail the survival check enter the decay chain?
    ///
    /// Needs aging switched on and at least one decay stage past "alive".
    #[must_use]
    pub const fn ages(&self) -> bool {
        self.aging_enabled && self.aging_depth >= 2
    }

    /// Highest cell state a board bound to this configuration may hold.
    ///
    /// Never below 1, so "alive" is representable even without aging.
    #[must_use]
    pub fn max_state(&self) -> u8 {
        self.aging_depth.max(1)
    }

    /// How many neighbours an interior cell has.
    #[must_use]
    pub fn neighbour_count(&self) -> usize {
        self.shape.neighbour_count(self.radius)
    }

    /// Relative coordinates of every neighbour.
    #[must_use]
    pub fn offsets(&self) -> Vec<(i32, i32)> {
        self.shape.offsets(self.radius)
    }
}

/// Rulestring notation, e.g. `R1,C0,M0,S2..3,B3..3,NM`.
///
/// `C` is the aging depth and `M` is 1 when aging is enabled. Unlike the
/// usual Larger-than-Life notation, `M` is not the middle-cell flag: the
/// centre cell is never counted as its own neighbour.
impl std::fmt::Display for Configuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "R{},C{},M{},S{},B{},{}",
            self.radius,
            self.aging_depth,
            u8::from(self.aging_enabled),
            self.survival,
            self.birth,
            self.shape
        )
    }
}

impl FromStr for Configuration {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        let [r, c, m, survival, birth, shape] = parts.as_slice() else {
            return Err(EngineError::validation(
                "rulestring",
                format!("expected 6 comma-separated fields, got {}", parts.len()),
            ));
        };

        let radius = parse_prefixed(r, 'R', "radius")?;
        let aging_depth = parse_prefixed(c, 'C', "decayStates")?;
        let aging_enabled = match parse_prefixed::<u8>(m, 'M', "agingEnabled")? {
            0 => false,
            1 => true,
            other => {
                return Err(EngineError::validation(
                    "agingEnabled",
                    format!("must be 0 or 1, got {other}"),
                ))
            }
        };
        let survival = parse_range(survival, 'S', "survivalInterval")?;
        let birth = parse_range(birth, 'B', "birthInterval")?;
        let shape = shape.parse()?;

        Self::new(radius, aging_depth, aging_enabled, survival, birth, shape)
    }
}

fn strip_tag<'a>(token: &'a str, tag: char, field: &'static str) -> Result<&'a str> {
    token
        .strip_prefix(tag)
        .ok_or_else(|| EngineError::validation(field, format!("expected {tag}<value>, got {token:?}")))
}

fn parse_prefixed<T: FromStr>(token: &str, tag: char, field: &'static str) -> Result<T> {
    let value = strip_tag(token, tag, field)?;
    value
        .parse()
        .map_err(|_| EngineError::validation(field, format!("not a valid number: {value:?}")))
}

fn parse_range(token: &str, tag: char, field: &'static str) -> Result<(u16, u16)> {
    let body = strip_tag(token, tag, field)?;
    let (min, max) = body
        .split_once("..")
        .ok_or_else(|| EngineError::validation(field, format!("expected min..max, got {body:?}")))?;
    let parse = |v: &str| {
        v.parse::<u16>()
            .map_err(|_| EngineError::validation(field, format!("not a valid count: {v:?}")))
    };
    Ok((parse(min)?, parse(max)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn conways() -> Configuration {
        Configuration::new(1, 0, false, (2, 3), (3, 3), NeighbourhoodShape::Moore).unwrap()
    }

    #[test]
    fn test_new_accessors() {
        let config = conways();
        assert_eq!(config.radius(), 1);
        assert_eq!(config.aging_depth(), 0);
        assert!(!config.aging_enabled());
        assert_eq!(config.survival(), Interval::new(2, 3).unwrap());
        assert_eq!(config.birth(), Interval::new(3, 3).unwrap());
        assert_eq!(config.shape(), NeighbourhoodShape::Moore);
    }

    #[test]
    fn test_new_rejects_radius() {
        for radius in [0, 11, u8::MAX] {
            let err = Configuration::new(radius, 0, false, (2, 3), (3, 3), NeighbourhoodShape::Moore)
                .unwrap_err();
            assert!(matches!(err, EngineError::Validation { field: "radius", .. }));
        }
    }

    #[test]
    fn test_new_rejects_aging_depth() {
        let err = Configuration::new(1, 26, true, (2, 3), (3, 3), NeighbourhoodShape::Moore)
            .unwrap_err();
        assert!(matches!(err, EngineError::Validation { field: "decayStates", .. }));
        assert!(Configuration::new(1, 25, true, (2, 3), (3, 3), NeighbourhoodShape::Moore).is_ok());
    }

    #[test]
    fn test_new_rejects_reversed_intervals() {
        let err = Configuration::new(1, 0, false, (3, 2), (3, 3), NeighbourhoodShape::Moore)
            .unwrap_err();
        assert!(matches!(err, EngineError::Validation { field: "survivalInterval", .. }));

        let err = Configuration::new(1, 0, false, (2, 3), (4, 3), NeighbourhoodShape::Moore)
            .unwrap_err();
        assert!(matches!(err, EngineError::Validation { field: "birthInterval", .. }));
    }

    #[test]
    fn test_ages_and_max_state() {
        let shape = NeighbourhoodShape::Moore;
        let no_aging = Configuration::new(1, 5, false, (2, 3), (3, 3), shape).unwrap();
        assert!(!no_aging.ages());
        assert_eq!(no_aging.max_state(), 5);

        let shallow = Configuration::new(1, 1, true, (2, 3), (3, 3), shape).unwrap();
        assert!(!shallow.ages());
        assert_eq!(shallow.max_state(), 1);

        let aging = Configuration::new(1, 2, true, (2, 3), (3, 3), shape).unwrap();
        assert!(aging.ages());

        assert_eq!(conways().max_state(), 1);
    }

    #[test]
    fn test_neighbour_count() {
        assert_eq!(conways().neighbour_count(), 8);
        let diamond =
            Configuration::new(3, 0, false, (0, 1), (1, 1), NeighbourhoodShape::VonNeumann).unwrap();
        assert_eq!(diamond.neighbour_count(), 24);
        assert_eq!(diamond.offsets().len(), 24);
    }

    #[test]
    fn test_randomize_with_seed_is_reproducible() {
        assert_eq!(Configuration::randomize(Some(42)), Configuration::randomize(Some(42)));
    }

    #[test]
    fn test_randomize_passes_validation() {
        let mut rng = EngineRng::new(99);
        for _ in 0..500 {
            let c = Configuration::generate(&mut rng);
            let rebuilt = Configuration::new(
                c.radius(),
                c.aging_depth(),
                c.aging_enabled(),
                c.survival().into(),
                c.birth().into(),
                c.shape(),
            );
            assert_eq!(rebuilt, Ok(c));
        }
    }

    #[test]
    fn test_display() {
        let config =
            Configuration::new(5, 3, true, (34, 58), (34, 45), NeighbourhoodShape::VonNeumann)
                .unwrap();
        assert_eq!(config.to_string(), "R5,C3,M1,S34..58,B34..45,NN");
    }

    #[test]
    fn test_rulestring_round_trip() {
        let config =
            Configuration::new(7, 12, true, (0, 65535), (10, 20), NeighbourhoodShape::Moore)
                .unwrap();
        assert_eq!(config.to_string().parse::<Configuration>(), Ok(config));
    }

    #[test]
    fn test_rulestring_errors() {
        assert!(matches!(
            "R1,C0,M0,S2..3,B3..3".parse::<Configuration>(),
            Err(EngineError::Validation { field: "rulestring", .. })
        ));
        assert!(matches!(
            "R1,C0,M2,S2..3,B3..3,NM".parse::<Configuration>(),
            Err(EngineError::Validation { field: "agingEnabled", .. })
        ));
        assert!(matches!(
            "R1,C0,M0,S3..2,B3..3,NM".parse::<Configuration>(),
            Err(EngineError::Validation { field: "survivalInterval", .. })
        ));
        assert!(matches!(
            "R1,C0,M0,S2-3,B3..3,NM".parse::<Configuration>(),
            Err(EngineError::Validation { field: "survivalInterval", .. })
        ));
        assert!(matches!(
            "X1,C0,M0,S2..3,B3..3,NM".parse::<Configuration>(),
            Err(EngineError::Validation { field: "radius", .. })
        ));
        assert!(matches!(
            "R1,C0,M0,S2..3,B3..3,NX".parse::<Configuration>(),
            Err(EngineError::Parse { .. })
        ));
    }
}
