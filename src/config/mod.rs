//! Ruleset configuration.
//!
//! A [`Configuration`] fixes everything about how a board evolves: radius,
//! neighbourhood shape, survival and birth intervals, and the aging depth.
//! It is validated once at construction and never mutated afterwards, so
//! any number of boards can hold a copy without coordination.
//!
//! Configurations reach the engine three ways:
//! - [`Configuration::new`] with explicit values,
//! - [`Configuration::randomize`] for a uniformly random ruleset,
//! - a stored [`ConfigRecord`] (or rulestring) that is validated on the way in.

mod interval;
mod record;
mod rules;

pub use interval::Interval;
pub use record::ConfigRecord;
pub use rules::{Configuration, MAX_AGING_DEPTH, MAX_RADIUS, MIN_RADIUS};
