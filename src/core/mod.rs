//! Core engine types: errors and RNG.
//!
//! Everything here is shared by the neighbourhood, configuration and board
//! modules and has no knowledge of the automaton rules.

pub mod error;
pub mod rng;

pub use error::{EngineError, Result};
pub use rng::EngineRng;
