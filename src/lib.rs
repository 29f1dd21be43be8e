//! # ltl-engine
//!
//! A Larger-than-Life cellular automaton engine.
//!
//! Larger-than-Life generalizes Conway's Game of Life: the neighbourhood
//! radius, the neighbourhood shape, the birth and survival intervals and the
//! number of decay stages a dying cell passes through are all chosen at
//! runtime.
//!
//! ## Design Principles
//!
//! 1. **Pure computation**: The engine never touches pixels, events or
//!    files. It works on integers and coordinates only.
//!
//! 2. **Valid by construction**: A `Configuration` that violates its
//!    domain cannot exist. Every entry point validates.
//!
//! 3. **No global state**: Callers own their configurations and boards and
//!    pass them around explicitly.
//!
//! ## Modules
//!
//! - `core`: Error type and deterministic RNG
//! - `neighbourhood`: Moore and von Neumann offset geometry
//! - `config`: Validated rulesets and their stored record form
//! - `board`: The cell grid and the generation step
//! - `python`: PyO3 bindings (feature `python`)

pub mod core;
pub mod neighbourhood;
pub mod config;
pub mod board;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{EngineError, EngineRng, Result};

pub use crate::neighbourhood::NeighbourhoodShape;

pub use crate::config::{ConfigRecord, Configuration, Interval};

pub use crate::board::{Board, Cell};
