//! Python bindings for the ltl-engine automaton.
//!
//! Built with the `python` feature. The UI shell owns the event loop and
//! drawing; it only needs to build configurations, edit cells and step.
//!
//! # Quick Start
//!
//! ```python
//! import ltl_engine as ltl
//!
//! config = ltl.Configuration(1, 0, 0, (2, 3), (3, 3), ltl.Neighbourhood("NM"))
//! board = ltl.Board(70, 70, config)
//! board.randomize(seed=42)
//! board.step()
//! frame = board.cells()  # numpy uint8 array, shape (70, 70)
//! ```

use pyo3::exceptions::{PyIndexError, PyTypeError, PyValueError};
use pyo3::prelude::*;

use crate::core::EngineError;

mod py_board;
mod py_config;
mod py_neighbourhood;

pub use py_board::*;
pub use py_config::*;
pub use py_neighbourhood::*;

impl From<EngineError> for PyErr {
    fn from(err: EngineError) -> Self {
        match &err {
            EngineError::Parse { .. } => PyTypeError::new_err(err.to_string()),
            EngineError::OutOfBounds { .. } => PyIndexError::new_err(err.to_string()),
            EngineError::Validation { .. } | EngineError::InvalidState { .. } => {
                PyValueError::new_err(err.to_string())
            }
        }
    }
}

/// Install a global tracing subscriber writing to stderr.
///
/// `filter` uses `EnvFilter` syntax, e.g. "ltl_engine=debug". Returns False
/// if a subscriber was already installed.
#[pyfunction]
#[pyo3(signature = (filter = "info"))]
fn init_logging(filter: &str) -> PyResult<bool> {
    use tracing_subscriber::layer::SubscriberExt;

    let filter = tracing_subscriber::EnvFilter::try_new(filter)
        .map_err(|e| PyValueError::new_err(format!("{}", e)))?;
    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(filter);
    Ok(tracing::subscriber::set_global_default(subscriber).is_ok())
}

/// ltl_engine: a Larger-than-Life cellular automaton engine.
///
/// This module provides:
/// - Neighbourhood shapes and their offsets
/// - Validated configurations and their stored record form
/// - Boards with cell editing and generation stepping
#[pymodule]
fn ltl_engine(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyNeighbourhood>()?;
    m.add_class::<PyConfiguration>()?;
    m.add_class::<PyBoard>()?;

    m.add_function(wrap_pyfunction!(init_logging, m)?)?;

    Ok(())
}
