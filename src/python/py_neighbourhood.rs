//! Neighbourhood bindings for Python.

use pyo3::prelude::*;

use crate::neighbourhood::NeighbourhoodShape;

/// Python wrapper for NeighbourhoodShape.
#[pyclass(name = "Neighbourhood")]
#[derive(Clone, Debug)]
pub struct PyNeighbourhood(pub NeighbourhoodShape);

#[pymethods]
impl PyNeighbourhood {
    /// Parse a two-letter code: "NM" (Moore) or "NN" (von Neumann).
    ///
    /// Raises TypeError for any other code.
    #[new]
    fn new(code: &str) -> PyResult<Self> {
        Ok(Self(code.parse()?))
    }

    #[classattr]
    #[pyo3(name = "MOORE")]
    fn moore() -> Self {
        Self(NeighbourhoodShape::Moore)
    }

    #[classattr]
    #[pyo3(name = "VON_NEUMANN")]
    fn von_neumann() -> Self {
        Self(NeighbourhoodShape::VonNeumann)
    }

    /// The two-letter code.
    #[getter]
    fn code(&self) -> &'static str {
        self.0.code()
    }

    /// Relative (dx, dy) coordinates of every neighbour at `radius`.
    fn offsets(&self, radius: u8) -> Vec<(i32, i32)> {
        self.0.offsets(radius)
    }

    fn __str__(&self) -> &'static str {
        self.0.code()
    }

    fn __repr__(&self) -> String {
        format!("Neighbourhood({:?})", self.0.code())
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __hash__(&self) -> u64 {
        match self.0 {
            NeighbourhoodShape::Moore => 0,
            NeighbourhoodShape::VonNeumann => 1,
        }
    }
}
