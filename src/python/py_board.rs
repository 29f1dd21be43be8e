//! Board bindings for Python.

use numpy::{PyArray1, PyArray2, PyArrayMethods};
use pyo3::prelude::*;

use crate::board::{Board, Cell};

use super::py_config::PyConfiguration;

/// Python wrapper for Board.
#[pyclass(name = "Board")]
#[derive(Clone, Debug)]
pub struct PyBoard(pub Board);

#[pymethods]
impl PyBoard {
    /// Create an all-dead board.
    ///
    /// # Arguments
    /// - width, height: board dimensions, both positive
    /// - configuration: the ruleset the board evolves under
    #[new]
    fn new(width: usize, height: usize, configuration: &PyConfiguration) -> PyResult<Self> {
        Ok(Self(Board::new(width, height, configuration.0)?))
    }

    #[getter]
    fn width(&self) -> usize {
        self.0.width()
    }

    #[getter]
    fn height(&self) -> usize {
        self.0.height()
    }

    #[getter]
    fn configuration(&self) -> PyConfiguration {
        PyConfiguration(*self.0.configuration())
    }

    /// Steps taken since creation or the last reset.
    #[getter]
    fn generation(&self) -> u64 {
        self.0.generation()
    }

    /// Number of fully alive cells.
    #[getter]
    fn population(&self) -> usize {
        self.0.population()
    }

    /// Raises IndexError off the board.
    fn get_cell(&self, x: usize, y: usize) -> PyResult<Cell> {
        Ok(self.0.get_cell(x, y)?)
    }

    /// Raises IndexError off the board and ValueError for an unsupported state.
    fn set_cell(&mut self, x: usize, y: usize, state: Cell) -> PyResult<()> {
        Ok(self.0.set_cell(x, y, state)?)
    }

    fn cell_up(&mut self, x: usize, y: usize) -> PyResult<()> {
        Ok(self.0.cell_up(x, y)?)
    }

    fn cell_down(&mut self, x: usize, y: usize) -> PyResult<()> {
        Ok(self.0.cell_down(x, y)?)
    }

    fn live_neighbours(&self, x: usize, y: usize) -> PyResult<u32> {
        Ok(self.0.live_neighbours(x, y)?)
    }

    #[pyo3(signature = (seed = None))]
    fn randomize(&mut self, seed: Option<u64>) {
        self.0.randomize(seed);
    }

    fn reset(&mut self) {
        self.0.reset();
    }

    /// Advance one generation.
    fn step(&mut self) {
        self.0.step();
    }

    /// Advance `generations` generations.
    fn step_n(&mut self, generations: usize) {
        self.0.step_n(generations);
    }

    /// Grid as a list of rows.
    fn rows(&self) -> Vec<Vec<Cell>> {
        self.0.to_rows()
    }

    /// Grid as a [height, width] uint8 numpy array.
    fn cells<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyArray2<Cell>>> {
        PyArray1::from_vec_bound(py, self.0.cells().to_vec())
            .reshape([self.0.height(), self.0.width()])
    }

    fn __repr__(&self) -> String {
        format!(
            "Board({}x{}, generation={}, rules={})",
            self.0.width(),
            self.0.height(),
            self.0.generation(),
            self.0.configuration()
        )
    }
}
