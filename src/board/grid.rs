//! Board storage and direct cell editing.

use tracing::debug;

use super::{Cell, ALIVE, DEAD};
use crate::config::Configuration;
use crate::core::{EngineError, EngineRng, Result};

/// Fixed-size grid of cell states bound to one [`Configuration`].
///
/// Cells are stored row-major: `(x, y)` lives at `y * width + x`.
#[derive(Clone, Debug)]
pub struct Board {
    pub(super) width: usize,
    pub(super) height: usize,
    pub(super) config: Configuration,
    /// Neighbour offsets for `config`, computed once.
    pub(super) offsets: Vec<(i32, i32)>,
    pub(super) cells: Vec<Cell>,
    /// Next-generation buffer, swapped with `cells` on every step.
    pub(super) scratch: Vec<Cell>,
    pub(super) generation: u64,
}

impl Board {
    /// Create an all-dead `width x height` board.
    ///
    /// # Errors
    ///
    /// [`EngineError::Validation`] if either dimension is zero, or if the
    /// cell buffers cannot be allocated.
    pub fn new(width: usize, height: usize, config: Configuration) -> Result<Self> {
        if width == 0 {
            return Err(EngineError::validation("width", "must be positive"));
        }
        if height == 0 {
            return Err(EngineError::validation("height", "must be positive"));
        }
        let too_large =
            || EngineError::validation("height", format!("{width}x{height} board is too large"));
        let len = width.checked_mul(height).ok_or_else(too_large)?;
        let cells = dead_buffer(len).ok_or_else(too_large)?;
        let scratch = dead_buffer(len).ok_or_else(too_large)?;

        debug!(width, height, rules = %config, "creating board");
        Ok(Self {
            width,
            height,
            offsets: config.offsets(),
            config,
            cells,
            scratch,
            generation: 0,
        })
    }

    /// Create a square board, the layout the UI uses.
    pub fn square(length: usize, config: Configuration) -> Result<Self> {
        Self::new(length, length, config)
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// The ruleset this board evolves under.
    #[must_use]
    pub fn configuration(&self) -> &Configuration {
        &self.config
    }

    /// Number of steps taken since creation or the last [`Board::reset`].
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Get the state of the cell at `(x, y)`.
    pub fn get_cell(&self, x: usize, y: usize) -> Result<Cell> {
        let index = self.index(x, y)?;
        Ok(self.cells[index])
    }

    /// Set the state of the cell at `(x, y)`.
    ///
    /// # Errors
    ///
    /// [`EngineError::OutOfBounds`] for a coordinate off the board and
    /// [`EngineError::InvalidState`] for a state above
    /// [`Configuration::max_state`].
    pub fn set_cell(&mut self, x: usize, y: usize, state: Cell) -> Result<()> {
        let index = self.index(x, y)?;
        let max = self.config.max_state();
        if state > max {
            return Err(EngineError::InvalidState { state, max });
        }
        self.cells[index] = state;
        Ok(())
    }

    /// Bring a dead cell to life. Live and decaying cells are left alone.
    pub fn cell_up(&mut self, x: usize, y: usize) -> Result<()> {
        let index = self.index(x, y)?;
        if self.cells[index] == DEAD {
            self.cells[index] = ALIVE;
        }
        Ok(())
    }

    /// Kill the cell at `(x, y)` whatever its state.
    pub fn cell_down(&mut self, x: usize, y: usize) -> Result<()> {
        let index = self.index(x, y)?;
        self.cells[index] = DEAD;
        Ok(())
    }

    /// Set every cell to dead or alive with equal probability.
    ///
    /// A seed makes the pattern reproducible.
    pub fn randomize(&mut self, seed: Option<u64>) {
        let mut rng = EngineRng::from_seed_or_entropy(seed);
        debug!(seed = rng.seed(), "randomizing board");
        self.randomize_with(&mut rng);
    }

    /// Set every cell to dead or alive with equal probability using `rng`.
    pub fn randomize_with(&mut self, rng: &mut EngineRng) {
        for cell in &mut self.cells {
            *cell = if rng.gen_bool(0.5) { ALIVE } else { DEAD };
        }
    }

    /// Kill every cell and restart the generation counter.
    pub fn reset(&mut self) {
        self.cells.fill(DEAD);
        self.generation = 0;
        debug!(width = self.width, height = self.height, "board reset");
    }

    /// Number of fully alive cells.
    #[must_use]
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&c| c == ALIVE).count()
    }

    /// All cells, row-major.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterate over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.width)
    }

    /// Copy the grid out as one `Vec` per row.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<Cell>> {
        self.rows().map(<[Cell]>::to_vec).collect()
    }

    pub(super) fn index(&self, x: usize, y: usize) -> Result<usize> {
        if x >= self.width || y >= self.height {
            return Err(EngineError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(y * self.width + x)
    }
}

/// All-dead buffer of `len` cells, `None` if the allocator refuses.
fn dead_buffer(len: usize) -> Option<Vec<Cell>> {
    let mut buffer = Vec::new();
    buffer.try_reserve_exact(len).ok()?;
    buffer.resize(len, DEAD);
    Some(buffer)
}
