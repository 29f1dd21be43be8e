//! The cell grid and its generation step.
//!
//! ## Cell states
//!
//! A cell is a plain `u8` counter:
//! - `0`: dead
//! - `1`: alive (the only state that counts as a live neighbour)
//! - `2..=aging_depth`: decaying, advancing one stage per generation and
//!   dying after the last stage
//!
//! ## Stepping
//!
//! `Board::step` reads only the pre-step grid and writes into a scratch
//! buffer that is swapped in afterwards. The scratch buffer lives as long as
//! the board, so stepping never allocates.
//!
//! ```
//! use ltl_engine::{Board, Configuration, NeighbourhoodShape};
//!
//! let life = Configuration::new(1, 0, false, (2, 3), (3, 3), NeighbourhoodShape::Moore)?;
//! let mut board = Board::new(3, 3, life)?;
//! for y in 0..3 {
//!     board.cell_up(1, y)?;
//! }
//! board.step();
//! assert_eq!(board.get_cell(0, 1)?, 1);
//! assert_eq!(board.get_cell(1, 0)?, 0);
//! # Ok::<(), ltl_engine::EngineError>(())
//! ```

mod grid;
mod step;

pub use grid::Board;

/// State of a single cell.
pub type Cell = u8;

/// The dead state.
pub const DEAD: Cell = 0;
/// The fully alive state.
pub const ALIVE: Cell = 1;
/// First decay stage entered by a live cell that fails the survival check.
pub const FIRST_DECAY: Cell = 2;
