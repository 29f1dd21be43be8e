//! Generation step.

use tracing::trace;

use super::{Board, Cell, ALIVE, DEAD, FIRST_DECAY};
use crate::core::Result;

impl Board {
    /// Advance the whole grid by one generation.
    ///
    /// Every cell is evaluated against the pre-step grid; the results are
    /// written into the scratch buffer, which then becomes the live grid.
    pub fn step(&mut self) {
        let mut next = std::mem::take(&mut self.scratch);
        for (index, cell) in next.iter_mut().enumerate() {
            *cell = self.next_state(index % self.width, index / self.width);
        }
        std::mem::swap(&mut self.cells, &mut next);
        self.scratch = next;
        self.generation += 1;

        trace!(
            generation = self.generation,
            population = self.population(),
            "stepped board"
        );
    }

    /// Advance `generations` times.
    pub fn step_n(&mut self, generations: usize) {
        for _ in 0..generations {
            self.step();
        }
    }

    /// Number of fully alive neighbours of `(x, y)`, the count used by [`Board::step`].
    ///
    /// Neighbours off the board are skipped, so edge cells have fewer.
    pub fn live_neighbours(&self, x: usize, y: usize) -> Result<u32> {
        self.index(x, y)?;
        Ok(self.count_live(x, y))
    }

    fn count_live(&self, x: usize, y: usize) -> u32 {
        let mut count = 0;
        for &(dx, dy) in &self.offsets {
            let Some(nx) = x.checked_add_signed(dx as isize) else {
                continue;
            };
            let Some(ny) = y.checked_add_signed(dy as isize) else {
                continue;
            };
            if nx < self.width && ny < self.height && self.cells[ny * self.width + nx] == ALIVE {
                count += 1;
            }
        }
        count
    }

    /// State of `(x, y)` in the next generation.
    fn next_state(&self, x: usize, y: usize) -> Cell {
        let state = self.cells[y * self.width + x];
        match state {
            DEAD => {
                if self.config.birth().contains(self.count_live(x, y)) {
                    ALIVE
                } else {
                    DEAD
                }
            }
            ALIVE => {
                if self.config.survival().contains(self.count_live(x, y)) {
                    ALIVE
                } else if self.config.ages() {
                    FIRST_DECAY
                } else {
                    DEAD
                }
            }
            decaying if decaying >= self.config.aging_depth() => DEAD,
            decaying => decaying + 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Configuration;
    use crate::neighbourhood::NeighbourhoodShape;

    fn conways() -> Configuration {
        Configuration::new(1, 0, false, (2, 3), (3, 3), NeighbourhoodShape::Moore).unwrap()
    }

    fn board_from(rows: &[&[Cell]], config: Configuration) -> Board {
        let mut board = Board::new(rows[0].len(), rows.len(), config).unwrap();
        for (y, row) in rows.iter().enumerate() {
            for (x, &state) in row.iter().enumerate() {
                board.set_cell(x, y, state).unwrap();
            }
        }
        board
    }

    #[test]
    fn test_live_neighbours_interior_and_corner() {
        let board = board_from(&[&[1, 1, 1], &[1, 1, 1], &[1, 1, 1]], conways());
        assert_eq!(board.live_neighbours(1, 1), Ok(8));
        assert_eq!(board.live_neighbours(0, 0), Ok(3));
        assert_eq!(board.live_neighbours(2, 0), Ok(3));
        assert_eq!(board.live_neighbours(1, 0), Ok(5));
        assert!(board.live_neighbours(3, 0).is_err());
    }

    #[test]
    fn test_live_neighbours_von_neumann() {
        let config =
            Configuration::new(1, 0, false, (2, 3), (3, 3), NeighbourhoodShape::VonNeumann).unwrap();
        let board = board_from(&[&[1, 1, 1], &[1, 1, 1], &[1, 1, 1]], config);
        assert_eq!(board.live_neighbours(1, 1), Ok(4));
        assert_eq!(board.live_neighbours(0, 0), Ok(2));
    }

    #[test]
    fn test_live_neighbours_skip_decaying() {
        let config =
            Configuration::new(1, 25, true, (2, 3), (3, 3), NeighbourhoodShape::Moore).unwrap();
        let board = board_from(&[&[0, 0, 0], &[1, 2, 3], &[4, 0, 0]], config);
        assert_eq!(board.live_neighbours(1, 1), Ok(1));
        assert_eq!(board.live_neighbours(0, 0), Ok(1));
    }

    #[test]
    fn test_live_neighbours_bigger_radius() {
        let config =
            Configuration::new(2, 0, false, (2, 3), (3, 3), NeighbourhoodShape::Moore).unwrap();
        let mut board = Board::new(7, 7, config).unwrap();
        for y in 0..7 {
            for x in 0..7 {
                board.set_cell(x, y, 1).unwrap();
            }
        }
        assert_eq!(board.live_neighbours(3, 3), Ok(24));
        assert_eq!(board.live_neighbours(0, 0), Ok(8));
    }

    #[test]
    fn test_step_blinker() {
        let mut board = board_from(&[&[0, 1, 0], &[0, 1, 0], &[0, 1, 0]], conways());
        board.step();
        assert_eq!(board.to_rows(), vec![vec![0, 0, 0], vec![1, 1, 1], vec![0, 0, 0]]);
        board.step();
        assert_eq!(board.to_rows(), vec![vec![0, 1, 0], vec![0, 1, 0], vec![0, 1, 0]]);
        assert_eq!(board.generation(), 2);
    }

    #[test]
    fn test_step_all_alive() {
        let config =
            Configuration::new(1, 0, false, (2, 100), (0, 2), NeighbourhoodShape::Moore).unwrap();
        let mut board = Board::new(10, 10, config).unwrap();
        board.step();
        assert_eq!(board.population(), 100);
    }

    #[test]
    fn test_step_decaying_die_without_aging() {
        let config =
            Configuration::new(1, 2, false, (100, 123), (9, 9), NeighbourhoodShape::Moore).unwrap();
        let mut board = Board::new(10, 10, config).unwrap();
        for y in 0..10 {
            for x in 0..10 {
                board.set_cell(x, y, 2).unwrap();
            }
        }
        board.step();
        assert!(board.cells().iter().all(|&c| c == DEAD));
    }

    #[test]
    fn test_step_aging() {
        let config =
            Configuration::new(1, 3, true, (2, 3), (3, 3), NeighbourhoodShape::Moore).unwrap();
        let mut board = board_from(&[&[1, 1, 1], &[1, 1, 1], &[1, 1, 1]], config);
        board.step();
        assert_eq!(board.to_rows(), vec![vec![1, 2, 1], vec![2, 2, 2], vec![1, 2, 1]]);
    }

    #[test]
    fn test_step_reuses_buffers() {
        let mut board = board_from(&[&[0, 1, 0], &[0, 1, 0], &[0, 1, 0]], conways());
        let before = (board.cells.as_ptr(), board.scratch.as_ptr());
        board.step();
        assert_eq!(board.cells.as_ptr(), before.1);
        assert_eq!(board.scratch.as_ptr(), before.0);
    }

    #[test]
    fn test_step_n() {
        let mut board = board_from(&[&[0, 1, 0], &[0, 1, 0], &[0, 1, 0]], conways());
        let start = board.to_rows();
        board.step_n(4);
        assert_eq!(board.to_rows(), start);
        assert_eq!(board.generation(), 4);
    }
}
