use super::Grid;
use crate::error::GridError;

/// A named seed shape that can be stamped onto a grid
#[derive(Clone, Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub rows: usize,
    pub cols: usize,
    pub cells: Vec<(usize, usize)>, // Relative (row, col) of alive cells
}

impl Pattern {
    /// Create a new pattern from alive cell coordinates
    pub fn new(name: &'static str, description: &'static str, cells: Vec<(usize, usize)>) -> Self {
        let rows = cells.iter().map(|(r, _)| *r).max().map_or(0, |r| r + 1);
        let cols = cells.iter().map(|(_, c)| *c).max().map_or(0, |c| c + 1);
        Self { name, description, rows, cols, cells }
    }

    /// New grid with the pattern's cells set alive, top-left at `(row, col)`.
    /// Fails without touching anything if any cell would land off the grid.
    pub fn place_on(&self, grid: &Grid, row: isize, col: isize) -> Result<Grid, GridError> {
        self.cells.iter().try_fold(grid.clone(), |acc, &(dr, dc)| {
            acc.with_alive(row + dr as isize, col + dc as isize)
        })
    }

    /// Place the pattern so its bounding box is centered on the grid
    pub fn place_centered(&self, grid: &Grid) -> Result<Grid, GridError> {
        let (rows, cols) = grid.dimensions();
        let row = (rows as isize - self.rows as isize) / 2;
        let col = (cols as isize - self.cols as isize) / 2;
        self.place_on(grid, row, col)
    }
}

/// Classic Game of Life patterns library
pub mod presets {
    use super::*;

    /// Blinker - period 2 oscillator, horizontal phase
    pub fn blinker() -> Pattern {
        Pattern::new("Blinker", "Oscillator (period 2)", vec![(0, 0), (0, 1), (0, 2)])
    }

    /// Block - simple still life
    pub fn block() -> Pattern {
        Pattern::new(
            "Block",
            "Still life",
            vec![
                (0, 0), (0, 1),
                (1, 0), (1, 1),
            ],
        )
    }

    /// Glider - simplest spaceship, moves diagonally
    pub fn glider() -> Pattern {
        Pattern::new(
            "Glider",
            "Moves diagonally (period 4)",
            vec![
                (0, 1),
                (1, 2),
                (2, 0), (2, 1), (2, 2),
            ],
        )
    }

    /// Toad - period 2 oscillator
    pub fn toad() -> Pattern {
        Pattern::new(
            "Toad",
            "Oscillator (period 2)",
            vec![
                (0, 1), (0, 2), (0, 3),
                (1, 0), (1, 1), (1, 2),
            ],
        )
    }

    /// Beacon - period 2 oscillator
    pub fn beacon() -> Pattern {
        Pattern::new(
            "Beacon",
            "Oscillator (period 2)",
            vec![
                (0, 0), (0, 1),
                (1, 0),
                (2, 3),
                (3, 2), (3, 3),
            ],
        )
    }

    /// R-pentomino - classic methuselah (stabilizes after 1103 generations)
    pub fn r_pentomino() -> Pattern {
        Pattern::new(
            "R-pentomino",
            "Methuselah - stabilizes at gen 1103",
            vec![
                (0, 1), (0, 2),
                (1, 0), (1, 1),
                (2, 1),
            ],
        )
    }

    /// Get all available patterns
    pub fn all_patterns() -> Vec<Pattern> {
        vec![blinker(), block(), glider(), toad(), beacon(), r_pentomino()]
    }
}
