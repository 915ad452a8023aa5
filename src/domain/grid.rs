use rand::Rng;

use super::Cell;
use crate::error::GridError;

/// Grid is one fixed-size generation of the automaton.
/// Cells are stored row-major and addressed as `(row, col)`.
/// A grid is never resized; edits return a new grid instead of mutating.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a grid with every cell dead
    pub fn empty(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![Cell::Dead; rows * cols],
        }
    }

    /// Random grid where each cell is alive with `alive_probability`
    pub fn random(rows: usize, cols: usize, alive_probability: f64) -> Self {
        Self::random_with(rows, cols, alive_probability, &mut rand::rng())
    }

    /// Random grid drawing from the given generator, one draw per cell.
    /// A cell is alive when its uniform draw exceeds `1 - alive_probability`.
    pub fn random_with<R: Rng>(
        rows: usize,
        cols: usize,
        alive_probability: f64,
        rng: &mut R,
    ) -> Self {
        let threshold = 1.0 - alive_probability;
        let cells = (0..rows * cols)
            .map(|_| Cell::from(rng.random::<f64>() > threshold))
            .collect();

        Self { rows, cols, cells }
    }

    /// Build a grid whose only live cells are the listed coordinates
    pub fn from_live_cells(
        rows: usize,
        cols: usize,
        live: impl IntoIterator<Item = (isize, isize)>,
    ) -> Result<Self, GridError> {
        let mut grid = Self::empty(rows, cols);
        for (row, col) in live {
            let idx = grid.checked_index(row, col)?;
            grid.cells[idx] = Cell::Alive;
        }
        Ok(grid)
    }

    /// Get grid dimensions as `(rows, cols)`
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Convert 2D coordinates to 1D index
    const fn get_index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Index of a signed coordinate, rejecting anything off the grid
    fn checked_index(&self, row: isize, col: isize) -> Result<usize, GridError> {
        let in_bounds = usize::try_from(row)
            .ok()
            .zip(usize::try_from(col).ok())
            .filter(|&(r, c)| r < self.rows && c < self.cols);

        match in_bounds {
            Some((r, c)) => Ok(self.get_index(r, c)),
            None => Err(GridError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            }),
        }
    }

    /// Fail with `OutOfBounds` unless `(row, col)` is on the grid
    pub fn check_bounds(&self, row: isize, col: isize) -> Result<(), GridError> {
        self.checked_index(row, col).map(|_| ())
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        (row < self.rows && col < self.cols).then(|| self.cells[self.get_index(row, col)])
    }

    /// Cell value as 0 or 1; positions off the grid read as dead
    pub fn value(&self, row: isize, col: isize) -> u8 {
        self.checked_index(row, col)
            .map_or(0, |idx| self.cells[idx].value())
    }

    /// New grid with `(row, col)` flipped; `self` is left untouched
    pub fn toggle(&self, row: isize, col: isize) -> Result<Self, GridError> {
        let idx = self.checked_index(row, col)?;
        let mut next = self.clone();
        next.cells[idx] = next.cells[idx].toggle();
        Ok(next)
    }

    /// New grid with `(row, col)` forced alive
    pub fn with_alive(&self, row: isize, col: isize) -> Result<Self, GridError> {
        let idx = self.checked_index(row, col)?;
        let mut next = self.clone();
        next.cells[idx] = Cell::Alive;
        Ok(next)
    }

    /// Build a grid of the same size from a per-cell function
    pub(crate) fn from_fn(rows: usize, cols: usize, f: impl Fn(usize, usize) -> Cell) -> Self {
        let cells = (0..rows)
            .flat_map(|row| (0..cols).map(move |col| (row, col)))
            .map(|(row, col)| f(row, col))
            .collect();

        Self { rows, cols, cells }
    }

    /// Iterate over all cells with their positions, row-major
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, &cell)| (idx / self.cols, idx % self.cols, cell))
    }

    /// Coordinates of every live cell, row-major
    pub fn live_cells(&self) -> Vec<(usize, usize)> {
        self.iter_cells()
            .filter(|(_, _, cell)| cell.is_alive())
            .map(|(row, col, _)| (row, col))
            .collect()
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_empty_grid_is_all_dead() {
        let grid = Grid::empty(4, 7);
        assert_eq!(grid.dimensions(), (4, 7));
        assert_eq!(grid.population(), 0);
        assert!(grid.iter_cells().all(|(_, _, c)| c == Cell::Dead));
    }

    #[test]
    fn test_toggle_is_involution() {
        let mut rng = StdRng::seed_from_u64(7);
        let grid = Grid::random_with(6, 6, 0.3, &mut rng);
        for (row, col) in [(0, 0), (5, 5), (2, 3)] {
            let once = grid.toggle(row, col).unwrap();
            assert_ne!(once, grid);
            assert_eq!(once.toggle(row, col).unwrap(), grid);
        }
    }

    #[test]
    fn test_toggle_leaves_original_untouched() {
        let grid = Grid::empty(3, 3);
        let toggled = grid.toggle(1, 2).unwrap();
        assert_eq!(grid.population(), 0);
        assert_eq!(toggled.get(1, 2), Some(Cell::Alive));
        assert_eq!(toggled.population(), 1);
    }

    #[test]
    fn test_toggle_out_of_bounds() {
        let grid = Grid::empty(5, 4);
        assert_eq!(
            grid.toggle(-1, 0),
            Err(GridError::OutOfBounds { row: -1, col: 0, rows: 5, cols: 4 })
        );
        assert!(matches!(grid.toggle(5, 0), Err(GridError::OutOfBounds { .. })));
        assert!(matches!(grid.toggle(0, 4), Err(GridError::OutOfBounds { .. })));
        assert!(matches!(grid.toggle(0, -3), Err(GridError::OutOfBounds { .. })));
    }

    #[test]
    fn test_value_reads_off_grid_as_dead() {
        let grid = Grid::from_live_cells(2, 2, [(0, 0), (1, 1)]).unwrap();
        assert_eq!(grid.value(0, 0), 1);
        assert_eq!(grid.value(0, 1), 0);
        assert_eq!(grid.value(-1, -1), 0);
        assert_eq!(grid.value(2, 0), 0);
    }

    #[test]
    fn test_from_live_cells_rejects_out_of_range() {
        assert!(Grid::from_live_cells(3, 3, [(1, 1), (3, 1)]).is_err());
    }

    #[test]
    fn test_random_probability_extremes() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(Grid::random_with(10, 10, 0.0, &mut rng).population(), 0);
    }

    #[test]
    fn test_random_density_is_roughly_thirty_percent() {
        let mut rng = StdRng::seed_from_u64(42);
        let grid = Grid::random_with(100, 100, 0.3, &mut rng);
        let density = grid.population() as f64 / 10_000.0;
        assert!((0.25..0.35).contains(&density), "density {density}");
    }

    #[test]
    fn test_random_is_reproducible_with_seed() {
        let a = Grid::random_with(20, 20, 0.3, &mut StdRng::seed_from_u64(9));
        let b = Grid::random_with(20, 20, 0.3, &mut StdRng::seed_from_u64(9));
        assert_eq!(a, b);
    }

    #[test]
    fn test_iter_cells_is_row_major() {
        let grid = Grid::from_live_cells(2, 3, [(1, 0)]).unwrap();
        let coords: Vec<_> = grid.iter_cells().map(|(r, c, _)| (r, c)).collect();
        assert_eq!(coords, vec![(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]);
        assert_eq!(grid.live_cells(), vec![(1, 0)]);
    }
}
