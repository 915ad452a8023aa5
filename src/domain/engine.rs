use super::{ClassicRule, Grid, neighbors::count_live_neighbors};

/// Advance `grid` by one generation.
/// Every neighbor count reads the borrowed input; the result is a fresh grid,
/// so no cell ever sees a neighbor that has already advanced.
pub fn step(grid: &Grid) -> Grid {
    let (rows, cols) = grid.dimensions();

    Grid::from_fn(rows, cols, |row, col| {
        let current = grid.get(row, col).unwrap_or_default();
        let neighbors = count_live_neighbors(grid, row, col);
        ClassicRule::next_state(current, neighbors)
    })
}
