use super::Grid;

/// Relative `(row, col)` offsets of the Moore neighborhood
pub const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (0, 1),
    (0, -1),
    (1, -1),
    (-1, 1),
    (1, 1),
    (-1, -1),
    (1, 0),
    (-1, 0),
];

/// Count live neighbors of `(row, col)` in `grid`.
/// Offsets that fall off the grid count as dead; edges never wrap.
pub fn count_live_neighbors(grid: &Grid, row: usize, col: usize) -> u8 {
    let (row, col) = (row as isize, col as isize);

    NEIGHBOR_OFFSETS
        .iter()
        .map(|&(dr, dc)| grid.value(row + dr, col + dc))
        .sum()
}
