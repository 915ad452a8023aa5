use super::Cell;

/// Conway's Game of Life (B3/S23), the only rule this engine runs
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClassicRule;

impl ClassicRule {
    /// Next state of a cell given its live neighbor count:
    /// 1. Fewer than 2 or more than 3 neighbors: dies or stays dead
    /// 2. Dead with exactly 3 neighbors: born
    /// 3. Otherwise unchanged
    pub const fn next_state(current: Cell, neighbors: u8) -> Cell {
        match (current, neighbors) {
            (_, n) if n < 2 || n > 3 => Cell::Dead,
            (Cell::Dead, 3) => Cell::Alive,
            (cell, _) => cell,
        }
    }
}
