mod cell;
mod grid;
mod rules;
mod engine;
mod patterns;
pub mod neighbors;

pub use cell::Cell;
pub use grid::Grid;
pub use rules::ClassicRule;
pub use engine::step;
pub use neighbors::{NEIGHBOR_OFFSETS, count_live_neighbors};
pub use patterns::{Pattern, presets};
