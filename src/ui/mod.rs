mod button;

pub use button::Button;

use macroquad::prelude::Color;

use crate::domain::Pattern;

pub const CELL_SIZE: f32 = 20.0;
pub const TOP_BAR_HEIGHT: f32 = 60.0;
pub const GRID_MARGIN: f32 = 10.0;
pub const BUTTON_WIDTH: f32 = 120.0;
pub const BUTTON_HEIGHT: f32 = 40.0;

pub const ALIVE_COLOR: Color = Color::new(0.98, 0.5, 0.45, 1.0); // salmon
pub const DEAD_COLOR: Color = Color::new(1.0, 1.0, 1.0, 1.0);
pub const BORDER_COLOR: Color = Color::new(0.0, 0.0, 0.0, 1.0);

/// Indices into the button row, matching `create_buttons` order
pub const START_STOP: usize = 0;
pub const CLEAR: usize = 1;
pub const RANDOM: usize = 2;

/// Screen position of the grid's top-left corner
pub const fn grid_origin() -> (f32, f32) {
    (GRID_MARGIN, TOP_BAR_HEIGHT + GRID_MARGIN)
}

/// Window size that fits a `rows x cols` grid below the button bar
pub fn window_size(rows: usize, cols: usize) -> (i32, i32) {
    let (ox, oy) = grid_origin();
    let width = (ox * 2.0 + cols as f32 * CELL_SIZE).max(BUTTON_WIDTH * 3.0 + GRID_MARGIN * 4.0);
    let height = oy + GRID_MARGIN + rows as f32 * CELL_SIZE;
    (width as i32, height as i32)
}

/// Map a screen position to a `(row, col)` cell coordinate.
/// The result may lie outside the grid; callers check bounds.
pub fn cell_at(screen_x: f32, screen_y: f32) -> (isize, isize) {
    let (ox, oy) = grid_origin();
    let row = ((screen_y - oy) / CELL_SIZE).floor() as isize;
    let col = ((screen_x - ox) / CELL_SIZE).floor() as isize;
    (row, col)
}

/// Screen position of a cell's top-left corner
pub fn cell_origin(row: usize, col: usize) -> (f32, f32) {
    let (ox, oy) = grid_origin();
    (ox + col as f32 * CELL_SIZE, oy + row as f32 * CELL_SIZE)
}

/// Status-line caption for a stamped pattern
pub fn pattern_caption(pattern: &Pattern) -> String {
    format!("{}: {}", pattern.name, pattern.description)
}

/// Create the button row; the first button is labelled by run state
pub fn create_buttons(running: bool) -> Vec<Button> {
    let y = (TOP_BAR_HEIGHT - BUTTON_HEIGHT) / 2.0;
    let x = |i: usize| GRID_MARGIN + i as f32 * (BUTTON_WIDTH + GRID_MARGIN);
    vec![
        Button::new(x(START_STOP), y, BUTTON_WIDTH, BUTTON_HEIGHT, if running { "Stop" } else { "Start" }),
        Button::new(x(CLEAR), y, BUTTON_WIDTH, BUTTON_HEIGHT, "Clear"),
        Button::new(x(RANDOM), y, BUTTON_WIDTH, BUTTON_HEIGHT, "Random"),
    ]
}
