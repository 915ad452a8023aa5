use macroquad::prelude::*;

use crate::application::Simulation;
use crate::domain::{Grid, Pattern};
use crate::ui::{
    ALIVE_COLOR, BORDER_COLOR, Button, CELL_SIZE, DEAD_COLOR, GRID_MARGIN, TOP_BAR_HEIGHT,
    cell_origin, pattern_caption,
};

/// Draw every cell as a bordered box, salmon when alive
pub fn draw_grid(grid: &Grid) {
    for (row, col, cell) in grid.iter_cells() {
        let (x, y) = cell_origin(row, col);
        let color = if cell.is_alive() { ALIVE_COLOR } else { DEAD_COLOR };
        draw_rectangle(x, y, CELL_SIZE, CELL_SIZE, color);
        draw_rectangle_lines(x, y, CELL_SIZE, CELL_SIZE, 1.0, BORDER_COLOR);
    }
}

/// Helper to draw text labels
fn draw_text_label(text: &str, x: f32, y: f32, size: f32, color: Color) {
    draw_text(text, x, y, size, color);
}

/// Draw the top bar: buttons, title and status line
pub fn draw_controls(
    sim: &Simulation,
    grid: &Grid,
    stamped: Option<&Pattern>,
    buttons: &[Button],
    mouse_pos: (f32, f32),
) {
    buttons.iter().for_each(|btn| btn.draw(mouse_pos));

    let title_x = screen_width() - 260.0;
    draw_text_label("The Game of Life", title_x + 2.0, 32.0, 32.0, ALIVE_COLOR);
    draw_text_label("The Game of Life", title_x, 30.0, 32.0, WHITE);

    let status = format!(
        "Gen {} | Pop {} | {}",
        sim.generation(),
        grid.population(),
        if sim.is_running() { "Running" } else { "Stopped" },
    );
    draw_text_label(&status, title_x, TOP_BAR_HEIGHT - GRID_MARGIN + 4.0, 14.0, GRAY);

    if let Some(pattern) = stamped {
        draw_text_label(&pattern_caption(pattern), GRID_MARGIN, TOP_BAR_HEIGHT + 4.0, 14.0, GRAY);
    }
}
