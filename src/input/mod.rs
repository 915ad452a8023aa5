use macroquad::prelude::*;
use tracing::debug;

use crate::application::Simulation;
use crate::domain::{Pattern, presets};
use crate::ui::{self, Button};

/// Toggle the clicked cell; clicks off the grid are ignored
pub fn handle_cell_click(sim: &mut Simulation, mouse_pos: (f32, f32)) {
    if is_mouse_button_pressed(MouseButton::Left) {
        toggle_at(sim, mouse_pos);
    }
}

/// Toggle the cell under a screen position; returns whether one was toggled
fn toggle_at(sim: &mut Simulation, mouse_pos: (f32, f32)) -> bool {
    // Clicks on the button bar or margins never reach the simulation
    let (row, col) = ui::cell_at(mouse_pos.0, mouse_pos.1);
    if sim.grid().check_bounds(row, col).is_err() {
        return false;
    }
    match sim.toggle_cell(row, col) {
        Ok(()) => true,
        Err(err) => {
            debug!(%err, "click did not toggle a cell");
            false
        }
    }
}

/// Process keyboard input; returns the pattern a digit key stamped, if any
pub fn process_keyboard_input(sim: &mut Simulation) -> Option<Pattern> {
    type KeyAction = (KeyCode, fn(&mut Simulation));

    let actions: [KeyAction; 3] = [
        (KeyCode::Space, Simulation::toggle_running),
        (KeyCode::C, Simulation::clear),
        (KeyCode::R, Simulation::randomize),
    ];

    actions
        .iter()
        .filter(|(key, _)| is_key_pressed(*key))
        .for_each(|(_, action)| action(sim));

    let pattern_keys = [KeyCode::Key1, KeyCode::Key2, KeyCode::Key3, KeyCode::Key4, KeyCode::Key5, KeyCode::Key6];
    let pressed = pattern_keys
        .iter()
        .zip(presets::all_patterns())
        .find(|(key, _)| is_key_pressed(**key))
        .map(|(_, pattern)| pattern)?;

    match pressed.place_centered(&sim.grid()).and_then(|grid| sim.load(grid)) {
        Ok(()) => {
            debug!(pattern = pressed.name, "stamped pattern");
            Some(pressed)
        }
        Err(err) => {
            debug!(pattern = pressed.name, %err, "pattern does not fit");
            None
        }
    }
}

/// Process button clicks
pub fn process_button_clicks(sim: &mut Simulation, buttons: &[Button], mouse_pos: (f32, f32)) {
    let clicked = buttons
        .iter()
        .position(|btn| btn.is_clicked(mouse_pos));

    match clicked {
        Some(ui::START_STOP) => sim.toggle_running(),
        Some(ui::CLEAR) => sim.clear(),
        Some(ui::RANDOM) => sim.randomize(),
        _ => {}
    }
}
