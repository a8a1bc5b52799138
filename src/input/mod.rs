use macroquad::prelude::*;

use crate::application::SimulationController;
use crate::ui::{grid_area_width, Button, MAX_INTERVAL_MS, MIN_INTERVAL_MS};

/// Toggle the cell under the cursor on a left click inside the grid area.
/// Works while the simulation is running; the flip simply joins the next
/// generation's input.
pub fn handle_mouse_toggle(
    sim: &mut SimulationController,
    cell_px: f32,
    mouse_pos: (f32, f32),
) {
    if !is_mouse_button_pressed(MouseButton::Left) || mouse_pos.0 >= grid_area_width() {
        return;
    }

    // Floor-divide the pixel position to a cell. Clicks in the dead margin
    // past the last row or column clamp onto the edge, so the conversion
    // can never leave the grid.
    let max_index = sim.grid().size() - 1;
    let x = ((mouse_pos.0 / cell_px) as usize).min(max_index);
    let y = ((mouse_pos.1 / cell_px) as usize).min(max_index);

    if let Err(err) = sim.toggle_cell_at(x, y) {
        error!("cell toggle rejected: {err}");
    }
}

/// Process keyboard input functionally
pub fn process_keyboard_input(sim: SimulationController) -> SimulationController {
    type KeyAction = (KeyCode, fn(SimulationController) -> SimulationController);

    let actions: [KeyAction; 5] = [
        (KeyCode::Space, SimulationController::toggle_running),
        (KeyCode::C, SimulationController::reset),
        (KeyCode::R, SimulationController::randomize),
        (KeyCode::Up, |s| adjust_speed(s, -50)),
        (KeyCode::Down, |s| adjust_speed(s, 50)),
    ];

    actions.iter().fold(sim, |s, (key, action)| {
        if is_key_pressed(*key) { action(s) } else { s }
    })
}

/// Process button clicks functionally
pub fn process_button_clicks(
    sim: SimulationController,
    buttons: &[Button],
    mouse_pos: (f32, f32),
) -> SimulationController {
    buttons
        .iter()
        .enumerate()
        .fold(sim, |s, (idx, btn)| {
            if !btn.is_clicked(mouse_pos) {
                return s;
            }
            match idx {
                0 => s.toggle_running(),
                1 => s.reset(),
                2 => s.randomize(),
                3 => adjust_speed(s, 50),
                4 => adjust_speed(s, -50),
                _ => s,
            }
        })
}

/// Step the tick interval by `delta_ms`, clamped to the supported range.
/// Slower is a positive delta (more milliseconds per turn).
fn adjust_speed(sim: SimulationController, delta_ms: i32) -> SimulationController {
    let interval = (sim.interval_ms() as i32 + delta_ms)
        .clamp(MIN_INTERVAL_MS as i32, MAX_INTERVAL_MS as i32);
    sim.set_speed(interval as u32)
}
