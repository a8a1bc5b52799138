use macroquad::prelude::*;

use life_canvas::{
    input, rendering,
    ui::{self, Dropdown, GRID_SIZES, PATTERNS},
    SimulationController,
};

fn window_conf() -> Conf {
    Conf {
        window_title: "Conway's Game of Life".to_owned(),
        window_width: 780,
        window_height: 600,
        window_resizable: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let default_size = GRID_SIZES[ui::DEFAULT_SIZE_INDEX].0;
    let mut sim = SimulationController::new(default_size)
        .expect("grid size menu only lists positive sizes");

    info!(
        "starting paused on a {}x{} board at {} ms/turn",
        default_size, default_size, sim.interval_ms()
    );

    // Dropdowns stack at the top of the side panel
    let px = ui::panel_x();
    let size_items: Vec<String> = GRID_SIZES.iter().map(|(_, name)| name.to_string()).collect();
    let mut size_dropdown = Dropdown::new(px, 20.0, ui::PANEL_WIDTH, "Grid Size", size_items);
    size_dropdown.set_selected(ui::DEFAULT_SIZE_INDEX);

    let pattern_items: Vec<String> = PATTERNS.iter().map(|(_, label)| label.to_string()).collect();
    let mut pattern_dropdown = Dropdown::new(px, 70.0, ui::PANEL_WIDTH, "Pattern", pattern_items);

    loop {
        let mouse_pos = mouse_position();

        // Update UI positions for responsiveness
        let px = ui::panel_x();
        size_dropdown.set_position(px, 20.0);
        pattern_dropdown.set_position(px, 70.0);

        // Recreate buttons so the toggle button's label tracks the run state
        let buttons = ui::create_buttons(sim.is_running());

        // Update dropdowns (handle clicks) - only one can be open at a time
        if size_dropdown.update(mouse_pos) {
            let size = GRID_SIZES[size_dropdown.selected()].0;
            if let Err(err) = sim.resize(size) {
                error!("grid resize rejected: {err}");
            }
        }
        if size_dropdown.is_open() {
            pattern_dropdown.close();
        }

        if pattern_dropdown.update(mouse_pos) {
            let name = PATTERNS[pattern_dropdown.selected()].0;
            if !name.is_empty() {
                sim.load_pattern(name);
                // Snap back to None so the same pattern can be picked again
                pattern_dropdown.set_selected(0);
            }
        }
        if pattern_dropdown.is_open() {
            size_dropdown.close();
        }

        sim = input::process_button_clicks(sim, &buttons, mouse_pos);
        sim = input::process_keyboard_input(sim);

        let cell_px = ui::cell_pixel_size(sim.grid().size());
        input::handle_mouse_toggle(&mut sim, cell_px, mouse_pos);

        // Update game state
        sim = sim.tick(get_frame_time());

        rendering::draw_grid(sim.grid(), cell_px);

        let dropdowns: &[Dropdown] = &[size_dropdown.clone(), pattern_dropdown.clone()];
        rendering::draw_controls(&sim, &buttons, dropdowns, mouse_pos);

        next_frame().await;
    }
}
