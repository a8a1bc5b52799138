use macroquad::prelude::*;

use crate::application::SimulationController;
use crate::domain::Grid;
use crate::ui::{panel_x, Button, Dropdown, PANEL_WIDTH};

/// Draw the board: one filled square per cell plus a gridline stroke
/// around every cell, alive or dead.
pub fn draw_grid(grid: &Grid, cell_px: f32) {
    clear_background(WHITE);

    let alive_color = BLACK;
    let dead_color = WHITE;
    let line_color = Color::from_rgba(204, 204, 204, 255);

    for (x, y, cell) in grid.iter_cells() {
        let screen_x = x as f32 * cell_px;
        let screen_y = y as f32 * cell_px;

        let fill = if cell.is_alive() { alive_color } else { dead_color };
        draw_rectangle(screen_x, screen_y, cell_px, cell_px, fill);
        draw_rectangle_lines(screen_x, screen_y, cell_px, cell_px, 1.0, line_color);
    }
}

/// Draw control panel background
fn draw_panel_background() {
    draw_rectangle(
        panel_x(),
        0.0,
        PANEL_WIDTH,
        screen_height(),
        Color::from_rgba(30, 30, 30, 255),
    );
}

/// Draw the control panel with buttons, dropdowns, and the simulation
/// readouts.
pub fn draw_controls(
    sim: &SimulationController,
    buttons: &[Button],
    dropdowns: &[Dropdown],
    mouse_pos: (f32, f32),
) {
    draw_panel_background();

    buttons.iter().for_each(|btn| btn.draw(mouse_pos));

    let px = panel_x();

    // Define all readouts declaratively
    let labels = [
        ("Turn:", px, 385.0, 16.0, WHITE),
        (
            &format!("{}", sim.turn()),
            px,
            408.0,
            20.0,
            Color::from_rgba(0, 255, 150, 255),
        ),
        ("Status:", px, 435.0, 16.0, WHITE),
        (
            if sim.is_running() { "Running" } else { "Paused" },
            px,
            452.0,
            16.0,
            if sim.is_running() {
                Color::from_rgba(0, 255, 0, 255)
            } else {
                Color::from_rgba(255, 165, 0, 255)
            },
        ),
        ("Speed:", px, 480.0, 16.0, WHITE),
        (
            &format!("{} ms/turn", sim.interval_ms()),
            px,
            497.0,
            14.0,
            Color::from_rgba(180, 180, 180, 255),
        ),
    ];

    labels.iter().for_each(|(text, x, y, size, color)| {
        draw_text(text, *x, *y, *size, *color);
    });

    let controls = [
        ("Controls:", px, 525.0, 14.0, WHITE),
        ("Click: Toggle cell", px, 540.0, 12.0, GRAY),
        ("Space: Start/Pause", px, 553.0, 12.0, GRAY),
        ("R: Randomize", px, 566.0, 12.0, GRAY),
        ("C: Reset", px, 579.0, 12.0, GRAY),
        ("Up/Down: Speed", px, 592.0, 12.0, GRAY),
    ];

    controls.iter().for_each(|(text, x, y, size, color)| {
        draw_text(text, *x, *y, *size, *color);
    });

    // Draw dropdowns LAST so their open menus appear on top of everything;
    // closed ones first, then the open one over them
    let mut open_dropdown: Option<&Dropdown> = None;
    for dropdown in dropdowns.iter() {
        if dropdown.is_open() {
            open_dropdown = Some(dropdown);
        } else {
            dropdown.draw(mouse_pos);
        }
    }
    if let Some(dd) = open_dropdown {
        dd.draw(mouse_pos);
    }
}
