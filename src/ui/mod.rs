mod button;
mod dropdown;

pub use button::Button;
pub use dropdown::Dropdown;

// UI constants - functions wherever the value tracks the window size
use macroquad::prelude::{screen_height, screen_width};

pub const PANEL_WIDTH: f32 = 180.0;
pub const BUTTON_HEIGHT: f32 = 40.0;

/// Bounds for the tick interval in milliseconds per turn; the speed
/// controls step within this range and never hand the controller a value
/// outside it.
pub const MIN_INTERVAL_MS: u32 = 50;
pub const MAX_INTERVAL_MS: u32 = 1000;

/// Get the X position where the panel starts (right side)
pub fn panel_x() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Get the width of the grid area
pub fn grid_area_width() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Get the height of the grid area
pub fn grid_area_height() -> f32 {
    screen_height()
}

/// Side of one cell in pixels, sized so the whole square board fits the
/// grid area at the current window size.
pub fn cell_pixel_size(grid_size: usize) -> f32 {
    grid_area_width().min(grid_area_height()) / grid_size as f32
}

/// Grid size options
pub const GRID_SIZES: &[(usize, &str)] = &[
    (20, "20×20"),
    (40, "40×40"),
    (60, "60×60"),
    (100, "100×100"),
];

/// Index into GRID_SIZES the simulator starts on (40×40).
pub const DEFAULT_SIZE_INDEX: usize = 1;

/// Pattern menu as (library name, menu label) pairs. The leading empty
/// entry is the no-selection state the dropdown snaps back to after a
/// load, so the same pattern can be loaded twice in a row.
pub const PATTERNS: &[(&str, &str)] = &[
    ("", "None"),
    ("glider", "Glider"),
    ("pulsar", "Pulsar"),
    ("gosper", "Glider Gun"),
];

/// Create UI buttons with standard layout
/// The first button doubles as start and pause, so its label follows the
/// run state.
pub fn create_buttons(running: bool) -> Vec<Button> {
    let px = panel_x();
    let toggle_label = if running { "Pause" } else { "Start" };
    vec![
        Button::new(px, 120.0, PANEL_WIDTH, BUTTON_HEIGHT, toggle_label),
        Button::new(px, 170.0, PANEL_WIDTH, BUTTON_HEIGHT, "Reset"),
        Button::new(px, 220.0, PANEL_WIDTH, BUTTON_HEIGHT, "Random"),
        Button::new(px, 270.0, PANEL_WIDTH, BUTTON_HEIGHT, "Slower"),
        Button::new(px, 320.0, PANEL_WIDTH, BUTTON_HEIGHT, "Faster"),
    ]
}
