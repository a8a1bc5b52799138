use macroquad::prelude::*;

const ROW_HEIGHT: f32 = 30.0;

/// Dropdown selector UI component
#[derive(Clone)]
pub struct Dropdown {
    rect: Rect,
    items: Vec<String>,
    selected: usize,
    is_open: bool,
    label: String,
}

impl Dropdown {
    pub fn new(x: f32, y: f32, width: f32, label: impl Into<String>, items: Vec<String>) -> Self {
        Self {
            rect: Rect::new(x, y, width, ROW_HEIGHT),
            items,
            selected: 0,
            is_open: false,
            label: label.into(),
        }
    }

    /// Get currently selected index
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Set selected index
    pub fn set_selected(&mut self, index: usize) {
        if index < self.items.len() {
            self.selected = index;
        }
    }

    /// Check if dropdown is open
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Close the dropdown
    pub fn close(&mut self) {
        self.is_open = false;
    }

    /// Update position for responsive layout
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.rect.x = x;
        self.rect.y = y;
    }

    /// Screen rectangle of one open-menu row.
    fn item_rect(&self, index: usize) -> Rect {
        Rect::new(
            self.rect.x,
            self.rect.y + ROW_HEIGHT * (index as f32 + 1.0),
            self.rect.w,
            ROW_HEIGHT,
        )
    }

    /// Handle interaction and return true if selection changed
    pub fn update(&mut self, mouse_pos: (f32, f32)) -> bool {
        if !is_mouse_button_pressed(MouseButton::Left) {
            return false;
        }
        let mouse = vec2(mouse_pos.0, mouse_pos.1);

        // Clicking the header toggles the menu; never a selection change.
        if self.rect.contains(mouse) {
            self.is_open = !self.is_open;
            return false;
        }

        // Any other click closes an open menu; a click on a row also
        // selects it.
        if self.is_open {
            self.is_open = false;
            for i in 0..self.items.len() {
                if self.item_rect(i).contains(mouse) {
                    let changed = self.selected != i;
                    self.selected = i;
                    return changed;
                }
            }
        }

        false
    }

    /// Draw dropdown without handling interaction (for rendering only)
    pub fn draw(&self, mouse_pos: (f32, f32)) {
        let mouse = vec2(mouse_pos.0, mouse_pos.1);

        draw_text(&self.label, self.rect.x, self.rect.y - 5.0, 14.0, GRAY);

        let header_color = if self.rect.contains(mouse) {
            Color::from_rgba(100, 149, 237, 255)
        } else {
            Color::from_rgba(70, 130, 180, 255)
        };
        draw_rectangle(self.rect.x, self.rect.y, self.rect.w, self.rect.h, header_color);
        draw_rectangle_lines(self.rect.x, self.rect.y, self.rect.w, self.rect.h, 2.0, WHITE);

        draw_text(
            &self.items[self.selected],
            self.rect.x + 5.0,
            self.rect.y + 21.0,
            16.0,
            WHITE,
        );
        draw_text("▼", self.rect.x + self.rect.w - 18.0, self.rect.y + 21.0, 14.0, WHITE);

        if self.is_open {
            // Opaque backdrop so the menu reads over whatever is behind it
            let menu_height = self.items.len() as f32 * ROW_HEIGHT;
            draw_rectangle(
                self.rect.x,
                self.rect.y + ROW_HEIGHT,
                self.rect.w,
                menu_height,
                Color::from_rgba(30, 30, 30, 255),
            );

            for (i, item) in self.items.iter().enumerate() {
                let row = self.item_rect(i);
                let row_color = if row.contains(mouse) {
                    Color::from_rgba(100, 149, 237, 255)
                } else if i == self.selected {
                    Color::from_rgba(50, 100, 150, 255)
                } else {
                    Color::from_rgba(45, 45, 45, 255)
                };

                draw_rectangle(row.x, row.y, row.w, row.h, row_color);
                draw_rectangle_lines(row.x, row.y, row.w, row.h, 1.0, Color::from_rgba(80, 80, 80, 255));
                draw_text(item, row.x + 5.0, row.y + 21.0, 16.0, WHITE);
            }

            draw_rectangle_lines(
                self.rect.x,
                self.rect.y + ROW_HEIGHT,
                self.rect.w,
                menu_height,
                2.0,
                WHITE,
            );
        }
    }
}
