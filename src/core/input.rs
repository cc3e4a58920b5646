//! Scripted input backend for tests, benchmarks and headless hosts.

use super::event::{InputBackend, MouseState};

#[derive(Debug, Clone)]
pub struct HeadlessInput {
    state: MouseState,
    cell_pixels: i32,
    cursor_visible: bool,
    frame_secs: f32,
    warps: Vec<(i32, i32)>,
}

impl HeadlessInput {
    pub fn new(cell_pixels: i32) -> Self {
        Self {
            state: MouseState::default(),
            cell_pixels: cell_pixels.max(1),
            cursor_visible: true,
            frame_secs: 1.0 / 60.0,
            warps: Vec::new(),
        }
    }

    pub fn set_frame_secs(&mut self, secs: f32) {
        self.frame_secs = secs;
    }

    /// Point at the top-left pixel of cell `(cx, cy)`.
    pub fn move_to(&mut self, cx: i32, cy: i32) {
        self.move_pixels(cx * self.cell_pixels, cy * self.cell_pixels);
    }

    pub fn move_pixels(&mut self, x: i32, y: i32) {
        let (cx, cy) = (
            x.div_euclid(self.cell_pixels),
            y.div_euclid(self.cell_pixels),
        );
        self.state.dx = x - self.state.x;
        self.state.dy = y - self.state.y;
        self.state.dcx = cx - self.state.cx;
        self.state.dcy = cy - self.state.cy;
        self.state.x = x;
        self.state.y = y;
        self.state.cx = cx;
        self.state.cy = cy;
    }

    pub fn press_left(&mut self) {
        self.state.lbutton = true;
    }

    /// Release the left button; the next sample carries the click edge.
    pub fn release_left(&mut self) {
        self.state.lbutton = false;
        self.state.lbutton_pressed = true;
    }

    pub fn press_right(&mut self) {
        self.state.rbutton = true;
    }

    pub fn release_right(&mut self) {
        self.state.rbutton = false;
        self.state.rbutton_pressed = true;
    }

    pub fn scroll(&mut self, up: bool) {
        if up {
            self.state.wheel_up = true;
        } else {
            self.state.wheel_down = true;
        }
    }

    pub fn warps(&self) -> &[(i32, i32)] {
        &self.warps
    }

    pub fn peek(&self) -> &MouseState {
        &self.state
    }
}

impl Default for HeadlessInput {
    fn default() -> Self {
        Self::new(8)
    }
}

impl InputBackend for HeadlessInput {
    fn mouse(&mut self) -> MouseState {
        let sample = self.state;
        // Edges and deltas are one-shot.
        self.state.lbutton_pressed = false;
        self.state.rbutton_pressed = false;
        self.state.mbutton_pressed = false;
        self.state.wheel_up = false;
        self.state.wheel_down = false;
        self.state.dx = 0;
        self.state.dy = 0;
        self.state.dcx = 0;
        self.state.dcy = 0;
        sample
    }

    fn is_cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    fn show_cursor(&mut self, visible: bool) {
        self.cursor_visible = visible;
    }

    fn warp_cursor(&mut self, x: i32, y: i32) {
        self.warps.push((x, y));
        self.move_pixels(x, y);
    }

    fn last_frame_secs(&self) -> f32 {
        self.frame_secs
    }
}

#[cfg(test)]
#[path = "../../tests/unit/core/input.rs"]
mod tests;
