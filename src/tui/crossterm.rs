//! crossterm events to `Key`s and mouse samples.
//!
//! A terminal reports whole cells, so pixel coordinates are synthesized as
//! `cell * cell_pixels`. The pointer can be neither hidden nor moved; both
//! requests are tracked so widgets see a consistent state.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use crate::core::event::{InputBackend, Key, KeyCode, KeyModifiers, MouseState};

/// Converts a key event. Release events carry no key.
pub fn into_key(event: crossterm::event::KeyEvent) -> Option<Key> {
    if event.kind == crossterm::event::KeyEventKind::Release {
        return None;
    }
    let mut modifiers = into_key_modifiers(event.modifiers);
    let code = into_key_code(event.code, &mut modifiers);
    Some(Key::new(code, modifiers))
}

fn into_key_modifiers(mods: crossterm::event::KeyModifiers) -> KeyModifiers {
    let mut out = KeyModifiers::NONE;
    if mods.contains(crossterm::event::KeyModifiers::SHIFT) {
        out |= KeyModifiers::SHIFT;
    }
    if mods.contains(crossterm::event::KeyModifiers::CONTROL) {
        out |= KeyModifiers::CONTROL;
    }
    if mods.contains(crossterm::event::KeyModifiers::ALT) {
        out |= KeyModifiers::ALT;
    }
    if mods.contains(crossterm::event::KeyModifiers::SUPER) {
        out |= KeyModifiers::SUPER;
    }
    out
}

fn into_key_code(code: crossterm::event::KeyCode, modifiers: &mut KeyModifiers) -> KeyCode {
    match code {
        crossterm::event::KeyCode::Char(ch) => KeyCode::Char(ch),
        crossterm::event::KeyCode::Enter => KeyCode::Enter,
        crossterm::event::KeyCode::Tab => KeyCode::Tab,
        crossterm::event::KeyCode::BackTab => KeyCode::BackTab,
        crossterm::event::KeyCode::Esc => KeyCode::Esc,
        crossterm::event::KeyCode::Backspace => KeyCode::Backspace,
        crossterm::event::KeyCode::Delete => KeyCode::Delete,
        crossterm::event::KeyCode::Insert => KeyCode::Insert,
        crossterm::event::KeyCode::Up => KeyCode::Up,
        crossterm::event::KeyCode::Down => KeyCode::Down,
        crossterm::event::KeyCode::Left => KeyCode::Left,
        crossterm::event::KeyCode::Right => KeyCode::Right,
        crossterm::event::KeyCode::Home => KeyCode::Home,
        crossterm::event::KeyCode::End => KeyCode::End,
        crossterm::event::KeyCode::PageUp => KeyCode::PageUp,
        crossterm::event::KeyCode::PageDown => KeyCode::PageDown,
        crossterm::event::KeyCode::F(n) => KeyCode::F(n),
        crossterm::event::KeyCode::Null => {
            *modifiers |= KeyModifiers::CONTROL;
            KeyCode::Char(' ')
        }
        _ => KeyCode::Unknown,
    }
}

/// `InputBackend` fed from crossterm events.
#[derive(Debug)]
pub struct CrosstermInput {
    state: MouseState,
    /// Position reported by the previous `mouse()` sample, for deltas.
    last: (i32, i32, i32, i32),
    cell_pixels: i32,
    cursor_visible: bool,
    keys: VecDeque<Key>,
    frame_start: Instant,
    frame_secs: f32,
}

impl CrosstermInput {
    pub fn new(cell_pixels: i32) -> Self {
        Self {
            state: MouseState::default(),
            last: (0, 0, 0, 0),
            cell_pixels: cell_pixels.max(1),
            cursor_visible: true,
            keys: VecDeque::new(),
            frame_start: Instant::now(),
            frame_secs: 0.0,
        }
    }

    /// Folds one terminal event into the pending state.
    pub fn handle_event(&mut self, event: crossterm::event::Event) {
        match event {
            crossterm::event::Event::Key(key) => {
                if let Some(key) = into_key(key) {
                    self.keys.push_back(key);
                }
            }
            crossterm::event::Event::Mouse(mouse) => self.handle_mouse(mouse),
            _ => {}
        }
    }

    fn handle_mouse(&mut self, event: crossterm::event::MouseEvent) {
        use crossterm::event::{MouseButton, MouseEventKind};

        self.set_cell(i32::from(event.column), i32::from(event.row));
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => self.state.lbutton = true,
            MouseEventKind::Up(MouseButton::Left) => {
                self.state.lbutton = false;
                self.state.lbutton_pressed = true;
            }
            MouseEventKind::Down(MouseButton::Right) => self.state.rbutton = true,
            MouseEventKind::Up(MouseButton::Right) => {
                self.state.rbutton = false;
                self.state.rbutton_pressed = true;
            }
            MouseEventKind::Down(MouseButton::Middle) => self.state.mbutton = true,
            MouseEventKind::Up(MouseButton::Middle) => {
                self.state.mbutton = false;
                self.state.mbutton_pressed = true;
            }
            MouseEventKind::ScrollUp => self.state.wheel_up = true,
            MouseEventKind::ScrollDown => self.state.wheel_down = true,
            _ => {}
        }
    }

    fn set_cell(&mut self, cx: i32, cy: i32) {
        self.state.cx = cx;
        self.state.cy = cy;
        self.state.x = cx * self.cell_pixels;
        self.state.y = cy * self.cell_pixels;
    }

    /// The next queued key, or `Key::NONE`. One key is consumed per frame.
    pub fn next_key(&mut self) -> Key {
        self.keys.pop_front().unwrap_or(Key::NONE)
    }

    /// Marks the start of a frame and records how long the previous one took.
    pub fn begin_frame(&mut self) {
        let now = Instant::now();
        self.frame_secs = now
            .saturating_duration_since(self.frame_start)
            .min(Duration::from_secs(1))
            .as_secs_f32();
        self.frame_start = now;
    }
}

impl InputBackend for CrosstermInput {
    fn mouse(&mut self) -> MouseState {
        let (x, y, cx, cy) = self.last;
        self.state.dx = self.state.x - x;
        self.state.dy = self.state.y - y;
        self.state.dcx = self.state.cx - cx;
        self.state.dcy = self.state.cy - cy;
        self.last = (self.state.x, self.state.y, self.state.cx, self.state.cy);

        let sample = self.state;
        self.state.lbutton_pressed = false;
        self.state.rbutton_pressed = false;
        self.state.mbutton_pressed = false;
        self.state.wheel_up = false;
        self.state.wheel_down = false;
        sample
    }

    fn is_cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    fn show_cursor(&mut self, visible: bool) {
        self.cursor_visible = visible;
    }

    fn warp_cursor(&mut self, x: i32, y: i32) {
        let cx = x.div_euclid(self.cell_pixels);
        let cy = y.div_euclid(self.cell_pixels);
        self.set_cell(cx, cy);
        self.state.x = x;
        self.state.y = y;
    }

    fn last_frame_secs(&self) -> f32 {
        self.frame_secs
    }
}

#[cfg(test)]
#[path = "../../tests/unit/tui/crossterm.rs"]
mod tests;
