use std::ops::{BitOr, BitOrAssign};

use crate::ui::core::geom::Pos;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// Reserved "no key this frame" value.
    None,
    Char(char),
    Enter,
    Tab,
    BackTab,
    Esc,
    Backspace,
    Delete,
    Insert,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    F(u8),
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct KeyModifiers(u8);

impl KeyModifiers {
    pub const NONE: Self = Self(0);
    pub const SHIFT: Self = Self(1 << 0);
    pub const CONTROL: Self = Self(1 << 1);
    pub const ALT: Self = Self(1 << 2);
    pub const SUPER: Self = Self(1 << 3);

    pub fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for KeyModifiers {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for KeyModifiers {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

/// One key event per frame; `Key::NONE` when nothing was pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Key {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl Key {
    pub const NONE: Key = Key {
        code: KeyCode::None,
        modifiers: KeyModifiers::NONE,
    };

    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub fn simple(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    pub fn char(ch: char) -> Self {
        Self::simple(KeyCode::Char(ch))
    }

    pub fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }

    pub fn is_none(&self) -> bool {
        self.code == KeyCode::None
    }

    /// The character a text field should insert for this key, if any.
    pub fn printable(&self) -> Option<char> {
        if self.modifiers.contains(KeyModifiers::CONTROL)
            || self.modifiers.contains(KeyModifiers::ALT)
        {
            return None;
        }
        match self.code {
            KeyCode::Char(ch) if !ch.is_control() => Some(ch),
            _ => None,
        }
    }
}

impl Default for Key {
    fn default() -> Self {
        Self::NONE
    }
}

/// One sample of the pointer, taken once per frame.
///
/// `x`/`y` are absolute pixel coordinates, `cx`/`cy` the grid cell under the
/// pointer. The `*_pressed` flags are click edges: they are set on the sample in
/// which a press was released.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MouseState {
    pub x: i32,
    pub y: i32,
    pub dx: i32,
    pub dy: i32,
    pub cx: i32,
    pub cy: i32,
    pub dcx: i32,
    pub dcy: i32,
    pub lbutton: bool,
    pub rbutton: bool,
    pub mbutton: bool,
    pub lbutton_pressed: bool,
    pub rbutton_pressed: bool,
    pub mbutton_pressed: bool,
    pub wheel_up: bool,
    pub wheel_down: bool,
}

impl MouseState {
    pub fn cell(&self) -> Pos {
        Pos::new(self.cx, self.cy)
    }
}

/// The host's input backend. The `Gui` samples it once per update pass and
/// may hide, show or warp the pointer while a widget captures a drag.
pub trait InputBackend {
    fn mouse(&mut self) -> MouseState;

    fn is_cursor_visible(&self) -> bool;

    fn show_cursor(&mut self, visible: bool);

    /// Move the pointer to an absolute pixel position.
    fn warp_cursor(&mut self, x: i32, y: i32);

    /// Duration of the previous frame, in seconds.
    fn last_frame_secs(&self) -> f32;
}

#[cfg(test)]
#[path = "../../tests/unit/core/event.rs"]
mod tests;
