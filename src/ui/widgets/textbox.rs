//! Single-line text field with caret, horizontal scroll and blink.
//!
//! Positions (`caret`, `offset`, `max_len`) count chars; every char is drawn
//! in one cell.

use super::base::{UpdateCtx, WidgetBase};
use super::{TextCallback, WidgetId};
use crate::core::event::{Key, KeyCode};
use crate::ui::core::geom::{Pos, Rect};
use crate::ui::core::surface::{Alignment, BlendMode, Surface};
use crate::ui::core::text;

pub struct TextBox {
    pub(crate) label: String,
    pub(crate) text: String,
    /// Caret is drawn while positive.
    pub(crate) blink: f32,
    pub(crate) caret: usize,
    pub(crate) offset: usize,
    pub(crate) box_x: i32,
    pub(crate) box_w: i32,
    pub(crate) max_len: usize,
    pub(crate) insert: bool,
    pub(crate) callback: Option<TextCallback>,
}

impl TextBox {
    /// Returns the field and the widget's total width (label plus box).
    pub(crate) fn new(label: &str, value: &str, box_w: i32, max_len: usize) -> (Self, i32) {
        let box_x = if label.is_empty() {
            0
        } else {
            text::width(label) + 1
        };
        let field = Self {
            label: label.to_string(),
            text: truncate_chars(value, max_len),
            blink: 0.0,
            caret: 0,
            offset: 0,
            box_x,
            box_w: box_w.max(0),
            max_len,
            insert: false,
            callback: None,
        };
        (field, box_w.max(0) + box_x)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn caret(&self) -> usize {
        self.caret
    }

    pub fn scroll_offset(&self) -> usize {
        self.offset
    }

    pub fn is_insert_mode(&self) -> bool {
        self.insert
    }

    pub fn max_len(&self) -> usize {
        self.max_len
    }

    fn len(&self) -> usize {
        self.text.chars().count()
    }

    /// Replace the contents, truncated to `max_len`. The caret is pulled back
    /// inside the new text.
    pub(crate) fn set_text(&mut self, value: &str) {
        self.text = truncate_chars(value, self.max_len);
        self.caret = self.caret.min(self.len());
        self.scroll_to_caret();
    }

    pub(crate) fn set_label(&mut self, label: &str, base: &mut WidgetBase) {
        let old_box_x = self.box_x;
        self.label = label.to_string();
        self.box_x = if label.is_empty() {
            0
        } else {
            text::width(label) + 1
        };
        base.rect.w += self.box_x - old_box_x;
    }

    /// One frame of editing. Only called while this field holds keyboard focus.
    pub(crate) fn handle_key(&mut self, id: WidgetId, key: Key, elapsed: f32, delay: f32) {
        self.blink -= elapsed;
        if self.blink < -delay {
            self.blink += 2.0 * delay;
        }

        if let Some(ch) = key.printable() {
            if self.type_char(ch) {
                self.notify(id);
            }
            self.blink = delay;
            return;
        }

        let edited = match key.code {
            KeyCode::Left => {
                self.caret = self.caret.saturating_sub(1);
                false
            }
            KeyCode::Right => {
                if self.caret < self.len() {
                    self.caret += 1;
                }
                false
            }
            KeyCode::Home => {
                self.caret = 0;
                false
            }
            KeyCode::End => {
                self.caret = self.len();
                false
            }
            KeyCode::Backspace if self.caret > 0 => {
                self.caret -= 1;
                remove_char(&mut self.text, self.caret);
                true
            }
            KeyCode::Delete if self.caret < self.len() => {
                remove_char(&mut self.text, self.caret);
                true
            }
            KeyCode::Backspace | KeyCode::Delete => false,
            KeyCode::Insert => {
                self.insert = !self.insert;
                false
            }
            _ => return,
        };

        self.scroll_to_caret();
        if edited {
            self.notify(id);
        }
        self.blink = delay;
    }

    fn type_char(&mut self, ch: char) -> bool {
        let len = self.len();
        if self.insert && self.caret < len {
            if len >= self.max_len {
                return false;
            }
            insert_char(&mut self.text, self.caret, ch);
        } else {
            if self.caret >= self.max_len {
                return false;
            }
            replace_char(&mut self.text, self.caret, ch);
        }
        if self.caret < self.max_len {
            self.caret += 1;
        }
        self.scroll_to_caret();
        true
    }

    /// Keeps `offset <= caret < offset + box_w`, moving the window as little
    /// as possible.
    fn scroll_to_caret(&mut self) {
        let visible = self.box_w.max(1) as usize;
        if self.caret < self.offset {
            self.offset = self.caret;
        } else if self.caret >= self.offset + visible {
            self.offset = self.caret + 1 - visible;
        }
    }

    fn notify(&mut self, id: WidgetId) {
        if let Some(callback) = self.callback.as_mut() {
            callback(id, &self.text);
        }
    }

    /// Clicking the box (not the label) takes keyboard focus.
    pub(crate) fn click(&mut self, id: WidgetId, base: &WidgetBase, ctx: &mut UpdateCtx<'_>) {
        let cx = ctx.state.mouse.cx;
        let left = base.rect.x + self.box_x;
        if cx >= left && cx < left + self.box_w {
            ctx.state.set_keyboard_focus(Some(id));
        }
    }

    /// Draws the field into the first `width` columns of the widget.
    pub(crate) fn render(
        &self,
        base: &WidgetBase,
        width: i32,
        focused: bool,
        surface: &mut dyn Surface,
    ) {
        let colors = base.colors;
        let r = base.rect;
        surface.set_default_background(colors.back);
        surface.set_default_foreground(colors.fore);
        surface.rect(Rect::new(r.x, r.y, width, r.h), true, BlendMode::Set);
        if !self.label.is_empty() {
            surface.print(base.pos(), BlendMode::None, Alignment::Left, &self.label);
        }

        let (box_bg, box_fg) = if focused {
            (colors.fore_focus, colors.back_focus)
        } else {
            (colors.fore, colors.back)
        };
        surface.set_default_background(box_bg);
        surface.set_default_foreground(box_fg);
        let box_left = r.x + self.box_x;
        surface.rect(Rect::new(box_left, r.y, self.box_w, r.h), false, BlendMode::Set);

        let visible: String = self
            .text
            .chars()
            .skip(self.offset)
            .take(self.box_w.max(0) as usize)
            .collect();
        if !visible.is_empty() {
            surface.print(
                Pos::new(box_left, r.y),
                BlendMode::None,
                Alignment::Left,
                &visible,
            );
        }

        if focused && self.blink > 0.0 {
            let pos = Pos::new(box_left + (self.caret - self.offset) as i32, r.y);
            if self.insert {
                surface.set_cell_colors(pos, colors.back, colors.fore);
            } else {
                surface.set_cell_colors(pos, colors.fore, colors.back);
            }
        }
    }
}

fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

fn byte_index(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}

fn insert_char(s: &mut String, at: usize, ch: char) {
    let idx = byte_index(s, at);
    s.insert(idx, ch);
}

/// Overwrites the char at `at`, padding with spaces when `at` is past the end.
fn replace_char(s: &mut String, at: usize, ch: char) {
    let len = s.chars().count();
    if at >= len {
        s.extend(std::iter::repeat(' ').take(at - len));
        s.push(ch);
        return;
    }
    let idx = byte_index(s, at);
    s.remove(idx);
    s.insert(idx, ch);
}

fn remove_char(s: &mut String, at: usize) {
    let idx = byte_index(s, at);
    if idx < s.len() {
        s.remove(idx);
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/widgets/textbox.rs"]
mod tests;
