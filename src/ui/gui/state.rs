//! Coordination state shared by the widgets of one `Gui`.

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::core::event::MouseState;
use crate::ui::widgets::WidgetId;

/// Exclusive selection per radio group id.
#[derive(Debug, Default, Clone)]
pub struct RadioGroups {
    selected: FxHashMap<u32, WidgetId>,
    default_group: u32,
}

impl RadioGroups {
    pub fn default_group(&self) -> u32 {
        self.default_group
    }

    pub fn set_default_group(&mut self, group: u32) {
        self.default_group = group;
    }

    /// Makes `id` the selection of `group`, displacing the previous one.
    pub fn select(&mut self, group: u32, id: WidgetId) {
        let previous = self.selected.insert(group, id);
        if previous != Some(id) {
            debug!(group, id = ?id, previous = ?previous, "radio selected");
        }
    }

    pub fn unselect_group(&mut self, group: u32) {
        self.selected.remove(&group);
    }

    /// Clears `group` only if `id` is its selection.
    pub fn unselect(&mut self, group: u32, id: WidgetId) {
        if self.selected.get(&group) == Some(&id) {
            self.selected.remove(&group);
        }
    }

    pub fn selected(&self, group: u32) -> Option<WidgetId> {
        self.selected.get(&group).copied()
    }

    pub fn is_selected(&self, group: u32, id: WidgetId) -> bool {
        self.selected(group) == Some(id)
    }

    /// Drops every selection that points at `id`.
    pub(crate) fn forget(&mut self, id: WidgetId) {
        self.selected.retain(|_, selected| *selected != id);
    }
}

/// Caret blink half-period, shared by every text box of a `Gui`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CaretBlink {
    delay: f32,
}

impl CaretBlink {
    pub fn new(delay: f32) -> Self {
        Self {
            delay: delay.max(0.0),
        }
    }

    pub fn delay(&self) -> f32 {
        self.delay
    }

    pub fn set_delay(&mut self, delay: f32) {
        self.delay = delay.max(0.0);
    }
}

impl Default for CaretBlink {
    fn default() -> Self {
        Self::new(0.5)
    }
}

/// Everything outside the widget arena that the update pass mutates.
#[derive(Debug, Clone)]
pub struct GuiState {
    pub(crate) hover: Option<WidgetId>,
    pub(crate) keyboard: Option<WidgetId>,
    pub(crate) mouse: MouseState,
    pub(crate) elapsed: f32,
    pub(crate) radio: RadioGroups,
    pub(crate) caret: CaretBlink,
    pub(crate) cell_pixels: i32,
    /// Surface size in cells, refreshed on every render.
    pub(crate) surface_size: (i32, i32),
}

impl GuiState {
    pub(crate) fn new(caret: CaretBlink, cell_pixels: i32) -> Self {
        Self {
            hover: None,
            keyboard: None,
            mouse: MouseState::default(),
            elapsed: 0.0,
            radio: RadioGroups::default(),
            caret,
            cell_pixels: cell_pixels.max(1),
            surface_size: (80, 25),
        }
    }

    pub(crate) fn set_keyboard_focus(&mut self, id: Option<WidgetId>) {
        if self.keyboard != id {
            debug!(from = ?self.keyboard, to = ?id, "keyboard focus");
            self.keyboard = id;
        }
    }

    /// Clears every reference to a widget that is going away.
    pub(crate) fn forget(&mut self, id: WidgetId) {
        if self.hover == Some(id) {
            self.hover = None;
        }
        if self.keyboard == Some(id) {
            self.set_keyboard_focus(None);
        }
        self.radio.forget(id);
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/gui/state.rs"]
mod tests;
