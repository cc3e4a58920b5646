//! Queries and setters on individual widgets.
//!
//! Getters return `None` for stale ids or the wrong widget kind. Setters on
//! stale ids or the wrong kind are no-ops and log a warning.

use std::any::Any;

use compact_str::CompactString;
use tracing::warn;

use super::Gui;
use crate::ui::core::color::Rgb;
use crate::ui::core::geom::Rect;
use crate::ui::widgets::base::{WidgetBase, WidgetColors};
use crate::ui::widgets::button::{ButtonRole, RadioRole};
use crate::ui::widgets::container::{Layout, ToolBarLayout};
use crate::ui::widgets::format::ValueFormat;
use crate::ui::widgets::slider::Slider;
use crate::ui::widgets::{self, WidgetId, WidgetKind, WidgetNode};

impl Gui {
    pub fn contains(&self, id: WidgetId) -> bool {
        self.widgets.contains_key(id)
    }

    pub fn node(&self, id: WidgetId) -> Option<&WidgetNode> {
        self.widgets.get(id)
    }

    pub fn kind_name(&self, id: WidgetId) -> Option<&'static str> {
        self.widgets.get(id).map(|n| n.kind.name())
    }

    /// Top-level widgets in update/render order.
    pub fn roots(&self) -> &[WidgetId] {
        &self.roots
    }

    pub fn children(&self, id: WidgetId) -> Option<&[WidgetId]> {
        match &self.widgets.get(id)?.kind {
            WidgetKind::Container(c) => Some(c.children()),
            _ => None,
        }
    }

    pub fn parent(&self, id: WidgetId) -> Option<WidgetId> {
        self.widgets.get(id)?.base.parent
    }

    /// Runs `f` on the widget; warns when the id is stale or `f` rejects the kind.
    fn edit<R>(
        &mut self,
        id: WidgetId,
        op: &'static str,
        f: impl FnOnce(&mut WidgetBase, &mut WidgetKind) -> Option<R>,
    ) -> Option<R> {
        let Some(node) = self.widgets.get_mut(id) else {
            warn!(id = ?id, op, "unknown widget");
            return None;
        };
        let kind = node.kind.name();
        let out = f(&mut node.base, &mut node.kind);
        if out.is_none() {
            warn!(id = ?id, kind, op, "operation does not apply to this widget");
        }
        out
    }

    fn edit_base(&mut self, id: WidgetId, op: &'static str, f: impl FnOnce(&mut WidgetBase)) {
        self.edit(id, op, |base, _| {
            f(base);
            Some(())
        });
    }

    // Geometry and common state.

    pub fn bounds(&self, id: WidgetId) -> Option<Rect> {
        self.widgets.get(id).map(|n| n.base.rect)
    }

    pub fn move_widget(&mut self, id: WidgetId, x: i32, y: i32) {
        self.edit_base(id, "move_widget", |base| base.move_to(x, y));
    }

    /// Sets the size directly. Auto-sized widgets recompute on the next update.
    pub fn resize_widget(&mut self, id: WidgetId, w: i32, h: i32) {
        self.edit_base(id, "resize_widget", |base| {
            base.rect.w = w.max(0);
            base.rect.h = h.max(0);
        });
    }

    pub fn is_visible(&self, id: WidgetId) -> bool {
        self.widgets.get(id).is_some_and(|n| n.base.visible)
    }

    pub fn set_visible(&mut self, id: WidgetId, visible: bool) {
        self.edit_base(id, "set_visible", |base| base.visible = visible);
    }

    pub fn tip(&self, id: WidgetId) -> Option<&str> {
        self.widgets.get(id).map(|n| n.base.tip.as_str())
    }

    pub fn set_tip(&mut self, id: WidgetId, tip: &str) {
        self.edit_base(id, "set_tip", |base| base.tip = tip.to_string());
    }

    pub fn user_data(&self, id: WidgetId) -> Option<&dyn Any> {
        self.widgets.get(id)?.base.user_data.as_deref()
    }

    pub fn set_user_data<T: Any>(&mut self, id: WidgetId, data: T) {
        self.edit_base(id, "set_user_data", |base| {
            base.user_data = Some(Box::new(data))
        });
    }

    pub fn clear_user_data(&mut self, id: WidgetId) -> Option<Box<dyn Any>> {
        self.widgets.get_mut(id)?.base.user_data.take()
    }

    pub fn colors(&self, id: WidgetId) -> Option<WidgetColors> {
        self.widgets.get(id).map(|n| n.base.colors)
    }

    /// `fore` and `back` are `(normal, hovered)` pairs.
    pub fn set_colors(&mut self, id: WidgetId, fore: (Rgb, Rgb), back: (Rgb, Rgb)) {
        self.edit_base(id, "set_colors", |base| {
            base.colors = WidgetColors {
                fore: fore.0,
                fore_focus: fore.1,
                back: back.0,
                back_focus: back.1,
            }
        });
    }

    /// `(fore, back)` the widget would draw with right now.
    pub fn current_colors(&self, id: WidgetId) -> Option<(Rgb, Rgb)> {
        let node = self.widgets.get(id)?;
        Some(widgets::current_colors(id, node, &self.state))
    }

    pub fn is_hovered(&self, id: WidgetId) -> bool {
        self.widgets.get(id).is_some_and(|n| n.base.hovered)
    }

    // Focus.

    pub fn hovered_widget(&self) -> Option<WidgetId> {
        self.state.hover
    }

    pub fn keyboard_focused_widget(&self) -> Option<WidgetId> {
        self.state.keyboard
    }

    pub fn is_keyboard_focused(&self, id: WidgetId) -> bool {
        self.state.keyboard == Some(id)
    }

    /// Gives keyboard focus to `id` (or drops it with `None`).
    pub fn focus_keyboard(&mut self, id: Option<WidgetId>) {
        if let Some(id) = id {
            if !self.widgets.contains_key(id) {
                warn!(id = ?id, op = "focus_keyboard", "unknown widget");
                return;
            }
        }
        self.state.set_keyboard_focus(id);
    }

    /// Cells the host surface spans; refreshed by every `render_widgets`.
    pub fn set_surface_size(&mut self, w: i32, h: i32) {
        self.state.surface_size = (w, h);
    }

    // Buttons and labels.

    pub fn set_click_callback<F>(&mut self, id: WidgetId, callback: F)
    where
        F: FnMut(WidgetId, Option<&dyn Any>) + 'static,
    {
        self.edit(id, "set_click_callback", |_, kind| match kind {
            WidgetKind::Button(button) => {
                button.callback = Some(Box::new(callback));
                Some(())
            }
            _ => None,
        });
    }

    /// Caption of a button, label, separator, text box or slider.
    pub fn label(&self, id: WidgetId) -> Option<&str> {
        match &self.widgets.get(id)?.kind {
            WidgetKind::Button(button) => Some(button.label()),
            WidgetKind::Label(label) => Some(label.text()),
            WidgetKind::Separator(separator) => Some(separator.caption()),
            WidgetKind::TextBox(field) => Some(field.label()),
            WidgetKind::Slider(slider) => Some(slider.field.label()),
            _ => None,
        }
    }

    pub fn set_label(&mut self, id: WidgetId, text: &str) {
        self.edit(id, "set_label", |base, kind| {
            match kind {
                WidgetKind::Button(button) => button.label = CompactString::new(text),
                WidgetKind::Label(label) => label.text = CompactString::new(text),
                WidgetKind::Separator(separator) => {
                    separator.caption = CompactString::new(text)
                }
                WidgetKind::TextBox(field) => field.set_label(text, base),
                WidgetKind::Slider(slider) => slider.field.set_label(text, base),
                _ => return None,
            }
            Some(())
        });
    }

    /// Transient press flag for push/radio buttons, persistent state for toggles.
    pub fn is_pressed(&self, id: WidgetId) -> Option<bool> {
        match &self.widgets.get(id)?.kind {
            WidgetKind::Button(button) => Some(button.is_pressed()),
            _ => None,
        }
    }

    /// Sets a toggle button's state without firing its callback.
    pub fn set_pressed(&mut self, id: WidgetId, pressed: bool) {
        self.edit(id, "set_pressed", |_, kind| match kind {
            WidgetKind::Button(button) => match &mut button.role {
                ButtonRole::Toggle { checked } => {
                    *checked = pressed;
                    Some(())
                }
                _ => None,
            },
            _ => None,
        });
    }

    // Radio groups.

    fn radio_group(&self, id: WidgetId) -> Option<u32> {
        match &self.widgets.get(id)?.kind {
            WidgetKind::Button(button) => match button.role {
                ButtonRole::Radio(radio) => Some(radio.group),
                _ => None,
            },
            _ => None,
        }
    }

    fn edit_radio(
        &mut self,
        id: WidgetId,
        op: &'static str,
        f: impl FnOnce(&mut RadioRole),
    ) {
        self.edit(id, op, |_, kind| match kind {
            WidgetKind::Button(button) => match &mut button.role {
                ButtonRole::Radio(radio) => {
                    f(radio);
                    Some(())
                }
                _ => None,
            },
            _ => None,
        });
    }

    /// Moves a radio button to `group`. A selection it held in its old group is dropped.
    pub fn set_radio_group(&mut self, id: WidgetId, group: u32) {
        if let Some(old) = self.radio_group(id) {
            self.state.radio.unselect(old, id);
        }
        self.edit_radio(id, "set_radio_group", |radio| radio.group = group);
    }

    pub fn select_radio(&mut self, id: WidgetId) {
        match self.radio_group(id) {
            Some(group) => self.state.radio.select(group, id),
            None => warn!(id = ?id, op = "select_radio", "not a radio button"),
        }
    }

    pub fn unselect_radio(&mut self, id: WidgetId) {
        match self.radio_group(id) {
            Some(group) => self.state.radio.unselect(group, id),
            None => warn!(id = ?id, op = "unselect_radio", "not a radio button"),
        }
    }

    pub fn is_radio_selected(&self, id: WidgetId) -> Option<bool> {
        let group = self.radio_group(id)?;
        Some(self.state.radio.is_selected(group, id))
    }

    pub fn radio_selection(&self, group: u32) -> Option<WidgetId> {
        self.state.radio.selected(group)
    }

    pub fn unselect_radio_group(&mut self, group: u32) {
        self.state.radio.unselect_group(group);
    }

    /// Group that radio buttons created from now on join.
    pub fn set_default_radio_group(&mut self, group: u32) {
        self.state.radio.set_default_group(group);
    }

    pub fn default_radio_group(&self) -> u32 {
        self.state.radio.default_group()
    }

    pub fn set_radio_selection_colors(&mut self, id: WidgetId, fore: Rgb, back: Rgb) {
        self.edit_radio(id, "set_radio_selection_colors", |radio| {
            radio.selection_fore = fore;
            radio.selection_back = back;
        });
    }

    /// Draw the selected button in the selection colors instead of with a marker.
    pub fn set_use_selection_colors(&mut self, id: WidgetId, enabled: bool) {
        self.edit_radio(id, "set_use_selection_colors", |radio| {
            radio.use_selection_colors = enabled
        });
    }

    // Text boxes.

    /// Contents of a text box, or the numeric text of a slider.
    pub fn text(&self, id: WidgetId) -> Option<&str> {
        match &self.widgets.get(id)?.kind {
            WidgetKind::TextBox(field) => Some(field.text()),
            WidgetKind::Slider(slider) => Some(slider.text()),
            _ => None,
        }
    }

    /// Replaces a text box's contents (truncated to its maximum length).
    /// The text callback is not fired.
    pub fn set_text(&mut self, id: WidgetId, text: &str) {
        self.edit(id, "set_text", |_, kind| match kind {
            WidgetKind::TextBox(field) => {
                field.set_text(text);
                Some(())
            }
            _ => None,
        });
    }

    pub fn set_text_callback<F>(&mut self, id: WidgetId, callback: F)
    where
        F: FnMut(WidgetId, &str) + 'static,
    {
        self.edit(id, "set_text_callback", |_, kind| match kind {
            WidgetKind::TextBox(field) => {
                field.callback = Some(Box::new(callback));
                Some(())
            }
            _ => None,
        });
    }

    pub fn set_insert_mode(&mut self, id: WidgetId, insert: bool) {
        self.edit(id, "set_insert_mode", |_, kind| match kind {
            WidgetKind::TextBox(field) => {
                field.insert = insert;
                Some(())
            }
            WidgetKind::Slider(slider) => {
                slider.field.insert = insert;
                Some(())
            }
            _ => None,
        });
    }

    pub fn is_insert_mode(&self, id: WidgetId) -> Option<bool> {
        match &self.widgets.get(id)?.kind {
            WidgetKind::TextBox(field) => Some(field.is_insert_mode()),
            WidgetKind::Slider(slider) => Some(slider.field.is_insert_mode()),
            _ => None,
        }
    }

    /// `(caret, scroll offset)` of a text box or slider.
    pub fn caret(&self, id: WidgetId) -> Option<(usize, usize)> {
        let field = match &self.widgets.get(id)?.kind {
            WidgetKind::TextBox(field) => field,
            WidgetKind::Slider(slider) => &slider.field,
            _ => return None,
        };
        Some((field.caret(), field.scroll_offset()))
    }

    pub fn caret_blink_delay(&self) -> f32 {
        self.state.caret.delay()
    }

    pub fn set_caret_blink_delay(&mut self, delay: f32) {
        self.state.caret.set_delay(delay);
    }

    // Sliders.

    fn edit_slider(
        &mut self,
        id: WidgetId,
        op: &'static str,
        f: impl FnOnce(&mut Slider),
    ) {
        self.edit(id, op, |_, kind| match kind {
            WidgetKind::Slider(slider) => {
                f(slider);
                Some(())
            }
            _ => None,
        });
    }

    pub fn slider_value(&self, id: WidgetId) -> Option<f32> {
        match &self.widgets.get(id)?.kind {
            WidgetKind::Slider(slider) => Some(slider.value()),
            _ => None,
        }
    }

    /// Clamps into the slider's range and refreshes its text. No callback.
    pub fn set_slider_value(&mut self, id: WidgetId, value: f32) {
        self.edit_slider(id, "set_slider_value", |slider| slider.set_value(value));
    }

    pub fn slider_range(&self, id: WidgetId) -> Option<(f32, f32)> {
        match &self.widgets.get(id)?.kind {
            WidgetKind::Slider(slider) => Some(slider.range()),
            _ => None,
        }
    }

    pub fn set_slider_min_max(&mut self, id: WidgetId, min: f32, max: f32) {
        self.edit_slider(id, "set_slider_min_max", |slider| slider.set_min_max(min, max));
    }

    pub fn set_slider_sensitivity(&mut self, id: WidgetId, sensitivity: f32) {
        self.edit_slider(id, "set_slider_sensitivity", |slider| {
            slider.sensitivity = sensitivity
        });
    }

    pub fn set_slider_format(&mut self, id: WidgetId, format: ValueFormat) {
        self.edit_slider(id, "set_slider_format", |slider| slider.set_format(format));
    }

    pub fn set_slider_callback<F>(&mut self, id: WidgetId, callback: F)
    where
        F: FnMut(WidgetId, f32) + 'static,
    {
        self.edit_slider(id, "set_slider_callback", |slider| {
            slider.callback = Some(Box::new(callback))
        });
    }

    pub fn is_slider_dragging(&self, id: WidgetId) -> Option<bool> {
        match &self.widgets.get(id)?.kind {
            WidgetKind::Slider(slider) => Some(slider.is_dragging()),
            _ => None,
        }
    }

    // Toolbars.

    fn edit_toolbar(
        &mut self,
        id: WidgetId,
        op: &'static str,
        f: impl FnOnce(&mut ToolBarLayout),
    ) {
        self.edit(id, op, |_, kind| match kind {
            WidgetKind::Container(c) => match &mut c.layout {
                Layout::ToolBar(toolbar) => {
                    f(toolbar);
                    Some(())
                }
                _ => None,
            },
            _ => None,
        });
    }

    /// Renames a toolbar; its minimum width grows to fit the new name.
    pub fn set_toolbar_name(&mut self, id: WidgetId, name: &str) {
        self.edit_toolbar(id, "set_toolbar_name", |toolbar| toolbar.set_name(name));
    }

    pub fn set_toolbar_frame(&mut self, id: WidgetId, print_frame: bool) {
        self.edit_toolbar(id, "set_toolbar_frame", |toolbar| {
            toolbar.print_frame = print_frame
        });
    }

    pub fn toolbar_frame(&self, id: WidgetId) -> Option<bool> {
        match &self.widgets.get(id)?.kind {
            WidgetKind::Container(c) => match &c.layout {
                Layout::ToolBar(toolbar) => Some(toolbar.print_frame),
                _ => None,
            },
            _ => None,
        }
    }
}
