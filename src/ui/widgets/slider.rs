//! Numeric field with drag-to-adjust arrows.

use tracing::debug;

use super::base::{UpdateCtx, WidgetBase};
use super::format::ValueFormat;
use super::textbox::TextBox;
use super::{ValueCallback, WidgetId};
use crate::ui::core::color::Rgb;
use crate::ui::core::geom::{Pos, Rect};
use crate::ui::core::surface::{BlendMode, Surface};

const ARROW_W: char = '←';
const ARROW_E: char = '→';
/// Columns taken by the arrow affordance on the right.
pub(crate) const ARROWS_W: i32 = 2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Drag {
    /// Pointer pixel position; captured on the first tick after the press.
    pub(crate) origin: Option<(i32, i32)>,
    pub(crate) value: f32,
}

pub struct Slider {
    pub(crate) field: TextBox,
    pub(crate) min: f32,
    pub(crate) max: f32,
    pub(crate) value: f32,
    pub(crate) sensitivity: f32,
    pub(crate) on_arrows: bool,
    pub(crate) drag: Option<Drag>,
    pub(crate) format: ValueFormat,
    /// The field held keyboard focus last tick.
    pub(crate) editing: bool,
    pub(crate) callback: Option<ValueCallback>,
}

impl Slider {
    /// Returns the slider and its total width (label, text box, arrows).
    pub(crate) fn new(
        label: &str,
        box_w: i32,
        min: f32,
        max: f32,
        max_text_len: usize,
        format: ValueFormat,
        sensitivity: f32,
    ) -> (Self, i32) {
        let (field, w) = TextBox::new(label, "", box_w, max_text_len);
        let mut slider = Self {
            field,
            min,
            max,
            value: (min + max) * 0.5,
            sensitivity,
            on_arrows: false,
            drag: None,
            format,
            editing: false,
            callback: None,
        };
        slider.sync_text();
        (slider, w + ARROWS_W)
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn range(&self) -> (f32, f32) {
        (self.min, self.max)
    }

    pub fn text(&self) -> &str {
        self.field.text()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn format(&self) -> &ValueFormat {
        &self.format
    }

    fn clamp(&self, v: f32) -> f32 {
        if self.min <= self.max {
            v.clamp(self.min, self.max)
        } else {
            v.clamp(self.max, self.min)
        }
    }

    pub(crate) fn set_value(&mut self, v: f32) {
        self.value = self.clamp(v);
        self.sync_text();
    }

    pub(crate) fn set_min_max(&mut self, min: f32, max: f32) {
        self.min = min;
        self.max = max;
        self.set_value(self.value);
    }

    pub(crate) fn set_format(&mut self, format: ValueFormat) {
        self.format = format;
        self.sync_text();
    }

    /// Renders the value and re-reads it so both sides carry the same precision.
    fn sync_text(&mut self) {
        let text = self.format.format(self.value);
        self.field.max_len = self.field.max_len.max(text.chars().count());
        self.field.set_text(&text);
        self.text_to_value();
    }

    /// Malformed text reads as zero.
    fn text_to_value(&mut self) {
        let parsed = self.format.parse(self.field.text()).unwrap_or(0.0);
        self.value = self.clamp(parsed);
    }

    fn arrows_rect(&self, base: &WidgetBase) -> Rect {
        let r = base.rect;
        Rect::new(r.right() - ARROWS_W, r.y, ARROWS_W, 1)
    }

    pub(crate) fn current_colors(&self, base: &WidgetBase) -> (Rgb, Rgb) {
        base.colors.current(self.on_arrows || self.drag.is_some())
    }

    pub(crate) fn press(&mut self, id: WidgetId, ctx: &mut UpdateCtx<'_>) {
        if !self.on_arrows {
            return;
        }
        debug!(id = ?id, value = self.value, "slider drag begin");
        self.drag = Some(Drag {
            origin: None,
            value: self.value,
        });
        ctx.input.show_cursor(false);
    }

    pub(crate) fn release(&mut self, id: WidgetId, base: &WidgetBase, ctx: &mut UpdateCtx<'_>) {
        if self.drag.take().is_none() {
            return;
        }
        debug!(id = ?id, value = self.value, "slider drag end");
        let cell = ctx.state.cell_pixels;
        let arrows = self.arrows_rect(base);
        ctx.input.warp_cursor(arrows.x * cell, arrows.y * cell);
        ctx.input.show_cursor(true);
    }

    /// Second half of the tick, after keys and the hover protocol ran.
    pub(crate) fn finish_update(
        &mut self,
        id: WidgetId,
        base: &WidgetBase,
        old_value: f32,
        ctx: &mut UpdateCtx<'_>,
    ) {
        let focused = ctx.state.keyboard == Some(id);
        self.text_to_value();
        if self.editing && !focused {
            self.sync_text();
        }
        self.editing = focused;

        let mouse = ctx.state.mouse;
        self.on_arrows = self.arrows_rect(base).contains(mouse.cell());

        if let Some(drag) = self.drag.as_mut() {
            match drag.origin {
                None => drag.origin = Some((mouse.x, mouse.y)),
                Some((ox, oy)) => {
                    let cell = ctx.state.cell_pixels.max(1);
                    let (sw, sh) = ctx.state.surface_size;
                    let span_x = (sw * cell).max(1) as f32;
                    let span_y = (sh * cell).max(1) as f32;
                    let mut mdx = (mouse.x - ox) as f32 * self.sensitivity / span_x;
                    let mdy = (mouse.y - oy) as f32 * self.sensitivity / span_y;
                    if mdy.abs() > mdx.abs() {
                        mdx = -mdy;
                    }
                    let start = drag.value;
                    let before = self.value;
                    self.value = self.clamp(start + (self.max - self.min) * mdx);
                    if self.value != before {
                        self.sync_text();
                    }
                }
            }
        }

        if self.value != old_value {
            if let Some(callback) = self.callback.as_mut() {
                callback(id, self.value);
            }
        }
    }

    pub(crate) fn render(&self, base: &WidgetBase, focused: bool, surface: &mut dyn Surface) {
        let (fore, back) = self.current_colors(base);
        surface.set_default_background(back);
        surface.set_default_foreground(fore);
        self.field
            .render(base, (base.rect.w - ARROWS_W).max(0), focused, surface);

        let arrows = self.arrows_rect(base);
        surface.set_default_background(back);
        surface.set_default_foreground(fore);
        surface.rect(arrows, true, BlendMode::Set);
        surface.put_char_ex(Pos::new(arrows.x, arrows.y), ARROW_W, fore, back);
        surface.put_char_ex(Pos::new(arrows.x + 1, arrows.y), ARROW_E, fore, back);
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/widgets/slider.rs"]
mod tests;
