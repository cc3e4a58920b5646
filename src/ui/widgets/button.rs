//! Push, toggle and radio buttons.
//!
//! All three share one struct: they size and click the same way and only
//! differ in what a click does to their own state and how they draw it.

use compact_str::CompactString;

use super::base::{UpdateCtx, WidgetBase};
use super::{ClickCallback, RenderCtx, WidgetId};
use crate::ui::core::color::Rgb;
use crate::ui::core::geom::Pos;
use crate::ui::core::surface::{Alignment, BlendMode, Surface};
use crate::ui::core::text;
use crate::ui::gui::state::GuiState;

const CHECKBOX_SET: char = '☑';
const CHECKBOX_UNSET: char = '☐';
const RADIO_MARKER: char = '>';

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RadioRole {
    pub group: u32,
    pub use_selection_colors: bool,
    pub selection_fore: Rgb,
    pub selection_back: Rgb,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonRole {
    Push,
    Toggle { checked: bool },
    Radio(RadioRole),
}

pub struct Button {
    pub(crate) label: CompactString,
    /// Transient: set between press and release.
    pub(crate) pressed: bool,
    pub(crate) role: ButtonRole,
    pub(crate) callback: Option<ClickCallback>,
}

impl Button {
    pub(crate) fn new(label: &str, role: ButtonRole) -> Self {
        Self {
            label: CompactString::new(label),
            pressed: false,
            role,
            callback: None,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn role(&self) -> ButtonRole {
        self.role
    }

    /// Press flag for push/radio buttons, persistent state for toggles.
    pub fn is_pressed(&self) -> bool {
        match self.role {
            ButtonRole::Toggle { checked } => checked,
            _ => self.pressed,
        }
    }

    pub(crate) fn compute_size(&self, base: &mut WidgetBase) {
        base.rect.w = (text::width(&self.label) + 2).max(base.min_w);
        base.rect.h = 1;
    }

    pub(crate) fn press(&mut self) {
        self.pressed = true;
    }

    pub(crate) fn release(&mut self) {
        self.pressed = false;
    }

    pub(crate) fn click(&mut self, id: WidgetId, base: &WidgetBase, ctx: &mut UpdateCtx<'_>) {
        match &mut self.role {
            ButtonRole::Push => {}
            ButtonRole::Toggle { checked } => *checked = !*checked,
            ButtonRole::Radio(radio) => ctx.state.radio.select(radio.group, id),
        }
        if let Some(callback) = self.callback.as_mut() {
            callback(id, base.user_data.as_deref());
        }
    }

    pub(crate) fn is_selected(&self, id: WidgetId, state: &GuiState) -> bool {
        match self.role {
            ButtonRole::Radio(radio) => state.radio.is_selected(radio.group, id),
            _ => false,
        }
    }

    pub(crate) fn current_colors(&self, id: WidgetId, base: &WidgetBase, state: &GuiState) -> (Rgb, Rgb) {
        if let ButtonRole::Radio(radio) = self.role {
            if radio.use_selection_colors && state.radio.is_selected(radio.group, id) {
                return (radio.selection_fore, radio.selection_back);
            }
        }
        base.current_colors()
    }

    pub(crate) fn render(
        &self,
        id: WidgetId,
        base: &WidgetBase,
        ctx: &RenderCtx<'_>,
        surface: &mut dyn Surface,
    ) {
        let (fore, back) = self.current_colors(id, base, ctx.state);
        surface.set_default_foreground(fore);
        surface.set_default_background(back);
        let r = base.rect;
        if !r.is_empty() {
            surface.rect(r, true, BlendMode::Set);
        }

        match self.role {
            ButtonRole::Toggle { checked } => {
                let glyph = if checked { CHECKBOX_SET } else { CHECKBOX_UNSET };
                let caption = if self.label.is_empty() {
                    glyph.to_string()
                } else {
                    format!("{glyph} {}", self.label)
                };
                surface.print(base.pos(), BlendMode::None, Alignment::Left, &caption);
            }
            ButtonRole::Push | ButtonRole::Radio(_) => {
                if !self.label.is_empty() {
                    surface.print(
                        Pos::new(r.x + r.w / 2, r.y),
                        BlendMode::None,
                        Alignment::Center,
                        &self.label,
                    );
                }
            }
        }

        if let ButtonRole::Radio(radio) = self.role {
            if !radio.use_selection_colors && self.is_selected(id, ctx.state) {
                surface.put_char_ex(base.pos(), RADIO_MARKER, fore, back);
            }
        }
    }
}
