//! State shared by every widget and the per-frame hover/press protocol.

use std::any::Any;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::{WidgetId, WidgetNode};
use crate::core::event::{InputBackend, Key};
use crate::ui::core::color::Rgb;
use crate::ui::core::geom::{Pos, Rect};
use crate::ui::gui::state::GuiState;

/// Normal and hovered color pairs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetColors {
    pub fore: Rgb,
    pub back: Rgb,
    pub fore_focus: Rgb,
    pub back_focus: Rgb,
}

impl Default for WidgetColors {
    fn default() -> Self {
        Self {
            fore: Rgb::new(220, 220, 180),
            back: Rgb::new(40, 40, 120),
            fore_focus: Rgb::WHITE,
            back_focus: Rgb::new(70, 70, 130),
        }
    }
}

impl WidgetColors {
    /// `(fore, back)` for the given hover state.
    pub fn current(&self, hovered: bool) -> (Rgb, Rgb) {
        if hovered {
            (self.fore_focus, self.back_focus)
        } else {
            (self.fore, self.back)
        }
    }
}

pub struct WidgetBase {
    pub(crate) rect: Rect,
    /// Lower bound for auto-sized widgets created with explicit dimensions.
    pub(crate) min_w: i32,
    pub(crate) min_h: i32,
    pub(crate) visible: bool,
    pub(crate) tip: String,
    pub(crate) user_data: Option<Box<dyn Any>>,
    pub(crate) hovered: bool,
    /// Left button went down while this widget was hovered.
    pub(crate) mouse_l: bool,
    pub(crate) colors: WidgetColors,
    pub(crate) parent: Option<WidgetId>,
}

impl WidgetBase {
    pub(crate) fn new(rect: Rect, colors: WidgetColors) -> Self {
        Self {
            rect,
            min_w: rect.w.max(0),
            min_h: rect.h.max(0),
            visible: true,
            tip: String::new(),
            user_data: None,
            hovered: false,
            mouse_l: false,
            colors,
            parent: None,
        }
    }

    pub(crate) fn with_tip(mut self, tip: &str) -> Self {
        self.tip = tip.to_string();
        self
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn pos(&self) -> Pos {
        Pos::new(self.rect.x, self.rect.y)
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn tip(&self) -> &str {
        &self.tip
    }

    pub fn colors(&self) -> WidgetColors {
        self.colors
    }

    pub fn current_colors(&self) -> (Rgb, Rgb) {
        self.colors.current(self.hovered)
    }

    pub(crate) fn move_to(&mut self, x: i32, y: i32) {
        self.rect.x = x;
        self.rect.y = y;
    }

    /// Grow (never shrink) the width.
    pub(crate) fn grow_width(&mut self, w: i32) {
        if self.rect.w < w {
            self.rect.w = w;
        }
    }

    pub(crate) fn grow_height(&mut self, h: i32) {
        if self.rect.h < h {
            self.rect.h = h;
        }
    }
}

impl fmt::Debug for WidgetBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WidgetBase")
            .field("rect", &self.rect)
            .field("visible", &self.visible)
            .field("tip", &self.tip)
            .field("hovered", &self.hovered)
            .field("mouse_l", &self.mouse_l)
            .field("parent", &self.parent)
            .finish_non_exhaustive()
    }
}

/// Interaction hooks fired by the protocol. Widgets that do not care ignore them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Hook {
    HoverEnter,
    HoverLeave,
    Press,
    Release,
    Click,
}

/// Everything a widget may touch while it updates.
pub(crate) struct UpdateCtx<'a> {
    pub(crate) state: &'a mut GuiState,
    pub(crate) input: &'a mut dyn InputBackend,
    pub(crate) key: Key,
}

/// Hover tracking and press/release/click edges for one widget.
pub(crate) fn run_protocol(id: WidgetId, node: &mut WidgetNode, ctx: &mut UpdateCtx<'_>) {
    let mouse = ctx.state.mouse;
    let cursor_visible = ctx.input.is_cursor_visible();

    if cursor_visible {
        if node.base.rect.contains(mouse.cell()) {
            if !node.base.hovered {
                node.base.hovered = true;
                super::on_hook(id, node, Hook::HoverEnter, ctx);
            }
            ctx.state.hover = Some(id);
        } else {
            if node.base.hovered {
                node.base.hovered = false;
                super::on_hook(id, node, Hook::HoverLeave, ctx);
            }
            node.base.mouse_l = false;
            if ctx.state.hover == Some(id) {
                ctx.state.hover = None;
            }
        }
    }

    let routed = node.base.hovered || (!cursor_visible && ctx.state.hover == Some(id));
    if !routed {
        return;
    }

    if mouse.lbutton && !node.base.mouse_l {
        node.base.mouse_l = true;
        super::on_hook(id, node, Hook::Press, ctx);
    } else if !mouse.lbutton && node.base.mouse_l {
        super::on_hook(id, node, Hook::Release, ctx);
        ctx.state.set_keyboard_focus(None);
        // Fires on every release-while-down edge, whatever `Release` did.
        super::on_hook(id, node, Hook::Click, ctx);
        node.base.mouse_l = false;
    } else if mouse.lbutton_pressed {
        ctx.state.set_keyboard_focus(None);
        super::on_hook(id, node, Hook::Click, ctx);
    }
}
