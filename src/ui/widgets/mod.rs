//! Widget variants and their dispatch.
//!
//! Every widget is a `WidgetNode` in the `Gui`'s arena: shared `WidgetBase`
//! state plus a `WidgetKind` holding the variant's own data. The free
//! functions here route size computation, updates, hooks and rendering to the
//! right variant.

use std::any::Any;

use slotmap::{new_key_type, SlotMap};

pub mod base;
pub mod button;
pub mod container;
pub mod format;
pub mod image;
pub mod label;
pub mod separator;
pub mod slider;
pub mod status_bar;
pub mod textbox;

use self::base::{Hook, UpdateCtx, WidgetBase};
use self::button::Button;
use self::container::Container;
use self::label::Label;
use self::separator::Separator;
use self::slider::Slider;
use self::textbox::TextBox;
use crate::ui::core::color::Rgb;
use crate::ui::core::surface::Surface;
use crate::ui::gui::state::GuiState;

new_key_type! { pub struct WidgetId; }

pub type WidgetArena = SlotMap<WidgetId, WidgetNode>;

/// Called on click with the widget and its user data.
pub type ClickCallback = Box<dyn FnMut(WidgetId, Option<&dyn Any>)>;
/// Called after every edit of a text box.
pub type TextCallback = Box<dyn FnMut(WidgetId, &str)>;
/// Called when a slider's value changes.
pub type ValueCallback = Box<dyn FnMut(WidgetId, f32)>;

pub enum WidgetKind {
    Container(Container),
    Button(Button),
    Label(Label),
    Separator(Separator),
    TextBox(TextBox),
    Slider(Slider),
    StatusBar,
    Image,
}

impl WidgetKind {
    pub fn name(&self) -> &'static str {
        match self {
            WidgetKind::Container(c) => match c.layout {
                container::Layout::Free => "container",
                container::Layout::VBox { .. } => "vbox",
                container::Layout::HBox { .. } => "hbox",
                container::Layout::ToolBar(_) => "toolbar",
            },
            WidgetKind::Button(b) => match b.role {
                button::ButtonRole::Push => "button",
                button::ButtonRole::Toggle { .. } => "toggle_button",
                button::ButtonRole::Radio(_) => "radio_button",
            },
            WidgetKind::Label(_) => "label",
            WidgetKind::Separator(_) => "separator",
            WidgetKind::TextBox(_) => "text_box",
            WidgetKind::Slider(_) => "slider",
            WidgetKind::StatusBar => "status_bar",
            WidgetKind::Image => "image",
        }
    }
}

pub struct WidgetNode {
    pub base: WidgetBase,
    pub kind: WidgetKind,
}

impl WidgetNode {
    pub(crate) fn new(base: WidgetBase, kind: WidgetKind) -> Self {
        Self { base, kind }
    }
}

/// Read-only view handed to `render`.
pub(crate) struct RenderCtx<'a> {
    pub(crate) widgets: &'a WidgetArena,
    pub(crate) state: &'a GuiState,
}

impl RenderCtx<'_> {
    fn hover_tip(&self) -> Option<&str> {
        let id = self.state.hover?;
        self.widgets.get(id).map(|n| n.base.tip.as_str())
    }

    fn is_keyboard_focused(&self, id: WidgetId) -> bool {
        self.state.keyboard == Some(id)
    }
}

/// Sets `w`/`h` for the widget (and, for containers, lays out its children).
pub(crate) fn compute_size(widgets: &mut WidgetArena, id: WidgetId) {
    let Some(node) = widgets.get_mut(id) else {
        return;
    };
    let WidgetNode { base, kind } = node;
    match kind {
        WidgetKind::Container(_) => {}
        WidgetKind::Button(button) => return button.compute_size(base),
        WidgetKind::Label(label) => return label.compute_size(base),
        WidgetKind::Separator(separator) => return separator.compute_size(base),
        WidgetKind::TextBox(_)
        | WidgetKind::Slider(_)
        | WidgetKind::StatusBar
        | WidgetKind::Image => return,
    }
    container::layout(widgets, id);
}

/// Grow-to-fit request from a layout parent. Never shrinks.
pub(crate) fn expand(node: &mut WidgetNode, w: i32, h: i32) {
    match node.kind {
        WidgetKind::Button(_) | WidgetKind::Label(_) | WidgetKind::Separator(_) => {
            node.base.grow_width(w)
        }
        WidgetKind::Image => image::expand(&mut node.base, w, h),
        WidgetKind::Container(_)
        | WidgetKind::TextBox(_)
        | WidgetKind::Slider(_)
        | WidgetKind::StatusBar => {}
    }
}

/// One widget's share of the update pass. Containers recurse from the `Gui`.
pub(crate) fn update(id: WidgetId, node: &mut WidgetNode, ctx: &mut UpdateCtx<'_>) {
    let focused = ctx.state.keyboard == Some(id);
    let elapsed = ctx.state.elapsed;
    let delay = ctx.state.caret.delay();

    let slider_start = match &mut node.kind {
        WidgetKind::TextBox(field) => {
            if focused {
                field.handle_key(id, ctx.key, elapsed, delay);
            }
            None
        }
        WidgetKind::Slider(slider) => {
            if focused {
                slider.field.handle_key(id, ctx.key, elapsed, delay);
            }
            Some(slider.value)
        }
        _ => None,
    };

    base::run_protocol(id, node, ctx);

    if let (Some(old_value), WidgetKind::Slider(slider)) = (slider_start, &mut node.kind) {
        slider.finish_update(id, &node.base, old_value, ctx);
    }
}

pub(crate) fn on_hook(id: WidgetId, node: &mut WidgetNode, hook: Hook, ctx: &mut UpdateCtx<'_>) {
    let WidgetNode { base, kind } = node;
    match (kind, hook) {
        (WidgetKind::Button(button), Hook::Press) => button.press(),
        (WidgetKind::Button(button), Hook::Release) => button.release(),
        (WidgetKind::Button(button), Hook::Click) => button.click(id, base, ctx),
        (WidgetKind::TextBox(field), Hook::Click) => field.click(id, base, ctx),
        (WidgetKind::Slider(slider), Hook::Press) => slider.press(id, ctx),
        (WidgetKind::Slider(slider), Hook::Release) => slider.release(id, base, ctx),
        (WidgetKind::Slider(slider), Hook::Click) => slider.field.click(id, base, ctx),
        _ => {}
    }
}

/// `(fore, back)` the widget draws with right now.
pub(crate) fn current_colors(id: WidgetId, node: &WidgetNode, state: &GuiState) -> (Rgb, Rgb) {
    match &node.kind {
        WidgetKind::Button(button) => button.current_colors(id, &node.base, state),
        WidgetKind::Slider(slider) => slider.current_colors(&node.base),
        _ => node.base.current_colors(),
    }
}

pub(crate) fn render(
    id: WidgetId,
    node: &WidgetNode,
    ctx: &RenderCtx<'_>,
    surface: &mut dyn Surface,
) {
    let base = &node.base;
    match &node.kind {
        WidgetKind::Container(container) => container.render(base, ctx, surface),
        WidgetKind::Button(button) => button.render(id, base, ctx, surface),
        WidgetKind::Label(label) => label.render(base, surface),
        WidgetKind::Separator(separator) => separator.render(base, surface),
        WidgetKind::TextBox(field) => {
            field.render(base, base.rect.w, ctx.is_keyboard_focused(id), surface)
        }
        WidgetKind::Slider(slider) => {
            slider.render(base, ctx.is_keyboard_focused(id), surface)
        }
        WidgetKind::StatusBar => status_bar::render(base, ctx.hover_tip(), surface),
        WidgetKind::Image => image::render(base, surface),
    }
}
