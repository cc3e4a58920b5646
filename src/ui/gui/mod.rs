//! The widget coordinator.
//!
//! `Gui` owns every widget in a slotmap arena and keeps the ordered list of
//! top-level widgets. Each frame the host calls `update_widgets` with one
//! input sample and one key, then `render_widgets` with a `Surface`. Hover
//! and keyboard focus are plain ids into the arena and are cleared whenever
//! the widget they name goes away.

use std::fmt;

use tracing::{debug, warn};

use crate::config::GuiSettings;
use crate::core::event::{InputBackend, Key};
use crate::ui::core::surface::Surface;
use crate::ui::widgets::base::{UpdateCtx, WidgetBase};
use crate::ui::widgets::format::ValueFormat;
use crate::ui::widgets::{self, RenderCtx, WidgetArena, WidgetId, WidgetKind, WidgetNode};

mod access;
mod factory;
pub mod state;

use self::state::{CaretBlink, GuiState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuiError {
    InvalidWidget,
    NotAContainer,
    AlreadyAdopted,
    WouldCycle,
}

impl fmt::Display for GuiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GuiError::InvalidWidget => write!(f, "invalid widget id"),
            GuiError::NotAContainer => write!(f, "widget is not a container"),
            GuiError::AlreadyAdopted => write!(f, "widget already belongs to a container"),
            GuiError::WouldCycle => write!(f, "cannot add a container to its own subtree"),
        }
    }
}

impl std::error::Error for GuiError {}

pub struct Gui {
    widgets: WidgetArena,
    roots: Vec<WidgetId>,
    state: GuiState,
    settings: GuiSettings,
    slider_format: ValueFormat,
}

impl Default for Gui {
    fn default() -> Self {
        Self::new()
    }
}

impl Gui {
    pub fn new() -> Self {
        Self::with_settings(GuiSettings::default())
    }

    pub fn with_settings(settings: GuiSettings) -> Self {
        let slider_format = settings.slider.format.parse().unwrap_or_else(|e| {
            warn!(format = %settings.slider.format, error = %e, "bad slider format, using default");
            ValueFormat::default()
        });
        let mut state = GuiState::new(
            CaretBlink::new(settings.caret_blink_delay),
            settings.cell_pixels,
        );
        state.radio.set_default_group(settings.default_radio_group);
        Self {
            widgets: WidgetArena::with_key(),
            roots: Vec::new(),
            state,
            settings,
            slider_format,
        }
    }

    pub fn settings(&self) -> &GuiSettings {
        &self.settings
    }

    fn register(&mut self, base: WidgetBase, kind: WidgetKind) -> WidgetId {
        let name = kind.name();
        let id = self.widgets.insert(WidgetNode::new(base, kind));
        self.roots.push(id);
        debug!(id = ?id, kind = name, "widget registered");
        id
    }

    /// Drops `id` from the top-level list, clearing focus that points at it.
    fn unregister(&mut self, id: WidgetId) {
        self.drop_focus(id);
        self.roots.retain(|&root| root != id);
    }

    fn drop_focus(&mut self, id: WidgetId) {
        if self.state.hover == Some(id) {
            self.state.hover = None;
        }
        if self.state.keyboard == Some(id) {
            self.state.set_keyboard_focus(None);
        }
    }

    /// Destroys a widget and, for containers, everything inside it.
    pub fn remove(&mut self, id: WidgetId) -> Result<(), GuiError> {
        let node = self.widgets.get(id).ok_or(GuiError::InvalidWidget)?;
        if let Some(parent) = node.base.parent {
            if let Ok(children) = self.container_children_mut(parent) {
                children.retain(|&child| child != id);
            }
        }
        self.unregister(id);

        let mut pending = vec![id];
        while let Some(next) = pending.pop() {
            let Some(node) = self.widgets.remove(next) else {
                continue;
            };
            self.state.forget(next);
            debug!(id = ?next, kind = node.kind.name(), "widget removed");
            if let WidgetKind::Container(c) = node.kind {
                pending.extend(c.children);
            }
        }
        Ok(())
    }

    /// Moves `child` into `container`. The child stops being a top-level widget.
    pub fn add_child(&mut self, container: WidgetId, child: WidgetId) -> Result<(), GuiError> {
        let parent = self.widgets.get(container).ok_or(GuiError::InvalidWidget)?;
        if !matches!(parent.kind, WidgetKind::Container(_)) {
            return Err(GuiError::NotAContainer);
        }
        let node = self.widgets.get(child).ok_or(GuiError::InvalidWidget)?;
        if node.base.parent.is_some() {
            return Err(GuiError::AlreadyAdopted);
        }
        if self.is_ancestor_or_self(child, container) {
            return Err(GuiError::WouldCycle);
        }

        self.unregister(child);
        if let Some(node) = self.widgets.get_mut(child) {
            node.base.parent = Some(container);
        }
        self.container_children_mut(container)?.push(child);
        debug!(container = ?container, child = ?child, "widget adopted");
        Ok(())
    }

    /// Detaches `child`. It stays alive but is neither updated nor drawn
    /// until it is added to a container again or removed.
    pub fn remove_child(&mut self, container: WidgetId, child: WidgetId) -> Result<(), GuiError> {
        let children = self.container_children_mut(container)?;
        let before = children.len();
        children.retain(|&c| c != child);
        if children.len() == before {
            return Err(GuiError::InvalidWidget);
        }
        if let Some(node) = self.widgets.get_mut(child) {
            node.base.parent = None;
            node.base.hovered = false;
            node.base.mouse_l = false;
        }
        self.drop_focus(child);
        debug!(container = ?container, child = ?child, "widget detached");
        Ok(())
    }

    /// Detaches every child of `container`.
    pub fn clear_children(&mut self, container: WidgetId) -> Result<(), GuiError> {
        let children = std::mem::take(self.container_children_mut(container)?);
        for child in children {
            if let Some(node) = self.widgets.get_mut(child) {
                node.base.parent = None;
                node.base.hovered = false;
                node.base.mouse_l = false;
            }
            self.drop_focus(child);
        }
        debug!(container = ?container, "children cleared");
        Ok(())
    }

    fn container_children_mut(&mut self, id: WidgetId) -> Result<&mut Vec<WidgetId>, GuiError> {
        match self.widgets.get_mut(id).map(|n| &mut n.kind) {
            Some(WidgetKind::Container(c)) => Ok(&mut c.children),
            Some(_) => Err(GuiError::NotAContainer),
            None => Err(GuiError::InvalidWidget),
        }
    }

    fn is_ancestor_or_self(&self, ancestor: WidgetId, mut id: WidgetId) -> bool {
        loop {
            if id == ancestor {
                return true;
            }
            match self.widgets.get(id).and_then(|n| n.base.parent) {
                Some(parent) => id = parent,
                None => return false,
            }
        }
    }

    /// One update pass: sample input, then size and update every visible
    /// top-level widget in registration order.
    pub fn update_widgets(&mut self, input: &mut dyn InputBackend, key: Key) {
        self.state.mouse = input.mouse();
        self.state.elapsed = input.last_frame_secs();

        let roots = self.roots.clone();
        for id in roots {
            if !self.is_visible(id) {
                continue;
            }
            widgets::compute_size(&mut self.widgets, id);
            let mut ctx = UpdateCtx {
                state: &mut self.state,
                input: &mut *input,
                key,
            };
            update_tree(&mut self.widgets, id, &mut ctx);
        }
    }

    /// Draws every visible top-level widget, restoring the surface's default
    /// colors after each one.
    pub fn render_widgets(&mut self, surface: &mut dyn Surface) {
        self.state.surface_size = (surface.width(), surface.height());
        let ctx = RenderCtx {
            widgets: &self.widgets,
            state: &self.state,
        };
        for &id in &self.roots {
            let Some(node) = self.widgets.get(id).filter(|n| n.base.visible) else {
                continue;
            };
            let fore = surface.default_foreground();
            let back = surface.default_background();
            widgets::render(id, node, &ctx, surface);
            surface.set_default_foreground(fore);
            surface.set_default_background(back);
        }
    }
}

/// Updates `id`, then (for containers) its visible children in order.
fn update_tree(widgets: &mut WidgetArena, id: WidgetId, ctx: &mut UpdateCtx<'_>) {
    let Some(node) = widgets.get_mut(id) else {
        return;
    };
    widgets::update(id, node, ctx);
    let children = match &node.kind {
        WidgetKind::Container(c) => c.children.clone(),
        _ => return,
    };
    for child in children {
        if widgets.get(child).is_some_and(|n| n.base.visible) {
            update_tree(widgets, child, ctx);
        }
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/gui/mod.rs"]
mod tests;
