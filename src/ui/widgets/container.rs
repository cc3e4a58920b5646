//! Composite widgets: free containers, vertical/horizontal boxes and toolbars.
//!
//! A container owns an ordered child list; the children live in the same
//! arena as everything else and are reached only through that list. The
//! `Layout` decides how `compute_size` places them.

use super::base::WidgetBase;
use super::{RenderCtx, WidgetArena, WidgetId};
use crate::ui::core::surface::{BlendMode, Surface};
use crate::ui::core::text;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolBarLayout {
    pub name: String,
    /// Minimum width; 0 when the toolbar sizes to its content.
    pub fixed_width: i32,
    pub print_frame: bool,
}

impl ToolBarLayout {
    pub(crate) fn new(name: &str, width: Option<i32>) -> Self {
        let min = text::width(name) + 4;
        Self {
            name: name.to_string(),
            fixed_width: width.map_or(0, |w| w.max(min)),
            print_frame: true,
        }
    }

    pub(crate) fn initial_width(&self) -> i32 {
        self.fixed_width.max(text::width(&self.name) + 4)
    }

    pub(crate) fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
        self.fixed_width = self.fixed_width.max(text::width(name) + 4);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Layout {
    /// Children keep the positions they were given.
    Free,
    VBox { padding: i32 },
    HBox { padding: i32 },
    ToolBar(ToolBarLayout),
}

#[derive(Debug, Clone)]
pub struct Container {
    pub(crate) layout: Layout,
    pub(crate) children: Vec<WidgetId>,
}

impl Container {
    pub(crate) fn new(layout: Layout) -> Self {
        Self {
            layout,
            children: Vec::new(),
        }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn children(&self) -> &[WidgetId] {
        &self.children
    }

    pub(crate) fn render(
        &self,
        base: &WidgetBase,
        ctx: &RenderCtx<'_>,
        surface: &mut dyn Surface,
    ) {
        if let Layout::ToolBar(toolbar) = &self.layout {
            let (fore, back) = base.current_colors();
            surface.set_default_foreground(fore);
            surface.set_default_background(back);
            if toolbar.print_frame {
                let title = Some(toolbar.name.as_str()).filter(|n| !n.is_empty());
                surface.frame(base.rect, true, BlendMode::Set, title);
            }
        }
        for &child in &self.children {
            if let Some(node) = ctx.widgets.get(child).filter(|n| n.base.visible) {
                super::render(child, node, ctx, surface);
            }
        }
    }
}

#[derive(Clone, Copy)]
enum Axis {
    Vertical,
    Horizontal,
}

fn visible_children(widgets: &WidgetArena, children: &[WidgetId]) -> Vec<WidgetId> {
    children
        .iter()
        .copied()
        .filter(|&c| widgets.get(c).is_some_and(|n| n.base.visible))
        .collect()
}

/// Sizes the container `id` and (recursively) everything below it.
pub(crate) fn layout(widgets: &mut WidgetArena, id: WidgetId) {
    let Some(node) = widgets.get(id) else {
        return;
    };
    let super::WidgetKind::Container(container) = &node.kind else {
        return;
    };
    let origin = node.base.rect;
    let layout = container.layout.clone();
    let children = visible_children(widgets, &container.children);

    let (w, h) = match layout {
        Layout::Free => {
            for &child in &children {
                super::compute_size(widgets, child);
            }
            return;
        }
        Layout::VBox { padding } => {
            stack(widgets, &children, origin.x, origin.y, padding, Axis::Vertical)
        }
        Layout::HBox { padding } => {
            stack(widgets, &children, origin.x, origin.y, padding, Axis::Horizontal)
        }
        Layout::ToolBar(toolbar) => {
            toolbar_layout(widgets, &children, &toolbar, origin.x, origin.y)
        }
    };

    if let Some(node) = widgets.get_mut(id) {
        node.base.rect.w = w;
        node.base.rect.h = h;
    }
}

fn stack(
    widgets: &mut WidgetArena,
    children: &[WidgetId],
    x: i32,
    y: i32,
    padding: i32,
    axis: Axis,
) -> (i32, i32) {
    let mut cursor = match axis {
        Axis::Vertical => y,
        Axis::Horizontal => x,
    };
    let mut cross = 0;

    for &child in children {
        if let Some(node) = widgets.get_mut(child) {
            match axis {
                Axis::Vertical => node.base.move_to(x, cursor),
                Axis::Horizontal => node.base.move_to(cursor, y),
            }
        }
        super::compute_size(widgets, child);
        let Some(node) = widgets.get(child) else {
            continue;
        };
        let r = node.base.rect;
        match axis {
            Axis::Vertical => {
                cross = cross.max(r.w);
                cursor += r.h + padding;
            }
            Axis::Horizontal => {
                cross = cross.max(r.h);
                cursor += r.w + padding;
            }
        }
    }

    // Padding goes between children, not after the last one.
    if !children.is_empty() {
        cursor -= padding;
    }
    let (w, h) = match axis {
        Axis::Vertical => (cross, cursor - y),
        Axis::Horizontal => (cursor - x, cross),
    };

    for &child in children {
        if let Some(node) = widgets.get_mut(child) {
            let r = node.base.rect;
            match axis {
                Axis::Vertical => super::expand(node, w, r.h),
                Axis::Horizontal => super::expand(node, r.w, h),
            }
        }
    }
    (w, h)
}

fn toolbar_layout(
    widgets: &mut WidgetArena,
    children: &[WidgetId],
    toolbar: &ToolBarLayout,
    x: i32,
    y: i32,
) -> (i32, i32) {
    let mut cury = y + 1;
    let mut w = if toolbar.name.is_empty() {
        2
    } else {
        text::width(&toolbar.name) + 4
    };

    for &child in children {
        if let Some(node) = widgets.get_mut(child) {
            node.base.move_to(x + 1, cury);
        }
        super::compute_size(widgets, child);
        if let Some(node) = widgets.get(child) {
            w = w.max(node.base.rect.w + 2);
            cury += node.base.rect.h;
        }
    }
    w = w.max(toolbar.fixed_width);
    let h = cury - y + 1;

    for &child in children {
        if let Some(node) = widgets.get_mut(child) {
            let ch = node.base.rect.h;
            super::expand(node, w - 2, ch);
        }
    }
    (w, h)
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/widgets/container.rs"]
mod tests;
