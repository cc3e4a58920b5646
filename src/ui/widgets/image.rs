use super::base::WidgetBase;
use crate::ui::core::surface::{BlendMode, Surface};

/// A colored placeholder block, usually carrying a tooltip.
pub(crate) fn render(base: &WidgetBase, surface: &mut dyn Surface) {
    let (fore, back) = base.current_colors();
    surface.set_default_foreground(fore);
    surface.set_default_background(back);
    surface.rect(base.rect, true, BlendMode::Set);
}

pub(crate) fn expand(base: &mut WidgetBase, w: i32, h: i32) {
    base.grow_width(w);
    base.grow_height(h);
}
