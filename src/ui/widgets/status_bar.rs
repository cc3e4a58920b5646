use super::base::WidgetBase;
use crate::ui::core::geom::Rect;
use crate::ui::core::surface::{Alignment, BlendMode, Surface};

/// Shows the tooltip of whatever widget the pointer is over.
pub(crate) fn render(base: &WidgetBase, hover_tip: Option<&str>, surface: &mut dyn Surface) {
    let r = base.rect;
    surface.set_default_background(base.colors.back);
    surface.rect(r, true, BlendMode::Set);

    let Some(tip) = hover_tip.filter(|tip| !tip.is_empty()) else {
        return;
    };
    surface.set_default_foreground(base.colors.fore);
    surface.print_rect(
        Rect::new(r.x + 1, r.y, (r.w - 1).max(0), r.h),
        BlendMode::None,
        Alignment::Left,
        tip,
    );
}
