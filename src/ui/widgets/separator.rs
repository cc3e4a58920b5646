use compact_str::CompactString;

use super::base::WidgetBase;
use crate::ui::core::geom::Pos;
use crate::ui::core::surface::{Alignment, BlendMode, Surface};
use crate::ui::core::text;

const TEE_EAST: char = '├';
const TEE_WEST: char = '┤';

/// Horizontal rule with a caption, typically inside a toolbar.
#[derive(Debug, Clone)]
pub struct Separator {
    pub(crate) caption: CompactString,
}

impl Separator {
    pub(crate) fn new(caption: &str) -> Self {
        Self {
            caption: CompactString::new(caption),
        }
    }

    pub fn caption(&self) -> &str {
        &self.caption
    }

    pub(crate) fn compute_size(&self, base: &mut WidgetBase) {
        base.rect.w = if self.caption.is_empty() {
            0
        } else {
            text::width(&self.caption) + 2
        };
        base.rect.h = 1;
    }

    pub(crate) fn render(&self, base: &WidgetBase, surface: &mut dyn Surface) {
        let r = base.rect;
        surface.set_default_background(base.colors.back);
        surface.set_default_foreground(base.colors.fore);
        surface.hline(base.pos(), r.w, BlendMode::Set);
        surface.set_char(Pos::new(r.x - 1, r.y), TEE_EAST);
        surface.set_char(Pos::new(r.right(), r.y), TEE_WEST);

        if self.caption.is_empty() {
            return;
        }
        surface.set_default_background(base.colors.fore);
        surface.set_default_foreground(base.colors.back);
        surface.print(
            Pos::new(r.x + r.w / 2, r.y),
            BlendMode::Set,
            Alignment::Center,
            &format!(" {} ", self.caption),
        );
    }
}
