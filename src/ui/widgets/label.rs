use compact_str::CompactString;

use super::base::WidgetBase;
use crate::ui::core::surface::{Alignment, BlendMode, Surface};
use crate::ui::core::text;

/// Static, non-interactive text on one row.
#[derive(Debug, Clone)]
pub struct Label {
    pub(crate) text: CompactString,
}

impl Label {
    pub(crate) fn new(text: &str) -> Self {
        Self {
            text: CompactString::new(text),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub(crate) fn compute_size(&self, base: &mut WidgetBase) {
        base.rect.w = text::width(&self.text).max(base.min_w);
        base.rect.h = 1;
    }

    pub(crate) fn render(&self, base: &WidgetBase, surface: &mut dyn Surface) {
        surface.set_default_background(base.colors.back);
        surface.set_default_foreground(base.colors.fore);
        surface.print(base.pos(), BlendMode::None, Alignment::Left, &self.text);
    }
}
