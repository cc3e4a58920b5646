//! The drawing contract widgets render against.
//!
//! Widgets never talk to a terminal directly: they issue grid-level calls on a
//! `Surface`, which carries a pair of default colors the way classic console
//! libraries do. `Canvas` is the painter-backed implementation shipped with the
//! crate; hosts may provide their own.

use super::color::Rgb;
use super::geom::{Pos, Rect};

/// How a drawing call treats the cell background.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BlendMode {
    /// Leave the background untouched.
    #[default]
    None,
    /// Overwrite the background with the default background color.
    Set,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Alignment {
    #[default]
    Left,
    /// Text is centered on the given column.
    Center,
    /// Text ends on the given column.
    Right,
}

pub trait Surface {
    fn width(&self) -> i32;

    fn height(&self) -> i32;

    fn default_foreground(&self) -> Rgb;

    fn default_background(&self) -> Rgb;

    fn set_default_foreground(&mut self, color: Rgb);

    fn set_default_background(&mut self, color: Rgb);

    /// Fill (`clear == true`) or recolor a rectangle with the default colors.
    fn rect(&mut self, rect: Rect, clear: bool, blend: BlendMode);

    fn hline(&mut self, pos: Pos, len: i32, blend: BlendMode);

    /// Replace a cell's glyph, keeping the default foreground.
    fn set_char(&mut self, pos: Pos, ch: char);

    fn put_char_ex(&mut self, pos: Pos, ch: char, fg: Rgb, bg: Rgb);

    /// Recolor a single cell without touching its glyph.
    fn set_cell_colors(&mut self, pos: Pos, fg: Rgb, bg: Rgb);

    fn print(&mut self, pos: Pos, blend: BlendMode, align: Alignment, text: &str);

    /// Word-wrap `text` into `rect`. Returns the number of lines produced.
    fn print_rect(&mut self, rect: Rect, blend: BlendMode, align: Alignment, text: &str) -> i32;

    /// Draw a bordered frame with an optional caption on its top edge.
    fn frame(&mut self, rect: Rect, clear: bool, blend: BlendMode, title: Option<&str>);
}
