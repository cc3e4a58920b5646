use super::color::Rgb;
use super::geom::{Pos, Rect};
use super::painter::{BorderKind, PaintCmd, Painter};
use super::style::Style;
use super::surface::{Alignment, BlendMode, Surface};
use super::text;

/// A `Surface` that records into a `Painter`. Hand the commands to a
/// `Backend` once the frame is rendered.
#[derive(Debug)]
pub struct Canvas {
    painter: Painter,
    width: i32,
    height: i32,
    fore: Rgb,
    back: Rgb,
}

impl Canvas {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            painter: Painter::new(),
            width,
            height,
            fore: Rgb::WHITE,
            back: Rgb::BLACK,
        }
    }

    pub fn area(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }

    pub fn resize(&mut self, width: i32, height: i32) {
        self.width = width;
        self.height = height;
    }

    pub fn cmds(&self) -> &[PaintCmd] {
        self.painter.cmds()
    }

    pub fn clear(&mut self) {
        self.painter.clear();
    }

    fn fg_style(&self) -> Style {
        Style::default().fg(self.fore)
    }

    fn blend_style(&self, blend: BlendMode) -> Style {
        match blend {
            BlendMode::None => self.fg_style(),
            BlendMode::Set => self.fg_style().bg(self.back),
        }
    }
}

fn aligned_x(x: i32, align: Alignment, w: i32) -> i32 {
    match align {
        Alignment::Left => x,
        Alignment::Center => x - w / 2,
        Alignment::Right => x - w + 1,
    }
}

impl Surface for Canvas {
    fn width(&self) -> i32 {
        self.width
    }

    fn height(&self) -> i32 {
        self.height
    }

    fn default_foreground(&self) -> Rgb {
        self.fore
    }

    fn default_background(&self) -> Rgb {
        self.back
    }

    fn set_default_foreground(&mut self, color: Rgb) {
        self.fore = color;
    }

    fn set_default_background(&mut self, color: Rgb) {
        self.back = color;
    }

    fn rect(&mut self, rect: Rect, clear: bool, blend: BlendMode) {
        if rect.is_empty() {
            return;
        }
        match (clear, blend) {
            (true, blend) => self.painter.fill_rect(rect, self.blend_style(blend)),
            (false, BlendMode::Set) => self
                .painter
                .style_rect(rect, Style::default().bg(self.back)),
            (false, BlendMode::None) => {}
        }
    }

    fn hline(&mut self, pos: Pos, len: i32, blend: BlendMode) {
        self.painter.hline(pos, len, '─', self.blend_style(blend));
    }

    fn set_char(&mut self, pos: Pos, ch: char) {
        self.painter.char(pos, ch, self.fg_style());
    }

    fn put_char_ex(&mut self, pos: Pos, ch: char, fg: Rgb, bg: Rgb) {
        self.painter.char(pos, ch, Style::default().fg(fg).bg(bg));
    }

    fn set_cell_colors(&mut self, pos: Pos, fg: Rgb, bg: Rgb) {
        self.painter
            .style_rect(Rect::new(pos.x, pos.y, 1, 1), Style::default().fg(fg).bg(bg));
    }

    fn print(&mut self, pos: Pos, blend: BlendMode, align: Alignment, text: &str) {
        if text.is_empty() {
            return;
        }
        let x = aligned_x(pos.x, align, text::width(text));
        self.painter
            .text(Pos::new(x, pos.y), text, self.blend_style(blend));
    }

    fn print_rect(&mut self, rect: Rect, blend: BlendMode, align: Alignment, text: &str) -> i32 {
        let lines = text::wrap(text, rect.w.max(0) as usize);
        let style = self.blend_style(blend);
        for (row, line) in lines.iter().enumerate() {
            let y = rect.y + row as i32;
            if rect.h > 0 && y >= rect.bottom() {
                break;
            }
            let w = text::width(line);
            let x = match align {
                Alignment::Left => rect.x,
                Alignment::Center => rect.x + (rect.w - w) / 2,
                Alignment::Right => rect.right() - w,
            };
            self.painter
                .text_clipped(Pos::new(x, y), line.as_str(), style, rect);
        }
        lines.len() as i32
    }

    fn frame(&mut self, rect: Rect, clear: bool, blend: BlendMode, title: Option<&str>) {
        if rect.is_empty() {
            return;
        }
        if clear {
            self.painter.fill_rect(rect, self.blend_style(blend));
        }
        self.painter
            .border(rect, self.blend_style(blend), BorderKind::Plain);

        let Some(title) = title.filter(|t| !t.is_empty()) else {
            return;
        };
        let caption = format!(" {title} ");
        let x = rect.x + (rect.w - text::width(&caption)) / 2;
        let style = Style::default().fg(self.back).bg(self.fore);
        self.painter
            .text_clipped(Pos::new(x, rect.y), caption, style, rect);
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/canvas.rs"]
mod tests;
