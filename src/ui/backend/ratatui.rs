use crate::ui::backend::Backend;
use crate::ui::core::geom::{Pos, Rect};
use crate::ui::core::painter::{BorderKind, PaintCmd};
use crate::ui::core::style::{Color, Style};
use ratatui::backend::CrosstermBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect as RRect;
use ratatui::style::{Color as RColor, Style as RStyle};
use ratatui::widgets::Widget;
use ratatui::Frame;
use ratatui::Terminal;
use std::io;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

pub struct RatatuiBackend<'a, 'f> {
    frame: &'a mut Frame<'f>,
}

impl<'a, 'f> RatatuiBackend<'a, 'f> {
    pub fn new(frame: &'a mut Frame<'f>) -> Self {
        Self { frame }
    }
}

impl From<RRect> for Rect {
    fn from(r: RRect) -> Self {
        Rect::new(
            i32::from(r.x),
            i32::from(r.y),
            i32::from(r.width),
            i32::from(r.height),
        )
    }
}

fn to_ratatui_rect(r: Rect) -> RRect {
    let r = r.intersect(Rect::new(0, 0, i32::from(u16::MAX), i32::from(u16::MAX)));
    RRect {
        x: r.x as u16,
        y: r.y as u16,
        width: r.w as u16,
        height: r.h as u16,
    }
}

impl Backend for RatatuiBackend<'_, '_> {
    fn draw(&mut self, area: Rect, cmds: &[PaintCmd]) {
        let widget = PaintWidget { cmds };
        self.frame.render_widget(widget, to_ratatui_rect(area));
    }
}

/// Opaque terminal wrapper so the rest of the crate does not need to reference `ratatui` types.
pub struct RatatuiTerminal {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl RatatuiTerminal {
    pub fn new(stdout: io::Stdout) -> io::Result<Self> {
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(Self { terminal })
    }

    pub fn draw<F>(&mut self, f: F) -> io::Result<()>
    where
        F: FnOnce(&mut dyn Backend, Rect),
    {
        self.terminal.draw(|frame| {
            let area: Rect = frame.area().into();
            let mut backend = RatatuiBackend::new(frame);
            f(&mut backend, area);
        })?;
        Ok(())
    }
}

struct PaintWidget<'a> {
    cmds: &'a [PaintCmd],
}

impl Widget for PaintWidget<'_> {
    fn render(self, _area: RRect, buf: &mut Buffer) {
        for cmd in self.cmds {
            match cmd {
                PaintCmd::FillRect { rect, style } => fill_rect(buf, *rect, *style),
                PaintCmd::StyleRect { rect, style } => style_rect(buf, *rect, *style),
                PaintCmd::HLine { pos, len, ch, style } => draw_hline(buf, *pos, *len, *ch, *style),
                PaintCmd::Char { pos, ch, style } => {
                    if let Some(cell) = cell_mut(buf, pos.x, pos.y) {
                        cell.set_char(*ch).set_style(to_ratatui_style(*style));
                    }
                }
                PaintCmd::Text {
                    pos,
                    text,
                    style,
                    clip,
                } => draw_text(buf, *pos, text, *style, *clip),
                PaintCmd::Border { rect, style, kind } => draw_border(buf, *rect, *style, *kind),
            }
        }
    }
}

fn buffer_area(buf: &Buffer) -> Rect {
    buf.area.into()
}

fn cell_mut(buf: &mut Buffer, x: i32, y: i32) -> Option<&mut ratatui::buffer::Cell> {
    let x = u16::try_from(x).ok()?;
    let y = u16::try_from(y).ok()?;
    buf.cell_mut((x, y))
}

fn to_ratatui_style(s: Style) -> RStyle {
    let mut out = RStyle::default();
    if let Some(fg) = s.fg {
        out = out.fg(to_ratatui_color(fg));
    }
    if let Some(bg) = s.bg {
        out = out.bg(to_ratatui_color(bg));
    }
    out
}

fn to_ratatui_color(c: Color) -> RColor {
    match c {
        Color::Reset => RColor::Reset,
        Color::Rgb(r, g, b) => RColor::Rgb(r, g, b),
        Color::Indexed(i) => RColor::Indexed(i),
    }
}

fn fill_rect(buf: &mut Buffer, rect: Rect, style: Style) {
    let clip = rect.intersect(buffer_area(buf));
    let style = to_ratatui_style(style);
    for y in clip.y..clip.bottom() {
        for x in clip.x..clip.right() {
            if let Some(cell) = cell_mut(buf, x, y) {
                cell.set_char(' ').set_style(style);
            }
        }
    }
}

fn style_rect(buf: &mut Buffer, rect: Rect, style: Style) {
    let clip = rect.intersect(buffer_area(buf));
    let style = to_ratatui_style(style);
    for y in clip.y..clip.bottom() {
        for x in clip.x..clip.right() {
            if let Some(cell) = cell_mut(buf, x, y) {
                cell.set_style(style);
            }
        }
    }
}

fn draw_hline(buf: &mut Buffer, pos: Pos, len: i32, ch: char, style: Style) {
    let clip = Rect::new(pos.x, pos.y, len, 1).intersect(buffer_area(buf));
    let style = to_ratatui_style(style);
    for x in clip.x..clip.right() {
        if let Some(cell) = cell_mut(buf, x, clip.y) {
            cell.set_char(ch).set_style(style);
        }
    }
}

fn draw_text(buf: &mut Buffer, pos: Pos, text: &str, style: Style, clip: Option<Rect>) {
    let area = buffer_area(buf);
    let clip = clip.unwrap_or(area).intersect(area);
    if clip.is_empty() || pos.y < clip.y || pos.y >= clip.bottom() {
        return;
    }
    let style = to_ratatui_style(style);
    let mut x = pos.x;
    for g in text.graphemes(true) {
        let w = UnicodeWidthStr::width(g) as i32;
        if w == 0 {
            continue;
        }
        if x >= clip.right() {
            break;
        }
        // Do not partially render wide glyphs.
        if w > 1 && x + w - 1 >= clip.right() {
            break;
        }
        if x >= clip.x {
            if let Some(cell) = cell_mut(buf, x, pos.y) {
                cell.set_symbol(g).set_style(style);
            }
            // Basic wide-char handling: occupy next cells as spaces.
            for dx in 1..w {
                if let Some(cell) = cell_mut(buf, x + dx, pos.y) {
                    cell.set_char(' ').set_style(style);
                }
            }
        }
        x += w;
    }
}

fn draw_border(buf: &mut Buffer, rect: Rect, style: Style, kind: BorderKind) {
    if rect.w < 2 || rect.h < 2 {
        return;
    }

    let style = to_ratatui_style(style);
    let right = rect.right() - 1;
    let bottom = rect.bottom() - 1;

    let (tl, tr, bl, br, h, v) = match kind {
        BorderKind::Plain => ('┌', '┐', '└', '┘', '─', '│'),
    };

    let mut put = |x: i32, y: i32, ch: char| {
        if let Some(cell) = cell_mut(buf, x, y) {
            cell.set_char(ch).set_style(style);
        }
    };

    put(rect.x, rect.y, tl);
    put(right, rect.y, tr);
    put(rect.x, bottom, bl);
    put(right, bottom, br);
    for x in rect.x + 1..right {
        put(x, rect.y, h);
        put(x, bottom, h);
    }
    for y in rect.y + 1..bottom {
        put(rect.x, y, v);
        put(right, y, v);
    }
}

// Backend-specific behavior is covered through `TestBackend`, which mirrors these routines.
