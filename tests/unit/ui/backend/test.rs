use super::*;
use crate::ui::core::geom::{Pos, Rect};
use crate::ui::core::style::{Color, Style};

#[test]
fn draw_text_clips_wide_glyphs_that_do_not_fit() {
    let mut buf = TestBuffer::new(Rect::new(0, 0, 1, 1));
    draw_text(&mut buf, Pos::new(0, 0), "👍", Style::default(), None);
    assert_eq!(buf.cell(0, 0).unwrap().symbol, " ");
}

#[test]
fn draw_text_starting_left_of_the_buffer_keeps_the_visible_tail() {
    let mut buf = TestBuffer::new(Rect::new(0, 0, 3, 1));
    draw_text(&mut buf, Pos::new(-2, 0), "abcde", Style::default(), None);
    assert_eq!(buf.row_text(0), "cde");
}

#[test]
fn fill_rect_clips_to_buffer_area() {
    let mut buf = TestBuffer::new(Rect::new(0, 0, 2, 2));
    buf.cell_mut(0, 0).unwrap().symbol = "A".to_string();
    fill_rect(&mut buf, Rect::new(-5, -5, 10, 10), Style::default());
    assert_eq!(buf.cell(0, 0).unwrap().symbol, " ");
}

#[test]
fn style_rect_preserves_existing_symbols_and_unset_channels() {
    let mut buf = TestBuffer::new(Rect::new(0, 0, 1, 1));
    buf.cell_mut(0, 0).unwrap().symbol = "A".to_string();
    style_rect(
        &mut buf,
        Rect::new(0, 0, 1, 1),
        Style::default().bg(Color::Indexed(4)),
    );
    style_rect(
        &mut buf,
        Rect::new(0, 0, 1, 1),
        Style::default().fg(Color::Indexed(2)),
    );
    let cell = buf.cell(0, 0).unwrap();
    assert_eq!(cell.symbol, "A");
    assert_eq!(cell.style.fg, Some(Color::Indexed(2)));
    assert_eq!(cell.style.bg, Some(Color::Indexed(4)));
}

#[test]
fn draw_hline_writes_characters() {
    let mut buf = TestBuffer::new(Rect::new(0, 0, 3, 1));
    draw_hline(&mut buf, Pos::new(0, 0), 3, '-', Style::default());
    assert_eq!(buf.row_text(0), "---");
}

#[test]
fn border_draws_corners_and_edges() {
    let mut buf = TestBuffer::new(Rect::new(0, 0, 4, 3));
    draw_border(&mut buf, Rect::new(0, 0, 4, 3), Style::default(), BorderKind::Plain);
    assert_eq!(buf.row_text(0), "┌──┐");
    assert_eq!(buf.row_text(1), "│  │");
    assert_eq!(buf.row_text(2), "└──┘");
}
