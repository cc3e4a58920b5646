use super::*;
use crossterm::event::{
    Event, KeyEvent, KeyEventKind, KeyEventState, MouseButton, MouseEvent, MouseEventKind,
};

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: crossterm::event::KeyModifiers::NONE,
    })
}

#[test]
fn ctrl_space_normalizes_from_null() {
    let event = KeyEvent::new(
        crossterm::event::KeyCode::Null,
        crossterm::event::KeyModifiers::NONE,
    );
    let converted = into_key(event).unwrap();
    assert_eq!(converted.code, KeyCode::Char(' '));
    assert!(converted.modifiers.contains(KeyModifiers::CONTROL));
}

#[test]
fn key_releases_are_dropped() {
    let event = KeyEvent {
        code: crossterm::event::KeyCode::Char('a'),
        modifiers: crossterm::event::KeyModifiers::NONE,
        kind: KeyEventKind::Release,
        state: KeyEventState::NONE,
    };
    assert_eq!(into_key(event), None);
}

#[test]
fn insert_key_maps_through() {
    let event = KeyEvent::new(
        crossterm::event::KeyCode::Insert,
        crossterm::event::KeyModifiers::SHIFT,
    );
    let key = into_key(event).unwrap();
    assert_eq!(key.code, KeyCode::Insert);
    assert!(key.modifiers.contains(KeyModifiers::SHIFT));
}

#[test]
fn keys_are_handed_out_one_per_frame() {
    let mut input = CrosstermInput::new(8);
    for ch in ['a', 'b'] {
        input.handle_event(Event::Key(KeyEvent::new(
            crossterm::event::KeyCode::Char(ch),
            crossterm::event::KeyModifiers::NONE,
        )));
    }
    assert_eq!(input.next_key(), Key::char('a'));
    assert_eq!(input.next_key(), Key::char('b'));
    assert!(input.next_key().is_none());
}

#[test]
fn mouse_up_produces_a_one_shot_click_edge() {
    let mut input = CrosstermInput::new(8);
    input.handle_event(mouse(MouseEventKind::Down(MouseButton::Left), 3, 2));
    let sample = input.mouse();
    assert!(sample.lbutton);
    assert_eq!((sample.cx, sample.cy), (3, 2));
    assert_eq!((sample.x, sample.y), (24, 16));

    input.handle_event(mouse(MouseEventKind::Up(MouseButton::Left), 4, 2));
    let sample = input.mouse();
    assert!(!sample.lbutton);
    assert!(sample.lbutton_pressed);
    assert_eq!(sample.dcx, 1);

    assert!(!input.mouse().lbutton_pressed);
}

#[test]
fn warp_moves_the_logical_pointer() {
    let mut input = CrosstermInput::new(8);
    input.show_cursor(false);
    assert!(!input.is_cursor_visible());
    input.warp_cursor(40, 17);
    let sample = input.mouse();
    assert_eq!((sample.x, sample.y, sample.cx, sample.cy), (40, 17, 5, 2));
}
