use super::*;
use slotmap::SlotMap;
use std::cell::RefCell;
use std::rc::Rc;

fn id() -> WidgetId {
    let mut map: SlotMap<WidgetId, ()> = SlotMap::with_key();
    map.insert(())
}

fn field(box_w: i32, max_len: usize) -> TextBox {
    TextBox::new("", "", box_w, max_len).0
}

fn type_str(field: &mut TextBox, id: WidgetId, s: &str) {
    for ch in s.chars() {
        field.handle_key(id, Key::char(ch), 0.0, 0.5);
    }
}

fn press(field: &mut TextBox, id: WidgetId, code: KeyCode) {
    field.handle_key(id, Key::simple(code), 0.0, 0.5);
}

#[test]
fn label_widens_the_widget() {
    let (field, w) = TextBox::new("Name", "bob", 10, 20);
    assert_eq!(w, 10 + 4 + 1);
    assert_eq!(field.text(), "bob");

    let (_, w) = TextBox::new("", "", 10, 20);
    assert_eq!(w, 10);
}

#[test]
fn initial_value_is_truncated_to_max_len() {
    let (field, _) = TextBox::new("", "abcdefgh", 10, 5);
    assert_eq!(field.text(), "abcde");
}

#[test]
fn typing_appends_and_advances_the_caret() {
    let id = id();
    let mut f = field(10, 20);
    type_str(&mut f, id, "hello");
    assert_eq!(f.text(), "hello");
    assert_eq!(f.caret(), 5);
}

#[test]
fn typing_past_max_len_is_ignored() {
    let id = id();
    let mut f = field(10, 3);
    type_str(&mut f, id, "abcdef");
    assert_eq!(f.text(), "abc");
    assert_eq!(f.caret(), 3);
}

#[test]
fn overwrite_mode_replaces_under_the_caret() {
    let id = id();
    let mut f = field(10, 20);
    type_str(&mut f, id, "abc");
    press(&mut f, id, KeyCode::Home);
    type_str(&mut f, id, "X");
    assert_eq!(f.text(), "Xbc");
    assert_eq!(f.caret(), 1);
}

#[test]
fn insert_mode_shifts_the_tail() {
    let id = id();
    let mut f = field(10, 20);
    type_str(&mut f, id, "abc");
    press(&mut f, id, KeyCode::Insert);
    assert!(f.is_insert_mode());
    press(&mut f, id, KeyCode::Left);
    type_str(&mut f, id, "X");
    assert_eq!(f.text(), "abXc");
    assert_eq!(f.caret(), 3);

    press(&mut f, id, KeyCode::Insert);
    assert!(!f.is_insert_mode());
}

#[test]
fn insert_mode_in_a_full_field_is_ignored() {
    let id = id();
    let mut f = field(10, 3);
    type_str(&mut f, id, "abc");
    press(&mut f, id, KeyCode::Insert);
    press(&mut f, id, KeyCode::Home);
    type_str(&mut f, id, "X");
    assert_eq!(f.text(), "abc");
    assert_eq!(f.caret(), 0);
}

#[test]
fn backspace_and_delete_remove_around_the_caret() {
    let id = id();
    let mut f = field(10, 20);
    type_str(&mut f, id, "abcd");
    press(&mut f, id, KeyCode::Backspace);
    assert_eq!(f.text(), "abc");
    assert_eq!(f.caret(), 3);

    press(&mut f, id, KeyCode::Home);
    press(&mut f, id, KeyCode::Delete);
    assert_eq!(f.text(), "bc");
    assert_eq!(f.caret(), 0);

    press(&mut f, id, KeyCode::Backspace);
    assert_eq!(f.text(), "bc");
}

#[test]
fn caret_stays_inside_the_visible_window() {
    let id = id();
    let mut f = field(3, 20);
    type_str(&mut f, id, "abcdef");
    assert_eq!(f.caret(), 6);
    assert_eq!(f.scroll_offset(), 4);

    for _ in 0..6 {
        press(&mut f, id, KeyCode::Left);
        let (caret, offset) = (f.caret(), f.scroll_offset());
        assert!(offset <= caret && caret < offset + 3, "caret {caret} offset {offset}");
    }
    assert_eq!(f.scroll_offset(), 0);
}

#[test]
fn edits_fire_the_callback_and_moves_do_not() {
    let id = id();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    let mut f = field(10, 20);
    f.callback = Some(Box::new(move |_, text| sink.borrow_mut().push(text.to_string())));

    type_str(&mut f, id, "ab");
    press(&mut f, id, KeyCode::Left);
    press(&mut f, id, KeyCode::Backspace);

    assert_eq!(*seen.borrow(), vec!["a", "ab", "b"]);
}

#[test]
fn blink_wraps_after_one_full_period() {
    let id = id();
    let mut f = field(10, 20);
    f.handle_key(id, Key::NONE, 0.3, 0.5);
    assert!(f.blink < 0.0);
    f.handle_key(id, Key::NONE, 0.3, 0.5);
    assert!((f.blink - 0.4).abs() < 1e-5);

    f.handle_key(id, Key::char('x'), 0.3, 0.5);
    assert_eq!(f.blink, 0.5);
}

#[test]
fn set_text_truncates_and_clamps_the_caret() {
    let id = id();
    let mut f = field(10, 4);
    type_str(&mut f, id, "abcd");
    f.set_text("xy");
    assert_eq!(f.caret(), 2);
    f.set_text("123456");
    assert_eq!(f.text(), "1234");
}

#[test]
fn control_chords_are_not_typed() {
    let id = id();
    let mut f = field(10, 20);
    f.handle_key(id, Key::ctrl(KeyCode::Char('c')), 0.0, 0.5);
    assert_eq!(f.text(), "");
}
