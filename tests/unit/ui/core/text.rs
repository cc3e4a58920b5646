use super::*;

#[test]
fn width_counts_cells_not_bytes() {
    assert_eq!(width("OK"), 2);
    assert_eq!(width("é"), 1);
    assert_eq!(width(""), 0);
}

#[test]
fn truncate_to_width_stops_on_char_boundary() {
    assert_eq!(truncate_to_width("hello", 3), 3);
    assert_eq!(truncate_to_width("héllo", 2), 3);
    assert_eq!(truncate_to_width("abc", 0), 0);
}

#[test]
fn wrap_breaks_between_words() {
    assert_eq!(wrap("status bar tip", 10), vec!["status bar", "tip"]);
}

#[test]
fn wrap_splits_words_longer_than_the_line() {
    assert_eq!(wrap("abcdefgh", 3), vec!["abc", "def", "gh"]);
}

#[test]
fn wrap_honours_explicit_newlines() {
    assert_eq!(wrap("a\nb c", 10), vec!["a", "b c"]);
}
