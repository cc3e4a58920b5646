use super::*;

fn slider(min: f32, max: f32) -> Slider {
    Slider::new("", 8, min, max, 10, ValueFormat::default(), 1.0).0
}

#[test]
fn starts_in_the_middle_with_formatted_text() {
    let s = slider(0.0, 10.0);
    assert_eq!(s.value(), 5.0);
    assert_eq!(s.text(), "5.00");
}

#[test]
fn width_counts_label_box_and_arrows() {
    let (_, w) = Slider::new("Val", 6, 0.0, 1.0, 10, ValueFormat::default(), 1.0);
    assert_eq!(w, 3 + 1 + 6 + ARROWS_W);
}

#[test]
fn set_value_clamps_into_range() {
    let mut s = slider(0.0, 10.0);
    s.set_value(20.0);
    assert_eq!(s.value(), 10.0);
    assert_eq!(s.text(), "10.00");
    s.set_value(-3.0);
    assert_eq!(s.value(), 0.0);
}

#[test]
fn value_carries_the_precision_of_its_text() {
    let mut s = slider(0.0, 10.0);
    s.set_value(3.14159);
    assert_eq!(s.text(), "3.14");
    assert!((s.value() - 3.14).abs() < 1e-6);
}

#[test]
fn malformed_text_reads_as_zero_then_clamps() {
    let mut s = slider(1.0, 10.0);
    s.field.set_text("abc");
    s.text_to_value();
    assert_eq!(s.value(), 1.0);

    let mut s = slider(-5.0, 5.0);
    s.field.set_text("nope");
    s.text_to_value();
    assert_eq!(s.value(), 0.0);
}

#[test]
fn narrowing_the_range_reclamps_the_value() {
    let mut s = slider(0.0, 10.0);
    s.set_min_max(0.0, 2.0);
    assert_eq!(s.value(), 2.0);
    assert_eq!(s.range(), (0.0, 2.0));
    assert_eq!(s.text(), "2.00");
}

#[test]
fn inverted_range_still_clamps() {
    let mut s = slider(10.0, 0.0);
    s.set_value(20.0);
    assert_eq!(s.value(), 10.0);
    s.set_value(-1.0);
    assert_eq!(s.value(), 0.0);
}

#[test]
fn changing_the_format_rewrites_the_text() {
    let mut s = slider(0.0, 10.0);
    s.set_format("%d".parse().unwrap());
    assert_eq!(s.text(), "5");
    s.set_format("v=%.1f".parse().unwrap());
    assert_eq!(s.text(), "v=5.0");
    assert_eq!(s.value(), 5.0);
}

#[test]
fn formatted_text_longer_than_the_field_keeps_its_value() {
    let mut s = slider(0.0, 100.0);
    s.set_format("%.2f units".parse().unwrap());
    s.set_value(50.0);
    assert_eq!(s.text(), "50.00 units");
    assert_eq!(s.value(), 50.0);
    assert!(s.field.max_len() >= s.text().chars().count());

    s.set_value(100.0);
    assert_eq!(s.text(), "100.00 units");
    assert_eq!(s.value(), 100.0);
}
