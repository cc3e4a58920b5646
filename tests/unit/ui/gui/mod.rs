use super::*;
use crate::core::input::HeadlessInput;
use crate::ui::core::canvas::Canvas;
use crate::ui::core::color::Rgb;
use crate::ui::core::geom::Rect;
use crate::ui::core::surface::Surface;

#[test]
fn add_child_moves_the_widget_out_of_the_roots() {
    let mut gui = Gui::new();
    let vbox = gui.new_vbox(0, 0, None);
    let button = gui.new_button("ok", "");
    assert_eq!(gui.roots(), &[vbox, button]);

    gui.add_child(vbox, button).unwrap();
    assert_eq!(gui.roots(), &[vbox]);
    assert_eq!(gui.children(vbox), Some(&[button][..]));
    assert_eq!(gui.parent(button), Some(vbox));
}

#[test]
fn add_child_rejects_bad_targets() {
    let mut gui = Gui::new();
    let outer = gui.new_vbox(0, 0, None);
    let inner = gui.new_hbox(0, 0, None);
    let label = gui.new_label(0, 0, "x");
    let gone = gui.new_button("gone", "");
    gui.remove(gone).unwrap();

    assert_eq!(gui.add_child(label, inner), Err(GuiError::NotAContainer));
    assert_eq!(gui.add_child(outer, gone), Err(GuiError::InvalidWidget));
    assert_eq!(gui.add_child(gone, label), Err(GuiError::InvalidWidget));
    assert_eq!(gui.add_child(outer, outer), Err(GuiError::WouldCycle));

    gui.add_child(outer, inner).unwrap();
    assert_eq!(gui.add_child(inner, outer), Err(GuiError::WouldCycle));

    let other = gui.new_vbox(0, 0, None);
    assert_eq!(gui.add_child(other, inner), Err(GuiError::AlreadyAdopted));
}

#[test]
fn remove_drops_descendants_and_focus() {
    let mut gui = Gui::new();
    let vbox = gui.new_vbox(0, 0, None);
    let field = gui.new_text_box(0, 0, 8, 16, "", "");
    let radio = gui.new_radio_button("r", "");
    gui.add_child(vbox, field).unwrap();
    gui.add_child(vbox, radio).unwrap();
    gui.focus_keyboard(Some(field));
    gui.select_radio(radio);

    gui.remove(vbox).unwrap();

    assert!(!gui.contains(vbox));
    assert!(!gui.contains(field));
    assert!(!gui.contains(radio));
    assert_eq!(gui.keyboard_focused_widget(), None);
    assert_eq!(gui.radio_selection(0), None);
    assert!(gui.roots().is_empty());
    assert_eq!(gui.remove(vbox), Err(GuiError::InvalidWidget));
}

#[test]
fn remove_of_a_child_detaches_it_from_the_parent() {
    let mut gui = Gui::new();
    let vbox = gui.new_vbox(0, 0, None);
    let a = gui.new_button("a", "");
    let b = gui.new_button("b", "");
    gui.add_child(vbox, a).unwrap();
    gui.add_child(vbox, b).unwrap();

    gui.remove(a).unwrap();
    assert_eq!(gui.children(vbox), Some(&[b][..]));
}

#[test]
fn remove_child_keeps_the_widget_alive_but_detached() {
    let mut gui = Gui::new();
    let vbox = gui.new_vbox(0, 0, None);
    let field = gui.new_text_box(0, 0, 8, 16, "", "");
    gui.add_child(vbox, field).unwrap();
    gui.focus_keyboard(Some(field));

    gui.remove_child(vbox, field).unwrap();

    assert!(gui.contains(field));
    assert_eq!(gui.parent(field), None);
    assert!(!gui.roots().contains(&field));
    assert_eq!(gui.keyboard_focused_widget(), None);
    assert_eq!(gui.remove_child(vbox, field), Err(GuiError::InvalidWidget));

    gui.add_child(vbox, field).unwrap();
    assert_eq!(gui.children(vbox), Some(&[field][..]));
}

#[test]
fn clear_children_detaches_everything() {
    let mut gui = Gui::new();
    let hbox = gui.new_hbox(0, 0, None);
    let a = gui.new_button("a", "");
    let b = gui.new_button("b", "");
    gui.add_child(hbox, a).unwrap();
    gui.add_child(hbox, b).unwrap();

    gui.clear_children(hbox).unwrap();
    assert_eq!(gui.children(hbox), Some(&[][..]));
    assert_eq!(gui.parent(a), None);
    assert_eq!(gui.clear_children(a), Err(GuiError::NotAContainer));
}

#[test]
fn clear_children_resets_hover_and_button_state() {
    let mut gui = Gui::new();
    let hbox = gui.new_hbox(0, 0, None);
    let a = gui.new_button("a", "");
    gui.add_child(hbox, a).unwrap();

    let mut input = HeadlessInput::default();
    input.move_to(1, 0);
    gui.update_widgets(&mut input, Key::NONE);
    input.press_left();
    gui.update_widgets(&mut input, Key::NONE);
    assert!(gui.is_hovered(a));
    assert!(gui.widgets[a].base.mouse_l);

    gui.clear_children(hbox).unwrap();
    assert!(!gui.is_hovered(a));
    assert!(!gui.widgets[a].base.mouse_l);
    assert_eq!(gui.hovered_widget(), None);
}

#[test]
fn explicit_button_height_is_ignored() {
    let mut gui = Gui::new();
    let button = gui.new_button_at(Rect::new(2, 3, 10, 4), "ok", "");
    let mut input = HeadlessInput::default();
    input.move_to(70, 20);
    gui.update_widgets(&mut input, Key::NONE);
    assert_eq!(gui.bounds(button), Some(Rect::new(2, 3, 10, 1)));
}

#[test]
fn add_separator_to_a_non_container_leaves_nothing_behind() {
    let mut gui = Gui::new();
    let label = gui.new_label(0, 0, "x");
    assert_eq!(gui.add_separator(label, "sep", ""), Err(GuiError::NotAContainer));
    assert_eq!(gui.roots(), &[label]);

    let toolbar = gui.new_toolbar(0, 0, "Tools", "");
    let sep = gui.add_separator(toolbar, "sep", "").unwrap();
    assert_eq!(gui.children(toolbar), Some(&[sep][..]));
    assert_eq!(gui.label(sep), Some("sep"));
}

#[test]
fn update_sizes_a_vbox_of_two_and_three_rows_to_six() {
    let mut gui = Gui::new();
    let vbox = gui.new_vbox(0, 0, Some(1));
    let a = gui.new_image(Rect::new(0, 0, 4, 2), "");
    let b = gui.new_image(Rect::new(0, 0, 6, 3), "");
    gui.add_child(vbox, a).unwrap();
    gui.add_child(vbox, b).unwrap();

    let mut input = HeadlessInput::default();
    input.move_to(70, 20);
    gui.update_widgets(&mut input, Key::NONE);

    assert_eq!(gui.bounds(vbox), Some(Rect::new(0, 0, 6, 6)));
    assert_eq!(gui.bounds(a), Some(Rect::new(0, 0, 6, 2)));
    assert_eq!(gui.bounds(b).map(|r| (r.x, r.y)), Some((0, 3)));
}

#[test]
fn hidden_roots_are_neither_updated_nor_drawn() {
    let mut gui = Gui::new();
    let button = gui.new_button_at(Rect::new(0, 0, 6, 1), "hi", "tip");
    gui.set_visible(button, false);

    let mut input = HeadlessInput::default();
    input.move_to(1, 0);
    gui.update_widgets(&mut input, Key::NONE);
    assert!(!gui.is_hovered(button));

    let mut canvas = Canvas::new(20, 5);
    gui.render_widgets(&mut canvas);
    assert!(canvas.cmds().is_empty());
}

#[test]
fn render_restores_the_surface_default_colors() {
    let mut gui = Gui::new();
    gui.new_button("ok", "");
    let toolbar = gui.new_toolbar(0, 2, "Tools", "");
    let label = gui.new_label(0, 0, "inside");
    gui.add_child(toolbar, label).unwrap();

    let mut input = HeadlessInput::default();
    gui.update_widgets(&mut input, Key::NONE);

    let mut canvas = Canvas::new(40, 10);
    canvas.set_default_foreground(Rgb::new(1, 2, 3));
    canvas.set_default_background(Rgb::new(4, 5, 6));
    gui.render_widgets(&mut canvas);

    assert!(!canvas.cmds().is_empty());
    assert_eq!(canvas.default_foreground(), Rgb::new(1, 2, 3));
    assert_eq!(canvas.default_background(), Rgb::new(4, 5, 6));
}

#[test]
fn setters_ignore_the_wrong_widget_kind() {
    let mut gui = Gui::new();
    let button = gui.new_button("ok", "");
    gui.set_slider_value(button, 3.0);
    gui.set_text(button, "nope");
    gui.set_pressed(button, true);

    assert_eq!(gui.slider_value(button), None);
    assert_eq!(gui.text(button), None);
    assert_eq!(gui.is_pressed(button), Some(false));
}

#[test]
fn radio_buttons_join_the_current_default_group() {
    let mut gui = Gui::new();
    let a = gui.new_radio_button("a", "");
    gui.set_default_radio_group(4);
    let b = gui.new_radio_button("b", "");

    gui.select_radio(a);
    gui.select_radio(b);
    assert_eq!(gui.radio_selection(0), Some(a));
    assert_eq!(gui.radio_selection(4), Some(b));

    gui.set_radio_group(b, 0);
    assert_eq!(gui.radio_selection(4), None);
    gui.select_radio(b);
    assert_eq!(gui.is_radio_selected(a), Some(false));
    assert_eq!(gui.is_radio_selected(b), Some(true));
}

#[test]
fn settings_seed_the_defaults() {
    let mut settings = GuiSettings::default();
    settings.default_radio_group = 9;
    settings.caret_blink_delay = 0.25;
    settings.slider.format = "%q".to_string();
    settings.layout.default_padding = 2;

    let mut gui = Gui::with_settings(settings);
    assert_eq!(gui.default_radio_group(), 9);
    assert_eq!(gui.caret_blink_delay(), 0.25);

    let slider = gui.new_slider(0, 0, 8, 0.0, 1.0, "", "");
    assert_eq!(gui.text(slider), Some("0.50"));

    let vbox = gui.new_vbox(0, 0, None);
    let a = gui.new_label(0, 0, "a");
    let b = gui.new_label(0, 0, "b");
    gui.add_child(vbox, a).unwrap();
    gui.add_child(vbox, b).unwrap();
    let mut input = HeadlessInput::default();
    input.move_to(70, 20);
    gui.update_widgets(&mut input, Key::NONE);
    assert_eq!(gui.bounds(b).map(|r| r.y), Some(3));
}
