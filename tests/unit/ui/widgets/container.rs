use super::*;
use crate::ui::core::geom::Rect;
use crate::ui::widgets::base::WidgetColors;
use crate::ui::widgets::button::{Button, ButtonRole};
use crate::ui::widgets::{compute_size, WidgetKind, WidgetNode};

fn node(rect: Rect, kind: WidgetKind) -> WidgetNode {
    WidgetNode::new(WidgetBase::new(rect, WidgetColors::default()), kind)
}

fn button(widgets: &mut WidgetArena, label: &str, h: i32) -> WidgetId {
    widgets.insert(node(
        Rect::new(0, 0, 0, h),
        WidgetKind::Button(Button::new(label, ButtonRole::Push)),
    ))
}

fn block(widgets: &mut WidgetArena, w: i32, h: i32) -> WidgetId {
    widgets.insert(node(Rect::new(0, 0, w, h), WidgetKind::Image))
}

fn container(
    widgets: &mut WidgetArena,
    rect: Rect,
    layout: Layout,
    children: &[WidgetId],
) -> WidgetId {
    let mut c = Container::new(layout);
    c.children = children.to_vec();
    widgets.insert(node(rect, WidgetKind::Container(c)))
}

fn rect(widgets: &WidgetArena, id: WidgetId) -> Rect {
    widgets[id].base.rect
}

#[test]
fn vbox_pads_between_children_only() {
    let mut widgets = WidgetArena::with_key();
    let a = block(&mut widgets, 4, 2);
    let b = block(&mut widgets, 8, 3);
    let vbox = container(&mut widgets, Rect::new(5, 1, 0, 0), Layout::VBox { padding: 1 }, &[a, b]);

    compute_size(&mut widgets, vbox);

    assert_eq!(rect(&widgets, vbox), Rect::new(5, 1, 8, 6));
    assert_eq!(rect(&widgets, a), Rect::new(5, 1, 8, 2));
    assert_eq!(rect(&widgets, b), Rect::new(5, 4, 8, 3));
}

#[test]
fn hbox_lays_out_left_to_right() {
    let mut widgets = WidgetArena::with_key();
    let a = block(&mut widgets, 4, 1);
    let b = block(&mut widgets, 8, 2);
    let hbox = container(&mut widgets, Rect::new(0, 0, 0, 0), Layout::HBox { padding: 2 }, &[a, b]);

    compute_size(&mut widgets, hbox);

    assert_eq!(rect(&widgets, hbox), Rect::new(0, 0, 14, 2));
    assert_eq!(rect(&widgets, a).x, 0);
    assert_eq!(rect(&widgets, b).x, 6);
}

#[test]
fn empty_box_has_no_size() {
    let mut widgets = WidgetArena::with_key();
    let vbox = container(&mut widgets, Rect::new(3, 3, 0, 0), Layout::VBox { padding: 4 }, &[]);
    compute_size(&mut widgets, vbox);
    assert_eq!(rect(&widgets, vbox), Rect::new(3, 3, 0, 0));
}

#[test]
fn hidden_children_take_no_space() {
    let mut widgets = WidgetArena::with_key();
    let a = button(&mut widgets, "a", 1);
    let b = button(&mut widgets, "b", 1);
    let c = button(&mut widgets, "c", 1);
    widgets[b].base.visible = false;
    let vbox = container(&mut widgets, Rect::default(), Layout::VBox { padding: 0 }, &[a, b, c]);

    compute_size(&mut widgets, vbox);

    assert_eq!(rect(&widgets, vbox).h, 2);
    assert_eq!(rect(&widgets, c).y, 1);
}

#[test]
fn nested_boxes_size_bottom_up() {
    let mut widgets = WidgetArena::with_key();
    let a = button(&mut widgets, "a", 1);
    let b = button(&mut widgets, "b", 1);
    let column = container(&mut widgets, Rect::default(), Layout::VBox { padding: 0 }, &[a, b]);
    let c = button(&mut widgets, "wide one", 1);
    let row = container(&mut widgets, Rect::new(2, 2, 0, 0), Layout::HBox { padding: 1 }, &[column, c]);

    compute_size(&mut widgets, row);

    assert_eq!(rect(&widgets, column), Rect::new(2, 2, 3, 2));
    assert_eq!(rect(&widgets, c), Rect::new(6, 2, 10, 1));
    assert_eq!(rect(&widgets, row), Rect::new(2, 2, 14, 2));
}

#[test]
fn toolbar_frames_its_children() {
    let mut widgets = WidgetArena::with_key();
    let a = button(&mut widgets, "a", 1);
    let b = button(&mut widgets, "b", 1);
    let tb = container(
        &mut widgets,
        Rect::new(10, 0, 0, 0),
        Layout::ToolBar(ToolBarLayout::new("Tools", None)),
        &[a, b],
    );

    compute_size(&mut widgets, tb);

    assert_eq!(rect(&widgets, tb), Rect::new(10, 0, 9, 4));
    assert_eq!(rect(&widgets, a), Rect::new(11, 1, 7, 1));
    assert_eq!(rect(&widgets, b), Rect::new(11, 2, 7, 1));
}

#[test]
fn toolbar_width_never_drops_below_the_requested_width() {
    let mut widgets = WidgetArena::with_key();
    let a = button(&mut widgets, "a", 1);
    let tb = container(
        &mut widgets,
        Rect::default(),
        Layout::ToolBar(ToolBarLayout::new("T", Some(20))),
        &[a],
    );
    compute_size(&mut widgets, tb);
    assert_eq!(rect(&widgets, tb).w, 20);
    assert_eq!(rect(&widgets, a).w, 18);
}

#[test]
fn toolbar_widths_fit_the_name() {
    let toolbar = ToolBarLayout::new("Palette", Some(3));
    assert_eq!(toolbar.fixed_width, 11);
    assert_eq!(ToolBarLayout::new("Palette", None).initial_width(), 11);

    let mut toolbar = ToolBarLayout::new("a", Some(6));
    toolbar.set_name("much longer");
    assert_eq!(toolbar.fixed_width, 15);
}

#[test]
fn free_container_keeps_child_positions() {
    let mut widgets = WidgetArena::with_key();
    let a = button(&mut widgets, "abc", 1);
    widgets[a].base.move_to(7, 9);
    let free = container(&mut widgets, Rect::new(0, 0, 40, 20), Layout::Free, &[a]);

    compute_size(&mut widgets, free);

    assert_eq!(rect(&widgets, a), Rect::new(7, 9, 5, 1));
    assert_eq!(rect(&widgets, free), Rect::new(0, 0, 40, 20));
}

#[test]
fn buttons_stay_one_row_inside_a_box() {
    let mut widgets = WidgetArena::with_key();
    let a = button(&mut widgets, "ok", 3);
    let vbox = container(&mut widgets, Rect::default(), Layout::VBox { padding: 0 }, &[a]);

    compute_size(&mut widgets, vbox);

    assert_eq!(rect(&widgets, a).h, 1);
    assert_eq!(rect(&widgets, vbox).h, 1);
}
