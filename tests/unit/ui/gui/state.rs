use super::*;
use slotmap::SlotMap;

fn ids(n: usize) -> Vec<WidgetId> {
    let mut map: SlotMap<WidgetId, ()> = SlotMap::with_key();
    (0..n).map(|_| map.insert(())).collect()
}

#[test]
fn selecting_displaces_the_previous_member_of_the_group() {
    let ids = ids(2);
    let mut groups = RadioGroups::default();
    groups.select(3, ids[0]);
    groups.select(3, ids[1]);
    assert!(groups.is_selected(3, ids[1]));
    assert!(!groups.is_selected(3, ids[0]));
}

#[test]
fn groups_are_independent() {
    let ids = ids(2);
    let mut groups = RadioGroups::default();
    groups.select(0, ids[0]);
    groups.select(700, ids[1]);
    assert_eq!(groups.selected(0), Some(ids[0]));
    assert_eq!(groups.selected(700), Some(ids[1]));

    groups.unselect_group(0);
    assert_eq!(groups.selected(0), None);
    assert_eq!(groups.selected(700), Some(ids[1]));
}

#[test]
fn unselect_only_clears_its_own_selection() {
    let ids = ids(2);
    let mut groups = RadioGroups::default();
    groups.select(1, ids[0]);
    groups.unselect(1, ids[1]);
    assert_eq!(groups.selected(1), Some(ids[0]));
    groups.unselect(1, ids[0]);
    assert_eq!(groups.selected(1), None);
}

#[test]
fn forgetting_a_widget_clears_focus_and_selection() {
    let ids = ids(1);
    let mut state = GuiState::new(CaretBlink::default(), 8);
    state.hover = Some(ids[0]);
    state.set_keyboard_focus(Some(ids[0]));
    state.radio.select(2, ids[0]);

    state.forget(ids[0]);
    assert_eq!(state.hover, None);
    assert_eq!(state.keyboard, None);
    assert_eq!(state.radio.selected(2), None);
}

#[test]
fn caret_delay_is_never_negative() {
    let mut caret = CaretBlink::new(-1.0);
    assert_eq!(caret.delay(), 0.0);
    caret.set_delay(0.25);
    assert_eq!(caret.delay(), 0.25);
}
