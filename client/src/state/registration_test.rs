use super::*;

#[test]
fn toggle_item_is_a_symmetric_set_toggle() {
    let mut state = RegistrationState::default();

    state.toggle_item(3);
    assert!(state.has_item(3));

    state.toggle_item(3);
    assert!(!state.has_item(3));
    assert!(state.selected_items.is_empty());
}

#[test]
fn toggle_item_keeps_other_selections() {
    let mut state = RegistrationState::default();
    state.toggle_item(1);
    state.toggle_item(2);
    state.toggle_item(6);

    state.toggle_item(2);
    assert_eq!(state.selected_items, vec![1, 6]);
}

#[test]
fn select_uf_clears_the_previous_city() {
    let mut state = RegistrationState::default();
    state.select_uf("SC".to_owned());
    state.select_city("Joinville".to_owned());

    state.select_uf("SP".to_owned());
    assert_eq!(state.uf, "SP");
    assert!(state.city.is_empty());
}

#[test]
fn reselecting_the_same_uf_keeps_the_city() {
    let mut state = RegistrationState::default();
    state.select_uf("SC".to_owned());
    state.select_city("Joinville".to_owned());

    state.select_uf("SC".to_owned());
    assert_eq!(state.city, "Joinville");
}

#[test]
fn last_map_click_wins() {
    let mut state = RegistrationState::default();
    state.select_position(-26.1, -49.1);
    state.select_position(-26.2, -49.2);
    assert_eq!(state.position, Some((-26.2, -49.2)));
}
