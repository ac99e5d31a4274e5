use super::*;

#[test]
fn scroll_by_reports_consumed_delta_at_edges() {
    let state = ScrollState::new(0.0);
    state.set_max_value(100.0);

    assert_eq!(state.scroll_by(-10.0), 0.0);
    assert_eq!(state.scroll_by(60.0), 60.0);
    assert_eq!(state.scroll_by(60.0), 40.0);
    assert_eq!(state.value(), 100.0);
    assert!(!state.can_scroll_forward());
    assert!(state.can_scroll_backward());
}

#[test]
fn shrinking_range_reclamps_value() {
    let state = ScrollState::new(80.0);
    state.set_max_value(30.0);
    assert_eq!(state.value(), 30.0);
    state.set_max_value(-5.0);
    assert_eq!(state.value(), 0.0);
}

#[test]
fn clones_share_position() {
    let state = ScrollState::new(0.0);
    state.set_max_value(50.0);
    let alias = state.clone();
    alias.scroll_to(25.0);
    assert_eq!(state.value(), 25.0);
    assert_eq!(state, alias);
    assert_ne!(state, ScrollState::new(0.0));
}
