use super::*;

// =============================================================
// Construction
// =============================================================

#[test]
fn new_rejects_empty_sequence() {
    assert_eq!(StepNavigator::new(0), None);
}

#[test]
fn new_starts_at_first_step() {
    let nav = StepNavigator::new(3).unwrap();
    assert_eq!(nav.index(), 0);
    assert_eq!(nav.count(), 3);
    assert!(nav.at_first());
    assert!(!nav.at_last());
}

#[test]
fn single_card_is_first_and_last() {
    let nav = StepNavigator::new(1).unwrap();
    assert!(nav.at_first());
    assert!(nav.at_last());
}

// =============================================================
// Navigation
// =============================================================

#[test]
fn go_next_advances_until_last() {
    let mut nav = StepNavigator::new(3).unwrap();
    assert!(nav.go_next());
    assert_eq!(nav.index(), 1);
    assert!(nav.go_next());
    assert_eq!(nav.index(), 2);
    assert!(nav.at_last());
}

#[test]
fn go_next_at_last_is_noop() {
    let mut nav = StepNavigator::new(2).unwrap();
    assert!(nav.go_next());
    assert!(!nav.go_next());
    assert_eq!(nav.index(), 1);
}

#[test]
fn go_previous_at_first_is_noop() {
    let mut nav = StepNavigator::new(2).unwrap();
    assert!(!nav.go_previous());
    assert_eq!(nav.index(), 0);
}

#[test]
fn go_previous_walks_back_to_first() {
    let mut nav = StepNavigator::new(3).unwrap();
    nav.go_next();
    nav.go_next();
    assert!(nav.go_previous());
    assert!(nav.go_previous());
    assert!(nav.at_first());
    assert!(!nav.go_previous());
}

#[test]
fn single_card_navigation_is_fully_disabled() {
    let mut nav = StepNavigator::new(1).unwrap();
    assert!(!nav.go_next());
    assert!(!nav.go_previous());
    assert_eq!(nav.index(), 0);
}

// =============================================================
// Restore from storage
// =============================================================

#[test]
fn restore_adopts_every_in_range_index() {
    for k in 0..5 {
        let stored = k.to_string();
        let nav = StepNavigator::restore(5, Some(&stored)).unwrap();
        assert_eq!(nav.index(), k);
    }
}

#[test]
fn restore_out_of_range_falls_back_to_first() {
    let nav = StepNavigator::restore(3, Some("99")).unwrap();
    assert_eq!(nav.index(), 0);
}

#[test]
fn restore_count_boundary_is_out_of_range() {
    let nav = StepNavigator::restore(3, Some("3")).unwrap();
    assert_eq!(nav.index(), 0);
}

#[test]
fn restore_non_numeric_falls_back_to_first() {
    for raw in ["abc", "1.5", "-1", ""] {
        let nav = StepNavigator::restore(3, Some(raw)).unwrap();
        assert_eq!(nav.index(), 0, "raw {raw:?} should fall back");
    }
}

#[test]
fn restore_trims_surrounding_whitespace() {
    let nav = StepNavigator::restore(3, Some(" 2 ")).unwrap();
    assert_eq!(nav.index(), 2);
}

#[test]
fn restore_without_stored_value_starts_at_first() {
    let nav = StepNavigator::restore(3, None).unwrap();
    assert_eq!(nav.index(), 0);
}

#[test]
fn restore_rejects_empty_sequence() {
    assert_eq!(StepNavigator::restore(0, Some("0")), None);
}

// =============================================================
// Counter label
// =============================================================

#[test]
fn counter_label_is_one_based() {
    let mut nav = StepNavigator::new(3).unwrap();
    assert_eq!(nav.counter_label(), "Step 1 of 3");
    nav.go_next();
    assert_eq!(nav.counter_label(), "Step 2 of 3");
}
