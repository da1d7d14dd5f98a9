use super::*;

#[test]
fn idle_text_gains_ellipsis() {
    assert_eq!(busy_label(None, "Save"), "Save...");
}

#[test]
fn override_wins_over_idle_text() {
    assert_eq!(busy_label(Some("Saving"), "Save"), "Saving...");
}

#[test]
fn empty_idle_text_falls_back_to_working() {
    assert_eq!(busy_label(None, ""), "Working...");
}

#[test]
fn blank_override_is_ignored() {
    assert_eq!(busy_label(Some("  "), "Save"), "Save...");
}

#[test]
fn blank_override_and_idle_fall_back_to_working() {
    assert_eq!(busy_label(Some(" "), "  "), "Working...");
}

#[test]
fn idle_text_is_trimmed() {
    assert_eq!(busy_label(None, "  Save  "), "Save...");
}
