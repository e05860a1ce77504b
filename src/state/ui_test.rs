use super::*;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_defaults() {
    let s = UiState::default();
    assert!(!s.menu_open);
    assert!(!s.back_to_top_visible);
    assert!(s.active_section.is_none());
    assert!(s.revealed.is_empty());
}

// =============================================================
// Mobile menu
// =============================================================

#[test]
fn toggle_menu_flips_state() {
    let mut s = UiState::default();
    s.toggle_menu();
    assert!(s.menu_open);
    s.toggle_menu();
    assert!(!s.menu_open);
}

#[test]
fn close_menu_forces_closed() {
    let mut s = UiState::default();
    s.toggle_menu();
    s.close_menu();
    assert!(!s.menu_open);

    // Closing an already-closed menu stays closed.
    s.close_menu();
    assert!(!s.menu_open);
}

// =============================================================
// Back-to-top visibility
// =============================================================

#[test]
fn back_to_top_hidden_up_to_threshold() {
    assert!(!back_to_top_visible_at(0.0));
    assert!(!back_to_top_visible_at(150.0));
    assert!(!back_to_top_visible_at(300.0));
}

#[test]
fn back_to_top_visible_above_threshold() {
    assert!(back_to_top_visible_at(300.1));
    assert!(back_to_top_visible_at(2000.0));
}

#[test]
fn update_scroll_tracks_offset_in_both_directions() {
    let mut s = UiState::default();
    s.update_scroll(500.0);
    assert!(s.back_to_top_visible);
    s.update_scroll(120.0);
    assert!(!s.back_to_top_visible);
}

// =============================================================
// Section reveal is monotonic
// =============================================================

#[test]
fn mark_revealed_is_monotonic() {
    let mut s = UiState::default();
    assert!(!s.is_revealed("about"));
    s.mark_revealed("about");
    assert!(s.is_revealed("about"));

    // Re-marking (section scrolled out and back in) changes nothing.
    s.mark_revealed("about");
    assert!(s.is_revealed("about"));
    assert_eq!(s.revealed.len(), 1);
}

// =============================================================
// Active section: last intersecting entry in a batch wins
// =============================================================

#[test]
fn last_intersecting_entry_wins() {
    let mut s = UiState::default();
    s.set_active_from_entries(&[
        ("about".to_owned(), true),
        ("skills".to_owned(), false),
        ("projects".to_owned(), true),
    ]);
    assert!(s.is_active_section("projects"));
}

#[test]
fn non_intersecting_batch_leaves_active_unchanged() {
    let mut s = UiState::default();
    s.set_active_from_entries(&[("about".to_owned(), true)]);
    s.set_active_from_entries(&[("about".to_owned(), false)]);
    assert!(s.is_active_section("about"));
}

#[test]
fn empty_batch_is_a_no_op() {
    let mut s = UiState::default();
    s.set_active_from_entries(&[]);
    assert!(s.active_section.is_none());
}

#[test]
fn unknown_section_id_still_becomes_active() {
    // A section with no matching nav link highlights nothing, but the
    // previous link still loses its highlight.
    let mut s = UiState::default();
    s.set_active_from_entries(&[("contact".to_owned(), true)]);
    s.set_active_from_entries(&[("colophon".to_owned(), true)]);
    assert!(!s.is_active_section("contact"));
    assert!(s.is_active_section("colophon"));
}
