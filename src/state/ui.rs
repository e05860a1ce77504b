#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use std::collections::HashSet;

/// Scroll offset in CSS pixels above which the back-to-top control shows.
pub const BACK_TO_TOP_THRESHOLD: f64 = 300.0;

/// UI state for the navigation menu, scroll-derived flags, and section
/// reveal/highlight tracking.
///
/// Held in a context `RwSignal` provided by `App`. The hamburger button and
/// the menu panel both render from `menu_open`, so their visual states can
/// never disagree.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub menu_open: bool,
    pub back_to_top_visible: bool,
    /// Section id currently highlighted in the nav, if any.
    pub active_section: Option<String>,
    /// Ids of sections that have entered the viewport at least once.
    /// Insert-only; a revealed section never reverts.
    pub revealed: HashSet<String>,
}

impl UiState {
    /// Toggle the mobile menu open/closed.
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Force the mobile menu closed (link click, outside click, Escape).
    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Recompute back-to-top visibility from the current scroll offset.
    pub fn update_scroll(&mut self, scroll_y: f64) {
        self.back_to_top_visible = back_to_top_visible_at(scroll_y);
    }

    /// Mark a section as revealed. Idempotent and never undone.
    pub fn mark_revealed(&mut self, id: &str) {
        if !self.revealed.contains(id) {
            self.revealed.insert(id.to_owned());
        }
    }

    pub fn is_revealed(&self, id: &str) -> bool {
        self.revealed.contains(id)
    }

    /// Fold an intersection batch into the active section.
    ///
    /// Entries arrive in observer callback delivery order; every intersecting
    /// entry overwrites the previous value, so the last one in the batch wins.
    /// A batch with no intersecting entries leaves the value unchanged.
    pub fn set_active_from_entries(&mut self, entries: &[(String, bool)]) {
        for (id, intersecting) in entries {
            if *intersecting {
                self.active_section = Some(id.clone());
            }
        }
    }

    pub fn is_active_section(&self, id: &str) -> bool {
        self.active_section.as_deref() == Some(id)
    }
}

/// Pure visibility rule for the back-to-top control.
pub fn back_to_top_visible_at(scroll_y: f64) -> bool {
    scroll_y > BACK_TO_TOP_THRESHOLD
}
