//! UI State
//!
//! The single mutable record behind the page. It starts at its defaults on
//! every page load and is never persisted.

use crate::section::SectionId;

/// Navigation-related UI state
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    /// Mobile menu expanded
    pub menu_open: bool,

    /// Section highlighted in the navigation bar
    pub current_section: SectionId,

    /// Viewport scrolled past the threshold
    pub scrolled: bool,
}

impl UiState {
    /// Fresh state for a new page view
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the mobile menu
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Record the scrolled flag, returning whether it changed
    pub fn set_scrolled(&mut self, scrolled: bool) -> bool {
        let changed = self.scrolled != scrolled;
        self.scrolled = scrolled;
        changed
    }

    /// Mark `section` current and close the mobile menu
    pub fn enter_section(&mut self, section: SectionId) {
        self.current_section = section;
        self.menu_open = false;
    }

    /// Whether `section` is the highlighted navigation entry
    pub fn is_current(&self, section: SectionId) -> bool {
        self.current_section == section
    }
}
