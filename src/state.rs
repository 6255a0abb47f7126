//! View state owned by the root view.

use serde::Serialize;

use crate::{
    section::SectionId,
    theme::{self, Gradient, Palette},
};

/// Ephemeral UI state. Nothing here outlives the session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ViewState {
    /// Highlighted navigation tab, driven by the section tracker.
    pub active_section: SectionId,
    pub dark_mode: bool,
    /// Set while a programmatic smooth scroll is in flight.
    pub is_scrolling: bool,
    pub coffee_count: u64,
}

impl ViewState {
    pub const fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
    }

    pub const fn drink_coffee(&mut self) {
        self.coffee_count = self.coffee_count.saturating_add(1);
    }

    /// Returns true if the active section changed.
    pub fn set_active_section(&mut self, section: SectionId) -> bool {
        let changed = self.active_section != section;
        self.active_section = section;
        changed
    }

    pub const fn header_theme(&self) -> Gradient {
        theme::header_theme(self.active_section, self.dark_mode)
    }

    pub const fn section_theme(&self, section: SectionId) -> Gradient {
        theme::section_theme(section, self.dark_mode)
    }

    pub const fn palette(&self) -> Palette {
        theme::palette(self.dark_mode)
    }
}
