//! A personal portfolio page for the terminal.
//!
//! The page has three sections (about, education, projects). The active
//! navigation tab follows whichever section is visible, in-page links scroll
//! smoothly, and the theme can be switched between light and dark.

pub mod content;
pub mod error;
pub mod section;
pub mod state;
pub mod theme;
pub mod tui;
