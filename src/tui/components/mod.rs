//! Component-based UI architecture.
//!
//! Each component owns the state it renders from and records its click
//! regions while rendering, so hit-testing always matches the last frame.

mod gradient;
mod header;
mod help_menu;
mod page;
mod status_bar;

pub use header::{Header, HEADER_HEIGHT};
pub use help_menu::HelpMenu;
pub use page::{Page, PageInput};
use ratatui::{layout::Rect, Frame};
pub use status_bar::{StatusBar, StatusBarInput};

use super::document::ClickTarget;

/// A UI component with co-located state and rendering.
pub trait Component {
    /// Data the component renders from.
    type Input;

    /// Replace the component's input before the next render.
    fn update(&mut self, input: Self::Input);

    /// Render the component and compute click regions.
    fn render(&mut self, frame: &mut Frame, area: Rect);

    /// Click regions computed during the last render.
    fn click_regions(&self) -> &[ClickRegion] {
        &[]
    }
}

/// A clickable area mapped to a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClickRegion {
    pub area: Rect,
    pub target: ClickTarget,
}

impl ClickRegion {
    pub const fn contains(&self, x: u16, y: u16) -> bool {
        self.area.x <= x
            && x < self.area.x + self.area.width
            && self.area.y <= y
            && y < self.area.y + self.area.height
    }
}

/// Target under (x, y), if any.
pub fn hit_test(regions: &[ClickRegion], x: u16, y: u16) -> Option<ClickTarget> {
    regions.iter().find(|r| r.contains(x, y)).map(|r| r.target)
}
