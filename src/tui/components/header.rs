//! Sticky header: owner name, theme toggle, navigation and profile links.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    Frame,
};

use super::{gradient::paint_horizontal, ClickRegion, Component};
use crate::{
    content::PORTFOLIO,
    section::SectionId,
    state::ViewState,
    tui::document::ClickTarget,
};

pub const HEADER_HEIGHT: u16 = 3;

/// Header component. Re-themed from the active section on every update.
#[derive(Default)]
pub struct Header {
    state: ViewState,
    click_regions: Vec<ClickRegion>,
}

struct Item {
    label: String,
    style: Style,
    target: ClickTarget,
}

impl Header {
    fn right_items(&self) -> Vec<Item> {
        let palette = self.state.palette();
        let text = palette.header_text.style();
        let tabs = SectionId::ALL.into_iter().map(|section| {
            let style = if section == self.state.active_section {
                palette.active_tab.style().add_modifier(Modifier::BOLD)
            } else {
                text
            };
            Item {
                label: format!(" {} ", section.title()),
                style,
                target: ClickTarget::Link(section.anchor()),
            }
        });
        let links = [
            (" GitHub ", PORTFOLIO.links.github, text),
            (" LinkedIn ", PORTFOLIO.links.linkedin, text),
            (" ⤓ Resume ", PORTFOLIO.links.resume, palette.resume_button.style()),
        ]
        .into_iter()
        .map(|(label, href, style)| Item {
            label: label.to_string(),
            style,
            target: ClickTarget::Link(href),
        });
        tabs.chain(links).collect()
    }
}

impl Component for Header {
    type Input = ViewState;

    fn update(&mut self, input: Self::Input) {
        self.state = input;
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.click_regions.clear();
        if area.is_empty() {
            return;
        }
        let buf = frame.buffer_mut();
        paint_horizontal(buf, area, self.state.header_theme());

        let palette = self.state.palette();
        let y = area.y + area.height / 2;
        let name = format!("  {} ", PORTFOLIO.name);
        let (after_name, _) = buf.set_stringn(
            area.x,
            y,
            &name,
            usize::MAX,
            palette.header_text.style().add_modifier(Modifier::BOLD),
        );

        let toggle = if self.state.dark_mode { " ☀ " } else { " ☾ " };
        let toggle_x = after_name + 1;
        let (after_toggle, _) =
            buf.set_stringn(toggle_x, y, toggle, usize::MAX, palette.toggle.style());
        self.click_regions.push(ClickRegion {
            area: Rect::new(toggle_x, y, after_toggle.saturating_sub(toggle_x), 1),
            target: ClickTarget::ToggleDarkMode,
        });

        let items = self.right_items();
        let total: u16 = items
            .iter()
            .map(|i| i.label.chars().count() as u16 + 1)
            .sum();
        let mut x = area.right().saturating_sub(total + 1).max(after_toggle + 2);
        for item in items {
            if x >= area.right() {
                break;
            }
            let (end, _) = buf.set_stringn(
                x,
                y,
                &item.label,
                usize::from(area.right() - x),
                item.style,
            );
            self.click_regions.push(ClickRegion {
                area: Rect::new(x, y, end - x, 1),
                target: item.target,
            });
            x = end + 1;
        }
    }

    fn click_regions(&self) -> &[ClickRegion] {
        &self.click_regions
    }
}

#[cfg(test)]
mod tests {
    use ratatui::{backend::TestBackend, style::Color, Terminal};

    use super::*;
    use crate::{theme::Tw, tui::components::hit_test};

    fn render(state: ViewState) -> (Header, ratatui::buffer::Buffer) {
        let mut terminal = Terminal::new(TestBackend::new(120, HEADER_HEIGHT)).unwrap();
        let mut header = Header::default();
        header.update(state);
        terminal
            .draw(|frame| {
                let area = frame.area();
                header.render(frame, area);
            })
            .unwrap();
        let buf = terminal.backend().buffer().clone();
        (header, buf)
    }

    fn region_of(header: &Header, target: ClickTarget) -> ClickRegion {
        *header
            .click_regions()
            .iter()
            .find(|r| r.target == target)
            .unwrap()
    }

    #[test]
    fn every_nav_target_is_clickable() {
        let (header, _) = render(ViewState::default());
        for section in SectionId::ALL {
            let region = region_of(&header, ClickTarget::Link(section.anchor()));
            assert_eq!(
                hit_test(header.click_regions(), region.area.x, region.area.y),
                Some(ClickTarget::Link(section.anchor()))
            );
        }
        region_of(&header, ClickTarget::ToggleDarkMode);
        region_of(&header, ClickTarget::Link(PORTFOLIO.links.resume));
    }

    #[test]
    fn active_tab_is_highlighted() {
        let state = ViewState {
            active_section: SectionId::Projects,
            ..ViewState::default()
        };
        let (header, buf) = render(state);
        let tab = region_of(&header, ClickTarget::Link("#projects"));
        let other = region_of(&header, ClickTarget::Link("#about"));
        assert_eq!(buf[(tab.area.x + 1, tab.area.y)].fg, Color::from(Tw::YELLOW_300));
        assert_eq!(buf[(other.area.x + 1, other.area.y)].fg, Color::from(Tw::WHITE));
    }

    #[test]
    fn background_follows_theme() {
        let (_, light) = render(ViewState {
            active_section: SectionId::Education,
            ..ViewState::default()
        });
        assert_eq!(light[(0, 0)].bg, Color::from(Tw::RED_800));

        let (_, dark) = render(ViewState {
            active_section: SectionId::Education,
            dark_mode: true,
            ..ViewState::default()
        });
        assert_eq!(dark[(0, 0)].bg, Color::from(Tw::GRAY_900));
    }
}
