//! HelpMenu component - overlay showing keyboard shortcuts.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph},
    Frame,
};

use super::Component;

const KEYBINDINGS: &[(&str, &str)] = &[
    ("1/2/3", "about / education / projects"),
    ("Tab", "next section"),
    ("j/k", "scroll"),
    ("PgUp/Dn", "scroll a page"),
    ("d", "toggle dark mode"),
    ("c", "have a coffee"),
    ("g", "open GitHub"),
    ("l", "open LinkedIn"),
    ("r", "download resume"),
    ("?", "close help"),
    ("q", "quit"),
];

/// Help menu popup showing keyboard shortcuts.
#[derive(Default)]
pub struct HelpMenu {
    visible: bool,
}

impl HelpMenu {
    pub const fn toggle(&mut self) {
        self.visible = !self.visible;
    }

    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    /// Close on `Esc` or `?`. Returns true if the key was consumed.
    pub const fn handle_key(&mut self, key: &KeyEvent) -> bool {
        if !self.visible || !matches!(key.kind, KeyEventKind::Press) {
            return false;
        }
        match key.code {
            KeyCode::Esc | KeyCode::Char('?') => {
                self.visible = false;
                true
            }
            _ => false,
        }
    }
}

impl Component for HelpMenu {
    type Input = ();

    fn update(&mut self, _input: Self::Input) {}

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        if !self.visible {
            return;
        }

        let width = 44u16.min(area.width);
        let height = (KEYBINDINGS.len() as u16 + 2).min(area.height);
        let x = area.x + area.width.saturating_sub(width + 1);
        let y = area.y + area.height.saturating_sub(height + 1);
        let popup_area = Rect::new(x, y, width, height);

        frame.render_widget(Clear, popup_area);

        let block = Block::bordered()
            .title(" Help ")
            .border_style(Style::new().fg(Color::Cyan));

        let key_style = Style::new().fg(Color::Cyan);
        let help_lines: Vec<Line> = KEYBINDINGS
            .iter()
            .map(|(key, desc)| {
                Line::from(vec![
                    Span::styled(format!("{key:>8}"), key_style),
                    Span::raw(format!("  {desc}")),
                ])
            })
            .collect();

        frame.render_widget(Paragraph::new(help_lines).block(block), popup_area);
    }
}
