//! Status bar with keybindings, the active section and transient notices.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::Component;
use crate::state::ViewState;

pub struct StatusBarInput {
    pub state: ViewState,
    pub notice: Option<String>,
}

#[derive(Default)]
pub struct StatusBar {
    state: ViewState,
    notice: Option<String>,
}

impl Component for StatusBar {
    type Input = StatusBarInput;

    fn update(&mut self, input: Self::Input) {
        self.state = input.state;
        self.notice = input.notice;
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        const KEYBINDINGS: &[(&str, &str)] = &[
            ("?", "help"),
            ("1-3", "sections"),
            ("d", "theme"),
            ("c", "coffee"),
            ("q", "quit"),
        ];

        let separator = Span::raw(" │ ");
        let keybind_spans = KEYBINDINGS.iter().enumerate().flat_map(|(i, (key, desc))| {
            let prefix = (i > 0).then(|| separator.clone());
            prefix.into_iter().chain([
                Span::styled(*key, Style::new().fg(Color::Cyan)),
                Span::raw(format!(": {desc}")),
            ])
        });

        let section_span = Span::styled(
            format!(" [{}]", self.state.active_section.id()),
            Style::new().fg(Color::Yellow),
        );
        let scrolling_span = self.state.is_scrolling.then(|| {
            Span::styled(
                " scrolling…",
                Style::new().fg(Color::Magenta).add_modifier(Modifier::ITALIC),
            )
        });
        let notice_span = self
            .notice
            .as_ref()
            .map(|n| Span::styled(format!(" {n}"), Style::new().fg(Color::Red)));

        let spans: Vec<Span> = keybind_spans
            .chain([section_span])
            .chain(scrolling_span)
            .chain(notice_span)
            .collect();
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}
