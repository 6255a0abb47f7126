#![allow(dead_code)]

use std::time::{Duration, Instant};

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use portfolio_tui::tui::app::App;
use ratatui::{backend::TestBackend, buffer::Buffer, style::Color, Terminal};

/// Drives an `App` against an in-memory terminal with a virtual clock.
pub struct PageHarness {
    pub app: App,
    terminal: Terminal<TestBackend>,
    pub now: Instant,
}

impl PageHarness {
    /// Render the first frame and mount, the way the event loop does.
    pub fn mount(width: u16, height: u16) -> Self {
        let mut terminal =
            Terminal::new(TestBackend::new(width, height)).expect("Failed to create terminal");
        let mut app = App::default();
        terminal
            .draw(|frame| app.render(frame))
            .expect("Failed to draw");
        app.mount();
        let mut harness = Self {
            app,
            terminal,
            now: Instant::now(),
        };
        harness.draw();
        harness
    }

    pub fn draw(&mut self) {
        self.app.update(self.now);
        self.terminal
            .draw(|frame| self.app.render(frame))
            .expect("Failed to draw");
    }

    /// Move the virtual clock forward and redraw.
    pub fn advance(&mut self, by: Duration) {
        self.now += by;
        self.draw();
    }

    pub fn press(&mut self, code: KeyCode) {
        let event = Event::Key(KeyEvent::new(code, KeyModifiers::NONE));
        self.app.handle_event(&event, self.now);
        self.draw();
    }

    pub fn click(&mut self, x: u16, y: u16) {
        let event = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: x,
            row: y,
            modifiers: KeyModifiers::NONE,
        });
        self.app.handle_event(&event, self.now);
        self.draw();
    }

    /// Click the first occurrence of `text` on screen.
    pub fn click_text(&mut self, text: &str) {
        let (x, y) = self
            .find(text)
            .unwrap_or_else(|| panic!("'{text}' is not on screen"));
        self.click(x, y);
    }

    pub fn buffer(&self) -> &Buffer {
        self.terminal.backend().buffer()
    }

    pub fn bg(&self, x: u16, y: u16) -> Color {
        self.buffer()[(x, y)].bg
    }

    pub fn row_text(&self, y: u16) -> String {
        let buf = self.buffer();
        (buf.area.left()..buf.area.right())
            .map(|x| buf[(x, y)].symbol())
            .collect()
    }

    /// Screen position of the first cell where `text` starts.
    pub fn find(&self, text: &str) -> Option<(u16, u16)> {
        let buf = self.buffer();
        let needle: Vec<char> = text.chars().collect();
        for y in buf.area.top()..buf.area.bottom() {
            for x in buf.area.left()..buf.area.right() {
                let matches = needle.iter().enumerate().all(|(i, c)| {
                    let Ok(dx) = u16::try_from(i) else {
                        return false;
                    };
                    x.checked_add(dx)
                        .filter(|cx| *cx < buf.area.right())
                        .is_some_and(|cx| buf[(cx, y)].symbol().starts_with(*c))
                });
                if matches {
                    return Some((x, y));
                }
            }
        }
        None
    }

    pub fn screen_contains(&self, text: &str) -> bool {
        self.find(text).is_some()
    }
}
