//! Application state for the TUI.

use std::{
    mem,
    time::{Duration, Instant},
};

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{
    layout::{Constraint, Layout, Position, Rect},
    Frame,
};
use tracing::{debug, info};

use super::{
    components::{
        hit_test, Component, Header, HelpMenu, Page, PageInput, StatusBar, StatusBarInput,
        HEADER_HEIGHT,
    },
    document::{ClickTarget, Document},
    scroll::{LinkOutcome, ScrollController},
    tracker::SectionTracker,
    viewport::{SectionRefs, Viewport},
    ViewConfig,
};
use crate::{content::PORTFOLIO, section::SectionId, state::ViewState};

/// Rows scrolled per mouse wheel notch.
const WHEEL_ROWS: isize = 3;

/// Messages delivered to the app from background tasks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// A settle timer elapsed; the busy flag can be cleared.
    ScrollSettled,
    /// The platform opener could not open a link.
    OpenFailed { target: String, reason: String },
}

/// Side effects the event loop performs on behalf of the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    ScheduleSettle(Duration),
    Open(&'static str),
}

/// Application state.
pub struct App {
    /// View state shared by every component.
    pub state: ViewState,
    /// Whether app should exit.
    pub should_exit: bool,
    refs: SectionRefs,
    viewport: Viewport,
    tracker: SectionTracker,
    scroll: ScrollController,
    header: Header,
    page: Page,
    status_bar: StatusBar,
    help_menu: HelpMenu,
    /// Screen area of the main content during the last render.
    main_area: Rect,
    notice: Option<String>,
    mounted: bool,
    /// Outgoing commands queue.
    outgoing_commands: Vec<Command>,
}

impl Default for App {
    fn default() -> Self {
        Self::new(ViewConfig::default())
    }
}

impl App {
    pub fn new(config: ViewConfig) -> Self {
        Self {
            state: ViewState::default(),
            should_exit: false,
            refs: SectionRefs::default(),
            viewport: Viewport::default(),
            tracker: SectionTracker::new(config.threshold, config.tie_break),
            scroll: ScrollController::new(config.settle_delay, config.animation),
            header: Header::default(),
            page: Page::default(),
            status_bar: StatusBar::default(),
            help_menu: HelpMenu::default(),
            main_area: Rect::default(),
            notice: None,
            mounted: false,
            outgoing_commands: Vec::new(),
        }
    }

    pub const fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub const fn refs(&self) -> &SectionRefs {
        &self.refs
    }

    pub const fn tracker(&self) -> &SectionTracker {
        &self.tracker
    }

    pub const fn scroll(&self) -> &ScrollController {
        &self.scroll
    }

    pub const fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Register section observers and anchor listeners. Refs that have not
    /// been attached by a layout pass yet are not observed.
    pub fn mount(&mut self) {
        if self.mounted {
            return;
        }
        self.tracker.observe_all(&self.refs);
        self.scroll.attach(SectionId::ALL.map(SectionId::anchor));
        self.mounted = true;
        // Fire the initial observer callbacks against the current viewport.
        self.sync_active_section();
        info!(
            observers = self.tracker.observer_count(),
            state = %serde_json::to_string(&self.state).unwrap_or_default(),
            "Portfolio mounted"
        );
    }

    /// Tear down observers and listeners and release the section refs.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.tracker.disconnect_all();
        self.scroll.detach_all();
        self.refs.release();
        self.mounted = false;
        info!(coffee = self.state.coffee_count, "Portfolio unmounted");
    }

    /// Queue a command for the event loop.
    pub fn queue_command(&mut self, cmd: Command) {
        self.outgoing_commands.push(cmd);
    }

    /// Take all queued commands.
    pub fn take_commands(&mut self) -> Vec<Command> {
        mem::take(&mut self.outgoing_commands)
    }

    /// How long the event loop may wait before the next frame.
    pub const fn frame_interval(&self) -> Duration {
        if self.scroll.is_animating() {
            Duration::from_millis(16)
        } else {
            Duration::from_millis(100)
        }
    }

    /// Advance time-driven state.
    pub fn update(&mut self, now: Instant) {
        self.scroll.tick(&mut self.viewport, now);
    }

    /// Lay the page out for `area`, refresh section geometry and let the
    /// tracker observe the new viewport. Returns the document together with
    /// the header, main and status areas.
    pub fn layout(&mut self, area: Rect) -> (Document, [Rect; 3]) {
        let areas: [Rect; 3] = Layout::vertical([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(area);
        let main = areas[1];
        self.main_area = main;

        let min_height = usize::from(main.height.max(1));
        let document = Document::build(&self.state, main.width, min_height);
        for section in SectionId::ALL {
            self.refs.attach(section, document.region(section));
        }
        self.viewport.resize(usize::from(main.height), document.len());
        self.sync_active_section();

        (document, areas)
    }

    /// Render the UI.
    pub fn render(&mut self, frame: &mut Frame) {
        let (document, [header_area, main_area, status_area]) = self.layout(frame.area());

        self.page.update(PageInput {
            document,
            offset: self.viewport.offset,
            state: self.state,
        });
        self.header.update(self.state);
        self.status_bar.update(StatusBarInput {
            state: self.state,
            notice: self.notice.clone(),
        });

        self.page.render(frame, main_area);
        self.header.render(frame, header_area);
        self.status_bar.render(frame, status_area);
        self.help_menu.render(frame, main_area);
    }

    /// Handle a terminal event.
    pub fn handle_event(&mut self, event: &Event, now: Instant) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key, now),
            Event::Mouse(mouse) => self.handle_mouse(mouse, now),
            _ => {}
        }
    }

    /// Handle a message from a background task.
    pub fn handle_message(&mut self, msg: Message) {
        match msg {
            Message::ScrollSettled => {
                if self.state.is_scrolling {
                    debug!("Scroll settled");
                }
                self.state.is_scrolling = false;
            }
            Message::OpenFailed { target, reason } => {
                self.notice = Some(format!("could not open {target}: {reason}"));
            }
        }
    }

    /// Activate a link the way clicking it would.
    pub fn activate_link(&mut self, href: &'static str, now: Instant) {
        match self.scroll.activate(href, &self.refs, &mut self.viewport, now) {
            LinkOutcome::Intercepted { target, settle } => {
                self.state.is_scrolling = true;
                self.queue_command(Command::ScheduleSettle(settle));
                info!(href, ?target, "Navigating");
            }
            LinkOutcome::Jumped(target) => {
                debug!(href, ?target, "Anchor not intercepted, jumped");
                self.sync_active_section();
            }
            LinkOutcome::External => {
                info!(href, "Opening external link");
                self.queue_command(Command::Open(href));
            }
        }
    }

    pub fn toggle_dark_mode(&mut self) {
        self.state.toggle_dark_mode();
        debug!(dark_mode = self.state.dark_mode, "Theme toggled");
    }

    pub fn drink_coffee(&mut self) {
        self.state.drink_coffee();
        debug!(coffee = self.state.coffee_count, "Coffee");
    }

    /// Scroll without animation, interrupting any smooth scroll.
    pub fn free_scroll(&mut self, delta: isize) {
        self.scroll.cancel_animation();
        self.viewport.scroll_by(delta);
    }

    /// Dispatch a click at screen position (x, y).
    pub fn click(&mut self, x: u16, y: u16, now: Instant) {
        if let Some(target) = hit_test(self.header.click_regions(), x, y) {
            self.dispatch(target, now);
            return;
        }
        if !self.main_area.contains(Position::new(x, y)) {
            return;
        }
        if self.state.is_scrolling {
            debug!(x, y, "Pointer events suspended while scrolling");
            return;
        }
        if let Some(target) = hit_test(self.page.click_regions(), x, y) {
            self.dispatch(target, now);
        }
    }

    fn dispatch(&mut self, target: ClickTarget, now: Instant) {
        match target {
            ClickTarget::Link(href) => self.activate_link(href, now),
            ClickTarget::ToggleDarkMode => self.toggle_dark_mode(),
            ClickTarget::Coffee => self.drink_coffee(),
        }
    }

    fn handle_key(&mut self, key: &KeyEvent, now: Instant) {
        self.notice = None;
        if self.help_menu.handle_key(key) {
            return;
        }
        let page = isize::try_from(self.viewport.height.max(1)).unwrap_or(isize::MAX);
        match key.code {
            KeyCode::Char('q') => self.should_exit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_exit = true;
            }
            KeyCode::Char('?') => self.help_menu.toggle(),
            KeyCode::Char('1') => self.activate_link(SectionId::About.anchor(), now),
            KeyCode::Char('2') => self.activate_link(SectionId::Education.anchor(), now),
            KeyCode::Char('3') => self.activate_link(SectionId::Projects.anchor(), now),
            KeyCode::Tab => {
                let next = self.state.active_section.next();
                self.activate_link(next.anchor(), now);
            }
            KeyCode::BackTab => {
                let prev = self.state.active_section.prev();
                self.activate_link(prev.anchor(), now);
            }
            KeyCode::Char('j') | KeyCode::Down => self.free_scroll(1),
            KeyCode::Char('k') | KeyCode::Up => self.free_scroll(-1),
            KeyCode::PageDown | KeyCode::Char(' ') => self.free_scroll(page),
            KeyCode::PageUp => self.free_scroll(-page),
            KeyCode::Home => self.free_scroll(isize::MIN),
            KeyCode::End => self.free_scroll(isize::MAX),
            KeyCode::Char('d') => self.toggle_dark_mode(),
            KeyCode::Char('c') => self.drink_coffee(),
            KeyCode::Char('g') => self.activate_link(PORTFOLIO.links.github, now),
            KeyCode::Char('l') => self.activate_link(PORTFOLIO.links.linkedin, now),
            KeyCode::Char('r') => self.activate_link(PORTFOLIO.links.resume, now),
            _ => {}
        }
    }

    fn handle_mouse(&mut self, mouse: &MouseEvent, now: Instant) {
        match mouse.kind {
            MouseEventKind::ScrollDown => self.free_scroll(WHEEL_ROWS),
            MouseEventKind::ScrollUp => self.free_scroll(-WHEEL_ROWS),
            MouseEventKind::Down(MouseButton::Left) => self.click(mouse.column, mouse.row, now),
            _ => {}
        }
    }

    fn sync_active_section(&mut self) {
        if let Some(section) = self.tracker.check(&self.refs, self.viewport) {
            if self.state.set_active_section(section) {
                debug!(section = section.id(), "Active section changed");
            }
        }
    }
}
