mod common;

use std::time::Duration;

use common::PageHarness;
use crossterm::event::KeyCode;
use portfolio_tui::{
    section::SectionId,
    theme::{self, Tw},
    tui::app::{Command, Message},
};
use ratatui::style::Color;

const WIDTH: u16 = 120;
const HEIGHT: u16 = 70;

fn status_line(harness: &PageHarness) -> String {
    harness.row_text(HEIGHT - 1)
}

#[test]
fn initial_frame_shows_the_about_theme() {
    let harness = PageHarness::mount(WIDTH, HEIGHT);

    assert_eq!(harness.app.state.active_section, SectionId::About);
    assert!(!harness.app.state.dark_mode);
    assert_eq!(harness.app.state.coffee_count, 0);
    assert_eq!(
        harness.bg(0, 0),
        theme::header_theme(SectionId::About, false).at(0.0)
    );
    assert!(status_line(&harness).contains("[about]"));
    assert!(harness.screen_contains("John Doe"));
    assert!(harness.screen_contains("0 cups of coffee"));
}

#[test]
fn navigating_to_projects_rethemes_the_header() {
    let mut harness = PageHarness::mount(WIDTH, HEIGHT);

    harness.press(KeyCode::Char('3'));
    assert!(harness.app.state.is_scrolling);
    assert_eq!(
        harness.app.take_commands(),
        [Command::ScheduleSettle(Duration::from_millis(1000))]
    );

    harness.advance(Duration::from_millis(700));
    assert_eq!(harness.app.state.active_section, SectionId::Projects);
    assert_eq!(
        harness.bg(0, 0),
        theme::header_theme(SectionId::Projects, false).at(0.0)
    );
    assert!(status_line(&harness).contains("[projects]"));
    assert!(status_line(&harness).contains("scrolling"));

    harness.app.handle_message(Message::ScrollSettled);
    harness.draw();
    assert!(!harness.app.state.is_scrolling);
    assert!(!status_line(&harness).contains("scrolling"));
}

#[test]
fn dark_mode_applies_to_every_section() {
    let mut harness = PageHarness::mount(WIDTH, HEIGHT);
    harness.press(KeyCode::Char('d'));

    assert!(harness.app.state.dark_mode);
    assert_eq!(harness.bg(0, 0), Color::from(Tw::GRAY_900));

    harness.press(KeyCode::Char('2'));
    harness.advance(Duration::from_secs(1));
    assert_eq!(harness.app.state.active_section, SectionId::Education);
    assert_eq!(harness.bg(0, 0), Color::from(Tw::GRAY_900));

    harness.press(KeyCode::Char('d'));
    assert_eq!(
        harness.bg(0, 0),
        theme::header_theme(SectionId::Education, false).at(0.0)
    );
}

#[test]
fn content_clicks_are_dropped_while_scrolling() {
    let mut harness = PageHarness::mount(WIDTH, HEIGHT);

    // Already at the top, so the viewport stays put but the page is busy.
    harness.press(KeyCode::Char('1'));
    assert!(harness.app.state.is_scrolling);
    harness.click_text("cups of coffee");
    assert_eq!(harness.app.state.coffee_count, 0);

    harness.app.handle_message(Message::ScrollSettled);
    harness.draw();
    harness.click_text("cups of coffee");
    assert_eq!(harness.app.state.coffee_count, 1);
    assert!(harness.screen_contains("I've had 1 cup of coffee today"));
}

#[test]
fn header_clicks_work_while_scrolling() {
    let mut harness = PageHarness::mount(WIDTH, HEIGHT);

    harness.press(KeyCode::Char('2'));
    assert!(harness.app.state.is_scrolling);
    harness.click_text("☾");
    assert!(harness.app.state.dark_mode);
    assert!(harness.screen_contains("☀"));
}

#[test]
fn nav_tab_click_scrolls_to_its_section() {
    let mut harness = PageHarness::mount(WIDTH, HEIGHT);

    harness.click_text("Education");
    assert!(harness.app.state.is_scrolling);
    harness.advance(Duration::from_secs(1));
    assert_eq!(harness.app.state.active_section, SectionId::Education);

    let education = harness
        .app
        .refs()
        .get(SectionId::Education)
        .region()
        .expect("education is attached");
    assert_eq!(
        harness.app.viewport().offset,
        harness.app.viewport().clamp(education.top)
    );
}

#[test]
fn tab_cycles_through_sections() {
    let mut harness = PageHarness::mount(WIDTH, HEIGHT);
    let mut visited = Vec::new();
    for _ in 0..3 {
        harness.press(KeyCode::Tab);
        harness.advance(Duration::from_secs(1));
        harness.app.handle_message(Message::ScrollSettled);
        visited.push(harness.app.state.active_section);
    }
    assert_eq!(
        visited,
        [SectionId::Education, SectionId::Projects, SectionId::About]
    );
}

#[test]
fn free_scroll_interrupts_animation_but_not_busy_flag() {
    let mut harness = PageHarness::mount(WIDTH, HEIGHT);

    harness.press(KeyCode::Char('3'));
    harness.advance(Duration::from_millis(100));
    harness.press(KeyCode::Down);
    assert!(!harness.app.scroll().is_animating());
    assert!(harness.app.state.is_scrolling);
}

#[test]
fn unmount_stops_tracking() {
    let mut harness = PageHarness::mount(WIDTH, HEIGHT);
    harness.app.unmount();

    assert!(!harness.app.is_mounted());
    assert_eq!(harness.app.tracker().observer_count(), 0);
    assert!(!harness.app.scroll().is_attached(SectionId::Projects.anchor()));
}
