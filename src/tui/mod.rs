//! Terminal rendition of the portfolio page.

pub mod app;
mod components;
pub mod document;
pub mod scroll;
pub mod tracker;
pub mod viewport;

use std::{
    io::{stdout, Stdout},
    time::{Duration, Instant},
};

use app::{App, Command, Message};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, EventStream},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use futures::StreamExt;
use ratatui::prelude::*;
use tokio::{sync::mpsc, task, time::sleep};
use tracing::warn;

use self::{scroll::spawn_settle_timer, tracker::TieBreak};
use crate::error::Result;

/// Tunables of the interactive view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewConfig {
    /// Delay after which the busy flag of a smooth scroll is cleared.
    pub settle_delay: Duration,
    /// Length of the smooth-scroll animation.
    pub animation: Duration,
    pub threshold: f32,
    pub tie_break: TieBreak,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            settle_delay: scroll::DEFAULT_SETTLE_DELAY,
            animation: scroll::DEFAULT_ANIMATION,
            threshold: tracker::VISIBILITY_THRESHOLD,
            tie_break: TieBreak::default(),
        }
    }
}

pub async fn run(config: ViewConfig) -> Result<()> {
    enable_raw_mode()?;
    stdout()
        .execute(EnterAlternateScreen)?
        .execute(EnableMouseCapture)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    let mut app = App::new(config);
    let result = event_loop(&mut terminal, &mut app).await;
    app.unmount();

    disable_raw_mode()?;
    stdout()
        .execute(DisableMouseCapture)?
        .execute(LeaveAlternateScreen)?;

    result
}

async fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<()> {
    let (tx, mut rx) = mpsc::channel::<Message>(16);
    let mut event_stream = EventStream::new();

    // The first frame attaches the section refs the observers need.
    terminal.draw(|frame| app.render(frame))?;
    app.mount();

    while !app.should_exit {
        app.update(Instant::now());
        terminal.draw(|frame| app.render(frame))?;
        for cmd in app.take_commands() {
            perform(cmd, &tx);
        }

        tokio::select! {
            Some(msg) = rx.recv() => {
                app.handle_message(msg);
            }
            Some(Ok(event)) = event_stream.next() => {
                app.handle_event(&event, Instant::now());
            }
            () = sleep(app.frame_interval()) => {}
        }
    }

    Ok(())
}

fn perform(cmd: Command, tx: &mpsc::Sender<Message>) {
    match cmd {
        Command::ScheduleSettle(delay) => {
            spawn_settle_timer(tx.clone(), delay);
        }
        Command::Open(target) => {
            let tx = tx.clone();
            task::spawn_blocking(move || {
                if let Err(e) = open::that(target) {
                    warn!("Failed to open '{target}': {e}");
                    let _ = tx.blocking_send(Message::OpenFailed {
                        target: target.to_string(),
                        reason: e.to_string(),
                    });
                }
            });
        }
    }
}
