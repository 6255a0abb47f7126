//! Smooth-scroll interception of in-page anchors.
//!
//! Activating an attached `#id` anchor prevents the default jump, starts an
//! animated scroll to the target region and asks the caller to clear the busy
//! flag after a fixed settle delay. The settle delay is independent of the
//! animation; overlapping timers all clear the same flag.

use std::time::{Duration, Instant};

use tokio::{sync::mpsc, task::JoinHandle, time::sleep};
use tracing::debug;

use super::{
    app::Message,
    viewport::{SectionRefs, Viewport},
};
use crate::section::SectionId;

pub const DEFAULT_SETTLE_DELAY: Duration = Duration::from_millis(1000);
pub const DEFAULT_ANIMATION: Duration = Duration::from_millis(600);

/// What happened when a link was activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkOutcome {
    /// In-page anchor intercepted. `target` is `None` when the identifier did
    /// not resolve; the busy flag still has to be cleared after `settle`.
    Intercepted {
        target: Option<SectionId>,
        settle: Duration,
    },
    /// In-page anchor without a listener: the viewport jumped instantly.
    Jumped(Option<SectionId>),
    /// Not an in-page anchor.
    External,
}

/// An in-flight animated scroll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollAnimation {
    from: usize,
    to: usize,
    started: Instant,
    duration: Duration,
}

impl ScrollAnimation {
    pub const fn new(from: usize, to: usize, started: Instant, duration: Duration) -> Self {
        Self {
            from,
            to,
            started,
            duration,
        }
    }

    pub const fn target(&self) -> usize {
        self.to
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started) >= self.duration
    }

    /// Offset at `now`, eased in and out.
    pub fn offset_at(&self, now: Instant) -> usize {
        if self.is_finished(now) {
            return self.to;
        }
        let t = now.saturating_duration_since(self.started).as_secs_f32()
            / self.duration.as_secs_f32();
        let eased = ease_in_out_cubic(t);
        let (from, to) = (self.from as f32, self.to as f32);
        (to - from).mul_add(eased, from).round() as usize
    }
}

fn ease_in_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0f32).mul_add(t, 2.0).powi(3) / 2.0
    }
}

#[derive(Debug)]
pub struct ScrollController {
    settle_delay: Duration,
    animation_duration: Duration,
    listeners: Vec<&'static str>,
    animation: Option<ScrollAnimation>,
}

impl Default for ScrollController {
    fn default() -> Self {
        Self::new(DEFAULT_SETTLE_DELAY, DEFAULT_ANIMATION)
    }
}

impl ScrollController {
    pub const fn new(settle_delay: Duration, animation_duration: Duration) -> Self {
        Self {
            settle_delay,
            animation_duration,
            listeners: Vec::new(),
            animation: None,
        }
    }

    /// Attach listeners to every in-page anchor among `hrefs`.
    pub fn attach<I>(&mut self, hrefs: I)
    where
        I: IntoIterator<Item = &'static str>,
    {
        for href in hrefs {
            if href.starts_with('#') && !self.listeners.contains(&href) {
                self.listeners.push(href);
            }
        }
        debug!(listeners = self.listeners.len(), "Anchor listeners attached");
    }

    pub fn detach_all(&mut self) {
        debug!(listeners = self.listeners.len(), "Anchor listeners detached");
        self.listeners.clear();
        self.animation = None;
    }

    pub fn is_attached(&self, href: &str) -> bool {
        self.listeners.iter().any(|l| *l == href)
    }

    pub const fn animation(&self) -> Option<&ScrollAnimation> {
        self.animation.as_ref()
    }

    pub const fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Handle activation of a link.
    pub fn activate(
        &mut self,
        href: &str,
        refs: &SectionRefs,
        viewport: &mut Viewport,
        now: Instant,
    ) -> LinkOutcome {
        let Some(id) = href.strip_prefix('#') else {
            return LinkOutcome::External;
        };
        let resolved = refs.resolve(id);

        if !self.is_attached(href) {
            if let Some((_, region)) = resolved {
                self.animation = None;
                viewport.scroll_to(region.top);
            }
            return LinkOutcome::Jumped(resolved.map(|(section, _)| section));
        }

        let target = resolved.map(|(section, region)| {
            let to = viewport.clamp(region.top);
            self.animation = Some(ScrollAnimation::new(
                viewport.offset,
                to,
                now,
                self.animation_duration,
            ));
            debug!(href, from = viewport.offset, to, "Smooth scroll started");
            section
        });
        if target.is_none() {
            debug!(href, "Anchor target not found");
        }

        LinkOutcome::Intercepted {
            target,
            settle: self.settle_delay,
        }
    }

    /// Advance the animation. Returns true while it is still running.
    pub fn tick(&mut self, viewport: &mut Viewport, now: Instant) -> bool {
        let Some(animation) = self.animation else {
            return false;
        };
        viewport.scroll_to(animation.offset_at(now));
        if animation.is_finished(now) {
            self.animation = None;
            return false;
        }
        true
    }

    /// Stop the animation where it is, as a free scroll does.
    pub fn cancel_animation(&mut self) {
        if self.animation.take().is_some() {
            debug!("Smooth scroll interrupted");
        }
    }
}

/// Send `Message::ScrollSettled` after `delay`. The timer is never cancelled.
pub fn spawn_settle_timer(tx: mpsc::Sender<Message>, delay: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        sleep(delay).await;
        let _ = tx.send(Message::ScrollSettled).await;
    })
}
