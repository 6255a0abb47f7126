//! Visibility tracking of page sections.
//!
//! Each observed section remembers whether it was intersecting on the
//! previous check. A section fires only on the edge from not-intersecting to
//! intersecting, so the first check after registration fires for every section
//! that is already on screen.

use clap::ValueEnum;
use tracing::debug;

use super::viewport::{SectionRefs, Viewport};
use crate::section::SectionId;

/// Fraction of a region that has to be visible for it to count as active.
pub const VISIBILITY_THRESHOLD: f32 = 0.5;

/// Which section wins when several cross the threshold in the same check.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum TieBreak {
    /// The section registered last wins.
    #[default]
    #[value(name = "last")]
    LastObserver,
    /// The section closest to the top of the document wins.
    Topmost,
}

#[derive(Debug, Clone, Copy)]
struct Observer {
    section: SectionId,
    intersecting: bool,
}

#[derive(Debug)]
pub struct SectionTracker {
    threshold: f32,
    tie_break: TieBreak,
    observers: Vec<Observer>,
}

impl Default for SectionTracker {
    fn default() -> Self {
        Self::new(VISIBILITY_THRESHOLD, TieBreak::default())
    }
}

impl SectionTracker {
    pub const fn new(threshold: f32, tie_break: TieBreak) -> Self {
        Self {
            threshold,
            tie_break,
            observers: Vec::new(),
        }
    }

    /// Register an observer for every attached ref. Unattached refs are
    /// skipped until the next mount.
    pub fn observe_all(&mut self, refs: &SectionRefs) {
        for section_ref in refs.iter() {
            if !section_ref.is_attached() {
                debug!(section = section_ref.section.id(), "Section not attached, not observed");
                continue;
            }
            if self.is_observing(section_ref.section) {
                continue;
            }
            self.observers.push(Observer {
                section: section_ref.section,
                intersecting: false,
            });
        }
        debug!(observers = self.observers.len(), "Section observers registered");
    }

    pub fn disconnect_all(&mut self) {
        debug!(observers = self.observers.len(), "Disconnecting section observers");
        self.observers.clear();
    }

    pub fn is_observing(&self, section: SectionId) -> bool {
        self.observers.iter().any(|o| o.section == section)
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Compare every observed region against the viewport. Returns the
    /// section that should become active, if any crossed the threshold.
    pub fn check(&mut self, refs: &SectionRefs, viewport: Viewport) -> Option<SectionId> {
        let threshold = self.threshold;
        let fired: Vec<(SectionId, usize)> = self
            .observers
            .iter_mut()
            .filter_map(|observer| {
                let region = refs.get(observer.section).region()?;
                let now = region.intersection_ratio(viewport) >= threshold;
                let crossed = now && !observer.intersecting;
                observer.intersecting = now;
                crossed.then_some((observer.section, region.top))
            })
            .collect();

        let winner = match self.tie_break {
            TieBreak::LastObserver => fired.last().map(|(s, _)| *s),
            TieBreak::Topmost => fired.iter().min_by_key(|(_, top)| *top).map(|(s, _)| *s),
        };
        if fired.len() > 1 {
            debug!(count = fired.len(), ?winner, "Several sections crossed together");
        }
        winner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::viewport::Region;

    /// Three sections of 40 rows each, viewed through a 20-row window.
    fn refs() -> SectionRefs {
        let mut refs = SectionRefs::default();
        for (i, section) in SectionId::ALL.into_iter().enumerate() {
            refs.attach(
                section,
                Region {
                    top: i * 40,
                    height: 40,
                },
            );
        }
        refs
    }

    const fn at(offset: usize) -> Viewport {
        Viewport {
            offset,
            height: 20,
            content_height: 120,
        }
    }

    #[test]
    fn initial_check_fires_for_visible_section() {
        let mut tracker = SectionTracker::default();
        let refs = refs();
        tracker.observe_all(&refs);
        assert_eq!(tracker.observer_count(), 3);
        assert_eq!(tracker.check(&refs, at(0)), Some(SectionId::About));
        assert_eq!(tracker.check(&refs, at(5)), None);
    }

    #[test]
    fn fires_only_on_entering_edge() {
        let mut tracker = SectionTracker::default();
        let refs = refs();
        tracker.observe_all(&refs);
        tracker.check(&refs, at(0));

        // Education is 9/20 visible: below threshold.
        assert_eq!(tracker.check(&refs, at(29)), None);
        assert_eq!(tracker.check(&refs, at(30)), Some(SectionId::Education));
        assert_eq!(tracker.check(&refs, at(35)), None);
        assert_eq!(tracker.check(&refs, at(90)), Some(SectionId::Projects));
        assert_eq!(tracker.check(&refs, at(0)), Some(SectionId::About));
    }

    #[test]
    fn simultaneous_crossings_use_tie_break() {
        let refs = refs();
        // Rows 30..50 show half of About and half of Education.
        let mut last = SectionTracker::new(VISIBILITY_THRESHOLD, TieBreak::LastObserver);
        last.observe_all(&refs);
        assert_eq!(last.check(&refs, at(30)), Some(SectionId::Education));

        let mut topmost = SectionTracker::new(VISIBILITY_THRESHOLD, TieBreak::Topmost);
        topmost.observe_all(&refs);
        assert_eq!(topmost.check(&refs, at(30)), Some(SectionId::About));
    }

    #[test]
    fn disconnected_tracker_never_fires() {
        let mut tracker = SectionTracker::default();
        let refs = refs();
        tracker.observe_all(&refs);
        tracker.disconnect_all();
        for offset in [0, 40, 100] {
            assert_eq!(tracker.check(&refs, at(offset)), None);
        }
    }

    #[test]
    fn unattached_section_is_not_observed() {
        let mut refs = SectionRefs::default();
        refs.attach(SectionId::About, Region { top: 0, height: 40 });
        let mut tracker = SectionTracker::default();
        tracker.observe_all(&refs);
        assert!(!tracker.is_observing(SectionId::Projects));

        // Attaching later does not register an observer by itself.
        refs.attach(
            SectionId::Projects,
            Region {
                top: 40,
                height: 40,
            },
        );
        assert_eq!(tracker.check(&refs, at(0)), Some(SectionId::About));
        assert_eq!(tracker.check(&refs, at(60)), None);
    }

    #[test]
    fn any_event_sequence_keeps_a_valid_section() {
        let mut tracker = SectionTracker::default();
        let refs = refs();
        tracker.observe_all(&refs);
        let mut active = SectionId::default();
        for offset in [0, 100, 13, 57, 71, 2, 99, 40, 41, 80, 0, 33] {
            if let Some(section) = tracker.check(&refs, at(offset)) {
                active = section;
            }
            assert!(SectionId::ALL.contains(&active));
        }
    }
}
