// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Smooth scroll navigator.
//!
//! [`Navigator::activate`] writes the active section immediately and asks the
//! pane to animate to the section's top. The write is not a lock: the next
//! observer signal is authoritative again, so a short target section may lose
//! the highlight once scrolling stops.
//!
//! With a settle delay configured, each navigation also schedules one settle
//! timer. When it fires and the target's top rests in the upper half of the
//! pane, the target is written again, undoing an observer pick made on the
//! way there. Otherwise the observer's value stands. A newer navigation
//! replaces the older settle timer.

use core::time::Duration;

use tracing::{debug, trace};

use crate::error::NavigateError;
use crate::host::ScrollPane;
use crate::sections::{ActiveSection, SectionRegistry, Writer};
use crate::timer::{TimerHandle, TimerQueue};

/// Handles menu activations.
#[derive(Clone, Debug, Default)]
pub struct Navigator {
    settle_delay: Option<Duration>,
    pending_settle: Option<(TimerHandle, String)>,
}

impl Navigator {
    /// Navigator with an optional settle pass.
    pub fn new(settle_delay: Option<Duration>) -> Self {
        Self {
            settle_delay,
            pending_settle: None,
        }
    }

    /// Activate section `id`. Returns the scroll target that was requested.
    ///
    /// Unknown ids leave every piece of state untouched.
    pub fn activate(
        &mut self,
        id: &str,
        registry: &SectionRegistry,
        active: &mut ActiveSection,
        pane: &mut impl ScrollPane,
        timers: &mut TimerQueue,
    ) -> Result<f64, NavigateError> {
        let Some(section) = registry.get(id) else {
            return Err(NavigateError::UnknownSection(id.to_owned()));
        };
        let target = section.top();
        active.write(registry, id, Writer::Navigator);
        pane.animate_to(target);
        debug!(section = %id, target, "navigating");

        if let Some(delay) = self.settle_delay {
            self.cancel_pending(timers);
            self.pending_settle = Some((timers.schedule(delay), id.to_owned()));
        }
        Ok(target)
    }

    /// Run the settle check if `handle` is the current settle timer.
    ///
    /// Returns `None` for any other handle, otherwise whether the active id
    /// changed.
    pub fn on_timer(
        &mut self,
        handle: TimerHandle,
        registry: &SectionRegistry,
        active: &mut ActiveSection,
        pane: &impl ScrollPane,
    ) -> Option<bool> {
        if self.pending_settle() != Some(handle) {
            return None;
        }
        let (_, id) = self.pending_settle.take()?;
        let section = registry.get(&id)?;
        let top = section.top() - pane.scroll_offset();
        if top >= 0.0 && top < pane.viewport_height() / 2.0 {
            debug!(section = %id, top, "settled on navigation target");
            Some(active.write(registry, &id, Writer::Navigator))
        } else {
            trace!(section = %id, top, "navigation target out of reach, observer stands");
            Some(false)
        }
    }

    /// Settle timer waiting to fire, if any.
    pub fn pending_settle(&self) -> Option<TimerHandle> {
        self.pending_settle.as_ref().map(|(h, _)| *h)
    }

    /// Cancel the settle timer.
    pub fn cancel_pending(&mut self, timers: &mut TimerQueue) {
        if let Some((h, _)) = self.pending_settle.take() {
            timers.cancel(h);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::Section;

    #[derive(Default)]
    struct Pane {
        offset: f64,
        requests: Vec<f64>,
    }

    impl ScrollPane for Pane {
        fn scroll_offset(&self) -> f64 {
            self.offset
        }
        fn viewport_height(&self) -> f64 {
            800.0
        }
        fn animate_to(&mut self, offset: f64) {
            self.requests.push(offset);
        }
    }

    fn registry() -> SectionRegistry {
        SectionRegistry::new([
            Section::new("about", 0.0, 800.0),
            Section::new("experience", 800.0, 1200.0),
            Section::new("projects", 2000.0, 900.0),
        ])
        .unwrap()
    }

    #[test]
    fn activation_is_synchronous() {
        let r = registry();
        let mut active = ActiveSection::new(&r);
        let mut pane = Pane::default();
        let mut timers = TimerQueue::new();
        let mut nav = Navigator::default();

        let target = nav
            .activate("projects", &r, &mut active, &mut pane, &mut timers)
            .unwrap();
        assert_eq!(target, 2000.0);
        assert_eq!(active.current(), Some("projects"));
        assert_eq!(active.last_writer(), Writer::Navigator);
        assert_eq!(pane.requests, [2000.0]);
        assert_eq!(timers.pending(), 0);
    }

    #[test]
    fn unknown_id_is_a_no_op() {
        let r = registry();
        let mut active = ActiveSection::new(&r);
        let mut pane = Pane::default();
        let mut timers = TimerQueue::new();
        let mut nav = Navigator::new(Some(Duration::from_millis(500)));

        let err = nav
            .activate("contact", &r, &mut active, &mut pane, &mut timers)
            .unwrap_err();
        assert_eq!(err, NavigateError::UnknownSection("contact".into()));
        assert_eq!(active.current(), Some("about"));
        assert!(pane.requests.is_empty());
        assert_eq!(timers.pending(), 0);
    }

    #[test]
    fn settle_timer_is_replaced_not_stacked() {
        let r = registry();
        let mut active = ActiveSection::new(&r);
        let mut pane = Pane::default();
        let mut timers = TimerQueue::new();
        let mut nav = Navigator::new(Some(Duration::from_millis(500)));

        nav.activate("projects", &r, &mut active, &mut pane, &mut timers)
            .unwrap();
        let first = nav.pending_settle().unwrap();
        nav.activate("experience", &r, &mut active, &mut pane, &mut timers)
            .unwrap();
        let second = nav.pending_settle().unwrap();
        assert_ne!(first, second);
        assert_eq!(timers.pending(), 1);

        assert_eq!(nav.on_timer(first, &r, &mut active, &pane), None);
        let fired = timers.advance_by(Duration::from_millis(500));
        assert_eq!(fired, [second]);
        assert!(nav.on_timer(second, &r, &mut active, &pane).is_some());
        assert_eq!(nav.on_timer(second, &r, &mut active, &pane), None);
    }

    // Pane stopped 100 units above projects while the observer moved on.
    #[test]
    fn settle_reapplies_target_in_upper_half() {
        let r = registry();
        let mut active = ActiveSection::new(&r);
        let mut pane = Pane::default();
        let mut timers = TimerQueue::new();
        let mut nav = Navigator::new(Some(Duration::from_millis(500)));
        nav.activate("projects", &r, &mut active, &mut pane, &mut timers)
            .unwrap();
        assert!(active.write(&r, "experience", Writer::Observer));

        pane.offset = 1900.0;
        let fired = timers.advance_by(Duration::from_millis(500));
        assert_eq!(fired.len(), 1);
        assert_eq!(nav.on_timer(fired[0], &r, &mut active, &pane), Some(true));
        assert_eq!(active.current(), Some("projects"));
        assert_eq!(active.last_writer(), Writer::Navigator);
    }

    #[test]
    fn settle_leaves_unreached_target_to_observer() {
        let r = registry();
        let mut active = ActiveSection::new(&r);
        let mut pane = Pane::default();
        let mut timers = TimerQueue::new();
        let mut nav = Navigator::new(Some(Duration::from_millis(500)));
        nav.activate("projects", &r, &mut active, &mut pane, &mut timers)
            .unwrap();
        assert!(active.write(&r, "experience", Writer::Observer));

        // Top at 400 of an 800 pane: lower half.
        pane.offset = 1600.0;
        let handle = nav.pending_settle().unwrap();
        assert_eq!(nav.on_timer(handle, &r, &mut active, &pane), Some(false));
        assert_eq!(active.current(), Some("experience"));

        // Scrolled past the top.
        nav.activate("about", &r, &mut active, &mut pane, &mut timers)
            .unwrap();
        assert!(active.write(&r, "experience", Writer::Observer));
        pane.offset = 10.0;
        let handle = nav.pending_settle().unwrap();
        assert_eq!(nav.on_timer(handle, &r, &mut active, &pane), Some(false));
        assert_eq!(active.current(), Some("experience"));
    }

    #[test]
    fn cancel_drops_the_settle_timer() {
        let r = registry();
        let mut active = ActiveSection::new(&r);
        let mut pane = Pane::default();
        let mut timers = TimerQueue::new();
        let mut nav = Navigator::new(Some(Duration::from_millis(500)));
        nav.activate("projects", &r, &mut active, &mut pane, &mut timers)
            .unwrap();
        nav.cancel_pending(&mut timers);
        assert_eq!(nav.pending_settle(), None);
        assert_eq!(timers.pending(), 0);
    }
}
