// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Viewport section observer: decides which section is active while scrolling.
//!
//! ## Strategies
//!
//! - [`VisibilityRatio`](ObserverStrategy::VisibilityRatio): a section is
//!   *satisfied* when its [`coverage`] reaches the configured ratio. On each
//!   scroll signal, sections that just became satisfied are *entering*; the
//!   last entering section in document order overwrites the active id. Nothing
//!   is voted: sections that stay satisfied do not compete.
//! - [`ScrollPolling`](ObserverStrategy::ScrollPolling): the last section, in
//!   document order, with `offset >= top - scroll_spy_offset`; the first
//!   section when none qualifies.
//!
//! At the very top of the pane (`offset <= 0`) the first section is active
//! under either strategy.
//!
//! ## Boundaries
//!
//! Coverage is measured against `min(section height, pane height)`, so a
//! section taller than the pane still reaches full coverage once it fills the
//! pane. Exactly reaching the ratio counts as satisfied, and the polling rule
//! uses `>=` as well.
//!
//! Polling is the default: its answer depends on the offset alone, so a pane
//! at rest resolves to the same section however it got there. The ratio
//! strategy follows transitions and differs from polling before each
//! section's top:
//!
//! - From the offset where a section reaches the ratio up to
//!   `top - scroll_spy_offset`, the ratio strategy already reports that
//!   section while polling still reports the one above. With the default
//!   constants and sections at least a pane tall, that band is
//!   `top - pane / 2 .. top - 60`.
//! - Where two adjacent sections both meet the ratio, the one that entered
//!   last wins: the lower one when scrolling down, the upper one when
//!   scrolling up.
//!
//! Outside those bands both strategies agree at rest.

use tracing::trace;

use crate::config::{InteractionConfig, ObserverStrategy};
use crate::sections::{ActiveSection, Section, SectionRegistry, Writer};

/// Scroll position and visible extent of the pane.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ScrollFrame {
    /// Current scroll offset of the pane content.
    pub offset: f64,
    /// Visible height of the pane.
    pub viewport_height: f64,
}

impl ScrollFrame {
    /// Bottom edge of the visible span, in content coordinates.
    pub fn bottom(&self) -> f64 {
        self.offset + self.viewport_height
    }
}

/// Fraction of `section` visible in `frame`, in `[0, 1]`.
pub fn coverage(section: &Section, frame: ScrollFrame) -> f64 {
    let denom = section.height().min(frame.viewport_height);
    if denom <= 0.0 {
        return 0.0;
    }
    let visible = section.bottom().min(frame.bottom()) - section.top().max(frame.offset);
    (visible.max(0.0) / denom).min(1.0)
}

/// Determines the active section from scroll signals.
#[derive(Clone, Debug)]
pub struct SectionObserver {
    strategy: ObserverStrategy,
    visibility_ratio: f64,
    scroll_spy_offset: f64,
    satisfied: Vec<bool>,
    primed: bool,
}

impl SectionObserver {
    /// Observer for `registry` using the strategy and constants from `config`.
    pub fn new(config: &InteractionConfig, registry: &SectionRegistry) -> Self {
        Self {
            strategy: config.observer,
            visibility_ratio: config.visibility_ratio,
            scroll_spy_offset: config.scroll_spy_offset,
            satisfied: vec![false; registry.len()],
            primed: false,
        }
    }

    /// Strategy in use.
    pub fn strategy(&self) -> ObserverStrategy {
        self.strategy
    }

    /// Forget transition history; the next signal is treated as the first.
    pub fn reset(&mut self) {
        self.primed = false;
        self.satisfied.iter_mut().for_each(|s| *s = false);
    }

    /// Handle a scroll (or resize) signal. Returns whether the active id changed.
    ///
    /// The first signal after construction or [`reset`](Self::reset) treats
    /// every satisfied section as entering.
    pub fn observe(
        &mut self,
        registry: &SectionRegistry,
        frame: ScrollFrame,
        active: &mut ActiveSection,
    ) -> bool {
        let target = match self.strategy {
            ObserverStrategy::VisibilityRatio => self.entering(registry, frame),
            ObserverStrategy::ScrollPolling => self.polled(registry, frame),
        };
        self.primed = true;
        self.apply(registry, frame, target, active)
    }

    fn apply(
        &self,
        registry: &SectionRegistry,
        frame: ScrollFrame,
        target: Option<usize>,
        active: &mut ActiveSection,
    ) -> bool {
        let target = if frame.offset <= 0.0 && !registry.is_empty() {
            Some(0)
        } else {
            target
        };
        let Some(section) = target.and_then(|i| registry.at(i)) else {
            trace!(offset = frame.offset, "no section transition");
            return false;
        };
        active.write(registry, section.id(), Writer::Observer)
    }

    // Updates the satisfied flags and returns the last section that just
    // became satisfied.
    fn entering(&mut self, registry: &SectionRegistry, frame: ScrollFrame) -> Option<usize> {
        if self.satisfied.len() != registry.len() {
            self.satisfied = vec![false; registry.len()];
            self.primed = false;
        }
        let mut last = None;
        for (i, section) in registry.iter().enumerate() {
            let now = coverage(section, frame) >= self.visibility_ratio;
            let was = self.primed && self.satisfied[i];
            if now && !was {
                last = Some(i);
            }
            self.satisfied[i] = now;
        }
        last
    }

    fn polled(&self, registry: &SectionRegistry, frame: ScrollFrame) -> Option<usize> {
        if registry.is_empty() {
            return None;
        }
        let last = registry
            .iter()
            .rposition(|s| frame.offset >= s.top() - self.scroll_spy_offset);
        Some(last.unwrap_or(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const H: f64 = 800.0;

    fn registry() -> SectionRegistry {
        SectionRegistry::new([
            Section::new("about", 0.0, 800.0),
            Section::new("experience", 800.0, 1200.0),
            Section::new("projects", 2000.0, 900.0),
        ])
        .unwrap()
    }

    fn frame(offset: f64) -> ScrollFrame {
        ScrollFrame {
            offset,
            viewport_height: H,
        }
    }

    fn config(strategy: ObserverStrategy) -> InteractionConfig {
        InteractionConfig {
            observer: strategy,
            ..Default::default()
        }
    }

    #[test]
    fn coverage_uses_the_smaller_extent() {
        let tall = Section::new("tall", 0.0, 4000.0);
        assert_eq!(coverage(&tall, frame(1000.0)), 1.0);
        let short = Section::new("short", 100.0, 200.0);
        assert_eq!(coverage(&short, frame(0.0)), 1.0);
        assert_eq!(coverage(&short, frame(200.0)), 0.5);
        assert_eq!(coverage(&short, frame(400.0)), 0.0);
        assert_eq!(coverage(&Section::new("empty", 0.0, 0.0), frame(0.0)), 0.0);
    }

    // about -> experience once experience crosses 50%.
    #[test]
    fn ratio_crossing_activates_experience() {
        let r = registry();
        let mut active = ActiveSection::new(&r);
        let mut obs = SectionObserver::new(&config(ObserverStrategy::VisibilityRatio), &r);
        assert!(!obs.observe(&r, frame(0.0), &mut active));
        assert_eq!(active.current(), Some("about"));

        // experience has 350 of its 800 visible units on screen.
        assert!(!obs.observe(&r, frame(350.0), &mut active));
        assert_eq!(active.current(), Some("about"));

        // 400 of 800: exactly at the ratio.
        assert!(obs.observe(&r, frame(400.0), &mut active));
        assert_eq!(active.current(), Some("experience"));
        assert_eq!(active.last_writer(), Writer::Observer);
    }

    // Two sections stay satisfied; only the transition counts.
    #[test]
    fn ratio_has_no_voting() {
        let r = registry();
        let mut active = ActiveSection::new(&r);
        let mut obs = SectionObserver::new(&config(ObserverStrategy::VisibilityRatio), &r);
        let _ = obs.observe(&r, frame(400.0), &mut active);
        assert_eq!(active.current(), Some("experience"));

        // Navigator overrides; about is still satisfied but does not re-enter.
        assert!(active.write(&r, "about", Writer::Navigator));
        assert!(!obs.observe(&r, frame(390.0), &mut active));
        assert_eq!(active.current(), Some("about"));
    }

    #[test]
    fn ratio_scrolling_up_reactivates_previous_section() {
        let r = registry();
        let mut active = ActiveSection::new(&r);
        let mut obs = SectionObserver::new(&config(ObserverStrategy::VisibilityRatio), &r);
        let _ = obs.observe(&r, frame(2100.0), &mut active);
        assert_eq!(active.current(), Some("projects"));
        let _ = obs.observe(&r, frame(1700.0), &mut active);
        assert_eq!(active.current(), Some("projects"));
        let _ = obs.observe(&r, frame(1500.0), &mut active);
        assert_eq!(active.current(), Some("experience"));
    }

    #[test]
    fn polling_uses_the_lead_offset() {
        let r = registry();
        let mut active = ActiveSection::new(&r);
        let mut obs = SectionObserver::new(&config(ObserverStrategy::ScrollPolling), &r);
        let _ = obs.observe(&r, frame(739.0), &mut active);
        assert_eq!(active.current(), Some("about"));
        let _ = obs.observe(&r, frame(740.0), &mut active);
        assert_eq!(active.current(), Some("experience"));
        let _ = obs.observe(&r, frame(5000.0), &mut active);
        assert_eq!(active.current(), Some("projects"));
    }

    #[test]
    fn top_of_pane_is_always_first_section() {
        // Short first section: experience is fully visible at the top too.
        let r = SectionRegistry::new([
            Section::new("about", 0.0, 100.0),
            Section::new("experience", 100.0, 300.0),
        ])
        .unwrap();
        for strategy in [ObserverStrategy::VisibilityRatio, ObserverStrategy::ScrollPolling] {
            let mut active = ActiveSection::new(&r);
            let mut obs = SectionObserver::new(&config(strategy), &r);
            let _ = obs.observe(&r, frame(50.0), &mut active);
            let _ = obs.observe(&r, frame(0.0), &mut active);
            assert_eq!(active.current(), Some("about"), "{strategy:?}");
        }
    }

    #[test]
    fn empty_registry_is_inert() {
        let r = SectionRegistry::default();
        let mut active = ActiveSection::new(&r);
        for strategy in [ObserverStrategy::VisibilityRatio, ObserverStrategy::ScrollPolling] {
            let mut obs = SectionObserver::new(&config(strategy), &r);
            assert!(!obs.observe(&r, frame(0.0), &mut active));
            assert!(!obs.observe(&r, frame(300.0), &mut active));
        }
        assert_eq!(active.current(), None);
    }

    #[test]
    fn reset_replays_initial_transitions() {
        let r = registry();
        let mut active = ActiveSection::new(&r);
        let mut obs = SectionObserver::new(&config(ObserverStrategy::VisibilityRatio), &r);
        let _ = obs.observe(&r, frame(1000.0), &mut active);
        assert!(active.write(&r, "about", Writer::Navigator));
        obs.reset();
        assert!(obs.observe(&r, frame(1000.0), &mut active));
        assert_eq!(active.current(), Some("experience"));
    }

    fn rest_after(strategy: ObserverStrategy, offsets: &[f64]) -> Option<String> {
        let r = registry();
        let mut active = ActiveSection::new(&r);
        let mut obs = SectionObserver::new(&config(strategy), &r);
        for &offset in offsets {
            let _ = obs.observe(&r, frame(offset), &mut active);
        }
        active.current().map(str::to_owned)
    }

    // Polling rests on the same section whichever way the pane arrived.
    #[test]
    fn polling_rest_is_path_independent() {
        let p = ObserverStrategy::ScrollPolling;
        for (down, up, expected) in [
            (&[0.0, 400.0, 500.0][..], &[2100.0, 1500.0, 500.0][..], "about"),
            (&[1500.0, 1600.0][..], &[2100.0, 1700.0, 1600.0][..], "experience"),
        ] {
            assert_eq!(rest_after(p, down).as_deref(), Some(expected));
            assert_eq!(rest_after(p, up).as_deref(), Some(expected));
        }
    }

    // 400 units before experience's top it already fills half the pane.
    #[test]
    fn ratio_leads_polling_before_a_top() {
        let v = ObserverStrategy::VisibilityRatio;
        assert_eq!(rest_after(v, &[0.0, 400.0, 500.0]).as_deref(), Some("experience"));
        assert_eq!(rest_after(v, &[2100.0, 1500.0, 500.0]).as_deref(), Some("experience"));
        // Past the lead offset the two agree again.
        assert_eq!(rest_after(v, &[0.0, 760.0]).as_deref(), Some("experience"));
        assert_eq!(
            rest_after(ObserverStrategy::ScrollPolling, &[0.0, 760.0]).as_deref(),
            Some("experience")
        );
    }

    // At 1600 experience and projects both show 400 units.
    #[test]
    fn ratio_tie_goes_to_the_last_entering() {
        let v = ObserverStrategy::VisibilityRatio;
        assert_eq!(rest_after(v, &[1500.0, 1600.0]).as_deref(), Some("projects"));
        assert_eq!(rest_after(v, &[2100.0, 1700.0, 1600.0]).as_deref(), Some("experience"));
    }
}
