// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared page harness for the integration tests.

#![allow(dead_code, reason = "Each test binary uses a different subset.")]

use core::time::Duration;

use kurbo::{Point, Size};
use vitrine_interact::sim::{PageLayout, SimulatedMedia, SmoothScrollPane};
use vitrine_interact::{Host, InteractionConfig, PageSession, Signal, SignalOutcome};

pub const VIEWPORT: Size = Size::new(1280.0, 800.0);
pub const SECTIONS: &[(&str, f64)] = &[("about", 800.0), ("experience", 1200.0), ("projects", 900.0)];

pub type Session = PageSession<SimulatedMedia, SmoothScrollPane, PageLayout>;

/// A mounted portfolio page with helpers that keep pane, layout and session
/// in step the way a browser would.
pub struct Page {
    pub session: Session,
}

impl Page {
    pub fn new(config: InteractionConfig) -> Self {
        Self::with(config, SECTIONS, SimulatedMedia::new(6.0))
    }

    pub fn with(config: InteractionConfig, sections: &[(&str, f64)], media: SimulatedMedia) -> Self {
        let layout = PageLayout::new(VIEWPORT, sections).unwrap();
        let registry = layout.registry().clone();
        let targets = layout.targets();
        let host = Host {
            media,
            pane: SmoothScrollPane::new(layout.content_height(), layout.pane_height()),
            probe: layout,
        };
        let session = PageSession::mount(config, registry, VIEWPORT, host, targets).unwrap();
        Self { session }
    }

    /// User scroll: the pane jumps, the page moves, a scroll signal arrives.
    pub fn scroll_to(&mut self, offset: f64) -> SignalOutcome {
        let offset = self.session.pane_mut().jump_to(offset);
        let _ = self.session.probe_mut().set_scroll(offset);
        self.session.dispatch(Signal::Scroll { offset })
    }

    /// Run the pane animation to rest, one scroll signal per frame. Returns
    /// the active section after each frame.
    pub fn run_animation(&mut self) -> Vec<String> {
        let mut seen = Vec::new();
        while let Some(offset) = self.session.pane_mut().tick() {
            let _ = self.session.probe_mut().set_scroll(offset);
            let _ = self.session.dispatch(Signal::Scroll { offset });
            seen.push(self.session.active_section().unwrap_or_default().to_owned());
        }
        seen
    }

    /// Pointer move, then mirror overlay visibility into the layout.
    pub fn move_to(&mut self, at: Point) -> SignalOutcome {
        let out = self.session.dispatch(Signal::PointerMove(at));
        self.sync_overlay();
        out
    }

    pub fn media_ended(&mut self) -> SignalOutcome {
        let out = self.session.dispatch(Signal::MediaEnded);
        self.sync_overlay();
        out
    }

    pub fn advance(&mut self, ms: u64) -> SignalOutcome {
        let out = self.session.advance_by(Duration::from_millis(ms));
        self.sync_overlay();
        out
    }

    pub fn hotspot(&self) -> Point {
        self.session.probe().hotspot_center()
    }

    pub fn surface(&self) -> Point {
        self.session.probe().surface_center()
    }

    pub fn elsewhere(&self) -> Point {
        self.session.probe().pane_point()
    }

    fn sync_overlay(&mut self) {
        let visible = self.session.overlay_visible();
        let _ = self.session.probe_mut().set_overlay_visible(visible);
    }
}
