// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover media overlay controller.
//!
//! ```text
//! Hidden ──enter hotspot──▶ Showing ──play requested──▶ Playing
//! Playing ──media ended──▶ Ending ──pinned, hidden──▶ FadingOut
//! Playing ──pointer outside hotspot and surface──▶ FadingOut
//! FadingOut ──reset timer──▶ Hidden
//! any state ──enter hotspot──▶ Showing
//! ```
//!
//! ## Containment
//!
//! While the overlay is visible, every pointer move is checked: the pointer is
//! inside when the topmost region is the hotspot itself or the overlay
//! surface is on its root→target path. Anything else hides the overlay in the
//! same signal, which covers pointer jumps between visually disjoint regions.
//!
//! ## Reset timer
//!
//! Hiding pauses the media and schedules one reset timer. Only the handle
//! stored in the controller may rewind the media and return to `Hidden`; a new
//! show cycle cancels it, and a stale handle delivered anyway is ignored.

use core::time::Duration;

use tracing::{debug, warn};

use crate::config::InteractionConfig;
use crate::hover::{HoverEvent, HoverState};
use crate::host::MediaElement;
use crate::timer::{TimerHandle, TimerQueue};

/// Overlay lifecycle.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum OverlayState {
    /// Not shown; media rewound.
    #[default]
    Hidden,
    /// Made visible; playback requested.
    Showing,
    /// Visible and (normally) advancing.
    Playing,
    /// Media reached its end and was pinned just before it.
    Ending,
    /// Hidden; waiting for the reset timer.
    FadingOut,
}

impl OverlayState {
    /// Whether the presentation layer should show the overlay.
    pub fn is_visible(self) -> bool {
        matches!(self, Self::Showing | Self::Playing)
    }
}

/// Drives the overlay from pointer paths, media end and timer signals.
///
/// `K` is the region key used by the host's
/// [`RegionProbe`](crate::host::RegionProbe).
#[derive(Clone, Debug)]
pub struct OverlayController<K: Copy + Eq> {
    hotspot: K,
    surface: K,
    hover: HoverState<K>,
    state: OverlayState,
    pending_reset: Option<TimerHandle>,
    fade_delay: Duration,
    end_hold_back: f64,
}

impl<K: Copy + Eq> OverlayController<K> {
    /// Controller for the given hotspot and overlay surface regions.
    pub fn new(hotspot: K, surface: K, config: &InteractionConfig) -> Self {
        Self {
            hotspot,
            surface,
            hover: HoverState::new(),
            state: OverlayState::Hidden,
            pending_reset: None,
            fade_delay: config.fade_delay(),
            end_hold_back: config.end_hold_back,
        }
    }

    /// Current state.
    pub fn state(&self) -> OverlayState {
        self.state
    }

    /// Derived visibility.
    pub fn is_visible(&self) -> bool {
        self.state.is_visible()
    }

    /// Reset timer waiting to fire, if any.
    pub fn pending_reset(&self) -> Option<TimerHandle> {
        self.pending_reset
    }

    /// Hover tracking for the pointer path.
    pub fn hover(&self) -> &HoverState<K> {
        &self.hover
    }

    /// Whether `path` (root→target) counts as inside hotspot or surface.
    pub fn contains(&self, path: &[K]) -> bool {
        path.last() == Some(&self.hotspot) || path.contains(&self.surface)
    }

    /// Handle a pointer move with the path now under the pointer.
    ///
    /// Returns the states entered, in order.
    pub fn on_pointer_move(
        &mut self,
        path: &[K],
        media: &mut impl MediaElement,
        timers: &mut TimerQueue,
    ) -> Vec<OverlayState> {
        let mut entered = Vec::new();
        let events = self.hover.update_path(path);
        if events.contains(&HoverEvent::Enter(self.hotspot)) {
            self.show(media, timers, &mut entered);
        } else if self.is_visible() && !self.contains(path) {
            media.pause();
            self.fade_out(timers, &mut entered);
        }
        entered
    }

    /// Handle the media's natural end. Ignored unless the overlay is visible.
    pub fn on_media_ended(
        &mut self,
        media: &mut impl MediaElement,
        timers: &mut TimerQueue,
    ) -> Vec<OverlayState> {
        let mut entered = Vec::new();
        if !self.is_visible() {
            return entered;
        }
        media.pause();
        let pin = (media.duration() - self.end_hold_back).max(0.0);
        media.set_current_time(pin);
        self.enter(OverlayState::Ending, &mut entered);
        self.fade_out(timers, &mut entered);
        entered
    }

    /// Handle a fired timer. Only the current reset handle has any effect.
    pub fn on_timer(
        &mut self,
        handle: TimerHandle,
        media: &mut impl MediaElement,
    ) -> Vec<OverlayState> {
        let mut entered = Vec::new();
        if self.pending_reset != Some(handle) {
            return entered;
        }
        self.pending_reset = None;
        media.set_current_time(0.0);
        self.enter(OverlayState::Hidden, &mut entered);
        entered
    }

    /// Cancel the reset timer.
    pub fn cancel_pending(&mut self, timers: &mut TimerQueue) {
        if let Some(h) = self.pending_reset.take() {
            timers.cancel(h);
        }
    }

    fn show(
        &mut self,
        media: &mut impl MediaElement,
        timers: &mut TimerQueue,
        entered: &mut Vec<OverlayState>,
    ) {
        self.cancel_pending(timers);
        self.enter(OverlayState::Showing, entered);
        media.set_muted(true);
        media.set_current_time(0.0);
        if let Err(err) = media.play() {
            // Shown without motion until hidden normally.
            warn!(%err, "overlay playback rejected");
        }
        self.enter(OverlayState::Playing, entered);
    }

    fn fade_out(&mut self, timers: &mut TimerQueue, entered: &mut Vec<OverlayState>) {
        self.cancel_pending(timers);
        self.pending_reset = Some(timers.schedule(self.fade_delay));
        self.enter(OverlayState::FadingOut, entered);
    }

    fn enter(&mut self, state: OverlayState, entered: &mut Vec<OverlayState>) {
        debug!(from = ?self.state, to = ?state, "overlay state");
        self.state = state;
        entered.push(state);
    }
}
