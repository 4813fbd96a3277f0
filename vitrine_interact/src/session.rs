// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One page session: the four components wired to host capabilities.
//!
//! A session is created by [`PageSession::mount`] and torn down by
//! [`PageSession::unmount`] or by dropping it. Everything it owns is
//! process-local and discarded at the end; nothing persists.
//!
//! Signals are processed strictly in delivery order. Within one signal the
//! subscribed components run in [`Component::ALL`] order, so a resize updates
//! the viewport mode before the observer re-evaluates, and the pointer sample
//! is recorded before the overlay tests containment.

use core::time::Duration;

use kurbo::Size;
use tracing::{debug, trace};

use crate::config::InteractionConfig;
use crate::error::{ConfigError, NavigateError};
use crate::host::{MediaElement, RegionProbe, ScrollPane};
use crate::navigator::Navigator;
use crate::observer::{ScrollFrame, SectionObserver};
use crate::overlay::{OverlayController, OverlayState};
use crate::pointer::{Follower, PointerSample, PointerTracker, ViewportMode};
use crate::sections::{ActiveSection, SectionRegistry};
use crate::signal::{Component, Signal, Subscriptions};
use crate::timer::TimerQueue;

/// Capabilities provided by the render surface.
#[derive(Clone, Debug, Default)]
pub struct Host<M, P, R> {
    /// Overlay media.
    pub media: M,
    /// Scrollable content pane.
    pub pane: P,
    /// Pointer hit testing.
    pub probe: R,
}

/// Regions the overlay controller watches.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct OverlayTargets<K> {
    /// Region whose pointer-enter shows the overlay.
    pub hotspot: K,
    /// Region holding the media; pointer presence here keeps it shown.
    pub surface: K,
}

/// What a signal changed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SignalOutcome {
    /// The active section id changed.
    pub active_changed: bool,
    /// The viewport mode changed.
    pub mode_changed: bool,
    /// Overlay states entered, in order.
    pub overlay: Vec<OverlayState>,
    /// A post-navigation settle pass ran.
    pub settled: bool,
}

impl SignalOutcome {
    /// Whether nothing observable changed.
    pub fn is_quiet(&self) -> bool {
        !self.active_changed && !self.mode_changed && self.overlay.is_empty() && !self.settled
    }

    fn merge(&mut self, other: Self) {
        self.active_changed |= other.active_changed;
        self.mode_changed |= other.mode_changed;
        self.overlay.extend(other.overlay);
        self.settled |= other.settled;
    }
}

/// A mounted page.
pub struct PageSession<M: MediaElement, P: ScrollPane, R: RegionProbe> {
    registry: SectionRegistry,
    active: ActiveSection,
    pointer: PointerTracker,
    observer: SectionObserver,
    navigator: Navigator,
    overlay: OverlayController<R::Region>,
    timers: TimerQueue,
    subscriptions: Subscriptions,
    host: Host<M, P, R>,
    viewport: Size,
    mounted: bool,
}

impl<M: MediaElement, P: ScrollPane, R: RegionProbe> PageSession<M, P, R> {
    /// Validate `config`, subscribe every component and run the initial
    /// viewport and observer pass.
    pub fn mount(
        config: InteractionConfig,
        registry: SectionRegistry,
        viewport: Size,
        host: Host<M, P, R>,
        targets: OverlayTargets<R::Region>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut subscriptions = Subscriptions::new();
        for component in Component::ALL {
            let _ = subscriptions.subscribe(component, component.subscriptions());
        }
        let mut session = Self {
            active: ActiveSection::new(&registry),
            pointer: PointerTracker::new(config.compact_max_width),
            observer: SectionObserver::new(&config, &registry),
            navigator: Navigator::new(config.settle_delay()),
            overlay: OverlayController::new(targets.hotspot, targets.surface, &config),
            timers: TimerQueue::new(),
            subscriptions,
            registry,
            host,
            viewport,
            mounted: true,
        };
        let _ = session.pointer.on_resize(viewport.width);
        let frame = session.pane_frame();
        let _ = session
            .observer
            .observe(&session.registry, frame, &mut session.active);
        debug!(
            sections = session.registry.len(),
            mode = ?session.pointer.mode(),
            active = ?session.active.current(),
            "page session mounted"
        );
        Ok(session)
    }

    /// Process one signal. Ignored after unmount.
    pub fn dispatch(&mut self, signal: Signal) -> SignalOutcome {
        let mut outcome = SignalOutcome::default();
        if !self.mounted {
            return outcome;
        }
        trace!(?signal, "dispatch");
        for component in self.subscriptions.listeners(signal.kind()) {
            match (component, signal) {
                (Component::PointerTracker, Signal::PointerMove(at)) => {
                    self.pointer.on_pointer_move(at);
                }
                (Component::PointerTracker, Signal::Resize { width, height }) => {
                    self.viewport = Size::new(width, height);
                    outcome.mode_changed |= self.pointer.on_resize(width);
                }
                (Component::SectionObserver, Signal::Scroll { offset }) => {
                    let frame = ScrollFrame {
                        offset,
                        viewport_height: self.host.pane.viewport_height(),
                    };
                    outcome.active_changed |=
                        self.observer
                            .observe(&self.registry, frame, &mut self.active);
                }
                (Component::SectionObserver, Signal::Resize { .. }) => {
                    let frame = self.pane_frame();
                    outcome.active_changed |=
                        self.observer
                            .observe(&self.registry, frame, &mut self.active);
                }
                (Component::Navigator, Signal::TimerElapsed(handle)) => {
                    if let Some(changed) = self.navigator.on_timer(
                        handle,
                        &self.registry,
                        &mut self.active,
                        &self.host.pane,
                    ) {
                        outcome.settled = true;
                        outcome.active_changed |= changed;
                    }
                }
                (Component::OverlayController, Signal::PointerMove(at)) => {
                    let path = self.host.probe.path_at(at);
                    outcome.overlay.extend(self.overlay.on_pointer_move(
                        &path,
                        &mut self.host.media,
                        &mut self.timers,
                    ));
                }
                (Component::OverlayController, Signal::MediaEnded) => {
                    outcome.overlay.extend(
                        self.overlay
                            .on_media_ended(&mut self.host.media, &mut self.timers),
                    );
                }
                (Component::OverlayController, Signal::TimerElapsed(handle)) => {
                    outcome
                        .overlay
                        .extend(self.overlay.on_timer(handle, &mut self.host.media));
                }
                _ => {}
            }
        }
        outcome
    }

    /// Advance the session clock to `now` and deliver every timer that fell due.
    pub fn advance_clock(&mut self, now: Duration) -> SignalOutcome {
        let mut outcome = SignalOutcome::default();
        if !self.mounted {
            return outcome;
        }
        for handle in self.timers.advance_to(now) {
            outcome.merge(self.dispatch(Signal::TimerElapsed(handle)));
        }
        outcome
    }

    /// Advance the session clock by `delta`.
    pub fn advance_by(&mut self, delta: Duration) -> SignalOutcome {
        self.advance_clock(self.timers.now().saturating_add(delta))
    }

    /// Menu activation: highlight `id` now and scroll the pane to it.
    pub fn navigate(&mut self, id: &str) -> Result<f64, NavigateError> {
        self.navigator.activate(
            id,
            &self.registry,
            &mut self.active,
            &mut self.host.pane,
            &mut self.timers,
        )
    }

    /// Cancel pending timers and release every subscription. Idempotent.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.navigator.cancel_pending(&mut self.timers);
        self.overlay.cancel_pending(&mut self.timers);
        self.timers.clear();
        let released = self.subscriptions.release_all();
        self.mounted = false;
        debug!(released, "page session unmounted");
    }

    /// Whether the session still handles signals.
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Id to highlight in the navigation menu.
    pub fn active_section(&self) -> Option<&str> {
        self.active.current()
    }

    /// Active section value, including its last writer.
    pub fn active(&self) -> &ActiveSection {
        &self.active
    }

    /// The frozen section list.
    pub fn registry(&self) -> &SectionRegistry {
        &self.registry
    }

    /// Latest pointer sample.
    pub fn pointer(&self) -> PointerSample {
        self.pointer.sample()
    }

    /// Current viewport mode.
    pub fn viewport_mode(&self) -> ViewportMode {
        self.pointer.mode()
    }

    /// Last reported viewport size.
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Follower variant to render.
    pub fn follower(&self) -> Follower {
        self.pointer.follower()
    }

    /// Overlay lifecycle state.
    pub fn overlay_state(&self) -> OverlayState {
        self.overlay.state()
    }

    /// Whether the overlay should be shown.
    pub fn overlay_visible(&self) -> bool {
        self.overlay.is_visible()
    }

    /// Session clock.
    pub fn now(&self) -> Duration {
        self.timers.now()
    }

    /// Number of timers waiting to fire.
    pub fn pending_timers(&self) -> usize {
        self.timers.pending()
    }

    /// Live subscriptions.
    pub fn subscriptions(&self) -> &Subscriptions {
        &self.subscriptions
    }

    /// Media capability.
    pub fn media(&self) -> &M {
        &self.host.media
    }

    /// Media capability, mutably.
    pub fn media_mut(&mut self) -> &mut M {
        &mut self.host.media
    }

    /// Pane capability.
    pub fn pane(&self) -> &P {
        &self.host.pane
    }

    /// Pane capability, mutably.
    pub fn pane_mut(&mut self) -> &mut P {
        &mut self.host.pane
    }

    /// Probe capability.
    pub fn probe(&self) -> &R {
        &self.host.probe
    }

    /// Probe capability, mutably.
    pub fn probe_mut(&mut self) -> &mut R {
        &mut self.host.probe
    }

    fn pane_frame(&self) -> ScrollFrame {
        ScrollFrame {
            offset: self.host.pane.scroll_offset(),
            viewport_height: self.host.pane.viewport_height(),
        }
    }
}

impl<M: MediaElement, P: ScrollPane, R: RegionProbe> core::fmt::Debug for PageSession<M, P, R> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PageSession")
            .field("mounted", &self.mounted)
            .field("active", &self.active.current())
            .field("mode", &self.pointer.mode())
            .field("overlay", &self.overlay.state())
            .field("now", &self.timers.now())
            .field("subscriptions", &self.subscriptions.len())
            .finish_non_exhaustive()
    }
}

impl<M: MediaElement, P: ScrollPane, R: RegionProbe> Drop for PageSession<M, P, R> {
    fn drop(&mut self) {
        self.unmount();
    }
}
