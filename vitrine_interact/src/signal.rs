// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input signals and per-component subscriptions.
//!
//! Each component declares the signal kinds it listens to
//! ([`Component::subscriptions`]). A session subscribes every component when
//! it mounts and releases all of them when it ends, so repeated mounts never
//! accumulate listeners.

use bitflags::bitflags;
use kurbo::Point;

use crate::timer::TimerHandle;

/// An input delivered by the host, processed in delivery order.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Signal {
    /// Pointer moved to a viewport position.
    PointerMove(Point),
    /// Viewport resized.
    Resize {
        /// New viewport width.
        width: f64,
        /// New viewport height.
        height: f64,
    },
    /// The content pane scrolled.
    Scroll {
        /// New scroll offset.
        offset: f64,
    },
    /// The overlay media reached its natural end.
    MediaEnded,
    /// A scheduled timer became due.
    TimerElapsed(TimerHandle),
}

impl Signal {
    /// The kind bit used for routing.
    pub fn kind(&self) -> SignalKinds {
        match self {
            Self::PointerMove(_) => SignalKinds::POINTER_MOVE,
            Self::Resize { .. } => SignalKinds::RESIZE,
            Self::Scroll { .. } => SignalKinds::SCROLL,
            Self::MediaEnded => SignalKinds::MEDIA_ENDED,
            Self::TimerElapsed(_) => SignalKinds::TIMER,
        }
    }
}

bitflags! {
    /// Set of signal kinds.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct SignalKinds: u8 {
        /// [`Signal::PointerMove`].
        const POINTER_MOVE = 1 << 0;
        /// [`Signal::Resize`].
        const RESIZE = 1 << 1;
        /// [`Signal::Scroll`].
        const SCROLL = 1 << 2;
        /// [`Signal::MediaEnded`].
        const MEDIA_ENDED = 1 << 3;
        /// [`Signal::TimerElapsed`].
        const TIMER = 1 << 4;
    }
}

/// The session's components, in dispatch order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Component {
    /// [`PointerTracker`](crate::pointer::PointerTracker).
    PointerTracker,
    /// [`SectionObserver`](crate::observer::SectionObserver).
    SectionObserver,
    /// [`Navigator`](crate::navigator::Navigator).
    Navigator,
    /// [`OverlayController`](crate::overlay::OverlayController).
    OverlayController,
}

impl Component {
    /// Every component, in dispatch order.
    pub const ALL: [Self; 4] = [
        Self::PointerTracker,
        Self::SectionObserver,
        Self::Navigator,
        Self::OverlayController,
    ];

    /// Signal kinds this component handles.
    pub fn subscriptions(self) -> SignalKinds {
        match self {
            Self::PointerTracker => SignalKinds::POINTER_MOVE | SignalKinds::RESIZE,
            Self::SectionObserver => SignalKinds::SCROLL | SignalKinds::RESIZE,
            Self::Navigator => SignalKinds::TIMER,
            Self::OverlayController => {
                SignalKinds::POINTER_MOVE | SignalKinds::MEDIA_ENDED | SignalKinds::TIMER
            }
        }
    }
}

/// Identity of one live subscription.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

#[derive(Copy, Clone, Debug)]
struct Entry {
    id: SubscriptionId,
    component: Component,
    kinds: SignalKinds,
}

/// Live subscriptions of one session.
#[derive(Debug, Default)]
pub struct Subscriptions {
    next: u64,
    entries: Vec<Entry>,
}

impl Subscriptions {
    /// No subscriptions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe `component` to `kinds`.
    pub fn subscribe(&mut self, component: Component, kinds: SignalKinds) -> SubscriptionId {
        let id = SubscriptionId(self.next);
        self.next += 1;
        self.entries.push(Entry {
            id,
            component,
            kinds,
        });
        id
    }

    /// Release one subscription. Returns `false` if it was not live.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() != before
    }

    /// Release everything. Returns how many subscriptions were live.
    pub fn release_all(&mut self) -> usize {
        let n = self.entries.len();
        self.entries.clear();
        n
    }

    /// Components listening to `kind`, in dispatch order, without duplicates.
    pub fn listeners(&self, kind: SignalKinds) -> Vec<Component> {
        let mut out: Vec<Component> = self
            .entries
            .iter()
            .filter(|e| e.kinds.intersects(kind))
            .map(|e| e.component)
            .collect();
        out.sort_unstable();
        out.dedup();
        out
    }

    /// Number of live subscriptions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is subscribed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
