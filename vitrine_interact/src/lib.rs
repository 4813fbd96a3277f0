// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vitrine Interact: interaction coordination for a single-page portfolio.
//!
//! Four components react to host signals on one UI thread:
//!
//! - [`pointer::PointerTracker`] keeps the latest pointer sample and picks the
//!   [`ViewportMode`](pointer::ViewportMode) from the viewport width.
//! - [`observer::SectionObserver`] decides which content section is active
//!   while the pane scrolls.
//! - [`navigator::Navigator`] highlights a section immediately and smooth
//!   scrolls to it.
//! - [`overlay::OverlayController`] shows a muted media overlay while the
//!   pointer is over a hotspot and tears it down with a single delayed reset.
//!
//! [`session::PageSession`] owns them, routes [`signal::Signal`]s in a fixed
//! order and releases every subscription and timer when it ends.
//!
//! The host supplies capabilities through the traits in [`host`]: a media
//! element, a scroll pane and a region probe. [`sim`] has in-memory versions;
//! with the default `regions_adapter` feature the probe can be a
//! [`vitrine_regions`](https://docs.rs/vitrine_regions) tree.
//!
//! ## Example
//!
//! ```
//! # #[cfg(feature = "regions_adapter")]
//! # {
//! use core::time::Duration;
//! use kurbo::Size;
//! use vitrine_interact::config::InteractionConfig;
//! use vitrine_interact::overlay::OverlayState;
//! use vitrine_interact::session::{Host, PageSession};
//! use vitrine_interact::signal::Signal;
//! use vitrine_interact::sim::{PageLayout, SimulatedMedia, SmoothScrollPane};
//!
//! let viewport = Size::new(1280.0, 800.0);
//! let page = PageLayout::new(
//!     viewport,
//!     &[("about", 800.0), ("experience", 1200.0), ("projects", 900.0)],
//! )
//! .unwrap();
//! let registry = page.registry().clone();
//! let targets = page.targets();
//! let host = Host {
//!     media: SimulatedMedia::new(6.0),
//!     pane: SmoothScrollPane::new(page.content_height(), page.pane_height()),
//!     probe: page,
//! };
//! let mut session =
//!     PageSession::mount(InteractionConfig::default(), registry, viewport, host, targets).unwrap();
//! assert_eq!(session.active_section(), Some("about"));
//!
//! // Menu click: highlighted at once, scrolled there over the next frames.
//! session.navigate("projects").unwrap();
//! assert_eq!(session.active_section(), Some("projects"));
//!
//! // Hover the hotspot, then leave it.
//! let hotspot = session.probe().hotspot_center();
//! let elsewhere = session.probe().pane_point();
//! session.dispatch(Signal::PointerMove(hotspot));
//! assert!(session.overlay_visible());
//! session.dispatch(Signal::PointerMove(elsewhere));
//! assert_eq!(session.overlay_state(), OverlayState::FadingOut);
//! session.advance_by(Duration::from_millis(1000));
//! assert_eq!(session.overlay_state(), OverlayState::Hidden);
//! # }
//! ```
//!
//! ## Logging
//!
//! Components emit [`tracing`] events: `debug` for state transitions, `trace`
//! for per-signal dispatch, `warn` when the host refuses playback. Installing
//! a subscriber is up to the host.

pub mod adapters;
pub mod config;
pub mod error;
pub mod host;
pub mod hover;
pub mod navigator;
pub mod observer;
pub mod overlay;
pub mod pointer;
pub mod sections;
pub mod session;
pub mod signal;
pub mod sim;
pub mod timer;

pub use config::InteractionConfig;
pub use error::{ConfigError, NavigateError, PlaybackError, RegistryError};
pub use session::{Host, OverlayTargets, PageSession, SignalOutcome};
pub use signal::Signal;
