// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Interaction constants and their optional TOML form.
//!
//! Production pages use [`InteractionConfig::default`], which carries the
//! build-time constants. Hosts and tests can load overrides from TOML; any
//! missing field falls back to its default.

use core::time::Duration;

use serde::Deserialize;

use crate::error::ConfigError;

/// Widths at or below this are [`Compact`](crate::pointer::ViewportMode::Compact).
pub const COMPACT_MAX_WIDTH: f64 = 600.0;
/// Fraction of a section that must be on screen for the ratio observer.
pub const VISIBILITY_RATIO: f64 = 0.5;
/// Lead distance used by the polling observer.
pub const SCROLL_SPY_OFFSET: f64 = 60.0;
/// Delay between hiding the overlay and rewinding its media.
pub const FADE_DELAY_MS: u64 = 1000;
/// How far before the end the media is pinned once it finishes, in seconds.
pub const END_HOLD_BACK: f64 = 0.05;

/// Which rule decides the active section.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ObserverStrategy {
    /// The last section to reach the visibility ratio wins. Leads
    /// [`ScrollPolling`](Self::ScrollPolling) near section boundaries.
    VisibilityRatio,
    /// The last section, in document order, whose top passed the scroll-spy offset.
    #[default]
    ScrollPolling,
}

/// Tunables for a page session.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct InteractionConfig {
    /// See [`COMPACT_MAX_WIDTH`].
    #[serde(default = "default_compact_max_width")]
    pub compact_max_width: f64,
    /// See [`VISIBILITY_RATIO`]. Must lie in `(0, 1]`.
    #[serde(default = "default_visibility_ratio")]
    pub visibility_ratio: f64,
    /// See [`SCROLL_SPY_OFFSET`].
    #[serde(default = "default_scroll_spy_offset")]
    pub scroll_spy_offset: f64,
    /// See [`FADE_DELAY_MS`].
    #[serde(default = "default_fade_delay_ms")]
    pub fade_delay_ms: u64,
    /// See [`END_HOLD_BACK`].
    #[serde(default = "default_end_hold_back")]
    pub end_hold_back: f64,
    /// Observer rule.
    #[serde(default)]
    pub observer: ObserverStrategy,
    /// When set, navigation re-checks its target this long after the scroll
    /// was requested.
    #[serde(default)]
    pub settle_delay_ms: Option<u64>,
}

fn default_compact_max_width() -> f64 {
    COMPACT_MAX_WIDTH
}

fn default_visibility_ratio() -> f64 {
    VISIBILITY_RATIO
}

fn default_scroll_spy_offset() -> f64 {
    SCROLL_SPY_OFFSET
}

fn default_fade_delay_ms() -> u64 {
    FADE_DELAY_MS
}

fn default_end_hold_back() -> f64 {
    END_HOLD_BACK
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            compact_max_width: COMPACT_MAX_WIDTH,
            visibility_ratio: VISIBILITY_RATIO,
            scroll_spy_offset: SCROLL_SPY_OFFSET,
            fade_delay_ms: FADE_DELAY_MS,
            end_hold_back: END_HOLD_BACK,
            observer: ObserverStrategy::default(),
            settle_delay_ms: None,
        }
    }
}

impl InteractionConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values no page could use.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check(
            "compact_max_width",
            self.compact_max_width,
            self.compact_max_width > 0.0,
        )?;
        check(
            "visibility_ratio",
            self.visibility_ratio,
            self.visibility_ratio > 0.0 && self.visibility_ratio <= 1.0,
        )?;
        check(
            "scroll_spy_offset",
            self.scroll_spy_offset,
            self.scroll_spy_offset >= 0.0,
        )?;
        check(
            "end_hold_back",
            self.end_hold_back,
            self.end_hold_back >= 0.0,
        )?;
        Ok(())
    }

    /// Fade-out delay as a duration.
    pub fn fade_delay(&self) -> Duration {
        Duration::from_millis(self.fade_delay_ms)
    }

    /// Post-navigation settle delay, if enabled.
    pub fn settle_delay(&self) -> Option<Duration> {
        self.settle_delay_ms.map(Duration::from_millis)
    }
}

// NaN fails every comparison above, so it is rejected here as well.
fn check(field: &'static str, value: f64, ok: bool) -> Result<(), ConfigError> {
    if ok && value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange { field, value })
    }
}
