// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer tracker: the latest pointer sample and the viewport mode.
//!
//! The follower indicator has two mutually exclusive variants. On wide
//! viewports a light indicator sits under the pointer; on compact viewports
//! a self-animating ambient element is shown and the pointer is ignored.
//!
//! ```
//! use vitrine_interact::pointer::{Follower, PointerTracker, ViewportMode};
//! use kurbo::Point;
//!
//! let mut tracker = PointerTracker::new(600.0);
//! tracker.on_resize(601.0);
//! tracker.on_pointer_move(Point::new(12.0, 34.0));
//! assert_eq!(tracker.mode(), ViewportMode::Desktop);
//! assert!(matches!(tracker.follower(), Follower::Light { .. }));
//!
//! tracker.on_resize(600.0);
//! assert_eq!(tracker.follower(), Follower::Ambient);
//! ```

use kurbo::Point;
use tracing::debug;

/// Most recent pointer position, in viewport coordinates.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct PointerSample {
    /// Horizontal position.
    pub x: f64,
    /// Vertical position.
    pub y: f64,
}

impl PointerSample {
    /// As a Kurbo point.
    pub fn to_point(self) -> Point {
        Point::new(self.x, self.y)
    }
}

impl From<Point> for PointerSample {
    fn from(p: Point) -> Self {
        Self { x: p.x, y: p.y }
    }
}

/// Presentation branch chosen from the viewport width.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum ViewportMode {
    /// Wide viewport: pointer-following light.
    #[default]
    Desktop,
    /// Narrow viewport: ambient animation, pointer ignored.
    Compact,
}

impl ViewportMode {
    /// `width <= compact_max_width` is compact. No hysteresis.
    pub fn for_width(width: f64, compact_max_width: f64) -> Self {
        if width <= compact_max_width {
            Self::Compact
        } else {
            Self::Desktop
        }
    }
}

/// What the render layer should draw for the follower.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Follower {
    /// Light indicator centered on the pointer.
    Light {
        /// Where to draw it.
        at: PointerSample,
    },
    /// Self-animating ambient element.
    Ambient,
}

/// Owns [`PointerSample`] and [`ViewportMode`].
#[derive(Clone, Debug)]
pub struct PointerTracker {
    sample: PointerSample,
    mode: ViewportMode,
    compact_max_width: f64,
}

impl PointerTracker {
    /// Tracker in desktop mode with the pointer at the origin.
    pub fn new(compact_max_width: f64) -> Self {
        Self {
            sample: PointerSample::default(),
            mode: ViewportMode::Desktop,
            compact_max_width,
        }
    }

    /// Record a pointer position. Last write wins.
    pub fn on_pointer_move(&mut self, at: Point) {
        self.sample = at.into();
    }

    /// Recompute the mode for a new width. Returns whether it changed.
    pub fn on_resize(&mut self, width: f64) -> bool {
        let mode = ViewportMode::for_width(width, self.compact_max_width);
        if mode == self.mode {
            return false;
        }
        debug!(from = ?self.mode, to = ?mode, width, "viewport mode changed");
        self.mode = mode;
        true
    }

    /// Latest pointer sample.
    pub fn sample(&self) -> PointerSample {
        self.sample
    }

    /// Current viewport mode.
    pub fn mode(&self) -> ViewportMode {
        self.mode
    }

    /// Follower variant for the current mode.
    pub fn follower(&self) -> Follower {
        match self.mode {
            ViewportMode::Desktop => Follower::Light { at: self.sample },
            ViewportMode::Compact => Follower::Ambient,
        }
    }
}
