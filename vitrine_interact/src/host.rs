// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Capabilities the hosting render surface provides.
//!
//! The components never walk a document tree or touch a real media element;
//! they talk to these traits. [`crate::sim`] has in-memory implementations
//! and [`crate::adapters`] connects [`RegionProbe`] to the region tree.

use core::fmt::Debug;

use kurbo::Point;

use crate::error::PlaybackError;

/// A single video-like media resource.
///
/// Positions and durations are in seconds.
pub trait MediaElement {
    /// Mute or unmute.
    fn set_muted(&mut self, muted: bool);
    /// Request playback. Hosts may refuse, e.g. under an autoplay policy.
    fn play(&mut self) -> Result<(), PlaybackError>;
    /// Pause playback.
    fn pause(&mut self);
    /// Current playback position.
    fn current_time(&self) -> f64;
    /// Seek.
    fn set_current_time(&mut self, seconds: f64);
    /// Total duration; `0.0` when unknown.
    fn duration(&self) -> f64;
}

/// The scrollable content pane.
pub trait ScrollPane {
    /// Current scroll offset.
    fn scroll_offset(&self) -> f64;
    /// Visible height.
    fn viewport_height(&self) -> f64;
    /// Start a smooth (non-instant) scroll toward `offset`.
    ///
    /// The host may clamp the target to its scroll range.
    fn animate_to(&mut self, offset: f64);
}

/// Answers "what is under this point".
pub trait RegionProbe {
    /// Region identity.
    type Region: Copy + Eq + Debug;

    /// Root→target path of the topmost interactive region at `pt`, in
    /// viewport coordinates. Empty when nothing is there.
    fn path_at(&self, pt: Point) -> Vec<Self::Region>;

    /// Topmost region at `pt`, if any.
    fn region_at(&self, pt: Point) -> Option<Self::Region> {
        self.path_at(pt).last().copied()
    }
}
