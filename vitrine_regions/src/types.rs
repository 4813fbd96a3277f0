// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the region tree: identifiers, flags, and local geometry.

use kurbo::{Affine, Rect};

/// Identifier for a region in the tree.
///
/// A small, copyable handle made of a slot index and a generation counter.
///
/// ## Semantics
///
/// - On insert, a fresh slot is allocated with generation `1`.
/// - On remove, the slot is freed; any `RegionId` that pointed to it is now stale.
/// - On reuse of a freed slot, its generation is incremented, producing a new, distinct `RegionId`.
///
/// Stale ids never alias a different live region because the generation must match.
/// Use [`Tree::is_alive`](crate::Tree::is_alive) to check liveness.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct RegionId(pub(crate) u32, pub(crate) u32);

impl RegionId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }

    pub(crate) const fn generation(self) -> u32 {
        self.1
    }
}

bitflags::bitflags! {
    /// Region flags controlling visibility and picking.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct RegionFlags: u8 {
        /// Region is visible (participates in intersection and coverage queries).
        const VISIBLE  = 0b0000_0001;
        /// Region is pickable (participates in hit testing).
        const PICKABLE = 0b0000_0010;
    }
}

impl Default for RegionFlags {
    fn default() -> Self {
        Self::VISIBLE | Self::PICKABLE
    }
}

/// Local geometry for a region.
///
/// Page content that scrolls is modeled by giving the scrolled container a
/// translation transform and a clip equal to its visible pane.
#[derive(Clone, Debug)]
pub struct LocalRegion {
    /// Local (untransformed) bounds.
    pub local_bounds: Rect,
    /// Local transform relative to the parent.
    pub local_transform: Affine,
    /// Optional clip in local space. Applies to this region and its descendants.
    pub local_clip: Option<Rect>,
    /// Z-order. Higher is drawn on top.
    pub z_index: i32,
    /// Visibility and picking flags.
    pub flags: RegionFlags,
}

impl Default for LocalRegion {
    fn default() -> Self {
        Self {
            local_bounds: Rect::ZERO,
            local_transform: Affine::IDENTITY,
            local_clip: None,
            z_index: 0,
            flags: RegionFlags::default(),
        }
    }
}

impl LocalRegion {
    /// A region with the given bounds and default everything else.
    pub fn with_bounds(local_bounds: Rect) -> Self {
        Self {
            local_bounds,
            ..Default::default()
        }
    }
}

/// Filters applied during hit testing and rectangle intersection.
///
/// Used by [`Tree::hit_test_point`](crate::Tree::hit_test_point) and
/// [`Tree::intersect_rect`](crate::Tree::intersect_rect).
#[derive(Clone, Copy, Debug, Default)]
pub struct QueryFilter {
    /// If true, only consider regions marked [`RegionFlags::VISIBLE`].
    pub visible_only: bool,
    /// If true, only consider regions marked [`RegionFlags::PICKABLE`].
    pub pickable_only: bool,
}

impl QueryFilter {
    /// Filter used for pointer hit testing: visible and pickable.
    pub const POINTER: Self = Self {
        visible_only: true,
        pickable_only: true,
    };

    /// Filter used for visibility queries: visible regions only.
    pub const VISIBLE: Self = Self {
        visible_only: true,
        pickable_only: false,
    };

    pub(crate) fn accepts(self, flags: RegionFlags) -> bool {
        if self.visible_only && !flags.contains(RegionFlags::VISIBLE) {
            return false;
        }
        if self.pickable_only && !flags.contains(RegionFlags::PICKABLE) {
            return false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_flags_are_visible_and_pickable() {
        let f = RegionFlags::default();
        assert!(f.contains(RegionFlags::VISIBLE));
        assert!(f.contains(RegionFlags::PICKABLE));
    }

    #[test]
    fn pointer_filter_rejects_unpickable() {
        assert!(!QueryFilter::POINTER.accepts(RegionFlags::VISIBLE));
        assert!(QueryFilter::VISIBLE.accepts(RegionFlags::VISIBLE));
        assert!(!QueryFilter::VISIBLE.accepts(RegionFlags::PICKABLE));
        assert!(QueryFilter::default().accepts(RegionFlags::empty()));
    }
}
