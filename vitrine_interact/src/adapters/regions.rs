// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adapter helpers for Vitrine Regions.
//!
//! ## Feature
//!
//! Enable with `regions_adapter` (on by default).
//!
//! ## Notes
//!
//! The tree answers queries from its last commit; call
//! [`Tree::commit`] after moving regions and before dispatching the next
//! pointer signal.

use kurbo::{Point, Rect};
use vitrine_regions::{QueryFilter, RegionId, Tree};

use crate::host::RegionProbe;

/// Root→target path of the topmost region under `pt`, or an empty path.
pub fn top_path_for_point(tree: &Tree, pt: Point, filter: QueryFilter) -> Vec<RegionId> {
    tree.hit_test_point(pt, filter)
        .map(|hit| hit.path)
        .unwrap_or_default()
}

/// Regions overlapping `rect`, in slot order.
pub fn regions_in_rect(tree: &Tree, rect: Rect, filter: QueryFilter) -> Vec<RegionId> {
    tree.intersect_rect(rect, filter).collect()
}

impl RegionProbe for Tree {
    type Region = RegionId;

    fn path_at(&self, pt: Point) -> Vec<RegionId> {
        top_path_for_point(self, pt, QueryFilter::POINTER)
    }
}
