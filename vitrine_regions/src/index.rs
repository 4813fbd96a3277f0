// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flat spatial index with linear scans.
//!
//! A page has tens of regions, not thousands; a linear scan over world boxes
//! beats any tree structure at that size.

use alloc::vec::Vec;
use kurbo::{Point, Rect};

use crate::types::RegionId;

/// World-space boxes keyed by region slot.
#[derive(Default)]
pub(crate) struct FlatIndex {
    entries: Vec<Option<(Rect, RegionId)>>,
}

impl core::fmt::Debug for FlatIndex {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let total = self.entries.len();
        let alive = self.entries.iter().filter(|e| e.is_some()).count();
        f.debug_struct("FlatIndex")
            .field("total_slots", &total)
            .field("alive", &alive)
            .finish_non_exhaustive()
    }
}

impl FlatIndex {
    /// Insert or replace the box stored for `id`'s slot.
    pub(crate) fn upsert(&mut self, id: RegionId, world: Rect) {
        let slot = id.idx();
        if self.entries.len() <= slot {
            self.entries.resize_with(slot + 1, || None);
        }
        self.entries[slot] = Some((world, id));
    }

    pub(crate) fn remove(&mut self, id: RegionId) {
        if let Some(e) = self.entries.get_mut(id.idx()) {
            *e = None;
        }
    }

    /// Regions whose box contains the point, in slot order.
    pub(crate) fn query_point(&self, pt: Point) -> impl Iterator<Item = RegionId> + '_ {
        self.entries
            .iter()
            .flatten()
            .filter(move |(r, _)| r.contains(pt))
            .map(|(_, id)| *id)
    }

    /// Regions whose box overlaps `rect` with non-zero area, in slot order.
    pub(crate) fn query_rect(&self, rect: Rect) -> impl Iterator<Item = RegionId> + '_ {
        self.entries
            .iter()
            .flatten()
            .filter(move |(r, _)| overlaps(*r, rect))
            .map(|(_, id)| *id)
    }
}

fn overlaps(a: Rect, b: Rect) -> bool {
    a.x0 < b.x1 && b.x0 < a.x1 && a.y0 < b.y1 && b.y0 < a.y1
}
