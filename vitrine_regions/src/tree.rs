// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core tree implementation: structure, updates, queries.

use alloc::vec::Vec;
use kurbo::{Affine, Point, Rect};

use crate::damage::Damage;
use crate::index::FlatIndex;
use crate::types::{LocalRegion, QueryFilter, RegionFlags, RegionId};

/// Result of a hit test.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Hit {
    /// The matched region.
    pub region: RegionId,
    /// Path from root to region (inclusive).
    pub path: Vec<RegionId>,
}

#[derive(Clone, Debug, Default)]
struct WorldRegion {
    transform: Affine,
    /// AABB of the transformed local bounds, clipped by every clip on the path.
    bounds: Rect,
    clip: Option<Rect>,
}

#[derive(Clone, Debug)]
struct Region {
    generation: u32,
    parent: Option<RegionId>,
    children: Vec<RegionId>,
    local: LocalRegion,
    world: WorldRegion,
    dirty: bool,
}

impl Region {
    fn new(generation: u32, local: LocalRegion) -> Self {
        Self {
            generation,
            parent: None,
            children: Vec::new(),
            local,
            world: WorldRegion::default(),
            dirty: true,
        }
    }
}

/// Region tree for a page.
///
/// Mutations are batched: call [`Tree::commit`] to bring world-space data and
/// the spatial index up to date before querying.
#[derive(Default)]
pub struct Tree {
    regions: Vec<Option<Region>>,
    generations: Vec<u32>,
    free_list: Vec<usize>,
    epoch: u64,
    index: FlatIndex,
}

impl core::fmt::Debug for Tree {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let total = self.regions.len();
        let alive = self.regions.iter().filter(|n| n.is_some()).count();
        f.debug_struct("Tree")
            .field("regions_total", &total)
            .field("regions_alive", &alive)
            .field("free_list", &self.free_list.len())
            .field("epoch", &self.epoch)
            .field("index", &self.index)
            .finish_non_exhaustive()
    }
}

impl Tree {
    /// Create a new empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of commits performed so far.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Insert a new region as a child of `parent` (or as a root if `None`).
    ///
    /// A stale `parent` inserts the region as a root.
    pub fn insert(&mut self, parent: Option<RegionId>, local: LocalRegion) -> RegionId {
        let (idx, generation) = if let Some(idx) = self.free_list.pop() {
            let generation = self.generations[idx].saturating_add(1);
            self.generations[idx] = generation;
            self.regions[idx] = Some(Region::new(generation, local));
            (idx, generation)
        } else {
            self.regions.push(Some(Region::new(1, local)));
            self.generations.push(1);
            (self.regions.len() - 1, 1)
        };
        #[allow(
            clippy::cast_possible_truncation,
            reason = "RegionId uses 32-bit indices by design."
        )]
        let id = RegionId::new(idx as u32, generation);
        if let Some(p) = parent
            && self.is_alive(p)
        {
            self.link_parent(id, p);
        }
        id
    }

    /// Remove a region (and its subtree) from the tree.
    pub fn remove(&mut self, id: RegionId) {
        let Some(region) = self.get(id) else {
            return;
        };
        let parent = region.parent;
        let children = region.children.clone();
        if let Some(p) = parent {
            self.unlink_parent(id, p);
        }
        for child in children {
            self.remove(child);
        }
        self.index.remove(id);
        self.regions[id.idx()] = None;
        self.free_list.push(id.idx());
    }

    /// Move `id` under `new_parent` (or make it a root).
    pub fn reparent(&mut self, id: RegionId, new_parent: Option<RegionId>) {
        let Some(region) = self.get(id) else {
            return;
        };
        let old_parent = region.parent;
        if let Some(p) = new_parent
            && (!self.is_alive(p) || self.is_ancestor_or_self(id, p))
        {
            return;
        }
        if let Some(parent) = old_parent {
            self.unlink_parent(id, parent);
        }
        if let Some(p) = new_parent {
            self.link_parent(id, p);
        }
        self.mark_dirty(id);
    }

    /// Update local bounds.
    pub fn set_local_bounds(&mut self, id: RegionId, bounds: Rect) {
        if let Some(region) = self.get_mut(id) {
            region.local.local_bounds = bounds;
            region.dirty = true;
        }
    }

    /// Update local transform. Descendants move with it on the next commit.
    pub fn set_local_transform(&mut self, id: RegionId, transform: Affine) {
        if let Some(region) = self.get_mut(id) {
            region.local.local_transform = transform;
            region.dirty = true;
        }
    }

    /// Update the local clip.
    pub fn set_local_clip(&mut self, id: RegionId, clip: Option<Rect>) {
        if let Some(region) = self.get_mut(id) {
            region.local.local_clip = clip;
            region.dirty = true;
        }
    }

    /// Update z index.
    pub fn set_z_index(&mut self, id: RegionId, z: i32) {
        if let Some(region) = self.get_mut(id) {
            region.local.z_index = z;
        }
    }

    /// Update flags. Flags never affect geometry.
    pub fn set_flags(&mut self, id: RegionId, flags: RegionFlags) {
        if let Some(region) = self.get_mut(id) {
            region.local.flags = flags;
        }
    }

    /// Commit pending changes, updating world-space data and returning damage.
    ///
    /// Dirtiness propagates down: a moved container moves its whole subtree.
    pub fn commit(&mut self) -> Damage {
        self.epoch = self.epoch.wrapping_add(1);
        let mut damage = Damage::default();
        let roots: Vec<RegionId> = self
            .regions
            .iter()
            .enumerate()
            .filter_map(|(i, r)| match r {
                Some(r) if r.parent.is_none() =>
                {
                    #[allow(
                        clippy::cast_possible_truncation,
                        reason = "RegionId uses 32-bit indices by design."
                    )]
                    Some(RegionId::new(i as u32, r.generation))
                }
                _ => None,
            })
            .collect();
        for root in roots {
            self.update_world(root, Affine::IDENTITY, None, false, &mut damage);
        }
        damage
    }

    /// Returns the topmost region containing a world-space point.
    ///
    /// Higher z-index wins; among equal z-index the later slot wins, which for
    /// a tree built top-down means children beat their parents.
    pub fn hit_test_point(&self, pt: Point, filter: QueryFilter) -> Option<Hit> {
        let mut best: Option<(RegionId, i32)> = None;
        for id in self.index.query_point(pt) {
            let Some(region) = self.get(id) else {
                continue;
            };
            if !filter.accepts(region.local.flags) {
                continue;
            }
            let z = region.local.z_index;
            match best {
                Some((_, z_best)) if z < z_best => {}
                _ => best = Some((id, z)),
            }
        }
        best.map(|(region, _)| Hit {
            region,
            path: self.path_to_root(region),
        })
    }

    /// Iterate regions whose world bounds overlap a world-space rect.
    pub fn intersect_rect(
        &self,
        rect: Rect,
        filter: QueryFilter,
    ) -> impl Iterator<Item = RegionId> + '_ {
        self.index
            .query_rect(rect)
            .filter(move |id| self.get(*id).is_some_and(|r| filter.accepts(r.local.flags)))
    }

    /// Whether `id` still refers to a live region.
    pub fn is_alive(&self, id: RegionId) -> bool {
        self.get(id).is_some()
    }

    /// Parent of a live region.
    pub fn parent_of(&self, id: RegionId) -> Option<RegionId> {
        self.get(id)?.parent
    }

    /// Whether `ancestor` is `id` itself or one of its ancestors.
    pub fn is_ancestor_or_self(&self, ancestor: RegionId, id: RegionId) -> bool {
        let mut cur = Some(id);
        while let Some(c) = cur {
            if c == ancestor {
                return true;
            }
            cur = self.parent_of(c);
        }
        false
    }

    /// World bounds as of the last commit.
    pub fn world_bounds(&self, id: RegionId) -> Option<Rect> {
        Some(self.get(id)?.world.bounds)
    }

    /// Local data of a live region.
    pub fn local(&self, id: RegionId) -> Option<&LocalRegion> {
        Some(&self.get(id)?.local)
    }

    // --- internals ---

    fn get(&self, id: RegionId) -> Option<&Region> {
        self.regions
            .get(id.idx())?
            .as_ref()
            .filter(|r| r.generation == id.generation())
    }

    fn get_mut(&mut self, id: RegionId) -> Option<&mut Region> {
        self.regions
            .get_mut(id.idx())?
            .as_mut()
            .filter(|r| r.generation == id.generation())
    }

    fn mark_dirty(&mut self, id: RegionId) {
        if let Some(region) = self.get_mut(id) {
            region.dirty = true;
        }
    }

    fn link_parent(&mut self, id: RegionId, parent: RegionId) {
        if let Some(p) = self.get_mut(parent) {
            p.children.push(id);
        }
        if let Some(r) = self.get_mut(id) {
            r.parent = Some(parent);
        }
    }

    fn unlink_parent(&mut self, id: RegionId, parent: RegionId) {
        if let Some(p) = self.get_mut(parent) {
            p.children.retain(|c| *c != id);
        }
        if let Some(r) = self.get_mut(id) {
            r.parent = None;
        }
    }

    fn path_to_root(&self, id: RegionId) -> Vec<RegionId> {
        let mut out = Vec::new();
        let mut cur = Some(id);
        while let Some(c) = cur {
            out.push(c);
            cur = self.parent_of(c);
        }
        out.reverse();
        out
    }

    fn update_world(
        &mut self,
        id: RegionId,
        parent_tf: Affine,
        parent_clip: Option<Rect>,
        parent_dirty: bool,
        damage: &mut Damage,
    ) {
        let Some(region) = self.get_mut(id) else {
            return;
        };
        let dirty = region.dirty || parent_dirty;
        region.dirty = false;
        if dirty {
            let old = region.world.bounds;
            let transform = parent_tf * region.local.local_transform;
            let own_clip = region
                .local
                .local_clip
                .map(|c| transform_rect_bbox(transform, c));
            let clip = match (own_clip, parent_clip) {
                (Some(a), Some(b)) => Some(a.intersect(b)),
                (a, b) => a.or(b),
            };
            let mut bounds = transform_rect_bbox(transform, region.local.local_bounds);
            if let Some(c) = clip {
                bounds = bounds.intersect(c);
            }
            region.world = WorldRegion {
                transform,
                bounds,
                clip,
            };
            if old != bounds {
                damage.push(old);
                damage.push(bounds);
            }
            self.index.upsert(id, bounds);
        }
        let Some(region) = self.get(id) else {
            return;
        };
        let transform = region.world.transform;
        let clip = region.world.clip;
        let children = region.children.clone();
        for child in children {
            self.update_world(child, transform, clip, dirty, damage);
        }
    }
}

/// Transform an axis-aligned `Rect` by an `Affine` and return a conservative
/// axis-aligned bounding box.
pub(crate) fn transform_rect_bbox(affine: Affine, rect: Rect) -> Rect {
    let p0 = affine * Point::new(rect.x0, rect.y0);
    let p1 = affine * Point::new(rect.x1, rect.y0);
    let p2 = affine * Point::new(rect.x0, rect.y1);
    let p3 = affine * Point::new(rect.x1, rect.y1);
    let min_x = p0.x.min(p1.x).min(p2.x).min(p3.x);
    let min_y = p0.y.min(p1.y).min(p2.y).min(p3.y);
    let max_x = p0.x.max(p1.x).max(p2.x).max(p3.x);
    let max_y = p0.y.max(p1.y).max(p2.y).max(p3.y);
    Rect::new(min_x, min_y, max_x, max_y)
}
