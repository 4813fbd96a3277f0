// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover tracking over root→target region paths.
//!
//! Each pointer move yields the path under the pointer (see
//! [`RegionProbe::path_at`](crate::host::RegionProbe::path_at)).
//! [`HoverState::update_path`] diffs it against the previous path and returns
//! the minimal `Leave`/`Enter` sequence. Because the diff runs on every move,
//! a pointer that jumps between disjoint regions produces the leaves for the
//! old branch and the enters for the new one in a single update; no host
//! leave event is needed.
//!
//! ```
//! use vitrine_interact::hover::{HoverEvent, HoverState};
//!
//! let mut h: HoverState<u32> = HoverState::new();
//! assert_eq!(h.update_path(&[1, 2]), vec![HoverEvent::Enter(1), HoverEvent::Enter(2)]);
//! assert_eq!(h.update_path(&[1, 3]), vec![HoverEvent::Leave(2), HoverEvent::Enter(3)]);
//! assert!(h.contains(1));
//! ```

/// Current hovered path and the transitions between paths.
///
/// Leaves are emitted inner-most first, enters outer-most first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HoverState<K: Copy + Eq> {
    current: Vec<K>,
}

/// A hover transition.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HoverEvent<K> {
    /// The pointer entered this region.
    Enter(K),
    /// The pointer left this region.
    Leave(K),
}

impl<K: Copy + Eq> HoverState<K> {
    /// Nothing hovered.
    pub fn new() -> Self {
        Self {
            current: Vec::new(),
        }
    }

    /// Current root→target path.
    pub fn current_path(&self) -> &[K] {
        &self.current
    }

    /// Innermost hovered region.
    pub fn target(&self) -> Option<K> {
        self.current.last().copied()
    }

    /// Whether `k` is on the hovered path, i.e. `k` or one of its descendants
    /// is under the pointer.
    pub fn contains(&self, k: K) -> bool {
        self.current.contains(&k)
    }

    /// Drop the hovered path, returning leaves inner-most first.
    pub fn clear(&mut self) -> Vec<HoverEvent<K>> {
        let out = self.current.iter().rev().map(|&k| HoverEvent::Leave(k)).collect();
        self.current.clear();
        out
    }

    /// Replace the hovered path and return the transitions.
    pub fn update_path(&mut self, new_path: &[K]) -> Vec<HoverEvent<K>> {
        // Depth of the lowest common ancestor.
        let lca = self
            .current
            .iter()
            .zip(new_path)
            .take_while(|(a, b)| a == b)
            .count();

        let out = self.current[lca..]
            .iter()
            .rev()
            .map(|&k| HoverEvent::Leave(k))
            .chain(new_path[lca..].iter().map(|&k| HoverEvent::Enter(k)))
            .collect();

        self.current.clear();
        self.current.extend_from_slice(new_path);
        out
    }
}
