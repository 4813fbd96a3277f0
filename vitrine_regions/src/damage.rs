// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Coarse damage produced by [`Tree::commit`](crate::Tree::commit).

use alloc::vec::Vec;
use kurbo::Rect;

/// World-space rectangles that changed during a commit.
///
/// Moved regions contribute both their old and new boxes. Zero-area boxes
/// (fully clipped regions) are dropped.
#[derive(Clone, Debug, Default)]
pub struct Damage {
    /// Rectangles that should be repainted.
    pub dirty_rects: Vec<Rect>,
}

impl Damage {
    pub(crate) fn push(&mut self, rect: Rect) {
        if rect.width() > 0.0 && rect.height() > 0.0 {
            self.dirty_rects.push(rect);
        }
    }

    /// Returns the union of all damage rects.
    pub fn union_rect(&self) -> Option<Rect> {
        let mut it = self.dirty_rects.iter().copied();
        let first = it.next()?;
        Some(it.fold(first, |acc, r| acc.union(r)))
    }

    /// Whether nothing changed.
    pub fn is_empty(&self) -> bool {
        self.dirty_rects.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_area_is_dropped() {
        let mut d = Damage::default();
        d.push(Rect::new(0.0, 10.0, 100.0, 10.0));
        assert!(d.is_empty());
        d.push(Rect::new(0.0, 0.0, 10.0, 10.0));
        d.push(Rect::new(20.0, 20.0, 30.0, 30.0));
        assert_eq!(d.union_rect(), Some(Rect::new(0.0, 0.0, 30.0, 30.0)));
    }
}
