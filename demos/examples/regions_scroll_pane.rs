// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Region tree basics: a clipped pane with a scrolling content column.
//!
//! Build the tree, scroll the content, commit damage, hit-test and list the
//! sections inside the pane.
//!
//! Run:
//! - `cargo run -p vitrine_demos --example regions_scroll_pane`

use kurbo::{Affine, Point, Rect, Vec2};
use vitrine_regions::{LocalRegion, QueryFilter, Tree};

const PANE: Rect = Rect::new(400.0, 0.0, 1200.0, 800.0);
const SECTION_H: f64 = 600.0;

fn main() {
    let mut tree = Tree::new();
    let pane = tree.insert(
        None,
        LocalRegion {
            local_bounds: PANE,
            local_clip: Some(PANE),
            ..Default::default()
        },
    );
    let content = tree.insert(
        Some(pane),
        LocalRegion::with_bounds(Rect::new(PANE.x0, 0.0, PANE.x1, 5.0 * SECTION_H)),
    );
    let sections: Vec<_> = (0..5)
        .map(|i| {
            let y0 = f64::from(i) * SECTION_H;
            tree.insert(
                Some(content),
                LocalRegion::with_bounds(Rect::new(PANE.x0, y0, PANE.x1, y0 + SECTION_H)),
            )
        })
        .collect();
    let _ = tree.commit();

    let probe = Point::new(800.0, 400.0);
    for scroll in [0.0, 450.0, 1300.0, 2200.0] {
        tree.set_local_transform(content, Affine::translate(Vec2::new(0.0, -scroll)));
        let damage = tree.commit();

        let hit = tree.hit_test_point(probe, QueryFilter::POINTER).unwrap();
        let under = sections.iter().position(|s| *s == hit.region);
        let visible: Vec<_> = tree
            .intersect_rect(PANE, QueryFilter::VISIBLE)
            .filter_map(|id| sections.iter().position(|s| *s == id))
            .collect();
        println!(
            "scroll {scroll:>6}: under pointer {under:?}, visible {visible:?}, damage {:?}",
            damage.union_rect()
        );
        assert_eq!(hit.path.first(), Some(&pane));
    }
}
