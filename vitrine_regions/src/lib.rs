// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vitrine Regions: a Kurbo-native region tree for page hit testing.
//!
//! A page is modeled as a hierarchy of rectangular regions: the window, a
//! sidebar, a scrollable pane with its content column, the sections inside it,
//! inline hotspots, floating overlays.
//!
//! - Each region has local bounds, a local transform, an optional clip, a z-index and flags.
//! - [`Tree::commit`] computes world-space boxes (clipped by every ancestor clip) and yields [`Damage`].
//! - [`Tree::hit_test_point`] answers "which region is topmost under this point", with its root→target path.
//! - [`Tree::intersect_rect`] lists regions overlapping a rectangle, e.g. the visible set of a pane.
//! - [`Tree::is_ancestor_or_self`] answers containment questions ("is this inside the overlay?").
//!
//! ## Scrolling
//!
//! A scroll container is two regions: the pane, which carries the clip, and a
//! content child whose transform is translated by the negative scroll offset.
//! Everything under the content region moves on the next commit.
//!
//! ## Not a layout engine
//!
//! Positions and sizes come from whatever lays out the page; this crate only
//! stores them and answers spatial questions.
//!
//! ## Minimal usage
//!
//! ```
//! use vitrine_regions::{LocalRegion, QueryFilter, Tree};
//! use kurbo::{Affine, Point, Rect, Vec2};
//!
//! let mut tree = Tree::new();
//! let pane = tree.insert(
//!     None,
//!     LocalRegion {
//!         local_bounds: Rect::new(0.0, 0.0, 600.0, 800.0),
//!         local_clip: Some(Rect::new(0.0, 0.0, 600.0, 800.0)),
//!         ..Default::default()
//!     },
//! );
//! let content = tree.insert(Some(pane), LocalRegion::with_bounds(Rect::new(0.0, 0.0, 600.0, 2400.0)));
//! let projects = tree.insert(Some(content), LocalRegion::with_bounds(Rect::new(0.0, 1600.0, 600.0, 2400.0)));
//! let _ = tree.commit();
//!
//! // Below the fold: clipped away.
//! let hit = tree.hit_test_point(Point::new(100.0, 100.0), QueryFilter::POINTER).unwrap();
//! assert_eq!(hit.region, content);
//!
//! // Scroll the content up by 1600 units.
//! tree.set_local_transform(content, Affine::translate(Vec2::new(0.0, -1600.0)));
//! let _ = tree.commit();
//! let hit = tree.hit_test_point(Point::new(100.0, 100.0), QueryFilter::POINTER).unwrap();
//! assert_eq!(hit.region, projects);
//! assert_eq!(hit.path, [pane, content, projects]);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod damage;
mod index;
mod tree;
mod types;

pub use damage::Damage;
pub use tree::{Hit, Tree};
pub use types::{LocalRegion, QueryFilter, RegionFlags, RegionId};
