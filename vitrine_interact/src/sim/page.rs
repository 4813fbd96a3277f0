// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Size, Vec2};
use vitrine_regions::{Damage, LocalRegion, QueryFilter, RegionFlags, RegionId, Tree};

use crate::adapters::regions::{regions_in_rect, top_path_for_point};
use crate::error::RegistryError;
use crate::host::RegionProbe;
use crate::sections::{Section, SectionRegistry};
use crate::session::OverlayTargets;

/// A portfolio page laid out as a region tree.
///
/// ```text
/// root
/// ├── sidebar
/// │   └── hotspot
/// ├── pane (clipped)
/// │   └── content (translated by -scroll)
/// │       ├── section 0
/// │       └── ...
/// └── overlay surface (z 10, hidden until shown)
/// ```
///
/// The sidebar takes the left 40% of the viewport, capped at 480 units; the
/// pane fills the rest and stacks the sections top to bottom. Hotspot and
/// surface are visually disjoint: the surface floats below the hotspot.
#[derive(Debug)]
pub struct PageLayout {
    tree: Tree,
    registry: SectionRegistry,
    sections: Vec<RegionId>,
    root: RegionId,
    sidebar: RegionId,
    hotspot: RegionId,
    pane: RegionId,
    content: RegionId,
    surface: RegionId,
    viewport: Size,
    content_height: f64,
    scroll: f64,
}

impl PageLayout {
    /// Overlay z-index.
    pub const SURFACE_Z: i32 = 10;

    /// Lay out `sections` (id and height, in document order) in `viewport`.
    pub fn new(viewport: Size, sections: &[(&str, f64)]) -> Result<Self, RegistryError> {
        let mut top = 0.0;
        let registry = SectionRegistry::new(sections.iter().map(|&(id, height)| {
            let s = Section::new(id, top, height);
            top += height;
            s
        }))?;
        let content_height = top;

        let sidebar_w = (viewport.width * 0.4).min(480.0);
        let pane_rect = Rect::new(sidebar_w, 0.0, viewport.width, viewport.height);
        let hotspot_rect = Rect::new(32.0, 160.0, (sidebar_w - 32.0).max(33.0), 200.0);
        let surface_w = (sidebar_w - 64.0).max(1.0);
        let surface_rect = Rect::new(32.0, 240.0, 32.0 + surface_w, 240.0 + surface_w * 9.0 / 16.0);

        let mut tree = Tree::new();
        let root = tree.insert(None, LocalRegion::with_bounds(viewport.to_rect()));
        let sidebar = tree.insert(
            Some(root),
            LocalRegion::with_bounds(Rect::new(0.0, 0.0, sidebar_w, viewport.height)),
        );
        let hotspot = tree.insert(Some(sidebar), LocalRegion::with_bounds(hotspot_rect));
        let pane = tree.insert(
            Some(root),
            LocalRegion {
                local_bounds: pane_rect,
                local_clip: Some(pane_rect),
                ..Default::default()
            },
        );
        let content = tree.insert(
            Some(pane),
            LocalRegion::with_bounds(Rect::new(sidebar_w, 0.0, viewport.width, content_height)),
        );
        let section_regions: Vec<RegionId> = registry
            .iter()
            .map(|s| {
                tree.insert(
                    Some(content),
                    LocalRegion::with_bounds(Rect::new(
                        sidebar_w,
                        s.top(),
                        viewport.width,
                        s.bottom(),
                    )),
                )
            })
            .collect();
        let surface = tree.insert(
            Some(root),
            LocalRegion {
                local_bounds: surface_rect,
                z_index: Self::SURFACE_Z,
                flags: RegionFlags::empty(),
                ..Default::default()
            },
        );
        let _ = tree.commit();

        Ok(Self {
            tree,
            registry,
            sections: section_regions,
            root,
            sidebar,
            hotspot,
            pane,
            content,
            surface,
            viewport,
            content_height,
            scroll: 0.0,
        })
    }

    /// Sections with their document positions.
    pub fn registry(&self) -> &SectionRegistry {
        &self.registry
    }

    /// Hotspot and overlay surface, for
    /// [`PageSession::mount`](crate::session::PageSession::mount).
    pub fn targets(&self) -> OverlayTargets<RegionId> {
        OverlayTargets {
            hotspot: self.hotspot,
            surface: self.surface,
        }
    }

    /// The region tree.
    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    /// Page root.
    pub fn root(&self) -> RegionId {
        self.root
    }

    /// Sidebar region.
    pub fn sidebar(&self) -> RegionId {
        self.sidebar
    }

    /// Scrollable pane region.
    pub fn pane(&self) -> RegionId {
        self.pane
    }

    /// Region of section `id`.
    pub fn section(&self, id: &str) -> Option<RegionId> {
        self.sections.get(self.registry.position(id)?).copied()
    }

    /// Total height of the scrollable content.
    pub fn content_height(&self) -> f64 {
        self.content_height
    }

    /// Visible height of the pane.
    pub fn pane_height(&self) -> f64 {
        self.viewport.height
    }

    /// Current scroll offset.
    pub fn scroll(&self) -> f64 {
        self.scroll
    }

    /// Center of the hotspot in viewport coordinates.
    pub fn hotspot_center(&self) -> Point {
        self.center_of(self.hotspot)
    }

    /// Center of the overlay surface in viewport coordinates.
    pub fn surface_center(&self) -> Point {
        self.center_of(self.surface)
    }

    /// A point in the pane, over the section content.
    pub fn pane_point(&self) -> Point {
        self.center_of(self.pane)
    }

    /// Translate the content column and commit.
    pub fn set_scroll(&mut self, offset: f64) -> Damage {
        self.scroll = offset;
        self.tree
            .set_local_transform(self.content, Affine::translate(Vec2::new(0.0, -offset)));
        self.tree.commit()
    }

    /// Show or hide the overlay surface and commit.
    pub fn set_overlay_visible(&mut self, visible: bool) -> Damage {
        let flags = if visible {
            RegionFlags::default()
        } else {
            RegionFlags::empty()
        };
        self.tree.set_flags(self.surface, flags);
        self.tree.commit()
    }

    /// Ids of the sections overlapping the pane, in document order.
    pub fn visible_sections(&self) -> Vec<&str> {
        let Some(pane) = self.tree.world_bounds(self.pane) else {
            return Vec::new();
        };
        let hits = regions_in_rect(&self.tree, pane, QueryFilter::VISIBLE);
        self.registry
            .iter()
            .zip(&self.sections)
            .filter(|(_, r)| hits.contains(r))
            .map(|(s, _)| s.id())
            .collect()
    }

    fn center_of(&self, id: RegionId) -> Point {
        self.tree
            .world_bounds(id)
            .map(|r| r.center())
            .unwrap_or_default()
    }
}

impl RegionProbe for PageLayout {
    type Region = RegionId;

    fn path_at(&self, pt: Point) -> Vec<RegionId> {
        top_path_for_point(&self.tree, pt, QueryFilter::POINTER)
    }
}
