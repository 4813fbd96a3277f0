// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory host capabilities.
//!
//! These stand in for a real render surface in tests, demos and benches:
//! [`SimulatedMedia`] is a media clock with an autoplay policy,
//! [`SmoothScrollPane`] eases toward its scroll target one tick at a time,
//! and `PageLayout` (with `regions_adapter`) lays a portfolio page out as a
//! region tree.

mod media;
#[cfg(feature = "regions_adapter")]
mod page;
mod pane;

pub use media::{AutoplayPolicy, SimulatedMedia};
#[cfg(feature = "regions_adapter")]
pub use page::PageLayout;
pub use pane::SmoothScrollPane;
