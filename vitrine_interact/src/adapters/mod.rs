// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adapters to integrate with other Vitrine crates.
//!
//! Enabled via feature flags so the core can be used with any host probe.

#[cfg(feature = "regions_adapter")]
pub mod regions;
