// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types.
//!
//! Nothing here is fatal. Configuration and registry errors surface while a
//! page is being set up; navigation and playback errors are reported and the
//! affected call degrades to a no-op.

use thiserror::Error;

/// Configuration could not be loaded.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The TOML source did not parse into a config.
    #[error("invalid interaction config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A value parsed but is unusable.
    #[error("{field} out of range: {value}")]
    OutOfRange {
        /// Field name as written in TOML.
        field: &'static str,
        /// Offending value.
        value: f64,
    },
}

/// The section list handed over by the content layer is malformed.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum RegistryError {
    /// Section ids must be unique.
    #[error("duplicate section id: {0}")]
    DuplicateSection(String),

    /// Section ids must be non-empty.
    #[error("section id must not be empty")]
    EmptyId,

    /// Top must be finite, height finite and non-negative.
    #[error("section {id} has an invalid extent (top {top}, height {height})")]
    InvalidExtent {
        /// Section id.
        id: String,
        /// Document offset of the section's top edge.
        top: f64,
        /// Section height.
        height: f64,
    },
}

/// A navigation request could not be honored. The active section is untouched.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum NavigateError {
    /// No section with this id is registered.
    #[error("unknown section: {0}")]
    UnknownSection(String),
}

/// The host refused to start media playback.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum PlaybackError {
    /// Autoplay policy blocked playback.
    #[error("playback not allowed by autoplay policy")]
    NotAllowed,

    /// Playback was interrupted before it started.
    #[error("playback aborted: {0}")]
    Aborted(String),
}
