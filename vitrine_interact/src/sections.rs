// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Section registry and the active-section value.
//!
//! The registry is built once from the content layer's ordered section list
//! and never changes. [`ActiveSection`] has two writers, the observer and the
//! navigator. Both run on the UI thread and each write happens inside one
//! signal handler, so the last signal processed wins; no lock is involved.

use tracing::debug;

use crate::error::RegistryError;

/// One content section, positioned in document (pane content) coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct Section {
    id: String,
    top: f64,
    height: f64,
}

impl Section {
    /// Section `id` spanning `top..top + height`.
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    /// Identifier, also the navigation target.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Offset of the top edge within the scrollable content.
    pub fn top(&self) -> f64 {
        self.top
    }

    /// Height.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Offset of the bottom edge.
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Ordered, duplicate-free list of sections.
///
/// Order is document order and only matters for tie-breaking.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SectionRegistry {
    sections: Vec<Section>,
}

impl SectionRegistry {
    /// Validate and freeze a section list.
    pub fn new(sections: impl IntoIterator<Item = Section>) -> Result<Self, RegistryError> {
        let mut out: Vec<Section> = Vec::new();
        for s in sections {
            if s.id.is_empty() {
                return Err(RegistryError::EmptyId);
            }
            if !s.top.is_finite() || !s.height.is_finite() || s.height < 0.0 {
                return Err(RegistryError::InvalidExtent {
                    id: s.id,
                    top: s.top,
                    height: s.height,
                });
            }
            if out.iter().any(|o| o.id == s.id) {
                return Err(RegistryError::DuplicateSection(s.id));
            }
            out.push(s);
        }
        Ok(Self { sections: out })
    }

    /// First section in document order.
    pub fn first(&self) -> Option<&Section> {
        self.sections.first()
    }

    /// Section by id.
    pub fn get(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    /// Whether `id` is registered.
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Document-order position of `id`.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.sections.iter().position(|s| s.id == id)
    }

    /// Section at a document-order position.
    pub fn at(&self, index: usize) -> Option<&Section> {
        self.sections.get(index)
    }

    /// Sections in document order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Section> + ExactSizeIterator + '_ {
        self.sections.iter()
    }

    /// Number of sections.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

/// Who performed the last write to [`ActiveSection`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Writer {
    /// Initial default (first section).
    Initial,
    /// Visibility or scroll driven.
    Observer,
    /// Explicit navigation.
    Navigator,
}

/// The section highlighted in the navigation menu.
///
/// Always a registered id; `None` only for an empty registry.
#[derive(Clone, Debug, PartialEq)]
pub struct ActiveSection {
    current: Option<String>,
    writer: Writer,
}

impl ActiveSection {
    /// Default to the first section.
    pub fn new(registry: &SectionRegistry) -> Self {
        Self {
            current: registry.first().map(|s| s.id.clone()),
            writer: Writer::Initial,
        }
    }

    /// Current id.
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Whether `id` is the active section.
    pub fn is(&self, id: &str) -> bool {
        self.current() == Some(id)
    }

    /// Author of the last accepted write.
    pub fn last_writer(&self) -> Writer {
        self.writer
    }

    /// Overwrite with `id` if it is registered. Returns whether the id changed.
    pub(crate) fn write(&mut self, registry: &SectionRegistry, id: &str, writer: Writer) -> bool {
        if !registry.contains(id) {
            return false;
        }
        self.writer = writer;
        if self.is(id) {
            return false;
        }
        debug!(from = ?self.current, to = %id, ?writer, "active section changed");
        self.current = Some(id.to_owned());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> SectionRegistry {
        SectionRegistry::new([
            Section::new("about", 0.0, 800.0),
            Section::new("experience", 800.0, 1200.0),
            Section::new("projects", 2000.0, 900.0),
        ])
        .unwrap()
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let err = SectionRegistry::new([
            Section::new("about", 0.0, 10.0),
            Section::new("about", 10.0, 10.0),
        ])
        .unwrap_err();
        assert_eq!(err, RegistryError::DuplicateSection("about".into()));
    }

    #[test]
    fn bad_extents_are_rejected() {
        assert!(matches!(
            SectionRegistry::new([Section::new("a", f64::NAN, 10.0)]),
            Err(RegistryError::InvalidExtent { .. })
        ));
        assert!(matches!(
            SectionRegistry::new([Section::new("a", 0.0, -1.0)]),
            Err(RegistryError::InvalidExtent { .. })
        ));
        assert_eq!(
            SectionRegistry::new([Section::new("", 0.0, 1.0)]),
            Err(RegistryError::EmptyId)
        );
    }

    #[test]
    fn lookup_in_document_order() {
        let r = registry();
        assert_eq!(r.len(), 3);
        assert_eq!(r.first().map(Section::id), Some("about"));
        assert_eq!(r.position("projects"), Some(2));
        assert_eq!(r.get("experience").map(Section::bottom), Some(2000.0));
        assert!(!r.contains("contact"));
    }

    #[test]
    fn defaults_to_first_section() {
        let active = ActiveSection::new(&registry());
        assert_eq!(active.current(), Some("about"));
        assert_eq!(active.last_writer(), Writer::Initial);
    }

    #[test]
    fn empty_registry_has_no_active_section() {
        let active = ActiveSection::new(&SectionRegistry::default());
        assert_eq!(active.current(), None);
    }

    #[test]
    fn unknown_ids_are_not_written() {
        let r = registry();
        let mut active = ActiveSection::new(&r);
        assert!(!active.write(&r, "contact", Writer::Navigator));
        assert_eq!(active.current(), Some("about"));
        assert_eq!(active.last_writer(), Writer::Initial);
    }

    #[test]
    fn writes_record_the_writer() {
        let r = registry();
        let mut active = ActiveSection::new(&r);
        assert!(active.write(&r, "projects", Writer::Navigator));
        assert!(!active.write(&r, "projects", Writer::Observer));
        assert_eq!(active.last_writer(), Writer::Observer);
    }
}
