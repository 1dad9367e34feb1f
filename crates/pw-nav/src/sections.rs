//! In-page sections of the displayed document.
//!
//! The document viewer is the only writer: it replaces the section list when
//! a document loads and updates the visible subset while the reader scrolls.
//! Everyone else reads immutable [`SectionSnapshot`]s.

use std::path::Path;
use std::sync::{Arc, RwLock};

use serde::{Deserialize, Serialize};

use crate::error::{LoadError, read_json};

/// Heading anchor within the current document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionEntry {
    /// Anchor id, unique within the document.
    pub id: String,
    /// Display title.
    #[serde(default)]
    pub title: String,
    /// Short label shown beside the title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

impl SectionEntry {
    /// Create a section without a tag.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            tag: None,
        }
    }

    /// Attach a tag label.
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }
}

/// Read-only view of the current document's sections.
pub trait SectionSource {
    /// All sections of the document, top to bottom.
    fn sections(&self) -> &[SectionEntry];

    /// Ids of the sections currently in the viewport, top to bottom.
    fn visible_sections(&self) -> &[String];
}

/// Sections and visible subset captured at one instant.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionSnapshot {
    #[serde(default)]
    pub sections: Vec<SectionEntry>,
    #[serde(default)]
    pub visible_sections: Vec<String>,
}

impl SectionSnapshot {
    /// Snapshot of a freshly loaded document with nothing visible yet.
    #[must_use]
    pub fn new(sections: Vec<SectionEntry>) -> Self {
        Self {
            sections,
            visible_sections: Vec::new(),
        }
    }

    /// Replace the visible subset.
    #[must_use]
    pub fn with_visible<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.visible_sections = ids.into_iter().map(Into::into).collect();
        self
    }

    /// Load a snapshot from a JSON file.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let snapshot: Self = read_json(path)?;
        tracing::info!(
            path = %path.display(),
            sections = snapshot.sections.len(),
            visible = snapshot.visible_sections.len(),
            "Loaded sections"
        );
        Ok(snapshot)
    }
}

impl SectionSource for SectionSnapshot {
    fn sections(&self) -> &[SectionEntry] {
        &self.sections
    }

    fn visible_sections(&self) -> &[String] {
        &self.visible_sections
    }
}

/// Process-wide holder of the current [`SectionSnapshot`].
///
/// Writers swap in a whole new snapshot, so a reader never observes a
/// section list from one document paired with visibility from another.
#[derive(Debug, Default)]
pub struct SectionStore {
    current: RwLock<Arc<SectionSnapshot>>,
}

impl SectionStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current snapshot.
    pub fn snapshot(&self) -> Arc<SectionSnapshot> {
        Arc::clone(&self.current.read().unwrap())
    }

    /// Replace the section list for a newly displayed document.
    ///
    /// Resets the visible subset.
    pub fn load_document(&self, sections: Vec<SectionEntry>) {
        tracing::debug!(sections = sections.len(), "Document sections loaded");
        *self.current.write().unwrap() = Arc::new(SectionSnapshot::new(sections));
    }

    /// Update which sections are in the viewport.
    pub fn set_visible(&self, ids: Vec<String>) {
        let mut current = self.current.write().unwrap();
        let next = SectionSnapshot {
            sections: current.sections.clone(),
            visible_sections: ids,
        };
        *current = Arc::new(next);
    }
}
