//! # Editor Handle
//!
//! Owns the document being edited plus a version counter.
//!
//! Every mutation runs to completion before the next one is accepted —
//! callers hold the handle and thread it explicitly; there is no ambient
//! shared state. Rendering is a read of [`Editor::document`] and can run
//! synchronously after every apply; the projection is a pure function of
//! the document, so rendering twice without an intervening mutation
//! yields the same output.

use crate::{EditorError, Mutation, PlacementRequest};
use formstudio_model::{Document, Selection, Snapshot, SnapshotError};

/// Editable form document.
#[derive(Debug, Default)]
pub struct Editor {
    document: Document,
    version: u64,
}

/// Result of applying a mutation.
#[derive(Debug, Clone, PartialEq)]
pub struct MutationResult {
    /// New version number.
    pub version: u64,
}

impl Editor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(document: Document) -> Self {
        Self {
            document,
            version: 0,
        }
    }

    /// Rebuild the editor state from an imported snapshot. A malformed
    /// snapshot leaves no half-built editor behind.
    pub fn from_snapshot(snapshot: &Snapshot) -> Result<Self, SnapshotError> {
        Ok(Self::with_document(Document::from_snapshot(snapshot)?))
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Version number, incremented once per successful mutation.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Apply a mutation. On failure the document and version are
    /// unchanged.
    pub fn apply(&mut self, mutation: Mutation) -> Result<MutationResult, EditorError> {
        mutation.apply(&mut self.document)?;
        self.version += 1;
        Ok(MutationResult {
            version: self.version,
        })
    }

    /// Resolve and apply a placement request from the input layer.
    pub fn place(&mut self, request: PlacementRequest) -> Result<MutationResult, EditorError> {
        let mutation = request.into_mutation()?;
        self.apply(mutation)
    }

    /// Select an element or row; stale ids clear the selection.
    pub fn select(&mut self, target: Selection) -> bool {
        self.document.select(target)
    }

    /// Reset the document to empty, counters included.
    pub fn clear(&mut self) {
        self.document.clear();
        self.version += 1;
    }

    /// Capture the current standalone elements as a snapshot.
    pub fn export_snapshot(
        &self,
        title: impl Into<String>,
        created: chrono::DateTime<chrono::Utc>,
    ) -> Snapshot {
        Snapshot::capture(&self.document, title, created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FieldKind, MutationError};

    #[test]
    fn test_version_increments_only_on_success() {
        let mut editor = Editor::new();
        assert_eq!(editor.version(), 0);

        editor
            .apply(Mutation::InsertElement {
                kind: FieldKind::Text,
                target: None,
            })
            .unwrap();
        assert_eq!(editor.version(), 1);

        let err = editor
            .apply(Mutation::RemoveElement {
                id: "element_9".to_string(),
            })
            .unwrap_err();
        assert!(matches!(
            err,
            EditorError::Mutation(MutationError::ElementNotFound(_))
        ));
        assert_eq!(editor.version(), 1);
    }

    #[test]
    fn test_place_routes_through_requests() {
        let mut editor = Editor::new();
        editor.place(PlacementRequest::new("row-3col")).unwrap();
        assert_eq!(editor.document().rows.len(), 1);
        assert_eq!(editor.document().rows[0].slots.len(), 3);
    }
}
