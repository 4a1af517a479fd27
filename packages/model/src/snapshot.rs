//! Export/import snapshot.
//!
//! A snapshot is the portable JSON form of a document: the form title, the
//! standalone elements, and a creation timestamp. Row layouts are *not*
//! part of the format; the export is deliberately lossy and a round trip
//! reproduces the standalone elements only. Rows must be rebuilt through
//! mutations after import.

use crate::{Document, Element};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Serialized form document. `created` is an ISO-8601 UTC timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub title: String,
    pub elements: Vec<Element>,
    pub created: DateTime<Utc>,
}

#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("malformed snapshot: {0}")]
    Json(#[from] serde_json::Error),

    #[error("duplicate element id: {0}")]
    DuplicateId(String),

    #[error("invalid element {id}: {reason}")]
    InvalidElement { id: String, reason: String },
}

impl Snapshot {
    /// Capture the document's standalone elements under `title`.
    pub fn capture(document: &Document, title: impl Into<String>, created: DateTime<Utc>) -> Self {
        Self {
            title: title.into(),
            elements: document.elements.clone(),
            created,
        }
    }

    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Document {
    /// Rebuild a document from a snapshot.
    ///
    /// The import is all-or-nothing: any malformed element aborts with an
    /// error and no partially built document escapes. Imported elements
    /// become standalone (the format never contains row members, so a
    /// non-null back-reference is rejected rather than silently cleared).
    /// The element counter is restored from the highest `element_<n>`
    /// suffix so future ids cannot collide with imported ones.
    pub fn from_snapshot(snapshot: &Snapshot) -> Result<Self, SnapshotError> {
        let mut doc = Document::new();
        let mut seen = std::collections::HashSet::new();

        for element in &snapshot.elements {
            if !seen.insert(element.id.clone()) {
                return Err(SnapshotError::DuplicateId(element.id.clone()));
            }
            if element.parent_row.is_some() || element.column_index.is_some() {
                return Err(SnapshotError::InvalidElement {
                    id: element.id.clone(),
                    reason: "snapshot elements must be standalone".to_string(),
                });
            }
            if element.kind.has_options() {
                match &element.options {
                    Some(options) if !options.is_empty() => {}
                    _ => {
                        return Err(SnapshotError::InvalidElement {
                            id: element.id.clone(),
                            reason: "option list must contain at least one entry".to_string(),
                        })
                    }
                }
            } else if element.options.is_some() {
                return Err(SnapshotError::InvalidElement {
                    id: element.id.clone(),
                    reason: format!("{} elements do not carry options", element.kind),
                });
            }

            if let Some(n) = minted_suffix(&element.id) {
                doc.bump_element_counter(n);
            }
            doc.elements.push(element.clone());
        }

        Ok(doc)
    }
}

/// Parse the `<n>` out of a minted `element_<n>` id.
fn minted_suffix(id: &str) -> Option<u64> {
    id.strip_prefix("element_")?.parse().ok()
}
