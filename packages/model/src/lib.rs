//! # Formstudio Model
//!
//! Core document model for the form designer.
//!
//! A [`Document`] holds everything a form is made of:
//! - standalone [`Element`]s, rendered in insertion order
//! - [`Row`] layout containers, each owning a fixed number of column slots
//! - the id counters used to mint `element_<n>` / `row_<n>` identifiers
//! - the current [`Selection`] (one element or one row, never both)
//!
//! The model is pure data. Structural edits go through the mutation engine
//! in `formstudio-editor`; the canvas and export renderers read the model
//! without mutating it.

mod document;
mod field;
mod row;
mod snapshot;

pub use document::{Document, Selection};
pub use field::{Element, FieldKind, Styling, UnknownFieldKind};
pub use row::{ColumnCount, InvalidColumnCount, Row};
pub use snapshot::{Snapshot, SnapshotError};
