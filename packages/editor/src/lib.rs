//! # Formstudio Editor
//!
//! Structural editing engine for form documents.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ input layer: placement / property requests  │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: Mutation validation + application   │
//! │  - validate first, mutate only on success   │
//! │  - id minting, back-reference bookkeeping   │
//! │  - option-list floor (≥ 1 entry)            │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ model: Document (elements, rows, selection) │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core principles
//!
//! 1. **Validate, then apply**: a failing mutation is a strict no-op; the
//!    document is always left in its last valid state.
//! 2. **Intent-preserving operations**: each [`Mutation`] is a semantic
//!    edit (insert, remove, reconfigure), not a raw tree splice.
//! 3. **Single writer**: only mutations touch the document; renderers are
//!    read-only projections and can run after every apply.

mod editor;
mod errors;
mod mutations;
mod requests;

pub use editor::{Editor, MutationResult};
pub use errors::EditorError;
pub use mutations::{ElementPatch, Mutation, MutationError, SlotRef};
pub use requests::{parse_row_layout, PlacementRequest, PropertyPatch};

// Re-export the model types callers need alongside mutations.
pub use formstudio_model::{
    ColumnCount, Document, Element, FieldKind, Row, Selection, Snapshot, SnapshotError,
};
