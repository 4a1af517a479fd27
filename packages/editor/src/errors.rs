//! Error types for the editor

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("mutation error: {0}")]
    Mutation(#[from] crate::mutations::MutationError),

    #[error("snapshot error: {0}")]
    Snapshot(#[from] formstudio_model::SnapshotError),
}
