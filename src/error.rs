//! Error types for form submission and persisted store decoding.
//!
//! `FormError` messages are shown verbatim in the blocking alert, so they are
//! written as user-facing sentences.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use crate::state::boards::ColumnId;

/// Reasons a board form submission is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Board name is required.")]
    MissingBoardName,
    /// `position` is 1-based, matching what the user sees.
    #[error("Column {position} name is required.")]
    MissingColumnTitle { id: ColumnId, position: usize },
}

/// Reasons persisted board data could not be used.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("board store is not a list: {0}")]
    NotAList(serde_json::Value),
    #[error("board store entry is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}
