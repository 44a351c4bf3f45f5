//! Board list state shared through Leptos context.
//!
//! DESIGN
//! ======
//! The store owns every board plus the selected-board index. Form
//! submissions are merged here through [`BoardsState::apply`], a pure function
//! over plain data, so create/update semantics are testable without a browser.
//! Tasks are opaque JSON and are carried through untouched.

#[cfg(test)]
#[path = "boards_test.rs"]
mod boards_test;

use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::util::ids::IdGenerator;

/// Time-derived board identifier.
pub type BoardId = u64;

/// Time-derived column identifier.
pub type ColumnId = u64;

/// A Kanban board: a titled, ordered list of columns.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    pub id: BoardId,
    pub title: String,
    #[serde(default)]
    pub columns: Vec<Column>,
}

/// A named, ordered bucket of tasks within a board.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub id: ColumnId,
    pub title: String,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

/// An opaque work item. Only the `title` field is ever read, for display.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Task(pub serde_json::Value);

impl Task {
    /// Display title, if the task carries a string `title` field.
    pub fn title(&self) -> Option<&str> {
        self.0.get("title").and_then(serde_json::Value::as_str)
    }
}

/// Result of a validated board form, ready to merge into the store.
#[derive(Clone, Debug, PartialEq)]
pub enum BoardSubmission {
    /// Append a new board and select it.
    Create(Board),
    /// Replace title and columns of the board with `board_id`.
    Update {
        board_id: BoardId,
        title: String,
        columns: Vec<Column>,
    },
}

/// Shared board list plus selection.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BoardsState {
    pub items: Vec<Board>,
    pub selected_index: usize,
}

impl BoardsState {
    #[must_use]
    pub fn new(items: Vec<Board>) -> Self {
        Self { items, selected_index: 0 }
    }

    /// The currently selected board, if the index is in range.
    pub fn selected(&self) -> Option<&Board> {
        self.items.get(self.selected_index)
    }

    /// Look up a board by id.
    pub fn find(&self, board_id: BoardId) -> Option<&Board> {
        self.items.iter().find(|board| board.id == board_id)
    }

    /// Select the board at `index`. Out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) {
        if index < self.items.len() {
            self.selected_index = index;
        }
    }

    /// Merge a form submission into the store.
    ///
    /// Returns `false` only when an update targets a board that no longer
    /// exists; the store is left unchanged in that case.
    pub fn apply(&mut self, submission: BoardSubmission) -> bool {
        match submission {
            BoardSubmission::Create(board) => {
                log::info!("creating board {} ({:?})", board.id, board.title);
                self.selected_index = self.items.len();
                self.items.push(board);
                true
            }
            BoardSubmission::Update { board_id, title, columns } => {
                let Some(board) = self.items.iter_mut().find(|board| board.id == board_id) else {
                    log::warn!("board {board_id} not found; update dropped");
                    return false;
                };
                log::info!("updating board {board_id} ({title:?})");
                board.title = title;
                board.columns = columns;
                true
            }
        }
    }

    /// Record every board and column id with `ids` so fresh ids stay unique.
    pub fn observe_ids(&self, ids: &IdGenerator) {
        for board in &self.items {
            ids.observe(board.id);
            for column in &board.columns {
                ids.observe(column.id);
            }
        }
    }
}

/// Decode a persisted board list.
///
/// # Errors
///
/// Returns `NotAList` if `value` is not a JSON array and `Malformed` if any
/// entry does not decode as a board.
pub fn boards_from_value(value: serde_json::Value) -> Result<Vec<Board>, StoreError> {
    if !value.is_array() {
        return Err(StoreError::NotAList(value));
    }
    Ok(serde_json::from_value(value)?)
}

/// Decode a persisted board list, logging and falling back to empty on error.
pub fn boards_or_empty(value: Option<serde_json::Value>) -> Vec<Board> {
    let Some(value) = value else {
        return Vec::new();
    };
    match boards_from_value(value) {
        Ok(boards) => boards,
        Err(err) => {
            log::error!("unexpected board store data, starting empty: {err}");
            Vec::new()
        }
    }
}
