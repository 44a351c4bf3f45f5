//! Draft state for the create/edit board form.
//!
//! DESIGN
//! ======
//! The form edits an ordered list of column rows keyed by stable ids, so
//! removing a row never disturbs the values typed into its neighbors. Nothing
//! reaches the shared store until [`BoardFormState::submit`] validates the
//! draft and produces a [`BoardSubmission`].

#[cfg(test)]
#[path = "board_form_test.rs"]
mod board_form_test;

use crate::error::FormError;
use crate::state::boards::{Board, BoardId, BoardSubmission, BoardsState, Column, ColumnId, Task};
use crate::util::ids::IdGenerator;

/// One editable column row.
#[derive(Clone, Debug, PartialEq)]
pub struct ColumnRow {
    pub id: ColumnId,
    pub title: String,
    /// Tasks of the column this row was seeded from; empty for new rows.
    pub tasks: Vec<Task>,
}

/// Form draft: board name plus column rows.
#[derive(Clone, Debug, PartialEq)]
pub struct BoardFormState {
    /// Set when editing an existing board.
    pub board_id: Option<BoardId>,
    pub name: String,
    pub rows: Vec<ColumnRow>,
    /// True after a rejected submit; drives empty-field markers.
    pub attempted: bool,
}

impl BoardFormState {
    /// Seed a draft from optional existing values.
    ///
    /// With no columns the draft starts with one blank row.
    pub fn seeded(board_id: Option<BoardId>, title: &str, columns: &[Column], ids: &IdGenerator) -> Self {
        let mut rows: Vec<ColumnRow> = columns
            .iter()
            .map(|column| ColumnRow {
                id: column.id,
                title: column.title.clone(),
                tasks: column.tasks.clone(),
            })
            .collect();
        if rows.is_empty() {
            rows.push(blank_row(ids.next_id()));
        }
        Self { board_id, name: title.to_owned(), rows, attempted: false }
    }

    /// Blank draft for creating a board.
    pub fn blank(ids: &IdGenerator) -> Self {
        Self::seeded(None, "", &[], ids)
    }

    /// Draft for editing `board`.
    pub fn for_board(board: &Board, ids: &IdGenerator) -> Self {
        Self::seeded(Some(board.id), &board.title, &board.columns, ids)
    }

    pub fn is_editing(&self) -> bool {
        self.board_id.is_some()
    }

    /// Append a blank row and return its id.
    pub fn add_column(&mut self, ids: &IdGenerator) -> ColumnId {
        let id = ids.next_id();
        log::debug!("adding column row {id}");
        self.rows.push(blank_row(id));
        id
    }

    /// Remove the row with `id`. Returns whether a row was removed.
    pub fn remove_column(&mut self, id: ColumnId) -> bool {
        let before = self.rows.len();
        self.rows.retain(|row| row.id != id);
        let removed = self.rows.len() != before;
        if removed {
            log::debug!("removed column row {id}");
        }
        removed
    }

    pub fn set_name(&mut self, name: String) {
        self.name = name;
    }

    /// Update the title of row `id`. Returns whether the row exists.
    pub fn set_column_title(&mut self, id: ColumnId, title: String) -> bool {
        match self.rows.iter_mut().find(|row| row.id == id) {
            Some(row) => {
                row.title = title;
                true
            }
            None => false,
        }
    }

    /// Current title of row `id`.
    pub fn column_title(&self, id: ColumnId) -> Option<&str> {
        self.rows.iter().find(|row| row.id == id).map(|row| row.title.as_str())
    }

    /// Whether the board name should show the empty-field marker.
    pub fn name_invalid(&self) -> bool {
        self.attempted && is_blank(&self.name)
    }

    /// Whether row `id` should show the empty-field marker.
    pub fn column_invalid(&self, id: ColumnId) -> bool {
        self.attempted && self.column_title(id).is_some_and(is_blank)
    }

    /// Check required fields: board name first, then column titles in order.
    ///
    /// # Errors
    ///
    /// Returns the first missing required value.
    pub fn validate(&self) -> Result<(), FormError> {
        if is_blank(&self.name) {
            return Err(FormError::MissingBoardName);
        }
        if let Some((index, row)) = self.rows.iter().enumerate().find(|(_, row)| is_blank(&row.title)) {
            return Err(FormError::MissingColumnTitle { id: row.id, position: index + 1 });
        }
        Ok(())
    }

    /// Validate and build the submission.
    ///
    /// Editing keeps each row's tasks; creating always starts columns empty.
    /// A new board id is drawn from `ids` only for creation.
    ///
    /// # Errors
    ///
    /// Returns the first missing required value; the draft is not changed.
    pub fn submit(&self, ids: &IdGenerator) -> Result<BoardSubmission, FormError> {
        self.validate()?;
        let title = self.name.trim().to_owned();
        let columns: Vec<Column> = self
            .rows
            .iter()
            .map(|row| Column {
                id: row.id,
                title: row.title.trim().to_owned(),
                tasks: if self.is_editing() { row.tasks.clone() } else { Vec::new() },
            })
            .collect();
        Ok(match self.board_id {
            Some(board_id) => BoardSubmission::Update { board_id, title, columns },
            None => BoardSubmission::Create(Board { id: ids.next_id(), title, columns }),
        })
    }
}

/// Submit `form` into `store` and close the dialog through `toggle_dialog`.
///
/// On success the submission is merged and `toggle_dialog(false)` is called,
/// even when the edited board has vanished from the store. On rejection the
/// store is untouched, the dialog stays open, and the form is marked
/// `attempted` so empty fields show their markers.
///
/// # Errors
///
/// Returns the first missing required value.
pub fn commit(
    form: &mut BoardFormState,
    store: &mut BoardsState,
    ids: &IdGenerator,
    toggle_dialog: impl FnOnce(bool),
) -> Result<(), FormError> {
    match form.submit(ids) {
        Ok(submission) => {
            store.apply(submission);
            toggle_dialog(false);
            Ok(())
        }
        Err(err) => {
            form.attempted = true;
            Err(err)
        }
    }
}

fn blank_row(id: ColumnId) -> ColumnRow {
    ColumnRow { id, title: String::new(), tasks: Vec::new() }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
