//! Local UI chrome state (open dialogs).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of the board store so the form
//! dialog can open and close without touching board data.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::state::boards::BoardId;

/// Which board dialog is open.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoardDialog {
    /// Blank form for a new board.
    Create,
    /// Form seeded from an existing board.
    Edit(BoardId),
}

/// UI state for dialogs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub board_dialog: Option<BoardDialog>,
}

impl UiState {
    pub fn open_create(&mut self) {
        self.board_dialog = Some(BoardDialog::Create);
    }

    pub fn open_edit(&mut self, board_id: BoardId) {
        self.board_dialog = Some(BoardDialog::Edit(board_id));
    }

    /// Dialog toggle as handed to the form: `false` closes, `true` keeps
    /// whatever is open.
    pub fn toggle_board_dialog(&mut self, open: bool) {
        if !open {
            self.board_dialog = None;
        }
    }
}
