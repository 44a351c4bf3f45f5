//! Shared constants for the kanban client.

// ── Storage ─────────────────────────────────────────────────────

/// `localStorage` key holding the serialized board list.
pub const BOARDS_STORAGE_KEY: &str = "kanban.boards";

// ── Form copy ───────────────────────────────────────────────────

/// Placeholder shown in the board-name field.
pub const BOARD_NAME_PLACEHOLDER: &str = "e.g. Web Design";

/// Placeholder shown in each column-name field.
pub const COLUMN_NAME_PLACEHOLDER: &str = "e.g. To Do";

/// Marker shown next to a required field left empty after a rejected submit.
pub const EMPTY_FIELD_MARKER: &str = "Can't be empty";
