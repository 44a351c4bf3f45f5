//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render board chrome and the board form while reading/writing
//! shared state from Leptos context providers.

pub mod board_columns;
pub mod board_dialog;
pub mod board_form;
pub mod board_sidebar;
pub mod text_field;
