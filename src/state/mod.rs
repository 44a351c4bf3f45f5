//! Client state models provided through Leptos context.
//!
//! ARCHITECTURE
//! ============
//! `boards` is the shared store, `board_form` is the draft owned by one open
//! form, and `ui` tracks which dialog is showing.

pub mod board_form;
pub mod boards;
pub mod ui;
