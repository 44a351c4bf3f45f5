//! Kanban board client compiled to WebAssembly.
//!
//! The application keeps a list of boards in a shared Leptos signal and lets
//! the user create or edit a board through a modal form. Boards are persisted
//! to browser `localStorage`; there is no server.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`app`] | Root component and context providers |
//! | [`components`] | Board form, dialog, sidebar, and column view |
//! | [`state`] | Board store, form draft model, and UI chrome state |
//! | [`util`] | Id generation, storage, and alert helpers |
//! | [`error`] | Form validation and store decode errors |
//! | [`consts`] | Storage keys and UI copy |

pub mod app;
pub mod components;
pub mod consts;
pub mod error;
pub mod state;
pub mod util;

/// Browser entry point: install logging and mount [`app::App`] on `<body>`.
#[cfg(feature = "csr")]
pub fn mount() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger unavailable: {err}");
    }
    log::info!("kanban client starting");
    leptos::mount::mount_to_body(app::App);
}
