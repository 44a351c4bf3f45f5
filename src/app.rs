//! Root component: context providers and board persistence.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` owns the shared board store, the UI dialog state, and the id
//! generator, and provides all three through Leptos context. The store is
//! loaded from `localStorage` once and written back on every change.

use leptos::prelude::*;

use crate::components::board_columns::BoardColumns;
use crate::components::board_dialog::BoardDialog;
use crate::components::board_sidebar::BoardSidebar;
use crate::consts::BOARDS_STORAGE_KEY;
use crate::state::boards::{BoardsState, boards_or_empty};
use crate::state::ui::UiState;
use crate::util::ids::IdGenerator;
use crate::util::ui_persistence;

/// Application root.
#[component]
pub fn App() -> impl IntoView {
    let initial = BoardsState::new(boards_or_empty(ui_persistence::load_json(BOARDS_STORAGE_KEY)));
    let ids = IdGenerator::new();
    initial.observe_ids(&ids);
    log::info!("loaded {} boards", initial.items.len());

    let boards = RwSignal::new(initial);
    let ui = RwSignal::new(UiState::default());
    let ids = StoredValue::new(ids);
    provide_context(boards);
    provide_context(ui);
    provide_context(ids);

    Effect::new(move || {
        boards.with(|s| ui_persistence::save_json(BOARDS_STORAGE_KEY, &s.items));
    });

    view! {
        <div class="app">
            <BoardSidebar />
            <main class="app__main">
                <BoardColumns />
            </main>
            <BoardDialog />
        </div>
    }
}
