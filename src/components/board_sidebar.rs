//! Sidebar listing every board with selection and a create action.

#[cfg(test)]
#[path = "board_sidebar_test.rs"]
mod board_sidebar_test;

use leptos::prelude::*;

use crate::state::boards::BoardsState;
use crate::state::ui::UiState;

/// Board navigation sidebar.
#[component]
pub fn BoardSidebar() -> impl IntoView {
    let boards = expect_context::<RwSignal<BoardsState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let entries = move || {
        boards.with(|s| {
            s.items
                .iter()
                .enumerate()
                .map(|(index, board)| (index, board.title.clone(), index == s.selected_index))
                .collect::<Vec<_>>()
        })
    };

    view! {
        <nav class="sidebar">
            <h4 class="sidebar__heading">{move || board_count_label(boards.with(|s| s.items.len()))}</h4>
            <ul class="sidebar__list">
                {move || {
                    entries()
                        .into_iter()
                        .map(|(index, title, active)| {
                            view! {
                                <li>
                                    <button
                                        class="sidebar__board"
                                        class:sidebar__board--active=active
                                        on:click=move |_| boards.update(|s| s.select(index))
                                    >
                                        {title}
                                    </button>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </ul>
            <button class="sidebar__create" on:click=move |_| ui.update(UiState::open_create)>
                "+ Create New Board"
            </button>
        </nav>
    }
}

/// Sidebar heading with the board count.
pub fn board_count_label(count: usize) -> String {
    format!("ALL BOARDS ({count})")
}
