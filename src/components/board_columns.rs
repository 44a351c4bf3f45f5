//! Selected board view: header with edit action and one lane per column.
//!
//! Tasks are opaque; each card shows the task's `title` when present.

#[cfg(test)]
#[path = "board_columns_test.rs"]
mod board_columns_test;

use leptos::prelude::*;

use crate::state::boards::{BoardsState, Column};
use crate::state::ui::UiState;

/// Header + columns for the selected board, or an empty-state prompt.
#[component]
pub fn BoardColumns() -> impl IntoView {
    let boards = expect_context::<RwSignal<BoardsState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let selected = Memo::new(move |_| boards.with(|s| s.selected().cloned()));

    move || match selected.get() {
        None => view! {
            <section class="board-view board-view--empty">
                <p>"There are no boards yet. Create one to get started."</p>
                <button class="btn btn--primary" on:click=move |_| ui.update(UiState::open_create)>
                    "+ Create New Board"
                </button>
            </section>
        }
        .into_any(),
        Some(board) => {
            let board_id = board.id;
            let body = if board.columns.is_empty() {
                view! {
                    <div class="board-view__empty">
                        <p>"This board is empty. Create a new column to get started."</p>
                        <button class="btn btn--primary" on:click=move |_| ui.update(|u| u.open_edit(board_id))>
                            "+ Add New Column"
                        </button>
                    </div>
                }
                .into_any()
            } else {
                view! {
                    <div class="board-view__columns">
                        {board.columns.into_iter().map(|column| view! { <ColumnLane column=column /> }).collect::<Vec<_>>()}
                    </div>
                }
                .into_any()
            };
            view! {
                <section class="board-view">
                    <header class="board-view__header toolbar">
                        <span class="toolbar__board-name">{board.title}</span>
                        <span class="toolbar__spacer"></span>
                        <button class="btn toolbar__edit-board" on:click=move |_| ui.update(|u| u.open_edit(board_id))>
                            "Edit Board"
                        </button>
                    </header>
                    {body}
                </section>
            }
            .into_any()
        }
    }
}

/// One column with its task cards.
#[component]
fn ColumnLane(column: Column) -> impl IntoView {
    let heading = column_heading(&column);
    view! {
        <div class="column-lane">
            <h4 class="column-lane__title">{heading}</h4>
            <ul class="column-lane__tasks">
                {column
                    .tasks
                    .iter()
                    .map(|task| {
                        let title = task.title().unwrap_or("Untitled task").to_owned();
                        view! { <li class="column-lane__task">{title}</li> }
                    })
                    .collect::<Vec<_>>()}
            </ul>
        </div>
    }
}

/// Column heading with task count, e.g. `TODO (4)`.
fn column_heading(column: &Column) -> String {
    format!("{} ({})", column.title.to_uppercase(), column.tasks.len())
}
