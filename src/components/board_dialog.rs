//! Modal dialog hosting the board form in create or edit mode.

use leptos::prelude::*;

use crate::components::board_form::BoardForm;
use crate::state::boards::BoardsState;
use crate::state::ui::{BoardDialog as DialogKind, UiState};

/// Backdrop + dialog shown while `UiState::board_dialog` is set.
#[component]
pub fn BoardDialog() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let boards = expect_context::<RwSignal<BoardsState>>();

    let toggle_dialog = Callback::new(move |open: bool| ui.update(|u| u.toggle_board_dialog(open)));
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            toggle_dialog.run(false);
        }
    };

    // Re-render only when the open dialog changes, not on every store write.
    let dialog = Memo::new(move |_| ui.with(|u| u.board_dialog));

    move || {
        dialog.get().map(|kind| {
            let body = match kind {
                DialogKind::Create => view! {
                    <h2>"Add New Board"</h2>
                    <BoardForm toggle_dialog=toggle_dialog />
                }
                .into_any(),
                DialogKind::Edit(board_id) => match boards.with_untracked(|s| s.find(board_id).cloned()) {
                    Some(board) => view! {
                        <h2>"Edit Board"</h2>
                        <BoardForm
                            toggle_dialog=toggle_dialog
                            board_id=board.id
                            columns=board.columns
                            title=board.title
                        />
                    }
                    .into_any(),
                    None => {
                        log::warn!("edit dialog opened for missing board {board_id}");
                        view! {
                            <h2>"Edit Board"</h2>
                            <p class="dialog__danger">"This board no longer exists."</p>
                        }
                        .into_any()
                    }
                },
            };
            view! {
                <div class="dialog-backdrop" on:click=move |_| toggle_dialog.run(false)>
                    <div
                        class="dialog dialog--board"
                        on:click=move |ev| ev.stop_propagation()
                        on:keydown=on_keydown
                        tabindex="0"
                    >
                        {body}
                    </div>
                </div>
            }
        })
    }
}
