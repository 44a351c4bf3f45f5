//! Form for creating a board or editing an existing one.
//!
//! SYSTEM CONTEXT
//! ==============
//! Hosted inside `BoardDialog`. The form owns a local draft
//! ([`BoardFormState`]) and touches the shared [`BoardsState`] only on a
//! successful submit, after which it asks the parent to close the dialog.

#[cfg(test)]
#[path = "board_form_test.rs"]
mod board_form_test;

use leptos::prelude::*;

use crate::consts::{BOARD_NAME_PLACEHOLDER, COLUMN_NAME_PLACEHOLDER};
use crate::components::text_field::TextField;
use crate::state::board_form::{BoardFormState, commit};
use crate::state::boards::{BoardId, BoardsState, Column, ColumnId};
use crate::util::alert::alert;
use crate::util::ids::IdGenerator;

/// Board create/edit form.
///
/// With `board_id` set the submit updates that board; otherwise it creates a
/// new board and selects it. `toggle_dialog(false)` is called after a
/// successful submit.
#[component]
pub fn BoardForm(
    toggle_dialog: Callback<bool>,
    #[prop(optional)] board_id: Option<BoardId>,
    #[prop(optional)] columns: Vec<Column>,
    #[prop(optional, into)] title: String,
) -> impl IntoView {
    let boards = expect_context::<RwSignal<BoardsState>>();
    let ids = expect_context::<StoredValue<IdGenerator>>();

    let form = RwSignal::new(ids.with_value(|ids| BoardFormState::seeded(board_id, &title, &columns, ids)));

    let on_add_column = move |_| {
        ids.with_value(|ids| {
            form.update(|f| {
                f.add_column(ids);
            });
        });
    };

    let on_remove_column = Callback::new(move |id: ColumnId| {
        form.update(|f| {
            f.remove_column(id);
        });
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut draft = form.get_untracked();
        let mut store = boards.get_untracked();
        let mut close_requested = false;
        let result = ids.with_value(|ids| commit(&mut draft, &mut store, ids, |open| close_requested = !open));
        match result {
            Ok(()) => boards.set(store),
            Err(err) => {
                form.set(draft);
                alert(&err.to_string());
            }
        }
        // Close last: closing unmounts this form and disposes `form`.
        if close_requested {
            toggle_dialog.run(false);
        }
    };

    let row_ids = move || form.with(|f| f.rows.iter().map(|row| row.id).collect::<Vec<_>>());

    view! {
        <form class="board-form" on:submit=on_submit novalidate=true>
            <div class="board-form__section">
                <h3 class="board-form__label">"Board Name"</h3>
                <TextField
                    name="boardName".to_owned()
                    placeholder=BOARD_NAME_PLACEHOLDER
                    autofocus=true
                    value=Signal::derive(move || form.with(|f| f.name.clone()))
                    on_input=Callback::new(move |value: String| form.update(|f| f.set_name(value)))
                    invalid=Signal::derive(move || form.with(BoardFormState::name_invalid))
                />
            </div>

            <div class="board-form__section board-form__columns">
                <h3 class="board-form__label">"Columns"</h3>
                <For
                    each=row_ids
                    key=|id| *id
                    children=move |id| {
                        view! { <ColumnRowField id=id form=form on_remove=on_remove_column /> }
                    }
                />
                <button type="button" class="btn btn--secondary board-form__add" on:click=on_add_column>
                    "+ Add New Column"
                </button>
            </div>

            <div class="board-form__actions">
                <button type="submit" class="btn btn--primary btn--full">
                    {submit_label(board_id)}
                </button>
            </div>
        </form>
    }
}

/// One column-name input with its remove button.
#[component]
fn ColumnRowField(id: ColumnId, form: RwSignal<BoardFormState>, on_remove: Callback<ColumnId>) -> impl IntoView {
    view! {
        <div class="board-form__column">
            <TextField
                name=id.to_string()
                placeholder=COLUMN_NAME_PLACEHOLDER
                value=Signal::derive(move || form.with(|f| f.column_title(id).unwrap_or_default().to_owned()))
                on_input=Callback::new(move |value: String| {
                    form.update(|f| {
                        f.set_column_title(id, value);
                    });
                })
                invalid=Signal::derive(move || form.with(|f| f.column_invalid(id)))
            />
            <button
                type="button"
                class="board-form__remove"
                title="Remove Column"
                aria-label="Remove Column"
                on:click=move |_| on_remove.run(id)
            >
                "✕"
            </button>
        </div>
    }
}

/// Submit button copy for create vs. edit.
fn submit_label(board_id: Option<BoardId>) -> &'static str {
    if board_id.is_some() { "Update Board" } else { "Create New Board" }
}
