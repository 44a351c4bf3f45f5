//! Required single-line text input.

use leptos::prelude::*;

use crate::consts::EMPTY_FIELD_MARKER;

/// Text input bound to a reactive value, with an empty-field marker.
#[component]
pub fn TextField(
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(into)] invalid: Signal<bool>,
    #[prop(optional)] placeholder: &'static str,
    #[prop(optional)] name: String,
    #[prop(optional)] autofocus: bool,
) -> impl IntoView {
    view! {
        <div class="text-field" class:text-field--invalid=move || invalid.get()>
            <input
                class="text-field__input"
                type="text"
                name=name
                placeholder=placeholder
                required=true
                autofocus=autofocus
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            <Show when=move || invalid.get()>
                <span class="text-field__error">{EMPTY_FIELD_MARKER}</span>
            </Show>
        </div>
    }
}
