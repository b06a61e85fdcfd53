//! Loading, error and empty-state line shown above a record table.

use leptos::prelude::*;

#[component]
pub fn ListStatus(
    #[prop(into)] loading: Signal<bool>,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(into)] empty: Signal<bool>,
) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some()>
            <p class="banner banner--error">{move || error.get().unwrap_or_default()}</p>
        </Show>
        <Show when=move || loading.get()>
            <p class="list-page__status">"Loading..."</p>
        </Show>
        <Show when=move || !loading.get() && empty.get()>
            <p class="list-page__status">"No records found."</p>
        </Show>
    }
}
