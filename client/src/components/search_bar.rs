//! Search input and optional category select above a record list.

use leptos::prelude::*;

#[component]
pub fn SearchBar(
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    placeholder: &'static str,
) -> impl IntoView {
    view! {
        <input
            class="search-bar__input"
            type="search"
            placeholder=placeholder
            prop:value=move || value.get()
            on:input=move |ev| on_input.run(event_target_value(&ev))
        />
    }
}

/// Exact-match category filter; the empty option clears it.
#[component]
pub fn CategoryFilter(
    options: Vec<(&'static str, &'static str)>,
    #[prop(into)] value: Signal<Option<String>>,
    on_change: Callback<Option<String>>,
    all_label: &'static str,
) -> impl IntoView {
    view! {
        <select
            class="search-bar__select"
            prop:value=move || value.get().unwrap_or_default()
            on:change=move |ev| {
                let raw = event_target_value(&ev);
                on_change.run((!raw.is_empty()).then_some(raw));
            }
        >
            <option value="">{all_label}</option>
            {options
                .into_iter()
                .map(|(val, label)| view! { <option value=val>{label}</option> })
                .collect_view()}
        </select>
    }
}
