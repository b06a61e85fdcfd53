//! First/prev/numbered/next/last page control.

use leptos::prelude::*;
use listing::PageControls;

#[component]
pub fn Pagination(#[prop(into)] controls: Signal<PageControls>, on_page: Callback<usize>) -> impl IntoView {
    let go = move |target: Option<usize>| {
        if let Some(page) = target {
            on_page.run(page);
        }
    };

    view! {
        <nav class="pagination" aria-label="Pagination">
            <button
                class="btn pagination__btn"
                title="First page"
                disabled=move || controls.get().first_disabled
                on:click=move |_| go((!controls.get_untracked().first_disabled).then_some(1))
            >
                "«"
            </button>
            <button
                class="btn pagination__btn"
                title="Previous page"
                disabled=move || controls.get().prev_disabled
                on:click=move |_| go(controls.get_untracked().prev())
            >
                "‹"
            </button>
            {move || {
                let current = controls.get().current;
                controls
                    .get()
                    .buttons()
                    .map(|page| {
                        view! {
                            <button
                                class="btn pagination__btn"
                                class:pagination__btn--active=page == current
                                on:click=move |_| on_page.run(page)
                            >
                                {page}
                            </button>
                        }
                    })
                    .collect_view()
            }}
            <button
                class="btn pagination__btn"
                title="Next page"
                disabled=move || controls.get().next_disabled
                on:click=move |_| go(controls.get_untracked().next())
            >
                "›"
            </button>
            <button
                class="btn pagination__btn"
                title="Last page"
                disabled=move || controls.get().last_disabled
                on:click=move |_| go(controls.get_untracked().last())
            >
                "»"
            </button>
        </nav>
    }
}
