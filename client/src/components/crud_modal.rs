//! Generic create/edit dialog driven by `ModalState`.
//!
//! DESIGN
//! ======
//! The dialog owns the submit lifecycle for any `RecordForm`: it asks the
//! state machine for the single request, sends it, and on success closes
//! and hands the saved record to `on_saved` so the page can merge it.

use leptos::prelude::*;

use crate::forms::RecordForm;
use crate::state::modal::ModalState;

/// Validate, send the one request, and settle the modal.
pub fn submit_modal<F: RecordForm>(modal: RwSignal<ModalState<F>>, on_saved: Callback<F::Record>) {
    let mut request = None;
    modal.update(|m| request = m.begin_submit());
    let Some(request) = request else {
        return;
    };

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch::<F::Record>(request).await {
            Ok(record) => {
                modal.update(ModalState::finish_ok);
                on_saved.run(record);
            }
            Err(e) => {
                let banner = crate::net::api::report("save", &e);
                modal.update(|m| m.finish_err(&banner));
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (request, on_saved);
    }
}

#[component]
pub fn CrudModal<F: RecordForm>(
    modal: RwSignal<ModalState<F>>,
    noun: &'static str,
    on_saved: Callback<F::Record>,
    children: Children,
) -> impl IntoView {
    let cancel = move || {
        if !modal.with_untracked(ModalState::is_submitting) {
            modal.update(ModalState::close);
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| cancel()>
            <div class="dialog dialog--form" on:click=move |ev| ev.stop_propagation()>
                <h2>{move || modal.with(|m| m.title(noun))}</h2>
                <form
                    class="dialog__form"
                    on:submit=move |ev: leptos::ev::SubmitEvent| {
                        ev.prevent_default();
                        submit_modal(modal, on_saved);
                    }
                >
                    {children()}
                    <Show when=move || modal.with(|m| m.error.is_some())>
                        <p class="dialog__error">{move || modal.with(|m| m.error.clone().unwrap_or_default())}</p>
                    </Show>
                    <div class="dialog__actions">
                        <button type="button" class="btn" on:click=move |_| cancel()>
                            "Cancel"
                        </button>
                        <button
                            type="submit"
                            class="btn btn--primary"
                            disabled=move || modal.with(ModalState::is_submitting)
                        >
                            {move || if modal.with(ModalState::is_submitting) { "Saving..." } else { "Save" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
