//! Inputs bound to one field of a modal's form.
//!
//! Each helper takes a getter and a setter over the form struct so the same
//! markup serves every `RecordForm`.

#[cfg(test)]
#[path = "form_field_test.rs"]
mod form_field_test;

use leptos::prelude::*;
use records::fuel_log::Upload;

use crate::forms::RecordForm;
use crate::state::modal::ModalState;

/// `(value, label)` pairs for a select.
pub type Choices = Vec<(String, String)>;

/// Build select choices from a fixed list of enum variants.
pub fn choices<T: Copy>(all: &[T], value: fn(T) -> &'static str, label: fn(T) -> &'static str) -> Choices {
    all.iter().map(|item| (value(*item).to_owned(), label(*item).to_owned())).collect()
}

pub fn text_field<F: RecordForm>(
    modal: RwSignal<ModalState<F>>,
    label: &'static str,
    input_type: &'static str,
    get: fn(&F) -> String,
    set: fn(&mut F, String),
) -> impl IntoView {
    view! {
        <label class="dialog__label">
            {label}
            <input
                class="dialog__input"
                type=input_type
                prop:value=move || modal.with(|m| get(&m.form))
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    modal.update(|m| set(&mut m.form, value));
                }
            />
        </label>
    }
}

pub fn select_field<F, O>(
    modal: RwSignal<ModalState<F>>,
    label: &'static str,
    placeholder: Option<&'static str>,
    options: O,
    get: fn(&F) -> String,
    set: fn(&mut F, String),
) -> impl IntoView
where
    F: RecordForm,
    O: Fn() -> Choices + Send + Sync + 'static,
{
    view! {
        <label class="dialog__label">
            {label}
            <select
                class="dialog__input"
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    modal.update(|m| set(&mut m.form, value));
                }
            >
                {placeholder.map(|text| view! { <option value="">{text}</option> })}
                {move || {
                    let current = modal.with(|m| get(&m.form));
                    options()
                        .into_iter()
                        .map(|(value, text)| {
                            let selected = value == current;
                            view! {
                                <option value=value selected=selected>
                                    {text}
                                </option>
                            }
                        })
                        .collect_view()
                }}
            </select>
        </label>
    }
}

pub fn checkbox_field<F: RecordForm>(
    modal: RwSignal<ModalState<F>>,
    label: &'static str,
    get: fn(&F) -> bool,
    set: fn(&mut F, bool),
) -> impl IntoView {
    view! {
        <label class="dialog__label dialog__label--inline">
            <input
                type="checkbox"
                prop:checked=move || modal.with(|m| get(&m.form))
                on:change=move |ev| {
                    let checked = event_target_checked(&ev);
                    modal.update(|m| set(&mut m.form, checked));
                }
            />
            {label}
        </label>
    }
}

/// File picker that reads the chosen file into the form.
pub fn file_field<F: RecordForm>(
    modal: RwSignal<ModalState<F>>,
    label: &'static str,
    get: fn(&F) -> Option<&Upload>,
    set: fn(&mut F, Option<Upload>),
) -> impl IntoView {
    view! {
        <label class="dialog__label">
            {label}
            <input
                class="dialog__input"
                type="file"
                accept="image/*,application/pdf"
                on:change=move |ev| {
                    #[cfg(feature = "hydrate")]
                    {
                        let input = event_target::<web_sys::HtmlInputElement>(&ev);
                        let Some(file) = input.files().and_then(|files| files.get(0)) else {
                            modal.update(|m| set(&mut m.form, None));
                            return;
                        };
                        leptos::task::spawn_local(async move {
                            match read_upload(&file).await {
                                Ok(upload) => modal.update(|m| set(&mut m.form, Some(upload))),
                                Err(e) => log::warn!("could not read {}: {e:?}", file.name()),
                            }
                        });
                    }
                    #[cfg(not(feature = "hydrate"))]
                    {
                        let _ = (ev, set);
                    }
                }
            />
            <span class="dialog__hint">
                {move || modal.with(|m| upload_caption(get(&m.form)))}
            </span>
        </label>
    }
}

/// Hint under a file picker.
pub fn upload_caption(upload: Option<&Upload>) -> String {
    upload.map_or_else(|| "No new file chosen".to_owned(), |u| format!("{} ({} KB)", u.file_name, u.bytes.len().div_ceil(1024)))
}

#[cfg(feature = "hydrate")]
async fn read_upload(file: &web_sys::File) -> Result<Upload, wasm_bindgen::JsValue> {
    let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer()).await?;
    Ok(Upload { file_name: file.name(), bytes: js_sys::Uint8Array::new(&buffer).to_vec() })
}
