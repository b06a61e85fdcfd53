//! Fuel purchases with receipt and odometer photo uploads.

#[cfg(test)]
#[path = "fuel_logs_test.rs"]
mod fuel_logs_test;

use leptos::prelude::*;
use listing::{MatchCase, Matcher};
use records::RecordId;
use records::fuel_log::{FuelLog, format_peso};
use records::vehicle::Vehicle;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::crud_modal::CrudModal;
use crate::components::form_field::{file_field, select_field, text_field};
use crate::components::list_status::ListStatus;
use crate::components::pagination::Pagination;
use crate::components::search_bar::SearchBar;
use crate::components::shell::AppShell;
use crate::forms::fuel_log::FuelLogForm;
use crate::pages::list_actions;
use crate::state::list::ListState;
use crate::state::modal::ModalState;
use crate::util::time::format_date;

const PAGE_SIZE: usize = 10;

/// Case-sensitive fuel type search.
pub fn matcher() -> Matcher<FuelLog> {
    Matcher::new(|log| log.fuel_type.clone(), MatchCase::Sensitive)
}

/// Cost line under the price and quantity inputs.
pub fn cost_preview_text(form: &FuelLogForm) -> String {
    form.cost_preview().map_or_else(|| "Total: enter price and quantity".to_owned(), |cost| format!("Total: {}", format_peso(cost)))
}

fn attachment(url: Option<String>, label: &'static str) -> impl IntoView {
    url.map(|href| {
        view! {
            <a href=href target="_blank" rel="noopener" class="record-table__link">
                {label}
            </a>
        }
    })
}

#[component]
pub fn FuelLogsPage() -> impl IntoView {
    let list = RwSignal::new(ListState::<FuelLog>::new(PAGE_SIZE));
    let vehicles = RwSignal::new(Vec::<Vehicle>::new());
    let modal = RwSignal::new(ModalState::<FuelLogForm>::default());
    let pending_delete = RwSignal::new(None::<RecordId>);
    list_actions::load(list, "load fuel logs");
    list_actions::load_into(vehicles, "load vehicles");

    let matcher = matcher();
    let rows = move || list.with(|l| l.visible(&matcher));
    let controls = Signal::derive(move || list.with(|l| l.controls(&matcher)));

    let on_saved = Callback::new(move |log: FuelLog| list.update(|l| l.upsert(log)));
    let on_search = Callback::new(move |term: String| list.update(|l| l.set_search(term)));
    let on_page = Callback::new(move |page: usize| list.update(|l| l.go_to(page)));
    let on_delete_cancel = Callback::new(move |()| pending_delete.set(None));
    let on_delete_confirm = Callback::new(move |()| {
        if let Some(id) = pending_delete.get_untracked() {
            list_actions::delete(list, id, "delete fuel log");
        }
        pending_delete.set(None);
    });

    view! {
        <AppShell title="Fuel Logs">
            <section class="list-page">
                <div class="list-page__toolbar">
                    <SearchBar
                        value=Signal::derive(move || list.with(|l| l.query.search.clone()))
                        on_input=on_search
                        placeholder="Search fuel type"
                    />
                    <button class="btn btn--primary" on:click=move |_| modal.update(ModalState::open_create)>
                        "Add Fuel Log"
                    </button>
                </div>
                <ListStatus
                    loading=Signal::derive(move || list.with(|l| l.loading))
                    error=Signal::derive(move || list.with(|l| l.error.clone()))
                    empty=Signal::derive(move || rows().is_empty())
                />
                <table class="record-table">
                    <thead>
                        <tr>
                            <th>"Vehicle"</th>
                            <th>"Date"</th>
                            <th>"Odometer (km)"</th>
                            <th>"Fuel"</th>
                            <th>"Price / L"</th>
                            <th>"Litres"</th>
                            <th>"Cost"</th>
                            <th>"Attachments"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            rows()
                                .into_iter()
                                .map(|log| {
                                    let id = log.id;
                                    let vehicle = vehicles.with(|v| list_actions::vehicle_label(v, log.vehicle_id));
                                    let date = format_date(Some(log.purchase_date));
                                    let price = format_peso(log.fuel_price);
                                    let cost = format_peso(log.fuel_cost);
                                    let edit = log.clone();
                                    view! {
                                        <tr>
                                            <td>{vehicle}</td>
                                            <td>{date}</td>
                                            <td>{log.odometer_km}</td>
                                            <td>{log.fuel_type}</td>
                                            <td>{price}</td>
                                            <td>{log.fuel_quantity}</td>
                                            <td>{cost}</td>
                                            <td>
                                                {attachment(log.fuel_receipt, "Receipt")}
                                                " "
                                                {attachment(log.odometer_proof, "Odometer")}
                                            </td>
                                            <td class="record-table__actions">
                                                <button class="btn" on:click=move |_| modal.update(|m| m.open_edit(&edit))>
                                                    "Edit"
                                                </button>
                                                <button class="btn btn--danger" on:click=move |_| pending_delete.set(Some(id))>
                                                    "Delete"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                        }}
                    </tbody>
                </table>
                <Pagination controls=controls on_page=on_page />
            </section>
            <Show when=move || modal.with(ModalState::is_open)>
                <CrudModal modal=modal noun="Fuel Log" on_saved=on_saved>
                    {select_field(
                        modal,
                        "Vehicle",
                        Some("Select a vehicle"),
                        move || vehicles.with(|v| list_actions::vehicle_choices(v)),
                        |f| f.vehicle_id.clone(),
                        |f, v| f.vehicle_id = v,
                    )}
                    {text_field(modal, "Purchase date", "date", |f| f.purchase_date.clone(), |f, v| f.purchase_date = v)}
                    {text_field(modal, "Odometer (km)", "number", |f| f.odometer_km.clone(), |f, v| f.odometer_km = v)}
                    {text_field(modal, "Fuel type", "text", |f| f.fuel_type.clone(), |f, v| f.fuel_type = v)}
                    {text_field(modal, "Price per litre", "number", |f| f.fuel_price.clone(), |f, v| f.fuel_price = v)}
                    {text_field(modal, "Litres", "number", |f| f.fuel_quantity.clone(), |f, v| f.fuel_quantity = v)}
                    <p class="dialog__hint">{move || modal.with(|m| cost_preview_text(&m.form))}</p>
                    {file_field(modal, "Fuel receipt", |f| f.receipt.as_ref(), |f, v| f.receipt = v)}
                    {file_field(modal, "Odometer photo", |f| f.odometer_proof.as_ref(), |f, v| f.odometer_proof = v)}
                </CrudModal>
            </Show>
            <Show when=move || pending_delete.get().is_some()>
                <ConfirmDialog
                    title="Delete fuel log"
                    message="This fuel log and its attachments will be permanently removed."
                    on_cancel=on_delete_cancel
                    on_confirm=on_delete_confirm
                />
            </Show>
        </AppShell>
    }
}
