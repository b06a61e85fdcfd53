//! Vehicle registry: plate search, status filter, create/edit/delete.
//!
//! Saved records are spliced into the list locally; no refetch.

#[cfg(test)]
#[path = "vehicles_test.rs"]
mod vehicles_test;

use leptos::prelude::*;
use listing::{MatchCase, Matcher};
use records::RecordId;
use records::vehicle::{Vehicle, VehicleStatus};

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::crud_modal::CrudModal;
use crate::components::form_field::{choices, select_field, text_field};
use crate::components::list_status::ListStatus;
use crate::components::pagination::Pagination;
use crate::components::search_bar::{CategoryFilter, SearchBar};
use crate::components::shell::AppShell;
use crate::forms::vehicle::VehicleForm;
use crate::pages::list_actions;
use crate::state::dashboard::INSURANCE_WARNING_DAYS;
use crate::state::list::ListState;
use crate::state::modal::ModalState;
use crate::util::time::{format_date, today};

const PAGE_SIZE: usize = 10;

/// Case-insensitive plate search, status category.
pub fn matcher() -> Matcher<Vehicle> {
    Matcher::new(|v: &Vehicle| v.plate_number.clone(), MatchCase::Insensitive).with_category(|v| v.status.as_str().to_owned())
}

fn status_options() -> Vec<(&'static str, &'static str)> {
    VehicleStatus::ALL.iter().map(|s| (s.as_str(), s.label())).collect()
}

#[component]
pub fn VehiclesPage() -> impl IntoView {
    let list = RwSignal::new(ListState::<Vehicle>::new(PAGE_SIZE));
    let modal = RwSignal::new(ModalState::<VehicleForm>::default());
    let pending_delete = RwSignal::new(None::<RecordId>);
    list_actions::load(list, "load vehicles");

    let matcher = matcher();
    let rows = move || list.with(|l| l.visible(&matcher));
    let controls = Signal::derive(move || list.with(|l| l.controls(&matcher)));

    let on_saved = Callback::new(move |vehicle: Vehicle| list.update(|l| l.upsert(vehicle)));
    let on_search = Callback::new(move |term: String| list.update(|l| l.set_search(term)));
    let on_category = Callback::new(move |category: Option<String>| list.update(|l| l.set_category(category)));
    let on_page = Callback::new(move |page: usize| list.update(|l| l.go_to(page)));
    let on_delete_cancel = Callback::new(move |()| pending_delete.set(None));
    let on_delete_confirm = Callback::new(move |()| {
        if let Some(id) = pending_delete.get_untracked() {
            list_actions::delete(list, id, "delete vehicle");
        }
        pending_delete.set(None);
    });

    view! {
        <AppShell title="Vehicles">
            <section class="list-page">
                <div class="list-page__toolbar">
                    <SearchBar
                        value=Signal::derive(move || list.with(|l| l.query.search.clone()))
                        on_input=on_search
                        placeholder="Search plate number"
                    />
                    <CategoryFilter
                        options=status_options()
                        value=Signal::derive(move || list.with(|l| l.query.category.clone()))
                        on_change=on_category
                        all_label="All statuses"
                    />
                    <button class="btn btn--primary" on:click=move |_| modal.update(ModalState::open_create)>
                        "Add Vehicle"
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
                            <th>"Unit"</th>
                            <th>"Plate"</th>
                            <th>"Type"</th>
                            <th>"Seats"</th>
                            <th>"Route"</th>
                            <th>"Status"</th>
                            <th>"TPL expiry"</th>
                            <th>"CI expiry"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let today = today();
                            rows()
                                .into_iter()
                                .map(|vehicle| {
                                    let id = vehicle.id;
                                    let edit = vehicle.clone();
                                    let expiring = !vehicle.expiring_insurance(today, INSURANCE_WARNING_DAYS).is_empty();
                                    let tpl = format_date(vehicle.tpl_expiry_date);
                                    let ci = format_date(vehicle.ci_expiry_date);
                                    view! {
                                        <tr class:record-table__row--warn=expiring>
                                            <td>{vehicle.vehicle_number.clone()}</td>
                                            <td>{vehicle.plate_number.clone()}</td>
                                            <td>{vehicle.vehicle_type.clone()}</td>
                                            <td>{vehicle.seating_capacity}</td>
                                            <td>{vehicle.route.clone()}</td>
                                            <td>{vehicle.status.label()}</td>
                                            <td>{tpl}</td>
                                            <td>{ci}</td>
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
                <CrudModal modal=modal noun="Vehicle" on_saved=on_saved>
                    {text_field(modal, "Vehicle number", "text", |f| f.vehicle_number.clone(), |f, v| f.vehicle_number = v)}
                    {text_field(modal, "Plate number", "text", |f| f.plate_number.clone(), |f, v| f.plate_number = v)}
                    {text_field(modal, "Vehicle type", "text", |f| f.vehicle_type.clone(), |f, v| f.vehicle_type = v)}
                    {text_field(modal, "Seating capacity", "number", |f| f.seating_capacity.clone(), |f, v| f.seating_capacity = v)}
                    {text_field(modal, "Route", "text", |f| f.route.clone(), |f, v| f.route = v)}
                    {select_field(
                        modal,
                        "Status",
                        None,
                        || choices(&VehicleStatus::ALL, VehicleStatus::as_str, VehicleStatus::label),
                        |f| f.status.clone(),
                        |f, v| f.status = v,
                    )}
                    {text_field(modal, "OR number", "text", |f| f.or_number.clone(), |f, v| f.or_number = v)}
                    {text_field(modal, "OR date issued", "date", |f| f.or_date_issued.clone(), |f, v| f.or_date_issued = v)}
                    {text_field(modal, "CR number", "text", |f| f.cr_number.clone(), |f, v| f.cr_number = v)}
                    {text_field(modal, "CR date issued", "date", |f| f.cr_date_issued.clone(), |f, v| f.cr_date_issued = v)}
                    {text_field(modal, "TPL policy number", "text", |f| f.tpl_policy_number.clone(), |f, v| f.tpl_policy_number = v)}
                    {text_field(modal, "TPL expiry", "date", |f| f.tpl_expiry_date.clone(), |f, v| f.tpl_expiry_date = v)}
                    {text_field(modal, "CI policy number", "text", |f| f.ci_policy_number.clone(), |f, v| f.ci_policy_number = v)}
                    {text_field(modal, "CI expiry", "date", |f| f.ci_expiry_date.clone(), |f, v| f.ci_expiry_date = v)}
                </CrudModal>
            </Show>
            <Show when=move || pending_delete.get().is_some()>
                <ConfirmDialog
                    title="Delete vehicle"
                    message="This vehicle will be permanently removed."
                    on_cancel=on_delete_cancel
                    on_confirm=on_delete_confirm
                />
            </Show>
        </AppShell>
    }
}
