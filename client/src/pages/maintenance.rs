//! Maintenance schedule with a pending/completed toggle per row.
//!
//! Saves and toggles are merged by refetching the schedule.

#[cfg(test)]
#[path = "maintenance_test.rs"]
mod maintenance_test;

use leptos::prelude::*;
use listing::{MatchCase, Matcher};
use records::RecordId;
use records::fuel_log::format_peso;
use records::maintenance::{self, MaintenanceSchedule, MaintenanceStatus};
use records::vehicle::Vehicle;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::crud_modal::CrudModal;
use crate::components::form_field::{choices, select_field, text_field};
use crate::components::list_status::ListStatus;
use crate::components::pagination::Pagination;
use crate::components::search_bar::{CategoryFilter, SearchBar};
use crate::components::shell::AppShell;
use crate::forms::maintenance::MaintenanceForm;
use crate::pages::list_actions;
use crate::state::list::ListState;
use crate::state::modal::ModalState;
use crate::util::time::{format_date, today};

const PAGE_SIZE: usize = 10;

/// Case-insensitive type search, status category.
pub fn matcher() -> Matcher<MaintenanceSchedule> {
    Matcher::new(|m: &MaintenanceSchedule| m.maintenance_type.clone(), MatchCase::Insensitive)
        .with_category(|m| m.status.as_str().to_owned())
}

/// Label for the toggle button: the status the row would move to.
pub fn toggle_label(status: MaintenanceStatus) -> &'static str {
    match status.toggled() {
        MaintenanceStatus::Completed => "Mark completed",
        MaintenanceStatus::Pending => "Reopen",
    }
}

#[component]
pub fn MaintenancePage() -> impl IntoView {
    let list = RwSignal::new(ListState::<MaintenanceSchedule>::new(PAGE_SIZE));
    let vehicles = RwSignal::new(Vec::<Vehicle>::new());
    let modal = RwSignal::new(ModalState::<MaintenanceForm>::default());
    let pending_delete = RwSignal::new(None::<RecordId>);
    list_actions::load(list, "load maintenance");
    list_actions::load_into(vehicles, "load vehicles");

    let matcher = matcher();
    let rows = move || list.with(|l| l.visible(&matcher));
    let controls = Signal::derive(move || list.with(|l| l.controls(&matcher)));

    let reload = Callback::new(move |()| list_actions::load(list, "load maintenance"));
    let on_saved = Callback::new(move |_: MaintenanceSchedule| reload.run(()));
    let on_search = Callback::new(move |term: String| list.update(|l| l.set_search(term)));
    let on_category = Callback::new(move |category: Option<String>| list.update(|l| l.set_category(category)));
    let on_page = Callback::new(move |page: usize| list.update(|l| l.go_to(page)));
    let on_delete_cancel = Callback::new(move |()| pending_delete.set(None));
    let on_delete_confirm = Callback::new(move |()| {
        if let Some(id) = pending_delete.get_untracked() {
            list_actions::delete(list, id, "delete maintenance");
        }
        pending_delete.set(None);
    });

    view! {
        <AppShell title="Maintenance">
            <section class="list-page">
                <div class="list-page__toolbar">
                    <SearchBar
                        value=Signal::derive(move || list.with(|l| l.query.search.clone()))
                        on_input=on_search
                        placeholder="Search maintenance type"
                    />
                    <CategoryFilter
                        options=MaintenanceStatus::ALL.iter().map(|s| (s.as_str(), s.label())).collect()
                        value=Signal::derive(move || list.with(|l| l.query.category.clone()))
                        on_change=on_category
                        all_label="All statuses"
                    />
                    <button class="btn btn--primary" on:click=move |_| modal.update(ModalState::open_create)>
                        "Schedule Maintenance"
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
                            <th>"Type"</th>
                            <th>"Date"</th>
                            <th>"Cost"</th>
                            <th>"Address"</th>
                            <th>"Status"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let today = today();
                            rows()
                                .into_iter()
                                .map(|item| {
                                    let id = item.id;
                                    let status = item.status;
                                    let overdue = item.is_overdue(today);
                                    let vehicle = vehicles.with(|v| list_actions::vehicle_label(v, item.vehicle_id));
                                    let date = format_date(Some(item.maintenance_date));
                                    let cost = format_peso(item.maintenance_cost);
                                    let edit = item.clone();
                                    view! {
                                        <tr class:record-table__row--warn=overdue>
                                            <td>{vehicle}</td>
                                            <td>{item.maintenance_type}</td>
                                            <td>{date}</td>
                                            <td>{cost}</td>
                                            <td>{item.maintenance_address}</td>
                                            <td>{status.label()}</td>
                                            <td class="record-table__actions">
                                                <button
                                                    class="btn"
                                                    on:click=move |_| {
                                                        list_actions::run_then_reload(
                                                            list,
                                                            maintenance::toggle_status(id),
                                                            "toggle maintenance status",
                                                            reload,
                                                        );
                                                    }
                                                >
                                                    {toggle_label(status)}
                                                </button>
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
                <CrudModal modal=modal noun="Maintenance" on_saved=on_saved>
                    {select_field(
                        modal,
                        "Vehicle",
                        Some("Select a vehicle"),
                        move || vehicles.with(|v| list_actions::vehicle_choices(v)),
                        |f| f.vehicle_id.clone(),
                        |f, v| f.vehicle_id = v,
                    )}
                    {text_field(modal, "Maintenance type", "text", |f| f.maintenance_type.clone(), |f, v| f.maintenance_type = v)}
                    {text_field(modal, "Date", "date", |f| f.maintenance_date.clone(), |f, v| f.maintenance_date = v)}
                    {text_field(modal, "Cost", "number", |f| f.maintenance_cost.clone(), |f, v| f.maintenance_cost = v)}
                    {text_field(modal, "Address", "text", |f| f.maintenance_address.clone(), |f, v| f.maintenance_address = v)}
                    {select_field(
                        modal,
                        "Status",
                        None,
                        || choices(&MaintenanceStatus::ALL, MaintenanceStatus::as_str, MaintenanceStatus::label),
                        |f| f.status.clone(),
                        |f, v| f.status = v,
                    )}
                </CrudModal>
            </Show>
            <Show when=move || pending_delete.get().is_some()>
                <ConfirmDialog
                    title="Delete maintenance"
                    message="This schedule entry will be permanently removed."
                    on_cancel=on_delete_cancel
                    on_confirm=on_delete_confirm
                />
            </Show>
        </AppShell>
    }
}
