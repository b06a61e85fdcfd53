//! Tracking devices and their last-reported connectivity.

#[cfg(test)]
#[path = "devices_test.rs"]
mod devices_test;

use leptos::prelude::*;
use listing::{MatchCase, Matcher};
use records::RecordId;
use records::device::{Connectivity, Device};
use records::vehicle::Vehicle;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::crud_modal::CrudModal;
use crate::components::form_field::{checkbox_field, select_field, text_field};
use crate::components::list_status::ListStatus;
use crate::components::pagination::Pagination;
use crate::components::search_bar::SearchBar;
use crate::components::shell::AppShell;
use crate::forms::device::DeviceForm;
use crate::pages::list_actions;
use crate::state::list::ListState;
use crate::state::modal::ModalState;
use crate::util::time::{format_instant, now};

const PAGE_SIZE: usize = 10;

/// Case-insensitive device name search.
pub fn matcher() -> Matcher<Device> {
    Matcher::new(|d| d.device_name.clone(), MatchCase::Insensitive)
}

/// Badge modifier class for a connectivity state.
pub fn connectivity_class(state: Connectivity) -> &'static str {
    match state {
        Connectivity::Online => "badge badge--ok",
        Connectivity::Offline => "badge badge--warn",
        Connectivity::NeverSeen | Connectivity::Disabled => "badge",
    }
}

#[component]
pub fn DevicesPage() -> impl IntoView {
    let list = RwSignal::new(ListState::<Device>::new(PAGE_SIZE));
    let vehicles = RwSignal::new(Vec::<Vehicle>::new());
    let modal = RwSignal::new(ModalState::<DeviceForm>::default());
    let pending_delete = RwSignal::new(None::<RecordId>);
    list_actions::load(list, "load devices");
    list_actions::load_into(vehicles, "load vehicles");

    let matcher = matcher();
    let rows = move || list.with(|l| l.visible(&matcher));
    let controls = Signal::derive(move || list.with(|l| l.controls(&matcher)));

    let on_saved = Callback::new(move |device: Device| list.update(|l| l.upsert(device)));
    let on_search = Callback::new(move |term: String| list.update(|l| l.set_search(term)));
    let on_page = Callback::new(move |page: usize| list.update(|l| l.go_to(page)));
    let on_delete_cancel = Callback::new(move |()| pending_delete.set(None));
    let on_delete_confirm = Callback::new(move |()| {
        if let Some(id) = pending_delete.get_untracked() {
            list_actions::delete(list, id, "delete device");
        }
        pending_delete.set(None);
    });

    view! {
        <AppShell title="Devices">
            <section class="list-page">
                <div class="list-page__toolbar">
                    <SearchBar
                        value=Signal::derive(move || list.with(|l| l.query.search.clone()))
                        on_input=on_search
                        placeholder="Search device name"
                    />
                    <button class="btn btn--primary" on:click=move |_| modal.update(ModalState::open_create)>
                        "Add Device"
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
                            <th>"Name"</th>
                            <th>"Serial"</th>
                            <th>"Vehicle"</th>
                            <th>"State"</th>
                            <th>"Last seen"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let now = now();
                            rows()
                                .into_iter()
                                .map(|device| {
                                    let id = device.id;
                                    let state = device.connectivity(now);
                                    let vehicle = device
                                        .vehicle_id
                                        .map(|vid| vehicles.with(|v| list_actions::vehicle_label(v, vid)))
                                        .unwrap_or_default();
                                    let seen = format_instant(device.last_seen);
                                    let edit = device.clone();
                                    view! {
                                        <tr>
                                            <td>{device.device_name}</td>
                                            <td>{device.serial_number}</td>
                                            <td>{vehicle}</td>
                                            <td>
                                                <span class=connectivity_class(state)>{state.label()}</span>
                                            </td>
                                            <td>{seen}</td>
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
                <CrudModal modal=modal noun="Device" on_saved=on_saved>
                    {text_field(modal, "Device name", "text", |f| f.device_name.clone(), |f, v| f.device_name = v)}
                    {text_field(modal, "Serial number", "text", |f| f.serial_number.clone(), |f, v| f.serial_number = v)}
                    {select_field(
                        modal,
                        "Installed on",
                        Some("Not installed"),
                        move || vehicles.with(|v| list_actions::vehicle_choices(v)),
                        |f| f.vehicle_id.clone(),
                        |f, v| f.vehicle_id = v,
                    )}
                    {checkbox_field(modal, "Active", |f| f.is_active, |f, v| f.is_active = v)}
                </CrudModal>
            </Show>
            <Show when=move || pending_delete.get().is_some()>
                <ConfirmDialog
                    title="Delete device"
                    message="This device will be permanently removed."
                    on_cancel=on_delete_cancel
                    on_confirm=on_delete_confirm
                />
            </Show>
        </AppShell>
    }
}
