//! Vehicle assignments shown as resolved rows (vehicle label + crew names).
//!
//! DESIGN
//! ======
//! Rows are joined client-side from three concurrent fetches, so any
//! mutation is merged by refetching all three rather than splicing.

#[cfg(test)]
#[path = "assignments_test.rs"]
mod assignments_test;

use leptos::prelude::*;
use listing::{MatchCase, Matcher};
use records::assignment::{AssignmentRow, VehicleAssignment};
use records::profile::{Position, UserProfile};
use records::vehicle::Vehicle;
use records::{RecordId, rest};

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::crud_modal::CrudModal;
use crate::components::form_field::{Choices, select_field};
use crate::components::list_status::ListStatus;
use crate::components::pagination::Pagination;
use crate::components::search_bar::SearchBar;
use crate::components::shell::AppShell;
use crate::forms::assignment::AssignmentForm;
use crate::pages::list_actions;
use crate::state::list::ListState;
use crate::state::modal::ModalState;

const PAGE_SIZE: usize = 10;

/// Case-sensitive search on the vehicle label.
pub fn matcher() -> Matcher<AssignmentRow> {
    Matcher::new(|row| row.vehicle.clone(), MatchCase::Sensitive)
}

/// Select choices for one crew slot, limited to personnel in `position`.
pub fn crew_choices(profiles: &[UserProfile], position: Position) -> Choices {
    profiles
        .iter()
        .filter(|p| p.position == position)
        .map(|p| (p.id.to_string(), p.full_name()))
        .collect()
}

#[derive(Clone, Copy)]
struct Sources {
    list: RwSignal<ListState<AssignmentRow>>,
    assignments: RwSignal<Vec<VehicleAssignment>>,
    vehicles: RwSignal<Vec<Vehicle>>,
    profiles: RwSignal<Vec<UserProfile>>,
}

impl Sources {
    fn refresh(self) {
        self.list.update(ListState::begin_fetch);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::net::api::fetch_all;
            let (assigned, vehicles, profiles) = futures::join!(
                fetch_all::<VehicleAssignment>(),
                fetch_all::<Vehicle>(),
                fetch_all::<UserProfile>(),
            );
            let vehicles = list_actions::or_empty("load vehicles", vehicles);
            let profiles = list_actions::or_empty("load personnel", profiles);
            let rows = match assigned {
                Ok(items) => {
                    let rows = records::assignment::resolve_rows(&items, &vehicles, &profiles);
                    self.assignments.set(items);
                    Ok(rows)
                }
                Err(e) => Err(e),
            };
            self.vehicles.set(vehicles);
            self.profiles.set(profiles);
            self.list.update(|l| l.apply_fetch("load assignments", rows));
        });
    }

    fn find(self, id: RecordId) -> Option<VehicleAssignment> {
        self.assignments.with_untracked(|items| items.iter().find(|a| a.id == id).cloned())
    }
}

#[component]
pub fn AssignmentsPage() -> impl IntoView {
    let sources = Sources {
        list: RwSignal::new(ListState::new(PAGE_SIZE)),
        assignments: RwSignal::new(Vec::new()),
        vehicles: RwSignal::new(Vec::new()),
        profiles: RwSignal::new(Vec::new()),
    };
    let list = sources.list;
    let modal = RwSignal::new(ModalState::<AssignmentForm>::default());
    let pending_delete = RwSignal::new(None::<RecordId>);
    sources.refresh();

    let matcher = matcher();
    let rows = move || list.with(|l| l.visible(&matcher));
    let controls = Signal::derive(move || list.with(|l| l.controls(&matcher)));

    let reload = Callback::new(move |()| sources.refresh());
    let on_saved = Callback::new(move |_: VehicleAssignment| sources.refresh());
    let on_search = Callback::new(move |term: String| list.update(|l| l.set_search(term)));
    let on_page = Callback::new(move |page: usize| list.update(|l| l.go_to(page)));
    let on_delete_cancel = Callback::new(move |()| pending_delete.set(None));
    let on_delete_confirm = Callback::new(move |()| {
        if let Some(id) = pending_delete.get_untracked() {
            list_actions::run_then_reload(
                list,
                rest::delete::<VehicleAssignment>(id),
                "delete assignment",
                reload,
            );
        }
        pending_delete.set(None);
    });

    view! {
        <AppShell title="Assignments">
            <section class="list-page">
                <div class="list-page__toolbar">
                    <SearchBar
                        value=Signal::derive(move || list.with(|l| l.query.search.clone()))
                        on_input=on_search
                        placeholder="Search vehicle"
                    />
                    <button class="btn btn--primary" on:click=move |_| modal.update(ModalState::open_create)>
                        "Assign Vehicle"
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
                            <th>"Crew"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            rows()
                                .into_iter()
                                .map(|row| {
                                    let id = row.id;
                                    let crew = row.crew_label();
                                    view! {
                                        <tr>
                                            <td>{row.vehicle}</td>
                                            <td>{crew}</td>
                                            <td class="record-table__actions">
                                                <button
                                                    class="btn"
                                                    on:click=move |_| {
                                                        if let Some(assignment) = sources.find(id) {
                                                            let profiles = sources.profiles.get_untracked();
                                                            modal.update(|m| {
                                                                m.open_edit(&assignment);
                                                                m.form.place_crew(&assignment.user_profile_ids, &profiles);
                                                            });
                                                        }
                                                    }
                                                >
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
                <CrudModal modal=modal noun="Assignment" on_saved=on_saved>
                    {select_field(
                        modal,
                        "Vehicle",
                        Some("Select a vehicle"),
                        move || sources.vehicles.with(|v| list_actions::vehicle_choices(v)),
                        |f| f.vehicle_id.clone(),
                        |f, v| f.vehicle_id = v,
                    )}
                    {select_field(
                        modal,
                        "Driver",
                        Some("No driver"),
                        move || sources.profiles.with(|p| crew_choices(p, Position::Driver)),
                        |f| f.crew[0].clone(),
                        |f, v| f.crew[0] = v,
                    )}
                    {select_field(
                        modal,
                        "PAO",
                        Some("No PAO"),
                        move || sources.profiles.with(|p| crew_choices(p, Position::Pao)),
                        |f| f.crew[1].clone(),
                        |f, v| f.crew[1] = v,
                    )}
                </CrudModal>
            </Show>
            <Show when=move || pending_delete.get().is_some()>
                <ConfirmDialog
                    title="Delete assignment"
                    message="The vehicle will be unassigned from its crew."
                    on_cancel=on_delete_cancel
                    on_confirm=on_delete_confirm
                />
            </Show>
        </AppShell>
    }
}
