//! Dispatch board: start an alley for idle assignments and walk each log
//! through alley -> trip.
//!
//! SYSTEM CONTEXT
//! ==============
//! Dispatch logs change as crews report in from the terminal, so the board
//! refetches on a fixed interval while mounted in addition to refetching
//! after every transition.

#[cfg(test)]
#[path = "dispatch_test.rs"]
mod dispatch_test;

use leptos::prelude::*;
use listing::{MatchCase, Matcher};
use records::assignment::AssignmentRow;
use records::dispatch::{self, DispatchAction, DispatchLog, DispatchPhase, DispatchRow, dispatch_rows};
use records::{RecordId, rest};

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::list_status::ListStatus;
use crate::components::pagination::Pagination;
use crate::components::search_bar::{CategoryFilter, SearchBar};
use crate::components::shell::AppShell;
use crate::pages::list_actions;
use crate::state::list::ListState;
use crate::util::time::format_instant;

const PAGE_SIZE: usize = 10;

#[cfg(feature = "hydrate")]
const POLL_INTERVAL: std::time::Duration = std::time::Duration::from_secs(15);

const PHASES: [DispatchPhase; 4] =
    [DispatchPhase::InAlley, DispatchPhase::Queued, DispatchPhase::OnTrip, DispatchPhase::Completed];

/// Case-insensitive vehicle search, phase category.
pub fn matcher() -> Matcher<DispatchRow> {
    Matcher::new(|row: &DispatchRow| row.vehicle.clone(), MatchCase::Insensitive)
        .with_category(|row| row.phase.to_owned())
}

/// Assignments that can start a new alley (no unfinished log).
pub fn idle_assignments(assignments: &[AssignmentRow], logs: &[DispatchLog]) -> Vec<AssignmentRow> {
    assignments.iter().filter(|a| dispatch::open_log_for(logs, a.id).is_none()).cloned().collect()
}

#[derive(Clone, Copy)]
struct Board {
    list: RwSignal<ListState<DispatchRow>>,
    logs: RwSignal<Vec<DispatchLog>>,
    assignments: RwSignal<Vec<AssignmentRow>>,
}

impl Board {
    fn refresh(self, show_loading: bool) {
        if show_loading {
            self.list.update(ListState::begin_fetch);
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::net::api::fetch_all;
            use records::assignment::{VehicleAssignment, resolve_rows};
            use records::profile::UserProfile;
            use records::vehicle::Vehicle;

            let (logs, assigned, vehicles, profiles) = futures::join!(
                fetch_all::<DispatchLog>(),
                fetch_all::<VehicleAssignment>(),
                fetch_all::<Vehicle>(),
                fetch_all::<UserProfile>(),
            );
            let assigned = list_actions::or_empty("load assignments", assigned);
            let vehicles = list_actions::or_empty("load vehicles", vehicles);
            let profiles = list_actions::or_empty("load personnel", profiles);
            let assignment_rows = resolve_rows(&assigned, &vehicles, &profiles);
            let rows = match logs {
                Ok(logs) => {
                    let rows = dispatch_rows(&logs, &assignment_rows);
                    self.logs.set(logs);
                    Ok(rows)
                }
                Err(e) => Err(e),
            };
            self.assignments.set(assignment_rows);
            self.list.update(|l| l.apply_fetch("load dispatch logs", rows));
        });
    }
}

#[component]
pub fn DispatchPage() -> impl IntoView {
    let board = Board {
        list: RwSignal::new(ListState::new(PAGE_SIZE)),
        logs: RwSignal::new(Vec::new()),
        assignments: RwSignal::new(Vec::new()),
    };
    let list = board.list;
    let pending_delete = RwSignal::new(None::<RecordId>);
    board.refresh(true);

    #[cfg(feature = "hydrate")]
    {
        let poll_alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let poll_alive_task = poll_alive.clone();
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(POLL_INTERVAL).await;
                if !poll_alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                board.refresh(false);
            }
        });
        on_cleanup(move || poll_alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    let matcher = matcher();
    let rows = move || list.with(|l| l.visible(&matcher));
    let controls = Signal::derive(move || list.with(|l| l.controls(&matcher)));
    let idle = move || board.assignments.with(|a| board.logs.with(|logs| idle_assignments(a, logs)));

    let reload = Callback::new(move |()| board.refresh(false));
    let on_search = Callback::new(move |term: String| list.update(|l| l.set_search(term)));
    let on_category = Callback::new(move |category: Option<String>| list.update(|l| l.set_category(category)));
    let on_page = Callback::new(move |page: usize| list.update(|l| l.go_to(page)));
    let on_start_alley = move |assignment_id: RecordId| match dispatch::start_alley(assignment_id) {
        Ok(request) => list_actions::run_then_reload(list, request, "start alley", reload),
        Err(e) => {
            log::warn!("start alley payload failed to encode: {e}");
            list.update(|l| l.error = Some(crate::net::api::ApiError::from(e).banner().to_owned()));
        }
    };
    let on_action = move |action: DispatchAction, log_id: RecordId| {
        list_actions::run_then_reload(list, action.request(log_id), "dispatch transition", reload);
    };
    let on_delete_cancel = Callback::new(move |()| pending_delete.set(None));
    let on_delete_confirm = Callback::new(move |()| {
        if let Some(id) = pending_delete.get_untracked() {
            list_actions::run_then_reload(list, rest::delete::<DispatchLog>(id), "delete dispatch log", reload);
        }
        pending_delete.set(None);
    });

    view! {
        <AppShell title="Dispatch">
            <section class="list-page">
                <h2 class="list-page__heading">"Ready to dispatch"</h2>
                <div class="dispatch-idle">
                    {move || {
                        let idle = idle();
                        if idle.is_empty() {
                            return view! { <p class="list-page__status">"Every assignment has an open dispatch."</p> }
                                .into_any();
                        }
                        idle.into_iter()
                            .map(|assignment| {
                                let id = assignment.id;
                                let crew = assignment.crew_label();
                                view! {
                                    <div class="dispatch-idle__item">
                                        <span class="dispatch-idle__vehicle">{assignment.vehicle}</span>
                                        <span class="dispatch-idle__crew">{crew}</span>
                                        <button class="btn btn--primary" on:click=move |_| on_start_alley(id)>
                                            "Start alley"
                                        </button>
                                    </div>
                                }
                            })
                            .collect_view()
                            .into_any()
                    }}
                </div>

                <h2 class="list-page__heading">"Dispatch logs"</h2>
                <div class="list-page__toolbar">
                    <SearchBar
                        value=Signal::derive(move || list.with(|l| l.query.search.clone()))
                        on_input=on_search
                        placeholder="Search vehicle"
                    />
                    <CategoryFilter
                        options=PHASES.iter().map(|p| (p.label(), p.label())).collect()
                        value=Signal::derive(move || list.with(|l| l.query.category.clone()))
                        on_change=on_category
                        all_label="All phases"
                    />
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
                            <th>"Phase"</th>
                            <th>"Alley start"</th>
                            <th>"Alley end"</th>
                            <th>"Trip start"</th>
                            <th>"Trip end"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            rows()
                                .into_iter()
                                .map(|row| {
                                    let id = row.log.id;
                                    let phase = row.log.phase();
                                    view! {
                                        <tr>
                                            <td>{row.vehicle}</td>
                                            <td>{phase.label()}</td>
                                            <td>{format_instant(row.log.alley_start)}</td>
                                            <td>{format_instant(row.log.alley_end)}</td>
                                            <td>{format_instant(row.log.trip_start)}</td>
                                            <td>{format_instant(row.log.trip_end)}</td>
                                            <td class="record-table__actions">
                                                {phase
                                                    .next_action()
                                                    .map(|action| {
                                                        view! {
                                                            <button class="btn btn--primary" on:click=move |_| on_action(action, id)>
                                                                {action.label()}
                                                            </button>
                                                        }
                                                    })}
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
            <Show when=move || pending_delete.get().is_some()>
                <ConfirmDialog
                    title="Delete dispatch log"
                    message="This dispatch record will be permanently removed."
                    on_cancel=on_delete_cancel
                    on_confirm=on_delete_confirm
                />
            </Show>
        </AppShell>
    }
}
