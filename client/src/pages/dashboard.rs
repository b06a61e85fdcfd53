//! Dashboard landing page: fleet summary cards and insurance alerts.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. It fetches every collection it
//! summarises concurrently and assembles the counts once all have resolved;
//! a failed collection counts as empty and is named in a warning line.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::components::shell::AppShell;
use crate::state::dashboard::{DashboardState, DashboardSummary};

/// One summary card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatCard {
    pub label: &'static str,
    pub value: String,
    pub detail: String,
    pub href: &'static str,
}

/// Cards in display order.
pub fn stat_cards(summary: &DashboardSummary) -> Vec<StatCard> {
    vec![
        StatCard {
            label: "Vehicles",
            value: summary.vehicles_total.to_string(),
            detail: format!("{} active, {} in maintenance", summary.vehicles_active, summary.vehicles_in_maintenance),
            href: "/vehicles",
        },
        StatCard {
            label: "Personnel",
            value: (summary.drivers + summary.paos).to_string(),
            detail: format!("{} drivers, {} PAOs", summary.drivers, summary.paos),
            href: "/personnel",
        },
        StatCard {
            label: "Assignments",
            value: summary.assignments.to_string(),
            detail: format!("{} open dispatches", summary.open_dispatches),
            href: "/assignments",
        },
        StatCard {
            label: "Maintenance",
            value: summary.maintenance_pending.to_string(),
            detail: format!("pending, {} overdue", summary.maintenance_overdue),
            href: "/maintenance",
        },
        StatCard {
            label: "Devices",
            value: format!("{}/{}", summary.devices_online, summary.devices_total),
            detail: "online".to_owned(),
            href: "/devices",
        },
        StatCard {
            label: "Feedback",
            value: summary.average_rating_label(),
            detail: format!("from {} responses", summary.feedback_count),
            href: "/feedback",
        },
    ]
}

fn load(state: RwSignal<DashboardState>) {
    state.update(|s| s.loading = true);
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        use crate::net::api::fetch_all;
        use crate::state::dashboard::DashboardFetch;
        use records::assignment::VehicleAssignment;
        use records::device::Device;
        use records::dispatch::DispatchLog;
        use records::feedback::FeedbackLog;
        use records::maintenance::MaintenanceSchedule;
        use records::profile::UserProfile;
        use records::vehicle::Vehicle;

        let (vehicles, profiles, assignments, maintenance, devices, dispatches, feedback) = futures::join!(
            fetch_all::<Vehicle>(),
            fetch_all::<UserProfile>(),
            fetch_all::<VehicleAssignment>(),
            fetch_all::<MaintenanceSchedule>(),
            fetch_all::<Device>(),
            fetch_all::<DispatchLog>(),
            fetch_all::<FeedbackLog>(),
        );
        let fetch = DashboardFetch { vehicles, profiles, assignments, maintenance, devices, dispatches, feedback };
        let summary = DashboardSummary::assemble(fetch, crate::util::time::today(), crate::util::time::now());
        state.set(DashboardState { summary: Some(summary), loading: false });
    });
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let state = RwSignal::new(DashboardState::default());
    load(state);

    view! {
        <AppShell title="Dashboard">
            <section class="dashboard-page">
                <Show when=move || state.with(|s| s.loading)>
                    <p class="list-page__status">"Loading summary..."</p>
                </Show>
                {move || {
                    state
                        .with(|s| s.summary.clone())
                        .map(|summary| {
                            let failed = (!summary.failed.is_empty()).then(|| summary.failed.join(", "));
                            let alerts = summary.insurance_alerts.clone();
                            view! {
                                {failed
                                    .map(|names| {
                                        view! {
                                            <p class="banner banner--error">
                                                {format!("Could not load: {names}. Counts may be incomplete.")}
                                            </p>
                                        }
                                    })}
                                <div class="dashboard-page__cards">
                                    {stat_cards(&summary)
                                        .into_iter()
                                        .map(|card| {
                                            view! {
                                                <a class="stat-card" href=card.href>
                                                    <span class="stat-card__label">{card.label}</span>
                                                    <span class="stat-card__value">{card.value}</span>
                                                    <span class="stat-card__detail">{card.detail}</span>
                                                </a>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                                <h2 class="list-page__heading">"Insurance expiring within 30 days"</h2>
                                {if alerts.is_empty() {
                                    view! { <p class="list-page__status">"No policies due."</p> }.into_any()
                                } else {
                                    view! {
                                        <ul class="alert-list">
                                            {alerts
                                                .into_iter()
                                                .map(|alert| {
                                                    view! {
                                                        <li>{format!("{}: {}", alert.vehicle, alert.policies.join(", "))}</li>
                                                    }
                                                })
                                                .collect_view()}
                                        </ul>
                                    }
                                        .into_any()
                                }}
                            }
                        })
                }}
            </section>
        </AppShell>
    }
}
