//! Passenger feedback review: phone search, four per page, detail view.

#[cfg(test)]
#[path = "feedback_test.rs"]
mod feedback_test;

use leptos::prelude::*;
use listing::{MatchCase, Matcher};
use records::RecordId;
use records::feedback::FeedbackLog;
use records::vehicle::Vehicle;

use crate::components::list_status::ListStatus;
use crate::components::pagination::Pagination;
use crate::components::search_bar::SearchBar;
use crate::components::shell::AppShell;
use crate::pages::list_actions;
use crate::state::list::ListState;
use crate::util::time::format_instant;

const PAGE_SIZE: usize = 4;

/// Case-sensitive phone number search.
pub fn matcher() -> Matcher<FeedbackLog> {
    Matcher::new(|f| f.phone_number.clone(), MatchCase::Sensitive)
}

/// First line of a comment, shortened for the table.
pub fn comment_preview(comment: &str, max_chars: usize) -> String {
    let line = comment.lines().next().unwrap_or_default().trim();
    if line.chars().count() <= max_chars {
        return line.to_owned();
    }
    let cut: String = line.chars().take(max_chars).collect();
    format!("{}…", cut.trim_end())
}

#[component]
pub fn FeedbackPage() -> impl IntoView {
    let list = RwSignal::new(ListState::<FeedbackLog>::new(PAGE_SIZE));
    let vehicles = RwSignal::new(Vec::<Vehicle>::new());
    let detail = RwSignal::new(None::<FeedbackLog>);
    list_actions::load(list, "load feedback");
    list_actions::load_into(vehicles, "load vehicles");

    let matcher = matcher();
    let rows = move || list.with(|l| l.visible(&matcher));
    let controls = Signal::derive(move || list.with(|l| l.controls(&matcher)));

    let on_search = Callback::new(move |term: String| list.update(|l| l.set_search(term)));
    let on_page = Callback::new(move |page: usize| list.update(|l| l.go_to(page)));
    let open_detail = move |id: RecordId| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let request = records::rest::get::<FeedbackLog>(id);
            match crate::net::api::fetch::<FeedbackLog>(request).await {
                Ok(record) => detail.set(Some(record)),
                Err(e) => {
                    let banner = crate::net::api::report("load feedback detail", &e);
                    list.update(|l| l.error = Some(banner));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    };

    view! {
        <AppShell title="Feedback">
            <section class="list-page">
                <div class="list-page__toolbar">
                    <SearchBar
                        value=Signal::derive(move || list.with(|l| l.query.search.clone()))
                        on_input=on_search
                        placeholder="Search phone number"
                    />
                    <a class="btn" href="/feedback/submit">
                        "Public form"
                    </a>
                </div>
                <ListStatus
                    loading=Signal::derive(move || list.with(|l| l.loading))
                    error=Signal::derive(move || list.with(|l| l.error.clone()))
                    empty=Signal::derive(move || rows().is_empty())
                />
                <table class="record-table">
                    <thead>
                        <tr>
                            <th>"Phone"</th>
                            <th>"Vehicle"</th>
                            <th>"Rating"</th>
                            <th>"Comment"</th>
                            <th>"Received"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            rows()
                                .into_iter()
                                .map(|entry| {
                                    let id = entry.id;
                                    let vehicle = vehicles.with(|v| list_actions::vehicle_label(v, entry.vehicle_id));
                                    let stars = entry.stars();
                                    let preview = comment_preview(&entry.comment, 60);
                                    view! {
                                        <tr>
                                            <td>{entry.phone_number}</td>
                                            <td>{vehicle}</td>
                                            <td class="record-table__stars">{stars}</td>
                                            <td>{preview}</td>
                                            <td>{format_instant(entry.created_at)}</td>
                                            <td class="record-table__actions">
                                                <button class="btn" on:click=move |_| open_detail(id)>
                                                    "View"
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
            <Show when=move || detail.with(Option::is_some)>
                <div class="dialog-backdrop" on:click=move |_| detail.set(None)>
                    <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                        {move || {
                            detail
                                .get()
                                .map(|entry| {
                                    let vehicle = vehicles.with(|v| list_actions::vehicle_label(v, entry.vehicle_id));
                                    let stars = entry.stars();
                                    view! {
                                        <h2>{format!("Feedback #{}", entry.id)}</h2>
                                        <dl class="detail-list">
                                            <dt>"Phone"</dt>
                                            <dd>{entry.phone_number}</dd>
                                            <dt>"Vehicle"</dt>
                                            <dd>{vehicle}</dd>
                                            <dt>"Rating"</dt>
                                            <dd>{stars}</dd>
                                            <dt>"Received"</dt>
                                            <dd>{format_instant(entry.created_at)}</dd>
                                            <dt>"Comment"</dt>
                                            <dd class="detail-list__comment">{entry.comment}</dd>
                                        </dl>
                                    }
                                })
                        }}
                        <div class="dialog__actions">
                            <button class="btn" on:click=move |_| detail.set(None)>
                                "Close"
                            </button>
                        </div>
                    </div>
                </div>
            </Show>
        </AppShell>
    }
}
