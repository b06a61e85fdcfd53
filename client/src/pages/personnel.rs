//! Personnel profiles for drivers, PAOs and admins.

#[cfg(test)]
#[path = "personnel_test.rs"]
mod personnel_test;

use leptos::prelude::*;
use listing::{MatchCase, Matcher};
use records::RecordId;
use records::profile::{PersonnelStatus, Position, UserProfile};

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::crud_modal::CrudModal;
use crate::components::form_field::{choices, select_field, text_field};
use crate::components::list_status::ListStatus;
use crate::components::pagination::Pagination;
use crate::components::search_bar::{CategoryFilter, SearchBar};
use crate::components::shell::AppShell;
use crate::forms::profile::ProfileForm;
use crate::pages::list_actions;
use crate::state::list::ListState;
use crate::state::modal::ModalState;
use crate::util::time::{format_date, today};

const PAGE_SIZE: usize = 10;

/// Case-insensitive name search, position category.
pub fn matcher() -> Matcher<UserProfile> {
    Matcher::new(UserProfile::full_name, MatchCase::Insensitive).with_category(|p| p.position.as_str().to_owned())
}

/// Age column text; blank without a birth date.
pub fn age_cell(profile: &UserProfile, today: chrono::NaiveDate) -> String {
    profile.age_on(today).map(|age| age.to_string()).unwrap_or_default()
}

#[component]
pub fn PersonnelPage() -> impl IntoView {
    let list = RwSignal::new(ListState::<UserProfile>::new(PAGE_SIZE));
    let modal = RwSignal::new(ModalState::<ProfileForm>::default());
    let pending_delete = RwSignal::new(None::<RecordId>);
    list_actions::load(list, "load personnel");

    let matcher = matcher();
    let rows = move || list.with(|l| l.visible(&matcher));
    let controls = Signal::derive(move || list.with(|l| l.controls(&matcher)));

    let on_saved = Callback::new(move |profile: UserProfile| list.update(|l| l.upsert(profile)));
    let on_search = Callback::new(move |term: String| list.update(|l| l.set_search(term)));
    let on_category = Callback::new(move |category: Option<String>| list.update(|l| l.set_category(category)));
    let on_page = Callback::new(move |page: usize| list.update(|l| l.go_to(page)));
    let on_delete_cancel = Callback::new(move |()| pending_delete.set(None));
    let on_delete_confirm = Callback::new(move |()| {
        if let Some(id) = pending_delete.get_untracked() {
            list_actions::delete(list, id, "delete profile");
        }
        pending_delete.set(None);
    });

    let position_filter = Position::ALL.iter().map(|p| (p.as_str(), p.label())).collect::<Vec<_>>();

    view! {
        <AppShell title="Personnel">
            <section class="list-page">
                <div class="list-page__toolbar">
                    <SearchBar
                        value=Signal::derive(move || list.with(|l| l.query.search.clone()))
                        on_input=on_search
                        placeholder="Search name"
                    />
                    <CategoryFilter
                        options=position_filter.clone()
                        value=Signal::derive(move || list.with(|l| l.query.category.clone()))
                        on_change=on_category
                        all_label="All positions"
                    />
                    <button class="btn btn--primary" on:click=move |_| modal.update(ModalState::open_create)>
                        "Add Personnel"
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
                            <th>"Position"</th>
                            <th>"Contact"</th>
                            <th>"Age"</th>
                            <th>"License"</th>
                            <th>"Hired"</th>
                            <th>"Status"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let today = today();
                            rows()
                                .into_iter()
                                .map(|profile| {
                                    let id = profile.id;
                                    let age = age_cell(&profile, today);
                                    let name = profile.full_name();
                                    let hired = format_date(profile.date_hired);
                                    let license = profile.license_number.clone().unwrap_or_default();
                                    let edit = profile.clone();
                                    view! {
                                        <tr>
                                            <td>{name}</td>
                                            <td>{profile.position.label()}</td>
                                            <td>{profile.contact_number}</td>
                                            <td>{age}</td>
                                            <td>{license}</td>
                                            <td>{hired}</td>
                                            <td>{profile.status.label()}</td>
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
                <CrudModal modal=modal noun="Personnel" on_saved=on_saved>
                    {text_field(modal, "First name", "text", |f| f.first_name.clone(), |f, v| f.first_name = v)}
                    {text_field(modal, "Middle name", "text", |f| f.middle_name.clone(), |f, v| f.middle_name = v)}
                    {text_field(modal, "Last name", "text", |f| f.last_name.clone(), |f, v| f.last_name = v)}
                    {select_field(
                        modal,
                        "Position",
                        None,
                        || choices(&Position::ALL, Position::as_str, Position::label),
                        |f| f.position.clone(),
                        |f, v| f.position = v,
                    )}
                    {text_field(modal, "Contact number", "tel", |f| f.contact_number.clone(), |f, v| f.contact_number = v)}
                    {text_field(modal, "Address", "text", |f| f.address.clone(), |f, v| f.address = v)}
                    {text_field(modal, "Date of birth", "date", |f| f.date_of_birth.clone(), |f, v| f.date_of_birth = v)}
                    {text_field(modal, "License number", "text", |f| f.license_number.clone(), |f, v| f.license_number = v)}
                    {text_field(modal, "Date hired", "date", |f| f.date_hired.clone(), |f, v| f.date_hired = v)}
                    {select_field(
                        modal,
                        "Status",
                        None,
                        || choices(&PersonnelStatus::ALL, PersonnelStatus::as_str, PersonnelStatus::label),
                        |f| f.status.clone(),
                        |f, v| f.status = v,
                    )}
                </CrudModal>
            </Show>
            <Show when=move || pending_delete.get().is_some()>
                <ConfirmDialog
                    title="Delete personnel"
                    message="This profile will be permanently removed."
                    on_cancel=on_delete_cancel
                    on_confirm=on_delete_confirm
                />
            </Show>
        </AppShell>
    }
}
