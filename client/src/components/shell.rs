//! Authenticated page chrome: sidebar navigation, header and route guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every admin page renders inside `AppShell`, which redirects to `/login`
//! once auth has loaded without a token and otherwise shows the page body.

#[cfg(test)]
#[path = "shell_test.rs"]
mod shell_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::state::ui::UiState;
use crate::util::auth::{clear_token, install_unauth_redirect};

/// Sidebar entries in display order.
pub const NAV_LINKS: [(&str, &str); 9] = [
    ("/", "Dashboard"),
    ("/vehicles", "Vehicles"),
    ("/personnel", "Personnel"),
    ("/assignments", "Assignments"),
    ("/maintenance", "Maintenance"),
    ("/fuel-logs", "Fuel Logs"),
    ("/devices", "Devices"),
    ("/dispatch", "Dispatch"),
    ("/feedback", "Feedback"),
];

/// Whether `href` is the sidebar entry for `path`.
pub fn is_active_link(href: &str, path: &str) -> bool {
    if href == "/" { path == "/" } else { path == href || path.starts_with(&format!("{href}/")) }
}

#[component]
pub fn AppShell(title: &'static str, children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    install_unauth_redirect(auth, use_navigate());
    let pathname = leptos_router::hooks::use_location().pathname;

    let on_logout = move |_| {
        clear_token();
        auth.update(AuthState::sign_out);
    };

    view! {
        <Show
            when=move || auth.get().is_signed_in()
            fallback=move || {
                view! {
                    <div class="shell shell--loading">
                        <p>{move || if auth.get().loading { "Loading..." } else { "Redirecting to login..." }}</p>
                    </div>
                }
            }
        >
            <div class="shell" class:shell--nav-open=move || ui.get().nav_open>
                <nav class="shell__nav">
                    <span class="shell__brand">"Fleet Desk"</span>
                    {NAV_LINKS
                        .iter()
                        .map(|(href, label)| {
                            let href = *href;
                            view! {
                                <a
                                    href=href
                                    class="shell__link"
                                    class:shell__link--active=move || is_active_link(href, &pathname.get())
                                    on:click=move |_| ui.update(UiState::close_nav)
                                >
                                    {*label}
                                </a>
                            }
                        })
                        .collect_view()}
                </nav>
                <div class="shell__main">
                    <header class="shell__header toolbar">
                        <button
                            class="btn toolbar__menu"
                            title="Menu"
                            on:click=move |_| ui.update(UiState::toggle_nav)
                        >
                            "☰"
                        </button>
                        <span class="toolbar__title">{title}</span>
                        <span class="toolbar__spacer"></span>
                        <button
                            class="btn toolbar__dark-toggle"
                            on:click=move |_| {
                                if let Some(theme) = ui.try_update(UiState::toggle_theme) {
                                    crate::util::theme::save(theme);
                                }
                            }
                            title="Toggle dark mode"
                        >
                            {move || ui.with(|u| u.theme.toggle_icon())}
                        </button>
                        <button class="btn toolbar__logout" on:click=on_logout title="Logout">
                            "Logout"
                        </button>
                    </header>
                    <main class="shell__content">{children()}</main>
                </div>
            </div>
        </Show>
    }
}
