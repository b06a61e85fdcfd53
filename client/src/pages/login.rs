//! Admin sign-in with username and password.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use records::auth::Credentials;

use crate::net::api::ApiError;
use crate::state::auth::AuthState;

/// Trim the username and require both fields.
pub fn validate_credentials(username: &str, password: &str) -> Result<Credentials, &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err("Enter both username and password.");
    }
    Ok(Credentials { username: username.to_owned(), password: password.to_owned() })
}

/// A rejected login is a credentials problem, not an expired session.
pub fn login_error_message(err: &ApiError) -> &'static str {
    if err.is_unauthorized() { "Invalid username or password." } else { err.banner() }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    Effect::new(move || {
        if auth.get().is_signed_in() {
            navigate("/", NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let credentials = match validate_credentials(&username.get(), &password.get()) {
            Ok(credentials) => credentials,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        let request = match records::auth::login(&credentials) {
            Ok(request) => request,
            Err(e) => {
                info.set(login_error_message(&ApiError::from(e)).to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch::<records::auth::LoginResponse>(request).await {
                Ok(response) => {
                    crate::util::auth::store_token(&response.token);
                    info.set(String::new());
                    auth.update(|a| a.resolve(Some(response.token)));
                }
                Err(e) => {
                    log::warn!("login failed: {e}");
                    info.set(login_error_message(&e).to_owned());
                }
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Fleet Desk"</h1>
                <p class="login-card__subtitle">"Administrator sign in"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        autocomplete="username"
                        placeholder="Username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        autocomplete="current-password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign in"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <div class="login-divider"></div>
                <a href="/feedback/submit" class="login-card__link">
                    "Passenger? Leave feedback"
                </a>
            </div>
        </div>
    }
}
