//! Shared auth UI helpers and bearer-token storage.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components apply identical unauthenticated redirect behavior. The
//! token lives in `localStorage` so it survives reloads; the transport in
//! `net::api` reads it for every request.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;

#[cfg(feature = "hydrate")]
const TOKEN_KEY: &str = "fleetdesk_token";

/// `true` once the stored token has been read and none was found.
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && state.token.is_none()
}

/// Redirect to `/login` whenever auth has loaded and no token is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let navigate = navigate.clone();
    Effect::new(move || {
        if should_redirect_unauth(&auth.get()) {
            navigate("/login", NavigateOptions::default());
        }
    });
}

/// Read the bearer token saved at login, if any.
pub fn stored_token() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window()?.local_storage().ok()??;
        storage.get_item(TOKEN_KEY).ok()?.filter(|t| !t.is_empty())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist the bearer token returned by `/auth/login`.
pub fn store_token(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(Ok(Some(storage))) = web_sys::window().map(|w| w.local_storage()) {
            let _ = storage.set_item(TOKEN_KEY, token);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}

/// Forget the stored token (logout or rejected session).
pub fn clear_token() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(Ok(Some(storage))) = web_sys::window().map(|w| w.local_storage()) {
            let _ = storage.remove_item(TOKEN_KEY);
        }
    }
}
