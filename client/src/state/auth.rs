//! Auth-session state for the signed-in administrator.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and the shell header to coordinate login redirects.
//! The token itself is persisted by `util::auth`; this mirrors it reactively.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

/// Bearer token plus whether storage has been read yet.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub token: Option<String>,
    pub loading: bool,
}

impl AuthState {
    /// Initial state before the browser has reported a stored token.
    pub fn pending() -> Self {
        Self { token: None, loading: true }
    }

    /// Resolve the pending state from whatever storage returned.
    pub fn resolve(&mut self, token: Option<String>) {
        self.token = token;
        self.loading = false;
    }

    pub fn sign_out(&mut self) {
        self.token = None;
        self.loading = false;
    }

    pub fn is_signed_in(&self) -> bool {
        !self.loading && self.token.is_some()
    }
}
