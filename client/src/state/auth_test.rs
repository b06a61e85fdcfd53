use super::*;

#[test]
fn pending_state_is_loading_without_token() {
    let state = AuthState::pending();
    assert!(state.loading);
    assert!(!state.is_signed_in());
}

#[test]
fn resolve_with_token_signs_in() {
    let mut state = AuthState::pending();
    state.resolve(Some("tok".to_owned()));
    assert!(state.is_signed_in());
}

#[test]
fn resolve_without_token_stops_loading() {
    let mut state = AuthState::pending();
    state.resolve(None);
    assert!(!state.loading);
    assert!(!state.is_signed_in());
}

#[test]
fn sign_out_clears_token() {
    let mut state = AuthState { token: Some("tok".to_owned()), loading: false };
    state.sign_out();
    assert_eq!(state.token, None);
}
