use super::*;

#[test]
fn should_redirect_unauth_when_not_loading_and_token_missing() {
    let state = AuthState { token: None, loading: false };
    assert!(should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_while_loading() {
    let state = AuthState { token: None, loading: true };
    assert!(!should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_when_token_exists() {
    let state = AuthState { token: Some("t-1".to_owned()), loading: false };
    assert!(!should_redirect_unauth(&state));
}

#[test]
fn token_storage_is_empty_outside_browser() {
    store_token("t-1");
    assert_eq!(stored_token(), None);
    clear_token();
}
