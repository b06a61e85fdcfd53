use super::*;

#[test]
fn starts_light_with_nav_closed() {
    let state = UiState::default();
    assert_eq!(state.theme, Theme::Light);
    assert!(!state.nav_open);
}

#[test]
fn toggle_theme_returns_new_theme() {
    let mut state = UiState::default();
    assert_eq!(state.toggle_theme(), Theme::Dark);
    assert_eq!(state.theme, Theme::Dark);
    assert_eq!(state.toggle_theme(), Theme::Light);
}

#[test]
fn nav_drawer_toggles_and_closes() {
    let mut state = UiState::default();
    state.toggle_nav();
    assert!(state.nav_open);
    state.close_nav();
    assert!(!state.nav_open);
}
