//! Page chrome state shared through context: theme and the mobile nav drawer.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::util::theme::Theme;

#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub theme: Theme,
    /// Sidebar drawer visibility on narrow screens.
    pub nav_open: bool,
}

impl UiState {
    /// Flip the theme and return the new one for persisting.
    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.theme
    }

    pub fn toggle_nav(&mut self) {
        self.nav_open = !self.nav_open;
    }

    /// Navigating closes the drawer.
    pub fn close_nav(&mut self) {
        self.nav_open = false;
    }
}
