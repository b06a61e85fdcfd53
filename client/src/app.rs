//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{
    assignments::AssignmentsPage, dashboard::DashboardPage, devices::DevicesPage, dispatch::DispatchPage,
    feedback::FeedbackPage, feedback_submit::FeedbackSubmitPage, fuel_logs::FuelLogsPage, login::LoginPage,
    maintenance::MaintenancePage, personnel::PersonnelPage, vehicles::VehiclesPage,
};
use crate::state::{auth::AuthState, ui::UiState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the auth and UI contexts and sets up client-side routing. The
/// stored token and theme are read once the app is running in the browser;
/// until then auth stays pending so guarded pages show a loading line
/// instead of redirecting.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::pending());
    let ui = RwSignal::new(UiState::default());
    provide_context(auth);
    provide_context(ui);

    Effect::new(move || {
        let theme = crate::util::theme::load();
        crate::util::theme::apply(theme);
        ui.update(|u| u.theme = theme);
        auth.update(|a| a.resolve(crate::util::auth::stored_token()));
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/fleetdesk.css"/>
        <Title text="Fleet Desk"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("") view=DashboardPage/>
                <Route path=StaticSegment("vehicles") view=VehiclesPage/>
                <Route path=StaticSegment("personnel") view=PersonnelPage/>
                <Route path=StaticSegment("assignments") view=AssignmentsPage/>
                <Route path=StaticSegment("maintenance") view=MaintenancePage/>
                <Route path=StaticSegment("fuel-logs") view=FuelLogsPage/>
                <Route path=StaticSegment("devices") view=DevicesPage/>
                <Route path=StaticSegment("dispatch") view=DispatchPage/>
                <Route path=StaticSegment("feedback") view=FeedbackPage/>
                <Route path=(StaticSegment("feedback"), StaticSegment("submit")) view=FeedbackSubmitPage/>
            </Routes>
        </Router>
    }
}
