//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::auth_gate::AuthGate;
use crate::pages::admin_home::AdminHomePage;
use crate::util::config::GateConfig;
use crate::util::unauthorized::UnauthorizedSignal;

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
/// Provides the gate configuration and the unauthorized hub. Each route view
/// is wrapped in `AuthGate`; the route table itself stays outside the gate so
/// SSR route discovery can see it.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = GateConfig::load();
    provide_context(UnauthorizedSignal::for_event(config.unauthorized_event.clone()));
    provide_context(config);

    view! {
        <Stylesheet id="leptos" href="/pkg/abv-admin-gate.css"/>
        <Title text="Admin Console"/>

        <Router>
            <Routes fallback=|| view! { <AuthGate>"Page not found."</AuthGate> }>
                <Route path=StaticSegment("") view=GatedAdminHome/>
            </Routes>
        </Router>
    }
}

#[component]
fn GatedAdminHome() -> impl IntoView {
    view! {
        <AuthGate>
            <AdminHomePage/>
        </AuthGate>
    }
}
