//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::guard::{RequireAuth, RequireSalon};
use crate::config::ClientConfig;
use crate::net::gateway::BrowserGateway;
use crate::pages::{
    auth::AuthPage,
    dashboard::DashboardPage,
    oauth::OAuthCallbackPage,
    salon::{SalonHomePage, SalonSelectionPage},
};
use crate::state::salon::SalonSelection;
use crate::state::session::SessionStore;
use crate::util::auth::PendingRedirect;

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
/// Owns the session store, starts the one startup hydration and sets up
/// client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_build_env();
    let store = SessionStore::new(Arc::new(BrowserGateway::new(config.api_base_url.clone())));

    provide_context(config);
    provide_context(store.clone());
    provide_context(RwSignal::new(SalonSelection::default()));
    provide_context(RwSignal::new(PendingRedirect::default()));

    // No tracked reads: runs once, in the browser only.
    Effect::new(move || {
        #[cfg(feature = "hydrate")]
        {
            let store = store.clone();
            leptos::task::spawn_local(async move {
                store.hydrate().await;
            });
        }
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/aura-client.css"/>
        <Title text="Aura"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=AuthPage/>
                <Route path=StaticSegment("register") view=AuthPage/>
                <Route path=StaticSegment("recover") view=AuthPage/>
                <Route path=StaticSegment("recovery") view=AuthPage/>
                <Route path=(StaticSegment("oauth"), StaticSegment("success")) view=OAuthCallbackPage/>
                <Route path=(StaticSegment("oauth2"), StaticSegment("callback")) view=OAuthCallbackPage/>
                <Route
                    path=StaticSegment("")
                    view=|| view! { <RequireAuth><DashboardPage/></RequireAuth> }
                />
                <Route
                    path=StaticSegment("salons")
                    view=|| view! { <RequireAuth><SalonSelectionPage/></RequireAuth> }
                />
                <Route
                    path=StaticSegment("salon")
                    view=|| {
                        view! {
                            <RequireAuth>
                                <RequireSalon>
                                    <SalonHomePage/>
                                </RequireSalon>
                            </RequireAuth>
                        }
                    }
                />
            </Routes>
        </Router>
    }
}
