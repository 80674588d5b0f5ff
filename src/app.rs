//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::error_notice::ErrorNotice;
use crate::components::require_auth::RequireAuth;
use crate::pages::{feed::FeedPage, login::LoginPage, register::RegisterPage};
use crate::state::errors::ErrorsState;
use crate::state::session::SessionState;
use crate::util::guard::NavigationIntent;

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
/// Provides the session, error, and navigation-intent stores as contexts and
/// sets up client-side routing: `/login` and `/register` are public, the feed
/// at `/` sits behind [`RequireAuth`].
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    let errors = RwSignal::new(ErrorsState::default());
    let intent = RwSignal::new(None::<NavigationIntent>);

    provide_context(session);
    provide_context(errors);
    provide_context(intent);

    view! {
        <Stylesheet id="leptos" href="/pkg/feed-client.css"/>
        <Title text="Feed"/>

        <Router>
            <ErrorNotice/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route
                    path=StaticSegment("")
                    view=|| view! { <RequireAuth><FeedPage/></RequireAuth> }
                />
            </Routes>
        </Router>
    }
}
