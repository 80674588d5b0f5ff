//! Feed page, the authenticated landing route.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered only behind `RequireAuth`. Feed content itself is served by other
//! parts of the application; this page shows the signed-in identity and owns
//! the logout flow.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::errors::ErrorsState;
use crate::state::session::SessionState;

/// Protected feed view with a logout action.
///
/// Logout tears down the local session even when the gateway call fails; the
/// failure is still surfaced through the error store.
#[component]
pub fn FeedPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let errors = expect_context::<RwSignal<ErrorsState>>();
    let navigate = use_navigate();

    let username = move || session.get().user.map_or_else(String::new, |u| u.username);

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                if let Err(e) = crate::net::api::logout().await {
                    log::warn!("logout request failed: {e}");
                    crate::state::errors::push_error(errors, e);
                }
                session.update(SessionState::logout);
                navigate(
                    crate::util::guard::LOGIN_ROUTE,
                    leptos_router::NavigateOptions::default(),
                );
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (errors, &navigate);
    };

    view! {
        <div class="feed-page">
            <header class="feed-header">
                <span class="feed-header__user">{username}</span>
                <button class="feed-header__logout" on:click=on_logout>
                    "Log out"
                </button>
            </header>
            <main class="feed-body">
                <p>"Nothing in your feed yet."</p>
            </main>
        </div>
    }
}
