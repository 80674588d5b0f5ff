//! Route guard wrapping protected pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Re-evaluates on every session-store change, not just on mount: logging out
//! while viewing a protected page retroactively redirects to `/login`.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::session::SessionState;
use crate::util::guard::{GuardOutcome, LOGIN_ROUTE, NavigationIntent, evaluate};

/// Renders `children` only while the session is established; otherwise
/// replaces the current history entry with the login route, recording the
/// requested location as the pending navigation intent.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let intent = expect_context::<RwSignal<Option<NavigationIntent>>>();
    let location = use_location();
    let navigate = use_navigate();

    Effect::new(move || {
        let requested = location.pathname.get();
        match evaluate(&session.get(), &requested) {
            GuardOutcome::Admitted => {}
            GuardOutcome::Redirected(from) => {
                intent.set(Some(from));
                navigate(
                    LOGIN_ROUTE,
                    NavigateOptions {
                        replace: true,
                        ..Default::default()
                    },
                );
            }
        }
    });

    view! {
        <Show when=move || session.get().is_logged_in()>
            {children()}
        </Show>
    }
}
