//! Transient gateway-error banner.

use leptos::prelude::*;

use crate::state::errors::ErrorsState;

/// Shows the current error while one is present; the error store dismisses it
/// automatically after its timeout.
#[component]
pub fn ErrorNotice() -> impl IntoView {
    let errors = expect_context::<RwSignal<ErrorsState>>();

    view! {
        <Show when=move || errors.get().error.is_some()>
            <p class="error-notice">
                {move || errors.get().error.map(|e| e.to_string()).unwrap_or_default()}
            </p>
        </Show>
    }
}
