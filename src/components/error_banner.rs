//! Error Banner Component

use leptos::prelude::*;

use crate::store::{store_dismiss_error, use_app_store, AppStateStoreFields};

/// Shows the last failure until dismissed or the next action succeeds
#[component]
pub fn ErrorBanner() -> impl IntoView {
    let store = use_app_store();
    let message = move || store.closet().read().error().map(str::to_string);

    view! {
        {move || message().map(|msg| view! {
            <div class="error-banner" role="alert">
                <span>{msg}</span>
                <button type="button" class="cancel-btn" on:click=move |_| store_dismiss_error(&store)>
                    "✗"
                </button>
            </div>
        })}
    }
}
