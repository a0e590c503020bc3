//! Closet Header Component
//!
//! Title with item count, backend settings check, sort select and the
//! add-form toggle.

use leptos::prelude::*;

use closet_core::SortMode;

use crate::context::use_app_context;
use crate::store::{store_set_sort, use_app_store, AppStateStoreFields};

#[component]
pub fn ClosetHeader() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let env_line = ctx.env.describe();
    let env_class = if ctx.env.is_ok() { "env-check ok" } else { "env-check missing" };
    let config_error = ctx.config_error.clone();

    let count = move || store.closet().read().len();
    let current_sort = move || store.closet().read().filter.sort;
    let form_open = move || store.closet().read().form.open;

    view! {
        <header class="closet-header">
            <div class="title-row">
                <h1>"Closet" <sup class="item-count">{count}</sup></h1>
                <span class=env_class>{env_line}</span>
            </div>
            {config_error.map(|msg| view! { <p class="config-error">{msg}</p> })}
            <div class="header-actions">
                <select
                    class="sort-select"
                    on:change=move |ev| store_set_sort(&store, &event_target_value(&ev))
                >
                    {SortMode::ALL.iter().map(|mode| {
                        let mode = *mode;
                        view! {
                            <option value=mode.as_str() selected=move || current_sort() == mode>
                                {mode.label()}
                            </option>
                        }
                    }).collect_view()}
                </select>
                <button
                    type="button"
                    class=move || if form_open() { "add-toggle active" } else { "add-toggle" }
                    on:click=move |_| store.closet().write().form.toggle_open()
                >
                    {move || if form_open() { "Kapat" } else { "+ Ekle" }}
                </button>
            </div>
            <Show when=move || store.closet().read().is_loading()>
                <p class="loading">"Yükleniyor…"</p>
            </Show>
        </header>
    }
}
