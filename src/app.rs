//! Closet Frontend App
//!
//! Wires the remote store from build-time settings and lays out the page.

use std::sync::Arc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use closet_core::{ClosetConfig, DeleteMode, EnvCheck, InMemoryStore, RemoteStore, SupabaseStore};

use crate::commands;
use crate::components::{ClosetHeader, ErrorBanner, FilterBar, ItemEditor, ItemGrid};
use crate::context::AppContext;
use crate::store::AppState;

/// Backend settings baked in at build time. A wasm bundle has no process
/// environment to read at runtime.
fn build_env(name: &str) -> Option<String> {
    let value = match name {
        "SUPABASE_URL" => option_env!("SUPABASE_URL"),
        "NEXT_PUBLIC_SUPABASE_URL" => option_env!("NEXT_PUBLIC_SUPABASE_URL"),
        "SUPABASE_ANON_KEY" => option_env!("SUPABASE_ANON_KEY"),
        "NEXT_PUBLIC_SUPABASE_ANON_KEY" => option_env!("NEXT_PUBLIC_SUPABASE_ANON_KEY"),
        "CLOSET_TABLE" => option_env!("CLOSET_TABLE"),
        "CLOSET_BUCKET" => option_env!("CLOSET_BUCKET"),
        "CLOSET_DELETE_MODE" => option_env!("CLOSET_DELETE_MODE"),
        _ => None,
    };
    value.filter(|v| !v.trim().is_empty()).map(str::to_string)
}

/// Pick the remote store. Without backend settings the page still works
/// against an in-memory store, with the problem shown in the header.
fn connect() -> (Arc<dyn RemoteStore>, DeleteMode, Option<String>) {
    match ClosetConfig::from_lookup(build_env) {
        Ok(config) => {
            log::info!("using remote store at {}", config.store.url);
            let remote: Arc<dyn RemoteStore> = Arc::new(SupabaseStore::new(&config.store));
            (remote, config.delete_mode, None)
        }
        Err(err) => {
            log::error!("{}; falling back to an in-memory store", err);
            let remote: Arc<dyn RemoteStore> = Arc::new(InMemoryStore::new());
            (remote, DeleteMode::default(), Some(err.to_string()))
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    let (remote, delete_mode, config_error) = connect();
    let env = EnvCheck::from_lookup(build_env);
    let (reload_trigger, set_reload_trigger) = signal(0u32);

    let store = Store::new(AppState::new(delete_mode));
    let ctx = AppContext::new(remote, env, config_error, (reload_trigger, set_reload_trigger));

    // Provide context to all children
    provide_context(store);
    provide_context(ctx.clone());

    // Load items on mount and whenever a reload is requested
    Effect::new(move |_| {
        let trigger = reload_trigger.get();
        log::debug!("loading items, trigger={}", trigger);
        let ctx = ctx.clone();
        spawn_local(async move {
            commands::load_items(&ctx, store).await;
        });
    });

    view! {
        <main class="closet">
            <ClosetHeader />
            <ErrorBanner />
            <ItemEditor />
            <FilterBar />
            <ItemGrid />
        </main>
    }
}
