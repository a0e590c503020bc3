//! Application Context
//!
//! Remote store handle, environment check and reload trigger shared via the
//! Leptos Context API.

use std::sync::Arc;

use leptos::prelude::*;

use closet_core::{EnvCheck, RemoteStore};

#[derive(Clone)]
pub struct AppContext {
    remote: Arc<dyn RemoteStore>,
    /// Which backend settings were present at build time
    pub env: EnvCheck,
    /// Why the backend could not be configured, if it could not
    pub config_error: Option<String>,
    /// Trigger to reload items from the store - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload items from the store - write
    set_reload_trigger: WriteSignal<u32>,
}

impl AppContext {
    pub fn new(
        remote: Arc<dyn RemoteStore>,
        env: EnvCheck,
        config_error: Option<String>,
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
    ) -> Self {
        Self {
            remote,
            env,
            config_error,
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
        }
    }

    pub fn remote(&self) -> &dyn RemoteStore {
        self.remote.as_ref()
    }

    pub fn public_url(&self, path: &str) -> String {
        self.remote.public_url(path)
    }

    /// Trigger a full fetch of the item list
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
