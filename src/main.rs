//! Closet Frontend Entry Point

mod app;
mod commands;
mod components;
mod console;
mod context;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    console::init(log::LevelFilter::Debug);
    mount_to_body(App);
}
