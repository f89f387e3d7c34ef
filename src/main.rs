//! List Manager Frontend Entry Point

mod models;
mod state;
mod context;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Debug).expect("logger is installed once at startup");
    log::debug!("initialized logging");
    mount_to_body(App);
}
