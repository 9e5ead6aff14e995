// Domain logic compiles on every target so it can be unit tested natively;
// only the browser layer is gated to wasm32. A native non-test build has no
// caller for the core, test builds still report dead code.
#[cfg(target_arch = "wasm32")]
mod app;
#[path = "lib/mod.rs"]
#[cfg_attr(all(not(target_arch = "wasm32"), not(test)), allow(dead_code))]
mod app_lib;
#[cfg(target_arch = "wasm32")]
mod components;
#[cfg_attr(all(not(target_arch = "wasm32"), not(test)), allow(dead_code))]
mod features;
#[cfg(target_arch = "wasm32")]
mod routes;

#[cfg(target_arch = "wasm32")]
use crate::app::App;
#[cfg(target_arch = "wasm32")]
use leptos::prelude::mount_to_body;

#[cfg(target_arch = "wasm32")]
pub fn main() {
    console_error_panic_hook::set_once();

    let config = app_lib::config::AppConfig::load();
    if let Err(err) = app_lib::logging::init(config.log_level) {
        web_sys::console::error_1(&format!("Failed to initialize logging: {err}").into());
    }

    mount_to_body(App);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn main() {}
