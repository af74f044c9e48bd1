//! Dataset overview dashboard, compiled to wasm and mounted into a server-rendered page.

pub mod app;
pub mod dashboards;
pub mod shared;

use wasm_bindgen::prelude::wasm_bindgen;

/// Set up logging and the panic hook, then mount the dashboard
#[wasm_bindgen]
pub fn init_overview() {
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    app::mount();
}

#[wasm_bindgen(start)]
pub fn start() {
    init_overview();
}
