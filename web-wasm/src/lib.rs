//! Plot Tracker Web App (Leptos + WASM)

mod app;
mod api;
mod components;
mod map;
pub mod local_store;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::error_1(&format!("ロガー初期化失敗: {}", e).into());
    }
    log::info!("Plot Tracker を起動します");
    leptos::mount::mount_to_body(app::App);
}
