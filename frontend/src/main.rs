use leptos::*;
use sekolah_frontend::{config, App};
use wasm_bindgen_futures::spawn_local;

fn main() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    if let Err(err) = console_log::init_with_level(level) {
        web_sys::console::error_1(&format!("logger init failed: {}", err).into());
    }
    log::info!("starting Sekolah admin frontend");

    spawn_local(async move {
        config::init().await;
        mount_to_body(App);
    });
}
