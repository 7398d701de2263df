#![cfg(target_arch = "wasm32")]
use crate::core::SiteConfig;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use web_sys as web;

mod clipboard;
mod constants;
mod core;
mod dom;
mod events;
mod sidenav;

#[wasm_bindgen(js_name = openNav)]
pub fn open_nav() {
    if let Some(document) = dom::window_document() {
        sidenav::open(&document, &SiteConfig::default());
    }
}

#[wasm_bindgen(js_name = closeNav)]
pub fn close_nav() {
    if let Some(document) = dom::window_document() {
        sidenav::close(&document, &SiteConfig::default());
    }
}

#[wasm_bindgen(js_name = toggleNav)]
pub fn toggle_nav() {
    if let Some(document) = dom::window_document() {
        sidenav::toggle(&document, &SiteConfig::default());
    }
}

/// Add copy buttons to highlight blocks inserted after load. Blocks that
/// already have one are left alone.
#[wasm_bindgen(js_name = initCopyButtons)]
pub fn init_copy_buttons() -> usize {
    match dom::window_document() {
        Some(document) => events::wire_copy_buttons(&document, &SiteConfig::default()),
        None => 0,
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("site-ui starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let doc = document.clone();
    dom::on_ready(&document, move || wire_page(&doc));
    Ok(())
}

// Scroll listeners must only be attached once per page.
fn wire_page(document: &web::Document) {
    static WIRED: AtomicBool = AtomicBool::new(false);
    if WIRED.swap(true, Ordering::SeqCst) {
        return;
    }
    let config = SiteConfig::default();
    events::wire_copy_buttons(document, &config);
    events::wire_parallax(document, &config);
}
