use crate::core::parallax;
use crate::core::SiteConfig;
use crate::dom;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
fn scroll_top() -> f64 {
    web::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

// Speed is re-read every time so templates can change it at runtime.
fn reposition(el: &web::HtmlElement, config: &SiteConfig) {
    let raw_speed = el.get_attribute(config.parallax_speed_attr);
    if let Err(e) = parallax::apply(el, scroll_top(), raw_speed.as_deref(), config) {
        log::debug!("[parallax] element skipped: {}", e);
    }
}

/// Attach a window scroll listener to every parallax element. Returns how many
/// elements were wired.
pub fn wire_parallax(document: &web::Document, config: &SiteConfig) -> usize {
    let Some(window) = web::window() else {
        return 0;
    };
    let elements = dom::html_elements_matching(document, config.parallax_selector);
    for el in &elements {
        reposition(el, config);

        let el = el.clone();
        let config = config.clone();
        let closure = Closure::wrap(Box::new(move || {
            reposition(&el, &config);
        }) as Box<dyn FnMut()>);
        _ = window.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
        closure.forget();
    }
    log::info!("[parallax] wired {} elements", elements.len());
    elements.len()
}
