use crate::clipboard;
use crate::core::copy::{self, CopyButton, CopyStatus};
use crate::core::markup::extract_copy_text;
use crate::core::{CodeBlock, ResetTimer, SiteConfig};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

#[derive(Clone)]
struct CopyWiring {
    block: web::Element,
    button: web::HtmlElement,
    state: Rc<RefCell<CopyButton<i32>>>,
    // One reset callback per button, reused by every click.
    reset_fn: js_sys::Function,
    config: SiteConfig,
}

/// Inject copy buttons into every highlight `<pre>` that lacks one and wire
/// their click handlers. Returns how many buttons were added.
pub fn wire_copy_buttons(document: &web::Document, config: &SiteConfig) -> usize {
    let blocks = dom::elements_by_class(document, config.highlight_class);
    let total = blocks.len();
    let injected = copy::inject_copy_buttons(blocks, config);
    let count = injected.len();
    for (block, button) in injected {
        wire_button(block, button, config.clone());
    }
    log::info!("[copy] {} of {} highlight blocks got a copy button", count, total);
    count
}

fn wire_button(block: web::Element, button: web::HtmlElement, config: SiteConfig) {
    let state = Rc::new(RefCell::new(CopyButton::<i32>::new()));

    let reset_state = state.clone();
    let reset_button = button.clone();
    let reset_config = config.clone();
    let reset_closure = Closure::wrap(Box::new(move || {
        let status = reset_state.borrow_mut().reset();
        reset_button.set_text_content(Some(status.label(&reset_config)));
    }) as Box<dyn FnMut()>);
    let reset_fn: js_sys::Function = reset_closure
        .as_ref()
        .unchecked_ref::<js_sys::Function>()
        .clone();
    reset_closure.forget();

    let w = CopyWiring {
        block,
        button: button.clone(),
        state,
        reset_fn,
        config,
    };
    let click_closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        ev.prevent_default();
        let text = w
            .block
            .source_markup(&w.config)
            .and_then(|m| extract_copy_text(&m));
        let w = w.clone();
        spawn_local(async move {
            let copied = match text {
                Some(text) => match clipboard::write_text(&text).await {
                    Ok(()) => true,
                    Err(e) => {
                        log::warn!("[copy] {}", e);
                        false
                    }
                },
                None => {
                    log::warn!("[copy] code block has nothing to copy");
                    false
                }
            };
            finish_copy(&w, copied);
        });
    }) as Box<dyn FnMut(_)>);
    _ = button.add_event_listener_with_callback("click", click_closure.as_ref().unchecked_ref());
    click_closure.forget();
}

// Reuses the button's reset callback for every scheduled timeout.
struct WindowTimer<'a> {
    window: web::Window,
    callback: &'a js_sys::Function,
}

impl ResetTimer for WindowTimer<'_> {
    type Handle = i32;

    fn clear(&self, handle: i32) {
        self.window.clear_timeout_with_handle(handle);
    }

    fn schedule(&self, delay_ms: i32) -> Option<i32> {
        self.window
            .set_timeout_with_callback_and_timeout_and_arguments_0(self.callback, delay_ms)
            .map_err(|e| log::warn!("[copy] setTimeout failed: {:?}", e))
            .ok()
    }
}

fn finish_copy(w: &CopyWiring, copied: bool) {
    let Some(window) = web::window() else {
        return;
    };
    let timer = WindowTimer {
        window,
        callback: &w.reset_fn,
    };
    let status: CopyStatus = w.state.borrow_mut().complete(copied, &timer, &w.config);
    w.button.set_text_content(Some(status.label(&w.config)));
}
