use crate::core::{CodeBlock, SiteConfig, StyleTarget};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn html_element_by_id(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

pub fn elements_by_class(document: &web::Document, class_name: &str) -> Vec<web::Element> {
    let collection = document.get_elements_by_class_name(class_name);
    (0..collection.length())
        .filter_map(|i| collection.item(i))
        .collect()
}

pub fn html_elements_matching(document: &web::Document, selector: &str) -> Vec<web::HtmlElement> {
    let list = match document.query_selector_all(selector) {
        Ok(list) => list,
        Err(e) => {
            log::error!("bad selector {}: {:?}", selector, e);
            return Vec::new();
        }
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web::HtmlElement>().ok())
        .collect()
}

#[inline]
pub fn is_loading(document: &web::Document) -> bool {
    document.ready_state() == "loading"
}

/// Run `handler` once the document has been parsed.
pub fn on_ready(document: &web::Document, handler: impl FnOnce() + 'static) {
    if !is_loading(document) {
        handler();
        return;
    }
    let closure = Closure::once(handler);
    _ = document
        .add_event_listener_with_callback("DOMContentLoaded", closure.as_ref().unchecked_ref());
    closure.forget();
}

impl StyleTarget for web::HtmlElement {
    fn style(&self, property: &str) -> String {
        web::HtmlElement::style(self)
            .get_property_value(property)
            .unwrap_or_default()
    }

    fn set_style(&self, property: &str, value: &str) {
        if let Err(e) = web::HtmlElement::style(self).set_property(property, value) {
            log::warn!("set {}={} failed: {:?}", property, value, e);
        }
    }
}

impl CodeBlock for web::Element {
    type Button = web::HtmlElement;

    fn tag_name(&self) -> String {
        web::Element::tag_name(self)
    }

    fn has_copy_button(&self, class_name: &str) -> bool {
        let children = self.children();
        (0..children.length())
            .filter_map(|i| children.item(i))
            .any(|child| child.class_list().contains(class_name))
    }

    fn source_markup(&self, config: &SiteConfig) -> Option<String> {
        let source = self
            .get_elements_by_class_name(config.rouge_code_class)
            .item(0)
            .and_then(|rouge| rouge.first_element_child())
            .or_else(|| self.get_elements_by_tag_name(config.plain_code_tag).item(0))?;
        Some(source.inner_html())
    }

    fn append_copy_button(&self, class_name: &str, label: &str) -> Option<web::HtmlElement> {
        let document = self.owner_document()?;
        let button = document.create_element("button").ok()?;
        button.set_class_name(class_name);
        _ = button.set_attribute("type", "button");
        button.set_text_content(Some(label));
        self.append_child(&button).ok()?;
        button.dyn_into::<web::HtmlElement>().ok()
    }
}
