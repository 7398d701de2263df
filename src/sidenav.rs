use crate::core::nav::{self, NavState};
use crate::core::SiteConfig;
use crate::dom;
use web_sys as web;

#[inline]
fn sidenav(document: &web::Document, config: &SiteConfig) -> Option<web::HtmlElement> {
    dom::html_element_by_id(document, config.sidenav_id)
}

#[inline]
pub fn open(document: &web::Document, config: &SiteConfig) {
    nav::apply(sidenav(document, config).as_ref(), NavState::Open, config);
}

#[inline]
pub fn close(document: &web::Document, config: &SiteConfig) {
    nav::apply(sidenav(document, config).as_ref(), NavState::Closed, config);
}

pub fn toggle(document: &web::Document, config: &SiteConfig) {
    if let Some(state) = nav::toggle(sidenav(document, config).as_ref(), config) {
        log::debug!("[nav] toggled to {:?}", state);
    }
}
