use crate::core::config::SiteConfig;

/// Anything whose inline style can be read and written.
///
/// Implemented for `web_sys::HtmlElement` in the browser and by plain mock
/// structs in host tests.
pub trait StyleTarget {
    fn style(&self, property: &str) -> String;
    fn set_style(&self, property: &str, value: &str);
}

/// A highlight element that may receive a copy button.
pub trait CodeBlock {
    type Button;

    fn tag_name(&self) -> String;
    fn has_copy_button(&self, class_name: &str) -> bool;
    /// Markup of the rendered code, if the block has any.
    fn source_markup(&self, config: &SiteConfig) -> Option<String>;
    /// Appends the button as a direct child. `None` if the DOM refused it.
    fn append_copy_button(&self, class_name: &str, label: &str) -> Option<Self::Button>;
}

/// One-shot timer used to revert a copy button's label.
pub trait ResetTimer {
    type Handle;

    fn clear(&self, handle: Self::Handle);
    /// `None` if the timer could not be scheduled.
    fn schedule(&self, delay_ms: i32) -> Option<Self::Handle>;
}
