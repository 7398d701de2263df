use crate::constants::*;

/// Runtime view of the page hooks and tuning values.
///
/// `Default` mirrors the compile-time constants; tests and embedders can swap
/// individual fields without touching the wiring code.
#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    pub sidenav_id: &'static str,
    pub sidenav_open_width: &'static str,
    pub sidenav_closed_width: &'static str,

    pub highlight_class: &'static str,
    pub highlight_tag: &'static str,
    pub rouge_code_class: &'static str,
    pub plain_code_tag: &'static str,
    pub copy_button_class: &'static str,

    pub label_copy: &'static str,
    pub label_copied: &'static str,
    pub label_failed: &'static str,
    pub label_reset_ms: i32,

    pub parallax_selector: &'static str,
    pub parallax_speed_attr: &'static str,
    pub parallax_x_anchor: &'static str,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            sidenav_id: SIDENAV_ID,
            sidenav_open_width: SIDENAV_OPEN_WIDTH,
            sidenav_closed_width: SIDENAV_CLOSED_WIDTH,
            highlight_class: HIGHLIGHT_CLASS,
            highlight_tag: HIGHLIGHT_TAG,
            rouge_code_class: ROUGE_CODE_CLASS,
            plain_code_tag: PLAIN_CODE_TAG,
            copy_button_class: COPY_BUTTON_CLASS,
            label_copy: LABEL_COPY,
            label_copied: LABEL_COPIED,
            label_failed: LABEL_FAILED,
            label_reset_ms: LABEL_RESET_MS,
            parallax_selector: PARALLAX_SELECTOR,
            parallax_speed_attr: PARALLAX_SPEED_ATTR,
            parallax_x_anchor: PARALLAX_X_ANCHOR,
        }
    }
}
