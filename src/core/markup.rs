use regex::Regex;
use std::sync::OnceLock;

fn tag_pattern() -> &'static Regex {
    static TAG: OnceLock<Regex> = OnceLock::new();
    TAG.get_or_init(|| Regex::new(r"<[^>]+>").expect("tag pattern is valid"))
}

/// Drop every `<...>` tag, keeping the text between them.
pub fn strip_tags(markup: &str) -> String {
    tag_pattern().replace_all(markup, "").into_owned()
}

/// Decode the handful of entities a highlighter leaves in `innerHTML`.
/// `&amp;` goes last so `&amp;lt;` decodes to `&lt;`, not `<`.
pub fn decode_entities(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&#x27;", "'")
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
}

/// Plain text to put on the clipboard, or `None` when there is nothing to copy.
pub fn extract_copy_text(markup: &str) -> Option<String> {
    let text = decode_entities(&strip_tags(markup));
    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}
