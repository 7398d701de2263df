/// Page hooks and UI tuning constants.
///
/// These names mirror the markup emitted by the site templates and the Rouge
/// highlighter; changing one here means changing the templates too.
// Sidebar
pub const SIDENAV_ID: &str = "sidenav";
pub const SIDENAV_OPEN_WIDTH: &str = "350px";
pub const SIDENAV_CLOSED_WIDTH: &str = "0";

// Code blocks
pub const HIGHLIGHT_CLASS: &str = "highlight";
pub const HIGHLIGHT_TAG: &str = "PRE";
pub const ROUGE_CODE_CLASS: &str = "rouge-code"; // line-numbered table layout
pub const PLAIN_CODE_TAG: &str = "code"; // fallback when line numbers are off
pub const COPY_BUTTON_CLASS: &str = "copy-button";

// Copy button labels
pub const LABEL_COPY: &str = "COPY";
pub const LABEL_COPIED: &str = "COPIED";
pub const LABEL_FAILED: &str = "FAILED";

// How long the copied/failed label stays before reverting (milliseconds)
pub const LABEL_RESET_MS: i32 = 1500;

// Parallax
pub const PARALLAX_SELECTOR: &str = "div.bgParallax";
pub const PARALLAX_SPEED_ATTR: &str = "data-speed";
pub const PARALLAX_X_ANCHOR: &str = "50%"; // horizontal background position is fixed
