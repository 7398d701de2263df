use crate::core::config::SiteConfig;
use crate::core::markup::extract_copy_text;
use crate::core::target::{CodeBlock, ResetTimer};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CopyStatus {
    #[default]
    Idle,
    Copied,
    Failed,
}

impl CopyStatus {
    #[inline]
    pub fn label(self, config: &SiteConfig) -> &'static str {
        match self {
            CopyStatus::Idle => config.label_copy,
            CopyStatus::Copied => config.label_copied,
            CopyStatus::Failed => config.label_failed,
        }
    }
}

/// Label state of one copy button plus its pending reset timer.
///
/// At most one reset is ever pending: [`CopyButton::finish`] hands back the
/// previous handle so the caller can clear it before arming a new one.
#[derive(Debug)]
pub struct CopyButton<H> {
    status: CopyStatus,
    pending_reset: Option<H>,
}

impl<H> Default for CopyButton<H> {
    fn default() -> Self {
        Self {
            status: CopyStatus::Idle,
            pending_reset: None,
        }
    }
}

impl<H> CopyButton<H> {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn status(&self) -> CopyStatus {
        self.status
    }

    #[cfg(test)]
    pub fn has_pending_reset(&self) -> bool {
        self.pending_reset.is_some()
    }

    /// Record the outcome of a clipboard write. Returns the reset timer that
    /// was still pending, which must be cancelled.
    pub fn finish(&mut self, copied: bool) -> Option<H> {
        self.status = if copied {
            CopyStatus::Copied
        } else {
            CopyStatus::Failed
        };
        self.pending_reset.take()
    }

    pub fn arm_reset(&mut self, handle: H) {
        self.pending_reset = Some(handle);
    }

    /// Finish a click: cancel the pending reset, switch the label and arm a
    /// single new reset. Returns the status to display.
    pub fn complete<T>(&mut self, copied: bool, timer: &T, config: &SiteConfig) -> CopyStatus
    where
        T: ResetTimer<Handle = H>,
    {
        if let Some(previous) = self.finish(copied) {
            timer.clear(previous);
        }
        match timer.schedule(config.label_reset_ms) {
            Some(handle) => self.arm_reset(handle),
            None => log::error!("[copy] could not schedule label reset"),
        }
        self.status
    }

    /// The reset timer fired.
    pub fn reset(&mut self) -> CopyStatus {
        self.pending_reset = None;
        self.status = CopyStatus::Idle;
        self.status
    }
}

#[inline]
pub fn is_copy_target<B: CodeBlock>(block: &B, config: &SiteConfig) -> bool {
    block.tag_name().eq_ignore_ascii_case(config.highlight_tag)
}

/// Append a copy button to every eligible block.
///
/// Non-`<pre>` elements, blocks that already have a button and blocks with
/// nothing to copy are skipped, so running this twice adds nothing.
pub fn inject_copy_buttons<B, I>(blocks: I, config: &SiteConfig) -> Vec<(B, B::Button)>
where
    B: CodeBlock,
    I: IntoIterator<Item = B>,
{
    let mut injected = Vec::new();
    for block in blocks {
        if !is_copy_target(&block, config) {
            continue;
        }
        if block.has_copy_button(config.copy_button_class) {
            log::debug!("[copy] block already has a button");
            continue;
        }
        let has_text = block
            .source_markup(config)
            .and_then(|m| extract_copy_text(&m))
            .is_some();
        if !has_text {
            log::debug!("[copy] skipping empty code block");
            continue;
        }
        match block.append_copy_button(config.copy_button_class, config.label_copy) {
            Some(button) => injected.push((block, button)),
            None => log::warn!("[copy] could not append button"),
        }
    }
    injected
}
