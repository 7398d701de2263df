use crate::core::config::SiteConfig;
use crate::core::target::StyleTarget;

pub const WIDTH_PROPERTY: &str = "width";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavState {
    Open,
    Closed,
}

impl NavState {
    #[inline]
    pub fn width(self, config: &SiteConfig) -> &'static str {
        match self {
            NavState::Open => config.sidenav_open_width,
            NavState::Closed => config.sidenav_closed_width,
        }
    }

    /// Recover the state from an inline width. An unset width counts as closed,
    /// so the first toggle on a fresh page opens the sidebar.
    pub fn from_width(width: &str, config: &SiteConfig) -> Self {
        let w = width.trim();
        if w.is_empty() || w == config.sidenav_closed_width || w == "0px" {
            NavState::Closed
        } else {
            NavState::Open
        }
    }

    #[inline]
    pub fn toggled(self) -> Self {
        match self {
            NavState::Open => NavState::Closed,
            NavState::Closed => NavState::Open,
        }
    }
}

/// Write the width for `state`. A missing sidebar is a no-op; returns whether
/// anything was written.
pub fn apply<T: StyleTarget>(target: Option<&T>, state: NavState, config: &SiteConfig) -> bool {
    match target {
        Some(el) => {
            el.set_style(WIDTH_PROPERTY, state.width(config));
            true
        }
        None => {
            log::debug!("[nav] #{} not found, ignoring {:?}", config.sidenav_id, state);
            false
        }
    }
}

pub fn toggle<T: StyleTarget>(target: Option<&T>, config: &SiteConfig) -> Option<NavState> {
    let el = target?;
    let next = NavState::from_width(&el.style(WIDTH_PROPERTY), config).toggled();
    apply(Some(el), next, config);
    Some(next)
}
