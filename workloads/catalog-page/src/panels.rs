//! Mobile filter panel and navigation menu state.

use serde::Serialize;

/// Viewport width at or below which outside clicks close the filter panel.
pub const MOBILE_BREAKPOINT: u32 = 768;

/// Where a page click landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    FiltersPanel,
    FilterToggle,
    Elsewhere,
}

/// Open/closed state of the page chrome.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PanelState {
    pub filters_open: bool,
    pub body_scroll_locked: bool,
    pub nav_open: bool,
}

impl PanelState {
    /// Open the filter panel and lock body scrolling behind it.
    pub fn open_filters(&mut self) {
        self.filters_open = true;
        self.body_scroll_locked = true;
    }

    pub fn close_filters(&mut self) {
        self.filters_open = false;
        self.body_scroll_locked = false;
    }

    /// Close the filter panel on a narrow viewport when the click landed
    /// outside both the panel and its toggle.
    pub fn page_click(&mut self, target: ClickTarget, viewport_width: u32) {
        if viewport_width <= MOBILE_BREAKPOINT
            && target == ClickTarget::Elsewhere
            && self.filters_open
        {
            self.close_filters();
        }
    }

    /// Flip the hamburger menu.
    pub fn toggle_nav(&mut self) {
        self.nav_open = !self.nav_open;
    }

    /// Value for the hamburger button's `aria-expanded`.
    pub fn nav_aria_expanded(&self) -> &'static str {
        if self.nav_open {
            "true"
        } else {
            "false"
        }
    }
}
