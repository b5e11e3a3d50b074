//! Navigation chrome state: sticky header, scroll-to-top button, mobile menu,
//! and the scroll-spy active section.
//!
//! DESIGN
//! ======
//! Every flag here is derived from browser events by the navbar component.
//! Scroll flags are a pure function of the vertical offset, so repeated
//! scroll events with the same outcome leave the state untouched.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Offset past which the header switches to its compact styling.
pub const STICKY_HEADER_OFFSET: f64 = 50.0;
/// Offset past which the scroll-to-top button is shown.
pub const SCROLL_TOP_OFFSET: f64 = 500.0;

/// Presentational flags derived from the vertical scroll offset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollFlags {
    pub scrolled: bool,
    pub scroll_top_visible: bool,
}

impl ScrollFlags {
    pub fn at(offset_y: f64) -> Self {
        Self { scrolled: offset_y > STICKY_HEADER_OFFSET, scroll_top_visible: offset_y > SCROLL_TOP_OFFSET }
    }
}

/// Navbar state shared through context.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    pub scroll: ScrollFlags,
    pub menu_open: bool,
    /// Section id whose link carries the active marker.
    pub active_section: Option<String>,
}

impl NavState {
    /// Apply a scroll offset. Returns `true` when any flag changed.
    pub fn on_scroll(&mut self, offset_y: f64) -> bool {
        let next = ScrollFlags::at(offset_y);
        if next == self.scroll {
            return false;
        }
        self.scroll = next;
        true
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Force the mobile menu closed regardless of its current state.
    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Glyph for the mobile menu toggle, kept in lockstep with `menu_open`.
    pub fn menu_icon(&self) -> &'static str {
        if self.menu_open { "fa-times" } else { "fa-bars" }
    }

    /// Whether the link targeting `href` (e.g. `#about`) is the active one.
    pub fn is_link_active(&self, href: &str) -> bool {
        match (self.active_section.as_deref(), href.strip_prefix('#')) {
            (Some(active), Some(target)) => active == target,
            _ => false,
        }
    }

    /// Fold a batch of scroll-spy observations into the active section.
    ///
    /// Each intersecting entry replaces the active section, so when several
    /// sections report intersecting in one batch the last one wins. Entries
    /// that are not intersecting never clear the current selection.
    pub fn apply_spy_batch<'a, I>(&mut self, batch: I) -> bool
    where
        I: IntoIterator<Item = (&'a str, bool)>,
    {
        let mut changed = false;
        for (section_id, intersecting) in batch {
            if !intersecting {
                continue;
            }
            if self.active_section.as_deref() != Some(section_id) {
                self.active_section = Some(section_id.to_owned());
                changed = true;
            }
        }
        changed
    }
}
