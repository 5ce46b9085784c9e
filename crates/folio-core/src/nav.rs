//! Fixed navigation bar state.
//!
//! Two independent axes: whether the page has scrolled past
//! [`SCROLL_THRESHOLD`] (drives the bar's background) and whether the mobile
//! menu panel is open.

use std::time::Duration;

use tracing::debug;

use crate::content::Anchor;
use crate::motion::{Easing, Reveal, Transition, Trigger, VisualState};

/// Offset (CSS px) past which the bar turns solid. Strictly greater-than.
pub const SCROLL_THRESHOLD: f32 = 50.0;

/// Width (CSS px) below which the compact menu replaces the inline links.
pub const MOBILE_BREAKPOINT: f32 = 768.0;

/// Animation target for the bar itself.
pub const NAV_TARGET: &str = "nav";

/// Something that can bring an anchor's section into view.
pub trait Document {
    /// Whether the page currently has a section for `anchor`.
    fn contains(&self, anchor: Anchor) -> bool;

    /// Scroll so `anchor`'s section is at the top of the viewport.
    fn scroll_into_view(&mut self, anchor: Anchor);
}

/// Background treatment of the bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Appearance {
    Transparent,
    /// Opaque, blurred background with a bottom border.
    Solid,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavBar {
    scrolled: bool,
    menu_open: bool,
}

impl NavBar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-evaluate `scrolled` for the given offset. No hysteresis.
    pub fn on_scroll(&mut self, offset: f32) {
        let scrolled = offset > SCROLL_THRESHOLD;
        if scrolled != self.scrolled {
            debug!(offset, scrolled, "nav appearance changed");
            self.scrolled = scrolled;
        }
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn appearance(&self) -> Appearance {
        if self.scrolled {
            Appearance::Solid
        } else {
            Appearance::Transparent
        }
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Whether the compact menu is in use at this viewport width.
    pub fn is_compact(width: f32) -> bool {
        width < MOBILE_BREAKPOINT
    }

    /// Follow an in-page link: close the mobile menu, then scroll to the
    /// target if the document has it. A missing target is a silent no-op.
    ///
    /// Returns whether a scroll was requested.
    pub fn click(&mut self, anchor: Anchor, document: &mut impl Document) -> bool {
        self.close_menu();
        if !document.contains(anchor) {
            debug!(%anchor, "anchor target missing");
            return false;
        }
        document.scroll_into_view(anchor);
        true
    }

    /// Slide-down entrance played shortly after mount.
    pub fn entrance() -> Reveal {
        Reveal::new(
            Trigger::Mount,
            Transition::reveal(VisualState::HIDDEN.with_y(-100.0))
                .over(Duration::from_secs(1))
                .eased(Easing::Power3Out)
                .after(Duration::from_millis(500)),
        )
        .target(NAV_TARGET)
    }
}
