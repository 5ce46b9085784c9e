//! All UI actions. Actions are the sole mechanism for page state mutation.

use folio_core::content::Anchor;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // ── Lifecycle ──
    Quit,
    Tick,
    Render,
    Resize(u16, u16),

    // ── Scrolling ──
    /// Relative scroll in CSS px; positive scrolls down.
    ScrollBy(f32),
    ScrollToBottom,
    /// Follow an in-page link (closes the mobile menu).
    Follow(Anchor),

    // ── Navigation bar ──
    ToggleMenu,
    CloseMenu,

    // ── Overlays & focus ──
    ToggleHelp,
    FocusContact,
    ReleaseFocus,
}
