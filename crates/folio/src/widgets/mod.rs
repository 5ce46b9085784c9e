//! Page-specific widgets.

pub mod chips;
pub mod nav_bar;
pub mod reveal;
pub mod text;

pub use chips::Chips;
pub use nav_bar::{MobileMenu, NAV_ROWS, NavBarView, NavHit};
pub use reveal::Revealed;

use ratatui::{buffer::Buffer, style::Style};

/// [`Buffer::set_stringn`] that skips positions outside the buffer instead
/// of panicking.
pub fn put(buf: &mut Buffer, x: u16, y: u16, s: impl AsRef<str>, max: usize, style: Style) {
    let area = buf.area;
    if y < area.top() || y >= area.bottom() || x < area.left() {
        return;
    }
    buf.set_stringn(x, y, s, max, style);
}
