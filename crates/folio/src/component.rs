//! Component trait: the building block for every page section.

use color_eyre::eyre::Result;
use crossterm::event::KeyEvent;
use folio_core::content::Anchor;
use ratatui::{buffer::Buffer, layout::Rect};

use crate::action::Action;
use crate::layout::{SectionLayout, Visuals};

/// Every page section implements Component.
///
/// Sections draw into the off-screen page buffer rather than the frame, so
/// `render` takes a [`Buffer`] and the area the section was stacked at.
///
/// Lifecycle: `layout` → (`handle_key_event` | `update` | `render`)* → `shutdown`
pub trait Component: Send {
    /// In-page anchor this section answers to, if any.
    fn anchor(&self) -> Option<Anchor> {
        None
    }

    /// Lay out at `width` columns for a viewport `viewport_rows` tall.
    fn layout(&self, width: u16, viewport_rows: u16) -> SectionLayout;

    /// Handle a keyboard event while focused. Return an Action to dispatch.
    fn handle_key_event(&mut self, _key: KeyEvent) -> Result<Option<Action>> {
        Ok(None)
    }

    /// Left click at (`column`, `row`) relative to the section's top-left,
    /// on a page `width` columns wide.
    fn handle_click(
        &mut self,
        _column: u16,
        _row: u16,
        _width: u16,
        _layout: &SectionLayout,
    ) -> Result<Option<Action>> {
        Ok(None)
    }

    /// Process a dispatched action. May return a follow-up action.
    fn update(&mut self, _action: &Action) -> Result<Option<Action>> {
        Ok(None)
    }

    /// Draw into `area` of the page buffer using a layout from
    /// [`layout`](Self::layout).
    fn render(&self, area: Rect, buf: &mut Buffer, layout: &SectionLayout, visuals: &Visuals);

    /// Whether this component currently holds input focus.
    fn focused(&self) -> bool {
        false
    }

    fn set_focused(&mut self, _focused: bool) {}

    /// Release background work before the page goes away.
    fn shutdown(&mut self) {}

    fn id(&self) -> &'static str;
}
