//! Page sections, top to bottom.

mod contact;
mod footer;
mod hero;
mod projects;
mod technologies;

use folio_core::content::SectionHeader;
use folio_core::{NavBar, TargetId};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use crate::component::Component;
use crate::layout::{SectionLayout, Visuals, cols_to_px};
use crate::relay::AppRelay;
use crate::theme;
use crate::widgets::{Revealed, text};

pub use contact::ContactSection;
pub use footer::FooterSection;
pub use hero::HeroSection;
pub use projects::ProjectsSection;
pub use technologies::TechnologiesSection;

/// Rows above and below a section's content.
const SECTION_PAD: u16 = 3;

/// Widest the content column grows.
const MAX_CONTENT: u16 = 116;

/// Every section in page order.
pub fn create_sections(relay: AppRelay) -> Vec<Box<dyn Component>> {
    vec![
        Box::new(HeroSection::new()),
        Box::new(TechnologiesSection::new()),
        Box::new(ProjectsSection::new()),
        Box::new(ContactSection::new(relay)),
        Box::new(FooterSection::new()),
    ]
}

/// Below the mobile breakpoint.
fn is_compact(width: u16) -> bool {
    NavBar::is_compact(cols_to_px(width))
}

/// Left edge and width of the centered content column.
fn content_frame(width: u16) -> (u16, u16) {
    let pad = if is_compact(width) { 2 } else { 4 };
    let inner = width.saturating_sub(pad * 2).min(MAX_CONTENT);
    (text::center(inner, width), inner)
}

/// Draw `widget` at `target`'s slot under its current visual state.
fn reveal<W: Widget>(
    buf: &mut Buffer,
    area: Rect,
    layout: &SectionLayout,
    visuals: &Visuals,
    target: &TargetId,
    widget: W,
) {
    if let Some(rect) = layout.place(target, area) {
        Revealed::new(widget, visuals.get(target), theme::BACKGROUND).render(rect, buf);
    }
}

/// Ad-hoc widget from a drawing closure.
struct Paint<F>(F);

impl<F: FnOnce(Rect, &mut Buffer)> Widget for Paint<F> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        (self.0)(area, buf);
    }
}

/// Write one line centered in a row of `area`.
fn centered(buf: &mut Buffer, area: Rect, row: u16, line: Line<'_>) {
    if row < area.height {
        line.centered().render(Rect::new(area.x, area.y + row, area.width, 1), buf);
    }
}

// ── Section headers ─────────────────────────────────────────────────

/// Eyebrow, blank, title, blank, wrapped lead.
fn header_height(header: &SectionHeader, width: u16) -> u16 {
    4 + text::height(header.lead, lead_width(width))
}

fn lead_width(width: u16) -> u16 {
    width.min(72)
}

fn header_widget(header: &'static SectionHeader) -> impl Widget {
    Paint(move |area: Rect, buf: &mut Buffer| {
        centered(
            buf,
            area,
            0,
            Line::from(Span::styled(format!("· {} ·", header.eyebrow), theme::eyebrow())),
        );
        centered(
            buf,
            area,
            2,
            Line::from(vec![
                Span::styled(format!("{} ", header.title), theme::heading()),
                Span::styled(header.highlight, theme::highlight()),
            ]),
        );
        for (row, line) in (4u16..).zip(text::wrap(header.lead, lead_width(area.width))) {
            centered(buf, area, row, Line::styled(line, theme::muted()));
        }
    })
}

#[cfg(test)]
mod tests {
    use folio_core::content::TECH_HEADER;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn content_column_is_centered_and_capped() {
        assert_eq!(content_frame(200), (42, MAX_CONTENT));
        assert_eq!(content_frame(100), (4, 92));
        assert_eq!(content_frame(60), (2, 56));
    }

    #[test]
    fn header_wraps_its_lead() {
        let wide = header_height(&TECH_HEADER, 120);
        let narrow = header_height(&TECH_HEADER, 30);
        assert!(narrow > wide);
        assert_eq!(wide, 4 + text::height(TECH_HEADER.lead, 72));
    }

    #[test]
    fn sections_stack_in_page_order() {
        let sections = create_sections(AppRelay::unconfigured("no credentials"));
        let ids: Vec<_> = sections.iter().map(|s| s.id()).collect();
        assert_eq!(ids, ["hero", "technologies", "projects", "contact", "footer"]);
    }
}
