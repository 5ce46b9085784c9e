//! Closing strip: owner, quick links, credits, and copyright.

use chrono::{Datelike, Local};
use color_eyre::eyre::Result;
use folio_core::content::FOOTER;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
};

use super::centered;
use crate::action::Action;
use crate::component::Component;
use crate::layout::{SectionLayout, Visuals};
use crate::theme;
use crate::widgets::text;

const HEIGHT: u16 = 8;
const LINKS_ROW: u16 = 3;
const LINK_SEPARATOR: &str = " · ";

/// Starting column and width of each quick link on a `width`-wide row.
fn link_spans(width: u16) -> Vec<(u16, u16)> {
    let sep = text::width(LINK_SEPARATOR);
    let widths: Vec<u16> = FOOTER.links.iter().map(|l| text::width(l.label)).collect();
    let total = widths.iter().sum::<u16>()
        + sep * u16::try_from(widths.len().saturating_sub(1)).unwrap_or(0);
    let mut x = text::center(total, width);
    widths
        .into_iter()
        .map(|w| {
            let span = (x, w);
            x += w + sep;
            span
        })
        .collect()
}

pub struct FooterSection {
    year: i32,
}

impl FooterSection {
    pub fn new() -> Self {
        Self {
            year: Local::now().year(),
        }
    }
}

impl Default for FooterSection {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for FooterSection {
    fn layout(&self, _width: u16, _viewport_rows: u16) -> SectionLayout {
        SectionLayout::new(HEIGHT)
    }

    fn handle_click(
        &mut self,
        column: u16,
        row: u16,
        width: u16,
        _layout: &SectionLayout,
    ) -> Result<Option<Action>> {
        if row != LINKS_ROW {
            return Ok(None);
        }
        let hit = FOOTER
            .links
            .iter()
            .zip(link_spans(width))
            .find(|(_, (x, w))| column >= *x && column < x + w)
            .and_then(|(link, _)| link.anchor())
            .map(Action::Follow);
        Ok(hit)
    }

    fn render(&self, area: Rect, buf: &mut Buffer, _layout: &SectionLayout, _visuals: &Visuals) {
        for x in area.left()..area.right() {
            if let Some(cell) = buf.cell_mut((x, area.y)) {
                cell.set_symbol("─").set_style(theme::border());
            }
        }

        centered(
            buf,
            area,
            2,
            Line::from(vec![
                Span::styled("LC ", theme::highlight()),
                Span::styled(FOOTER.owner, theme::text()),
            ]),
        );

        let mut spans = Vec::new();
        for (i, link) in FOOTER.links.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(LINK_SEPARATOR, theme::muted()));
            }
            spans.push(Span::styled(link.label, theme::link()));
        }
        centered(buf, area, LINKS_ROW, Line::from(spans));

        centered(
            buf,
            area,
            5,
            Line::from(vec![
                Span::styled(format!("{} ", FOOTER.made_with), theme::muted()),
                Span::styled("♥", Style::default().fg(theme::RED)),
                Span::styled(format!(" y {}", FOOTER.stack), theme::muted()),
            ]),
        );
        centered(
            buf,
            area,
            6,
            Line::styled(FOOTER.copyright_for(self.year), theme::muted()),
        );
    }

    fn id(&self) -> &'static str {
        "footer"
    }
}
