//! Skill categories grid and the extra-skills strip.

use folio_core::TargetId;
use folio_core::content::{
    Anchor, EXTRA_SKILLS, ExtraSkill, TECH_CATEGORIES, TECH_HEADER, TechCategory,
};
use folio_core::page::targets;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Widget},
};

use super::{
    Paint, SECTION_PAD, content_frame, header_height, header_widget, is_compact, reveal,
};
use crate::component::Component;
use crate::layout::{SectionLayout, Visuals};
use crate::theme;
use crate::widgets::{Chips, put, text};

const GAP: u16 = 2;
const EXTRA_HEIGHT: u16 = 4;

/// Card columns at a given terminal width.
fn card_columns(width: u16) -> u16 {
    if width >= 128 {
        3
    } else if is_compact(width) {
        1
    } else {
        2
    }
}

/// Width of each of `cols` columns sharing `total` with gaps between.
fn column_width(total: u16, cols: u16) -> u16 {
    total.saturating_sub(GAP * cols.saturating_sub(1)) / cols.max(1)
}

fn card_height(category: &TechCategory, card_width: u16) -> u16 {
    let inner = card_width.saturating_sub(4);
    // border, title, gap, description, gap, chips, border
    2 + 1 + 1
        + text::height(category.description, inner)
        + 1
        + Chips::new(category.skills).height(inner)
}

fn card(category: &'static TechCategory) -> impl Widget {
    Paint(move |area: Rect, buf: &mut Buffer| {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(theme::border())
            .style(Style::default().bg(theme::SURFACE));
        let inner = block.inner(area);
        block.render(area, buf);
        let inner = Rect {
            x: inner.x + 1,
            width: inner.width.saturating_sub(2),
            ..inner
        };

        Line::from(vec![
            Span::styled(
                format!("{} ", theme::glyph(category.icon)),
                Style::default().fg(theme::accent(category.theme.icon)),
            ),
            Span::styled(category.title, theme::heading()),
        ])
        .render(Rect { height: 1, ..inner }, buf);

        let mut y = inner.y + 2;
        for line in text::wrap(category.description, inner.width) {
            put(buf, inner.x, y, line, usize::from(inner.width), theme::muted());
            y += 1;
        }
        y += 1;

        let chips = Chips::new(category.skills).style(
            Style::default()
                .fg(theme::accent(category.theme.gradient_to))
                .bg(theme::BACKGROUND),
        );
        let chips_area = Rect::new(inner.x, y, inner.width, inner.bottom().saturating_sub(y));
        chips.render(chips_area, buf);
    })
}

fn extra(skill: &'static ExtraSkill) -> impl Widget {
    Paint(move |area: Rect, buf: &mut Buffer| {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(theme::border());
        let inner = block.inner(area);
        block.render(area, buf);
        Line::from(vec![
            Span::styled(format!("{} ", theme::glyph(skill.icon)), theme::highlight()),
            Span::styled(skill.label, theme::text()),
        ])
        .centered()
        .render(Rect { height: 1, ..inner }, buf);
        Line::styled(skill.items, theme::muted())
            .centered()
            .render(Rect::new(inner.x, inner.y + 1, inner.width, 1), buf);
    })
}

#[derive(Default)]
pub struct TechnologiesSection;

impl TechnologiesSection {
    pub fn new() -> Self {
        Self
    }
}

impl Component for TechnologiesSection {
    fn anchor(&self) -> Option<Anchor> {
        Some(Anchor::Technologies)
    }

    fn layout(&self, width: u16, _viewport_rows: u16) -> SectionLayout {
        let (x, w) = content_frame(width);
        let mut slots = Vec::new();
        let mut y = SECTION_PAD;

        let header_h = header_height(&TECH_HEADER, w);
        slots.push((targets::TECH_TITLE, Rect::new(x, y, w, header_h)));
        y += header_h + 2;

        let cols = card_columns(width);
        let card_w = column_width(w, cols);
        for (row, chunk) in (0u16..).zip(TECH_CATEGORIES.chunks(usize::from(cols))) {
            let row_h = chunk
                .iter()
                .map(|c| card_height(c, card_w))
                .max()
                .unwrap_or(0);
            for (col, _) in (0u16..).zip(chunk) {
                let index = usize::from(row * cols + col);
                slots.push((
                    TargetId::indexed(targets::TECH_CARD, index),
                    Rect::new(x + col * (card_w + GAP), y, card_w, row_h),
                ));
            }
            y += row_h + 1;
        }
        y += 1;

        let extra_cols = if is_compact(width) { 1 } else { 3 };
        let extra_w = column_width(w, extra_cols);
        for (row, chunk) in (0u16..).zip(EXTRA_SKILLS.chunks(usize::from(extra_cols))) {
            for (col, _) in (0u16..).zip(chunk) {
                let index = usize::from(row * extra_cols + col);
                slots.push((
                    TargetId::indexed(targets::TECH_EXTRA, index),
                    Rect::new(x + col * (extra_w + GAP), y, extra_w, EXTRA_HEIGHT),
                ));
            }
            y += EXTRA_HEIGHT + 1;
        }

        let mut layout = SectionLayout::new(y + SECTION_PAD);
        for (target, rect) in slots {
            layout.push(target, rect);
        }
        layout
    }

    fn render(&self, area: Rect, buf: &mut Buffer, layout: &SectionLayout, visuals: &Visuals) {
        reveal(
            buf,
            area,
            layout,
            visuals,
            &targets::TECH_TITLE,
            header_widget(&TECH_HEADER),
        );
        for (i, category) in TECH_CATEGORIES.iter().enumerate() {
            let target = TargetId::indexed(targets::TECH_CARD, i);
            reveal(buf, area, layout, visuals, &target, card(category));
        }
        for (i, skill) in EXTRA_SKILLS.iter().enumerate() {
            let target = TargetId::indexed(targets::TECH_EXTRA, i);
            reveal(buf, area, layout, visuals, &target, extra(skill));
        }
    }

    fn id(&self) -> &'static str {
        "technologies"
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use pretty_assertions::assert_eq;

    use super::*;

    fn card_rects(layout: &SectionLayout) -> Vec<Rect> {
        (0..TECH_CATEGORIES.len())
            .map(|i| {
                layout
                    .slot(&TargetId::indexed(targets::TECH_CARD, i))
                    .unwrap()
            })
            .collect()
    }

    #[test]
    fn grid_columns_follow_width() {
        assert_eq!(card_columns(140), 3);
        assert_eq!(card_columns(100), 2);
        assert_eq!(card_columns(60), 1);
    }

    #[test]
    fn wide_layout_puts_cards_side_by_side() {
        let layout = TechnologiesSection::new().layout(140, 40);
        let cards = card_rects(&layout);
        assert!(cards.iter().all(|r| r.y == cards[0].y));
        assert!(cards[1].x > cards[0].x);
        assert_eq!(layout.slots().count(), 1 + TECH_CATEGORIES.len() + EXTRA_SKILLS.len());
    }

    #[test]
    fn narrow_layout_stacks_cards_and_grows() {
        let narrow = TechnologiesSection::new().layout(60, 40);
        let wide = TechnologiesSection::new().layout(140, 40);
        let cards = card_rects(&narrow);
        assert!(cards.windows(2).all(|w| w[1].y > w[0].y));
        assert!(narrow.height > wide.height);
    }

    #[test]
    fn card_fits_its_content() {
        let category = &TECH_CATEGORIES[0];
        let rect = Rect::new(0, 0, 40, card_height(category, 40));
        let mut buf = Buffer::empty(rect);
        card(category).render(rect, &mut buf);

        let title: String = (0..40).map(|x| buf[(x, 1)].symbol().to_owned()).collect();
        assert!(title.contains("Backend"));
        let last: String = (0..40)
            .map(|x| buf[(x, rect.height - 2)].symbol().to_owned())
            .collect();
        assert!(last.contains("REST APIs") || last.contains("Framework"));
    }
}
