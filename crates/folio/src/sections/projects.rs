//! Project cards with parsed feature lists, technology chips, and links.

use folio_core::content::{Anchor, GITHUB_PROFILE, PROJECTS, PROJECTS_HEADER, Project};
use folio_core::page::targets;
use folio_core::{ProjectDescription, TargetId};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Widget},
};

use super::{
    Paint, SECTION_PAD, centered, content_frame, header_height, header_widget, is_compact, reveal,
};
use crate::component::Component;
use crate::layout::{SectionLayout, Visuals};
use crate::theme;
use crate::widgets::{Chips, put, text};

const GAP: u16 = 2;
const BULLET: &str = "• ";
const FEATURED: &str = "★ Destacado";

fn link_labels(project: &Project) -> Vec<(&'static str, &'static str)> {
    let mut links = Vec::new();
    if let Some(demo) = project.links.demo {
        links.push(("↗ Demo", demo));
    }
    if let Some(repo) = project.links.repo {
        links.push(("gh Código", repo));
    }
    links
}

/// Feature bullets wrapped with a hanging indent.
fn bullet_lines(description: &ProjectDescription, width: u16) -> Vec<String> {
    let indent = text::width(BULLET);
    description
        .features
        .iter()
        .flat_map(|feature| {
            text::wrap(feature, width.saturating_sub(indent))
                .into_iter()
                .enumerate()
                .map(|(i, line)| {
                    if i == 0 {
                        format!("{BULLET}{line}")
                    } else {
                        format!("{}{line}", " ".repeat(usize::from(indent)))
                    }
                })
        })
        .collect()
}

fn to_rows(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

fn card_height(project: &Project, card_width: u16) -> u16 {
    let inner = card_width.saturating_sub(4);
    let description = project.description();

    // border, title, gap, summary
    let mut h = 2 + 1 + 1 + text::height(&description.summary, inner);
    if description.has_features() {
        h += 2 + to_rows(bullet_lines(&description, inner).len());
    }
    h += 1 + Chips::new(project.technologies).height(inner);
    if !link_labels(project).is_empty() {
        h += 2;
    }
    h
}

fn card(project: &'static Project) -> impl Widget {
    Paint(move |area: Rect, buf: &mut Buffer| {
        let border = if project.featured {
            Style::default().fg(theme::accent(project.theme.gradient_from))
        } else {
            theme::border()
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border)
            .style(Style::default().bg(theme::SURFACE));
        let inner = block.inner(area);
        block.render(area, buf);
        let inner = Rect {
            x: inner.x + 1,
            width: inner.width.saturating_sub(2),
            ..inner
        };
        let max = usize::from(inner.width);

        Line::from(vec![
            Span::styled(
                format!("{} ", theme::glyph(project.icon)),
                Style::default().fg(theme::accent(project.theme.icon)),
            ),
            Span::styled(project.title, theme::heading()),
        ])
        .render(Rect { height: 1, ..inner }, buf);
        let title_w = text::width(project.title) + 4;
        if project.featured && title_w + text::width(FEATURED) < inner.width {
            Line::styled(FEATURED, theme::highlight())
                .right_aligned()
                .render(Rect { height: 1, ..inner }, buf);
        }

        let description = project.description();
        let mut y = inner.y + 2;
        for line in text::wrap(&description.summary, inner.width) {
            put(buf, inner.x, y, line, max, theme::muted());
            y += 1;
        }

        if description.has_features() {
            y += 1;
            put(buf, inner.x, y, "Funciones:", max, theme::eyebrow());
            y += 1;
            for line in bullet_lines(&description, inner.width) {
                put(buf, inner.x, y, line, max, theme::text());
                y += 1;
            }
        }
        y += 1;

        let chips = Chips::new(project.technologies).style(
            Style::default()
                .fg(theme::accent(project.theme.gradient_to))
                .bg(theme::BACKGROUND),
        );
        let chips_h = chips.height(inner.width);
        chips.render(Rect::new(inner.x, y, inner.width, chips_h), buf);
        y += chips_h + 1;

        let mut x = inner.x;
        for (label, _) in link_labels(project) {
            if y >= inner.bottom() {
                break;
            }
            put(buf, x, y, label, max, theme::link());
            x += text::width(label) + 3;
        }
    })
}

#[derive(Default)]
pub struct ProjectsSection;

impl ProjectsSection {
    pub fn new() -> Self {
        Self
    }
}

impl Component for ProjectsSection {
    fn anchor(&self) -> Option<Anchor> {
        Some(Anchor::Projects)
    }

    fn layout(&self, width: u16, _viewport_rows: u16) -> SectionLayout {
        let (x, w) = content_frame(width);
        let cols: u16 = if is_compact(width) { 1 } else { 2 };
        let half = w.saturating_sub(GAP * (cols - 1)) / cols;

        let mut slots: Vec<(TargetId, Rect)> = Vec::new();
        let mut y = SECTION_PAD;

        let header_h = header_height(&PROJECTS_HEADER, w);
        slots.push((targets::PROJECTS_TITLE, Rect::new(x, y, w, header_h)));
        y += header_h + 2;

        // Featured cards take a full row; the rest fill rows of `cols`.
        let mut row: Vec<(usize, u16)> = Vec::new();
        let flush = |row: &mut Vec<(usize, u16)>, y: &mut u16, slots: &mut Vec<(TargetId, Rect)>| {
            if row.is_empty() {
                return;
            }
            let row_h = row
                .iter()
                .map(|&(i, card_w)| PROJECTS.get(i).map_or(0, |p| card_height(p, card_w)))
                .max()
                .unwrap_or(0);
            let mut cx = x;
            for (i, card_w) in row.drain(..) {
                slots.push((
                    TargetId::indexed(targets::PROJECT_CARD, i),
                    Rect::new(cx, *y, card_w, row_h),
                ));
                cx += card_w + GAP;
            }
            *y += row_h + 1;
        };

        for (i, project) in PROJECTS.iter().enumerate() {
            if project.featured {
                flush(&mut row, &mut y, &mut slots);
                row.push((i, w));
                flush(&mut row, &mut y, &mut slots);
                continue;
            }
            row.push((i, half));
            if row.len() == usize::from(cols) {
                flush(&mut row, &mut y, &mut slots);
            }
        }
        flush(&mut row, &mut y, &mut slots);

        // GitHub link row
        y += 2;

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
            &targets::PROJECTS_TITLE,
            header_widget(&PROJECTS_HEADER),
        );
        for (i, project) in PROJECTS.iter().enumerate() {
            let target = TargetId::indexed(targets::PROJECT_CARD, i);
            reveal(buf, area, layout, visuals, &target, card(project));
        }

        centered(
            buf,
            area,
            layout.height.saturating_sub(SECTION_PAD + 1),
            Line::from(vec![
                Span::styled(format!("{} ↗", GITHUB_PROFILE.label), theme::link()),
                Span::styled(format!("  {}", GITHUB_PROFILE.href), theme::muted()),
            ]),
        );
    }

    fn id(&self) -> &'static str {
        "projects"
    }
}
