//! Full-height introduction: badge, name, role, pitch, calls to action,
//! social links, and drifting background icons.

use color_eyre::eyre::Result;
use folio_core::TargetId;
use folio_core::content::{Anchor, FLOATING_ICONS, HERO, NavItem, SOCIAL_LINKS};
use folio_core::page::targets;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
};

use super::{Paint, centered, content_frame, is_compact, reveal};
use crate::action::Action;
use crate::component::Component;
use crate::layout::{SectionLayout, Visuals};
use crate::theme;
use crate::widgets::text;

const SOCIAL_WIDTH: u16 = 4;
const SOCIAL_GAP: u16 = 2;
const BUTTON_GAP: u16 = 2;

/// Background icon positions as (column %, row %) of the hero.
const FLOAT_POSITIONS: [(u16, u16); 3] = [(10, 20), (85, 30), (18, 75)];

fn buttons() -> [NavItem; 2] {
    [HERO.primary, HERO.secondary]
}

fn button_label(item: &NavItem, primary: bool) -> String {
    if primary {
        format!(" {} → ", item.label)
    } else {
        format!(" {} ", item.label)
    }
}

#[derive(Default)]
pub struct HeroSection;

impl HeroSection {
    pub fn new() -> Self {
        Self
    }
}

impl Component for HeroSection {
    fn anchor(&self) -> Option<Anchor> {
        Some(Anchor::Hero)
    }

    fn layout(&self, width: u16, viewport_rows: u16) -> SectionLayout {
        let (x, w) = content_frame(width);
        let compact = is_compact(width);

        let title_h = text::height(HERO.first_name, w) + text::height(HERO.last_name, w);
        let role_h = text::height(HERO.role, w);
        let pitch_h = text::height(HERO.description, w.min(72));
        let buttons_h = if compact { 3 } else { 1 };

        // badge, gap, title, gap, role, gap, pitch, gap, buttons, gap, socials
        let content_h = 2 + title_h + 1 + role_h + 1 + pitch_h + 2 + buttons_h + 2 + 1;
        let height = viewport_rows.max(content_h + 6);
        let mut y = (height - content_h) / 2;

        let mut layout = SectionLayout::new(height);
        y += 2;
        layout.push(targets::HERO_TITLE, Rect::new(x, y, w, title_h));
        y += title_h + 1;
        layout.push(targets::HERO_SUBTITLE, Rect::new(x, y, w, role_h));
        y += role_h + 1;
        layout.push(targets::HERO_DESCRIPTION, Rect::new(x, y, w, pitch_h));
        y += pitch_h + 2;

        let [primary, secondary] = buttons();
        let labels = [
            text::width(&button_label(&primary, true)),
            text::width(&button_label(&secondary, false)),
        ];
        if compact {
            for (i, label_w) in labels.iter().enumerate() {
                let row = y + u16::try_from(i * 2).unwrap_or(0);
                layout.push(
                    TargetId::indexed(targets::HERO_BUTTON, i),
                    Rect::new(x + text::center(*label_w, w), row, *label_w, 1),
                );
            }
        } else {
            let total = labels.iter().sum::<u16>() + BUTTON_GAP;
            let mut bx = x + text::center(total, w);
            for (i, label_w) in labels.iter().enumerate() {
                layout.push(
                    TargetId::indexed(targets::HERO_BUTTON, i),
                    Rect::new(bx, y, *label_w, 1),
                );
                bx += label_w + BUTTON_GAP;
            }
        }
        y += buttons_h + 2;

        let count = u16::try_from(SOCIAL_LINKS.len()).unwrap_or(0);
        let total = count * SOCIAL_WIDTH + count.saturating_sub(1) * SOCIAL_GAP;
        let mut sx = x + text::center(total, w);
        for i in 0..SOCIAL_LINKS.len() {
            layout.push(
                TargetId::indexed(targets::HERO_SOCIAL, i),
                Rect::new(sx, y, SOCIAL_WIDTH, 1),
            );
            sx += SOCIAL_WIDTH + SOCIAL_GAP;
        }

        for (i, (px, py)) in FLOAT_POSITIONS.iter().enumerate().take(FLOATING_ICONS.len()) {
            let fx = (width.saturating_sub(4)) * px / 100;
            let fy = (height.saturating_sub(2)) * py / 100;
            layout.push(
                TargetId::indexed(targets::HERO_FLOAT, i),
                Rect::new(fx, fy, 3, 1),
            );
        }

        layout
    }

    fn handle_click(
        &mut self,
        column: u16,
        row: u16,
        _width: u16,
        layout: &SectionLayout,
    ) -> Result<Option<Action>> {
        let hit = buttons().iter().enumerate().find_map(|(i, item)| {
            layout
                .slot(&TargetId::indexed(targets::HERO_BUTTON, i))
                .filter(|r| r.contains((column, row).into()))
                .map(|_| Action::Follow(item.target))
        });
        if hit.is_some() {
            return Ok(hit);
        }
        if row + 2 == layout.height {
            return Ok(Some(Action::Follow(HERO.scroll_hint.target)));
        }
        Ok(None)
    }

    fn render(&self, area: Rect, buf: &mut Buffer, layout: &SectionLayout, visuals: &Visuals) {
        // Background layer first so the copy draws over it.
        for (i, (icon, accent)) in FLOATING_ICONS.iter().enumerate() {
            let target = TargetId::indexed(targets::HERO_FLOAT, i);
            let style = Style::default()
                .fg(theme::accent(*accent))
                .add_modifier(Modifier::DIM);
            reveal(
                buf,
                area,
                layout,
                visuals,
                &target,
                Paint(move |r: Rect, b: &mut Buffer| {
                    b.set_string(r.x, r.y, theme::glyph(*icon), style);
                }),
            );
        }

        if let Some(title) = layout.slot(&targets::HERO_TITLE) {
            let badge = Line::from(vec![
                Span::styled("● ", theme::success()),
                Span::styled(HERO.badge, theme::muted()),
            ]);
            let badge_row = Rect::new(area.x, area.y + title.y.saturating_sub(2), area.width, 1);
            centered(buf, badge_row, 0, badge);
        }

        reveal(
            buf,
            area,
            layout,
            visuals,
            &targets::HERO_TITLE,
            Paint(|r: Rect, b: &mut Buffer| {
                let lines = text::wrap(HERO.first_name, r.width)
                    .into_iter()
                    .map(|l| (l, theme::heading()))
                    .chain(
                        text::wrap(HERO.last_name, r.width)
                            .into_iter()
                            .map(|l| (l, theme::highlight())),
                    );
                for (row, (line, style)) in (0u16..).zip(lines) {
                    centered(b, r, row, Line::styled(line, style));
                }
            }),
        );

        reveal(
            buf,
            area,
            layout,
            visuals,
            &targets::HERO_SUBTITLE,
            Paint(|r: Rect, b: &mut Buffer| {
                for (row, line) in (0u16..).zip(text::wrap(HERO.role, r.width)) {
                    centered(b, r, row, Line::styled(line, theme::eyebrow()));
                }
            }),
        );

        reveal(
            buf,
            area,
            layout,
            visuals,
            &targets::HERO_DESCRIPTION,
            Paint(|r: Rect, b: &mut Buffer| {
                for (row, line) in (0u16..).zip(text::wrap(HERO.description, r.width.min(72))) {
                    centered(b, r, row, Line::styled(line, theme::muted()));
                }
            }),
        );

        for (i, item) in buttons().iter().enumerate() {
            let primary = i == 0;
            let label = button_label(item, primary);
            let style = if primary {
                theme::button_primary()
            } else {
                theme::button_secondary().add_modifier(Modifier::REVERSED)
            };
            reveal(
                buf,
                area,
                layout,
                visuals,
                &TargetId::indexed(targets::HERO_BUTTON, i),
                Paint(move |r: Rect, b: &mut Buffer| {
                    b.set_string(r.x, r.y, label, style);
                }),
            );
        }

        for (i, link) in SOCIAL_LINKS.iter().enumerate() {
            let glyph = theme::glyph(link.icon);
            reveal(
                buf,
                area,
                layout,
                visuals,
                &TargetId::indexed(targets::HERO_SOCIAL, i),
                Paint(move |r: Rect, b: &mut Buffer| {
                    let pad = text::center(text::width(glyph), r.width);
                    b.set_string(r.x, r.y, "[", theme::border());
                    b.set_string(r.x + pad, r.y, glyph, theme::text());
                    b.set_string(r.right().saturating_sub(1), r.y, "]", theme::border());
                }),
            );
        }

        centered(
            buf,
            area,
            layout.height.saturating_sub(2),
            Line::styled(format!("{} ↓", HERO.scroll_hint.label), theme::muted()),
        );
    }

    fn id(&self) -> &'static str {
        "hero"
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn fills_at_least_the_viewport() {
        let hero = HeroSection::new();
        assert_eq!(hero.layout(120, 60).height, 60);
        assert!(hero.layout(120, 5).height > 5);
    }

    #[test]
    fn lays_out_every_animated_element() {
        let layout = HeroSection::new().layout(120, 40);
        let count = layout.slots().count();
        assert_eq!(count, 3 + 2 + SOCIAL_LINKS.len() + FLOATING_ICONS.len());

        let title = layout.slot(&targets::HERO_TITLE).unwrap();
        let role = layout.slot(&targets::HERO_SUBTITLE).unwrap();
        assert!(role.y > title.y);
    }

    #[test]
    fn buttons_stack_on_narrow_screens() {
        let layout = HeroSection::new().layout(60, 40);
        let first = layout
            .slot(&TargetId::indexed(targets::HERO_BUTTON, 0))
            .unwrap();
        let second = layout
            .slot(&TargetId::indexed(targets::HERO_BUTTON, 1))
            .unwrap();
        assert!(second.y > first.y);
    }

    #[test]
    fn clicking_a_button_follows_its_anchor() {
        let mut hero = HeroSection::new();
        let layout = hero.layout(120, 40);
        let rect = layout
            .slot(&TargetId::indexed(targets::HERO_BUTTON, 1))
            .unwrap();

        let action = hero.handle_click(rect.x, rect.y, 120, &layout).unwrap();
        assert_eq!(action, Some(Action::Follow(Anchor::Contact)));
        assert_eq!(hero.handle_click(0, 0, 120, &layout).unwrap(), None);
    }
}
