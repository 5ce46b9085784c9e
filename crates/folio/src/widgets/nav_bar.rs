//! Fixed navigation bar and the compact menu panel.
//!
//! Both widgets share their hotspot geometry with [`hit_test`] and
//! [`menu_hit`], so mouse clicks land on exactly what was drawn.

use folio_core::Appearance;
use folio_core::content::{Anchor, LOGO, NAV_CTA, NAV_ITEMS};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Widget,
};

use super::text;
use crate::theme;

/// Rows taken by the bar at the top of the screen.
pub const NAV_ROWS: u16 = 3;

const PAD: u16 = 2;
const ITEM_GAP: u16 = 3;
const MENU_GLYPH: &str = "☰";
const CLOSE_GLYPH: &str = "✕";

/// What a click on the bar does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavHit {
    Follow(Anchor),
    ToggleMenu,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    Logo,
    Item,
    Cta,
    Toggle,
}

#[derive(Debug, Clone, Copy)]
struct Hotspot {
    x: u16,
    width: u16,
    kind: Kind,
    hit: NavHit,
}

fn hotspots(width: u16, compact: bool) -> Vec<Hotspot> {
    let mut spots = vec![Hotspot {
        x: PAD,
        width: text::width(LOGO.label),
        kind: Kind::Logo,
        hit: NavHit::Follow(LOGO.target),
    }];

    if compact {
        spots.push(Hotspot {
            x: width.saturating_sub(PAD + 1),
            width: 1,
            kind: Kind::Toggle,
            hit: NavHit::ToggleMenu,
        });
        return spots;
    }

    let cta_width = text::width(NAV_CTA.label) + 2;
    let cta_x = width.saturating_sub(PAD + cta_width);

    let items_width = NAV_ITEMS
        .iter()
        .map(|item| text::width(item.label) + ITEM_GAP)
        .sum::<u16>();
    let mut x = cta_x.saturating_sub(items_width + 1);
    for item in NAV_ITEMS {
        let w = text::width(item.label);
        spots.push(Hotspot {
            x,
            width: w,
            kind: Kind::Item,
            hit: NavHit::Follow(item.target),
        });
        x += w + ITEM_GAP;
    }

    spots.push(Hotspot {
        x: cta_x,
        width: cta_width,
        kind: Kind::Cta,
        hit: NavHit::Follow(NAV_CTA.target),
    });
    spots
}

/// Which control sits under `column` on the bar's middle row.
pub fn hit_test(width: u16, compact: bool, column: u16) -> Option<NavHit> {
    hotspots(width, compact)
        .into_iter()
        .find(|s| column >= s.x && column < s.x + s.width)
        .map(|s| s.hit)
}

// ── Bar ─────────────────────────────────────────────────────────────

pub struct NavBarView {
    pub appearance: Appearance,
    pub compact: bool,
    pub menu_open: bool,
    /// Section currently under the top of the viewport.
    pub active: Option<Anchor>,
}

impl Widget for NavBarView {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < NAV_ROWS {
            return;
        }

        let bar_bg = match self.appearance {
            Appearance::Transparent => theme::BACKGROUND,
            Appearance::Solid => theme::SURFACE,
        };
        buf.set_style(area, Style::default().bg(bar_bg));
        if self.appearance == Appearance::Solid {
            let bottom = area.y + NAV_ROWS - 1;
            for x in area.left()..area.right() {
                if let Some(cell) = buf.cell_mut((x, bottom)) {
                    cell.set_symbol("─").set_style(theme::border());
                }
            }
        }

        let y = area.y + 1;
        for spot in hotspots(area.width, self.compact) {
            let (label, style) = match (spot.kind, spot.hit) {
                (Kind::Logo, _) => (LOGO.label.to_owned(), theme::highlight()),
                (Kind::Toggle, _) => {
                    let glyph = if self.menu_open { CLOSE_GLYPH } else { MENU_GLYPH };
                    (glyph.to_owned(), theme::text())
                }
                (Kind::Cta, _) => (format!(" {} ", NAV_CTA.label), theme::button_primary()),
                (Kind::Item, NavHit::Follow(anchor)) => {
                    let label = NAV_ITEMS
                        .iter()
                        .find(|item| item.target == anchor)
                        .map_or("", |item| item.label);
                    let style = if self.active == Some(anchor) {
                        theme::text().add_modifier(Modifier::BOLD)
                    } else {
                        theme::muted()
                    };
                    (label.to_owned(), style)
                }
                (Kind::Item, NavHit::ToggleMenu) => continue,
            };
            buf.set_stringn(
                area.x + spot.x,
                y,
                label,
                usize::from(area.width.saturating_sub(spot.x)),
                style,
            );
        }
    }
}

// ── Compact menu ────────────────────────────────────────────────────

/// Rows taken by the open compact menu.
pub fn menu_height() -> u16 {
    u16::try_from(NAV_ITEMS.len()).unwrap_or(0) + 4
}

/// Row layout: blank, one row per item, blank, the call to action, border.
pub fn menu_hit(row: u16) -> Option<NavHit> {
    let items = u16::try_from(NAV_ITEMS.len()).unwrap_or(0);
    match row {
        0 => None,
        r if r <= items => NAV_ITEMS
            .get(usize::from(r - 1))
            .map(|item| NavHit::Follow(item.target)),
        r if r == items + 2 => Some(NavHit::Follow(NAV_CTA.target)),
        _ => None,
    }
}

pub struct MobileMenu {
    pub active: Option<Anchor>,
}

impl Widget for MobileMenu {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let height = menu_height().min(area.height);
        let area = Rect { height, ..area };
        buf.set_style(area, Style::default().bg(theme::SURFACE));

        for (i, item) in NAV_ITEMS.iter().enumerate() {
            let Ok(row) = u16::try_from(i + 1) else {
                break;
            };
            if row >= height {
                break;
            }
            let label_style = if self.active == Some(item.target) {
                theme::highlight()
            } else {
                theme::text()
            };
            buf.set_string(area.x + PAD, area.y + row, format!("{:02}", i + 1), theme::muted());
            buf.set_string(area.x + PAD + 4, area.y + row, item.label, label_style);
        }

        let items = u16::try_from(NAV_ITEMS.len()).unwrap_or(0);
        if items + 2 < height {
            buf.set_string(
                area.x + PAD,
                area.y + items + 2,
                format!(" {} ", NAV_CTA.label),
                theme::button_primary(),
            );
        }
        if height == menu_height() {
            let bottom = area.y + height - 1;
            for x in area.left()..area.right() {
                if let Some(cell) = buf.cell_mut((x, bottom)) {
                    cell.set_symbol("─").set_style(theme::border());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use pretty_assertions::assert_eq;

    use super::*;

    fn row(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_owned())
            .collect()
    }

    #[test]
    fn wide_bar_hits_logo_items_and_cta() {
        let width = 120;
        assert_eq!(hit_test(width, false, PAD), Some(NavHit::Follow(Anchor::Hero)));
        assert_eq!(hit_test(width, false, 0), None);
        assert_eq!(
            hit_test(width, false, width - PAD - 1),
            Some(NavHit::Follow(Anchor::Contact))
        );

        let spots = hotspots(width, false);
        let projects = spots
            .iter()
            .find(|s| s.hit == NavHit::Follow(Anchor::Projects) && s.kind == Kind::Item)
            .unwrap();
        assert_eq!(
            hit_test(width, false, projects.x + 1),
            Some(NavHit::Follow(Anchor::Projects))
        );
    }

    #[test]
    fn compact_bar_has_only_logo_and_toggle() {
        let width = 60;
        assert_eq!(hit_test(width, true, width - PAD - 1), Some(NavHit::ToggleMenu));
        assert_eq!(hotspots(width, true).len(), 2);
    }

    #[test]
    fn renders_labels_where_they_are_hit() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 120, NAV_ROWS));
        NavBarView {
            appearance: Appearance::Solid,
            compact: false,
            menu_open: false,
            active: None,
        }
        .render(buf.area, &mut buf);

        let middle = row(&buf, 1);
        assert!(middle.contains("LC"));
        assert!(middle.contains("Tecnologías"));
        assert!(middle.contains("Hablemos"));
        assert!(row(&buf, 2).starts_with("───"));
    }

    #[test]
    fn transparent_bar_has_no_border() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 60, NAV_ROWS));
        NavBarView {
            appearance: Appearance::Transparent,
            compact: true,
            menu_open: true,
            active: None,
        }
        .render(buf.area, &mut buf);

        assert_eq!(row(&buf, 2).trim(), "");
        assert!(row(&buf, 1).contains(CLOSE_GLYPH));
    }

    #[test]
    fn menu_rows_map_to_items_then_cta() {
        assert_eq!(menu_hit(0), None);
        assert_eq!(menu_hit(1), Some(NavHit::Follow(Anchor::Hero)));
        assert_eq!(menu_hit(4), Some(NavHit::Follow(Anchor::Contact)));
        assert_eq!(menu_hit(5), None);
        assert_eq!(menu_hit(6), Some(NavHit::Follow(NAV_CTA.target)));
        assert_eq!(menu_height(), 8);

        let mut buf = Buffer::empty(Rect::new(0, 0, 40, 10));
        MobileMenu { active: None }.render(buf.area, &mut buf);
        assert!(row(&buf, 2).contains("02  Tecnologías"));
        assert!(row(&buf, 6).contains("Hablemos"));
    }
}
