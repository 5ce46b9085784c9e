//! Flowing row of pill-shaped tags (skills, project technologies).

use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::Widget};

use super::{put, text};

const GAP: u16 = 1;

pub struct Chips<'a> {
    items: &'a [&'a str],
    style: Style,
}

impl<'a> Chips<'a> {
    pub fn new(items: &'a [&'a str]) -> Self {
        Self {
            items,
            style: Style::default(),
        }
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Rows needed at `width` columns.
    pub fn height(&self, width: u16) -> u16 {
        positions(self.items, width)
            .last()
            .map_or(0, |&(_, y)| y + 1)
    }
}

/// Top-left of each chip, wrapping to a new row when one doesn't fit.
fn positions(items: &[&str], width: u16) -> Vec<(u16, u16)> {
    let mut out = Vec::with_capacity(items.len());
    let (mut x, mut y) = (0u16, 0u16);
    for item in items {
        let w = chip_width(item);
        if x > 0 && x.saturating_add(w) > width {
            x = 0;
            y += 1;
        }
        out.push((x, y));
        x = x.saturating_add(w + GAP);
    }
    out
}

fn chip_width(item: &str) -> u16 {
    text::width(item).saturating_add(2)
}

impl Widget for Chips<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for (item, (x, y)) in self.items.iter().zip(positions(self.items, area.width)) {
            if y >= area.height {
                break;
            }
            let max = usize::from(area.width.saturating_sub(x));
            put(buf, area.x + x, area.y + y, format!(" {item} "), max, self.style);
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn wraps_chips_that_overflow() {
        let items = ["Docker", "NGINX", "Linux"];
        // " Docker " = 8, " NGINX " = 7 → 8 + 1 + 7 = 16
        assert_eq!(positions(&items, 16), vec![(0, 0), (9, 0), (0, 1)]);
        assert_eq!(Chips::new(&items).height(16), 2);
        assert_eq!(Chips::new(&items).height(80), 1);
        assert_eq!(Chips::new(&[]).height(80), 0);
    }

    #[test]
    fn renders_padded_labels() {
        let items = ["JWT", "RxJS"];
        let mut buf = Buffer::empty(Rect::new(0, 0, 12, 1));
        Chips::new(&items).render(buf.area, &mut buf);
        let row: String = (0..12).map(|x| buf[(x, 0)].symbol().to_owned()).collect();
        assert_eq!(row, " JWT   RxJS ");
    }
}
