//! Draws a widget under a [`VisualState`].
//!
//! The wrapped widget renders into a scratch buffer first; the scratch is
//! then copied into place with the visual state mapped onto cells:
//!
//! - opacity blends foreground colours toward the backdrop (fully
//!   transparent draws nothing)
//! - `translate_y` shifts rows (16 px per row)
//! - blur dims the text
//! - scale and `rotate_x` below rest clip columns evenly from both sides

use folio_core::VisualState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier},
    widgets::Widget,
};

use crate::layout::px_to_rows;

/// Opacity below which nothing is drawn.
const INVISIBLE: f32 = 0.02;

/// Blur radius (px) from which text renders dimmed.
const DIM_BLUR: f32 = 2.0;

pub struct Revealed<W> {
    inner: W,
    state: VisualState,
    backdrop: Color,
    clip: Option<Rect>,
}

impl<W: Widget> Revealed<W> {
    pub fn new(inner: W, state: VisualState, backdrop: Color) -> Self {
        Self {
            inner,
            state,
            backdrop,
            clip: None,
        }
    }

    /// Restrict writes to `clip` (defaults to the whole target buffer).
    pub fn clip(mut self, clip: Rect) -> Self {
        self.clip = Some(clip);
        self
    }
}

impl<W: Widget> Widget for Revealed<W> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let state = self.state;
        if state.opacity < INVISIBLE || area.is_empty() {
            return;
        }

        let mut scratch = Buffer::empty(Rect::new(0, 0, area.width, area.height));
        self.inner.render(scratch.area, &mut scratch);

        let clip = self.clip.unwrap_or(buf.area).intersection(buf.area);
        let inset = inset(area.width, &state);
        let dy = px_to_rows(state.translate_y);
        let dim = state.blur >= DIM_BLUR;

        for y in 0..area.height {
            let Ok(row) = u16::try_from(i32::from(area.y) + i32::from(y) + dy) else {
                continue;
            };
            if row < clip.top() || row >= clip.bottom() {
                continue;
            }
            for x in inset..area.width.saturating_sub(inset) {
                let col = area.x + x;
                if col < clip.left() || col >= clip.right() {
                    continue;
                }
                let Some(src) = scratch.cell((x, y)) else {
                    continue;
                };
                // Leave the page background visible through blank cells.
                if src.symbol() == " " && src.bg == Color::Reset {
                    continue;
                }
                let mut cell = src.clone();
                cell.fg = blend(cell.fg, self.backdrop, state.opacity);
                if cell.bg != Color::Reset {
                    cell.bg = blend(cell.bg, self.backdrop, state.opacity);
                }
                if dim {
                    cell.modifier.insert(Modifier::DIM);
                }
                if let Some(dst) = buf.cell_mut((col, row)) {
                    *dst = cell;
                }
            }
        }
    }
}

/// Columns hidden on each side for a shrunken or tilted element.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::as_conversions
)]
fn inset(width: u16, state: &VisualState) -> u16 {
    let tilt = state.rotate_x.to_radians().cos();
    let effective = (state.scale * tilt).clamp(0.0, 1.0);
    let hidden = f32::from(width) * (1.0 - effective) / 2.0;
    (hidden.round() as u16).min(width / 2)
}

/// Mix `color` toward `backdrop`; `alpha` 1 keeps `color`. Only RGB colours
/// can be mixed, others switch to dark gray below half opacity.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::as_conversions
)]
pub fn blend(color: Color, backdrop: Color, alpha: f32) -> Color {
    let alpha = alpha.clamp(0.0, 1.0);
    if alpha >= 1.0 {
        return color;
    }
    match (color, backdrop) {
        (Color::Rgb(r, g, b), Color::Rgb(br, bg, bb)) => {
            let mix = |c: u8, k: u8| {
                (f32::from(k) + (f32::from(c) - f32::from(k)) * alpha).round() as u8
            };
            Color::Rgb(mix(r, br), mix(g, bg), mix(b, bb))
        }
        _ if alpha < 0.5 => Color::DarkGray,
        _ => color,
    }
}
