//! Page geometry and the animation surface.
//!
//! Sections are stacked top to bottom into one tall virtual page measured in
//! terminal rows. Motion and navigation think in CSS pixels, so a cell is
//! treated as 8×16 px: the 50 px scroll threshold is about three rows and
//! the 768 px breakpoint is 96 columns.

use std::collections::HashMap;

use folio_core::content::Anchor;
use folio_core::{AnchorMap, Surface, TargetId, VisualState};
use ratatui::layout::Rect;

use crate::component::Component;

pub const CELL_WIDTH: f32 = 8.0;
pub const CELL_HEIGHT: f32 = 16.0;

pub fn rows_to_px(rows: u16) -> f32 {
    f32::from(rows) * CELL_HEIGHT
}

pub fn cols_to_px(cols: u16) -> f32 {
    f32::from(cols) * CELL_WIDTH
}

/// Whole rows covered by `px`, rounded to nearest.
#[allow(clippy::cast_possible_truncation, clippy::as_conversions)]
pub fn px_to_rows(px: f32) -> i32 {
    (px / CELL_HEIGHT).round() as i32
}

// ── Section layout ──────────────────────────────────────────────────

/// Height of one section plus where its animated elements sit, relative to
/// the section's top-left corner.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionLayout {
    pub height: u16,
    slots: Vec<(TargetId, Rect)>,
}

impl SectionLayout {
    pub fn new(height: u16) -> Self {
        Self {
            height,
            slots: Vec::new(),
        }
    }

    pub fn push(&mut self, target: impl Into<TargetId>, rect: Rect) {
        self.slots.push((target.into(), rect));
    }

    /// Relative rect of `target`.
    pub fn slot(&self, target: &TargetId) -> Option<Rect> {
        self.slots
            .iter()
            .find(|(id, _)| id == target)
            .map(|(_, rect)| *rect)
    }

    /// `target`'s rect translated to `origin`.
    pub fn place(&self, target: &TargetId, origin: Rect) -> Option<Rect> {
        self.slot(target).map(|r| Rect {
            x: origin.x + r.x,
            y: origin.y + r.y,
            ..r
        })
    }

    pub fn slots(&self) -> impl Iterator<Item = &(TargetId, Rect)> {
        self.slots.iter()
    }
}

// ── Visual states ───────────────────────────────────────────────────

/// Latest visual state per animated target. Unknown targets are at rest.
#[derive(Debug, Clone, Default)]
pub struct Visuals(HashMap<TargetId, VisualState>);

impl Visuals {
    pub fn get(&self, target: &TargetId) -> VisualState {
        self.0.get(target).copied().unwrap_or_default()
    }

    pub fn set(&mut self, target: &TargetId, state: VisualState) {
        self.0.insert(target.clone(), state);
    }
}

// ── Page layout ─────────────────────────────────────────────────────

#[derive(Debug, Clone)]
struct Placed {
    anchor: Option<Anchor>,
    top: u16,
    layout: SectionLayout,
}

/// Stacked sections, absolute target rows, and the visual state map.
#[derive(Debug, Clone, Default)]
pub struct PageLayout {
    width: u16,
    height: u16,
    placed: Vec<Placed>,
    /// Absolute top row of each animated target.
    targets: HashMap<TargetId, u16>,
    visuals: Visuals,
}

impl PageLayout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-stack `sections` at `width` columns. Visual states survive.
    pub fn rebuild(&mut self, width: u16, viewport_rows: u16, sections: &[Box<dyn Component>]) {
        self.width = width;
        self.placed.clear();
        self.targets.clear();

        let mut top = 0u16;
        for section in sections {
            let layout = section.layout(width, viewport_rows);
            for (target, rect) in layout.slots() {
                self.targets.insert(target.clone(), top.saturating_add(rect.y));
            }
            let height = layout.height;
            self.placed.push(Placed {
                anchor: section.anchor(),
                top,
                layout,
            });
            top = top.saturating_add(height);
        }
        self.height = top;
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    /// Total page height in rows.
    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn height_px(&self) -> f32 {
        rows_to_px(self.height)
    }

    /// Absolute area and layout of section `index`.
    pub fn section(&self, index: usize) -> Option<(Rect, &SectionLayout)> {
        self.placed.get(index).map(|p| {
            (
                Rect::new(0, p.top, self.width, p.layout.height),
                &p.layout,
            )
        })
    }

    /// Index of the section covering `row`.
    pub fn section_at(&self, row: u16) -> Option<usize> {
        self.placed
            .iter()
            .position(|p| row >= p.top && row < p.top.saturating_add(p.layout.height))
    }

    /// The anchored section whose span contains `row`.
    pub fn anchor_at(&self, row: u16) -> Option<Anchor> {
        self.section_at(row)
            .and_then(|i| self.placed.get(i))
            .and_then(|p| p.anchor)
    }

    pub fn visuals(&self) -> &Visuals {
        &self.visuals
    }
}

impl Surface for PageLayout {
    fn top_of(&self, target: &TargetId) -> Option<f32> {
        self.targets.get(target).copied().map(rows_to_px)
    }

    fn apply(&mut self, target: &TargetId, state: VisualState) {
        self.visuals.set(target, state);
    }
}

impl AnchorMap for PageLayout {
    fn anchor_top(&self, anchor: Anchor) -> Option<f32> {
        self.placed
            .iter()
            .find(|p| p.anchor == Some(anchor))
            .map(|p| rows_to_px(p.top))
    }
}
