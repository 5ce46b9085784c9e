#![allow(clippy::unwrap_used, clippy::float_cmp)]

use std::collections::HashMap;
use std::time::Duration;

use pretty_assertions::assert_eq;

use folio_core::content::Anchor;
use folio_core::motion::MotionDefaults;
use folio_core::nav::Appearance;
use folio_core::motion::Trigger;
use folio_core::page::{drift_period, hero_reveals, targets};
use folio_core::{AnchorMap, Page, PageOptions, Surface, TargetId, VisualState};

// ── Fake layout ─────────────────────────────────────────────────────

#[derive(Default)]
struct FakeLayout {
    tops: HashMap<String, f32>,
    anchors: HashMap<Anchor, f32>,
    states: HashMap<String, VisualState>,
}

impl FakeLayout {
    /// Four 1000px sections, stacked.
    fn stacked() -> Self {
        let mut layout = Self::default();
        for (anchor, top) in [
            (Anchor::Hero, 0.0),
            (Anchor::Technologies, 1000.0),
            (Anchor::Projects, 2000.0),
            (Anchor::Contact, 3000.0),
        ] {
            layout.anchors.insert(anchor, top);
        }
        layout.tops.insert("technologies.title".into(), 1100.0);
        layout.tops.insert("projects.title".into(), 2100.0);
        layout.tops.insert("contact.title".into(), 3100.0);
        layout
    }

    fn state(&self, target: &TargetId) -> VisualState {
        self.states[target.as_str()]
    }
}

impl Surface for FakeLayout {
    fn top_of(&self, target: &TargetId) -> Option<f32> {
        self.tops.get(target.as_str()).copied()
    }

    fn apply(&mut self, target: &TargetId, state: VisualState) {
        self.states.insert(target.as_str().to_owned(), state);
    }
}

impl AnchorMap for FakeLayout {
    fn anchor_top(&self, anchor: Anchor) -> Option<f32> {
        self.anchors.get(&anchor).copied()
    }
}

fn mounted(options: PageOptions) -> (Page, FakeLayout) {
    let mut layout = FakeLayout::stacked();
    let mut page = Page::new(options);
    page.resize(4000.0, 800.0);
    page.mount(&mut layout, Duration::ZERO);
    (page, layout)
}

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

// ── Mounting ────────────────────────────────────────────────────────

#[test]
fn mount_hides_every_target_and_is_idempotent() {
    let (mut page, mut layout) = mounted(PageOptions::default());
    let registered = page.animator().len();

    assert!(page.is_mounted());
    assert!(registered > 0);
    assert_eq!(layout.state(&targets::HERO_TITLE).opacity, 0.0);
    assert_eq!(layout.state(&targets::TECH_TITLE).opacity, 0.0);
    assert_eq!(layout.state(&TargetId::new("nav")).translate_y, -100.0);

    page.mount(&mut layout, ms(10));
    assert_eq!(page.animator().len(), registered);
}

#[test]
fn hero_title_waits_for_its_delay_then_settles() {
    let (mut page, mut layout) = mounted(PageOptions::default());

    page.tick(ms(200), &mut layout);
    assert_eq!(layout.state(&targets::HERO_TITLE).opacity, 0.0);

    page.tick(ms(3000), &mut layout);
    assert!(layout.state(&targets::HERO_TITLE).is_rest());
    assert!(layout.state(&TargetId::new("nav")).is_rest());
}

#[test]
fn sections_reveal_on_scroll_and_reverse_on_the_way_back() {
    let (mut page, mut layout) = mounted(PageOptions::default());

    // 1100 <= 500 + 800 * 0.8
    page.scroll_by(500.0);
    page.tick(ms(10), &mut layout);
    page.tick(ms(2000), &mut layout);
    assert!(layout.state(&targets::TECH_TITLE).is_rest());
    assert_eq!(layout.state(&targets::PROJECTS_TITLE).opacity, 0.0);

    page.scroll_by(-500.0);
    page.tick(ms(2010), &mut layout);
    page.tick(ms(4000), &mut layout);
    assert_eq!(layout.state(&targets::TECH_TITLE).opacity, 0.0);
}

#[test]
fn reduced_motion_jumps_straight_to_end_states() {
    let options = PageOptions {
        smooth_scroll: false,
        motion: MotionDefaults {
            reduced: true,
            ..MotionDefaults::default()
        },
    };
    let (mut page, mut layout) = mounted(options);

    page.tick(ms(1), &mut layout);
    assert!(layout.state(&targets::HERO_TITLE).is_rest());
    assert!(!page.animator().is_animating());
}

#[test]
fn floating_icons_drift_slower_with_each_index() {
    let periods: Vec<Duration> = hero_reveals()
        .into_iter()
        .filter(|reveal| reveal.trigger == Trigger::Yoyo)
        .map(|reveal| reveal.transition.duration.unwrap())
        .collect();

    assert_eq!(periods, vec![ms(2000), ms(2300), ms(2600)]);
    assert_eq!(drift_period(3), ms(2900));
    assert_eq!(drift_period(10), ms(5000));
}

// ── Navigation ──────────────────────────────────────────────────────

#[test]
fn following_an_anchor_closes_the_menu_and_glides_there() {
    let (mut page, mut layout) = mounted(PageOptions::default());
    page.nav_mut().toggle_menu();

    assert!(page.follow(Anchor::Projects, &layout, ms(0)));
    assert!(!page.nav().is_menu_open());
    assert_eq!(page.scroll_offset(), 0.0);

    page.tick(ms(100), &mut layout);
    let midway = page.scroll_offset();
    assert!(midway > 0.0 && midway < 2000.0);

    page.tick(ms(5000), &mut layout);
    assert_eq!(page.scroll_offset(), 2000.0);
    assert_eq!(page.nav().appearance(), Appearance::Solid);
}

#[test]
fn following_a_missing_anchor_only_closes_the_menu() {
    let (mut page, mut layout) = mounted(PageOptions::default());
    layout.anchors.remove(&Anchor::Contact);
    page.nav_mut().toggle_menu();

    assert!(!page.follow(Anchor::Contact, &layout, ms(0)));
    assert!(!page.nav().is_menu_open());
    assert_eq!(page.scroll_offset(), 0.0);
}

#[test]
fn instant_scroll_without_smooth_option() {
    let options = PageOptions {
        smooth_scroll: false,
        ..PageOptions::default()
    };
    let (mut page, layout) = mounted(options);

    page.follow(Anchor::Technologies, &layout, ms(0));
    assert_eq!(page.scroll_offset(), 1000.0);
    assert!(page.nav().is_scrolled());
}

#[test]
fn nav_turns_solid_past_the_threshold() {
    let (mut page, _layout) = mounted(PageOptions::default());

    page.scroll_by(50.0);
    assert_eq!(page.nav().appearance(), Appearance::Transparent);
    page.scroll_by(1.0);
    assert_eq!(page.nav().appearance(), Appearance::Solid);
}

// ── Teardown ────────────────────────────────────────────────────────

#[test]
fn teardown_releases_every_observer() {
    let (mut page, mut layout) = mounted(PageOptions::default());

    page.teardown();
    assert!(page.animator().is_empty());
    assert!(!page.is_mounted());

    // Scrolling after teardown animates nothing.
    page.scroll_by(500.0);
    page.tick(ms(2000), &mut layout);
    assert_eq!(layout.state(&targets::TECH_TITLE).opacity, 0.0);
}
