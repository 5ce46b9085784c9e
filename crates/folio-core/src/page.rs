//! Page composition: global motion setup, per-section choreography, scroll,
//! and teardown.

use std::time::Duration;

use tracing::{debug, info};

use crate::content::{Anchor, EXTRA_SKILLS, FLOATING_ICONS, PROJECTS, SOCIAL_LINKS, TECH_CATEGORIES};
use crate::motion::{
    Easing, MotionDefaults, Reveal, RevealAnimator, Surface, TargetId, Transition, Trigger,
    Viewport, VisualState,
};
use crate::nav::{Document, NAV_TARGET, NavBar};
use crate::scroll::ScrollState;

// ── Animation targets ───────────────────────────────────────────────

pub mod targets {
    use crate::motion::TargetId;

    pub const HERO_TITLE: TargetId = TargetId::new("hero.title");
    pub const HERO_SUBTITLE: TargetId = TargetId::new("hero.subtitle");
    pub const HERO_DESCRIPTION: TargetId = TargetId::new("hero.description");
    pub const HERO_BUTTON: &str = "hero.button";
    pub const HERO_SOCIAL: &str = "hero.social";
    pub const HERO_FLOAT: &str = "hero.float";

    pub const TECH_TITLE: TargetId = TargetId::new("technologies.title");
    pub const TECH_CARD: &str = "technologies.card";
    pub const TECH_EXTRA: &str = "technologies.extra";

    pub const PROJECTS_TITLE: TargetId = TargetId::new("projects.title");
    pub const PROJECT_CARD: &str = "projects.card";

    pub const CONTACT_TITLE: TargetId = TargetId::new("contact.title");
    pub const CONTACT_CONTENT: TargetId = TargetId::new("contact.content");
}

/// Number of primary buttons under the hero copy.
const HERO_BUTTONS: usize = 2;

const DRIFT_BASE: Duration = Duration::from_millis(2000);
const DRIFT_STEP: Duration = Duration::from_millis(300);

fn secs(s: f32) -> Duration {
    Duration::from_secs_f32(s)
}

/// One up-and-down cycle of floating icon `index`. Each icon is slower
/// than the one before it so the drift never lines up.
pub fn drift_period(index: usize) -> Duration {
    let step = u32::try_from(index).unwrap_or(u32::MAX);
    DRIFT_BASE.saturating_add(DRIFT_STEP.saturating_mul(step))
}

fn indexed(base: &str, count: usize) -> Vec<TargetId> {
    (0..count).map(|i| TargetId::indexed(base, i)).collect()
}

// ── Choreography ────────────────────────────────────────────────────

/// Time-triggered hero entrance plus the looping background icons.
pub fn hero_reveals() -> Vec<Reveal> {
    let mut reveals = vec![
        Reveal::new(
            Trigger::Mount,
            Transition::reveal(VisualState::HIDDEN.with_y(60.0).with_blur(10.0))
                .over(secs(1.2))
                .after(secs(0.3)),
        )
        .target(targets::HERO_TITLE),
        Reveal::new(
            Trigger::Mount,
            Transition::reveal(VisualState::HIDDEN.with_y(40.0)).after(secs(0.6)),
        )
        .target(targets::HERO_SUBTITLE),
        Reveal::new(
            Trigger::Mount,
            Transition::reveal(VisualState::HIDDEN.with_y(30.0)).after(secs(0.8)),
        )
        .target(targets::HERO_DESCRIPTION),
        Reveal::new(
            Trigger::Mount,
            Transition::reveal(VisualState::HIDDEN.with_y(20.0))
                .over(secs(0.8))
                .after(secs(1.0)),
        )
        .targets(indexed(targets::HERO_BUTTON, HERO_BUTTONS))
        .stagger(secs(0.1)),
        Reveal::new(
            Trigger::Mount,
            Transition::reveal(VisualState::HIDDEN.with_scale(0.8))
                .over(secs(0.6))
                .eased(Easing::BackOut(1.7))
                .after(secs(1.2)),
        )
        .targets(indexed(targets::HERO_SOCIAL, SOCIAL_LINKS.len()))
        .stagger(secs(0.1)),
    ];

    reveals.extend((0..FLOATING_ICONS.len()).map(|i| {
        Reveal::new(
            Trigger::Yoyo,
            Transition::reveal(VisualState::REST)
                .to(VisualState::REST.with_y(15.0))
                .over(drift_period(i))
                .eased(Easing::SineInOut),
        )
        .target(TargetId::indexed(targets::HERO_FLOAT, i))
    }));

    reveals
}

pub fn technologies_reveals() -> Vec<Reveal> {
    vec![
        Reveal::new(
            Trigger::Viewport { start: 0.8 },
            Transition::reveal(VisualState::HIDDEN.with_y(50.0)),
        )
        .target(targets::TECH_TITLE),
        Reveal::new(
            Trigger::Viewport { start: 0.85 },
            Transition::reveal(VisualState::HIDDEN.with_y(60.0).with_rotate_x(15.0))
                .over(secs(0.8)),
        )
        .targets(indexed(targets::TECH_CARD, TECH_CATEGORIES.len()))
        .stagger(secs(0.15)),
        Reveal::new(
            Trigger::Viewport { start: 0.9 },
            Transition::reveal(VisualState::HIDDEN.with_scale(0.9))
                .over(secs(0.6))
                .eased(Easing::BackOut(1.7)),
        )
        .targets(indexed(targets::TECH_EXTRA, EXTRA_SKILLS.len()))
        .stagger(secs(0.1)),
    ]
}

pub fn projects_reveals() -> Vec<Reveal> {
    vec![
        Reveal::new(
            Trigger::Viewport { start: 0.8 },
            Transition::reveal(VisualState::HIDDEN.with_y(50.0)),
        )
        .target(targets::PROJECTS_TITLE),
        Reveal::new(
            Trigger::Viewport { start: 0.85 },
            Transition::reveal(VisualState::HIDDEN.with_y(80.0).with_scale(0.95))
                .over(secs(0.9)),
        )
        .targets(indexed(targets::PROJECT_CARD, PROJECTS.len()))
        .stagger(secs(0.2)),
    ]
}

pub fn contact_reveals() -> Vec<Reveal> {
    vec![
        Reveal::new(
            Trigger::Viewport { start: 0.8 },
            Transition::reveal(VisualState::HIDDEN.with_y(50.0)),
        )
        .target(targets::CONTACT_TITLE),
        Reveal::new(
            Trigger::Viewport { start: 0.8 },
            Transition::reveal(VisualState::HIDDEN.with_y(60.0)),
        )
        .target(targets::CONTACT_CONTENT),
    ]
}

// ── Page ────────────────────────────────────────────────────────────

/// Where each section starts, in page coordinates.
pub trait AnchorMap {
    fn anchor_top(&self, anchor: Anchor) -> Option<f32>;
}

/// Global preferences installed on mount.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageOptions {
    pub smooth_scroll: bool,
    pub motion: MotionDefaults,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            smooth_scroll: true,
            motion: MotionDefaults::default(),
        }
    }
}

/// [`Document`] over a layout's anchors, scrolling through [`ScrollState`].
struct PageDocument<'a, M> {
    anchors: &'a M,
    scroll: &'a mut ScrollState,
    now: Duration,
}

impl<M: AnchorMap> Document for PageDocument<'_, M> {
    fn contains(&self, anchor: Anchor) -> bool {
        self.anchors.anchor_top(anchor).is_some()
    }

    fn scroll_into_view(&mut self, anchor: Anchor) {
        if let Some(top) = self.anchors.anchor_top(anchor) {
            self.scroll.scroll_to(top, self.now);
        }
    }
}

/// The single page: navigation, sections, scroll, and their observers.
#[derive(Debug)]
pub struct Page {
    nav: NavBar,
    scroll: ScrollState,
    animator: RevealAnimator,
    options: PageOptions,
    viewport_height: f32,
    mounted: bool,
}

impl Page {
    pub fn new(options: PageOptions) -> Self {
        Self {
            nav: NavBar::new(),
            scroll: ScrollState::new(),
            animator: RevealAnimator::new(options.motion),
            options,
            viewport_height: 0.0,
            mounted: false,
        }
    }

    /// Install global preferences and register every section's animations.
    /// Calling it again while mounted does nothing.
    pub fn mount(&mut self, surface: &mut impl Surface, now: Duration) {
        if self.mounted {
            return;
        }
        self.scroll.set_smooth(self.options.smooth_scroll);
        self.animator.set_defaults(self.options.motion);

        self.animator
            .register(NAV_TARGET, &NavBar::entrance(), surface, now);

        let sections: [(&'static str, Vec<Reveal>); 4] = [
            ("hero", hero_reveals()),
            ("technologies", technologies_reveals()),
            ("projects", projects_reveals()),
            ("contact", contact_reveals()),
        ];
        for (scope, reveals) in sections {
            for reveal in &reveals {
                self.animator.register(scope, reveal, surface, now);
            }
        }

        self.mounted = true;
        info!(observers = self.animator.len(), "page mounted");
    }

    /// Release every observer and restore default scrolling.
    pub fn teardown(&mut self) {
        self.animator.release_all();
        self.scroll.set_smooth(false);
        self.mounted = false;
        debug!("page torn down");
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    // ── Scrolling ────────────────────────────────────────────────────

    /// New page and viewport heights (CSS px).
    pub fn resize(&mut self, page_height: f32, viewport_height: f32) {
        self.viewport_height = viewport_height;
        self.scroll.set_extent(page_height, viewport_height);
        self.nav.on_scroll(self.scroll.offset());
    }

    pub fn scroll_by(&mut self, delta: f32) {
        self.scroll.scroll_by(delta);
        self.nav.on_scroll(self.scroll.offset());
    }

    /// Follow an in-page link through the navigation bar.
    pub fn follow(&mut self, anchor: Anchor, anchors: &impl AnchorMap, now: Duration) -> bool {
        let mut document = PageDocument {
            anchors,
            scroll: &mut self.scroll,
            now,
        };
        let followed = self.nav.click(anchor, &mut document);
        self.nav.on_scroll(self.scroll.offset());
        followed
    }

    pub fn scroll_offset(&self) -> f32 {
        self.scroll.offset()
    }

    pub fn viewport(&self) -> Viewport {
        Viewport {
            scroll_offset: self.scroll.offset(),
            height: self.viewport_height,
        }
    }

    // ── Clock ────────────────────────────────────────────────────────

    /// Advance scroll glides, evaluate triggers, and step animations.
    pub fn tick(&mut self, now: Duration, surface: &mut impl Surface) {
        if self.scroll.tick(now) {
            self.nav.on_scroll(self.scroll.offset());
        }
        if !self.mounted {
            return;
        }
        self.animator.observe(self.viewport(), surface, now);
        self.animator.tick(now, surface);
    }

    // ── Accessors ────────────────────────────────────────────────────

    pub fn nav(&self) -> &NavBar {
        &self.nav
    }

    pub fn nav_mut(&mut self) -> &mut NavBar {
        &mut self.nav
    }

    pub fn animator(&self) -> &RevealAnimator {
        &self.animator
    }

    pub fn options(&self) -> PageOptions {
        self.options
    }
}
