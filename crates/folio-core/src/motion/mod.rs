//! Headless motion engine.
//!
//! - **[`RevealAnimator`]** owns every registered animation ("observer"),
//!   evaluates viewport triggers against a scroll position, and advances
//!   tweens against a caller-supplied clock. It never renders anything.
//!
//! - **[`Surface`]** is the capability the animator drives: it reports where
//!   a target sits on the page and receives the sampled [`VisualState`]. The
//!   terminal layout implements it for real; tests use an in-memory fake.
//!
//! Time is a `Duration` since an arbitrary epoch (the app's start), so the
//! engine runs the same under a paused test clock as in the event loop.

mod animator;
mod easing;
mod state;

use std::borrow::Cow;
use std::fmt;
use std::time::Duration;

pub use animator::{ObserverId, RevealAnimator};
pub use easing::Easing;
pub use state::VisualState;

// ── Targets & surface ───────────────────────────────────────────────

/// Identifies an animated element on the rendering surface.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TargetId(Cow<'static, str>);

impl TargetId {
    pub const fn new(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    /// `base.index`, for members of a repeated group.
    pub fn indexed(base: &str, index: usize) -> Self {
        Self(Cow::Owned(format!("{base}.{index}")))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&'static str> for TargetId {
    fn from(name: &'static str) -> Self {
        Self::new(name)
    }
}

impl From<String> for TargetId {
    fn from(name: String) -> Self {
        Self(Cow::Owned(name))
    }
}

impl fmt::Display for TargetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// What the animator needs from whatever draws the page.
///
/// Unknown targets are not an error: `top_of` returns `None` and `apply`
/// ignores them.
pub trait Surface {
    /// Top edge of `target` in page coordinates (CSS px from page top).
    fn top_of(&self, target: &TargetId) -> Option<f32>;

    /// Set the current visual state of `target`.
    fn apply(&mut self, target: &TargetId, state: VisualState);
}

/// Scroll position and visible height, in CSS px.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub scroll_offset: f32,
    pub height: f32,
}

// ── Animation descriptions ──────────────────────────────────────────

/// Duration and easing applied where a transition leaves them unset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionDefaults {
    pub duration: Duration,
    pub easing: Easing,
    /// Jump straight to end states, skipping delays and tweening.
    pub reduced: bool,
}

impl Default for MotionDefaults {
    fn default() -> Self {
        Self {
            duration: Duration::from_secs(1),
            easing: Easing::Power3Out,
            reduced: false,
        }
    }
}

/// A from→to tween.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub from: VisualState,
    pub to: VisualState,
    pub duration: Option<Duration>,
    pub easing: Option<Easing>,
    /// Wait before forward playback. Reverse playback starts at once.
    pub delay: Duration,
}

impl Transition {
    /// Tween from `from` to the rest state.
    pub const fn reveal(from: VisualState) -> Self {
        Self {
            from,
            to: VisualState::REST,
            duration: None,
            easing: None,
            delay: Duration::ZERO,
        }
    }

    pub const fn to(mut self, to: VisualState) -> Self {
        self.to = to;
        self
    }

    pub const fn over(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    pub const fn eased(mut self, easing: Easing) -> Self {
        self.easing = Some(easing);
        self
    }

    pub const fn after(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

/// When an observer plays.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Trigger {
    /// Plays once, `delay` after registration.
    Mount,
    /// Plays forward when the target's top edge reaches `start` of the
    /// viewport height ("top 80%" is `0.8`), reverses when it scrolls back
    /// below that line. Scrolling past it further does nothing.
    Viewport { start: f32 },
    /// Repeats forever, alternating direction every cycle.
    Yoyo,
}

/// A transition bound to one or more targets under a single trigger.
///
/// Each target gets its own observer; target `i` waits an extra
/// `i * stagger` before playing forward.
#[derive(Debug, Clone, PartialEq)]
pub struct Reveal {
    pub targets: Vec<TargetId>,
    pub transition: Transition,
    pub trigger: Trigger,
    pub stagger: Duration,
}

impl Reveal {
    pub fn new(trigger: Trigger, transition: Transition) -> Self {
        Self {
            targets: Vec::new(),
            transition,
            trigger,
            stagger: Duration::ZERO,
        }
    }

    pub fn target(mut self, target: impl Into<TargetId>) -> Self {
        self.targets.push(target.into());
        self
    }

    pub fn targets<I, T>(mut self, targets: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<TargetId>,
    {
        self.targets.extend(targets.into_iter().map(Into::into));
        self
    }

    pub fn stagger(mut self, step: Duration) -> Self {
        self.stagger = step;
        self
    }
}
