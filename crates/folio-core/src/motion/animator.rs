// Observer registry and tween clock.

use std::time::Duration;

use tracing::{debug, trace};

use super::{Easing, MotionDefaults, Reveal, Surface, TargetId, Trigger, Viewport, VisualState};

/// Handle to one registered observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObserverId(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Forward,
    Reverse,
}

#[derive(Debug, Clone, Copy)]
struct Tween {
    direction: Direction,
    /// Clock time the playhead starts moving (delay already added).
    start: Duration,
    /// Progress when the tween was started.
    origin: f32,
}

#[derive(Debug)]
struct Observer {
    id: ObserverId,
    scope: &'static str,
    target: TargetId,
    from: VisualState,
    to: VisualState,
    duration: Duration,
    easing: Easing,
    delay: Duration,
    trigger: Trigger,
    /// Viewport triggers: whether the start line has been crossed.
    active: bool,
    /// Linear progress in `[0, 1]` before easing.
    progress: f32,
    tween: Option<Tween>,
}

impl Observer {
    fn state_at(&self, progress: f32) -> VisualState {
        self.from.lerp(&self.to, self.easing.apply(progress))
    }

    fn play(&mut self, now: Duration) {
        // Delay only applies when starting from the beginning.
        let start = if self.progress <= 0.0 {
            now + self.delay
        } else {
            now
        };
        self.tween = Some(Tween {
            direction: Direction::Forward,
            start,
            origin: self.progress,
        });
    }

    fn reverse(&mut self, now: Duration) {
        self.tween = Some(Tween {
            direction: Direction::Reverse,
            start: now,
            origin: self.progress,
        });
    }

    /// Advance to `now`. Returns `false` once the tween has finished.
    fn advance(&mut self, tween: Tween, now: Duration) -> bool {
        let elapsed = now.saturating_sub(tween.start);
        let span = self.duration.as_secs_f32();

        if self.trigger == Trigger::Yoyo {
            if now < tween.start || span <= 0.0 {
                return true;
            }
            let cycles = elapsed.as_secs_f32() / span;
            let frac = cycles.fract();
            // Even cycles run forward, odd cycles run back.
            self.progress = if cycles.trunc() % 2.0 == 0.0 {
                frac
            } else {
                1.0 - frac
            };
            return true;
        }

        let step = if span <= 0.0 {
            1.0
        } else {
            elapsed.as_secs_f32() / span
        };
        match tween.direction {
            Direction::Forward => {
                self.progress = (tween.origin + step).min(1.0);
                self.progress < 1.0
            }
            Direction::Reverse => {
                self.progress = (tween.origin - step).max(0.0);
                self.progress > 0.0
            }
        }
    }
}

/// Registry of reveal observers.
#[derive(Debug, Default)]
pub struct RevealAnimator {
    defaults: MotionDefaults,
    observers: Vec<Observer>,
    next_id: u64,
}

impl RevealAnimator {
    pub fn new(defaults: MotionDefaults) -> Self {
        Self {
            defaults,
            observers: Vec::new(),
            next_id: 0,
        }
    }

    pub fn defaults(&self) -> MotionDefaults {
        self.defaults
    }

    /// Replace the defaults used by later registrations.
    pub fn set_defaults(&mut self, defaults: MotionDefaults) {
        self.defaults = defaults;
    }

    // ── Registration ─────────────────────────────────────────────────

    /// Register one observer per target in `reveal` under `scope`.
    ///
    /// Every target is set to the from-state immediately. Mount and yoyo
    /// triggers start their clock now; viewport triggers wait for
    /// [`observe`](Self::observe).
    pub fn register(
        &mut self,
        scope: &'static str,
        reveal: &Reveal,
        surface: &mut impl Surface,
        now: Duration,
    ) -> Vec<ObserverId> {
        let transition = reveal.transition;
        let reduced = self.defaults.reduced;
        let duration = if reduced {
            Duration::ZERO
        } else {
            transition.duration.unwrap_or(self.defaults.duration)
        };
        let easing = transition.easing.unwrap_or(self.defaults.easing);

        let mut ids = Vec::with_capacity(reveal.targets.len());
        for (index, target) in reveal.targets.iter().enumerate() {
            let id = ObserverId(self.next_id);
            self.next_id += 1;

            let delay = if reduced {
                Duration::ZERO
            } else {
                transition.delay + reveal.stagger * u32::try_from(index).unwrap_or(u32::MAX)
            };

            let mut observer = Observer {
                id,
                scope,
                target: target.clone(),
                from: transition.from,
                to: transition.to,
                duration,
                easing,
                delay,
                trigger: reveal.trigger,
                active: false,
                progress: 0.0,
                tween: None,
            };

            surface.apply(&observer.target, observer.from);
            let autoplay = match reveal.trigger {
                Trigger::Mount => true,
                // Reduced motion holds loops at their from-state.
                Trigger::Yoyo => !reduced,
                Trigger::Viewport { .. } => false,
            };
            if autoplay {
                observer.active = true;
                observer.play(now);
            }

            trace!(scope, element = %observer.target, ?delay, "observer registered");
            self.observers.push(observer);
            ids.push(id);
        }
        ids
    }

    // ── Triggers & clock ─────────────────────────────────────────────

    /// Evaluate viewport triggers against the current scroll position.
    pub fn observe(&mut self, viewport: Viewport, surface: &impl Surface, now: Duration) {
        for observer in &mut self.observers {
            let Trigger::Viewport { start } = observer.trigger else {
                continue;
            };
            let Some(top) = surface.top_of(&observer.target) else {
                continue;
            };

            let line = viewport.scroll_offset + viewport.height * start;
            let inside = top <= line;
            if inside == observer.active {
                continue;
            }

            observer.active = inside;
            if inside {
                debug!(element = %observer.target, "reveal play");
                observer.play(now);
            } else {
                debug!(element = %observer.target, "reveal reverse");
                observer.reverse(now);
            }
        }
    }

    /// Advance running tweens to `now` and push their states to `surface`.
    pub fn tick(&mut self, now: Duration, surface: &mut impl Surface) {
        for observer in &mut self.observers {
            let Some(tween) = observer.tween else {
                continue;
            };
            let running = observer.advance(tween, now);
            surface.apply(&observer.target, observer.state_at(observer.progress));
            if !running {
                observer.tween = None;
            }
        }
    }

    // ── Teardown ─────────────────────────────────────────────────────

    /// Drop one observer. Returns `false` if it was already gone.
    pub fn release(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|o| o.id != id);
        self.observers.len() != before
    }

    /// Drop every observer registered under `scope`. Returns how many.
    pub fn release_scope(&mut self, scope: &str) -> usize {
        let before = self.observers.len();
        self.observers.retain(|o| o.scope != scope);
        before - self.observers.len()
    }

    /// Drop every observer.
    pub fn release_all(&mut self) {
        debug!(count = self.observers.len(), "releasing all observers");
        self.observers.clear();
    }

    // ── Introspection ────────────────────────────────────────────────

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    /// Whether any finite tween is still running. Loops don't count.
    pub fn is_animating(&self) -> bool {
        self.observers
            .iter()
            .any(|o| o.tween.is_some() && o.trigger != Trigger::Yoyo)
    }

    /// Linear progress of an observer, if it still exists.
    pub fn progress(&self, id: ObserverId) -> Option<f32> {
        self.observers
            .iter()
            .find(|o| o.id == id)
            .map(|o| o.progress)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use std::collections::HashMap;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::motion::Transition;

    /// In-memory surface: fixed element positions plus the last applied state.
    #[derive(Default)]
    struct FakeSurface {
        tops: HashMap<TargetId, f32>,
        states: HashMap<TargetId, VisualState>,
        applies: usize,
    }

    impl FakeSurface {
        fn with(targets: &[(&'static str, f32)]) -> Self {
            Self {
                tops: targets
                    .iter()
                    .map(|(name, top)| (TargetId::new(name), *top))
                    .collect(),
                ..Self::default()
            }
        }

        fn state(&self, name: &'static str) -> VisualState {
            self.states[&TargetId::new(name)]
        }
    }

    impl Surface for FakeSurface {
        fn top_of(&self, target: &TargetId) -> Option<f32> {
            self.tops.get(target).copied()
        }

        fn apply(&mut self, target: &TargetId, state: VisualState) {
            self.applies += 1;
            self.states.insert(target.clone(), state);
        }
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn viewport(scroll: f32) -> Viewport {
        Viewport {
            scroll_offset: scroll,
            height: 1000.0,
        }
    }

    fn title_reveal() -> Reveal {
        Reveal::new(
            Trigger::Viewport { start: 0.8 },
            Transition::reveal(VisualState::HIDDEN.with_y(50.0)).over(ms(1000)),
        )
        .target("section.title")
    }

    #[test]
    fn registration_applies_from_state() {
        let mut surface = FakeSurface::with(&[("section.title", 1500.0)]);
        let mut animator = RevealAnimator::default();
        animator.register("section", &title_reveal(), &mut surface, ms(0));

        assert_eq!(
            surface.state("section.title"),
            VisualState::HIDDEN.with_y(50.0)
        );
        assert!(!animator.is_animating());
    }

    #[test]
    fn viewport_reveal_plays_then_reverses() {
        let mut surface = FakeSurface::with(&[("section.title", 1500.0)]);
        let mut animator = RevealAnimator::default();
        let ids = animator.register("section", &title_reveal(), &mut surface, ms(0));

        // Line at 0 + 800: not yet.
        animator.observe(viewport(0.0), &surface, ms(0));
        animator.tick(ms(500), &mut surface);
        assert_eq!(animator.progress(ids[0]), Some(0.0));

        // Line at 800 + 800 = 1600 >= 1500: play.
        animator.observe(viewport(800.0), &surface, ms(1000));
        animator.tick(ms(1500), &mut surface);
        let mid = surface.state("section.title");
        assert!(mid.opacity > 0.0 && mid.opacity < 1.0);

        animator.tick(ms(2000), &mut surface);
        assert_eq!(surface.state("section.title"), VisualState::REST);
        assert!(!animator.is_animating());

        // Scrolling further down doesn't replay.
        animator.observe(viewport(3000.0), &surface, ms(2100));
        assert!(!animator.is_animating());

        // Back above the line: reverse to the from-state.
        animator.observe(viewport(0.0), &surface, ms(3000));
        animator.tick(ms(4000), &mut surface);
        assert_eq!(
            surface.state("section.title"),
            VisualState::HIDDEN.with_y(50.0)
        );
    }

    #[test]
    fn reverse_midway_starts_from_current_progress() {
        let mut surface = FakeSurface::with(&[("section.title", 100.0)]);
        let mut animator = RevealAnimator::default();
        let ids = animator.register("section", &title_reveal(), &mut surface, ms(0));

        animator.observe(viewport(0.0), &surface, ms(0));
        animator.tick(ms(400), &mut surface);
        let reached = animator.progress(ids[0]).unwrap();
        assert!((reached - 0.4).abs() < 1e-3);

        animator.observe(
            Viewport {
                scroll_offset: 0.0,
                height: 100.0,
            },
            &surface,
            ms(400),
        );
        animator.tick(ms(600), &mut surface);
        let back = animator.progress(ids[0]).unwrap();
        assert!((back - 0.2).abs() < 1e-3, "got {back}");
    }

    #[test]
    fn stagger_offsets_each_target() {
        let mut surface = FakeSurface::with(&[("card.0", 0.0), ("card.1", 0.0), ("card.2", 0.0)]);
        let mut animator = RevealAnimator::default();
        let reveal = Reveal::new(
            Trigger::Viewport { start: 0.85 },
            Transition::reveal(VisualState::HIDDEN.with_y(60.0)).over(ms(800)),
        )
        .targets(["card.0", "card.1", "card.2"])
        .stagger(ms(150));
        let ids = animator.register("cards", &reveal, &mut surface, ms(0));

        animator.observe(viewport(0.0), &surface, ms(0));
        animator.tick(ms(150), &mut surface);
        assert!(animator.progress(ids[0]).unwrap() > 0.0);
        assert_eq!(animator.progress(ids[1]), Some(0.0));
        assert_eq!(animator.progress(ids[2]), Some(0.0));

        animator.tick(ms(300), &mut surface);
        assert!(animator.progress(ids[1]).unwrap() > 0.0);
        assert_eq!(animator.progress(ids[2]), Some(0.0));

        animator.tick(ms(300 + 800), &mut surface);
        assert_eq!(animator.progress(ids[2]), Some(1.0));
    }

    #[test]
    fn mount_trigger_waits_for_delay() {
        let mut surface = FakeSurface::default();
        let mut animator = RevealAnimator::default();
        let reveal = Reveal::new(
            Trigger::Mount,
            Transition::reveal(VisualState::HIDDEN.with_y(-100.0)).after(ms(500)),
        )
        .target("nav");
        let ids = animator.register("nav", &reveal, &mut surface, ms(0));

        animator.tick(ms(400), &mut surface);
        assert_eq!(animator.progress(ids[0]), Some(0.0));
        assert!(surface.state("nav").opacity.abs() < f32::EPSILON);

        // Default duration is one second.
        animator.tick(ms(1500), &mut surface);
        assert_eq!(surface.state("nav"), VisualState::REST);
        assert!(!animator.is_animating());
    }

    #[test]
    fn yoyo_alternates_direction() {
        let mut surface = FakeSurface::default();
        let mut animator = RevealAnimator::default();
        let reveal = Reveal::new(
            Trigger::Yoyo,
            Transition::reveal(VisualState::REST)
                .to(VisualState::REST.with_y(15.0))
                .over(ms(2000))
                .eased(Easing::Linear),
        )
        .target("float.0");
        animator.register("hero", &reveal, &mut surface, ms(0));

        animator.tick(ms(1000), &mut surface);
        assert!((surface.state("float.0").translate_y - 7.5).abs() < 1e-3);
        animator.tick(ms(2000), &mut surface);
        assert!((surface.state("float.0").translate_y - 15.0).abs() < 1e-3);
        animator.tick(ms(3000), &mut surface);
        assert!((surface.state("float.0").translate_y - 7.5).abs() < 1e-3);
        animator.tick(ms(4000), &mut surface);
        assert!(surface.state("float.0").translate_y.abs() < 1e-3);
        assert!(!animator.is_animating());
    }

    #[test]
    fn reduced_motion_jumps_to_end() {
        let mut surface = FakeSurface::with(&[("section.title", 0.0)]);
        let mut animator = RevealAnimator::new(MotionDefaults {
            reduced: true,
            ..MotionDefaults::default()
        });
        animator.register("section", &title_reveal(), &mut surface, ms(0));
        animator.observe(viewport(0.0), &surface, ms(0));
        animator.tick(ms(0), &mut surface);
        assert_eq!(surface.state("section.title"), VisualState::REST);
    }

    #[test]
    fn missing_target_is_ignored() {
        let mut surface = FakeSurface::default();
        let mut animator = RevealAnimator::default();
        let ids = animator.register("section", &title_reveal(), &mut surface, ms(0));
        animator.observe(viewport(10_000.0), &surface, ms(0));
        animator.tick(ms(5000), &mut surface);
        assert_eq!(animator.progress(ids[0]), Some(0.0));
    }

    #[test]
    fn release_scope_and_all() {
        let mut surface = FakeSurface::with(&[("section.title", 0.0)]);
        let mut animator = RevealAnimator::default();
        let a = animator.register("a", &title_reveal(), &mut surface, ms(0));
        animator.register("b", &title_reveal(), &mut surface, ms(0));
        animator.register("b", &title_reveal(), &mut surface, ms(0));
        assert_eq!(animator.len(), 3);

        assert!(animator.release(a[0]));
        assert!(!animator.release(a[0]));
        assert_eq!(animator.release_scope("b"), 2);
        assert!(animator.is_empty());

        animator.register("c", &title_reveal(), &mut surface, ms(0));
        animator.release_all();
        assert!(animator.is_empty());

        let applied = surface.applies;
        animator.observe(viewport(0.0), &surface, ms(0));
        animator.tick(ms(10_000), &mut surface);
        assert_eq!(surface.applies, applied);
    }
}
