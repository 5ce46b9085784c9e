//! Page scroll position with optional smooth (eased) jumps.

use std::time::Duration;

use crate::motion::Easing;

/// How long a smooth jump takes.
pub const SMOOTH_SCROLL_DURATION: Duration = Duration::from_millis(600);

#[derive(Debug, Clone, Copy, PartialEq)]
struct Glide {
    from: f32,
    to: f32,
    start: Duration,
}

/// Scroll offset clamped to `[0, max]`, in CSS px.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollState {
    offset: f32,
    max: f32,
    smooth: bool,
    glide: Option<Glide>,
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollState {
    pub fn new() -> Self {
        Self {
            offset: 0.0,
            max: 0.0,
            smooth: false,
            glide: None,
        }
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    pub fn set_smooth(&mut self, smooth: bool) {
        self.smooth = smooth;
    }

    /// Whether a smooth jump is in flight.
    pub fn is_gliding(&self) -> bool {
        self.glide.is_some()
    }

    /// Update the scrollable range (page height minus viewport height).
    pub fn set_extent(&mut self, page_height: f32, viewport_height: f32) {
        self.max = (page_height - viewport_height).max(0.0);
        self.offset = self.offset.clamp(0.0, self.max);
        if let Some(glide) = &mut self.glide {
            glide.to = glide.to.clamp(0.0, self.max);
        }
    }

    /// Immediate relative scroll (wheel, arrow keys). Cancels a glide.
    pub fn scroll_by(&mut self, delta: f32) {
        self.glide = None;
        self.offset = (self.offset + delta).clamp(0.0, self.max);
    }

    /// Jump to `target`, gliding when smooth scrolling is enabled.
    pub fn scroll_to(&mut self, target: f32, now: Duration) {
        let target = target.clamp(0.0, self.max);
        if self.smooth && (target - self.offset).abs() > f32::EPSILON {
            self.glide = Some(Glide {
                from: self.offset,
                to: target,
                start: now,
            });
        } else {
            self.glide = None;
            self.offset = target;
        }
    }

    /// Advance a glide. Returns whether the offset changed.
    pub fn tick(&mut self, now: Duration) -> bool {
        let Some(glide) = self.glide else {
            return false;
        };
        let elapsed = now.saturating_sub(glide.start).as_secs_f32();
        let t = (elapsed / SMOOTH_SCROLL_DURATION.as_secs_f32()).min(1.0);
        let before = self.offset;
        self.offset = glide.from + (glide.to - glide.from) * Easing::SineInOut.apply(t);
        if t >= 1.0 {
            self.offset = glide.to;
            self.glide = None;
        }
        (self.offset - before).abs() > f32::EPSILON
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn clamps_to_extent() {
        let mut scroll = ScrollState::new();
        scroll.set_extent(2000.0, 500.0);
        scroll.scroll_by(-40.0);
        assert!(close(scroll.offset(), 0.0));
        scroll.scroll_by(5000.0);
        assert!(close(scroll.offset(), 1500.0));

        scroll.set_extent(1000.0, 500.0);
        assert!(close(scroll.offset(), 500.0));
    }

    #[test]
    fn instant_jump_without_smooth() {
        let mut scroll = ScrollState::new();
        scroll.set_extent(3000.0, 500.0);
        scroll.scroll_to(1200.0, ms(0));
        assert!(close(scroll.offset(), 1200.0));
        assert!(!scroll.is_gliding());
    }

    #[test]
    fn smooth_jump_glides_to_target() {
        let mut scroll = ScrollState::new();
        scroll.set_smooth(true);
        scroll.set_extent(3000.0, 500.0);
        scroll.scroll_to(1200.0, ms(100));
        assert!(close(scroll.offset(), 0.0));

        assert!(scroll.tick(ms(400)));
        assert!(close(scroll.offset(), 600.0));

        scroll.tick(ms(700));
        assert!(close(scroll.offset(), 1200.0));
        assert!(!scroll.is_gliding());
        assert!(!scroll.tick(ms(800)));
    }

    #[test]
    fn manual_scroll_cancels_glide() {
        let mut scroll = ScrollState::new();
        scroll.set_smooth(true);
        scroll.set_extent(3000.0, 500.0);
        scroll.scroll_to(1200.0, ms(0));
        scroll.tick(ms(300));
        let at = scroll.offset();
        scroll.scroll_by(16.0);
        assert!(!scroll.is_gliding());
        assert!(close(scroll.offset(), at + 16.0));
    }
}
