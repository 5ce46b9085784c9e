/// Visual properties an animation drives on a target.
///
/// Distances are CSS pixels, `rotate_x` is degrees. The rest state
/// ([`VisualState::REST`]) is fully visible and untransformed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualState {
    pub opacity: f32,
    pub translate_y: f32,
    pub scale: f32,
    pub blur: f32,
    pub rotate_x: f32,
}

impl VisualState {
    pub const REST: Self = Self {
        opacity: 1.0,
        translate_y: 0.0,
        scale: 1.0,
        blur: 0.0,
        rotate_x: 0.0,
    };

    /// Fully transparent, otherwise at rest.
    pub const HIDDEN: Self = Self {
        opacity: 0.0,
        ..Self::REST
    };

    pub const fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    pub const fn with_y(mut self, translate_y: f32) -> Self {
        self.translate_y = translate_y;
        self
    }

    pub const fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    pub const fn with_blur(mut self, blur: f32) -> Self {
        self.blur = blur;
        self
    }

    pub const fn with_rotate_x(mut self, rotate_x: f32) -> Self {
        self.rotate_x = rotate_x;
        self
    }

    /// Interpolate toward `to`. `t` is eased progress and may leave
    /// `[0, 1]` for overshooting curves; opacity and blur stay clamped.
    pub fn lerp(&self, to: &Self, t: f32) -> Self {
        let mix = |a: f32, b: f32| a + (b - a) * t;
        Self {
            opacity: mix(self.opacity, to.opacity).clamp(0.0, 1.0),
            translate_y: mix(self.translate_y, to.translate_y),
            scale: mix(self.scale, to.scale),
            blur: mix(self.blur, to.blur).max(0.0),
            rotate_x: mix(self.rotate_x, to.rotate_x),
        }
    }

    pub fn is_rest(&self) -> bool {
        *self == Self::REST
    }
}

impl Default for VisualState {
    fn default() -> Self {
        Self::REST
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn lerp_endpoints() {
        let from = VisualState::HIDDEN.with_y(60.0).with_blur(10.0);
        assert_eq!(from.lerp(&VisualState::REST, 0.0), from);
        assert_eq!(from.lerp(&VisualState::REST, 1.0), VisualState::REST);
    }

    #[test]
    fn lerp_midpoint() {
        let from = VisualState::HIDDEN.with_y(40.0);
        let mid = from.lerp(&VisualState::REST, 0.5);
        assert!((mid.opacity - 0.5).abs() < f32::EPSILON);
        assert!((mid.translate_y - 20.0).abs() < f32::EPSILON);
    }

    #[test]
    fn overshoot_keeps_opacity_in_range() {
        let from = VisualState::HIDDEN.with_scale(0.8);
        let over = from.lerp(&VisualState::REST, 1.1);
        assert!((over.opacity - 1.0).abs() < f32::EPSILON);
        assert!(over.scale > 1.0);
    }
}
