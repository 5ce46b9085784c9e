use std::f32::consts::PI;

/// Timing curves. Each maps normalized time `t ∈ [0, 1]` to progress,
/// with `apply(0) == 0` and `apply(1) == 1`. `BackOut` overshoots past 1
/// before settling.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Easing {
    Linear,
    /// Strong deceleration (quartic out).
    #[default]
    Power3Out,
    /// Overshoot-and-settle; the value is the overshoot strength.
    BackOut(f32),
    SineInOut,
}

impl Easing {
    /// The default overshoot strength for [`Easing::BackOut`].
    pub const BACK_OVERSHOOT: f32 = 1.70158;

    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::Power3Out => 1.0 - (1.0 - t).powi(4),
            Self::BackOut(s) => {
                let u = t - 1.0;
                1.0 + (s + 1.0) * u.powi(3) + s * u.powi(2)
            }
            Self::SineInOut => -((PI * t).cos() - 1.0) / 2.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Easing; 5] = [
        Easing::Linear,
        Easing::Power3Out,
        Easing::BackOut(1.7),
        Easing::BackOut(Easing::BACK_OVERSHOOT),
        Easing::SineInOut,
    ];

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    #[test]
    fn endpoints_are_fixed() {
        for easing in ALL {
            assert!(close(easing.apply(0.0), 0.0), "{easing:?} at 0");
            assert!(close(easing.apply(1.0), 1.0), "{easing:?} at 1");
        }
    }

    #[test]
    fn input_is_clamped() {
        assert!(close(Easing::Power3Out.apply(-2.0), 0.0));
        assert!(close(Easing::Power3Out.apply(3.0), 1.0));
    }

    #[test]
    fn power3_out_front_loads_progress() {
        assert!(Easing::Power3Out.apply(0.25) > 0.6);
    }

    #[test]
    fn back_out_overshoots() {
        let peak = (1..100)
            .map(|i| Easing::BackOut(1.7).apply(i as f32 / 100.0))
            .fold(0.0_f32, f32::max);
        assert!(peak > 1.0);
    }

    #[test]
    fn sine_in_out_is_symmetric() {
        assert!(close(Easing::SineInOut.apply(0.5), 0.5));
        assert!(close(
            Easing::SineInOut.apply(0.2),
            1.0 - Easing::SineInOut.apply(0.8)
        ));
    }
}
