use std::time::Duration;

use rubik3_core::QUARTER_TURN_DEGREES;
use serde::{Deserialize, Serialize};

pub use interpolation::InterpolateFn;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AnimationPreferences {
    /// Angle that a turn advances by on each tick of the clock.
    pub degrees_per_tick: f32,
    /// Real time between ticks.
    pub tick_interval_ms: u64,
    /// Easing applied to the displayed angle. Does not affect when a turn is
    /// committed.
    pub twist_interpolation: InterpolateFn,
}
impl Default for AnimationPreferences {
    fn default() -> Self {
        Self {
            degrees_per_tick: 5.0,
            tick_interval_ms: 16,
            twist_interpolation: InterpolateFn::Lerp,
        }
    }
}
impl AnimationPreferences {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
    /// Returns the number of ticks needed to complete one turn.
    pub fn ticks_per_turn(&self) -> u32 {
        (QUARTER_TURN_DEGREES / self.degrees_per_tick).ceil() as u32
    }

    pub fn validate(&self) -> eyre::Result<()> {
        if !(self.degrees_per_tick.is_finite() && self.degrees_per_tick > 0.0) {
            eyre::bail!(
                "degrees_per_tick must be positive, not {}",
                self.degrees_per_tick,
            );
        }
        if self.tick_interval_ms == 0 {
            eyre::bail!("tick_interval_ms must be nonzero");
        }
        Ok(())
    }
}

pub mod interpolation {
    //! Interpolation functions.

    use std::f32::consts::PI;

    use serde::{Deserialize, Serialize};
    use strum::VariantArray;

    /// Function that maps a float from the range 0.0 to 1.0 to another float
    /// from 0.0 to 1.0.
    #[derive(
        Serialize, Deserialize, Debug, Default, Copy, Clone, PartialEq, Eq, Hash, VariantArray,
    )]
    #[serde(rename_all = "snake_case")]
    pub enum InterpolateFn {
        #[default]
        Lerp,
        Cosine,
        Cubic,
        Circular,
        Bounce,
        Overshoot,
        Underdamped,
        CriticallyDamped,
        CriticallyDried,
    }

    impl InterpolateFn {
        /// Returns the interpolation value in the range [0, 1] for `t` in the
        /// range [0, 1].
        pub fn interpolate(self, mut t: f32) -> f32 {
            match self {
                Self::Lerp => t,

                Self::Cosine => (1.0 - (t * PI).cos()) / 2.0,

                Self::Cubic => (3.0 - 2.0 * t) * t * t,

                Self::Circular => {
                    if t < 0.5 {
                        (1.0 - (1.0 - (2.0 * t).powf(2.0)).sqrt()) * 0.5
                    } else {
                        (1.0 + (1.0 - (-2.0 * t + 2.0).powf(2.0)).sqrt()) * 0.5
                    }
                }

                Self::Bounce => {
                    // https://easings.net/#easeOutBounce
                    let n1 = 7.5625;
                    let d1 = 2.75;

                    if t < 1.0 / d1 {
                        n1 * t * t
                    } else if t < 2.0 / d1 {
                        t -= 1.5 / d1;
                        n1 * t * t + 0.75
                    } else if t < 2.5 / d1 {
                        t -= 2.25 / d1;
                        n1 * t * t + 0.9375
                    } else {
                        t -= 2.625 / d1;
                        n1 * t * t + 0.984375
                    }
                }
                Self::Overshoot => {
                    // https://easings.net/#easeOutBack
                    let c1 = 1.70158;
                    let c3 = c1 + 1.0;
                    1.0 + c3 * (t - 1.0).powf(3.0) + c1 * (t - 1.0).powf(2.0)
                }
                Self::Underdamped => {
                    // https://easings.net/#easeOutElastic
                    let c4 = (2.0 * PI) / 3.0;
                    2.0_f32.powf(-10.0 * t) * ((t * 10.0 - 0.75) * c4).sin() + 1.0
                }
                Self::CriticallyDamped => (-5.0 * t - 1.0) * (-8.0 * t).exp() + 1.0,
                Self::CriticallyDried => 1.0 - Self::CriticallyDamped.interpolate(1.0 - t),
            }
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_interpolation_endpoints() {
            for &f in InterpolateFn::VARIANTS {
                assert!(f.interpolate(0.0).abs() < 0.01, "{f:?}(0)");
                assert!((f.interpolate(1.0) - 1.0).abs() < 0.01, "{f:?}(1)");
            }
            assert_eq!(InterpolateFn::Lerp.interpolate(0.25), 0.25);
            assert!((InterpolateFn::Cosine.interpolate(0.5) - 0.5).abs() < 1e-6);
        }
    }
}
