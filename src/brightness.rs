//! Global brightness and the stepwise ramp between two levels
//!
//! Brightness is a scalar in `[0.0, 1.0]` applied by the render surface on
//! top of the per-pixel colors. Ramps move it in fixed steps and always land
//! exactly on their target, no matter how the steps accumulate in `f32`.

use crate::math8::unit_to_u8;

/// Brightness change per ramp step
pub const RAMP_STEP: f32 = 0.01;

/// Slack for step counts that are whole numbers up to `f32` error
const STEP_TOLERANCE: f32 = 1e-3;

/// Global brightness clamped to `[0.0, 1.0]`
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Brightness(f32);

impl Brightness {
    pub const OFF: Self = Self(0.0);
    pub const FULL: Self = Self(1.0);

    /// Create a brightness from a value known to be in range
    pub(crate) const fn new_const(value: f32) -> Self {
        Self(value)
    }

    /// Create a brightness, clamping into range
    ///
    /// NaN is treated as off.
    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            return Self::OFF;
        }
        Self(value.clamp(0.0, 1.0))
    }

    /// Create a brightness, rejecting values outside of `[0.0, 1.0]`
    pub fn try_new(value: f32) -> Option<Self> {
        (0.0..=1.0).contains(&value).then_some(Self(value))
    }

    pub const fn get(self) -> f32 {
        self.0
    }

    /// Brightness as a `scale8` factor (0-255)
    pub fn as_u8(self) -> u8 {
        unit_to_u8(self.0)
    }
}

impl From<Brightness> for f32 {
    fn from(value: Brightness) -> Self {
        value.0
    }
}

/// Brightness levels visited by a ramp, excluding the starting level
///
/// Each item is one step of [`RAMP_STEP`] toward the target; the final item
/// is the target itself.
#[derive(Debug, Clone)]
pub struct Ramp {
    from: f32,
    to: f32,
    direction: f32,
    step: u32,
    steps: u32,
}

impl Ramp {
    pub fn new(from: Brightness, to: Brightness) -> Self {
        let distance = to.0 - from.0;
        let direction = if distance < 0.0 { -1.0 } else { 1.0 };
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let mut steps =
            libm::ceilf(libm::fabsf(distance) / RAMP_STEP - STEP_TOLERANCE).max(0.0) as u32;
        // distances under the tolerance still take one step onto the target
        if steps == 0 && libm::fabsf(distance) > 0.0 {
            steps = 1;
        }
        Self {
            from: from.0,
            to: to.0,
            direction,
            step: 0,
            steps,
        }
    }

    /// Target of the ramp
    pub fn target(&self) -> Brightness {
        Brightness(self.to)
    }
}

impl Iterator for Ramp {
    type Item = Brightness;

    fn next(&mut self) -> Option<Self::Item> {
        if self.step >= self.steps {
            return None;
        }
        self.step += 1;
        if self.step == self.steps {
            return Some(Brightness::new(self.to));
        }
        #[allow(clippy::cast_precision_loss)]
        let offset = self.step as f32 * RAMP_STEP * self.direction;
        Some(Brightness::new(self.from + offset))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.steps - self.step) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Ramp {}
