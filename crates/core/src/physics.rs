//! Rocket speed update rule.

/// Turns a per-tick direction command into a new velocity.
///
/// `direction` components are -1, 0 or 1. Implementations must keep the
/// current velocity on an axis whose direction is 0.
pub trait SpeedRule {
    fn update(&self, speed: (f64, f64), direction: (i8, i8)) -> (f64, f64);
}

/// Adds `step` per requested direction and clamps each axis to `[-max, max]`.
///
/// Pressing against the current motion first slows the rocket, then reverses it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdditiveSpeed {
    pub step: f64,
    pub max: f64,
}

impl Default for AdditiveSpeed {
    fn default() -> Self {
        Self { step: 1.0, max: 2.0 }
    }
}

impl AdditiveSpeed {
    fn axis(&self, speed: f64, direction: i8) -> f64 {
        if direction == 0 {
            return speed;
        }
        let max = self.max.abs();
        (speed + self.step * f64::from(direction.signum())).clamp(-max, max)
    }
}

impl SpeedRule for AdditiveSpeed {
    fn update(&self, speed: (f64, f64), direction: (i8, i8)) -> (f64, f64) {
        (
            self.axis(speed.0, direction.0),
            self.axis(speed.1, direction.1),
        )
    }
}
