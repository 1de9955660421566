//! Toggleable gravity applied to the camera.
//!
//! Integrates a vertical velocity while enabled, clamped to a terminal
//! velocity. The frame loop feeds the resulting velocity into
//! [`crate::camera::Camera::translate`].

pub const GRAVITY_STRENGTH: f32 = 9.8;
pub const TERMINAL_VELOCITY: f32 = 80.0;

pub struct Gravity {
    enabled: bool,
    velocity: f32,
    strength: f32,
}

impl Gravity {
    pub fn new(strength: f32) -> Self {
        Self {
            enabled: false,
            velocity: 0.0,
            strength,
        }
    }

    /// Accumulates downward velocity for the elapsed time. Does nothing while
    /// disabled.
    pub fn update(&mut self, delta_time: f32) {
        if !self.enabled {
            return;
        }

        self.velocity += -self.strength * delta_time;

        if self.velocity.abs() > TERMINAL_VELOCITY {
            self.velocity = TERMINAL_VELOCITY.copysign(self.velocity);
        }
    }

    /// Flips the enabled state. Disabling zeroes the accumulated velocity so
    /// re-enabling starts from rest.
    pub fn toggle(&mut self) {
        if self.enabled {
            self.velocity = 0.0;
        }
        self.enabled = !self.enabled;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Current vertical velocity, negative while falling.
    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn reset(&mut self) {
        self.velocity = 0.0;
    }

    pub fn log(&self) {
        if self.enabled {
            log::debug!("gravity velocity: {}", self.velocity);
        }
    }
}

impl Default for Gravity {
    fn default() -> Self {
        Self::new(GRAVITY_STRENGTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_update_is_a_noop() {
        let mut gravity = Gravity::default();
        gravity.update(1.0);
        assert_eq!(gravity.velocity(), 0.0);
        assert!(!gravity.is_enabled());
    }

    #[test]
    fn enabled_update_accumulates_downward() {
        let mut gravity = Gravity::default();
        gravity.toggle();
        gravity.update(1.0);
        assert_eq!(gravity.velocity(), -GRAVITY_STRENGTH);
        gravity.update(1.0);
        assert_eq!(gravity.velocity(), -2.0 * GRAVITY_STRENGTH);
    }

    #[test]
    fn velocity_clamps_to_terminal() {
        let mut gravity = Gravity::default();
        gravity.toggle();
        gravity.update(100.0);
        assert_eq!(gravity.velocity(), -TERMINAL_VELOCITY);
    }

    #[test]
    fn disabling_zeroes_velocity() {
        let mut gravity = Gravity::default();
        gravity.toggle();
        gravity.update(1.0);
        gravity.toggle();
        assert_eq!(gravity.velocity(), 0.0);
        assert!(!gravity.is_enabled());
    }

    #[test]
    fn reset_zeroes_velocity_but_keeps_state() {
        let mut gravity = Gravity::default();
        gravity.toggle();
        gravity.update(0.5);
        gravity.reset();
        assert_eq!(gravity.velocity(), 0.0);
        assert!(gravity.is_enabled());
    }

    #[test]
    fn custom_strength_is_used() {
        let mut gravity = Gravity::new(2.0);
        gravity.toggle();
        gravity.update(1.0);
        assert_eq!(gravity.velocity(), -2.0);
    }
}
