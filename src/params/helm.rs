//! Helm (heading/power control) ramp constants.

use serde::Deserialize;

/// Control ramp applied once per tick by [`crate::helm::Helm`]
///
/// Power is negative when driving ahead: thrust is applied along
/// `(sin(heading), cos(heading))` and the hulls face -Z.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct HelmParams {
    /// Power change per tick while the throttle is held
    pub power_step: f32,

    /// Lowest power the throttle can reach
    pub power_floor: f32,

    /// Cruise readout increment per tick while the throttle is held
    pub cruise_increment: f32,

    /// Cruise readout ceiling
    pub cruise_max: f32,

    /// Cruise readout decay per tick with the throttle released
    pub cruise_decay: f32,

    /// Power recovery per tick toward zero when coasting ahead
    pub recover_ahead: f32,

    /// Power recovery per tick toward zero when coasting astern
    pub recover_astern: f32,

    /// Heading change per tick while turning (radians)
    pub turn_rate_rad: f32,
}

impl Default for HelmParams {
    fn default() -> Self {
        Self {
            power_step: 0.1,
            power_floor: -4.0,
            cruise_increment: 0.0025,
            cruise_max: 0.4,
            cruise_decay: 0.002,
            recover_ahead: 0.05,
            recover_astern: 0.025,
            turn_rate_rad: 0.015,
        }
    }
}

impl HelmParams {
    /// Validate configuration (steps must be finite, floor must not be positive)
    pub fn validate(&self) -> Result<(), String> {
        let steps = [
            ("power_step", self.power_step),
            ("cruise_increment", self.cruise_increment),
            ("cruise_max", self.cruise_max),
            ("cruise_decay", self.cruise_decay),
            ("recover_ahead", self.recover_ahead),
            ("recover_astern", self.recover_astern),
            ("turn_rate_rad", self.turn_rate_rad),
        ];
        for (name, value) in steps {
            if !value.is_finite() || value < 0.0 {
                return Err(format!("{} must be finite and non-negative, got {}", name, value));
            }
        }
        if !self.power_floor.is_finite() || self.power_floor > 0.0 {
            return Err(format!(
                "power_floor must be finite and <= 0, got {}",
                self.power_floor
            ));
        }
        Ok(())
    }
}
