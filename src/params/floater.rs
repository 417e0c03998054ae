//! Buoyancy smoothing parameters.

use serde::Deserialize;

/// Per-body smoothing constants
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct FloaterParams {
    /// Fraction of the way toward the target position moved each tick
    /// (dimensionless, 0 < blend <= 1)
    pub blend_factor: f32,

    /// Attitude rotation budget (radians per second of delta time)
    pub rotation_rate_rad_per_s: f32,

    /// Display scale for the speed readout (distance · scale · delta)
    pub speed_scale: f32,
}

impl Default for FloaterParams {
    fn default() -> Self {
        Self {
            blend_factor: 0.25,
            rotation_rate_rad_per_s: 0.2,
            speed_scale: 1000.0,
        }
    }
}

impl FloaterParams {
    /// Validate configuration (all constants must be positive)
    pub fn validate(&self) -> Result<(), String> {
        if !(self.blend_factor > 0.0 && self.blend_factor <= 1.0) {
            return Err(format!(
                "blend factor must be in (0, 1], got {}",
                self.blend_factor
            ));
        }
        if !(self.rotation_rate_rad_per_s > 0.0) || !self.rotation_rate_rad_per_s.is_finite() {
            return Err(format!(
                "rotation rate must be positive, got {}",
                self.rotation_rate_rad_per_s
            ));
        }
        if !(self.speed_scale > 0.0) || !self.speed_scale.is_finite() {
            return Err(format!(
                "speed scale must be positive, got {}",
                self.speed_scale
            ));
        }
        Ok(())
    }
}
