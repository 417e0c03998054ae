//! Playable water bounds and sink motion.

use serde::Deserialize;

/// World bounds and the vertical motion of boats leaving the water
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct WorldParams {
    /// Side length of the square playable water, centered on the origin (meters)
    pub water_extent_m: f32,

    /// Depth at which a falling or scuttled boat is done (meters, negative)
    pub fall_depth_m: f32,

    /// Drop speed after sailing off the edge (meters per second)
    pub fall_speed_m_per_s: f32,

    /// Descent speed of a scuttled boat (meters per second)
    pub scuttle_speed_m_per_s: f32,
}

impl Default for WorldParams {
    fn default() -> Self {
        Self {
            water_extent_m: 5000.0,
            fall_depth_m: -75.0,
            fall_speed_m_per_s: 10.0,
            scuttle_speed_m_per_s: 0.5,
        }
    }
}

impl WorldParams {
    /// True when the horizontal position lies outside the playable water
    pub fn is_off_water(&self, x: f32, z: f32) -> bool {
        let half = self.water_extent_m / 2.0;
        x.abs() > half || z.abs() > half
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if !(self.water_extent_m > 0.0) {
            return Err(format!(
                "water extent must be positive, got {}",
                self.water_extent_m
            ));
        }
        if !self.fall_depth_m.is_finite() || self.fall_depth_m >= 0.0 {
            return Err(format!(
                "fall depth must be below the surface, got {}",
                self.fall_depth_m
            ));
        }
        if !(self.fall_speed_m_per_s > 0.0) || !(self.scuttle_speed_m_per_s > 0.0) {
            return Err("sink speeds must be positive".to_string());
        }
        Ok(())
    }
}
