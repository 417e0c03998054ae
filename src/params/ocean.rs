//! Ocean wave set and clock parameters.

use std::f32::consts::TAU;

use glam::Vec2;
use serde::Deserialize;

use crate::ocean::{WaveComponent, WaveField};

/// One Gerstner wave described the way artists tune it
#[derive(Debug, Clone, Deserialize)]
pub struct WaveConfig {
    /// Travel direction in the XZ plane (degrees, 0 = +X, 90 = +Z)
    pub direction_deg: f32,

    /// Crest sharpness (dimensionless, amplitude = steepness / k)
    /// Sum over all waves should stay below 1.0 to avoid looping crests
    pub steepness: f32,

    /// Crest-to-crest distance (meters)
    pub wavelength_m: f32,
}

impl WaveConfig {
    pub fn new(direction_deg: f32, steepness: f32, wavelength_m: f32) -> Self {
        Self {
            direction_deg,
            steepness,
            wavelength_m,
        }
    }

    /// Build the evaluator component for this wave
    ///
    /// Deep water dispersion: `k = 2π/λ`, phase rate `c = sqrt(g·k)`.
    pub fn to_component(&self, gravity_m_per_s2: f32) -> Result<WaveComponent, String> {
        if !(self.wavelength_m > 0.0) {
            return Err(format!(
                "wavelength must be positive, got {}",
                self.wavelength_m
            ));
        }
        let k = TAU / self.wavelength_m;
        let angle = self.direction_deg.to_radians();
        let direction = Vec2::new(angle.cos(), angle.sin());

        WaveComponent::new(
            direction,
            k,
            self.steepness / k,
            1.0,
            (gravity_m_per_s2 * k).sqrt(),
        )
    }
}

/// Ocean simulation parameters
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OceanParams {
    /// Wave components summed by the evaluator
    pub waves: Vec<WaveConfig>,

    /// Gravitational acceleration used for phase speeds (m/s²)
    pub gravity_m_per_s2: f32,

    /// Clock rate multiplier (dimensionless, 1.0 = real time)
    pub time_scale: f32,
}

impl Default for OceanParams {
    fn default() -> Self {
        Self {
            waves: vec![
                WaveConfig::new(0.0, 0.15, 100.0),
                WaveConfig::new(30.0, 0.15, 50.0),
                WaveConfig::new(60.0, 0.15, 25.0),
            ],
            gravity_m_per_s2: 9.8,
            time_scale: 1.0,
        }
    }
}

impl OceanParams {
    /// Validate configuration (gravity and time scale must be usable)
    pub fn validate(&self) -> Result<(), String> {
        if !(self.gravity_m_per_s2 > 0.0) {
            return Err(format!(
                "gravity must be positive, got {}",
                self.gravity_m_per_s2
            ));
        }
        if !self.time_scale.is_finite() || self.time_scale < 0.0 {
            return Err(format!(
                "time scale must be finite and non-negative, got {}",
                self.time_scale
            ));
        }
        Ok(())
    }

    /// Build the wave field described by these parameters
    pub fn build_field(&self) -> Result<WaveField, String> {
        self.validate()?;
        let components = self
            .waves
            .iter()
            .enumerate()
            .map(|(i, wave)| {
                wave.to_component(self.gravity_m_per_s2)
                    .map_err(|e| format!("wave {}: {}", i, e))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(WaveField::new(components))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_wave_set_builds() {
        let field = OceanParams::default().build_field().unwrap();
        assert_eq!(field.components().len(), 3);
        assert!(!field.may_loop());
    }

    #[test]
    fn test_wave_config_dispersion() {
        let wave = WaveConfig::new(90.0, 0.5, TAU).to_component(9.8).unwrap();

        // λ = 2π gives k = 1, so amplitude equals steepness
        assert!((wave.frequency() - 1.0).abs() < 1e-6);
        assert!((wave.amplitude() - 0.5).abs() < 1e-6);
        assert!((wave.speed() - 9.8_f32.sqrt()).abs() < 1e-5);
        assert!(wave.direction().x.abs() < 1e-6);
        assert!((wave.direction().y - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_rejects_bad_wavelength() {
        let mut params = OceanParams::default();
        params.waves.push(WaveConfig::new(0.0, 0.1, 0.0));

        let err = params.build_field().unwrap_err();
        assert!(err.starts_with("wave 3"), "unexpected error: {}", err);
    }

    #[test]
    fn test_rejects_bad_gravity() {
        let params = OceanParams {
            gravity_m_per_s2: 0.0,
            ..OceanParams::default()
        };
        assert!(params.validate().is_err());
    }
}
