//! Single Gerstner wave component and the per-point sample it contributes to.

use glam::{Vec2, Vec3};

/// Directions shorter than this cannot be normalized reliably
const MIN_DIRECTION_LENGTH: f32 = 1e-6;

/// One sinusoidal contributor to the wave field
///
/// Immutable once built. The direction is stored normalized.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveComponent {
    direction: Vec2,
    frequency: f32,
    amplitude: f32,
    steepness: f32,
    speed: f32,
}

impl WaveComponent {
    /// Create a wave component
    ///
    /// # Arguments
    /// * `direction` - Travel direction in the XZ plane (`x` = world X, `y` = world Z), any length > 0
    /// * `frequency` - Spatial frequency `k` (radians per meter)
    /// * `amplitude` - Crest height above rest level (meters)
    /// * `steepness` - Horizontal displacement scale `q` (dimensionless)
    /// * `speed` - Phase rate `c` (radians per second of clock time)
    pub fn new(
        direction: Vec2,
        frequency: f32,
        amplitude: f32,
        steepness: f32,
        speed: f32,
    ) -> Result<Self, String> {
        if !direction.is_finite() || direction.length() < MIN_DIRECTION_LENGTH {
            return Err(format!(
                "wave direction must be a non-zero finite vector, got {}",
                direction
            ));
        }
        if !(frequency > 0.0) || !frequency.is_finite() {
            return Err(format!("wave frequency must be positive, got {}", frequency));
        }
        if !amplitude.is_finite() || amplitude < 0.0 {
            return Err(format!("wave amplitude must be non-negative, got {}", amplitude));
        }
        if !steepness.is_finite() {
            return Err(format!("wave steepness must be finite, got {}", steepness));
        }
        if !speed.is_finite() {
            return Err(format!("wave speed must be finite, got {}", speed));
        }

        Ok(Self {
            direction: direction.normalize(),
            frequency,
            amplitude,
            steepness,
            speed,
        })
    }

    pub fn direction(&self) -> Vec2 {
        self.direction
    }

    pub fn frequency(&self) -> f32 {
        self.frequency
    }

    pub fn amplitude(&self) -> f32 {
        self.amplitude
    }

    pub fn steepness(&self) -> f32 {
        self.steepness
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn wavelength(&self) -> f32 {
        std::f32::consts::TAU / self.frequency
    }

    /// Crest sharpness `q·a·k`; a sum above 1.0 over all components folds the surface
    pub fn sharpness(&self) -> f32 {
        self.steepness.abs() * self.amplitude * self.frequency
    }
}

/// Result of evaluating the wave field at one point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveSample {
    /// World position of the displaced surface point
    pub position: Vec3,
    /// Raw displacement (horizontal Gerstner offset + height)
    pub offset: Vec3,
    /// Unit surface normal
    pub normal: Vec3,
}

impl WaveSample {
    /// Sample of undisturbed water at `(x, z)`
    pub fn flat(x: f32, z: f32) -> Self {
        Self {
            position: Vec3::new(x, 0.0, z),
            offset: Vec3::ZERO,
            normal: Vec3::Y,
        }
    }

    /// Surface height (meters above rest level)
    pub fn height(&self) -> f32 {
        self.position.y
    }
}
