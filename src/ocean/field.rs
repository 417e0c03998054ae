//! Gerstner wave summation over a fixed set of components.

use std::f64::consts::TAU;

use glam::{Vec2, Vec3};

use super::wave::{WaveComponent, WaveSample};

/// Ocean surface evaluator
///
/// Holds only the immutable component list; time is always passed in, so one
/// field can be shared by reference between every floater of a tick.
#[derive(Debug, Clone, Default)]
pub struct WaveField {
    components: Vec<WaveComponent>,
}

impl WaveField {
    /// Create a wave field from an ordered component list
    ///
    /// Components are validated on construction, so any list is accepted. An
    /// empty list describes flat water. Sets whose combined sharpness exceeds
    /// 1.0 are logged, since the rendered surface will fold over at the crests.
    pub fn new(components: Vec<WaveComponent>) -> Self {
        let field = Self { components };
        if field.may_loop() {
            log::warn!(
                "Wave set sharpness {:.3} exceeds 1.0, crests will self-intersect",
                field.total_sharpness()
            );
        }
        log::debug!("Wave field configured with {} components", field.components.len());
        field
    }

    /// Flat, motionless water
    pub fn flat() -> Self {
        Self::default()
    }

    pub fn components(&self) -> &[WaveComponent] {
        &self.components
    }

    /// Sum of `q·a·k` over all components
    pub fn total_sharpness(&self) -> f32 {
        self.components.iter().map(WaveComponent::sharpness).sum()
    }

    /// True when crests can fold over (looping geometry)
    pub fn may_loop(&self) -> bool {
        self.total_sharpness() > 1.0
    }

    /// Evaluate displacement and normal of the surface at one point
    ///
    /// # Arguments
    /// * `origin_x`, `origin_z` - Reference point of the querying body; only
    ///   keeps the trigonometric arguments small far from the world origin
    /// * `x`, `z` - World-space horizontal sample coordinates
    /// * `time_s` - Shared ocean clock (seconds, full precision)
    ///
    /// # Returns
    /// Displaced position `(x + dx, dy, z + dz)` and the unit normal
    pub fn evaluate(&self, origin_x: f32, origin_z: f32, x: f32, z: f32, time_s: f64) -> WaveSample {
        let origin = Vec2::new(origin_x, origin_z);
        let local = Vec2::new(x - origin_x, z - origin_z);

        let mut offset = Vec3::ZERO;
        // (∂h/∂x, ∂h/∂z)
        let mut slope = Vec2::ZERO;

        for wave in &self.components {
            let (sin, cos) = phase(wave, origin, local, time_s).sin_cos();
            let d = wave.direction();
            let a = wave.amplitude();

            let horizontal = d * (wave.steepness() * a * cos);
            offset.x += horizontal.x;
            offset.y += a * sin;
            offset.z += horizontal.y;

            slope += d * (a * wave.frequency() * cos);
        }

        let normal = Vec3::new(-slope.x, 1.0, -slope.y)
            .try_normalize()
            .unwrap_or(Vec3::Y);

        WaveSample {
            position: Vec3::new(x + offset.x, offset.y, z + offset.z),
            offset,
            normal,
        }
    }

    /// Evaluate using the sample point itself as the reference origin
    pub fn sample(&self, x: f32, z: f32, time_s: f64) -> WaveSample {
        self.evaluate(x, z, x, z, time_s)
    }
}

/// Phase `k·(d·p) − c·t` split into a far part reduced in double precision and
/// a small local part relative to the body origin
fn phase(wave: &WaveComponent, origin: Vec2, local: Vec2, time_s: f64) -> f32 {
    let k = wave.frequency() as f64;
    let far = k * wave.direction().as_dvec2().dot(origin.as_dvec2())
        - wave.speed() as f64 * time_s;
    let near = wave.frequency() * wave.direction().dot(local);

    far.rem_euclid(TAU) as f32 + near
}
