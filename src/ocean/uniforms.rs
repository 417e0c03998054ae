//! GPU uniform layout of the wave field, so the renderer draws the surface the
//! physics samples.

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

use super::field::WaveField;

/// Maximum number of components the ocean shader sums
pub const MAX_GPU_WAVES: usize = 8;

/// One wave component as laid out in the shader (32 bytes)
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct GpuWave {
    pub direction: [f32; 2],
    pub frequency: f32,
    pub amplitude: f32,
    pub steepness: f32,
    pub speed: f32,
    pub _padding: [f32; 2], // Pad to 32 bytes for WGSL array stride
}

/// Uniform buffer for the ocean surface shader
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct WaveUniforms {
    pub waves: [GpuWave; MAX_GPU_WAVES],
    pub wave_count: u32,
    pub time: f32,
    /// Render origin (world XZ) the water mesh is re-centered on
    pub origin_offset: [f32; 2],
}

impl WaveUniforms {
    /// Pack a wave field for upload
    ///
    /// Components beyond [`MAX_GPU_WAVES`] are dropped with a warning.
    pub fn new(field: &WaveField, time_s: f32, origin_offset: Vec2) -> Self {
        let components = field.components();
        if components.len() > MAX_GPU_WAVES {
            log::warn!(
                "Wave field has {} components, shader only sums the first {}",
                components.len(),
                MAX_GPU_WAVES
            );
        }

        let mut waves = [GpuWave::default(); MAX_GPU_WAVES];
        for (slot, wave) in waves.iter_mut().zip(components) {
            *slot = GpuWave {
                direction: wave.direction().to_array(),
                frequency: wave.frequency(),
                amplitude: wave.amplitude(),
                steepness: wave.steepness(),
                speed: wave.speed(),
                _padding: [0.0; 2],
            };
        }

        Self {
            waves,
            wave_count: components.len().min(MAX_GPU_WAVES) as u32,
            time: time_s,
            origin_offset: origin_offset.to_array(),
        }
    }
}
