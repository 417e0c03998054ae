//! Ocean surface: Gerstner wave components, the field evaluator, and the
//! clock that drives it.

mod clock;
mod field;
mod uniforms;
mod wave;

// Re-export public types
pub use clock::OceanClock;
pub use field::WaveField;
pub use uniforms::{GpuWave, WaveUniforms, MAX_GPU_WAVES};
pub use wave::{WaveComponent, WaveSample};
