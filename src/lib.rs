//! Seafloat library - Gerstner ocean surface and floating-body physics

pub mod cli;
pub mod fleet;
pub mod floater;
pub mod helm;
pub mod ocean;
pub mod params;
