//! Render origin hook for the camera-anchored floater.

use std::sync::{Arc, Mutex};

use glam::Vec2;

/// Called by the primary floater every active tick with its new horizontal
/// position, so the renderer can move the water mesh and its shader offset
/// along and keep vertex coordinates small.
pub trait OriginHook {
    fn recenter(&mut self, x: f32, z: f32);
}

/// Render origin shared between the primary floater and the renderer
#[derive(Debug, Clone, Default)]
pub struct SharedOrigin(Arc<Mutex<Vec2>>);

impl SharedOrigin {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last recentered world XZ position
    pub fn get(&self) -> Vec2 {
        match self.0.lock() {
            Ok(origin) => *origin,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }
}

impl OriginHook for SharedOrigin {
    fn recenter(&mut self, x: f32, z: f32) {
        match self.0.lock() {
            Ok(mut origin) => *origin = Vec2::new(x, z),
            Err(poisoned) => *poisoned.into_inner() = Vec2::new(x, z),
        }
    }
}
