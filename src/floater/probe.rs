//! Debug vectors from the last active tick, for an external visualization layer.

use glam::Vec3;

/// Per-anchor wave readings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnchorProbe {
    /// Anchor position in world space
    pub world_position: Vec3,
    /// Surface normal under the anchor
    pub wave_normal: Vec3,
    /// Direction water would slide the anchor downhill
    pub gravity_slide: Vec3,
}

/// Snapshot of the vectors a floater computed on its last active tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FloaterProbe {
    pub anchors: Vec<AnchorProbe>,
    /// Averaged, normalized wave normal the body tilts toward
    pub attitude_normal: Vec3,
    /// Unsmoothed target position (center of gravity marker)
    pub target: Vec3,
    /// Unit velocity direction, zero at standstill
    pub velocity_direction: Vec3,
}

/// Halfway between straight down and the surface normal
///
/// On perfectly flat water the two cancel; straight down is used then.
pub fn gravity_slide(normal: Vec3) -> Vec3 {
    ((Vec3::NEG_Y + normal) / 2.0)
        .try_normalize()
        .unwrap_or(Vec3::NEG_Y)
}
