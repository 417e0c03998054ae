//! Hull bounding volumes.

use glam::Vec3;

/// Axis-aligned box in body-local space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn new(min: Vec3, max: Vec3) -> Result<Self, String> {
        if !min.is_finite() || !max.is_finite() {
            return Err("hull bounds must be finite".to_string());
        }
        if min.cmpgt(max).any() {
            return Err(format!("hull bounds min {} exceeds max {}", min, max));
        }
        Ok(Self { min, max })
    }

    /// Box centered on the body origin with the given half extents
    pub fn from_half_extents(half: Vec3) -> Result<Self, String> {
        Self::new(-half, half)
    }

    /// Smallest box containing every point
    pub fn from_points(points: &[Vec3]) -> Result<Self, String> {
        let Some(first) = points.first() else {
            return Err("cannot bound an empty point set".to_string());
        };
        let (min, max) = points
            .iter()
            .fold((*first, *first), |(min, max), p| (min.min(*p), max.max(*p)));
        Self::new(min, max)
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Sphere through the box corners
    pub fn bounding_sphere(&self) -> Sphere {
        Sphere {
            center: self.center(),
            radius: self.size().length() * 0.5,
        }
    }
}

/// Collision sphere; the center follows the body, the radius is fixed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
}

impl Sphere {
    pub fn contains(&self, point: Vec3) -> bool {
        self.center.distance_squared(point) <= self.radius * self.radius
    }

    pub fn intersects(&self, other: &Sphere) -> bool {
        let reach = self.radius + other.radius;
        self.center.distance_squared(other.center) <= reach * reach
    }
}
