//! Rigid-body transform handle mutated by a floater each tick.

use std::cell::RefCell;
use std::rc::Rc;

use glam::{Quat, Vec3};

/// Position and orientation of a floating body, owned by the scene
pub trait Transform {
    fn position(&self) -> Vec3;

    fn set_position(&mut self, position: Vec3);

    fn orientation(&self) -> Quat;

    fn set_orientation(&mut self, orientation: Quat);

    /// Yaw the visual hull model under the body (radians)
    ///
    /// The body itself only tilts with the waves; heading is shown by turning
    /// the model inside it. Scenes without a separate model can ignore this.
    fn set_hull_yaw(&mut self, _yaw: f32) {}
}

/// Plain owned transform
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyTransform {
    pub position: Vec3,
    pub orientation: Quat,
    pub hull_yaw: f32,
}

impl Default for BodyTransform {
    fn default() -> Self {
        Self::at(Vec3::ZERO)
    }
}

impl BodyTransform {
    /// Level body at `position`
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            orientation: Quat::IDENTITY,
            hull_yaw: 0.0,
        }
    }

    pub fn with_orientation(mut self, orientation: Quat) -> Self {
        self.orientation = orientation;
        self
    }
}

impl Transform for BodyTransform {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    fn orientation(&self) -> Quat {
        self.orientation
    }

    fn set_orientation(&mut self, orientation: Quat) {
        self.orientation = orientation;
    }

    fn set_hull_yaw(&mut self, yaw: f32) {
        self.hull_yaw = yaw;
    }
}

/// Scene node shared between the scene graph and its floater
impl<T: Transform> Transform for Rc<RefCell<T>> {
    fn position(&self) -> Vec3 {
        self.borrow().position()
    }

    fn set_position(&mut self, position: Vec3) {
        self.borrow_mut().set_position(position);
    }

    fn orientation(&self) -> Quat {
        self.borrow().orientation()
    }

    fn set_orientation(&mut self, orientation: Quat) {
        self.borrow_mut().set_orientation(orientation);
    }

    fn set_hull_yaw(&mut self, yaw: f32) {
        self.borrow_mut().set_hull_yaw(yaw);
    }
}
