//! Multi-point buoyancy and attitude integrator for one floating body.

use glam::{Quat, Vec2, Vec3};

use super::bounds::{Aabb, Sphere};
use super::origin::OriginHook;
use super::probe::{gravity_slide, AnchorProbe, FloaterProbe};
use super::transform::Transform;
use crate::ocean::WaveField;
use crate::params::FloaterParams;

/// Buoyancy state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FloatState {
    /// Follows the waves every tick
    Active,
    /// Inert; an outside process owns the vertical motion
    Sinking,
}

/// One buoyant body bound to a scene transform
///
/// Samples the wave field under each anchor, low-pass filters the body toward
/// the averaged target and tilts it toward the averaged surface normal. There
/// is no mass or drag: the 0.25 blend per tick is the only inertia.
pub struct Floater<T: Transform> {
    body: T,
    anchors: Vec<Vec3>,
    params: FloaterParams,

    /// Thrust direction (radians, 0 = +Z)
    pub heading: f32,
    /// Signed thrust added along the heading each tick (meters per tick)
    pub power: f32,
    forces: Vec<Vec2>,

    velocity: Vec3,
    speed: f32,
    last_target: Vec3,
    collision_sphere: Sphere,
    state: FloatState,

    origin_hook: Option<Box<dyn OriginHook + Send>>,
    probe: FloaterProbe,
}

impl<T: Transform> Floater<T> {
    /// Bind a floater to a body
    ///
    /// # Arguments
    /// * `body` - Transform handle the floater will move every tick
    /// * `anchors` - Body-local sample points; empty means one at the origin
    /// * `hull` - Body-local hull bounds, fixes the collision sphere radius
    /// * `params` - Smoothing constants
    pub fn new(body: T, anchors: Vec<Vec3>, hull: Aabb, params: FloaterParams) -> Result<Self, String> {
        params.validate()?;
        if let Some(bad) = anchors.iter().find(|a| !a.is_finite()) {
            return Err(format!("anchor offsets must be finite, got {}", bad));
        }
        let anchors = if anchors.is_empty() {
            vec![Vec3::ZERO]
        } else {
            anchors
        };

        let local = hull.bounding_sphere();
        let collision_sphere = Sphere {
            center: body.position() + body.orientation() * local.center,
            radius: local.radius,
        };

        log::debug!(
            "Floater created with {} anchors, collision radius {:.2}",
            anchors.len(),
            collision_sphere.radius
        );

        Ok(Self {
            body,
            anchors,
            params,
            heading: 0.0,
            power: 0.0,
            forces: Vec::new(),
            velocity: Vec3::ZERO,
            speed: 0.0,
            last_target: Vec3::ZERO,
            collision_sphere,
            state: FloatState::Active,
            origin_hook: None,
            probe: FloaterProbe::default(),
        })
    }

    /// Flag this floater as camera-anchored; `hook` is re-centered every tick
    pub fn set_primary(&mut self, hook: impl OriginHook + Send + 'static) {
        self.origin_hook = Some(Box::new(hook));
    }

    pub fn clear_primary(&mut self) {
        self.origin_hook = None;
    }

    pub fn is_primary(&self) -> bool {
        self.origin_hook.is_some()
    }

    /// Queue a horizontal push (x = world X, y = world Z) for the next update
    pub fn push_force(&mut self, force: Vec2) {
        if force.is_finite() {
            self.forces.push(force);
        } else {
            log::warn!("Dropping non-finite force {}", force);
        }
    }

    pub fn pending_forces(&self) -> &[Vec2] {
        &self.forces
    }

    pub fn set_sinking(&mut self, sinking: bool) {
        let state = if sinking {
            FloatState::Sinking
        } else {
            FloatState::Active
        };
        if state != self.state {
            log::debug!("Floater state {:?} -> {:?}", self.state, state);
        }
        self.state = state;
    }

    pub fn is_sinking(&self) -> bool {
        self.state == FloatState::Sinking
    }

    pub fn state(&self) -> FloatState {
        self.state
    }

    /// Clear control state and re-arm buoyancy (used on respawn)
    pub fn reset(&mut self) {
        self.speed = 0.0;
        self.power = 0.0;
        self.heading = 0.0;
        self.set_sinking(false);
    }

    /// Target displacement since the previous tick
    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    /// Display speed: distance moved · speed scale · delta
    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Unsmoothed target position computed on the last active tick
    pub fn last_target(&self) -> Vec3 {
        self.last_target
    }

    pub fn collision_sphere(&self) -> Sphere {
        self.collision_sphere
    }

    pub fn anchors(&self) -> &[Vec3] {
        &self.anchors
    }

    pub fn params(&self) -> &FloaterParams {
        &self.params
    }

    pub fn probe(&self) -> &FloaterProbe {
        &self.probe
    }

    pub fn body(&self) -> &T {
        &self.body
    }

    pub fn body_mut(&mut self) -> &mut T {
        &mut self.body
    }

    pub fn into_body(self) -> T {
        self.body
    }

    /// Advance one tick against the wave field at `time_s`
    ///
    /// No-op while sinking. Never panics and never writes NaN into the body: a
    /// non-finite wave time skips the tick with forces still queued, a
    /// non-finite target skips it and drops them.
    pub fn update(&mut self, field: &WaveField, time_s: f64, delta_s: f32) {
        if self.state == FloatState::Sinking {
            return;
        }
        if !time_s.is_finite() {
            log::warn!("Non-finite wave time {}, skipping tick", time_s);
            return;
        }
        let delta_s = self.sanitize_inputs(delta_s);

        let position = self.body.position();
        let orientation = self.body.orientation();

        let mut target = Vec3::ZERO;
        let mut normal_sum = Vec3::ZERO;
        self.probe.anchors.clear();

        for offset in &self.anchors {
            let world = position + orientation * *offset;
            let sample = field.evaluate(position.x, position.z, world.x, world.z, time_s);

            // Horizontal target is the body's own position nudged by the normal,
            // not the anchor's Gerstner displacement
            target.x += position.x + sample.normal.x;
            target.y += sample.position.y;
            target.z += position.z + sample.normal.z;
            normal_sum += sample.normal;

            self.probe.anchors.push(AnchorProbe {
                world_position: world,
                wave_normal: sample.normal,
                gravity_slide: gravity_slide(sample.normal),
            });
        }

        let count = self.anchors.len() as f32;
        target /= count;

        for force in self.forces.drain(..) {
            target.x += force.x;
            target.z += force.y;
        }

        target.x += self.heading.sin() * self.power;
        target.z += self.heading.cos() * self.power;

        if !target.is_finite() {
            log::warn!("Non-finite buoyancy target {}, skipping tick", target);
            return;
        }

        let smoothed = position.lerp(target, self.params.blend_factor);
        self.body.set_position(smoothed);

        self.velocity = target - self.last_target;
        self.speed = target.distance(self.last_target) * self.params.speed_scale * delta_s;
        self.last_target = target;

        self.collision_sphere.center = smoothed;

        let attitude_normal = (normal_sum / count).try_normalize().unwrap_or(Vec3::Y);
        let attitude = Quat::from_rotation_arc(Vec3::Y, attitude_normal);

        self.body.set_hull_yaw(self.heading);
        self.body.set_orientation(rotate_towards(
            orientation,
            attitude,
            delta_s * self.params.rotation_rate_rad_per_s,
        ));

        if let Some(hook) = self.origin_hook.as_mut() {
            hook.recenter(smoothed.x, smoothed.z);
        }

        self.probe.attitude_normal = attitude_normal;
        self.probe.target = target;
        self.probe.velocity_direction = self.velocity.normalize_or_zero();
    }

    /// Replace non-finite control and body state so the tick stays total
    fn sanitize_inputs(&mut self, delta_s: f32) -> f32 {
        if !self.heading.is_finite() {
            log::warn!("Non-finite heading {}, resetting to 0", self.heading);
            self.heading = 0.0;
        }
        if !self.power.is_finite() {
            log::warn!("Non-finite power {}, resetting to 0", self.power);
            self.power = 0.0;
        }
        if !self.body.position().is_finite() {
            log::warn!("Non-finite body position, restoring last target");
            self.body.set_position(self.last_target);
        }
        let orientation = self.body.orientation();
        if !orientation.is_finite() || orientation.length_squared() < f32::EPSILON {
            log::warn!("Degenerate body orientation, leveling");
            self.body.set_orientation(Quat::IDENTITY);
        } else if !orientation.is_normalized() {
            self.body.set_orientation(orientation.normalize());
        }

        if delta_s.is_finite() {
            delta_s.max(0.0)
        } else {
            log::warn!("Non-finite delta time {}, treating as 0", delta_s);
            0.0
        }
    }
}

/// Rotate `from` toward `to` by at most `max_angle` radians along the shortest arc
fn rotate_towards(from: Quat, to: Quat, max_angle: f32) -> Quat {
    let dot = from.dot(to).abs().min(1.0);
    let angle = 2.0 * dot.acos();
    if angle <= f32::EPSILON {
        return from;
    }
    let t = (max_angle / angle).clamp(0.0, 1.0);
    from.slerp(to, t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::floater::{BodyTransform, SharedOrigin};
    use crate::ocean::WaveComponent;
    use std::f32::consts::FRAC_PI_2;

    fn hull() -> Aabb {
        Aabb::from_half_extents(Vec3::new(2.0, 1.0, 6.0)).unwrap()
    }

    fn floater_at(position: Vec3) -> Floater<BodyTransform> {
        Floater::new(
            BodyTransform::at(position),
            Vec::new(),
            hull(),
            FloaterParams::default(),
        )
        .unwrap()
    }

    fn single_wave() -> WaveField {
        let wave = WaveComponent::new(Vec2::X, 0.1, 2.0, 1.0, 1.0).unwrap();
        WaveField::new(vec![wave])
    }

    #[test]
    fn test_synthesizes_origin_anchor() {
        let floater = floater_at(Vec3::ZERO);
        assert_eq!(floater.anchors(), &[Vec3::ZERO]);
    }

    #[test]
    fn test_rejects_bad_configuration() {
        let params = FloaterParams {
            blend_factor: 0.0,
            ..FloaterParams::default()
        };
        assert!(Floater::new(BodyTransform::default(), Vec::new(), hull(), params).is_err());

        let anchors = vec![Vec3::new(f32::NAN, 0.0, 0.0)];
        assert!(Floater::new(BodyTransform::default(), anchors, hull(), FloaterParams::default()).is_err());
    }

    #[test]
    fn test_collision_radius_from_hull() {
        let floater = floater_at(Vec3::new(10.0, 0.0, 0.0));
        let sphere = floater.collision_sphere();
        assert_eq!(sphere.center, Vec3::new(10.0, 0.0, 0.0));
        assert!((sphere.radius - Vec3::new(4.0, 2.0, 12.0).length() / 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_single_wave_scenario() {
        let field = single_wave();
        let mut floater = floater_at(Vec3::ZERO);

        // At t = π/2 the anchor sits in a trough (height −2) with zero slope
        let time = FRAC_PI_2 as f64;
        let expected = field.evaluate(0.0, 0.0, 0.0, 0.0, time).height();
        assert!((expected + 2.0).abs() < 1e-5);

        floater.update(&field, time, 0.016);

        let position = floater.body().position;
        assert!((position.y - 0.25 * expected).abs() < 1e-5);
        assert!(position.x.abs() < 1e-5);
        assert!(position.z.abs() < 1e-5);
    }

    #[test]
    fn test_horizontal_target_follows_wave_normal() {
        // The horizontal target adds the surface normal to the body position
        // rather than the Gerstner displacement; this keeps that behavior
        let field = single_wave();
        let mut floater = floater_at(Vec3::ZERO);

        floater.update(&field, 0.0, 0.016);

        let normal = field.evaluate(0.0, 0.0, 0.0, 0.0, 0.0).normal;
        assert!((floater.last_target().x - normal.x).abs() < 1e-6);
        assert!((floater.body().position.x - 0.25 * normal.x).abs() < 1e-6);
        assert!(floater.body().position.z.abs() < 1e-6);
    }

    #[test]
    fn test_calm_water_levels_and_holds_position() {
        let field = WaveField::flat();
        let tilted = Quat::from_rotation_x(0.3) * Quat::from_rotation_z(-0.2);
        let body = BodyTransform::at(Vec3::new(5.0, 3.0, -2.0)).with_orientation(tilted);
        let anchors = vec![
            Vec3::new(-2.0, 0.0, -4.0),
            Vec3::new(2.0, 0.0, -4.0),
            Vec3::new(-2.0, 0.0, 4.0),
            Vec3::new(2.0, 0.0, 4.0),
        ];
        let mut floater = Floater::new(body, anchors, hull(), FloaterParams::default()).unwrap();

        for _ in 0..200 {
            floater.update(&field, 0.0, 0.1);
        }

        let body = floater.body();
        assert!((body.position.x - 5.0).abs() < 1e-4);
        assert!((body.position.z + 2.0).abs() < 1e-4);
        assert!(body.position.y.abs() < 1e-4);
        assert!(body.orientation.angle_between(Quat::IDENTITY) < 1e-3);
        assert_eq!(floater.probe().attitude_normal, Vec3::Y);
    }

    #[test]
    fn test_rotation_is_rate_limited() {
        let field = WaveField::flat();
        let body = BodyTransform::default().with_orientation(Quat::from_rotation_x(0.5));
        let mut floater = Floater::new(body, Vec::new(), hull(), FloaterParams::default()).unwrap();

        floater.update(&field, 0.0, 0.5);

        // Budget is 0.5 s · 0.2 rad/s = 0.1 rad
        let remaining = floater.body().orientation.angle_between(Quat::IDENTITY);
        assert!((remaining - 0.4).abs() < 1e-4);
    }

    #[test]
    fn test_sinking_freezes_derived_state() {
        let field = single_wave();
        let mut floater = floater_at(Vec3::new(1.0, 0.0, 1.0));
        floater.power = -1.0;
        floater.update(&field, 0.3, 0.016);

        let position = floater.body().position;
        let velocity = floater.velocity();
        let center = floater.collision_sphere().center;
        let speed = floater.speed();

        floater.set_sinking(true);
        for i in 0..10 {
            floater.update(&field, 0.3 + i as f64, 0.016);
        }

        assert!(floater.is_sinking());
        assert_eq!(floater.body().position, position);
        assert_eq!(floater.velocity(), velocity);
        assert_eq!(floater.collision_sphere().center, center);
        assert_eq!(floater.speed(), speed);
    }

    #[test]
    fn test_reset_rearms_buoyancy() {
        let mut floater = floater_at(Vec3::ZERO);
        floater.heading = 1.2;
        floater.power = -3.0;
        floater.set_sinking(true);

        floater.reset();

        assert_eq!(floater.heading, 0.0);
        assert_eq!(floater.power, 0.0);
        assert_eq!(floater.speed(), 0.0);
        assert!(!floater.is_sinking());
        assert_eq!(floater.state(), FloatState::Active);
    }

    #[test]
    fn test_forces_consumed_once() {
        let field = WaveField::flat();
        let mut floater = floater_at(Vec3::ZERO);

        floater.push_force(Vec2::new(4.0, -8.0));
        floater.update(&field, 0.0, 0.016);

        assert!(floater.pending_forces().is_empty());
        assert_eq!(floater.last_target(), Vec3::new(4.0, 0.0, -8.0));
        assert_eq!(floater.body().position, Vec3::new(1.0, 0.0, -2.0));

        floater.update(&field, 0.0, 0.016);

        // Target is back on the body: no second shift from the drained force
        assert_eq!(floater.last_target(), Vec3::new(1.0, 0.0, -2.0));
        assert_eq!(floater.body().position, Vec3::new(1.0, 0.0, -2.0));
    }

    #[test]
    fn test_thrust_follows_heading() {
        let field = WaveField::flat();
        let mut floater = floater_at(Vec3::ZERO);
        floater.heading = FRAC_PI_2;
        floater.power = 2.0;

        floater.update(&field, 0.0, 0.016);

        let target = floater.last_target();
        assert!((target.x - 2.0).abs() < 1e-6);
        assert!(target.z.abs() < 1e-6);
        assert_eq!(floater.body().hull_yaw, FRAC_PI_2);
    }

    #[test]
    fn test_velocity_and_display_speed() {
        let field = WaveField::flat();
        let mut floater = floater_at(Vec3::ZERO);
        floater.power = 3.0; // heading 0 pushes along +Z

        floater.update(&field, 0.0, 0.02);

        assert_eq!(floater.velocity(), Vec3::new(0.0, 0.0, 3.0));
        assert!((floater.speed() - 3.0 * 1000.0 * 0.02).abs() < 1e-3);
        assert_eq!(floater.probe().velocity_direction, Vec3::Z);
    }

    #[test]
    fn test_standstill_has_no_nan() {
        let field = WaveField::flat();
        let mut floater = floater_at(Vec3::ZERO);

        floater.update(&field, 0.0, 0.016);

        assert_eq!(floater.velocity(), Vec3::ZERO);
        assert_eq!(floater.speed(), 0.0);
        assert_eq!(floater.probe().velocity_direction, Vec3::ZERO);
        assert_eq!(floater.probe().anchors[0].gravity_slide, Vec3::NEG_Y);
    }

    #[test]
    fn test_non_finite_inputs_are_sanitized() {
        let field = single_wave();
        let mut floater = floater_at(Vec3::ZERO);
        floater.heading = f32::NAN;
        floater.power = f32::INFINITY;
        floater.push_force(Vec2::new(f32::NAN, 1.0));
        floater.body_mut().position = Vec3::new(f32::NAN, 0.0, 0.0);

        floater.update(&field, 1.0, f32::NAN);

        assert_eq!(floater.heading, 0.0);
        assert_eq!(floater.power, 0.0);
        assert!(floater.body().position.is_finite());
        assert!(floater.body().orientation.is_finite());
        assert!(floater.velocity().is_finite());
        assert!(floater.speed().is_finite());

        floater.update(&field, f64::NAN, 0.016);
        floater.update(&field, f64::INFINITY, 0.016);

        assert!(floater.body().position.is_finite());
        assert!(floater.last_target().is_finite());
    }

    #[test]
    fn test_non_finite_time_skips_tick() {
        let field = single_wave();
        let mut floater = floater_at(Vec3::new(2.0, 1.0, -3.0));
        floater.update(&field, 0.5, 0.016);
        let position = floater.body().position;
        let target = floater.last_target();

        floater.push_force(Vec2::new(1.0, 0.0));
        floater.update(&field, f64::NAN, 0.016);

        assert_eq!(floater.body().position, position);
        assert_eq!(floater.last_target(), target);
        // The force waits for the next valid tick
        assert_eq!(floater.pending_forces(), &[Vec2::new(1.0, 0.0)]);

        floater.update(&field, 0.5, 0.016);
        assert!(floater.pending_forces().is_empty());
        assert!(floater.body().position.is_finite());
    }

    #[test]
    fn test_overflowing_target_is_not_committed() {
        let field = WaveField::flat();
        let mut floater = floater_at(Vec3::ZERO);
        floater.push_force(Vec2::new(f32::MAX, 0.0));
        floater.push_force(Vec2::new(f32::MAX, 0.0));

        floater.update(&field, 0.0, 0.016);

        assert_eq!(floater.body().position, Vec3::ZERO);
        assert_eq!(floater.last_target(), Vec3::ZERO);
        assert!(floater.pending_forces().is_empty());

        floater.push_force(Vec2::new(4.0, 0.0));
        floater.update(&field, 0.0, 0.016);
        assert_eq!(floater.body().position, Vec3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_primary_recenters_origin() {
        let field = WaveField::flat();
        let origin = SharedOrigin::new();
        let mut floater = floater_at(Vec3::new(40.0, 0.0, -8.0));
        floater.set_primary(origin.clone());
        assert!(floater.is_primary());

        floater.update(&field, 0.0, 0.016);

        assert_eq!(origin.get(), Vec2::new(40.0, -8.0));
    }

    #[test]
    fn test_anchor_probe_records_world_positions() {
        let field = single_wave();
        let body = BodyTransform::at(Vec3::new(10.0, 0.0, 0.0))
            .with_orientation(Quat::from_rotation_y(FRAC_PI_2));
        let anchors = vec![Vec3::new(0.0, 0.0, 3.0)];
        let mut floater = Floater::new(body, anchors, hull(), FloaterParams::default()).unwrap();

        floater.update(&field, 0.0, 0.016);

        // +Z rotated a quarter turn about Y lands on +X
        let probe = &floater.probe().anchors[0];
        assert!((probe.world_position - Vec3::new(13.0, 0.0, 0.0)).length() < 1e-5);
        assert!((probe.wave_normal.length() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_rotate_towards_reaches_target() {
        let to = Quat::from_rotation_z(0.05);
        let result = rotate_towards(Quat::IDENTITY, to, 1.0);
        assert!(result.angle_between(to) < 1e-5);

        let unchanged = rotate_towards(Quat::IDENTITY, to, 0.0);
        assert_eq!(unchanged, Quat::IDENTITY);
    }
}
