//! Frame driver: advances the ocean clock once per tick, then runs every boat's
//! helm and floater in insertion order, and owns the vertical motion of boats
//! that have stopped floating.

use glam::{Quat, Vec2, Vec3};

use crate::floater::{Floater, Transform};
use crate::helm::{Helm, HelmCommand};
use crate::ocean::{OceanClock, WaveField, WaveUniforms};
use crate::params::{HelmParams, SimConfig, WorldParams};

/// Stable handle to a boat in a [`Fleet`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BoatId(u32);

impl std::fmt::Display for BoatId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "boat#{}", self.0)
    }
}

/// What currently moves a boat vertically
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fate {
    /// Buoyancy is active
    Afloat,
    /// Sailed off the water; drops, then respawns with buoyancy re-armed
    Falling,
    /// Going down for good; removed once it reaches the fall depth
    Scuttled,
}

/// Lifecycle changes reported by [`Fleet::tick`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FleetEvent {
    LeftWater(BoatId),
    Respawned(BoatId),
    Sunk(BoatId),
}

/// One floating body with its controls
pub struct Boat<T: Transform> {
    id: BoatId,
    pub floater: Floater<T>,
    helm: Helm,
    /// Held until replaced, like a key held across frames
    command: HelmCommand,
    spawn_position: Vec3,
    spawn_orientation: Quat,
    fate: Fate,
}

impl<T: Transform> Boat<T> {
    pub fn id(&self) -> BoatId {
        self.id
    }

    pub fn fate(&self) -> Fate {
        self.fate
    }

    pub fn helm(&self) -> &Helm {
        &self.helm
    }

    pub fn command(&self) -> HelmCommand {
        self.command
    }

    pub fn spawn_position(&self) -> Vec3 {
        self.spawn_position
    }
}

/// Every floating body on one ocean
pub struct Fleet<T: Transform> {
    field: WaveField,
    clock: OceanClock,
    world: WorldParams,
    helm_params: HelmParams,
    boats: Vec<Boat<T>>,
    next_id: u32,
}

impl<T: Transform> Fleet<T> {
    pub fn new(field: WaveField, clock: OceanClock, world: WorldParams, helm_params: HelmParams) -> Self {
        Self {
            field,
            clock,
            world,
            helm_params,
            boats: Vec::new(),
            next_id: 0,
        }
    }

    /// Build the ocean described by a configuration
    pub fn from_config(config: &SimConfig) -> Result<Self, String> {
        config.validate()?;
        let field = config.ocean.build_field()?;
        Ok(Self::new(
            field,
            OceanClock::new(config.ocean.time_scale),
            config.world,
            config.helm,
        ))
    }

    /// Add a boat; its current pose becomes the respawn pose
    ///
    /// Ids are never reused, so launching fails once they are exhausted.
    pub fn launch(&mut self, floater: Floater<T>) -> Result<BoatId, String> {
        let id = BoatId(self.next_id);
        self.next_id = self
            .next_id
            .checked_add(1)
            .ok_or_else(|| format!("boat ids exhausted at {}", id))?;

        let spawn_position = floater.body().position();
        let spawn_orientation = floater.body().orientation();
        log::info!("Launched {} at {}", id, spawn_position);

        self.boats.push(Boat {
            id,
            floater,
            helm: Helm::new(self.helm_params),
            command: HelmCommand::idle(),
            spawn_position,
            spawn_orientation,
            fate: Fate::Afloat,
        });
        Ok(id)
    }

    /// Set the helm command applied on every following tick
    pub fn steer(&mut self, id: BoatId, command: HelmCommand) -> bool {
        match self.boat_mut(id) {
            Some(boat) => {
                boat.command = command;
                true
            }
            None => false,
        }
    }

    /// Start a permanent sink; the boat is removed once it is deep enough
    pub fn scuttle(&mut self, id: BoatId) -> bool {
        let Some(boat) = self.boat_mut(id) else {
            return false;
        };
        if boat.fate == Fate::Scuttled {
            return true;
        }
        boat.fate = Fate::Scuttled;
        boat.floater.set_sinking(true);
        log::info!("{} scuttled", id);
        true
    }

    /// Advance the whole ocean by one frame
    pub fn tick(&mut self, delta_s: f32) -> Vec<FleetEvent> {
        let delta_s = if delta_s.is_finite() { delta_s.max(0.0) } else { 0.0 };

        let Self {
            field,
            clock,
            world,
            boats,
            ..
        } = self;
        clock.advance(delta_s);
        let time_s = clock.time_f64();
        let mut events = Vec::new();

        for boat in boats.iter_mut() {
            match boat.fate {
                Fate::Afloat => {
                    let position = boat.floater.body().position();
                    if world.is_off_water(position.x, position.z) {
                        boat.fate = Fate::Falling;
                        boat.floater.set_sinking(true);
                        boat.helm.reset();
                        log::info!("{} left the water at {}", boat.id, position);
                        events.push(FleetEvent::LeftWater(boat.id));
                        continue;
                    }
                    boat.helm.steer(boat.command, &mut boat.floater);
                    boat.floater.update(field, time_s, delta_s);
                }
                Fate::Falling => {
                    let depth = descend(boat.floater.body_mut(), world.fall_speed_m_per_s * delta_s);
                    if depth < world.fall_depth_m {
                        let body = boat.floater.body_mut();
                        body.set_position(boat.spawn_position);
                        body.set_orientation(boat.spawn_orientation);
                        boat.floater.reset();
                        boat.helm.reset();
                        boat.fate = Fate::Afloat;
                        log::info!("{} respawned at {}", boat.id, boat.spawn_position);
                        events.push(FleetEvent::Respawned(boat.id));
                    }
                }
                Fate::Scuttled => {
                    let depth = descend(boat.floater.body_mut(), world.scuttle_speed_m_per_s * delta_s);
                    if depth < world.fall_depth_m {
                        log::info!("{} sunk", boat.id);
                        events.push(FleetEvent::Sunk(boat.id));
                    }
                }
            }
        }

        let fall_depth = world.fall_depth_m;
        boats.retain(|boat| {
            boat.fate != Fate::Scuttled || boat.floater.body().position().y >= fall_depth
        });

        events
    }

    /// Shader uniforms for the current tick
    pub fn uniforms(&self, origin_offset: Vec2) -> WaveUniforms {
        WaveUniforms::new(&self.field, self.clock.time(), origin_offset)
    }

    pub fn field(&self) -> &WaveField {
        &self.field
    }

    pub fn clock(&self) -> &OceanClock {
        &self.clock
    }

    pub fn world(&self) -> &WorldParams {
        &self.world
    }

    pub fn boats(&self) -> &[Boat<T>] {
        &self.boats
    }

    pub fn boat(&self, id: BoatId) -> Option<&Boat<T>> {
        self.boats.iter().find(|boat| boat.id == id)
    }

    pub fn boat_mut(&mut self, id: BoatId) -> Option<&mut Boat<T>> {
        self.boats.iter_mut().find(|boat| boat.id == id)
    }

    pub fn len(&self) -> usize {
        self.boats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boats.is_empty()
    }
}

/// Lower a body by `drop_m`, returning its new height
fn descend<T: Transform>(body: &mut T, drop_m: f32) -> f32 {
    let mut position = body.position();
    position.y -= drop_m;
    body.set_position(position);
    position.y
}
