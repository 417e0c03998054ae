//! Helm: turns per-tick throttle/turn commands into floater heading and power.
//!
//! Input devices are not read here; a keyboard, gyroscope or AI produces
//! [`HelmCommand`]s and the helm applies the ramp once per tick.

use crate::floater::{Floater, Transform};
use crate::params::HelmParams;

/// Rudder command for one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Turn {
    #[default]
    Straight,
    /// Counter-clockwise seen from above (heading increases)
    Port,
    /// Clockwise seen from above (heading decreases)
    Starboard,
}

/// Control input for one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HelmCommand {
    pub throttle: bool,
    pub turn: Turn,
}

impl HelmCommand {
    pub fn ahead() -> Self {
        Self {
            throttle: true,
            turn: Turn::Straight,
        }
    }

    pub fn idle() -> Self {
        Self::default()
    }
}

/// Throttle and rudder ramp for one boat
#[derive(Debug, Clone)]
pub struct Helm {
    params: HelmParams,
    /// Cruise readout, ramps toward `cruise_max` while throttling
    cruise: f32,
}

impl Helm {
    pub fn new(params: HelmParams) -> Self {
        Self {
            params,
            cruise: 0.0,
        }
    }

    pub fn cruise(&self) -> f32 {
        self.cruise
    }

    pub fn reset(&mut self) {
        self.cruise = 0.0;
    }

    /// Apply one tick of `command` to the floater's controls
    pub fn steer<T: Transform>(&mut self, command: HelmCommand, floater: &mut Floater<T>) {
        let p = &self.params;

        if command.throttle {
            floater.power = (floater.power - p.power_step).max(p.power_floor);
            self.cruise = (self.cruise + p.cruise_increment).min(p.cruise_max);
        } else if self.cruise > 0.0 {
            self.cruise = (self.cruise - p.cruise_decay).max(0.0);
            floater.power = (floater.power + p.recover_ahead).min(0.0);
        } else if self.cruise < 0.0 {
            self.cruise = (self.cruise + p.cruise_decay).min(0.0);
            floater.power = (floater.power - p.recover_astern).max(0.0);
        }

        match command.turn {
            Turn::Straight => {}
            Turn::Port => floater.heading += p.turn_rate_rad,
            Turn::Starboard => floater.heading -= p.turn_rate_rad,
        }
    }
}
