//! Seafloat - headless ocean run
//!
//! Floats a handful of boats on the configured Gerstner sea and logs what
//! the physics core does with them, frame by frame.

use std::f32::consts::TAU;

use clap::Parser;
use glam::{Quat, Vec3};

use seafloat::cli::Args;
use seafloat::fleet::{Fleet, FleetEvent};
use seafloat::floater::{Aabb, BodyTransform, Floater, SharedOrigin};
use seafloat::params::SimConfig;

/// Spacing of the spawn ring (meters)
const SPAWN_RING_RADIUS_M: f32 = 400.0;

/// Boats start this far under rest level, like the hull sits in the water
const SPAWN_DEPTH_M: f32 = -3.0;

/// Log every N ticks
const STATUS_INTERVAL: u32 = 60;

/// Bow, stern, port and starboard sample points of a generic hull
fn hull_anchors() -> Vec<Vec3> {
    vec![
        Vec3::new(0.0, 0.0, -8.0),
        Vec3::new(0.0, 0.0, 8.0),
        Vec3::new(-3.0, 0.0, 0.0),
        Vec3::new(3.0, 0.0, 0.0),
    ]
}

/// Spawn pose of boat `index`: the first at the center, the rest on a ring
fn spawn_pose(index: usize, count: usize) -> BodyTransform {
    if index == 0 {
        return BodyTransform::at(Vec3::new(0.0, SPAWN_DEPTH_M, -50.0));
    }
    let angle = TAU * index as f32 / (count.max(2) - 1) as f32;
    let position = Vec3::new(
        angle.cos() * SPAWN_RING_RADIUS_M,
        SPAWN_DEPTH_M,
        angle.sin() * SPAWN_RING_RADIUS_M,
    );
    BodyTransform::at(position).with_orientation(Quat::from_rotation_y(angle))
}

fn build_fleet(config: &SimConfig, boats: usize, origin: &SharedOrigin) -> Result<Fleet<BodyTransform>, String> {
    let mut fleet = Fleet::from_config(config)?;
    let hull = Aabb::from_half_extents(Vec3::new(3.5, 2.0, 9.0))?;

    for index in 0..boats {
        let mut floater = Floater::new(spawn_pose(index, boats), hull_anchors(), hull, config.floater)?;
        if index == 0 {
            floater.set_primary(origin.clone());
        }
        fleet.launch(floater)?;
    }
    Ok(fleet)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    println!("Seafloat - Gerstner ocean physics core");
    println!("Initializing systems...\n");

    let config = args.load_config()?;
    let origin = SharedOrigin::new();
    let mut fleet = build_fleet(&config, args.boats, &origin)?;

    let command = args.helm_command();
    if let Some(camera_boat) = fleet.boats().first().map(|boat| boat.id()) {
        fleet.steer(camera_boat, command);
    }

    log::info!(
        "Simulating {} boats for {} ticks of {:.4}s ({} wave components, sharpness {:.3})",
        fleet.len(),
        args.ticks,
        args.dt,
        fleet.field().components().len(),
        fleet.field().total_sharpness()
    );

    for tick in 1..=args.ticks {
        for event in fleet.tick(args.dt) {
            match event {
                FleetEvent::LeftWater(id) => log::info!("Tick {}: {} left the water", tick, id),
                FleetEvent::Respawned(id) => log::info!("Tick {}: {} respawned", tick, id),
                FleetEvent::Sunk(id) => log::info!("Tick {}: {} sunk", tick, id),
            }
        }

        if tick % STATUS_INTERVAL == 0 {
            for boat in fleet.boats() {
                let body = boat.floater.body();
                log::info!(
                    "Tick {}: {} pos=({:.2}, {:.2}, {:.2}) speed={:.1} fate={:?}",
                    tick,
                    boat.id(),
                    body.position.x,
                    body.position.y,
                    body.position.z,
                    boat.floater.speed(),
                    boat.fate()
                );
            }
            let uniforms = fleet.uniforms(origin.get());
            log::debug!(
                "Tick {}: render origin ({:.1}, {:.1}), wave time {:.2}s",
                tick,
                uniforms.origin_offset[0],
                uniforms.origin_offset[1],
                uniforms.time
            );
        }
    }

    println!("\nFinal state after {:.2}s of wave time:", fleet.clock().time());
    for boat in fleet.boats() {
        let body = boat.floater.body();
        println!(
            "  {}: position ({:.2}, {:.2}, {:.2}), heading {:.3} rad, speed {:.1}",
            boat.id(),
            body.position.x,
            body.position.y,
            body.position.z,
            boat.floater.heading,
            boat.floater.speed()
        );
    }

    Ok(())
}
