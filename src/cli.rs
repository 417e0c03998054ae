//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::helm::{HelmCommand, Turn};
use crate::params::SimConfig;

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "seafloat")]
#[command(about = "Headless Gerstner ocean and floating-boat simulation", long_about = None)]
pub struct Args {
    /// Number of boats to float (the first one is the camera boat)
    #[arg(long, value_name = "COUNT", default_value = "3")]
    pub boats: usize,

    /// Number of ticks to simulate
    #[arg(long, value_name = "TICKS", default_value = "600")]
    pub ticks: u32,

    /// Seconds per tick
    #[arg(long, value_name = "SECONDS", default_value = "0.016666668")]
    pub dt: f32,

    /// TOML configuration file (defaults are used when omitted)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Hold the throttle on the camera boat
    #[arg(long)]
    pub throttle: bool,

    /// Rudder for the camera boat: straight (default), port, starboard
    #[arg(long, value_name = "TURN", default_value = "straight")]
    pub turn: String,
}

impl Args {
    /// Load configuration from `--config`, or use defaults
    pub fn load_config(&self) -> Result<SimConfig, String> {
        match &self.config {
            Some(path) => {
                log::info!("Loading config from {}", path.display());
                SimConfig::load(path)
            }
            None => Ok(SimConfig::default()),
        }
    }

    /// Parse the camera boat's helm command from command-line arguments
    pub fn helm_command(&self) -> HelmCommand {
        let turn = match self.turn.to_lowercase().as_str() {
            "straight" => Turn::Straight,
            "port" => Turn::Port,
            "starboard" => Turn::Starboard,
            other => {
                log::warn!("Unknown turn '{}', holding straight", other);
                Turn::Straight
            }
        };
        HelmCommand {
            throttle: self.throttle,
            turn,
        }
    }
}
