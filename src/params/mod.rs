//! Parameter definitions with physical units and documented semantics.
//!
//! All tuning constants live here with:
//! - Physical units (meters, seconds, radians)
//! - Documented ranges and meanings
//! - A `validate()` that fails fast before any tick runs

mod floater;
mod helm;
mod ocean;
mod world;

use std::path::Path;

use serde::Deserialize;

// Re-export all types
pub use floater::FloaterParams;
pub use helm::HelmParams;
pub use ocean::{OceanParams, WaveConfig};
pub use world::WorldParams;

/// Complete simulation configuration, loadable from TOML
///
/// Every section is optional in the file; missing sections use defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub ocean: OceanParams,
    pub floater: FloaterParams,
    pub helm: HelmParams,
    pub world: WorldParams,
}

impl SimConfig {
    /// Parse configuration from TOML text and validate it
    pub fn from_toml_str(text: &str) -> Result<Self, String> {
        let config: SimConfig =
            toml::from_str(text).map_err(|e| format!("Invalid config: {}", e))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, String> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
        Self::from_toml_str(&text)
    }

    /// Validate every section
    pub fn validate(&self) -> Result<(), String> {
        self.ocean.validate()?;
        self.floater.validate()?;
        self.helm.validate()?;
        self.world.validate()?;
        Ok(())
    }
}
