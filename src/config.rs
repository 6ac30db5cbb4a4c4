use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Tunable geometry and kinematics of a generated atom.
///
/// Every field falls back to its default when absent from a config file, so an
/// empty JSON object is a valid configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AtomConfig {
    /// Nucleus radius for Z = 0; the radius grows with the cube root of Z.
    pub nucleus_base_radius: f32,
    pub nucleus_growth: f32,
    /// Gap between the nucleus surface and the innermost orbit.
    pub shell_offset: f32,
    pub shell_spacing: f32,
    /// Angular speed (rad/tick) of shell 0; outer shells divide it by `shell + 1`.
    pub core_speed: f32,
    pub valence_speed: f32,
    /// Fixed sampler seed. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for AtomConfig {
    fn default() -> Self {
        Self {
            nucleus_base_radius: 0.35,
            nucleus_growth: 0.15,
            shell_offset: 0.9,
            shell_spacing: 1.1,
            core_speed: 0.012,
            valence_speed: 0.0125,
            seed: None,
        }
    }
}

impl AtomConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        log::debug!("Loaded atom config from {}", path.display());
        Self::from_json(&json)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    fn validate(&self) -> Result<()> {
        let lengths = [
            ("nucleus_base_radius", self.nucleus_base_radius),
            ("nucleus_growth", self.nucleus_growth),
            ("shell_offset", self.shell_offset),
            ("shell_spacing", self.shell_spacing),
        ];
        for (name, value) in lengths {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::Config(format!(
                    "{name} must be a non-negative finite number, got {value}"
                )));
            }
        }
        if self.nucleus_base_radius <= 0.0 {
            return Err(Error::Config("nucleus_base_radius must be positive".into()));
        }
        if !self.core_speed.is_finite() || !self.valence_speed.is_finite() {
            return Err(Error::Config("orbit speeds must be finite".into()));
        }
        if self.core_speed <= 0.0 {
            return Err(Error::Config(format!(
                "core_speed must be positive, got {}",
                self.core_speed
            )));
        }
        if self.valence_speed <= self.core_speed {
            return Err(Error::Config(format!(
                "valence_speed ({}) must exceed core_speed ({})",
                self.valence_speed, self.core_speed
            )));
        }
        Ok(())
    }
}
