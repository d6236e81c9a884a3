//! Blast tool settings
//!
//! Persisted as JSON next to the host binary; a missing or unreadable file
//! falls back to defaults.

use std::path::Path;

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::BlastParams;

/// Blast tool settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Blast radius in cells
    pub blast_radius: i32,
    /// Blast power (damage at the center before resistance)
    pub blast_power: f32,

    // === Limits (slider ranges) ===
    pub power_min: f32,
    pub power_max: f32,
    pub radius_max: i32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            blast_radius: DEFAULT_BLAST_RADIUS,
            blast_power: DEFAULT_BLAST_POWER,

            power_min: MIN_BLAST_POWER,
            power_max: MAX_BLAST_POWER,
            radius_max: MAX_BLAST_RADIUS,
        }
    }
}

impl Settings {
    /// Default settings file name
    pub const FILE_NAME: &'static str = "ore-blast.json";

    /// Effective radius, clamped to [1, radius_max]
    pub fn effective_radius(&self) -> i32 {
        self.blast_radius.clamp(1, self.radius_max.max(1))
    }

    /// Effective power, clamped to [power_min, power_max]
    pub fn effective_power(&self) -> f32 {
        let min = self.power_min.max(0.0);
        let max = self.power_max.max(min);
        if self.blast_power.is_finite() {
            self.blast_power.clamp(min, max)
        } else {
            min
        }
    }

    /// Blast parameters at `center` using the clamped radius and power
    pub fn blast_at(&self, center: IVec2) -> BlastParams {
        BlastParams {
            center,
            radius: self.effective_radius(),
            power: self.effective_power(),
        }
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Load settings from a JSON file
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Invalid settings in {}: {e}; using defaults", path.display());
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Save settings to a JSON file
    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        let json = self.to_json().map_err(std::io::Error::other)?;
        std::fs::write(path, json)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}
