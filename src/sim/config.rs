// config.rs - Physics and presentation constants
//
// Defaults are tuned so converging particles settle without visible
// oscillation; change gain and damping together.

use serde::Deserialize;
use std::ops::RangeInclusive;
use std::path::Path;

use crate::color::Rgb;
use crate::error::{Error, Result};

const UNIT: RangeInclusive<f32> = 0.0..=1.0;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    // Converging
    pub gain: f32,
    pub damping: f32,
    /// No pull inside this distance of the attractor
    pub settle_radius: f32,
    /// Attractor height as a fraction of canvas height
    pub attractor_y: f32,

    // Falling
    pub gravity: f32,
    pub fall_damping: f32,
    pub jitter: f32,
    pub jitter_damping: f32,
    pub fade: f32,

    // Appearance
    pub radius: f32,
    pub initial_alpha: f32,
    pub visible_alpha: f32,
    pub seed_box: f32,
    pub background: Rgb,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            gain: 0.0005,
            damping: 0.92,
            settle_radius: 5.0,
            attractor_y: 0.25,
            gravity: 0.15,
            fall_damping: 0.98,
            jitter: 0.1,
            jitter_damping: 0.95,
            fade: 0.98,
            radius: 3.0,
            initial_alpha: 0.85,
            visible_alpha: 0.05,
            seed_box: 120.0,
            background: Rgb::hex(0x1a1a2e),
        }
    }
}

impl SimConfig {
    /// Overrides as JSON; absent keys keep their defaults
    pub fn from_json(s: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        Self::from_json(&std::fs::read_to_string(path)?)
    }

    /// Damping and fade factors must lie in (0, 1] so speeds stay bounded
    /// and alpha never grows; alphas in [0, 1]; sizes and gain >= 0.
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("damping", self.damping),
            ("fall_damping", self.fall_damping),
            ("jitter_damping", self.jitter_damping),
            ("fade", self.fade),
        ] {
            if !(value > 0.0 && value <= 1.0) {
                return Err(Error::InvalidConfig { field, value, range: "(0, 1]" });
            }
        }
        for (field, value) in [("initial_alpha", self.initial_alpha), ("visible_alpha", self.visible_alpha)] {
            if !UNIT.contains(&value) {
                return Err(Error::InvalidConfig { field, value, range: "[0, 1]" });
            }
        }
        for (field, value) in [("gain", self.gain), ("radius", self.radius), ("seed_box", self.seed_box)] {
            if !(value >= 0.0 && value.is_finite()) {
                return Err(Error::InvalidConfig { field, value, range: "[0, inf)" });
            }
        }
        Ok(())
    }
}
