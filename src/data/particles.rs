// particles.rs - Lifetime earnings of a bachelor's-degree holder, per group
//
// One particle stands for $10,000. Every group starts from the same
// baseline mass; the part it does not keep is its loss.

use serde::Serialize;

use crate::color::Rgb;

/// Dollars represented by one particle
pub const DOLLARS_PER_PARTICLE: u32 = 10_000;

#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupSpec {
    pub name: &'static str,
    pub earnings: u32,
    pub particle_count: u32,
    pub loss: u32,
    pub loss_particles: u32,
    pub color: Rgb,
    /// Fraction of canvas height below which falling particles fade
    pub target_y: f32,
    pub fall_away: bool,
    pub active: bool,
}

pub static PARTICLE_GROUPS: [GroupSpec; 4] = [
    GroupSpec {
        name: "White Men BA",
        earnings: 3_889_600,
        particle_count: 389,
        loss: 0,
        loss_particles: 0,
        color: Rgb::hex(0x10b981),
        target_y: 0.25,
        fall_away: false,
        active: true,
    },
    GroupSpec {
        name: "White Women BA",
        earnings: 2_988_960,
        particle_count: 299,
        loss: 900_640,
        loss_particles: 90,
        color: Rgb::hex(0xf59e0b),
        target_y: 0.65,
        fall_away: true,
        active: false,
    },
    GroupSpec {
        name: "Black Women",
        earnings: 1_849_120,
        particle_count: 185,
        loss: 2_040_480,
        loss_particles: 204,
        color: Rgb::hex(0xef4444),
        target_y: 0.75,
        fall_away: true,
        active: false,
    },
    GroupSpec {
        name: "Hispanic Women",
        earnings: 1_664_000,
        particle_count: 166,
        loss: 2_225_600,
        loss_particles: 223,
        color: Rgb::hex(0xec4899),
        target_y: 0.85,
        fall_away: true,
        active: false,
    },
];
