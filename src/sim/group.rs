// group.rs - Runtime state of one demographic group

use serde::Serialize;

use crate::color::Rgb;
use crate::data::GroupSpec;

/// Everything but `active` is fixed once the simulation is built.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticleGroup {
    pub name: String,
    pub baseline_earnings: u32,
    pub particle_count: u32,
    pub loss_amount: u32,
    pub loss_particles: u32,
    pub color: Rgb,
    pub target_y: f32,
    pub fall_away: bool,
    pub active: bool,
}

impl From<&GroupSpec> for ParticleGroup {
    fn from(s: &GroupSpec) -> Self {
        Self {
            name: s.name.to_string(),
            baseline_earnings: s.earnings,
            particle_count: s.particle_count,
            loss_amount: s.loss,
            loss_particles: s.loss_particles,
            color: s.color,
            target_y: s.target_y,
            fall_away: s.fall_away,
            active: s.active,
        }
    }
}
