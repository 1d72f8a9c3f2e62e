// particle.rs - Particle storage and integration
//
// Structure-of-Arrays layout for cache-friendly iteration.

use serde::Serialize;

use super::{ParticleGroup, SimConfig, Simulation};

#[derive(Clone, Debug)]
pub struct Particles {
    // Position
    pub x: Vec<f32>,
    pub y: Vec<f32>,

    // Velocity
    pub vx: Vec<f32>,
    pub vy: Vec<f32>,

    // Appearance
    pub radius: Vec<f32>,
    pub alpha: Vec<f32>,

    /// Lost-earnings particle (falls if its group falls away)
    pub falling: Vec<bool>,
    /// Owning group, index into the simulation's group list
    pub group: Vec<usize>,
}

/// Copy of one particle's state
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub radius: f32,
    pub alpha: f32,
    pub falling: bool,
    pub group: usize,
}

impl Particles {
    pub fn new() -> Self {
        Self {
            x: Vec::new(),
            y: Vec::new(),
            vx: Vec::new(),
            vy: Vec::new(),
            radius: Vec::new(),
            alpha: Vec::new(),
            falling: Vec::new(),
            group: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn get(&self, i: usize) -> Option<Particle> {
        (i < self.len()).then(|| Particle {
            x: self.x[i],
            y: self.y[i],
            vx: self.vx[i],
            vy: self.vy[i],
            radius: self.radius[i],
            alpha: self.alpha[i],
            falling: self.falling[i],
            group: self.group[i],
        })
    }

    /// Indices of every particle owned by `group`
    pub fn of_group(&self, group: usize) -> impl Iterator<Item = usize> + '_ {
        (0..self.len()).filter(move |&i| self.group[i] == group)
    }

    pub(super) fn push(&mut self, x: f32, y: f32, group: usize, falling: bool, cfg: &SimConfig) {
        self.x.push(x);
        self.y.push(y);
        self.vx.push(0.0);
        self.vy.push(0.0);
        self.radius.push(cfg.radius);
        self.alpha.push(cfg.initial_alpha);
        self.falling.push(falling);
        self.group.push(group);
    }

    /// Integrate one step; particles of inactive groups are left untouched
    #[allow(clippy::too_many_arguments)]
    pub(super) fn update(
        &mut self,
        groups: &[ParticleGroup],
        cfg: &SimConfig,
        screen_w: f32,
        screen_h: f32,
        (ax, ay): (f32, f32),
        dt: f32,
        rng: &mut u32,
    ) {
        let damping = decay(cfg.damping, dt);
        let fall_damping = decay(cfg.fall_damping, dt);
        let jitter_damping = decay(cfg.jitter_damping, dt);
        let fade = decay(cfg.fade, dt);

        for i in 0..self.len() {
            let g = &groups[self.group[i]];
            if !g.active {
                continue;
            }

            if self.falling[i] && g.fall_away {
                let target = screen_h * g.target_y;

                self.vy[i] += cfg.gravity * dt;
                self.vy[i] *= fall_damping;

                self.vx[i] += (Simulation::rand(rng) - 0.5) * cfg.jitter * dt;
                self.vx[i] *= jitter_damping;

                self.y[i] += self.vy[i] * dt;
                self.x[i] += self.vx[i] * dt;

                if self.y[i] > target {
                    self.alpha[i] *= fade;
                }
            } else {
                let dx = ax - self.x[i];
                let dy = ay - self.y[i];
                let dist = (dx * dx + dy * dy).sqrt();

                if dist > cfg.settle_radius {
                    self.vx[i] += dx * cfg.gain * dt;
                    self.vy[i] += dy * cfg.gain * dt;
                }

                self.vx[i] *= damping;
                self.vy[i] *= damping;

                self.x[i] += self.vx[i] * dt;
                self.y[i] += self.vy[i] * dt;
            }

            // y is free to leave the bottom of the frame
            self.x[i] = self.x[i].clamp(0.0, screen_w);
        }
    }
}

impl Default for Particles {
    fn default() -> Self {
        Self::new()
    }
}

/// Per-frame factor scaled to `dt` frames; exact at dt = 1
#[inline]
fn decay(factor: f32, dt: f32) -> f32 {
    if dt == 1.0 { factor } else { factor.powf(dt) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::PARTICLE_GROUPS;
    use approx::assert_relative_eq;

    fn groups(active: bool) -> Vec<ParticleGroup> {
        PARTICLE_GROUPS
            .iter()
            .map(|s| ParticleGroup { active, ..ParticleGroup::from(s) })
            .collect()
    }

    fn one(x: f32, y: f32, group: usize, falling: bool) -> Particles {
        let mut p = Particles::new();
        p.push(x, y, group, falling, &SimConfig::default());
        p
    }

    #[test]
    fn inactive_group_is_frozen() {
        let gs = groups(false);
        let mut p = one(10.0, 10.0, 1, true);
        p.vx[0] = 2.0;
        let mut rng = 1;
        p.update(&gs, &SimConfig::default(), 800.0, 500.0, (400.0, 125.0), 1.0, &mut rng);
        assert_eq!(p.get(0).unwrap().x, 10.0);
        assert_eq!(p.vx[0], 2.0);
        assert_eq!(rng, 1, "inactive particles must not draw randomness");
    }

    #[test]
    fn converging_first_step() {
        let gs = groups(true);
        let mut p = one(300.0, 125.0, 0, false);
        let mut rng = 1;
        p.update(&gs, &SimConfig::default(), 800.0, 500.0, (400.0, 125.0), 1.0, &mut rng);
        // vx = 100 * 0.0005 * 0.92
        assert_relative_eq!(p.vx[0], 0.046, epsilon = 1e-6);
        assert_relative_eq!(p.x[0], 300.046, epsilon = 1e-4);
        assert_eq!(p.vy[0], 0.0);
    }

    #[test]
    fn no_pull_inside_settle_radius() {
        let gs = groups(true);
        let mut p = one(403.0, 125.0, 0, false);
        p.vx[0] = 1.0;
        let mut rng = 1;
        p.update(&gs, &SimConfig::default(), 800.0, 500.0, (400.0, 125.0), 1.0, &mut rng);
        assert_relative_eq!(p.vx[0], 0.92);
    }

    #[test]
    fn falling_particle_of_non_falling_group_converges() {
        let gs = groups(true);
        // group 0 never falls away
        let mut p = one(300.0, 125.0, 0, true);
        let mut rng = 1;
        p.update(&gs, &SimConfig::default(), 800.0, 500.0, (400.0, 125.0), 1.0, &mut rng);
        assert!(p.vx[0] > 0.0);
        assert_eq!(p.vy[0], 0.0);
        assert_eq!(rng, 1);
    }

    #[test]
    fn falling_gravity_and_fade() {
        let gs = groups(true);
        // group 1 fades below 0.65 * 500 = 325
        let mut p = one(400.0, 400.0, 1, true);
        let mut rng = 9;
        p.update(&gs, &SimConfig::default(), 800.0, 500.0, (400.0, 125.0), 1.0, &mut rng);
        assert_relative_eq!(p.vy[0], 0.15 * 0.98, epsilon = 1e-7);
        assert_relative_eq!(p.alpha[0], 0.85 * 0.98, epsilon = 1e-7);
        assert!(p.vx[0].abs() <= 0.05 * 0.95 + 1e-7);
    }

    #[test]
    fn no_fade_above_target() {
        let gs = groups(true);
        let mut p = one(400.0, 100.0, 1, true);
        let mut rng = 9;
        p.update(&gs, &SimConfig::default(), 800.0, 500.0, (400.0, 125.0), 1.0, &mut rng);
        assert_eq!(p.alpha[0], 0.85);
    }

    #[test]
    fn x_is_clamped_y_is_not() {
        let gs = groups(true);
        let mut p = one(799.0, 499.0, 1, true);
        p.vx[0] = 50.0;
        p.vy[0] = 50.0;
        let mut rng = 3;
        p.update(&gs, &SimConfig::default(), 800.0, 500.0, (400.0, 125.0), 1.0, &mut rng);
        assert_eq!(p.x[0], 800.0);
        assert!(p.y[0] > 500.0);
    }

    #[test]
    fn half_frames_compose() {
        let gs = groups(true);
        let cfg = SimConfig::default();
        let mut a = one(300.0, 200.0, 0, false);
        let mut rng = 1;
        a.update(&gs, &cfg, 800.0, 500.0, (400.0, 125.0), 0.5, &mut rng);
        assert!(a.x[0] > 300.0 && a.x[0] < 300.046);
    }

    #[test]
    fn of_group_filters() {
        let mut p = one(0.0, 0.0, 2, false);
        p.push(0.0, 0.0, 3, true, &SimConfig::default());
        p.push(0.0, 0.0, 2, true, &SimConfig::default());
        assert_eq!(p.of_group(2).collect::<Vec<_>>(), vec![0, 2]);
        assert!(p.get(3).is_none());
    }
}
