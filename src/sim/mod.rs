// sim/ - Income-loss particle simulation
//
// Every particle is a fixed amount of lifetime earnings. Kept earnings
// converge on a shared attractor; lost earnings fall away and fade.
// Particles are stored Structure-of-Arrays and never interact, so a tick
// is a single O(n) pass.

mod config;
mod group;
mod particle;

pub use config::SimConfig;
pub use group::ParticleGroup;
pub use particle::{Particle, Particles};

use tracing::{debug, info};

use crate::data::{GroupSpec, PARTICLE_GROUPS};
use crate::error::Result;
use crate::render::{Surface, frame_len};

const DEFAULT_SEED: u32 = 0xDEADBEEF;

/// Explicitly owned simulation context
///
/// The host drives it: `start()` once, then `tick()` from its frame
/// callback. While stopped, ticks do nothing.
pub struct Simulation {
    w: u32,
    h: u32,

    config: SimConfig,
    groups: Vec<ParticleGroup>,
    particles: Particles,

    running: bool,
    frames: u64,

    // RNG state
    rng: u32,
}

impl Simulation {
    pub fn new(config: SimConfig, specs: &[GroupSpec], w: u32, h: u32, seed: u32) -> Result<Self> {
        check_dims(w, h)?;
        config.validate()?;

        let mut sim = Self {
            w,
            h,
            config,
            groups: specs.iter().map(ParticleGroup::from).collect(),
            particles: Particles::new(),
            running: false,
            frames: 0,
            rng: if seed == 0 { DEFAULT_SEED } else { seed },
        };
        sim.seed_particles();
        info!(particles = sim.particles.len(), groups = sim.groups.len(), w, h, "simulation ready");
        Ok(sim)
    }

    /// Bundled groups, default physics
    pub fn with_defaults(w: u32, h: u32, seed: u32) -> Result<Self> {
        Self::new(SimConfig::default(), &PARTICLE_GROUPS, w, h, seed)
    }

    fn seed_particles(&mut self) {
        let (cx, cy) = self.attractor();
        let half = self.config.seed_box / 2.0;
        let rng = &mut self.rng;

        for (gi, group) in self.groups.iter().enumerate() {
            // The baseline group keeps everything; only the rest lose.
            let lost = if gi == 0 { 0 } else { group.loss_particles };
            let kinds = (0..group.particle_count)
                .map(|_| false)
                .chain((0..lost).map(|_| true));

            for falling in kinds {
                let x = cx + (Self::rand(rng) * 2.0 - 1.0) * half;
                let y = cy + (Self::rand(rng) * 2.0 - 1.0) * half;
                self.particles.push(x, y, gi, falling, &self.config);
            }
        }
    }

    pub fn start(&mut self) {
        if !self.running {
            info!("simulation started");
        }
        self.running = true;
    }

    pub fn stop(&mut self) {
        if self.running {
            info!(frames = self.frames, "simulation stopped");
        }
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Advance by `dt` reference frames (1.0 = one 60 Hz frame)
    pub fn tick(&mut self, dt: f32) {
        if !self.running || !(dt > 0.0) {
            return;
        }
        let (ax, ay) = self.attractor();
        self.particles.update(
            &self.groups,
            &self.config,
            self.w as f32,
            self.h as f32,
            (ax, ay),
            dt,
            &mut self.rng,
        );
        self.frames += 1;
    }

    /// One reference frame
    pub fn step(&mut self) {
        self.tick(1.0);
    }

    /// Paint the current state; inactive particles still draw where they stopped
    pub fn draw<S: Surface>(&self, surface: &mut S) {
        surface.clear(self.config.background);
        for i in 0..self.particles.len() {
            let alpha = self.particles.alpha[i];
            if alpha < self.config.visible_alpha {
                continue;
            }
            let color = self.groups[self.particles.group[i]].color;
            surface.fill_circle(
                self.particles.x[i],
                self.particles.y[i],
                self.particles.radius[i],
                color,
                alpha,
            );
        }
    }

    /// Narrative step 0..=2: baseline only, plus the first loss group, all groups.
    /// Returns false (and changes nothing) for any other step.
    pub fn set_active_step(&mut self, step: u32) -> bool {
        let active = match step {
            0 => 1,
            1 => 2,
            2 => self.groups.len(),
            _ => {
                debug!(step, "ignoring unknown particle step");
                return false;
            }
        };
        for (i, g) in self.groups.iter_mut().enumerate() {
            g.active = i < active;
        }
        debug!(step, active, "particle groups activated");
        true
    }

    /// Applies to subsequent ticks; particles are not repositioned
    /// beyond the usual horizontal clamp.
    pub fn resize(&mut self, w: u32, h: u32) -> Result<()> {
        check_dims(w, h)?;
        self.w = w;
        self.h = h;
        Ok(())
    }

    /// Convergence point: horizontal centre, upper quarter
    pub fn attractor(&self) -> (f32, f32) {
        (self.w as f32 / 2.0, self.h as f32 * self.config.attractor_y)
    }

    pub fn groups(&self) -> &[ParticleGroup] {
        &self.groups
    }

    pub fn particles(&self) -> &Particles {
        &self.particles
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn width(&self) -> u32 {
        self.w
    }

    pub fn height(&self) -> u32 {
        self.h
    }

    // Random number generator (xorshift32), uniform in [0, 1)
    #[inline(always)]
    pub fn rand(rng: &mut u32) -> f32 {
        *rng ^= *rng << 13;
        *rng ^= *rng >> 17;
        *rng ^= *rng << 5;
        (*rng >> 8) as f32 * (1.0 / 16777216.0)
    }
}

fn check_dims(w: u32, h: u32) -> Result<()> {
    frame_len(w, h).map(|_| ())
}
