// Render particle frames to PNG for eyeballing physics changes offline

use anyhow::{Context, Result};
use image::RgbaImage;
use std::path::Path;
use tracing::{debug, info};

use paygap_engine::data::PARTICLE_GROUPS;
use paygap_engine::render::Encoder;
use paygap_engine::sim::{SimConfig, Simulation};

/// Run with every group active and save `frames` snapshots, `stride`
/// ticks apart, as `frame_NNN.png`
pub fn render(dir: &Path, config: SimConfig, (w, h): (u32, u32), seed: u32, frames: u32, stride: u32) -> Result<()> {
    let mut sim = Simulation::new(config, &PARTICLE_GROUPS, w, h, seed).context("create simulation")?;
    let mut enc = Encoder::new(w, h).context("create frame buffer")?;

    sim.set_active_step(2);
    sim.start();

    for n in 0..frames {
        for _ in 0..stride.max(1) {
            sim.step();
        }
        sim.draw(&mut enc);

        let img = RgbaImage::from_raw(w, h, enc.as_bytes().to_vec())
            .context("frame buffer does not match canvas size")?;
        let path = dir.join(format!("frame_{n:03}.png"));
        img.save(&path).with_context(|| format!("save {}", path.display()))?;
        debug!(frame = n, ticks = sim.frames(), "preview written");
    }

    info!(frames, dir = %dir.display(), "previews rendered");
    Ok(())
}
