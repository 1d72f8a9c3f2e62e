use clap::Parser;
use std::path::PathBuf;

/// Bake census-derived datasets and chart layouts for the pay-gap page
#[derive(Parser, Debug)]
#[command(name = "paygap-bake", version, about)]
pub struct Cli {
    /// Census CSV with age, race, gender and income columns
    #[arg(long)]
    pub census: PathBuf,

    /// Timeline CSV (year, ratio); the bundled series is used when omitted
    #[arg(long)]
    pub timeline: Option<PathBuf>,

    /// Output directory
    #[arg(long, default_value = "baked")]
    pub out: PathBuf,

    /// Number of particle PNG previews to render (0 = none)
    #[arg(long, default_value_t = 0)]
    pub preview_frames: u32,

    /// Ticks between preview frames
    #[arg(long, default_value_t = 30)]
    pub preview_stride: u32,

    #[arg(long, default_value_t = 800)]
    pub width: u32,

    #[arg(long, default_value_t = 500)]
    pub height: u32,

    /// JSON physics overrides for previews
    #[arg(long)]
    pub sim_config: Option<PathBuf>,

    /// Simulation seed for previews
    #[arg(long, default_value_t = 1)]
    pub seed: u32,
}
