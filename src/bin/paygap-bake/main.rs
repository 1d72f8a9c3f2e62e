// paygap-bake - Precompute census-derived data for the pay-gap page
//
// Pipeline:
//   1. Read the census CSV, drop incomplete rows
//   2. Aggregate per-race rates and experience points
//   3. Read the timeline CSV (or use the bundled series)
//   4. Lay out every chart
//   5. Export JSON + a TypeScript module
//   6. Optionally render particle previews
//
// Usage: cargo run --bin paygap-bake -- --census adult.csv [--timeline t.csv] [--out DIR]

mod cli;
mod export;
mod preview;

use anyhow::{Context, Result};
use clap::Parser;
use std::fs::{self, File};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use paygap_engine::chart::{bar, grouped, hexmap, scatter, timeline, violin};
use paygap_engine::data::{self, HEX_LAYOUT, PAY_RATIOS, STATE_GAPS, TIMELINE, VIOLIN_SUMMARIES};
use paygap_engine::sim::SimConfig;
use paygap_engine::stats;

use cli::Cli;

const CONTAINER_W: f32 = 1200.0;

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let cli = Cli::parse();

    info!(census = %cli.census.display(), "reading census");
    let f = File::open(&cli.census).with_context(|| format!("open {}", cli.census.display()))?;
    let records = stats::read_records(f).with_context(|| format!("parse {}", cli.census.display()))?;
    let summary = stats::summarize(&records);
    info!(records = summary.records, races = summary.race_rates.len(), "aggregated");

    let points = match &cli.timeline {
        Some(path) => {
            let f = File::open(path).with_context(|| format!("open {}", path.display()))?;
            data::read_timeline(f).with_context(|| format!("parse {}", path.display()))?
        }
        None => TIMELINE.to_vec(),
    };

    let headline = stats::headline(&PAY_RATIOS, "White Men", "Black Women");

    let charts = cli.out.join("charts");
    fs::create_dir_all(&charts).with_context(|| format!("create {}", charts.display()))?;

    export::write_json(&cli.out.join("summary.json"), &summary)?;
    export::write_json(&cli.out.join("timeline.json"), &points)?;
    if let Some(h) = &headline {
        export::write_json(&cli.out.join("headline.json"), h)?;
    }

    export::write_json(&charts.join("bar.json"), &bar::bar_chart(&PAY_RATIOS, CONTAINER_W))?;
    export::write_json(&charts.join("violin.json"), &violin::violin_chart(&VIOLIN_SUMMARIES, CONTAINER_W))?;
    export::write_json(&charts.join("race_gender.json"), &grouped::race_gender_chart(&summary.race_rates))?;
    export::write_json(&charts.join("scatter.json"), &scatter::scatter_chart(&summary.experience))?;
    export::write_json(&charts.join("timeline.json"), &timeline::timeline_chart(&points))?;
    export::write_json(&charts.join("hex_map.json"), &hexmap::hex_map(&STATE_GAPS, &HEX_LAYOUT))?;

    export::write_ts(&cli.out.join("data.ts"), &summary, headline.as_ref(), &points)?;

    if cli.preview_frames > 0 {
        let dir = cli.out.join("preview");
        fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
        let config = match &cli.sim_config {
            Some(path) => SimConfig::load(path).with_context(|| format!("load {}", path.display()))?,
            None => SimConfig::default(),
        };
        preview::render(&dir, config, (cli.width, cli.height), cli.seed, cli.preview_frames, cli.preview_stride)?;
    }

    info!(out = %cli.out.display(), "done");
    Ok(())
}
