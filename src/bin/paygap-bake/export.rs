// Export baked data as JSON files and a TypeScript module

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

use paygap_engine::data::TimelinePoint;
use paygap_engine::stats::{Headline, Summary};

pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let f = File::create(path).with_context(|| format!("create {}", path.display()))?;
    let mut f = BufWriter::new(f);
    serde_json::to_writer_pretty(&mut f, value).with_context(|| format!("write {}", path.display()))?;
    writeln!(f)?;
    f.flush()?;
    info!(path = %path.display(), "generated");
    Ok(())
}

pub fn write_ts(path: &Path, summary: &Summary, headline: Option<&Headline>, timeline: &[TimelinePoint]) -> Result<()> {
    let f = File::create(path).with_context(|| format!("create {}", path.display()))?;
    let mut f = BufWriter::new(f);
    write_module(&mut f, summary, headline, timeline)?;
    f.flush()?;
    info!(path = %path.display(), "generated");
    Ok(())
}

fn write_module<W: Write>(
    f: &mut W,
    summary: &Summary,
    headline: Option<&Headline>,
    timeline: &[TimelinePoint],
) -> Result<()> {
    writeln!(f, "// Auto-generated - do not edit\n")?;
    writeln!(f, "export const RECORD_COUNT = {};\n", summary.records)?;
    write_const(f, "RACE_RATES", &summary.race_rates)?;
    write_const(f, "EXPERIENCE_POINTS", &summary.experience)?;
    write_const(f, "TIMELINE", timeline)?;
    match headline {
        Some(h) => write_const(f, "HEADLINE", h)?,
        None => writeln!(f, "export const HEADLINE = null;\n")?,
    }
    Ok(())
}

fn write_const<W: Write, T: Serialize + ?Sized>(f: &mut W, name: &str, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    writeln!(f, "export const {name} = {json} as const;\n")?;
    Ok(())
}
