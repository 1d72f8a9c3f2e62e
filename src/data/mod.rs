// data/ - Static datasets behind the charts
//
// Hand-curated figures for the story:
// - Pay ratios relative to White Men (bar chart)
// - Pay-ratio distribution summaries (violin chart)
// - Women's earnings as a share of men's, by year (timeline)
// - Aggregate lifetime earnings and losses (particle groups)
// - Pay gap by state with hex-grid placement (hex map)

mod pay;
mod particles;
mod states;
mod timeline;
mod violin;

pub use pay::*;
pub use particles::*;
pub use states::*;
pub use timeline::*;
pub use violin::*;

use crate::color::Rgb;

/// Fill for any category without a configured color
pub const NEUTRAL: Rgb = Rgb::hex(0x888888);
/// Grid line color shared by the bar and violin charts
pub const GRID: Rgb = Rgb::hex(0xe2e8f0);
/// Baseline (ratio = 1.0) rule
pub const BASELINE: Rgb = Rgb::hex(0xef4444);
