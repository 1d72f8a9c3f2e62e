// grouped.rs - Share earning >$50K, one bar pair per race

use serde::Serialize;

use super::LegendItem;
use super::scale::{BandScale, LinearScale, Margin, Tick, axis_ticks, class_slug};
use crate::color::Rgb;
use crate::format::{group_thousands, percent};
use crate::stats::{FEMALE, MALE, RaceRate};
use crate::tooltip::{Row, TooltipContent};

pub const WIDTH: f32 = 700.0;
pub const HEIGHT: f32 = 500.0;
pub const MARGIN: Margin = Margin::new(40.0, 20.0, 80.0, 90.0);
pub const GENDERS: [&str; 2] = [MALE, FEMALE];
const OUTER_PADDING: f32 = 0.25;
const INNER_PADDING: f32 = 0.1;
const HEADROOM: f32 = 1.1;
const STAGGER_MS: u32 = 100;

pub fn gender_color(gender: &str) -> Rgb {
    if gender == MALE { Rgb::hex(0x4e79a7) } else { Rgb::hex(0xe15759) }
}

/// One bar with what its tooltip needs
#[derive(Clone, Debug, Serialize)]
pub struct GenderBar {
    pub race: String,
    pub gender: &'static str,
    pub value: f64,
    pub count: u32,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub color: Rgb,
    pub delay_ms: u32,
    pub tooltip: String,
}

impl TooltipContent for GenderBar {
    fn title(&self) -> String {
        format!("{} — {}", self.race, self.gender)
    }

    fn rows(&self) -> Vec<Row> {
        vec![
            Row::new("Earning >$50K", percent(self.value * 100.0)),
            Row::new("Sample Size", group_thousands(self.count as u64)),
        ]
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct RaceGroup {
    pub race: String,
    /// CSS class, `race-<letters>`
    pub class: String,
    pub x: f32,
    pub bars: Vec<GenderBar>,
}

#[derive(Clone, Debug, Serialize)]
pub struct GroupedChart {
    pub width: f32,
    pub height: f32,
    pub margin: Margin,
    pub groups: Vec<RaceGroup>,
    pub y_ticks: Vec<Tick>,
    pub legend: Vec<LegendItem>,
}

pub fn race_gender_chart(data: &[RaceRate]) -> GroupedChart {
    let (w, h) = MARGIN.inner(WIDTH, HEIGHT);

    let x0 = BandScale::new(data.iter().map(|d| d.race.as_str()).collect(), (0.0, w), OUTER_PADDING);
    let x1 = BandScale::new(GENDERS.to_vec(), (0.0, x0.bandwidth()), INNER_PADDING);
    let max = data.iter().map(|d| d.male.max(d.female)).fold(0.0f64, f64::max);
    let y = LinearScale::new((0.0, (max * HEADROOM as f64) as f32), (h, 0.0));

    let groups = data
        .iter()
        .map(|d| {
            let bars = GENDERS
                .iter()
                .enumerate()
                .map(|(i, &g)| {
                    let value = d.rate(g);
                    let top = y.apply(value as f32);
                    let mut bar = GenderBar {
                        race: d.race.clone(),
                        gender: g,
                        value,
                        count: d.count,
                        x: x1.pos(&g).unwrap_or(0.0),
                        y: top,
                        width: x1.bandwidth(),
                        height: h - top,
                        color: gender_color(g),
                        delay_ms: i as u32 * STAGGER_MS,
                        tooltip: String::new(),
                    };
                    bar.tooltip = bar.tooltip_html();
                    bar
                })
                .collect();

            RaceGroup {
                race: d.race.clone(),
                class: format!("race-{}", class_slug(&d.race)),
                x: x0.pos(&d.race.as_str()).unwrap_or(0.0),
                bars,
            }
        })
        .collect();

    GroupedChart {
        width: w,
        height: h,
        margin: MARGIN,
        groups,
        y_ticks: axis_ticks(&y, &y.ticks(10), |v| format!("{:.0}%", v * 100.0)),
        legend: GENDERS
            .iter()
            .map(|&g| LegendItem { label: g.to_string(), color: gender_color(g) })
            .collect(),
    }
}
