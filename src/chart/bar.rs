// bar.rs - Earnings ratio per group, against the White Men baseline

use serde::Serialize;

use super::scale::{BandScale, LinearScale, Margin, Tick, axis_ticks};
use super::{LegendItem, Rule};
use crate::color::Rgb;
use crate::data::{BASELINE, GRID, PayRatio, bar_color};
use crate::format::{GapClass, currency};
use crate::tooltip::{Row, TooltipContent};

pub const MAX_WIDTH: f32 = 900.0;
pub const HEIGHT: f32 = 480.0;
pub const MARGIN: Margin = Margin::new(50.0, 40.0, 120.0, 80.0);
const Y_MAX: f32 = 1.15;
const PADDING: f32 = 0.25;
const STAGGER_MS: u32 = 80;
const LABEL_DELAY_MS: u32 = 600;

#[derive(Clone, Debug, Serialize)]
pub struct Bar {
    pub group: String,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub color: Rgb,
    pub delay_ms: u32,
    pub tooltip: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct ValueLabel {
    pub x: f32,
    pub y: f32,
    pub text: String,
    pub delay_ms: u32,
}

#[derive(Clone, Debug, Serialize)]
pub struct BarChart {
    pub width: f32,
    pub height: f32,
    pub margin: Margin,
    pub bars: Vec<Bar>,
    pub labels: Vec<ValueLabel>,
    pub grid: Vec<f32>,
    pub grid_color: Rgb,
    pub baseline: Rule,
    pub y_ticks: Vec<Tick>,
    pub legend: Vec<LegendItem>,
}

impl TooltipContent for PayRatio {
    fn title(&self) -> String {
        self.group.to_string()
    }

    fn rows(&self) -> Vec<Row> {
        vec![
            Row::new("Earning Ratio", format!("${:.2}", self.ratio)),
            Row::new("Annual Salary", currency(self.annual_salary as f64)),
            Row::new("Pay Gap", format!("{}%", self.pay_gap))
                .with_class(GapClass::of(self.pay_gap as f32).as_str()),
            Row::new("Gender", self.gender),
            Row::new("Race", self.race),
        ]
    }
}

/// Lay out the bar chart for a container `container_w` pixels wide
pub fn bar_chart(data: &[PayRatio], container_w: f32) -> BarChart {
    let outer_w = (container_w - 20.0).min(MAX_WIDTH);
    let (w, h) = MARGIN.inner(outer_w, HEIGHT);

    let x = BandScale::new(data.iter().map(|d| d.group).collect(), (0.0, w), PADDING);
    let y = LinearScale::new((0.0, Y_MAX), (h, 0.0));
    let bw = x.bandwidth();

    let mut bars = Vec::with_capacity(data.len());
    let mut labels = Vec::with_capacity(data.len());
    for (i, d) in data.iter().enumerate() {
        let left = x.pos(&d.group).unwrap_or(0.0);
        let top = y.apply(d.ratio);
        let delay = i as u32 * STAGGER_MS;

        bars.push(Bar {
            group: d.group.to_string(),
            x: left,
            y: top,
            width: bw,
            height: h - top,
            color: bar_color(d.group),
            delay_ms: delay,
            tooltip: d.tooltip_html(),
        });
        labels.push(ValueLabel {
            x: left + bw / 2.0,
            y: top - 8.0,
            text: format!("${:.2}", d.ratio),
            delay_ms: delay + LABEL_DELAY_MS,
        });
    }

    let tick_values = y.ticks(10);
    BarChart {
        width: w,
        height: h,
        margin: MARGIN,
        bars,
        labels,
        grid: tick_values.iter().map(|&t| y.apply(t)).collect(),
        grid_color: GRID,
        baseline: Rule {
            y: y.apply(1.0),
            color: BASELINE,
            width: None,
            dash: None,
            label: Some("$1.00 Baseline (White Men)".into()),
        },
        y_ticks: axis_ticks(&y, &tick_values, |v| format!("${v:.2}")),
        legend: data
            .iter()
            .map(|d| LegendItem { label: d.group.to_string(), color: bar_color(d.group) })
            .collect(),
    }
}
