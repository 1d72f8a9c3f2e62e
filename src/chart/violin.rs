// violin.rs - Pay-ratio distributions as mirrored density shapes
//
// There is no raw sample behind a summary, so the shape is synthesized:
// a Gaussian bump centred on the median with sigma = half the IQR,
// sampled from the 5th to the 95th percentile.

use serde::Serialize;

use super::Rule;
use super::curve::{Pt, catmull_rom};
use super::scale::{BandScale, LinearScale, Margin, Tick, axis_ticks};
use crate::color::Rgb;
use crate::data::{GRID, MEDIAN_LINE, VIOLIN_BASELINE, VIOLIN_FILL, ViolinSummary};
use crate::tooltip::{Row, TooltipContent};

pub const MAX_WIDTH: f32 = 1100.0;
pub const HEIGHT: f32 = 450.0;
pub const MARGIN: Margin = Margin::new(50.0, 40.0, 100.0, 70.0);
pub const SAMPLES: usize = 50;
const Y_DOMAIN: (f32, f32) = (0.35, 1.30);
const GRID_LINES: [f32; 9] = [0.4, 0.5, 0.6, 0.7, 0.8, 0.9, 1.0, 1.1, 1.2];
const PADDING: f32 = 0.1;
const BODY: f32 = 0.4;
const MEDIAN_SPAN: f32 = 0.6;

/// Relative density in (0, 1] at ratio `y`
pub fn density(d: &ViolinSummary, y: f32) -> f32 {
    let spread = d.spread();
    let z = if spread > 0.0 { (y - d.median).abs() / spread } else { 0.0 };
    (-0.5 * z * z).exp()
}

/// `SAMPLES + 1` evenly spaced (ratio, density) pairs from min to max
pub fn profile(d: &ViolinSummary) -> Vec<(f32, f32)> {
    (0..=SAMPLES)
        .map(|j| {
            let t = j as f32 / SAMPLES as f32;
            let y = d.min + t * (d.max - d.min);
            (y, density(d, y))
        })
        .collect()
}

#[derive(Clone, Debug, Serialize)]
pub struct Violin {
    pub group: String,
    pub center_x: f32,
    /// Closed outline of two Catmull-Rom edges: right edge from the 5th
    /// percentile up, left edge back down
    pub path: String,
    pub fill: Rgb,
    pub median: Segment,
    pub delay_ms: u32,
    pub tooltip: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct Segment {
    pub x1: f32,
    pub x2: f32,
    pub y: f32,
    pub color: Rgb,
    pub delay_ms: u32,
}

#[derive(Clone, Debug, Serialize)]
pub struct ViolinChart {
    pub width: f32,
    pub height: f32,
    pub margin: Margin,
    pub violins: Vec<Violin>,
    pub grid: Vec<f32>,
    pub grid_color: Rgb,
    pub baseline: Rule,
    pub y_ticks: Vec<Tick>,
}

impl TooltipContent for ViolinSummary {
    fn title(&self) -> String {
        self.group.to_string()
    }

    fn rows(&self) -> Vec<Row> {
        vec![
            Row::new("Median Ratio", format!("{:.2}", self.median)),
            Row::new("25th Percentile", format!("{:.2}", self.q1)),
            Row::new("75th Percentile", format!("{:.2}", self.q3)),
            Row::new("Range (5-95%)", format!("{:.2} - {:.2}", self.min, self.max)),
            Row::new("Gender", self.gender),
            Row::new("Race", self.race),
        ]
    }
}

pub fn violin_chart(data: &[ViolinSummary], container_w: f32) -> ViolinChart {
    let outer_w = (container_w - 20.0).min(MAX_WIDTH);
    let (w, h) = MARGIN.inner(outer_w, HEIGHT);

    let x = BandScale::new(data.iter().map(|d| d.group).collect(), (0.0, w), PADDING);
    let y = LinearScale::new(Y_DOMAIN, (h, 0.0));
    let half = x.bandwidth() * BODY;

    let violins = data
        .iter()
        .enumerate()
        .map(|(i, d)| {
            let cx = x.pos(&d.group).unwrap_or(0.0) + x.bandwidth() / 2.0;
            let pts = profile(d);

            let right: Vec<Pt> = pts.iter().map(|&(v, dens)| (cx + half * dens, y.apply(v))).collect();
            let left: Vec<Pt> = pts.iter().rev().map(|&(v, dens)| (cx - half * dens, y.apply(v))).collect();
            let mut path = catmull_rom(&right, 'M');
            path.push_str(&catmull_rom(&left, 'L'));
            path.push('Z');

            let delay = i as u32 * 80;
            Violin {
                group: d.group.to_string(),
                center_x: cx,
                path,
                fill: VIOLIN_FILL,
                median: Segment {
                    x1: cx - half * MEDIAN_SPAN,
                    x2: cx + half * MEDIAN_SPAN,
                    y: y.apply(d.median),
                    color: MEDIAN_LINE,
                    delay_ms: delay + 500,
                },
                delay_ms: delay,
                tooltip: d.tooltip_html(),
            }
        })
        .collect();

    ViolinChart {
        width: w,
        height: h,
        margin: MARGIN,
        violins,
        grid: GRID_LINES.iter().map(|&t| y.apply(t)).collect(),
        grid_color: GRID,
        baseline: Rule {
            y: y.apply(1.0),
            color: VIOLIN_BASELINE,
            width: Some(1.5),
            dash: Some([5.0, 5.0]),
            label: Some("1.0 = White Men baseline".into()),
        },
        y_ticks: axis_ticks(&y, &y.ticks(8), |v| format!("{v:.1}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::VIOLIN_SUMMARIES;
    use approx::assert_relative_eq;

    #[test]
    fn density_peaks_at_median() {
        let d = VIOLIN_SUMMARIES[0];
        assert_relative_eq!(density(&d, d.median), 1.0);
        // one sigma away
        assert_relative_eq!(density(&d, d.median + d.spread()), (-0.5f32).exp(), epsilon = 1e-6);
        assert!(density(&d, d.min) < 1.0);
    }

    #[test]
    fn zero_spread_is_flat() {
        let mut d = VIOLIN_SUMMARIES[0];
        d.q1 = 1.0;
        d.q3 = 1.0;
        assert!(profile(&d).iter().all(|&(_, w)| w == 1.0));
    }

    #[test]
    fn profile_spans_range() {
        let d = VIOLIN_SUMMARIES[5];
        let p = profile(&d);
        assert_eq!(p.len(), SAMPLES + 1);
        assert_relative_eq!(p[0].0, d.min);
        assert_relative_eq!(p[SAMPLES].0, d.max, epsilon = 1e-6);
    }

    #[test]
    fn chart_layout() {
        let c = violin_chart(&VIOLIN_SUMMARIES, 2000.0);
        assert_relative_eq!(c.width, 1100.0 - 110.0);
        assert_relative_eq!(c.height, 300.0);
        assert_eq!(c.violins.len(), 12);
        assert_eq!(c.grid.len(), 9);
        let v = &c.violins[0];
        assert!(v.path.starts_with('M') && v.path.ends_with('Z'));
        // one cubic per sample gap on each edge, joined by a single line
        assert_eq!(v.path.matches('C').count(), 2 * SAMPLES);
        assert_eq!(v.path.matches('L').count(), 1);
        assert!(v.median.x1 < v.center_x && v.center_x < v.median.x2);
        assert_eq!(v.median.delay_ms, 500);
        assert!(v.tooltip.contains("Range (5-95%)"));
    }

    #[test]
    fn baseline_is_dashed_slate() {
        let c = violin_chart(&VIOLIN_SUMMARIES, 1200.0);
        assert_eq!(c.baseline.color, Rgb::hex(0x94a3b8));
        assert_eq!(c.baseline.dash, Some([5.0, 5.0]));
        assert_eq!(c.baseline.width, Some(1.5));
        let json = serde_json::to_value(&c.baseline).unwrap();
        assert_eq!(json["dash"], serde_json::json!([5.0, 5.0]));
    }

    #[test]
    fn outline_is_symmetric_about_centre() {
        let c = violin_chart(&VIOLIN_SUMMARIES, 1200.0);
        let v = &c.violins[3];
        let nums = |s: &str| -> Vec<f32> { s.split([',', ' ']).map(|n| n.parse().unwrap()).collect() };
        let (right, left) = v.path.split_once('L').unwrap();
        // right edge ends and left edge resumes at the top, mirrored
        let right_end = nums(right.rsplit('C').next().unwrap());
        let left_start = nums(left.split('C').next().unwrap());
        let (rx, ry) = (right_end[4], right_end[5]);
        assert_relative_eq!(ry, left_start[1], epsilon = 1e-2);
        assert_relative_eq!(rx - v.center_x, v.center_x - left_start[0], epsilon = 2e-2);
    }
}
