// timeline.rs - Women's earnings as a percent of men's, 1979-2023

use serde::Serialize;

use super::curve::monotone_x;
use super::scale::{LinearScale, Margin, Tick, axis_ticks};
use crate::color::Rgb;
use crate::data::{TimelinePoint, point_for_year};
use crate::tooltip::{Row, TooltipContent};

pub const WIDTH: f32 = 800.0;
pub const HEIGHT: f32 = 500.0;
pub const MARGIN: Margin = Margin::new(50.0, 80.0, 60.0, 70.0);
const YEARS: (f32, f32) = (1979.0, 2023.0);
const RATIOS: (f32, f32) = (55.0, 90.0);
const POINT_STAGGER_MS: u32 = 40;
const ANNOTATION_YEAR: u16 = 2000;
const ANNOTATION_DELAY_MS: u32 = 2500;

/// Stroke for the series line and its points
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct LineStyle {
    pub stroke: Rgb,
    pub width: f32,
}

pub const BASE_STYLE: LineStyle = LineStyle { stroke: Rgb::hex(0x667eea), width: 3.0 };

/// Look of the series for each timeline step: neutral, alarm, caution
pub fn step_style(local: u8) -> Option<LineStyle> {
    match local {
        0 => Some(BASE_STYLE),
        1 => Some(LineStyle { stroke: Rgb::hex(0xef4444), width: 5.0 }),
        2 => Some(LineStyle { stroke: Rgb::hex(0xf59e0b), width: 4.0 }),
        _ => None,
    }
}

impl TooltipContent for TimelinePoint {
    fn title(&self) -> String {
        self.year.to_string()
    }

    fn rows(&self) -> Vec<Row> {
        vec![Row::new("Women earn", format!("{}% of men's earnings", self.ratio))]
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct Dot {
    pub year: u16,
    pub ratio: f32,
    pub cx: f32,
    pub cy: f32,
    pub delay_ms: u32,
    pub tooltip: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct Annotation {
    pub x: f32,
    pub text_y: f32,
    pub text: String,
    pub delay_ms: u32,
}

#[derive(Clone, Debug, Serialize)]
pub struct TimelineChart {
    pub width: f32,
    pub height: f32,
    pub margin: Margin,
    pub style: LineStyle,
    /// Series as a monotone-in-x SVG path through every point
    pub path: String,
    pub dots: Vec<Dot>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotation: Option<Annotation>,
    pub x_ticks: Vec<Tick>,
    pub y_ticks: Vec<Tick>,
}

pub fn timeline_chart(data: &[TimelinePoint]) -> TimelineChart {
    let (w, h) = MARGIN.inner(WIDTH, HEIGHT);
    let x = LinearScale::new(YEARS, (0.0, w));
    let y = LinearScale::new(RATIOS, (h, 0.0));

    let dots: Vec<Dot> = data
        .iter()
        .enumerate()
        .map(|(i, p)| Dot {
            year: p.year,
            ratio: p.ratio,
            cx: x.apply(p.year as f32),
            cy: y.apply(p.ratio),
            delay_ms: i as u32 * POINT_STAGGER_MS,
            tooltip: p.tooltip_html(),
        })
        .collect();

    let pts: Vec<_> = dots.iter().map(|d| (d.cx, d.cy)).collect();
    let path = monotone_x(&pts, 'M');

    let annotation = point_for_year(data, ANNOTATION_YEAR).map(|_| Annotation {
        x: x.apply(ANNOTATION_YEAR as f32),
        text_y: y.apply(85.0),
        text: format!("Progress slows after {ANNOTATION_YEAR}"),
        delay_ms: ANNOTATION_DELAY_MS,
    });

    TimelineChart {
        width: w,
        height: h,
        margin: MARGIN,
        style: BASE_STYLE,
        path,
        dots,
        annotation,
        x_ticks: axis_ticks(&x, &x.ticks(10), |v| format!("{v:.0}")),
        y_ticks: axis_ticks(&y, &y.ticks(10), |v| format!("{v}%")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::TIMELINE;
    use approx::assert_relative_eq;

    #[test]
    fn series_spans_plot() {
        let c = timeline_chart(&TIMELINE);
        assert_relative_eq!(c.dots[0].cx, 0.0);
        assert_relative_eq!(c.dots.last().unwrap().cx, c.width, epsilon = 1e-3);
        assert!(c.path.starts_with("M0.00,"));
        assert_eq!(c.path.matches('C').count(), c.dots.len() - 1);
        let last = c.dots.last().unwrap();
        assert!(c.path.ends_with(&format!("{:.2},{:.2}", last.cx, last.cy)));
        assert_eq!(c.dots[10].delay_ms, 400);
        assert_eq!(c.x_ticks.first().unwrap().label, "1980");
    }

    #[test]
    fn annotation_needs_year_2000() {
        assert!(timeline_chart(&TIMELINE).annotation.is_some());
        let early: Vec<_> = TIMELINE.iter().copied().filter(|p| p.year < 1990).collect();
        assert!(timeline_chart(&early).annotation.is_none());
    }

    #[test]
    fn styles_per_step() {
        assert_eq!(step_style(1).unwrap().width, 5.0);
        assert_eq!(step_style(2).unwrap().stroke, Rgb::hex(0xf59e0b));
        assert!(step_style(3).is_none());
    }
}
