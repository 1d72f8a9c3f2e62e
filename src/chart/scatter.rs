// scatter.rs - Experience vs. share earning >$50K, per race and gender

use serde::Serialize;

use super::grouped::gender_color;
use super::scale::{LinearScale, Margin, Tick, axis_ticks};
use crate::color::Rgb;
use crate::format::{group_thousands, percent};
use crate::stats::ExperiencePoint;
use crate::tooltip::{Row, TooltipContent};

pub const WIDTH: f32 = 900.0;
pub const HEIGHT: f32 = 500.0;
pub const MARGIN: Margin = Margin::new(40.0, 40.0, 80.0, 90.0);
/// Symbol area in square pixels
pub const SYMBOL_SIZE: f32 = 200.0;
pub const OPACITY: f32 = 0.7;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Symbol {
    Circle,
    Square,
    Triangle,
    Diamond,
    Star,
}

impl Symbol {
    /// Marker per census race category; circle for anything else
    pub fn for_race(race: &str) -> Self {
        match race {
            "White" => Symbol::Circle,
            "Black" => Symbol::Square,
            "Asian-Pac-Islander" => Symbol::Triangle,
            "Amer-Indian-Eskimo" => Symbol::Diamond,
            "Other" => Symbol::Star,
            _ => Symbol::Circle,
        }
    }
}

impl TooltipContent for ExperiencePoint {
    fn title(&self) -> String {
        format!("{} — {}", self.race, self.gender)
    }

    fn rows(&self) -> Vec<Row> {
        vec![
            Row::new("Earning >$50K", percent(self.proportion * 100.0)),
            Row::new("Avg Experience", format!("{:.1} years", self.experience)),
            Row::new("Sample Size", group_thousands(self.count as u64)),
        ]
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct Dot {
    pub race: String,
    pub gender: String,
    pub x: f32,
    pub y: f32,
    pub symbol: Symbol,
    pub fill: Rgb,
    pub delay_ms: u32,
    pub tooltip: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct ScatterChart {
    pub width: f32,
    pub height: f32,
    pub margin: Margin,
    pub dots: Vec<Dot>,
    pub x_ticks: Vec<Tick>,
    pub y_ticks: Vec<Tick>,
}

pub fn scatter_chart(data: &[ExperiencePoint]) -> ScatterChart {
    let (w, h) = MARGIN.inner(WIDTH, HEIGHT);
    let max_x = data.iter().map(|d| d.experience).fold(0.0f64, f64::max);
    let max_y = data.iter().map(|d| d.proportion).fold(0.0f64, f64::max);
    let x = LinearScale::new((0.0, (max_x * 1.1) as f32), (0.0, w));
    let y = LinearScale::new((0.0, (max_y * 1.1) as f32), (h, 0.0));

    let dots = data
        .iter()
        .enumerate()
        .map(|(i, d)| Dot {
            race: d.race.clone(),
            gender: d.gender.clone(),
            x: x.apply(d.experience as f32),
            y: y.apply(d.proportion as f32),
            symbol: Symbol::for_race(&d.race),
            fill: gender_color(&d.gender),
            delay_ms: i as u32 * 100,
            tooltip: d.tooltip_html(),
        })
        .collect();

    ScatterChart {
        width: w,
        height: h,
        margin: MARGIN,
        dots,
        x_ticks: axis_ticks(&x, &x.ticks(10), |v| format!("{v}")),
        y_ticks: axis_ticks(&y, &y.ticks(10), |v| format!("{:.0}%", v * 100.0)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn pt(race: &str, gender: &str, proportion: f64, experience: f64) -> ExperiencePoint {
        ExperiencePoint { race: race.into(), gender: gender.into(), proportion, experience, count: 10 }
    }

    #[test]
    fn unknown_race_is_a_circle() {
        assert_eq!(Symbol::for_race("Martian"), Symbol::Circle);
        assert_eq!(Symbol::for_race("Black"), Symbol::Square);
    }

    #[test]
    fn points_scale_into_plot() {
        let c = scatter_chart(&[pt("White", "Male", 0.3, 22.0), pt("Other", "Female", 0.1, 11.0)]);
        assert_relative_eq!(c.dots[0].x, c.width / 1.1, epsilon = 1e-3);
        assert_relative_eq!(c.dots[0].y, c.height - c.height / 1.1, epsilon = 1e-3);
        assert_eq!(c.dots[1].symbol, Symbol::Star);
        assert_eq!(c.dots[1].fill, Rgb::hex(0xe15759));
        assert!(c.dots[1].tooltip.contains("11.0 years"));
    }
}
