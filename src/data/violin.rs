// violin.rs - Pay-ratio distribution summaries (2024)
//
// min/max are the 5th and 95th percentiles, not true extremes.

use serde::Serialize;

use crate::color::Rgb;

pub const VIOLIN_FILL: Rgb = Rgb::hex(0xf4c542);
pub const MEDIAN_LINE: Rgb = Rgb::hex(0x8b4513);
/// Dashed ratio = 1.0 reference line
pub const VIOLIN_BASELINE: Rgb = Rgb::hex(0x94a3b8);

#[derive(Clone, Copy, Debug, Serialize)]
pub struct ViolinSummary {
    pub group: &'static str,
    pub race: &'static str,
    pub gender: &'static str,
    pub median: f32,
    pub q1: f32,
    pub q3: f32,
    pub min: f32,
    pub max: f32,
}

impl ViolinSummary {
    /// Half the interquartile range
    pub fn spread(&self) -> f32 {
        (self.q3 - self.q1) / 2.0
    }
}

const fn v(
    group: &'static str,
    race: &'static str,
    gender: &'static str,
    median: f32,
    q1: f32,
    q3: f32,
    min: f32,
    max: f32,
) -> ViolinSummary {
    ViolinSummary { group, race, gender, median, q1, q3, min, max }
}

pub static VIOLIN_SUMMARIES: [ViolinSummary; 12] = [
    v("Asian - Men", "Asian", "Men", 1.08, 0.90, 1.20, 0.75, 1.22),
    v("Asian - Women", "Asian", "Women", 0.92, 0.80, 1.00, 0.55, 1.08),
    v("White - Men", "White", "Men", 1.00, 0.95, 1.05, 0.93, 1.08),
    v("White - Women", "White", "Women", 0.83, 0.72, 0.90, 0.60, 0.98),
    v("Black - Men", "Black", "Men", 0.80, 0.70, 0.88, 0.55, 0.95),
    v("Black - Women", "Black", "Women", 0.67, 0.58, 0.75, 0.45, 0.85),
    v("Hispanic - Men", "Hispanic", "Men", 0.88, 0.75, 1.00, 0.60, 1.10),
    v("Hispanic - Women", "Hispanic", "Women", 0.58, 0.50, 0.72, 0.40, 0.80),
    v("Native Am - Men", "Native American", "Men", 0.80, 0.65, 0.90, 0.50, 0.95),
    v("Native Am - Women", "Native American", "Women", 0.57, 0.48, 0.68, 0.40, 0.78),
    v("Multiracial - Men", "Multiracial", "Men", 0.87, 0.77, 0.98, 0.60, 1.05),
    v("Multiracial - Women", "Multiracial", "Women", 0.72, 0.55, 0.88, 0.45, 0.95),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summaries_are_ordered() {
        for d in &VIOLIN_SUMMARIES {
            assert!(d.min <= d.q1 && d.q1 <= d.median, "{}", d.group);
            assert!(d.median <= d.q3 && d.q3 <= d.max, "{}", d.group);
        }
    }
}
