// pay.rs - Earnings ratio per race/gender group
//
// Ratios are relative to White Men (1.00).

use serde::Serialize;

use super::NEUTRAL;
use crate::color::Rgb;

#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PayRatio {
    pub group: &'static str,
    pub race: &'static str,
    pub gender: &'static str,
    pub ratio: f32,
    /// Percent below the baseline
    pub pay_gap: u32,
    pub annual_salary: u32,
    pub count: u32,
}

const fn pay(
    group: &'static str,
    race: &'static str,
    gender: &'static str,
    ratio: f32,
    pay_gap: u32,
    annual_salary: u32,
    count: u32,
) -> PayRatio {
    PayRatio { group, race, gender, ratio, pay_gap, annual_salary, count }
}

pub static PAY_RATIOS: [PayRatio; 8] = [
    pay("White Men", "White", "Men", 1.00, 0, 60000, 11051),
    pay("Asian Men", "Asian", "Men", 0.93, 7, 55800, 1250),
    pay("Black Men", "Black", "Men", 0.53, 47, 31800, 4475),
    pay("Latino Men", "Latino", "Men", 0.69, 31, 41400, 2850),
    pay("Asian Women", "Asian", "Women", 0.88, 12, 52800, 1180),
    pay("White Women", "White", "Women", 0.72, 28, 43200, 10412),
    pay("Black Women", "Black", "Women", 0.65, 35, 39000, 6032),
    pay("Latina Women", "Latina", "Women", 0.57, 43, 34200, 2650),
];

static BAR_COLORS: [(&str, Rgb); 8] = [
    ("White Men", Rgb::hex(0x20b2aa)),
    ("Asian Men", Rgb::hex(0x3d3d3d)),
    ("Black Men", Rgb::hex(0x8b0a50)),
    ("Latino Men", Rgb::hex(0x4169e1)),
    ("Asian Women", Rgb::hex(0xdc143c)),
    ("White Women", Rgb::hex(0x1e90ff)),
    ("Black Women", Rgb::hex(0xffa500)),
    ("Latina Women", Rgb::hex(0xff8c00)),
];

/// Configured bar color, neutral gray for unknown groups
pub fn bar_color(group: &str) -> Rgb {
    BAR_COLORS
        .iter()
        .find(|(g, _)| *g == group)
        .map_or(NEUTRAL, |&(_, c)| c)
}

pub fn find_group(data: &[PayRatio], group: &str) -> Option<PayRatio> {
    data.iter().find(|d| d.group == group).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gap_matches_ratio() {
        for d in &PAY_RATIOS {
            let implied = ((1.0 - d.ratio) * 100.0).round() as u32;
            assert_eq!(implied, d.pay_gap, "{}", d.group);
        }
    }

    #[test]
    fn unknown_group_is_gray() {
        assert_eq!(bar_color("Martian Men"), NEUTRAL);
        assert_eq!(bar_color("White Men"), Rgb::hex(0x20b2aa));
    }
}
