// format.rs - Number formatting and pay-gap severity

use serde::Serialize;

use crate::color::Rgb;

/// `60000` -> `$60,000`
pub fn currency(value: f64) -> String {
    let rounded = value.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{sign}${}", group_thousands(rounded.abs() as u64))
}

/// `12.345` -> `12.3%`
pub fn percent(value: f64) -> String {
    format!("{value:.1}%")
}

/// `11051` -> `11,051`
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GapClass {
    Low,
    Medium,
    High,
}

impl GapClass {
    pub fn of(gap: f32) -> Self {
        if gap > 30.0 {
            GapClass::High
        } else if gap > 15.0 {
            GapClass::Medium
        } else {
            GapClass::Low
        }
    }

    pub fn color(self) -> Rgb {
        match self {
            GapClass::High => Rgb::hex(0xef4444),
            GapClass::Medium => Rgb::hex(0xf59e0b),
            GapClass::Low => Rgb::hex(0x22c55e),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            GapClass::Low => "low",
            GapClass::Medium => "medium",
            GapClass::High => "high",
        }
    }
}
