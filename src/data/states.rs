// states.rs - Gender pay gap (%) by state, and its hex-grid placement

use serde::Serialize;

#[derive(Clone, Copy, Debug, Serialize)]
pub struct StateGap {
    pub abbr: &'static str,
    pub gap: f32,
}

/// Grid cell for one state; odd rows are shifted half a column
#[derive(Clone, Copy, Debug)]
pub struct HexCell {
    pub abbr: &'static str,
    pub col: i32,
    pub row: i32,
}

const fn s(abbr: &'static str, gap: f32) -> StateGap {
    StateGap { abbr, gap }
}

const fn c(abbr: &'static str, col: i32, row: i32) -> HexCell {
    HexCell { abbr, col, row }
}

pub static STATE_GAPS: [StateGap; 51] = [
    s("AL", 23.1), s("AK", 16.7), s("AZ", 18.6), s("AR", 20.9),
    s("CA", 18.2), s("CO", 15.9), s("CT", 15.1), s("DE", 17.8),
    s("DC", 12.4), s("FL", 18.9), s("GA", 20.3), s("HI", 14.4),
    s("ID", 19.5), s("IL", 17.6), s("IN", 20.1), s("IA", 18.3),
    s("KS", 19.8), s("KY", 21.0), s("LA", 22.7), s("ME", 13.9),
    s("MD", 14.7), s("MA", 13.5), s("MI", 17.9), s("MN", 14.9),
    s("MS", 24.5), s("MO", 19.6), s("MT", 18.0), s("NE", 18.7),
    s("NV", 19.0), s("NH", 13.8), s("NJ", 15.4), s("NM", 19.7),
    s("NY", 16.3), s("NC", 19.9), s("ND", 17.1), s("OH", 18.4),
    s("OK", 21.4), s("OR", 16.9), s("PA", 16.8), s("RI", 15.2),
    s("SC", 20.7), s("SD", 17.5), s("TN", 21.9), s("TX", 19.4),
    s("UT", 22.2), s("VT", 12.9), s("VA", 16.1), s("WA", 15.0),
    s("WV", 23.6), s("WI", 16.5), s("WY", 20.5),
];

// KS and TN have no cell; their gaps still feed the color domain.
pub static HEX_LAYOUT: [HexCell; 49] = [
    c("AK", -3, 0),
    c("WA", 0, 0), c("MT", 1, 0), c("ND", 2, 0), c("MN", 3, 0), c("WI", 4, 0),
    c("MI", 5, 0), c("NY", 6, 0), c("VT", 7, 0), c("NH", 8, 0), c("ME", 9, 0),
    c("OR", 0, 1), c("ID", 1, 1), c("WY", 2, 1), c("SD", 3, 1), c("IA", 4, 1),
    c("IL", 5, 1), c("IN", 6, 1), c("OH", 7, 1), c("PA", 8, 1), c("NJ", 9, 1),
    c("MA", 10, 1), c("RI", 11, 1), c("CT", 10, 0),
    c("CA", 0, 2), c("NV", 1, 2), c("UT", 2, 2), c("CO", 3, 2), c("NE", 4, 2),
    c("MO", 5, 2), c("KY", 6, 2), c("WV", 7, 2), c("MD", 8, 2), c("DE", 9, 2),
    c("DC", 11, 2),
    c("AZ", 0, 3), c("NM", 1, 3), c("OK", 2, 3), c("AR", 3, 3), c("LA", 4, 3),
    c("MS", 5, 3), c("AL", 6, 3), c("GA", 7, 3), c("VA", 8, 3), c("NC", 9, 3),
    c("HI", -2, 4), c("TX", 2, 4), c("SC", 7, 4), c("FL", 8, 4),
];

pub fn gap_for(data: &[StateGap], abbr: &str) -> Option<f32> {
    data.iter().find(|d| d.abbr == abbr).map(|d| d.gap)
}
