// hexmap.rs - State pay gaps on a hexagonal tile grid
//
// Tiles sit on a fixed 1000x620 viewBox. Rows are staggered by half a
// column; AK, HI and DC are nudged off-grid to read like a map.

use serde::Serialize;

use crate::color::Rgb;
use crate::data::{HexCell, StateGap, gap_for};
use crate::tooltip::{Row, TooltipContent};

pub const VIEW_W: f32 = 1000.0;
pub const VIEW_H: f32 = 620.0;
pub const HEX_R: f32 = 30.0;
const MISSING: Rgb = Rgb::hex(0xcccccc);
const RAMP: [Rgb; 3] = [Rgb::hex(0xd7f3ef), Rgb::hex(0x6ad1bf), Rgb::hex(0x00807a)];

/// Three-stop ramp over [min, midpoint, max] of the observed gaps
#[derive(Clone, Copy, Debug)]
pub struct GapScale {
    lo: f32,
    mid: f32,
    hi: f32,
}

impl GapScale {
    pub fn new(gaps: impl IntoIterator<Item = f32>) -> Self {
        let (lo, hi) = gaps
            .into_iter()
            .filter(|g| g.is_finite())
            .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), g| (lo.min(g), hi.max(g)));
        if lo > hi {
            return Self { lo: 0.0, mid: 0.0, hi: 0.0 };
        }
        Self { lo, mid: (lo + hi) / 2.0, hi }
    }

    pub fn color(&self, gap: Option<f32>) -> Rgb {
        let Some(g) = gap.filter(|g| g.is_finite()) else {
            return MISSING;
        };
        if g <= self.mid {
            RAMP[0].mix(RAMP[1], fraction(g, self.lo, self.mid))
        } else {
            RAMP[1].mix(RAMP[2], fraction(g, self.mid, self.hi))
        }
    }
}

fn fraction(v: f32, a: f32, b: f32) -> f32 {
    if b == a { 0.0 } else { (v - a) / (b - a) }
}

#[derive(Clone, Debug, Serialize)]
pub struct Tile {
    pub abbr: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gap: Option<f32>,
    pub x: f32,
    pub y: f32,
    pub fill: Rgb,
    pub tooltip: String,
}

impl TooltipContent for Tile {
    fn title(&self) -> String {
        self.abbr.to_string()
    }

    fn rows(&self) -> Vec<Row> {
        let value = match self.gap {
            Some(g) if g.is_finite() => format!("{g:.1}%"),
            _ => "—".to_string(),
        };
        vec![Row::new("Gap", value)]
    }
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HexMap {
    pub view_box: [f32; 4],
    /// Polygon `points` attribute for one tile centred at the origin
    pub hex_points: String,
    pub tiles: Vec<Tile>,
}

/// Pointy-top hexagon corners
pub fn hex_corners(r: f32) -> [(f32, f32); 6] {
    std::array::from_fn(|i| {
        let ang = (60.0 * i as f32 - 30.0).to_radians();
        (r * ang.cos(), r * ang.sin())
    })
}

pub fn hex_map(gaps: &[StateGap], layout: &[HexCell]) -> HexMap {
    let x_step = HEX_R * 1.85;
    let y_step = 3f32.sqrt() * HEX_R * 0.72;

    let (min_x, max_x) = min_max(layout.iter().map(|c| c.col));
    let (min_y, max_y) = min_max(layout.iter().map(|c| c.row));

    let grid_w = (max_x - min_x + 1) as f32 * x_step;
    let grid_h = (max_y - min_y + 1) as f32 * y_step + HEX_R;
    let offset_x = (VIEW_W - grid_w) / 2.0 + HEX_R - min_x as f32 * x_step;
    let offset_y = (VIEW_H - grid_h) / 2.0 + HEX_R - min_y as f32 * y_step;

    let scale = GapScale::new(gaps.iter().map(|g| g.gap));

    let tiles = layout
        .iter()
        .map(|c| {
            let stagger = if c.row.rem_euclid(2) == 1 { x_step / 2.0 } else { 0.0 };
            let mut x = offset_x + c.col as f32 * x_step + stagger;
            let mut y = offset_y + c.row as f32 * y_step;

            match c.abbr {
                "AK" => {
                    x = offset_x - HEX_R * 2.0;
                    y = offset_y - HEX_R * 1.1;
                }
                "HI" => {
                    x = offset_x - HEX_R * 1.8;
                    y = offset_y + grid_h - HEX_R * 0.5;
                }
                "DC" => x += HEX_R * 0.6,
                _ => {}
            }

            let gap = gap_for(gaps, c.abbr);
            let mut tile = Tile { abbr: c.abbr, gap, x, y, fill: scale.color(gap), tooltip: String::new() };
            tile.tooltip = tile.tooltip_html();
            tile
        })
        .collect();

    let hex_points = hex_corners(HEX_R)
        .iter()
        .map(|(x, y)| format!("{x:.2},{y:.2}"))
        .collect::<Vec<_>>()
        .join(" ");

    HexMap { view_box: [0.0, 0.0, VIEW_W, VIEW_H], hex_points, tiles }
}

fn min_max(vals: impl Iterator<Item = i32>) -> (i32, i32) {
    vals.fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
    .unwrap_or((0, 0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{HEX_LAYOUT, STATE_GAPS};
    use approx::assert_relative_eq;

    #[test]
    fn ramp_endpoints() {
        let s = GapScale::new(STATE_GAPS.iter().map(|g| g.gap));
        assert_eq!(s.color(Some(12.4)), RAMP[0]);
        assert_eq!(s.color(Some(24.5)), RAMP[2]);
        assert_eq!(s.color(Some((12.4 + 24.5) / 2.0)), RAMP[1]);
        assert_eq!(s.color(None), MISSING);
        assert_eq!(s.color(Some(f32::NAN)), MISSING);
    }

    #[test]
    fn empty_scale_does_not_panic() {
        let s = GapScale::new(std::iter::empty());
        assert_eq!(s.color(Some(3.0)), RAMP[1]);
    }

    #[test]
    fn special_tiles_are_placed_off_grid() {
        let m = hex_map(&STATE_GAPS, &HEX_LAYOUT);
        let tile = |a: &str| m.tiles.iter().find(|t| t.abbr == a).unwrap().clone();
        let (wa, ak, hi) = (tile("WA"), tile("AK"), tile("HI"));
        // WA is column 0 row 0, so it sits on the offset origin
        assert_relative_eq!(ak.x, wa.x - 2.0 * HEX_R, epsilon = 1e-3);
        assert_relative_eq!(ak.y, wa.y - 1.1 * HEX_R, epsilon = 1e-3);
        assert_relative_eq!(hi.x, wa.x - 1.8 * HEX_R, epsilon = 1e-3);

        let (md, dc) = (tile("MD"), tile("DC"));
        assert_relative_eq!(dc.x - md.x, 3.0 * HEX_R * 1.85 + 0.6 * HEX_R, epsilon = 1e-3);
    }

    #[test]
    fn odd_rows_are_staggered() {
        let m = hex_map(&STATE_GAPS, &HEX_LAYOUT);
        let wa = m.tiles.iter().find(|t| t.abbr == "WA").unwrap();
        let or = m.tiles.iter().find(|t| t.abbr == "OR").unwrap();
        assert_relative_eq!(or.x - wa.x, HEX_R * 1.85 / 2.0, epsilon = 1e-3);
    }

    #[test]
    fn every_layout_cell_becomes_a_tile() {
        let m = hex_map(&STATE_GAPS, &HEX_LAYOUT);
        assert_eq!(m.tiles.len(), HEX_LAYOUT.len());
        assert!(m.tiles.iter().all(|t| t.gap.is_some()));
        assert_eq!(m.hex_points.split(' ').count(), 6);
    }

    #[test]
    fn missing_state_shows_dash() {
        let m = hex_map(&STATE_GAPS[..2], &[HexCell { abbr: "ZZ", col: 0, row: 0 }]);
        assert_eq!(m.tiles[0].fill, MISSING);
        assert!(m.tiles[0].tooltip.contains("—"));
    }
}
