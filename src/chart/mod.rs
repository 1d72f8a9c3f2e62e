// chart/ - Chart layout
//
// Each chart turns a data slice into positioned marks. Marks are plain
// serializable data; the page creates the SVG nodes and runs the
// transitions using the delays given here.

pub mod bar;
pub mod curve;
pub mod grouped;
pub mod hexmap;
pub mod scale;
pub mod scatter;
pub mod timeline;
pub mod violin;

pub use scale::{BandScale, LinearScale, Margin, Tick};

use serde::Serialize;

use crate::color::Rgb;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LegendItem {
    pub label: String,
    pub color: Rgb,
}

/// Horizontal rule across the plot area. Unset width and dash leave
/// the stroke to the page stylesheet.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Rule {
    pub y: f32,
    pub color: Rgb,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f32>,
    /// `stroke-dasharray` as (dash, gap)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dash: Option<[f32; 2]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}
