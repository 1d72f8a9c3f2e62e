// tooltip.rs - Shared hover tooltip
//
// Every chart datum describes itself through `TooltipContent`; the page
// measures the tooltip box once and asks `place` where to put it.

use serde::Serialize;

const OFFSET_X: f32 = 15.0;
const MARGIN_RIGHT: f32 = 20.0;
const MARGIN_Y: f32 = 10.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Size {
    pub w: f32,
    pub h: f32,
}

/// Top-left corner for a tooltip of `size` next to `pointer`
///
/// The box sits to the right of the pointer, vertically centred, and
/// flips to the left when it would cross the right edge. Vertical
/// position is clamped to the viewport with a 10px margin; the bottom
/// clamp wins when the box is taller than the viewport.
pub fn place(pointer: Point, size: Size, viewport: Size) -> Point {
    let mut left = pointer.x + OFFSET_X;
    let mut top = pointer.y - size.h / 2.0;

    if left + size.w > viewport.w - MARGIN_RIGHT {
        left = pointer.x - size.w - OFFSET_X;
    }
    if top < MARGIN_Y {
        top = MARGIN_Y;
    }
    if top + size.h > viewport.h - MARGIN_Y {
        top = viewport.h - size.h - MARGIN_Y;
    }

    Point { x: left, y: top }
}

/// One label/value line
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Row {
    pub label: String,
    pub value: String,
    /// Extra class for the value span (e.g. gap severity)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<&'static str>,
}

impl Row {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self { label: label.into(), value: value.into(), class: None }
    }

    pub fn with_class(mut self, class: &'static str) -> Self {
        self.class = Some(class);
        self
    }
}

pub trait TooltipContent {
    fn title(&self) -> String;
    fn rows(&self) -> Vec<Row>;

    fn tooltip_html(&self) -> String {
        let mut html = format!(r#"<div class="tooltip-title">{}</div>"#, escape(&self.title()));
        for row in self.rows() {
            let value_class = match row.class {
                Some(c) => format!("tooltip-gap {c}"),
                None => "tooltip-value".to_string(),
            };
            html.push_str(&format!(
                r#"<div class="tooltip-row"><span class="tooltip-label">{}:</span><span class="{}">{}</span></div>"#,
                escape(&row.label),
                value_class,
                escape(&row.value),
            ));
        }
        html
    }
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}
