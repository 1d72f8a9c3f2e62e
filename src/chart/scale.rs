// scale.rs - Band and linear scales, axis ticks

use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Margin {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Margin {
    pub const fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self { top, right, bottom, left }
    }

    /// Plot area left after the margins, never negative
    pub fn inner(&self, outer_w: f32, outer_h: f32) -> (f32, f32) {
        (
            (outer_w - self.left - self.right).max(0.0),
            (outer_h - self.top - self.bottom).max(0.0),
        )
    }
}

/// Evenly spaced bands over a range; `padding` applies inside and out
#[derive(Clone, Debug)]
pub struct BandScale<K> {
    domain: Vec<K>,
    start: f32,
    step: f32,
    bandwidth: f32,
}

impl<K: PartialEq> BandScale<K> {
    pub fn new(domain: Vec<K>, range: (f32, f32), padding: f32) -> Self {
        let n = domain.len() as f32;
        let (r0, r1) = range;
        let step = (r1 - r0) / (n - padding + padding * 2.0).max(1.0);
        let start = r0 + (r1 - r0 - step * (n - padding)) * 0.5;
        Self {
            domain,
            start,
            step,
            bandwidth: step * (1.0 - padding),
        }
    }

    /// Left edge of the band for `key`
    pub fn pos(&self, key: &K) -> Option<f32> {
        self.domain
            .iter()
            .position(|k| k == key)
            .map(|i| self.start + self.step * i as f32)
    }

    pub fn bandwidth(&self) -> f32 {
        self.bandwidth
    }

    pub fn domain(&self) -> &[K] {
        &self.domain
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    pub domain: (f32, f32),
    pub range: (f32, f32),
}

impl LinearScale {
    pub fn new(domain: (f32, f32), range: (f32, f32)) -> Self {
        Self { domain, range }
    }

    pub fn apply(&self, v: f32) -> f32 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if d1 == d0 {
            return (r0 + r1) / 2.0;
        }
        r0 + (v - d0) / (d1 - d0) * (r1 - r0)
    }

    pub fn ticks(&self, count: usize) -> Vec<f32> {
        ticks(self.domain.0, self.domain.1, count)
    }
}

/// Round-number ticks covering [lo, hi], roughly `count` of them
pub fn ticks(lo: f32, hi: f32, count: usize) -> Vec<f32> {
    if count == 0 || !(hi > lo) {
        return vec![];
    }
    let rough = (hi - lo) as f64 / count as f64;
    let power = 10f64.powf(rough.log10().floor());
    let err = rough / power;
    let step = power
        * if err >= 50f64.sqrt() {
            10.0
        } else if err >= 10f64.sqrt() {
            5.0
        } else if err >= 2f64.sqrt() {
            2.0
        } else {
            1.0
        };

    // Work in integer multiples so 0.1 steps don't drift
    let (lo, hi) = (lo as f64, hi as f64);
    if step < 1.0 {
        let inv = (1.0 / step).round();
        let (k0, k1) = ((lo * inv).ceil() as i64, (hi * inv).floor() as i64);
        (k0..=k1).map(|k| (k as f64 / inv) as f32).collect()
    } else {
        let (k0, k1) = ((lo / step).ceil() as i64, (hi / step).floor() as i64);
        (k0..=k1).map(|k| (k as f64 * step) as f32).collect()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Tick {
    pub value: f32,
    /// Pixel position along the axis
    pub pos: f32,
    pub label: String,
}

pub fn axis_ticks(scale: &LinearScale, values: &[f32], fmt: impl Fn(f32) -> String) -> Vec<Tick> {
    values
        .iter()
        .map(|&v| Tick { value: v, pos: scale.apply(v), label: fmt(v) })
        .collect()
}

/// Letters only, for use in CSS class names
pub fn class_slug(s: &str) -> String {
    s.chars().filter(|c| c.is_ascii_alphabetic()).collect()
}
