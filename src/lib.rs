use wasm_bindgen::prelude::*;

pub mod chart;
pub mod color;
pub mod data;
pub mod error;
pub mod format;
pub mod render;
pub mod sim;
pub mod stats;
pub mod story;
pub mod tooltip;

use serde::Serialize;

use crate::data::{HEX_LAYOUT, PAY_RATIOS, STATE_GAPS, TIMELINE, VIOLIN_SUMMARIES};
use crate::render::Encoder;
use crate::sim::{SimConfig, Simulation};
use crate::story::{Replay, ScrollSteps, Stage};
use crate::tooltip::{Point, Size};

// ============================================================================
// PAY GAP ENGINE - Scroll story, chart layout, and income-loss particles
// ============================================================================

const HEADLINE_TOP: &str = "White Men";
const HEADLINE_BOTTOM: &str = "Black Women";

#[wasm_bindgen(start)]
pub fn init() {
    std::panic::set_hook(Box::new(|info| {
        let msg = info.to_string();
        web_sys::console::error_1(&msg.into());
    }));
}

fn js_err(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn to_json<T: Serialize>(v: &T) -> Result<String, JsValue> {
    serde_json::to_string(v).map_err(js_err)
}

// ============================================================================
// PARTICLES
// ============================================================================

/// Particle canvas: simulation plus the RGBA frame it draws into
#[wasm_bindgen]
pub struct LossWorld {
    sim: Simulation,
    enc: Encoder,
}

#[wasm_bindgen]
impl LossWorld {
    #[wasm_bindgen(constructor)]
    pub fn new(w: u32, h: u32) -> Result<LossWorld, JsValue> {
        Self::build(SimConfig::default(), w, h, random_seed()).map_err(js_err)
    }

    /// Like `new`, with physics overrides given as JSON
    pub fn with_config(w: u32, h: u32, config_json: &str) -> Result<LossWorld, JsValue> {
        let config = SimConfig::from_json(config_json).map_err(js_err)?;
        Self::build(config, w, h, random_seed()).map_err(js_err)
    }

    pub fn start(&mut self) {
        self.sim.start();
    }

    pub fn stop(&mut self) {
        self.sim.stop();
    }

    pub fn running(&self) -> bool {
        self.sim.is_running()
    }

    /// Advance by `dt` reference frames and redraw
    pub fn tick(&mut self, dt: f32) {
        self.sim.tick(dt);
        self.sim.draw(&mut self.enc);
    }

    pub fn set_active_step(&mut self, step: u32) -> bool {
        self.sim.set_active_step(step)
    }

    pub fn resize(&mut self, w: u32, h: u32) -> Result<(), JsValue> {
        self.sim.resize(w, h).map_err(js_err)?;
        self.enc.resize(w, h).map_err(js_err)
    }

    /// Group descriptions for the legend (JSON)
    pub fn groups_json(&self) -> Result<String, JsValue> {
        to_json(&self.sim.groups())
    }

    pub fn output_ptr(&self) -> *const u8 { self.enc.ptr() }
    pub fn output_len(&self) -> usize { self.enc.len() }
    pub fn width(&self) -> u32 { self.enc.width() }
    pub fn height(&self) -> u32 { self.enc.height() }
}

impl LossWorld {
    pub fn with_seed(w: u32, h: u32, seed: u32) -> error::Result<Self> {
        Self::build(SimConfig::default(), w, h, seed)
    }

    pub fn build(config: SimConfig, w: u32, h: u32, seed: u32) -> error::Result<Self> {
        let sim = Simulation::new(config, &data::PARTICLE_GROUPS, w, h, seed)?;
        let mut enc = Encoder::new(w, h)?;
        sim.draw(&mut enc);
        Ok(Self { sim, enc })
    }

    pub fn simulation(&self) -> &Simulation {
        &self.sim
    }

    pub fn frame(&self) -> &[u8] {
        self.enc.as_bytes()
    }
}

fn random_seed() -> u32 {
    (js_sys::Math::random() * u32::MAX as f64) as u32
}

// ============================================================================
// SCROLL STORY
// ============================================================================

#[wasm_bindgen]
pub struct Story {
    steps: ScrollSteps,
    stage: Stage,
}

#[wasm_bindgen]
impl Story {
    /// `races` is the race order of the grouped chart
    #[wasm_bindgen(constructor)]
    pub fn new(races: Vec<String>, replay_on_change: bool) -> Story {
        Story {
            steps: ScrollSteps::new(replay_policy(replay_on_change)),
            stage: Stage::new(races),
        }
    }

    pub fn set_replay(&mut self, on_change: bool) {
        self.steps.set_replay(replay_policy(on_change));
    }

    /// Visibility change for one section; returns the dispatched step as
    /// JSON, or nothing when no view changes
    pub fn observe(&mut self, section: i32, ratio: f32, world: &mut LossWorld) -> Result<Option<String>, JsValue> {
        let step = self.steps.observe(section, ratio);
        self.route(step, world)
    }

    pub fn dispatch(&mut self, index: i32, world: &mut LossWorld) -> Result<Option<String>, JsValue> {
        let step = self.steps.dispatch(index);
        self.route(step, world)
    }

    pub fn is_emphasized(&self, section: i32) -> bool {
        self.steps.is_emphasized(section)
    }

    /// One byte per race, 1 = dimmed
    pub fn dimmed(&self, elapsed_ms: u32) -> Vec<u8> {
        self.stage.race_gender.dimmed_at(elapsed_ms).into_iter().map(u8::from).collect()
    }

    pub fn timeline_stroke(&self) -> String {
        self.stage.timeline.style().stroke.to_string()
    }

    pub fn timeline_width(&self) -> f32 {
        self.stage.timeline.style().width
    }

    pub fn transition_ms(&self) -> u32 {
        self.stage.timeline.transition_ms()
    }
}

impl Story {
    fn route(&mut self, step: Option<story::ViewStep>, world: &mut LossWorld) -> Result<Option<String>, JsValue> {
        let Some(step) = step else {
            return Ok(None);
        };
        self.stage.route(step, &mut world.sim);
        to_json(&step).map(Some)
    }
}

fn replay_policy(on_change: bool) -> Replay {
    if on_change { Replay::OnChange } else { Replay::Always }
}

// ============================================================================
// CHARTS
// ============================================================================

#[wasm_bindgen]
pub fn bar_chart_json(container_w: f32) -> Result<String, JsValue> {
    to_json(&chart::bar::bar_chart(&PAY_RATIOS, container_w))
}

#[wasm_bindgen]
pub fn violin_chart_json(container_w: f32) -> Result<String, JsValue> {
    to_json(&chart::violin::violin_chart(&VIOLIN_SUMMARIES, container_w))
}

/// Grouped race/gender bars from the census CSV text
#[wasm_bindgen]
pub fn race_gender_json(census_csv: &str) -> Result<String, JsValue> {
    let records = stats::read_records(census_csv.as_bytes()).map_err(js_err)?;
    to_json(&chart::grouped::race_gender_chart(&stats::race_rates(&records)))
}

#[wasm_bindgen]
pub fn scatter_json(census_csv: &str) -> Result<String, JsValue> {
    let records = stats::read_records(census_csv.as_bytes()).map_err(js_err)?;
    to_json(&chart::scatter::scatter_chart(&stats::experience_points(&records)))
}

/// Timeline from CSV text, or the bundled series when none is given
#[wasm_bindgen]
pub fn timeline_json(timeline_csv: Option<String>) -> Result<String, JsValue> {
    let chart = match timeline_csv {
        Some(text) => {
            let points = data::read_timeline(text.as_bytes()).map_err(js_err)?;
            chart::timeline::timeline_chart(&points)
        }
        None => chart::timeline::timeline_chart(&TIMELINE),
    };
    to_json(&chart)
}

#[wasm_bindgen]
pub fn hex_map_json() -> Result<String, JsValue> {
    to_json(&chart::hexmap::hex_map(&STATE_GAPS, &HEX_LAYOUT))
}

#[wasm_bindgen]
pub fn headline_json() -> Result<String, JsValue> {
    let h = stats::headline(&PAY_RATIOS, HEADLINE_TOP, HEADLINE_BOTTOM)
        .ok_or_else(|| JsValue::from_str("headline groups missing"))?;
    to_json(&h)
}

/// Census CSV text -> per-race rates and experience points (JSON)
#[wasm_bindgen]
pub fn aggregate_csv(census_csv: &str) -> Result<String, JsValue> {
    let records = stats::read_records(census_csv.as_bytes()).map_err(js_err)?;
    to_json(&stats::summarize(&records))
}

/// `[left, top]` for a tooltip box next to the pointer
#[wasm_bindgen]
pub fn tooltip_position(px: f32, py: f32, w: f32, h: f32, viewport_w: f32, viewport_h: f32) -> Vec<f32> {
    let p = tooltip::place(Point { x: px, y: py }, Size { w, h }, Size { w: viewport_w, h: viewport_h });
    vec![p.x, p.y]
}
