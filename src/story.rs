// story.rs - Scroll-driven narrative steps
//
// The page reports each text section's visible ratio; a section counts as
// entered at 60% visibility. Step indices 0..=8 fan out to three views,
// three local steps each:
//
//   0..=2  race/gender bars   (highlight cycle on step 1)
//   3..=5  timeline           (line restyle)
//   6..=8  particles          (which groups are active)

use std::collections::BTreeSet;

use serde::Serialize;
use tracing::debug;

use crate::chart::timeline::{BASE_STYLE, LineStyle, step_style};
use crate::sim::Simulation;

/// Visible ratio at which a section counts as entered
pub const ENTER_RATIO: f32 = 0.6;
/// Time each race stays highlighted during the cycle
pub const HIGHLIGHT_MS: u32 = 800;
/// Timeline restyle duration
pub const TRANSITION_MS: u32 = 1000;

const STEPS_PER_PHASE: i32 = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Phase {
    RaceGender,
    Timeline,
    Particles,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ViewStep {
    pub phase: Phase,
    pub local: u8,
}

/// Map a global step index to its view; `None` outside 0..=8
pub fn dispatch(index: i32) -> Option<ViewStep> {
    if !(0..STEPS_PER_PHASE * 3).contains(&index) {
        return None;
    }
    let phase = match index / STEPS_PER_PHASE {
        0 => Phase::RaceGender,
        1 => Phase::Timeline,
        _ => Phase::Particles,
    };
    Some(ViewStep { phase, local: (index % STEPS_PER_PHASE) as u8 })
}

/// What to do when the same step is dispatched again
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Replay {
    /// Re-run the view transition on every entry
    #[default]
    Always,
    /// Ignore a step equal to the last one emitted
    OnChange,
}

/// Tracks which sections are emphasized and what was last dispatched
#[derive(Debug, Default)]
pub struct ScrollSteps {
    replay: Replay,
    emphasized: BTreeSet<i32>,
    last: Option<i32>,
}

impl ScrollSteps {
    pub fn new(replay: Replay) -> Self {
        Self { replay, ..Default::default() }
    }

    /// Feed one visibility change. Entering emphasizes the section and
    /// dispatches its index; leaving only drops the emphasis.
    pub fn observe(&mut self, section: i32, ratio: f32) -> Option<ViewStep> {
        if ratio >= ENTER_RATIO {
            if !self.emphasized.insert(section) {
                return None;
            }
            self.dispatch(section)
        } else {
            self.emphasized.remove(&section);
            None
        }
    }

    /// Dispatch directly, honoring the replay policy
    pub fn dispatch(&mut self, index: i32) -> Option<ViewStep> {
        if self.replay == Replay::OnChange && self.last == Some(index) {
            debug!(index, "step unchanged, skipping");
            return None;
        }
        let step = dispatch(index);
        match step {
            Some(s) => {
                self.last = Some(index);
                debug!(index, phase = ?s.phase, local = s.local, "step dispatched");
            }
            None => debug!(index, "no view for step"),
        }
        step
    }

    pub fn is_emphasized(&self, section: i32) -> bool {
        self.emphasized.contains(&section)
    }

    pub fn emphasized(&self) -> impl Iterator<Item = i32> + '_ {
        self.emphasized.iter().copied()
    }

    pub fn last(&self) -> Option<i32> {
        self.last
    }

    pub fn replay(&self) -> Replay {
        self.replay
    }

    pub fn set_replay(&mut self, replay: Replay) {
        self.replay = replay;
    }
}

/// A view that reacts to its local step (0..=2)
pub trait StepView {
    fn apply(&mut self, local: u8);
}

/// Race/gender bars: step 1 walks a highlight through each race
#[derive(Clone, Debug, Default)]
pub struct RaceGenderView {
    races: Vec<String>,
    cycling: bool,
}

impl RaceGenderView {
    pub fn new(races: Vec<String>) -> Self {
        Self { races, cycling: false }
    }

    pub fn races(&self) -> &[String] {
        &self.races
    }

    pub fn is_cycling(&self) -> bool {
        self.cycling
    }

    /// Race left undimmed `elapsed_ms` after the step began. The last
    /// race keeps the highlight once the cycle has run through.
    pub fn highlighted_at(&self, elapsed_ms: u32) -> Option<usize> {
        if !self.cycling || self.races.is_empty() {
            return None;
        }
        Some(((elapsed_ms / HIGHLIGHT_MS) as usize).min(self.races.len() - 1))
    }

    /// Per-race dimmed flags in data order
    pub fn dimmed_at(&self, elapsed_ms: u32) -> Vec<bool> {
        match self.highlighted_at(elapsed_ms) {
            Some(hi) => (0..self.races.len()).map(|i| i != hi).collect(),
            None => vec![false; self.races.len()],
        }
    }
}

impl StepView for RaceGenderView {
    fn apply(&mut self, local: u8) {
        self.cycling = local == 1;
    }
}

/// Timeline series restyle
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimelineView {
    style: LineStyle,
}

impl Default for TimelineView {
    fn default() -> Self {
        Self { style: BASE_STYLE }
    }
}

impl TimelineView {
    /// Current target style; points are filled with its stroke color
    pub fn style(&self) -> LineStyle {
        self.style
    }

    pub fn transition_ms(&self) -> u32 {
        TRANSITION_MS
    }
}

impl StepView for TimelineView {
    fn apply(&mut self, local: u8) {
        if let Some(style) = step_style(local) {
            self.style = style;
        }
    }
}

impl StepView for Simulation {
    fn apply(&mut self, local: u8) {
        self.set_active_step(local as u32);
    }
}

/// The two chart views a step can restyle; particles live with the host
#[derive(Clone, Debug, Default)]
pub struct Stage {
    pub race_gender: RaceGenderView,
    pub timeline: TimelineView,
}

impl Stage {
    pub fn new(races: Vec<String>) -> Self {
        Self { race_gender: RaceGenderView::new(races), timeline: TimelineView::default() }
    }

    pub fn route<P: StepView + ?Sized>(&mut self, step: ViewStep, particles: &mut P) {
        match step.phase {
            Phase::RaceGender => self.race_gender.apply(step.local),
            Phase::Timeline => self.timeline.apply(step.local),
            Phase::Particles => particles.apply(step.local),
        }
    }
}
