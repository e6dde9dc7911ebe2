//! Event engine: templates as data, availability checks and choice effects.
//!
//! Templates never carry code. A [`Choice`] lists its [`Requirement`]s and a
//! sequence of [`EffectOp`]s that a single applier interprets, so catalogs
//! can be loaded from data files and inspected in tests.
//!
//! - `catalog`: the template pool and level-gated candidate selection
//! - `lifecycle`: queueing a random event and resolving a choice

pub mod catalog;
pub mod lifecycle;

pub use catalog::EventCatalog;
pub use lifecycle::{queue_random_event, resolve_choice};

use crate::state::{GroupKind, MetricKind, NationState, ResourceKind};

/// Availability predicate over the current state.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Requirement {
    /// Stockpile of `kind` must be at least the amount.
    ResourceAtLeast(ResourceKind, f64),
    /// Metric `kind` must be at least the amount.
    MetricAtLeast(MetricKind, f64),
}

impl Requirement {
    pub fn is_met(&self, state: &NationState) -> bool {
        match *self {
            Requirement::ResourceAtLeast(kind, amount) => state.resources.get(kind) >= amount,
            Requirement::MetricAtLeast(kind, amount) => state.metrics.get(kind) >= amount,
        }
    }
}

/// Atomic state mutation attached to a choice.
///
/// Deltas are applied without clamping; bounds are restored at the next
/// production tick.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EffectOp {
    Resource(ResourceKind, f64),
    Metric(MetricKind, f64),
    Satisfaction(GroupKind, f64),
    Treasury(f64),
}

impl EffectOp {
    pub fn apply(&self, state: &mut NationState) {
        match *self {
            EffectOp::Resource(kind, delta) => state.resources.adjust(kind, delta),
            EffectOp::Metric(kind, delta) => state.metrics.adjust(kind, delta),
            EffectOp::Satisfaction(group, delta) => state.groups.adjust_satisfaction(group, delta),
            EffectOp::Treasury(delta) => state.treasury += delta,
        }
    }
}

/// One option offered by an event.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Choice {
    pub label: String,
    /// All must hold for the choice to be selectable. Empty means always.
    #[cfg_attr(feature = "serde", serde(default))]
    pub requires: Vec<Requirement>,
    /// Applied in order on resolution.
    #[cfg_attr(feature = "serde", serde(default))]
    pub effects: Vec<EffectOp>,
    /// Status message shown after the choice is taken.
    pub outcome: String,
}

impl Choice {
    pub fn is_available(&self, state: &NationState) -> bool {
        self.requires.iter().all(|requirement| requirement.is_met(state))
    }

    pub fn apply(&self, state: &mut NationState) {
        for effect in &self.effects {
            effect.apply(state);
        }
    }
}

/// Static event definition.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EventTemplate {
    pub title: String,
    pub description: String,
    /// Lowest level at which the template enters the candidate pool.
    #[cfg_attr(feature = "serde", serde(default = "default_min_level"))]
    pub min_level: u32,
    pub choices: Vec<Choice>,
}

#[cfg(feature = "serde")]
fn default_min_level() -> u32 {
    1
}

impl EventTemplate {
    pub fn is_eligible(&self, level: u32) -> bool {
        level >= self.min_level
    }
}

/// Where an active event is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EventStage {
    /// Selected, not yet shown to the player.
    Queued,
    /// Rendered at least once and awaiting a choice.
    Displayed,
}

/// The single in-flight event awaiting a player choice.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActiveEvent {
    pub template: EventTemplate,
    pub stage: EventStage,
}

impl ActiveEvent {
    pub fn queued(template: EventTemplate) -> Self {
        Self {
            template,
            stage: EventStage::Queued,
        }
    }

    pub fn mark_displayed(&mut self) {
        self.stage = EventStage::Displayed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NationConfig;

    fn state() -> NationState {
        NationState::new(&NationConfig::default(), Vec::new())
    }

    #[test]
    fn requirements_gate_availability() {
        let mut state = state();
        let choice = Choice {
            label: "Invest heavily".into(),
            requires: vec![
                Requirement::ResourceAtLeast(ResourceKind::Wealth, 40.0),
                Requirement::ResourceAtLeast(ResourceKind::Materials, 30.0),
            ],
            effects: Vec::new(),
            outcome: String::new(),
        };

        assert!(choice.is_available(&state));
        state.resources.materials = 29.0;
        assert!(!choice.is_available(&state));
    }

    #[test]
    fn effects_apply_in_order_without_clamping() {
        let mut state = state();
        state.resources.food = 30.0;
        let choice = Choice {
            label: "Do nothing and hope for rain".into(),
            requires: Vec::new(),
            effects: vec![
                EffectOp::Resource(ResourceKind::Food, -20.0),
                EffectOp::Resource(ResourceKind::Food, -20.0),
                EffectOp::Satisfaction(GroupKind::Farmers, -15.0),
                EffectOp::Treasury(5.0),
            ],
            outcome: String::new(),
        };

        choice.apply(&mut state);

        assert_eq!(state.resources.food, -10.0);
        assert_eq!(state.groups.farmers.satisfaction, 35.0);
        assert_eq!(state.treasury, 5.0);
    }
}
