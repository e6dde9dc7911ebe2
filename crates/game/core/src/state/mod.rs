//! Authoritative nation state.
//!
//! [`NationState`] is the single mutable aggregate of the simulation. It is
//! created once at game start, mutated in place by the reducer, and replaced
//! wholesale on reset. Presentation layers read a
//! [`NationSnapshot`](crate::snapshot::NationSnapshot) instead.
pub mod types;

pub use types::{
    DailyTasks, Group, GroupKind, Groups, MetricKind, Metrics, ResourceKind, Resources, Sector,
};

use crate::config::NationConfig;
use crate::event::ActiveEvent;

/// Why the game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum GameOverCause {
    /// Harmony fell to zero.
    HarmonyCollapse,
    /// Food ran out after daily consumption.
    Famine,
}

/// Canonical state of the nation.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NationState {
    pub resources: Resources,
    pub metrics: Metrics,
    pub groups: Groups,
    /// Spendable currency for investments, credited by level rewards.
    ///
    /// Distinct from [`Resources::wealth`], which trades and event choices
    /// use.
    pub treasury: f64,
    pub tasks: DailyTasks,
    /// Starts at 1.
    pub level: u32,
    /// Day within the level, `1..=days_per_level`.
    pub day: u32,
    pub active_event: Option<ActiveEvent>,
    pub game_over: bool,
    pub game_over_cause: Option<GameOverCause>,
    /// True iff an event awaits resolution.
    pub paused: bool,
}

impl NationState {
    /// Fixed initial configuration.
    pub fn new(config: &NationConfig, opening_tasks: Vec<String>) -> Self {
        Self {
            resources: Resources::default(),
            metrics: Metrics::default(),
            groups: Groups::default(),
            treasury: config.starting_treasury,
            tasks: DailyTasks::new(opening_tasks),
            level: 1,
            day: 1,
            active_event: None,
            game_over: false,
            game_over_cause: None,
            paused: false,
        }
    }

    pub fn required_tasks(&self, config: &NationConfig) -> u32 {
        config.required_tasks(self.level)
    }

    pub fn tasks_complete(&self, config: &NationConfig) -> bool {
        self.tasks.completed >= self.required_tasks(config)
    }

    /// Harmony below the critical threshold.
    pub fn at_risk(&self, config: &NationConfig) -> bool {
        self.metrics.harmony < config.critical_harmony
    }

    pub fn has_active_event(&self) -> bool {
        self.active_event.is_some()
    }

    /// Marks the game as ended. Terminal until reset.
    pub fn end_game(&mut self, cause: GameOverCause) {
        self.game_over = true;
        self.game_over_cause = Some(cause);
    }
}

impl Default for NationState {
    fn default() -> Self {
        Self::new(&NationConfig::default(), Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_values_match_opening_configuration() {
        let config = NationConfig::default();
        let state = NationState::new(&config, vec!["Survey food resources".into()]);

        assert_eq!(state.resources, Resources::new(50.0, 100.0, 75.0, 10.0));
        assert_eq!(state.metrics.harmony, 50.0);
        assert_eq!(state.groups.scholars.influence, 0.5);
        assert_eq!(state.treasury, 0.0);
        assert_eq!((state.level, state.day), (1, 1));
        assert_eq!(state.tasks.labels.len(), 1);
        assert!(!state.game_over && !state.paused && state.active_event.is_none());
    }

    #[test]
    fn at_risk_is_strictly_below_threshold() {
        let config = NationConfig::default();
        let mut state = NationState::default();

        state.metrics.harmony = 25.0;
        assert!(!state.at_risk(&config));
        state.metrics.harmony = 24.9;
        assert!(state.at_risk(&config));
    }
}
