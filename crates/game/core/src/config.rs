/// Simulation constants and tunable parameters.
///
/// Defaults reproduce the classic balance. Every field can be overridden
/// from a TOML file (see `nation-content`); missing fields keep their default.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NationConfig {
    /// Upper bound applied to every resource on each production tick.
    pub max_resources: f64,
    /// Harmony strictly below this marks the nation as at risk.
    pub critical_harmony: f64,
    /// Length of a level in days.
    pub days_per_level: u32,
    /// Tasks required per day at level 1.
    pub base_required_tasks: u32,
    /// Extra tasks required per day for each level above 1.
    pub tasks_per_level: u32,
    /// Probability of a random event after a successful day advance.
    pub event_chance: f64,
    /// Treasury cost of a sector investment.
    pub invest_cost: f64,
    /// Food handed out by a single distribution.
    pub food_distribution: f64,
    /// Treasury at game start and after a reset.
    pub starting_treasury: f64,
    /// Fraction of the gap to the group-weighted target closed each day.
    pub harmony_smoothing: f64,
    /// Harmony gained per diplomacy point each day.
    pub diplomacy_bonus: f64,
    /// Flat treasury reward for completing a level.
    pub level_base_reward: f64,
    /// Reward per full 10 points of harmony at level completion.
    pub harmony_bonus_per_tier: f64,
}

impl NationConfig {
    pub const DEFAULT_MAX_RESOURCES: f64 = 1000.0;
    pub const DEFAULT_CRITICAL_HARMONY: f64 = 25.0;
    pub const DEFAULT_DAYS_PER_LEVEL: u32 = 30;
    pub const DEFAULT_BASE_REQUIRED_TASKS: u32 = 4;
    pub const DEFAULT_TASKS_PER_LEVEL: u32 = 1;
    pub const DEFAULT_EVENT_CHANCE: f64 = 0.3;
    pub const DEFAULT_INVEST_COST: f64 = 15.0;
    pub const DEFAULT_FOOD_DISTRIBUTION: f64 = 10.0;
    pub const DEFAULT_STARTING_TREASURY: f64 = 0.0;
    pub const DEFAULT_HARMONY_SMOOTHING: f64 = 0.1;
    pub const DEFAULT_DIPLOMACY_BONUS: f64 = 0.05;
    pub const DEFAULT_LEVEL_BASE_REWARD: f64 = 50.0;
    pub const DEFAULT_HARMONY_BONUS_PER_TIER: f64 = 5.0;

    /// Metrics and satisfaction live on a 0..=100 scale.
    pub const METRIC_MAX: f64 = 100.0;

    pub fn new() -> Self {
        Self {
            max_resources: Self::DEFAULT_MAX_RESOURCES,
            critical_harmony: Self::DEFAULT_CRITICAL_HARMONY,
            days_per_level: Self::DEFAULT_DAYS_PER_LEVEL,
            base_required_tasks: Self::DEFAULT_BASE_REQUIRED_TASKS,
            tasks_per_level: Self::DEFAULT_TASKS_PER_LEVEL,
            event_chance: Self::DEFAULT_EVENT_CHANCE,
            invest_cost: Self::DEFAULT_INVEST_COST,
            food_distribution: Self::DEFAULT_FOOD_DISTRIBUTION,
            starting_treasury: Self::DEFAULT_STARTING_TREASURY,
            harmony_smoothing: Self::DEFAULT_HARMONY_SMOOTHING,
            diplomacy_bonus: Self::DEFAULT_DIPLOMACY_BONUS,
            level_base_reward: Self::DEFAULT_LEVEL_BASE_REWARD,
            harmony_bonus_per_tier: Self::DEFAULT_HARMONY_BONUS_PER_TIER,
        }
    }

    /// Overrides the starting treasury (builder pattern).
    #[must_use]
    pub fn with_starting_treasury(mut self, treasury: f64) -> Self {
        self.starting_treasury = treasury;
        self
    }

    /// Overrides the random event probability (builder pattern).
    #[must_use]
    pub fn with_event_chance(mut self, chance: f64) -> Self {
        self.event_chance = chance;
        self
    }

    /// Tasks that must be completed before the day can advance at `level`.
    pub fn required_tasks(&self, level: u32) -> u32 {
        self.base_required_tasks + level.saturating_sub(1) * self.tasks_per_level
    }

    /// Daily food consumption at `level`.
    pub fn food_consumption(&self, level: u32) -> f64 {
        5.0 + f64::from(level) * 2.0
    }
}

impl Default for NationConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_tasks_scale_with_level() {
        let config = NationConfig::default();
        assert_eq!(config.required_tasks(1), 4);
        assert_eq!(config.required_tasks(2), 5);
        assert_eq!(config.required_tasks(5), 8);
    }

    #[test]
    fn consumption_scales_with_level() {
        let config = NationConfig::default();
        assert_eq!(config.food_consumption(1), 7.0);
        assert_eq!(config.food_consumption(3), 11.0);
    }
}
