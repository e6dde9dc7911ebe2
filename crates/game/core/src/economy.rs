//! Daily economy: production, consumption and harmony convergence.
//!
//! Both steps run once per successful day advance, production first. Their
//! arithmetic order is fixed; reordering changes results numerically.

use crate::config::NationConfig;
use crate::state::NationState;

/// Food per agriculture point.
const FOOD_PER_AGRICULTURE: f64 = 0.5;
/// Wealth per infrastructure point.
const WEALTH_PER_INFRASTRUCTURE: f64 = 0.3;
/// Wealth per merchant satisfaction × influence.
const WEALTH_PER_MERCHANT: f64 = 0.05;
/// Materials per worker satisfaction × influence.
const MATERIALS_PER_WORKER: f64 = 0.05;
/// Technology per education point.
const TECHNOLOGY_PER_EDUCATION: f64 = 0.1;
/// Technology per scholar satisfaction × influence.
const TECHNOLOGY_PER_SCHOLAR: f64 = 0.02;

/// Result of one production tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProductionReport {
    /// Food eaten this tick.
    pub consumed: f64,
    /// Food ran out after consumption.
    pub famine: bool,
}

/// Applies one day of production and consumption.
///
/// Afterwards every resource lies in `[0, max_resources]` and every sector
/// metric and group satisfaction in `[0, 100]`. Harmony is left to
/// [`update_harmony`].
pub fn apply_daily_production(state: &mut NationState, config: &NationConfig) -> ProductionReport {
    let metrics = &state.metrics;
    let groups = &state.groups;

    let food = metrics.agriculture * FOOD_PER_AGRICULTURE;
    let wealth = metrics.infrastructure * WEALTH_PER_INFRASTRUCTURE
        + groups.merchants.satisfaction * groups.merchants.influence * WEALTH_PER_MERCHANT;
    let materials =
        groups.workers.satisfaction * groups.workers.influence * MATERIALS_PER_WORKER;
    let technology = metrics.education * TECHNOLOGY_PER_EDUCATION
        + groups.scholars.satisfaction * groups.scholars.influence * TECHNOLOGY_PER_SCHOLAR;

    let resources = &mut state.resources;
    resources.food += food;
    resources.wealth += wealth;
    resources.materials += materials;
    resources.technology += technology;

    let consumed = config.food_consumption(state.level);
    resources.food -= consumed;

    let famine = resources.food <= 0.0;
    if famine {
        resources.food = 0.0;
    }

    resources.clamp_all(config.max_resources);
    state.metrics.clamp_sectors(NationConfig::METRIC_MAX);
    state
        .groups
        .clamp_satisfaction(NationConfig::METRIC_MAX);

    ProductionReport { consumed, famine }
}

/// Pulls harmony toward the influence-weighted group satisfaction, then adds
/// the diplomacy bonus, then clamps to `[0, 100]`.
pub fn update_harmony(state: &mut NationState, config: &NationConfig) {
    let harmony = &mut state.metrics.harmony;

    if let Some(target) = state.groups.weighted_satisfaction() {
        *harmony += (target - *harmony) * config.harmony_smoothing;
    }
    *harmony += state.metrics.diplomacy * config.diplomacy_bonus;
    *harmony = harmony.clamp(0.0, NationConfig::METRIC_MAX);
}
