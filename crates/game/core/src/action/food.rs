use crate::action::{ActionReport, ActionTransition, CommandContext};
use crate::config::NationConfig;
use crate::env::GameEnv;
use crate::error::{CommandError, Holding};
use crate::state::{NationState, ResourceKind};

/// Satisfaction every group gains from a distribution.
const SATISFACTION_GAIN: f64 = 5.0;

/// Hands out food to the whole population. Counts as a completed task.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DistributeFoodAction;

impl ActionTransition for DistributeFoodAction {
    fn pre_validate(&self, state: &NationState, env: &GameEnv<'_>) -> Result<(), CommandError> {
        let amount = env.config().food_distribution;
        let available = state.resources.food;
        if available < amount {
            return Err(CommandError::insufficient(
                Holding::Resource(ResourceKind::Food),
                amount,
                available,
            ));
        }
        Ok(())
    }

    fn apply(&self, state: &mut NationState, ctx: &mut CommandContext<'_>) -> ActionReport {
        state.resources.food -= ctx.env.config().food_distribution;
        state.tasks.record_completion();
        state.groups.adjust_all(SATISFACTION_GAIN);
        state.groups.cap_satisfaction(NationConfig::METRIC_MAX);

        ActionReport::message("Food distributed. Population satisfaction improved!")
    }
}
