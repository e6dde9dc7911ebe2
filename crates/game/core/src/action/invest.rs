use crate::action::{ActionReport, ActionTransition, CommandContext};
use crate::config::NationConfig;
use crate::env::GameEnv;
use crate::error::{CommandError, Holding};
use crate::state::{GroupKind, NationState, Sector};

/// Metric gained by the invested sector.
const SECTOR_GAIN: f64 = 5.0;
/// Satisfaction gained by the group a sector favours.
const FAVOURED_GROUP_GAIN: f64 = 10.0;
/// Satisfaction gained by every group from healthcare.
const HEALTHCARE_GAIN: f64 = 3.0;

/// Spends treasury on a sector. Counts as a completed task.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InvestAction {
    pub sector: Sector,
}

impl InvestAction {
    pub fn new(sector: Sector) -> Self {
        Self { sector }
    }

    fn favoured_group(&self) -> Option<GroupKind> {
        match self.sector {
            Sector::Agriculture => Some(GroupKind::Farmers),
            Sector::Infrastructure => Some(GroupKind::Workers),
            Sector::Education => Some(GroupKind::Scholars),
            Sector::Healthcare | Sector::Diplomacy => None,
        }
    }

    fn message(&self) -> &'static str {
        match self.sector {
            Sector::Agriculture => "Invested in agriculture. Farmers are pleased!",
            Sector::Infrastructure => "Invested in infrastructure. Workers are pleased!",
            Sector::Education => "Invested in education. Scholars are pleased!",
            Sector::Healthcare => "Invested in healthcare. Everyone appreciates it!",
            Sector::Diplomacy => "Invested in diplomacy. International relations improved!",
        }
    }
}

impl ActionTransition for InvestAction {
    fn pre_validate(&self, state: &NationState, env: &GameEnv<'_>) -> Result<(), CommandError> {
        let cost = env.config().invest_cost;
        if state.treasury < cost {
            return Err(CommandError::insufficient(
                Holding::Treasury,
                cost,
                state.treasury,
            ));
        }
        Ok(())
    }

    fn apply(&self, state: &mut NationState, ctx: &mut CommandContext<'_>) -> ActionReport {
        state.treasury -= ctx.env.config().invest_cost;
        state.tasks.record_completion();

        let metric = state.metrics.get_mut(self.sector.metric());
        *metric = (*metric + SECTOR_GAIN).min(NationConfig::METRIC_MAX);

        if let Some(group) = self.favoured_group() {
            state.groups.adjust_satisfaction(group, FAVOURED_GROUP_GAIN);
        } else if self.sector == Sector::Healthcare {
            state.groups.adjust_all(HEALTHCARE_GAIN);
        }
        state.groups.cap_satisfaction(NationConfig::METRIC_MAX);

        ActionReport::message(self.message())
    }
}
