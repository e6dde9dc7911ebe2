use crate::action::{ActionReport, ActionTransition, CommandContext};
use crate::env::GameEnv;
use crate::error::{CommandError, Holding};
use crate::state::{NationState, ResourceKind};

/// The fixed-rate exchanges offered by the market.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum TradeKind {
    FoodForWealth,
    WealthForFood,
    MaterialsForTechnology,
    WealthForMaterials,
}

/// Resource paid and resource received, with amounts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TradeRate {
    pub give: ResourceKind,
    pub give_amount: f64,
    pub receive: ResourceKind,
    pub receive_amount: f64,
}

impl TradeKind {
    pub const ALL: [TradeKind; 4] = [
        TradeKind::FoodForWealth,
        TradeKind::WealthForFood,
        TradeKind::MaterialsForTechnology,
        TradeKind::WealthForMaterials,
    ];

    pub const fn rate(self) -> TradeRate {
        use ResourceKind::*;
        let (give, give_amount, receive, receive_amount) = match self {
            TradeKind::FoodForWealth => (Food, 20.0, Wealth, 10.0),
            TradeKind::WealthForFood => (Wealth, 15.0, Food, 25.0),
            TradeKind::MaterialsForTechnology => (Materials, 30.0, Technology, 10.0),
            TradeKind::WealthForMaterials => (Wealth, 20.0, Materials, 25.0),
        };
        TradeRate {
            give,
            give_amount,
            receive,
            receive_amount,
        }
    }
}

/// Exchanges one stockpile for another. Does not count as a task.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TradeAction {
    pub kind: TradeKind,
}

impl TradeAction {
    pub fn new(kind: TradeKind) -> Self {
        Self { kind }
    }
}

impl ActionTransition for TradeAction {
    fn pre_validate(&self, state: &NationState, _env: &GameEnv<'_>) -> Result<(), CommandError> {
        let rate = self.kind.rate();
        let available = state.resources.get(rate.give);
        if available < rate.give_amount {
            return Err(CommandError::insufficient(
                Holding::Resource(rate.give),
                rate.give_amount,
                available,
            ));
        }
        Ok(())
    }

    fn apply(&self, state: &mut NationState, _ctx: &mut CommandContext<'_>) -> ActionReport {
        let rate = self.kind.rate();
        state.resources.adjust(rate.give, -rate.give_amount);
        state.resources.adjust(rate.receive, rate.receive_amount);

        ActionReport::message(format!("Traded {} for {}", rate.give, rate.receive))
    }
}
