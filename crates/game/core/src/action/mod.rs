//! Player commands and their transitions.
//!
//! Every command is a small value type implementing [`ActionTransition`].
//! The engine runs `pre_validate` against the untouched state and only then
//! calls `apply`, so a rejected command never leaves a partial mutation
//! behind.
//!
//! - `advance`: the day tick (story, economy, termination, level, events)
//! - `invest`: sector investment paid from the treasury
//! - `food`: food distribution to every group
//! - `trade`: the four fixed-rate exchanges
//! - `resolve`: choosing an option of the active event

pub mod advance;
pub mod food;
pub mod invest;
pub mod resolve;
pub mod trade;

pub use advance::AdvanceDayAction;
pub use food::DistributeFoodAction;
pub use invest::InvestAction;
pub use resolve::ResolveChoiceAction;
pub use trade::{TradeAction, TradeKind};

use crate::env::{GameEnv, RngOracle};
use crate::error::CommandError;
use crate::progression::{GameOverReport, LevelReport};
use crate::state::{NationState, Sector};

/// Defines how a command mutates the nation.
pub trait ActionTransition {
    /// Checks every precondition against the state **before** mutation.
    fn pre_validate(&self, state: &NationState, env: &GameEnv<'_>) -> Result<(), CommandError>;

    /// Applies the command. Only called after `pre_validate` succeeded, so it
    /// cannot fail.
    fn apply(&self, state: &mut NationState, ctx: &mut CommandContext<'_>) -> ActionReport;

    /// Debug-time checks on the state **after** mutation.
    fn post_validate(&self, _state: &NationState, _env: &GameEnv<'_>) {}
}

/// Read-only content plus the random source, handed to `apply`.
pub struct CommandContext<'a> {
    pub env: GameEnv<'a>,
    pub rng: &'a mut dyn RngOracle,
}

impl<'a> CommandContext<'a> {
    pub fn new(env: GameEnv<'a>, rng: &'a mut dyn RngOracle) -> Self {
        Self { env, rng }
    }
}

/// Something noteworthy that happened while a command was applied.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Notice {
    StoryAdvanced { phase: u32, message: String },
    EventQueued { title: String },
    LevelCompleted(LevelReport),
    GameOver(GameOverReport),
}

/// Status message and notices produced by an applied command.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ActionReport {
    pub message: String,
    pub notices: Vec<Notice>,
}

impl ActionReport {
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            notices: Vec::new(),
        }
    }
}

/// A player command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Command {
    AdvanceDay(AdvanceDayAction),
    Invest(InvestAction),
    DistributeFood(DistributeFoodAction),
    Trade(TradeAction),
    ResolveChoice(ResolveChoiceAction),
}

impl Command {
    pub fn advance_day() -> Self {
        Self::AdvanceDay(AdvanceDayAction)
    }

    pub fn invest(sector: Sector) -> Self {
        Self::Invest(InvestAction::new(sector))
    }

    pub fn distribute_food() -> Self {
        Self::DistributeFood(DistributeFoodAction)
    }

    pub fn trade(kind: TradeKind) -> Self {
        Self::Trade(TradeAction::new(kind))
    }

    /// `index` is zero-based.
    pub fn resolve_choice(index: usize) -> Self {
        Self::ResolveChoice(ResolveChoiceAction::new(index))
    }

    /// Stable snake_case name for logs.
    pub fn name(&self) -> &'static str {
        self.into()
    }

    /// Every invest, distribute and trade command, in display order.
    pub fn economy_commands() -> impl Iterator<Item = Command> {
        Sector::ALL
            .into_iter()
            .map(Command::invest)
            .chain(std::iter::once(Command::distribute_food()))
            .chain(TradeKind::ALL.into_iter().map(Command::trade))
    }

    /// Runs only the validation phase.
    pub fn check(&self, state: &NationState, env: &GameEnv<'_>) -> Result<(), CommandError> {
        match self {
            Command::AdvanceDay(action) => action.pre_validate(state, env),
            Command::Invest(action) => action.pre_validate(state, env),
            Command::DistributeFood(action) => action.pre_validate(state, env),
            Command::Trade(action) => action.pre_validate(state, env),
            Command::ResolveChoice(action) => action.pre_validate(state, env),
        }
    }
}

impl core::fmt::Display for Command {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Command::AdvanceDay(_) => f.write_str("advance day"),
            Command::Invest(action) => write!(f, "invest {}", action.sector),
            Command::DistributeFood(_) => f.write_str("distribute food"),
            Command::Trade(action) => write!(f, "trade {}", action.kind),
            Command::ResolveChoice(action) => write!(f, "choose {}", action.index + 1),
        }
    }
}
