//! Deterministic rules for the HarmonyNation simulation.
//!
//! `nation-core` defines the canonical nation state, the daily economy, the
//! event engine and level progression, and exposes them as pure APIs with no
//! I/O. All state mutation flows through [`engine::NationEngine`]; randomness
//! comes only from an injected [`env::RngOracle`].
pub mod action;
pub mod config;
pub mod economy;
pub mod engine;
pub mod env;
pub mod error;
pub mod event;
pub mod progression;
pub mod snapshot;
pub mod state;

pub use action::{
    ActionReport, ActionTransition, AdvanceDayAction, Command, CommandContext,
    DistributeFoodAction, InvestAction, Notice, ResolveChoiceAction, TradeAction, TradeKind,
};
pub use config::NationConfig;
pub use economy::{ProductionReport, apply_daily_production, update_harmony};
pub use engine::{CommandOutcome, NationEngine};
pub use env::{
    EventOracle, FixedRng, GameEnv, PcgRng, RngOracle, ScriptedRng, StoryOracle, StoryPhase,
    StoryTable,
};
pub use error::{CommandError, ErrorSeverity, GameError, Holding};
pub use event::{
    ActiveEvent, Choice, EffectOp, EventCatalog, EventStage, EventTemplate, Requirement,
    queue_random_event, resolve_choice,
};
pub use progression::{GameOverReport, LevelReport, start_game};
pub use snapshot::{ChoiceView, EventView, NationSnapshot, TaskView};
pub use state::{
    DailyTasks, GameOverCause, Group, GroupKind, Groups, MetricKind, Metrics, NationState,
    ResourceKind, Resources, Sector,
};
