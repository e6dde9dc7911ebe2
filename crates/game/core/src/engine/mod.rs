//! Command execution pipeline.
//!
//! The [`NationEngine`] is the authoritative reducer for [`NationState`].
//! Every player command flows through the same path:
//! terminal check → pre_validate → apply → post_validate → snapshot.

mod transition;

use crate::action::{ActionReport, Command, Notice};
use crate::env::{GameEnv, RngOracle};
use crate::error::CommandError;
use crate::snapshot::NationSnapshot;
use crate::state::NationState;

/// Result of an accepted command.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CommandOutcome {
    pub snapshot: NationSnapshot,
    /// Human-readable status message.
    pub message: String,
    pub notices: Vec<Notice>,
}

impl CommandOutcome {
    pub fn new(snapshot: NationSnapshot, report: ActionReport) -> Self {
        Self {
            snapshot,
            message: report.message,
            notices: report.notices,
        }
    }
}

/// Applies commands to a borrowed [`NationState`].
pub struct NationEngine<'a> {
    state: &'a mut NationState,
}

impl<'a> NationEngine<'a> {
    pub fn new(state: &'a mut NationState) -> Self {
        Self { state }
    }

    /// Executes `command`. On rejection the state is left exactly as it was.
    pub fn execute(
        &mut self,
        env: GameEnv<'_>,
        rng: &mut dyn RngOracle,
        command: &Command,
    ) -> Result<CommandOutcome, CommandError> {
        if self.state.game_over {
            return Err(CommandError::Terminal);
        }

        let report = transition::execute_transition(command, self.state, env, rng)?;
        Ok(CommandOutcome::new(
            NationSnapshot::capture(self.state, &env),
            report,
        ))
    }
}
