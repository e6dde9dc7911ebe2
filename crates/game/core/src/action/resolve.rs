use crate::action::{ActionReport, ActionTransition, CommandContext};
use crate::env::GameEnv;
use crate::error::CommandError;
use crate::event::lifecycle;
use crate::state::NationState;

/// Takes one option of the active event.
///
/// Availability is re-checked here regardless of what the presentation layer
/// showed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResolveChoiceAction {
    /// Zero-based choice index.
    pub index: usize,
}

impl ResolveChoiceAction {
    pub fn new(index: usize) -> Self {
        Self { index }
    }
}

impl ActionTransition for ResolveChoiceAction {
    fn pre_validate(&self, state: &NationState, _env: &GameEnv<'_>) -> Result<(), CommandError> {
        lifecycle::validate_choice(state, self.index).map(|_| ())
    }

    fn apply(&self, state: &mut NationState, _ctx: &mut CommandContext<'_>) -> ActionReport {
        match lifecycle::resolve_choice(state, self.index) {
            Ok(outcome) => ActionReport::message(outcome),
            // Unreachable after pre_validate; keeps the state untouched.
            Err(error) => ActionReport::message(error.to_string()),
        }
    }

    fn post_validate(&self, state: &NationState, _env: &GameEnv<'_>) {
        debug_assert!(state.active_event.is_none());
        debug_assert!(!state.paused);
    }
}
