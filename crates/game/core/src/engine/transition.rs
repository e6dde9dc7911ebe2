//! Command dispatch through the transition pipeline.

use crate::action::{ActionReport, ActionTransition, Command, CommandContext};
use crate::env::{GameEnv, RngOracle};
use crate::error::CommandError;
use crate::state::NationState;

/// Runs one transition:
/// 1. `pre_validate` against the untouched state
/// 2. `apply`
/// 3. `post_validate` (debug checks only)
#[inline]
fn drive_transition<T>(
    transition: &T,
    state: &mut NationState,
    env: GameEnv<'_>,
    rng: &mut dyn RngOracle,
) -> Result<ActionReport, CommandError>
where
    T: ActionTransition,
{
    transition.pre_validate(state, &env)?;

    let mut ctx = CommandContext::new(env, rng);
    let report = transition.apply(state, &mut ctx);

    transition.post_validate(state, &env);
    Ok(report)
}

pub(super) fn execute_transition(
    command: &Command,
    state: &mut NationState,
    env: GameEnv<'_>,
    rng: &mut dyn RngOracle,
) -> Result<ActionReport, CommandError> {
    match command {
        Command::AdvanceDay(transition) => drive_transition(transition, state, env, rng),
        Command::Invest(transition) => drive_transition(transition, state, env, rng),
        Command::DistributeFood(transition) => drive_transition(transition, state, env, rng),
        Command::Trade(transition) => drive_transition(transition, state, env, rng),
        Command::ResolveChoice(transition) => drive_transition(transition, state, env, rng),
    }
}
