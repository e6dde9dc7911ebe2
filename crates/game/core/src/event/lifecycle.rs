//! Event lifecycle: none → queued → displayed → resolved → none.
//!
//! At most one event is in flight. While it is, `paused` stays set and the
//! day cannot advance.

use crate::env::{GameEnv, RngOracle};
use crate::error::CommandError;
use crate::event::{ActiveEvent, Choice};
use crate::state::NationState;

/// Draws a template uniformly from the candidates eligible at the current
/// level and makes it the active event.
///
/// Returns the queued title, or `None` when no template is eligible. Fails
/// with [`CommandError::EventAlreadyActive`] while another event is pending;
/// the state is untouched in that case.
pub fn queue_random_event(
    state: &mut NationState,
    env: &GameEnv<'_>,
    rng: &mut dyn RngOracle,
) -> Result<Option<String>, CommandError> {
    if state.has_active_event() {
        return Err(CommandError::EventAlreadyActive);
    }

    let candidates = env.events().candidates(state.level);
    if candidates.is_empty() {
        return Ok(None);
    }

    let template = candidates[rng.index(candidates.len())].clone();
    let title = template.title.clone();
    state.active_event = Some(ActiveEvent::queued(template));
    state.paused = true;

    Ok(Some(title))
}

/// Looks up choice `index` of the active event and checks that it may be
/// taken now. Does not mutate.
pub fn validate_choice(state: &NationState, index: usize) -> Result<&Choice, CommandError> {
    if state.game_over {
        return Err(CommandError::Terminal);
    }

    let event = state
        .active_event
        .as_ref()
        .ok_or(CommandError::NoActiveEvent)?;

    let choices = &event.template.choices;
    let choice = choices.get(index).ok_or(CommandError::ChoiceOutOfRange {
        index,
        len: choices.len(),
    })?;

    if !choice.is_available(state) {
        return Err(CommandError::ChoiceUnavailable { index });
    }

    Ok(choice)
}

/// Applies choice `index` of the active event, clears the event and unpauses.
///
/// Returns the choice's outcome message. Exactly once per event: a second
/// call yields [`CommandError::NoActiveEvent`].
pub fn resolve_choice(state: &mut NationState, index: usize) -> Result<String, CommandError> {
    let choice = validate_choice(state, index)?.clone();

    choice.apply(state);
    state.active_event = None;
    state.paused = false;

    Ok(choice.outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NationConfig;
    use crate::env::{FixedRng, ScriptedRng, StoryTable};
    use crate::event::{EffectOp, EventCatalog, EventStage, EventTemplate, Requirement};
    use crate::state::{GroupKind, MetricKind, ResourceKind};

    fn catalog() -> EventCatalog {
        EventCatalog::new(vec![
            EventTemplate {
                title: "Worker Strike".into(),
                description: "Workers demand better conditions.".into(),
                min_level: 1,
                choices: vec![
                    Choice {
                        label: "Meet their demands".into(),
                        requires: vec![Requirement::ResourceAtLeast(ResourceKind::Wealth, 30.0)],
                        effects: vec![
                            EffectOp::Resource(ResourceKind::Wealth, -30.0),
                            EffectOp::Satisfaction(GroupKind::Workers, 20.0),
                        ],
                        outcome: "Workers' demands met.".into(),
                    },
                    Choice {
                        label: "Refuse".into(),
                        requires: Vec::new(),
                        effects: vec![EffectOp::Metric(MetricKind::Harmony, -10.0)],
                        outcome: "Workers furious!".into(),
                    },
                ],
            },
            EventTemplate {
                title: "Refugee Crisis".into(),
                description: String::new(),
                min_level: 2,
                choices: Vec::new(),
            },
        ])
    }

    fn queued_state(config: &NationConfig, catalog: &EventCatalog) -> NationState {
        let story = StoryTable::default();
        let env = GameEnv::new(config, catalog, &story);
        let mut state = NationState::new(config, Vec::new());
        queue_random_event(&mut state, &env, &mut FixedRng(0)).unwrap();
        state
    }

    #[test]
    fn queue_sets_event_and_pauses() {
        let config = NationConfig::default();
        let catalog = catalog();
        let state = queued_state(&config, &catalog);

        let event = state.active_event.as_ref().unwrap();
        assert_eq!(event.template.title, "Worker Strike");
        assert_eq!(event.stage, EventStage::Queued);
        assert!(state.paused);
    }

    #[test]
    fn queue_rejects_while_event_pending() {
        let config = NationConfig::default();
        let catalog = catalog();
        let story = StoryTable::default();
        let env = GameEnv::new(&config, &catalog, &story);
        let mut state = queued_state(&config, &catalog);
        let before = state.clone();

        let result = queue_random_event(&mut state, &env, &mut ScriptedRng::from_units(&[0.9]));

        assert_eq!(result, Err(CommandError::EventAlreadyActive));
        assert_eq!(state, before);
    }

    #[test]
    fn queue_draws_only_eligible_templates() {
        let config = NationConfig::default();
        let catalog = catalog();
        let story = StoryTable::default();
        let env = GameEnv::new(&config, &catalog, &story);
        let mut state = NationState::new(&config, Vec::new());

        // The top of the unit interval would pick the gated template if it
        // were in the pool.
        let title = queue_random_event(&mut state, &env, &mut FixedRng(u32::MAX)).unwrap();
        assert_eq!(title.as_deref(), Some("Worker Strike"));
    }

    #[test]
    fn queue_with_empty_pool_is_a_no_op() {
        let config = NationConfig::default();
        let catalog = EventCatalog::default();
        let story = StoryTable::default();
        let env = GameEnv::new(&config, &catalog, &story);
        let mut state = NationState::new(&config, Vec::new());

        assert_eq!(queue_random_event(&mut state, &env, &mut FixedRng(0)), Ok(None));
        assert!(!state.paused);
    }

    #[test]
    fn resolution_is_exactly_once() {
        let config = NationConfig::default();
        let catalog = catalog();
        let mut state = queued_state(&config, &catalog);

        let outcome = resolve_choice(&mut state, 0).unwrap();

        assert_eq!(outcome, "Workers' demands met.");
        assert_eq!(state.resources.wealth, 70.0);
        assert_eq!(state.groups.workers.satisfaction, 70.0);
        assert!(state.active_event.is_none());
        assert!(!state.paused);

        assert_eq!(resolve_choice(&mut state, 0), Err(CommandError::NoActiveEvent));
    }

    #[test]
    fn unavailable_choice_is_rejected_without_mutation() {
        let config = NationConfig::default();
        let catalog = catalog();
        let mut state = queued_state(&config, &catalog);
        state.resources.wealth = 10.0;
        let before = state.clone();

        assert_eq!(
            resolve_choice(&mut state, 0),
            Err(CommandError::ChoiceUnavailable { index: 0 })
        );
        assert_eq!(state, before);
    }

    #[test]
    fn out_of_range_choice_is_rejected() {
        let config = NationConfig::default();
        let catalog = catalog();
        let mut state = queued_state(&config, &catalog);

        assert_eq!(
            resolve_choice(&mut state, 5),
            Err(CommandError::ChoiceOutOfRange { index: 5, len: 2 })
        );
        assert!(state.has_active_event());
    }
}
