use crate::action::{ActionReport, ActionTransition, CommandContext, Notice};
use crate::config::NationConfig;
use crate::economy;
use crate::env::GameEnv;
use crate::error::CommandError;
use crate::event::queue_random_event;
use crate::progression;
use crate::state::{MetricKind, NationState, ResourceKind};

/// Ends the current day.
///
/// Order: story advance, task reset, day increment, production, harmony,
/// termination (famine, then harmony), then either level completion or the
/// random event roll.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AdvanceDayAction;

impl ActionTransition for AdvanceDayAction {
    fn pre_validate(&self, state: &NationState, env: &GameEnv<'_>) -> Result<(), CommandError> {
        if state.has_active_event() {
            return Err(CommandError::EventAlreadyActive);
        }

        let remaining = state.tasks.remaining(state.required_tasks(env.config()));
        if remaining > 0 {
            return Err(CommandError::TasksIncomplete { remaining });
        }
        Ok(())
    }

    fn apply(&self, state: &mut NationState, ctx: &mut CommandContext<'_>) -> ActionReport {
        let config = ctx.env.config();
        let mut report = ActionReport::default();

        if let Some(step) = progression::advance_story(state, ctx.env.story()) {
            report.message = step.message.clone();
            report.notices.push(Notice::StoryAdvanced {
                phase: step.phase,
                message: step.message,
            });
        }

        state.tasks.completed = 0;
        state.day += 1;

        let production = economy::apply_daily_production(state, config);
        economy::update_harmony(state, config);

        if let Some(game_over) = progression::check_termination(state, production.famine) {
            report.message = game_over.summary();
            report.notices.push(Notice::GameOver(game_over));
            return report;
        }

        if state.day > config.days_per_level {
            let level = progression::complete_level(state, config);
            report.message = level.summary();
            report.notices.push(Notice::LevelCompleted(level));
        } else if ctx.rng.chance(config.event_chance) {
            // pre_validate ruled out a pending event.
            if let Ok(Some(title)) = queue_random_event(state, &ctx.env, &mut *ctx.rng) {
                report.notices.push(Notice::EventQueued { title });
            }
        }

        if report.message.is_empty() {
            report.message = format!("Day {} of level {} begins.", state.day, state.level);
        }
        report
    }

    fn post_validate(&self, state: &NationState, env: &GameEnv<'_>) {
        let max = env.config().max_resources;
        debug_assert!(
            ResourceKind::ALL
                .iter()
                .all(|&kind| (0.0..=max).contains(&state.resources.get(kind)))
        );
        debug_assert!(
            MetricKind::ALL
                .iter()
                .all(|&kind| (0.0..=NationConfig::METRIC_MAX).contains(&state.metrics.get(kind)))
        );
        debug_assert!(state.game_over || state.day <= env.config().days_per_level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{FixedRng, ScriptedRng, StoryOracle, StoryPhase, StoryTable};
    use crate::event::{Choice, EventCatalog, EventTemplate};
    use crate::state::GameOverCause;

    struct Fixture {
        config: NationConfig,
        catalog: EventCatalog,
        story: StoryTable,
    }

    impl Fixture {
        fn new() -> Self {
            let phase = |n: u32| StoryPhase {
                tasks: vec![format!("task {n}")],
                message: format!("phase {n} begins"),
                storyline: format!("storyline {n}"),
            };
            Self {
                config: NationConfig::default(),
                catalog: EventCatalog::new(vec![EventTemplate {
                    title: "Border Dispute".into(),
                    description: String::new(),
                    min_level: 1,
                    choices: vec![Choice {
                        label: "Negotiate".into(),
                        requires: Vec::new(),
                        effects: Vec::new(),
                        outcome: String::new(),
                    }],
                }]),
                story: StoryTable::new(vec![phase(0), phase(1)]),
            }
        }

        fn env(&self) -> GameEnv<'_> {
            GameEnv::new(&self.config, &self.catalog, &self.story)
        }

        fn ready_state(&self) -> NationState {
            let mut state = NationState::new(&self.config, self.story.opening_tasks());
            state.tasks.completed = self.config.required_tasks(1);
            state
        }

        fn advance(
            &self,
            state: &mut NationState,
            rng: &mut dyn crate::env::RngOracle,
        ) -> Result<ActionReport, CommandError> {
            let env = self.env();
            AdvanceDayAction.pre_validate(state, &env)?;
            let mut ctx = CommandContext::new(env, rng);
            Ok(AdvanceDayAction.apply(state, &mut ctx))
        }
    }

    #[test]
    fn incomplete_tasks_leave_state_unchanged() {
        let fixture = Fixture::new();
        let mut state = fixture.ready_state();
        state.tasks.completed = 2;
        let before = state.clone();

        let result = fixture.advance(&mut state, &mut FixedRng(0));

        assert_eq!(result, Err(CommandError::TasksIncomplete { remaining: 2 }));
        assert_eq!(state, before);
    }

    #[test]
    fn pending_event_blocks_the_day() {
        let fixture = Fixture::new();
        let mut state = fixture.ready_state();
        queue_random_event(&mut state, &fixture.env(), &mut FixedRng(0)).unwrap();

        let result = fixture.advance(&mut state, &mut FixedRng(0));

        assert_eq!(result, Err(CommandError::EventAlreadyActive));
        assert_eq!(state.day, 1);
    }

    #[test]
    fn successful_day_runs_story_and_economy() {
        let fixture = Fixture::new();
        let mut state = fixture.ready_state();

        // 0.9 is above the event chance.
        let report = fixture
            .advance(&mut state, &mut ScriptedRng::from_units(&[0.9]))
            .unwrap();

        assert_eq!(report.message, "phase 1 begins");
        assert_eq!(state.day, 2);
        assert_eq!(state.tasks.completed, 0);
        assert_eq!(state.tasks.labels, vec!["task 1".to_string()]);
        assert!((state.resources.food - 48.0).abs() < 1e-9);
        assert!(state.active_event.is_none());
    }

    #[test]
    fn event_roll_below_chance_queues_event() {
        let fixture = Fixture::new();
        let mut state = fixture.ready_state();
        state.tasks.story_progress = 5;

        let report = fixture
            .advance(&mut state, &mut FixedRng::from_unit(0.1))
            .unwrap();

        assert_eq!(report.message, "Day 2 of level 1 begins.");
        assert_eq!(
            report.notices,
            vec![Notice::EventQueued {
                title: "Border Dispute".into()
            }]
        );
        assert!(state.paused);
    }

    #[test]
    fn famine_ends_the_game() {
        let fixture = Fixture::new();
        let mut state = fixture.ready_state();
        state.resources.food = 3.0;
        state.metrics.agriculture = 0.0;

        let report = fixture.advance(&mut state, &mut FixedRng(0)).unwrap();

        assert!(state.game_over);
        assert_eq!(state.game_over_cause, Some(GameOverCause::Famine));
        assert_eq!(state.resources.food, 0.0);
        assert!(matches!(report.notices.last(), Some(Notice::GameOver(_))));
        assert!(state.active_event.is_none());
    }

    #[test]
    fn last_day_completes_the_level_instead_of_rolling() {
        let fixture = Fixture::new();
        let mut state = fixture.ready_state();
        state.day = fixture.config.days_per_level;

        let report = fixture.advance(&mut state, &mut FixedRng(0)).unwrap();

        assert_eq!((state.level, state.day), (2, 1));
        assert!(state.treasury >= 50.0);
        assert!(state.active_event.is_none());
        assert!(matches!(
            report.notices.last(),
            Some(Notice::LevelCompleted(level)) if level.completed_level == 1
        ));
    }
}
