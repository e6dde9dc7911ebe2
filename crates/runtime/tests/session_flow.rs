use std::sync::{Arc, Mutex};

use nation_content::{ContentBundle, ContentFactory};
use nation_core::{
    CommandError, EventCatalog, EventStage, FixedRng, GameOverCause, Holding, MetricKind,
    NationConfig, NationState, Notice, ResourceKind, Resources, Sector, StoryOracle, TradeKind,
};
use nation_runtime::{RuntimeError, Session};

fn content() -> ContentBundle {
    ContentFactory::embedded()
        .load_all()
        .expect("embedded content should load")
}

fn ready_state(content: &ContentBundle) -> NationState {
    let mut state = NationState::new(&content.config, content.story.opening_tasks());
    state.tasks.completed = content.config.required_tasks(state.level);
    state
}

#[test]
fn fresh_session_opens_with_an_event() {
    let session = Session::builder()
        .content(content())
        .rng(FixedRng(0))
        .build()
        .unwrap();

    let snapshot = session.snapshot();
    let event = snapshot.active_event.expect("opening event");

    assert_eq!(event.title, "Drought Warning");
    // Building publishes the opening outcome, so the event counts as shown.
    assert_eq!(event.stage, EventStage::Displayed);
    assert_eq!(event.choices.len(), 3);
    assert!(snapshot.paused);
    assert_eq!(snapshot.tasks.labels[0], "Survey food resources");
    assert_eq!(snapshot.status_line, "Nation is stable");
    assert_eq!(session.seed(), None);
}

#[test]
fn famine_is_terminal_until_reset() {
    let content = content();
    let mut state = ready_state(&content);
    state.resources.food = 3.0;
    state.metrics.agriculture = 0.0;

    let mut session = Session::builder()
        .content(content)
        .initial_state(state)
        .rng(FixedRng(0))
        .build()
        .unwrap();

    let outcome = session.advance_day().unwrap();

    assert!(outcome.snapshot.game_over);
    assert_eq!(outcome.snapshot.game_over_cause, Some(GameOverCause::Famine));
    assert_eq!(outcome.snapshot.resources.food, 0.0);
    assert!(outcome.message.contains("severe food shortage"));
    assert!(outcome.snapshot.available_commands.is_empty());

    assert_eq!(session.distribute_food(), Err(CommandError::Terminal));
    assert_eq!(session.advance_day(), Err(CommandError::Terminal));

    let outcome = session.reset().unwrap();
    assert!(!outcome.snapshot.game_over);
    assert_eq!((outcome.snapshot.level, outcome.snapshot.day), (1, 1));
    assert_eq!(outcome.snapshot.resources, Resources::new(50.0, 100.0, 75.0, 10.0));
    assert_eq!(outcome.snapshot.tasks.labels.len(), 4);
    assert_eq!(
        outcome.notices,
        vec![Notice::EventQueued {
            title: "Drought Warning".into()
        }]
    );
}

#[test]
fn level_completion_credits_harmony_bonus() {
    let content = content();
    let mut state = ready_state(&content);
    state.day = content.config.days_per_level;
    state.metrics.harmony = 83.0;

    let mut session = Session::builder()
        .content(content)
        .initial_state(state)
        .rng(FixedRng(0))
        .build()
        .unwrap();

    let outcome = session.advance_day().unwrap();

    // Harmony drifts to 80.2 during the tick, still in the 80s tier.
    let report = outcome
        .notices
        .iter()
        .find_map(|notice| match notice {
            Notice::LevelCompleted(report) => Some(*report),
            _ => None,
        })
        .expect("level completion notice");
    assert_eq!(report.harmony_bonus, 40.0);
    assert_eq!(report.total_reward, 90.0);
    assert_eq!(outcome.snapshot.treasury, 90.0);
    assert_eq!((outcome.snapshot.level, outcome.snapshot.day), (2, 1));
    assert_eq!(outcome.snapshot.tasks.required, 5);
    assert_eq!(outcome.snapshot.groups.scholars.influence, 1.0);
}

#[test]
fn incomplete_tasks_reject_without_change() {
    let content = content();
    let mut state = ready_state(&content);
    state.tasks.completed = 2;

    let mut session = Session::builder()
        .content(content)
        .initial_state(state)
        .rng(FixedRng(0))
        .build()
        .unwrap();
    let before = session.state().clone();

    let error = session.advance_day().unwrap_err();

    assert_eq!(error, CommandError::TasksIncomplete { remaining: 2 });
    assert_eq!(error.to_string(), "Complete 2 more tasks to advance!");
    assert_eq!(session.state(), &before);
}

#[test]
fn trade_round_trip_loses_value() {
    let content = content();
    let mut state = ready_state(&content);
    state.resources.food = 20.0;
    state.resources.wealth = 0.0;

    let mut session = Session::builder()
        .content(content)
        .initial_state(state)
        .rng(FixedRng(0))
        .build()
        .unwrap();

    let outcome = session.trade(TradeKind::FoodForWealth).unwrap();
    assert_eq!(outcome.snapshot.resources.food, 0.0);
    assert_eq!(outcome.snapshot.resources.wealth, 10.0);

    assert_eq!(
        session.trade(TradeKind::WealthForFood),
        Err(CommandError::insufficient(
            Holding::Resource(ResourceKind::Wealth),
            15.0,
            10.0
        ))
    );
    assert_eq!(session.state().resources.food, 0.0);
    assert_eq!(session.state().resources.wealth, 10.0);
}

#[test]
fn event_resolution_is_exactly_once() {
    let mut session = Session::builder()
        .content(content())
        .rng(FixedRng(0))
        .build()
        .unwrap();

    let outcome = session.resolve_event_choice(0).unwrap();

    assert_eq!(
        outcome.message,
        "Food rationed. Farmers unhappy but disaster averted."
    );
    assert_eq!(outcome.snapshot.resources.food, 40.0);
    assert_eq!(outcome.snapshot.groups.farmers.satisfaction, 45.0);
    assert!(outcome.snapshot.active_event.is_none());
    assert!(!outcome.snapshot.paused);

    assert_eq!(
        session.resolve_event_choice(0),
        Err(CommandError::NoActiveEvent)
    );
}

#[test]
fn unavailable_choice_is_revalidated() {
    let mut session = Session::builder()
        .content(content())
        .rng(FixedRng(0))
        .build()
        .unwrap();

    // Drain resources.wealth below the irrigation cost of 15.
    while session.state().resources.wealth >= 15.0 {
        session.trade(TradeKind::WealthForFood).unwrap();
    }
    let before = session.state().clone();

    assert_eq!(
        session.resolve_event_choice(1),
        Err(CommandError::ChoiceUnavailable { index: 1 })
    );
    assert_eq!(
        session.resolve_event_choice(7),
        Err(CommandError::ChoiceOutOfRange { index: 7, len: 3 })
    );
    assert_eq!(session.state(), &before);
}

#[test]
fn pending_event_blocks_day_advance() {
    let mut session = Session::builder()
        .content(content())
        .rng(FixedRng(0))
        .build()
        .unwrap();

    assert_eq!(session.advance_day(), Err(CommandError::EventAlreadyActive));
}

#[test]
fn render_hooks_see_accepted_commands_only() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);

    let mut session = Session::builder()
        .content(content())
        .rng(FixedRng(0))
        .on_render(move |ctx| {
            sink.lock()
                .unwrap()
                .push((ctx.command, ctx.message().to_owned()));
        })
        .build()
        .unwrap();

    session.trade(TradeKind::MaterialsForTechnology).unwrap();
    assert!(session.invest(Sector::Education).is_err());
    session.distribute_food().unwrap();

    let seen = seen.lock().unwrap();
    assert_eq!(
        *seen,
        vec![
            (
                "start",
                "A new game begins. Lead your nation to harmony!".to_owned()
            ),
            ("trade", "Traded materials for technology".to_owned()),
            (
                "distribute_food",
                "Food distributed. Population satisfaction improved!".to_owned()
            ),
        ]
    );
    let event = session.state().active_event.as_ref().unwrap();
    assert_eq!(event.stage, EventStage::Displayed);
}

#[test]
fn treasury_funds_investment() {
    let content = ContentBundle {
        config: NationConfig::default().with_starting_treasury(30.0),
        ..content()
    };
    let mut session = Session::builder()
        .content(content)
        .rng(FixedRng(0))
        .build()
        .unwrap();

    let outcome = session.invest(Sector::Agriculture).unwrap();
    assert_eq!(outcome.snapshot.treasury, 15.0);
    assert_eq!(outcome.snapshot.metrics.get(MetricKind::Agriculture), 15.0);
    assert_eq!(outcome.snapshot.tasks.completed, 1);

    session.invest(Sector::Diplomacy).unwrap();
    assert_eq!(
        session.invest(Sector::Healthcare),
        Err(CommandError::insufficient(Holding::Treasury, 15.0, 0.0))
    );
}

#[test]
fn data_directory_overrides_content() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("config.toml"), "starting_treasury = 15.0\n").unwrap();
    std::fs::write(
        dir.path().join("events.ron"),
        r#"(
            templates: [
                (
                    title: "Harvest Festival",
                    description: "Villages celebrate a bountiful year.",
                    choices: [
                        (
                            label: "Join the celebration",
                            effects: [Satisfaction(Farmers, 5.0)],
                            outcome: "The farmers cheer.",
                        ),
                    ],
                ),
            ],
        )"#,
    )
    .unwrap();

    let content = ContentFactory::new(dir.path()).load_all().unwrap();
    let mut session = Session::builder()
        .content(content)
        .rng(FixedRng(0))
        .build()
        .unwrap();

    let event = session.snapshot().active_event.expect("opening event");
    assert_eq!(event.title, "Harvest Festival");

    let outcome = session.resolve_event_choice(0).unwrap();
    assert_eq!(outcome.message, "The farmers cheer.");
    assert_eq!(outcome.snapshot.treasury, 15.0);
    // Story falls back to the embedded table.
    assert_eq!(outcome.snapshot.tasks.labels[0], "Survey food resources");

    session.invest(Sector::Education).unwrap();
    assert_eq!(session.state().treasury, 0.0);
}

#[test]
fn opening_event_is_published_on_build() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);

    let session = Session::builder()
        .content(content())
        .rng(FixedRng(0))
        .on_render(move |ctx| {
            let event = ctx.snapshot().active_event.clone();
            sink.lock()
                .unwrap()
                .push((ctx.command, ctx.notices().to_vec(), event));
        })
        .build()
        .unwrap();

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    let (command, notices, event) = &seen[0];
    assert_eq!(*command, "start");
    assert_eq!(
        *notices,
        vec![Notice::EventQueued {
            title: "Drought Warning".into()
        }]
    );
    // Hooks see the event while it is still queued.
    assert_eq!(event.as_ref().unwrap().stage, EventStage::Queued);
    assert_eq!(
        session.state().active_event.as_ref().unwrap().stage,
        EventStage::Displayed
    );
}

#[test]
fn prepared_state_is_not_published_on_build() {
    let calls = Arc::new(Mutex::new(0));
    let sink = Arc::clone(&calls);
    let content = content();
    let state = ready_state(&content);

    Session::builder()
        .content(content)
        .initial_state(state)
        .rng(FixedRng(0))
        .on_render(move |_ctx| *sink.lock().unwrap() += 1)
        .build()
        .unwrap();

    assert_eq!(*calls.lock().unwrap(), 0);
}

#[test]
fn builder_requires_a_level_one_event() {
    let mut content = content();
    content.events = EventCatalog::new(
        content
            .events
            .templates
            .iter()
            .filter(|template| template.min_level >= 2)
            .cloned()
            .collect(),
    );
    assert!(!content.events.is_empty());

    assert!(matches!(
        Session::builder().content(content).rng(FixedRng(0)).build(),
        Err(RuntimeError::NoEligibleEvents { level: 1 })
    ));
}

#[test]
fn builder_requires_content_and_live_state() {
    assert!(matches!(
        Session::builder().build(),
        Err(RuntimeError::MissingContent)
    ));

    let mut state = NationState::default();
    state.end_game(GameOverCause::HarmonyCollapse);
    assert!(matches!(
        Session::builder()
            .content(content())
            .initial_state(state)
            .build(),
        Err(RuntimeError::TerminalInitialState)
    ));
}
