//! Read-only views for presentation layers.
//!
//! A [`NationSnapshot`] is an owned copy of the state plus everything a
//! renderer would otherwise have to derive: task progress, the at-risk
//! status line, the storyline text, per-choice availability and the list of
//! commands that would currently be accepted.

use crate::action::Command;
use crate::env::GameEnv;
use crate::event::{ActiveEvent, EventStage};
use crate::state::{GameOverCause, Groups, Metrics, NationState, Resources};

/// Shown while harmony is below the critical threshold.
pub const STATUS_CRITICAL: &str = "WARNING: Harmony levels critical!";
/// Shown otherwise.
pub const STATUS_STABLE: &str = "Nation is stable";

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TaskView {
    pub completed: u32,
    pub required: u32,
    pub labels: Vec<String>,
    pub story_progress: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChoiceView {
    pub label: String,
    pub available: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EventView {
    pub title: String,
    pub description: String,
    pub stage: EventStage,
    pub choices: Vec<ChoiceView>,
}

impl EventView {
    fn capture(event: &ActiveEvent, state: &NationState) -> Self {
        Self {
            title: event.template.title.clone(),
            description: event.template.description.clone(),
            stage: event.stage,
            choices: event
                .template
                .choices
                .iter()
                .map(|choice| ChoiceView {
                    label: choice.label.clone(),
                    available: choice.is_available(state),
                })
                .collect(),
        }
    }
}

/// Owned, immutable picture of the nation after a command.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NationSnapshot {
    pub resources: Resources,
    pub metrics: Metrics,
    pub groups: Groups,
    pub treasury: f64,
    pub level: u32,
    pub day: u32,
    pub tasks: TaskView,
    pub storyline: Option<String>,
    pub at_risk: bool,
    pub status_line: String,
    pub active_event: Option<EventView>,
    pub paused: bool,
    pub game_over: bool,
    pub game_over_cause: Option<GameOverCause>,
    /// Commands that would pass validation right now.
    pub available_commands: Vec<Command>,
}

impl NationSnapshot {
    pub fn capture(state: &NationState, env: &GameEnv<'_>) -> Self {
        let config = env.config();
        let at_risk = state.at_risk(config);

        Self {
            resources: state.resources.clone(),
            metrics: state.metrics.clone(),
            groups: state.groups.clone(),
            treasury: state.treasury,
            level: state.level,
            day: state.day,
            tasks: TaskView {
                completed: state.tasks.completed,
                required: state.required_tasks(config),
                labels: state.tasks.labels.clone(),
                story_progress: state.tasks.story_progress,
            },
            storyline: env
                .story()
                .storyline(state.tasks.story_progress)
                .map(str::to_owned),
            at_risk,
            status_line: if at_risk { STATUS_CRITICAL } else { STATUS_STABLE }.to_owned(),
            active_event: state
                .active_event
                .as_ref()
                .map(|event| EventView::capture(event, state)),
            paused: state.paused,
            game_over: state.game_over,
            game_over_cause: state.game_over_cause,
            available_commands: available_commands(state, env),
        }
    }

    pub fn accepts(&self, command: &Command) -> bool {
        self.available_commands.contains(command)
    }
}

fn available_commands(state: &NationState, env: &GameEnv<'_>) -> Vec<Command> {
    if state.game_over {
        return Vec::new();
    }

    let choices = state
        .active_event
        .as_ref()
        .map_or(0, |event| event.template.choices.len());

    std::iter::once(Command::advance_day())
        .chain(Command::economy_commands())
        .chain((0..choices).map(Command::resolve_choice))
        .filter(|command| command.check(state, env).is_ok())
        .collect()
}
