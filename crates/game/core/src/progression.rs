//! Day, story and level progression plus the terminal transitions.
//!
//! ```text
//! IN_PROGRESS ──tasks met──▶ DAY_ADVANCE ──day > days_per_level──▶ LEVEL_COMPLETE
//!      ▲                          │                                     │
//!      └──────────────────────────┴───────── level + 1, day = 1 ◀───────┘
//!
//! IN_PROGRESS ──famine or harmony ≤ 0──▶ GAME_OVER (terminal until reset)
//! ```

use crate::config::NationConfig;
use crate::env::{GameEnv, RngOracle, StoryOracle};
use crate::event::queue_random_event;
use crate::state::{GameOverCause, GroupKind, NationState};

/// Reward breakdown for a completed level.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LevelReport {
    pub completed_level: u32,
    pub base_reward: f64,
    pub harmony_bonus: f64,
    pub total_reward: f64,
}

impl LevelReport {
    pub fn summary(&self) -> String {
        format!(
            "Level {} complete! Reward: {} wealth ({} base + {} harmony bonus). Level {} begins.",
            self.completed_level,
            self.total_reward,
            self.base_reward,
            self.harmony_bonus,
            self.completed_level + 1,
        )
    }
}

/// How and when the game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameOverReport {
    pub cause: GameOverCause,
    pub level: u32,
    pub day: u32,
}

impl GameOverReport {
    pub fn summary(&self) -> String {
        let headline = match self.cause {
            GameOverCause::Famine => "Your nation has collapsed due to severe food shortage.",
            GameOverCause::HarmonyCollapse => {
                "Your nation has collapsed into chaos. Harmony levels reached critical lows."
            }
        };
        format!(
            "{headline} You reached Level {} and survived for {} days.",
            self.level, self.day
        )
    }
}

/// Story phase entered by a day advance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoryStep {
    pub phase: u32,
    pub message: String,
}

/// Fresh game: initial state with the opening tasks, then the first random
/// event. Returns the state and the queued title, if any.
pub fn start_game(env: &GameEnv<'_>, rng: &mut dyn RngOracle) -> (NationState, Option<String>) {
    let mut state = NationState::new(env.config(), env.story().opening_tasks());
    // A fresh state has no event in flight, so queueing cannot be rejected.
    let queued = queue_random_event(&mut state, env, rng).unwrap_or(None);
    (state, queued)
}

/// Moves the story index forward by one phase.
///
/// Inside the story table the phase's tasks replace the current labels and
/// its message is returned. Past the end the index keeps counting and the
/// last labels stay.
pub fn advance_story(state: &mut NationState, story: &dyn StoryOracle) -> Option<StoryStep> {
    state.tasks.story_progress += 1;
    let phase_index = state.tasks.story_progress;
    let phase = story.phase(phase_index as usize)?;

    state.tasks.labels = phase.tasks.clone();
    Some(StoryStep {
        phase: phase_index,
        message: phase.message.clone(),
    })
}

/// Ends the game if food ran out or harmony reached zero, famine first.
pub fn check_termination(state: &mut NationState, famine: bool) -> Option<GameOverReport> {
    let cause = if famine {
        GameOverCause::Famine
    } else if state.metrics.harmony <= 0.0 {
        GameOverCause::HarmonyCollapse
    } else {
        return None;
    };

    state.end_game(cause);
    Some(GameOverReport {
        cause,
        level: state.level,
        day: state.day,
    })
}

/// Credits the level reward to the treasury, moves to the next level at day
/// 1 and applies that level's one-time difficulty step.
pub fn complete_level(state: &mut NationState, config: &NationConfig) -> LevelReport {
    let completed_level = state.level;
    state.level += 1;

    let base_reward = config.level_base_reward;
    let harmony_bonus = (state.metrics.harmony / 10.0).floor() * config.harmony_bonus_per_tier;
    let total_reward = base_reward + harmony_bonus;

    state.treasury += total_reward;
    state.day = 1;

    apply_level_entry(state);

    LevelReport {
        completed_level,
        base_reward,
        harmony_bonus,
        total_reward,
    }
}

/// Difficulty step keyed by the newly reached level.
fn apply_level_entry(state: &mut NationState) {
    match state.level {
        2 => state.groups.get_mut(GroupKind::Scholars).influence += 0.5,
        3 => state.groups.get_mut(GroupKind::Merchants).influence += 0.5,
        4 => state.groups.adjust_all(-10.0),
        _ => {}
    }
}
