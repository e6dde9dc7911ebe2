//! Traits describing read-only content.
//!
//! Oracles expose the event catalog and the story tables. [`GameEnv`]
//! bundles them with the active [`NationConfig`] so the reducer and the
//! action pipeline can read everything they need without depending on where
//! the content came from.
mod rng;
mod story;

pub use rng::{FixedRng, PcgRng, RngOracle, ScriptedRng, mix_seed};
pub use story::{StoryPhase, StoryTable};

use crate::config::NationConfig;
use crate::event::EventTemplate;

/// Source of event templates.
pub trait EventOracle {
    /// Full template pool regardless of level.
    fn templates(&self) -> &[EventTemplate];

    /// Templates eligible at `level`. Grows monotonically with level.
    fn candidates(&self, level: u32) -> Vec<&EventTemplate> {
        self.templates()
            .iter()
            .filter(|template| template.is_eligible(level))
            .collect()
    }
}

/// Source of story phases.
pub trait StoryOracle {
    fn phase(&self, index: usize) -> Option<&StoryPhase>;

    fn phase_count(&self) -> usize;

    /// Task labels shown at game start.
    fn opening_tasks(&self) -> Vec<String> {
        self.phase(0)
            .map(|phase| phase.tasks.clone())
            .unwrap_or_default()
    }

    /// Storyline summary for `progress`, clamped to the last phase.
    fn storyline(&self, progress: u32) -> Option<&str> {
        let last = self.phase_count().checked_sub(1)?;
        let index = (progress as usize).min(last);
        self.phase(index).map(|phase| phase.storyline.as_str())
    }
}

/// Aggregates the read-only inputs required by the reducer.
#[derive(Clone, Copy)]
pub struct GameEnv<'a> {
    config: &'a NationConfig,
    events: &'a dyn EventOracle,
    story: &'a dyn StoryOracle,
}

impl<'a> GameEnv<'a> {
    pub fn new(
        config: &'a NationConfig,
        events: &'a dyn EventOracle,
        story: &'a dyn StoryOracle,
    ) -> Self {
        Self {
            config,
            events,
            story,
        }
    }

    pub fn config(&self) -> &'a NationConfig {
        self.config
    }

    pub fn events(&self) -> &'a dyn EventOracle {
        self.events
    }

    pub fn story(&self) -> &'a dyn StoryOracle {
        self.story
    }
}

impl core::fmt::Debug for GameEnv<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("GameEnv")
            .field("config", self.config)
            .field("templates", &self.events.templates().len())
            .field("story_phases", &self.story.phase_count())
            .finish()
    }
}
