/// Daily task bookkeeping and story position.
///
/// The number of tasks required per day is derived from the level via
/// [`NationConfig::required_tasks`](crate::config::NationConfig::required_tasks);
/// the per-phase label table is static content behind
/// [`StoryOracle`](crate::env::StoryOracle).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DailyTasks {
    /// Tasks completed since the last day advance.
    pub completed: u32,
    /// Story phase index. Keeps counting past the end of the story table.
    pub story_progress: u32,
    /// Labels of the tasks currently shown to the player.
    pub labels: Vec<String>,
}

impl DailyTasks {
    pub fn new(labels: Vec<String>) -> Self {
        Self {
            completed: 0,
            story_progress: 0,
            labels,
        }
    }

    pub fn record_completion(&mut self) {
        self.completed += 1;
    }

    /// Tasks still missing before `required` is met.
    pub fn remaining(&self, required: u32) -> u32 {
        required.saturating_sub(self.completed)
    }
}
