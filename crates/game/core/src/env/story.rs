//! Story phase tables.

use crate::env::StoryOracle;

/// One story phase: the tasks shown while it is current, the message shown
/// when a day advance enters it, and its storyline summary.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StoryPhase {
    pub tasks: Vec<String>,
    pub message: String,
    pub storyline: String,
}

/// Ordered story phases.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StoryTable {
    pub phases: Vec<StoryPhase>,
}

impl StoryTable {
    pub fn new(phases: Vec<StoryPhase>) -> Self {
        Self { phases }
    }
}

impl StoryOracle for StoryTable {
    fn phase(&self, index: usize) -> Option<&StoryPhase> {
        self.phases.get(index)
    }

    fn phase_count(&self) -> usize {
        self.phases.len()
    }
}
