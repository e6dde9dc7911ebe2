//! Story table loader.

use std::path::Path;

use nation_core::StoryTable;

use crate::loaders::{LoadResult, read_file};

const EMBEDDED_STORY: &str = include_str!("../../data/story.ron");

/// Loader for [`StoryTable`] from RON files.
pub struct StoryLoader;

impl StoryLoader {
    /// Load story phases from a RON file.
    pub fn load(path: &Path) -> LoadResult<StoryTable> {
        let content = read_file(path)?;
        Self::parse(&content).map_err(|e| anyhow::anyhow!("{} ({})", e, path.display()))
    }

    pub fn parse(content: &str) -> LoadResult<StoryTable> {
        let story: StoryTable = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse story RON: {}", e))?;

        if story.phases.is_empty() {
            anyhow::bail!("Story table has no phases");
        }
        Ok(story)
    }

    /// The story shipped with the game.
    pub fn embedded() -> LoadResult<StoryTable> {
        Self::parse(EMBEDDED_STORY)
    }
}
