//! Content factory for building oracles from data files.

use std::path::{Path, PathBuf};

use nation_core::{EventCatalog, GameEnv, NationConfig, StoryTable};

use crate::loaders::{ConfigLoader, EventLoader, LoadResult, StoryLoader};

/// Everything the simulation reads but never mutates.
#[derive(Clone, Debug, PartialEq)]
pub struct ContentBundle {
    pub config: NationConfig,
    pub events: EventCatalog,
    pub story: StoryTable,
}

impl ContentBundle {
    /// Borrows the bundle as the reducer's environment.
    pub fn env(&self) -> GameEnv<'_> {
        GameEnv::new(&self.config, &self.events, &self.story)
    }
}

/// Content factory that loads game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── events.ron
/// └── story.ron
/// ```
///
/// Each file is optional. A missing file falls back to the embedded copy;
/// a present but malformed file is an error.
pub struct ContentFactory {
    data_dir: Option<PathBuf>,
}

impl ContentFactory {
    /// Creates a factory that reads overrides from `data_dir`.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: Some(data_dir.into()),
        }
    }

    /// Creates a factory that only uses embedded content.
    pub fn embedded() -> Self {
        Self { data_dir: None }
    }

    /// Load balance configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<NationConfig> {
        match self.existing("config.toml") {
            Some(path) => ConfigLoader::load(&path),
            None => ConfigLoader::embedded(),
        }
    }

    /// Load the event catalog from `events.ron`.
    pub fn load_events(&self) -> LoadResult<EventCatalog> {
        match self.existing("events.ron") {
            Some(path) => EventLoader::load(&path),
            None => EventLoader::embedded(),
        }
    }

    /// Load story phases from `story.ron`.
    pub fn load_story(&self) -> LoadResult<StoryTable> {
        match self.existing("story.ron") {
            Some(path) => StoryLoader::load(&path),
            None => StoryLoader::embedded(),
        }
    }

    pub fn load_all(&self) -> LoadResult<ContentBundle> {
        Ok(ContentBundle {
            config: self.load_config()?,
            events: self.load_events()?,
            story: self.load_story()?,
        })
    }

    /// Returns the data directory path, if any.
    pub fn data_dir(&self) -> Option<&Path> {
        self.data_dir.as_deref()
    }

    fn existing(&self, file: &str) -> Option<PathBuf> {
        let path = self.data_dir.as_ref()?.join(file);
        path.is_file().then_some(path)
    }
}
