//! Content loaders for reading game data from files.
//!
//! Every loader parses from a string (`parse`), from a path (`load`), or from
//! the copy embedded in this crate (`embedded`).

pub mod config;
pub mod events;
pub mod factory;
pub mod story;

pub use config::ConfigLoader;
pub use events::EventLoader;
pub use factory::{ContentBundle, ContentFactory};
pub use story::StoryLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
