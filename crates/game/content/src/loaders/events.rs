//! Event catalog loader.

use std::path::Path;

use nation_core::EventCatalog;

use crate::loaders::{LoadResult, read_file};

const EMBEDDED_EVENTS: &str = include_str!("../../data/events.ron");

/// Loader for [`EventCatalog`] from RON files.
pub struct EventLoader;

impl EventLoader {
    /// Load an event catalog from a RON file.
    pub fn load(path: &Path) -> LoadResult<EventCatalog> {
        let content = read_file(path)?;
        Self::parse(&content).map_err(|e| anyhow::anyhow!("{} ({})", e, path.display()))
    }

    /// Parses and checks a catalog.
    ///
    /// Every template needs at least one choice, and at least one template
    /// must be eligible at level 1.
    pub fn parse(content: &str) -> LoadResult<EventCatalog> {
        let catalog: EventCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse event catalog RON: {}", e))?;

        for template in &catalog.templates {
            if template.choices.is_empty() {
                anyhow::bail!("Event '{}' has no choices", template.title);
            }
            if template.min_level == 0 {
                anyhow::bail!("Event '{}' has min_level 0", template.title);
            }
        }
        if !catalog.templates.iter().any(|t| t.is_eligible(1)) {
            anyhow::bail!("Event catalog has no template available at level 1");
        }

        Ok(catalog)
    }

    /// The catalog shipped with the game.
    pub fn embedded() -> LoadResult<EventCatalog> {
        Self::parse(EMBEDDED_EVENTS)
    }
}
