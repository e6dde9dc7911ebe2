//! Balance configuration loader.

use std::path::Path;

use nation_core::NationConfig;

use crate::loaders::{LoadResult, read_file};

const EMBEDDED_CONFIG: &str = include_str!("../../data/config.toml");

/// Loader for [`NationConfig`] from TOML files.
///
/// Keys missing from the file keep their defaults.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    pub fn load(path: &Path) -> LoadResult<NationConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("{} ({})", e, path.display()))
    }

    pub fn parse(content: &str) -> LoadResult<NationConfig> {
        let config: NationConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        validate(&config)?;
        Ok(config)
    }

    /// The balance shipped with the game.
    pub fn embedded() -> LoadResult<NationConfig> {
        Self::parse(EMBEDDED_CONFIG)
    }
}

fn validate(config: &NationConfig) -> LoadResult<()> {
    if !(0.0..=1.0).contains(&config.event_chance) {
        anyhow::bail!("event_chance must lie in [0, 1], got {}", config.event_chance);
    }
    if !(0.0..=1.0).contains(&config.harmony_smoothing) {
        anyhow::bail!(
            "harmony_smoothing must lie in [0, 1], got {}",
            config.harmony_smoothing
        );
    }
    if config.days_per_level == 0 {
        anyhow::bail!("days_per_level must be positive");
    }
    if config.max_resources <= 0.0 {
        anyhow::bail!("max_resources must be positive, got {}", config.max_resources);
    }
    Ok(())
}
