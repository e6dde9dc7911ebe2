//! Data-driven content for HarmonyNation.
//!
//! This crate ships the static content the simulation reads through
//! `nation-core`'s oracles and provides loaders for RON/TOML data files:
//! - Random event catalog (data-driven via RON)
//! - Story phases with their task lists and messages (data-driven via RON)
//! - Balance configuration (data-driven via TOML)
//!
//! The standard content is embedded at compile time; a data directory with
//! the same file names overrides it file by file.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    ConfigLoader, ContentBundle, ContentFactory, EventLoader, LoadResult, StoryLoader,
};
