//! Client configuration read from the process environment.
use std::env;
use std::path::PathBuf;

/// Settings for one terminal session.
#[derive(Clone, Debug, Default)]
pub struct ClientConfig {
    /// Seed for the session's random source. Drawn at random when unset.
    pub seed: Option<u64>,
    /// Content override: a directory holding `config.toml`, `events.ron` and
    /// `story.ron`, or a single TOML file replacing the balance config.
    pub content_path: Option<PathBuf>,
    /// Names the log directory. Defaults to a timestamp.
    pub session_id: Option<String>,
    /// Print snapshots as JSON instead of the text panel.
    pub json: bool,
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `NATION_SEED` - RNG seed (default: random)
    /// - `NATION_CONFIG` - Content directory or config TOML (default: embedded content)
    /// - `NATION_SESSION_ID` - Session identifier for log files (default: auto-generated)
    /// - `NATION_JSON` - Emit JSON snapshots (default: false)
    pub fn from_env() -> Self {
        let mut config = Self {
            seed: read_env::<u64>("NATION_SEED"),
            content_path: env::var_os("NATION_CONFIG").map(PathBuf::from),
            session_id: env::var("NATION_SESSION_ID").ok(),
            json: false,
        };

        if let Some(json) = read_env::<bool>("NATION_JSON") {
            config.json = json;
        } else if env::var("NATION_JSON").is_ok() {
            // A bare `NATION_JSON=` or `NATION_JSON=1` also enables it.
            config.json = true;
        }

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
