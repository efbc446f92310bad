//! Settings shared by the binaries: where the command queue keeps its
//! database, where the CSV fixture lives, and the default log filter.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{PatternError, Result};

/// Environment variable naming an explicit settings file.
pub const CONFIG_ENV: &str = "DESIGN_PATTERNS_CONFIG";

/// Settings file picked up from the working directory when present.
pub const DEFAULT_CONFIG_FILE: &str = "design-patterns.toml";

#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    pub queue: QueueSettings,
    pub fixtures: FixtureSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct QueueSettings {
    pub database: PathBuf,
}

impl Default for QueueSettings {
    fn default() -> Self {
        Self {
            database: PathBuf::from("commands.sqlite"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FixtureSettings {
    pub cats_csv: PathBuf,
}

impl Default for FixtureSettings {
    fn default() -> Self {
        Self {
            cats_csv: default_cats_csv(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub filter: String,
    /// File the observer and mediator demos append their event entries to.
    pub event_log: PathBuf,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            filter: "design_patterns=info".to_string(),
            event_log: PathBuf::from("events.log"),
        }
    }
}

/// The fixture shipped with the crate, independent of the working directory.
pub fn default_cats_csv() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("data").join("cats.csv")
}

impl Settings {
    /// Resolution order: `$DESIGN_PATTERNS_CONFIG`, then
    /// `./design-patterns.toml`, then built-in defaults.
    ///
    /// A file named explicitly through the environment must exist.
    pub fn load() -> Result<Self> {
        if let Ok(path) = env::var(CONFIG_ENV) {
            return Self::from_file(path);
        }

        let local = Path::new(DEFAULT_CONFIG_FILE);
        if local.exists() {
            Self::from_file(local)
        } else {
            tracing::debug!("no configuration file, using defaults");
            Ok(Self::default())
        }
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(PatternError::MissingFile(path.to_path_buf()));
        }
        tracing::debug!(path = %path.display(), "loading configuration");
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}
