use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::info;
use white_days::{DayOffset, Language, DEFAULT_CALENDAR_TITLE};

/// Config file looked up in the working directory when `--config` is absent.
const DEFAULT_CONFIG_FILE: &str = "white-days.toml";

/// Defaults for the `upcoming` and conversion commands; flags override every field.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WhiteDaysConfig {
    /// IANA timezone; the host timezone when absent.
    #[serde(default)]
    pub timezone: Option<String>,
    #[serde(default = "default_language")]
    pub language: String,
    /// Calibration offset in days (-1, 0, 1).
    #[serde(default)]
    pub offset: i64,
    #[serde(default = "default_count")]
    pub count: usize,
    /// Calendar name for ICS export.
    #[serde(default = "default_title")]
    pub title: String,
}

impl Default for WhiteDaysConfig {
    fn default() -> Self {
        Self {
            timezone: None,
            language: default_language(),
            offset: 0,
            count: default_count(),
            title: default_title(),
        }
    }
}

fn default_language() -> String {
    "de".to_string()
}
fn default_count() -> usize {
    12
}
fn default_title() -> String {
    DEFAULT_CALENDAR_TITLE.to_string()
}

impl WhiteDaysConfig {
    /// Load the config from `path`, or from `./white-days.toml` if it exists.
    ///
    /// An explicit path must exist; the implicit one is optional.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => {
                let implicit = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !implicit.is_file() {
                    return Ok(Self::default());
                }
                implicit
            }
        };

        let text = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;
        let config: Self = toml::from_str(&text)
            .with_context(|| format!("failed to parse config: {}", path.display()))?;
        info!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    pub fn language(&self) -> Result<Language> {
        self.language
            .parse()
            .with_context(|| format!("invalid `language` in config: {}", self.language))
    }

    pub fn offset(&self) -> Result<DayOffset> {
        DayOffset::try_from(self.offset).context("invalid `offset` in config")
    }
}
