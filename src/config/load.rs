use crate::config::types::{Config, Settings};
use anyhow::{Context, Result, bail};
use std::fs;
use std::path::Path;

impl Config {
    /// Defaults when no file is given, otherwise the JSON settings at `path`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let settings = match path {
            Some(path) => Self::load_settings(path)?,
            None => Settings::default(),
        };
        Self::validate(&settings)?;
        Ok(Self::from_settings(settings))
    }

    fn load_settings(path: &Path) -> Result<Settings> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings from {}", path.display()))?;

        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse settings from {}", path.display()))
    }

    fn validate(settings: &Settings) -> Result<()> {
        if settings.clip_extension.trim().is_empty() {
            bail!("clip_extension must not be empty");
        }
        if settings.scene_marker.trim().is_empty() {
            bail!("scene_marker must not be empty");
        }
        if settings.poll_interval_ms == 0 {
            bail!("poll_interval_ms must be greater than zero");
        }
        Ok(())
    }
}
