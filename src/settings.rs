use crate::models::ThemePreference;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const SETTINGS_FILE: &str = "settings.yaml";

/// User settings read from `~/.extensions-tui/settings.yaml`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Last chosen theme preference
    pub theme: ThemePreference,
    /// Cross-fade when the filter changes
    pub transitions: bool,
    pub transition_ms: u64,
    /// Dataset file to load instead of the bundled one
    pub dataset: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        use crate::constants::DEFAULT_TRANSITION_MS;
        Settings {
            theme: ThemePreference::System,
            transitions: true,
            transition_ms: DEFAULT_TRANSITION_MS,
            dataset: None,
        }
    }
}

/// Reads and writes the settings file
#[derive(Clone, Debug)]
pub struct SettingsStore {
    config_dir: PathBuf,
}

impl SettingsStore {
    pub fn new() -> Self {
        let config_dir = dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".extensions-tui");
        Self::at(config_dir)
    }

    pub fn at(config_dir: impl Into<PathBuf>) -> Self {
        SettingsStore {
            config_dir: config_dir.into(),
        }
    }

    pub fn path(&self) -> PathBuf {
        self.config_dir.join(SETTINGS_FILE)
    }

    /// Load settings, falling back to defaults on any problem
    pub fn load(&self) -> Settings {
        let path = self.path();
        if !path.exists() {
            return Settings::default();
        }

        match Self::read(&path) {
            Ok(settings) => settings,
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "Ignoring unreadable settings");
                Settings::default()
            }
        }
    }

    fn read(path: &Path) -> Result<Settings> {
        let content = fs::read_to_string(path)?;
        let settings = serde_yaml::from_str(&content)?;
        Ok(settings)
    }

    /// Ensure config directory exists
    fn ensure_dir(&self) -> Result<()> {
        if !self.config_dir.exists() {
            fs::create_dir_all(&self.config_dir)
                .with_context(|| format!("failed to create {}", self.config_dir.display()))?;
        }
        Ok(())
    }

    pub fn save(&self, settings: &Settings) -> Result<()> {
        self.ensure_dir()?;
        let content = serde_yaml::to_string(settings)?;
        fs::write(self.path(), content)?;
        Ok(())
    }
}

impl Default for SettingsStore {
    fn default() -> Self {
        Self::new()
    }
}
