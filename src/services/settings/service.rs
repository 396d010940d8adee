use crate::models::settings::Preferences;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

const PREFERENCES_FILE: &str = "preferences.toml";

pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Service reading from the platform config directory, falling back to
    /// the working directory when no home directory can be determined.
    pub fn with_default_path() -> Self {
        Self::new(Self::default_path())
    }

    pub fn default_path() -> PathBuf {
        if let Some(proj_dirs) = ProjectDirs::from("com", "PollCalendar", "PollCalendar") {
            proj_dirs.config_dir().join(PREFERENCES_FILE)
        } else {
            PathBuf::from(PREFERENCES_FILE)
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load preferences. A missing file yields the defaults.
    pub fn get(&self) -> Result<Preferences> {
        Self::load_from_path(&self.path)
    }

    /// Load preferences, logging and falling back to defaults on any error.
    pub fn load_or_default(&self) -> Preferences {
        match self.get() {
            Ok(prefs) => prefs,
            Err(e) => {
                log::warn!("Failed to load preferences: {:#}, using defaults", e);
                Preferences::default()
            }
        }
    }

    pub fn load_from_path(path: &Path) -> Result<Preferences> {
        if !path.exists() {
            log::debug!("No preferences file at {:?}, using defaults", path);
            return Ok(Preferences::default());
        }

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read preferences from {:?}", path))?;
        let prefs = Self::parse(&contents)
            .with_context(|| format!("Invalid preferences file {:?}", path))?;

        log::info!("Loaded preferences from {:?}", path);
        Ok(prefs)
    }

    /// Parse preferences from TOML text. Missing keys take their defaults;
    /// unknown keys are an error.
    pub fn parse(contents: &str) -> Result<Preferences> {
        toml::from_str(contents).context("Failed to parse preferences")
    }
}
