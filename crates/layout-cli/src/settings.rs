//! Tool settings - persisted user preferences.
//!
//! Settings are read from a TOML file in the user's config directory (or a
//! path given with `--config`). A missing or unreadable file means defaults.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use layout_model::TemplateIgnoreRule;
use serde::{Deserialize, Serialize};

/// Tool settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Statistics settings.
    pub statistics: StatisticsSettings,

    /// Preset catalog locations.
    pub presets: PresetSettings,

    /// Load behavior.
    pub load: LoadSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatisticsSettings {
    /// Count road tiles toward the covered area.
    pub include_roads: bool,

    /// Templates left out of statistics (case-insensitive).
    pub ignored_templates: Vec<String>,
}

impl Default for StatisticsSettings {
    fn default() -> Self {
        Self {
            include_roads: false,
            ignored_templates: TemplateIgnoreRule::default().templates().to_vec(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PresetSettings {
    /// Path to `presets.json`.
    pub buildings: Option<PathBuf>,

    /// Path to `colors.json`.
    pub colors: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadSettings {
    /// Load files with a mismatched version without `--force`.
    pub always_force: bool,
}

impl Settings {
    /// Load settings from `path`, or from the default location.
    pub fn load(path: Option<&Path>) -> Self {
        match path {
            Some(path) => Self::load_from(path),
            None => Self::load_from(&Self::config_path()),
        }
    }

    /// Load settings from a specific path.
    pub fn load_from(path: &Path) -> Self {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(_) => {
                tracing::debug!("No settings at {}; using defaults", path.display());
                return Self::default();
            }
        };

        toml::from_str(&content).unwrap_or_else(|error| {
            tracing::warn!(%error, "Ignoring invalid settings file {}", path.display());
            Self::default()
        })
    }

    /// Save settings to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create config directory {}", parent.display()))?;
        }

        let content = toml::to_string_pretty(self).context("serialize settings")?;
        std::fs::write(path, content)
            .with_context(|| format!("write settings to {}", path.display()))
    }

    /// Get the default config file path.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("io.github", "AnnoDesigner", "layout-tool")
            .map(|dirs| dirs.config_dir().join("settings.toml"))
            .unwrap_or_else(|| PathBuf::from("settings.toml"))
    }

    /// Ignore rule built from `statistics.ignored_templates`.
    pub fn ignore_rule(&self) -> TemplateIgnoreRule {
        TemplateIgnoreRule::new(self.statistics.ignored_templates.iter().cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use layout_model::{IgnoreRule, PlacedObject};

    #[test]
    fn test_defaults_ignore_blockers() {
        let settings = Settings::default();
        assert!(!settings.statistics.include_roads);
        assert!(
            settings
                .ignore_rule()
                .is_ignored(&PlacedObject::new("x").with_template("Blocker"))
        );
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let settings: Settings = toml::from_str("[load]\nalways_force = true\n").unwrap();
        assert!(settings.load.always_force);
        assert_eq!(settings.statistics, StatisticsSettings::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config").join("settings.toml");

        let mut settings = Settings::default();
        settings.statistics.include_roads = true;
        settings.presets.buildings = Some(PathBuf::from("/data/presets.json"));
        settings.save_to(&path).unwrap();

        assert_eq!(Settings::load(Some(&path)), settings);
    }

    #[test]
    fn test_invalid_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "statistics = 12").unwrap();

        assert_eq!(Settings::load_from(&path), Settings::default());
    }
}
