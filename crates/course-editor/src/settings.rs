//! Editor settings - persisted user preferences.
//!
//! Settings are serialized to TOML. Missing or unreadable files fall back to
//! defaults so a broken config never blocks editing.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Editor settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    /// Notification settings.
    pub notifications: NotificationSettings,

    /// Auto-save policy.
    pub autosave: AutoSaveConfig,
}

/// Error while writing settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to create config directory {path}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to serialize settings")]
    Serialize(#[from] toml::ser::Error),
    #[error("Failed to write settings to {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl EditorSettings {
    /// Load settings from the default path.
    pub fn load() -> Self {
        Self::config_path()
            .map(|path| Self::load_from(&path))
            .unwrap_or_default()
    }

    /// Load settings from a specific path.
    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).unwrap_or_else(|err| {
                tracing::warn!(path = %path.display(), %err, "ignoring malformed settings");
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    /// Save settings to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| SettingsError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|source| SettingsError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Default settings file location in the user's config directory.
    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "CourseEditor", "course-editor")
            .map(|dirs| dirs.config_dir().join("settings.toml"))
    }
}

// =============================================================================
// NOTIFICATIONS
// =============================================================================

/// Controls the confirmations shown after staged changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationSettings {
    /// Whether notifications are produced at all.
    pub enabled: bool,

    /// Appended to every staged-change confirmation.
    pub staged_reminder: String,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            staged_reminder: "you need to save the course to apply the changes".to_string(),
        }
    }
}

// =============================================================================
// AUTO-SAVE
// =============================================================================

/// When staged changes are flushed without an explicit save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutoSaveConfig {
    pub enabled: bool,

    /// Save once no change has been staged for this long.
    pub idle_ms: u64,

    /// Save once the oldest unsaved change is this old, even while edits
    /// keep arriving.
    pub max_unsaved_ms: u64,
}

impl Default for AutoSaveConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            idle_ms: 2000,
            max_unsaved_ms: 30_000,
        }
    }
}

impl AutoSaveConfig {
    /// Enabled, with default timings.
    pub fn enabled() -> Self {
        Self {
            enabled: true,
            ..Default::default()
        }
    }

    pub fn idle(&self) -> Duration {
        Duration::from_millis(self.idle_ms)
    }

    pub fn max_unsaved(&self) -> Duration {
        Duration::from_millis(self.max_unsaved_ms)
    }

    /// Check if a save is due, given the time since the latest staged change
    /// and since the oldest unsaved one.
    pub fn is_due(&self, since_last: Duration, since_first: Duration) -> bool {
        self.enabled && (since_last >= self.idle() || since_first >= self.max_unsaved())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_autosave_disabled_by_default() {
        let config = AutoSaveConfig::default();
        assert!(!config.enabled);
        assert!(!config.is_due(Duration::from_secs(10), Duration::from_secs(60)));
    }

    #[test]
    fn test_idle_and_max_unsaved() {
        let config = AutoSaveConfig::enabled();
        let ms = Duration::from_millis;

        assert!(!config.is_due(ms(1000), ms(1000)));
        assert!(config.is_due(ms(2500), ms(2500)));

        // Steady edits never go idle; the oldest change forces the save.
        assert!(!config.is_due(ms(500), ms(25_000)));
        assert!(config.is_due(ms(500), ms(35_000)));
    }

    #[test]
    fn test_settings_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.toml");

        let mut settings = EditorSettings::default();
        settings.notifications.staged_reminder = "remember to publish".to_string();
        settings.autosave = AutoSaveConfig::enabled();
        settings.save_to(&path).unwrap();

        assert_eq!(EditorSettings::load_from(&path), settings);
    }

    #[test]
    fn test_partial_and_missing_settings() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(
            EditorSettings::load_from(&dir.path().join("missing.toml")),
            EditorSettings::default()
        );

        let path = dir.path().join("partial.toml");
        std::fs::write(&path, "[notifications]\nenabled = false\n").unwrap();
        let settings = EditorSettings::load_from(&path);
        assert!(!settings.notifications.enabled);
        assert_eq!(
            settings.notifications.staged_reminder,
            NotificationSettings::default().staged_reminder
        );
        assert_eq!(settings.autosave, AutoSaveConfig::default());
    }
}
