//! The enabled-languages setting.
//!
//! Which catalog languages are offered to editors is an administrative
//! choice persisted separately from any document, as a small TOML file.
//! Identifiers that do not appear in the catalog are dropped during
//! sanitization rather than rejected.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::editor::language_catalog::is_known_language;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to read settings file at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse settings file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Persisted settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Language identifiers offered in the edit form's selector.
    #[serde(default)]
    pub enabled_languages: Vec<String>,
}

impl Settings {
    /// Load settings from a TOML file. A missing file is `Ok(None)`, not an
    /// error; the loaded list is sanitized against the catalog.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Option<Self>, SettingsError> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let mut settings: Settings =
            toml::from_str(&content).map_err(|source| SettingsError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        settings.sanitize();

        Ok(Some(settings))
    }

    /// Save settings as TOML, creating parent directories as needed.
    pub fn save_to_path<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Drop enabled identifiers the catalog does not know.
    pub fn sanitize(&mut self) {
        self.enabled_languages.retain(|id| is_known_language(id));
    }
}
