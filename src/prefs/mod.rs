//! Local preference flags
//!
//! Stores the cookie-consent flag and the preferred display language in a
//! small TOML file under the user's data directory.

use crate::core::{Error, Result};
use crate::i18n::Language;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Value stored for an accepted consent
pub const CONSENT_ACCEPTED: &str = "accepted";

/// Persisted preference values
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cookie_consent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consented_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<Language>,
}

/// Preference file manager
///
/// A store without a path keeps values in memory only and fails every save.
pub struct PreferenceStore {
    path: Option<PathBuf>,
    prefs: Preferences,
}

impl PreferenceStore {
    /// Open the store at the default location
    pub fn open() -> Result<Self> {
        Self::open_at(&Self::prefs_path()?)
    }

    /// Open the store at an explicit path; a missing file means empty preferences
    pub fn open_at(path: &Path) -> Result<Self> {
        let prefs = if path.exists() {
            let content = fs::read_to_string(path)?;
            toml::from_str(&content)
                .map_err(|e| Error::Preferences(format!("Failed to parse {}: {}", path.display(), e)))?
        } else {
            Preferences::default()
        };

        Ok(Self {
            path: Some(path.to_path_buf()),
            prefs,
        })
    }

    /// Store that is never written to disk
    pub fn in_memory() -> Self {
        Self {
            path: None,
            prefs: Preferences::default(),
        }
    }

    /// Get the preference file path
    pub fn prefs_path() -> Result<PathBuf> {
        let data_dir = dirs::data_dir()
            .ok_or_else(|| Error::Preferences("Could not determine data directory".to_string()))?;

        Ok(data_dir.join("qatmeer-landing").join("preferences.toml"))
    }

    pub fn preferences(&self) -> &Preferences {
        &self.prefs
    }

    pub fn has_consent(&self) -> bool {
        self.prefs.cookie_consent.as_deref() == Some(CONSENT_ACCEPTED)
    }

    /// Record consent and persist it
    ///
    /// The flag only changes once it has been written; a store without a
    /// backing file refuses.
    pub fn accept_consent(&mut self) -> Result<()> {
        let mut updated = self.prefs.clone();
        updated.cookie_consent = Some(CONSENT_ACCEPTED.to_string());
        updated.consented_at = Some(Utc::now());

        self.write(&updated)?;
        self.prefs = updated;
        log::info!("Cookie consent accepted");
        Ok(())
    }

    pub fn language(&self) -> Option<Language> {
        self.prefs.language
    }

    /// Remember the preferred language and persist it
    ///
    /// The language is kept for this session even when saving fails.
    pub fn set_language(&mut self, language: Language) -> Result<()> {
        self.prefs.language = Some(language);
        self.save()
    }

    /// Write the preferences to disk
    pub fn save(&self) -> Result<()> {
        self.write(&self.prefs)
    }

    fn write(&self, prefs: &Preferences) -> Result<()> {
        let path = self
            .path
            .as_ref()
            .ok_or_else(|| Error::Preferences("Preferences are not backed by a file".to_string()))?;

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let content = toml::to_string_pretty(prefs)
            .map_err(|e| Error::Serialization(e.to_string()))?;
        fs::write(path, content)?;
        Ok(())
    }
}
