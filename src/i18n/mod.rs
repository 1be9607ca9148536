//! Internationalization module
//!
//! Provides display labels in English (en) and French (fr).
//! The language is owned by whoever creates the `I18n`; "auto" resolves from
//! the system locale.

mod en;
mod fr;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Supported display languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Fr,
}

impl Language {
    /// Resolve a language code, falling back to English for anything unsupported
    pub fn resolve(code: &str) -> Self {
        match code {
            "auto" => detect_system_language(),
            "fr" => Language::Fr,
            _ => Language::En,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Fr => "fr",
        }
    }

    /// The other language of the pair
    pub fn toggled(&self) -> Self {
        match self {
            Language::En => Language::Fr,
            Language::Fr => Language::En,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Internationalization manager
pub struct I18n {
    current_lang: Language,
    translations: HashMap<String, String>,
}

impl I18n {
    /// Create a new I18n instance with the specified language code
    pub fn new(lang: &str) -> Self {
        Self::with_language(Language::resolve(lang))
    }

    pub fn with_language(lang: Language) -> Self {
        let mut i18n = Self {
            current_lang: lang,
            translations: HashMap::new(),
        };
        i18n.set_language(lang);
        i18n
    }

    /// Set the current language
    pub fn set_language(&mut self, lang: Language) {
        self.current_lang = lang;
        self.translations = match lang {
            Language::Fr => fr::get_translations(),
            Language::En => en::get_translations(),
        };

        log::info!("Language set to: {}", self.current_lang);
    }

    /// Switch between English and French, returning the new language
    pub fn toggle(&mut self) -> Language {
        self.set_language(self.current_lang.toggled());
        self.current_lang
    }

    /// Get a translated string by key
    pub fn get(&self, key: &str) -> String {
        self.translations
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }

    /// Display name for a tier, falling back to its identifier
    pub fn tier_name(&self, id: &str) -> String {
        self.name_or_id("tier", id)
    }

    /// Display name for an upgrade, falling back to its identifier
    pub fn upgrade_name(&self, id: &str) -> String {
        self.name_or_id("upgrade", id)
    }

    /// Display name for an add-on, falling back to its identifier
    pub fn addon_name(&self, id: &str) -> String {
        self.name_or_id("addon", id)
    }

    fn name_or_id(&self, kind: &str, id: &str) -> String {
        self.translations
            .get(&format!("{}.{}", kind, id))
            .cloned()
            .unwrap_or_else(|| id.to_string())
    }
}

impl Default for I18n {
    fn default() -> Self {
        Self::new("auto")
    }
}

/// Detect system language
fn detect_system_language() -> Language {
    // Try to detect from environment variables
    let lang_env = std::env::var("LANG")
        .or_else(|_| std::env::var("LC_ALL"))
        .or_else(|_| std::env::var("LC_MESSAGES"))
        .unwrap_or_else(|_| "en".to_string());

    // Extract language code (e.g., "fr_FR.UTF-8" -> "fr")
    let lang_code = lang_env
        .split('_')
        .next()
        .unwrap_or("en")
        .split('.')
        .next()
        .unwrap_or("en");

    match lang_code {
        "fr" => Language::Fr,
        _ => Language::En,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_key_returns_key() {
        let i18n = I18n::new("en");
        assert_eq!(i18n.get("does.not.exist"), "does.not.exist");
    }

    #[test]
    fn test_names_fall_back_to_identifier() {
        let i18n = I18n::new("fr");
        assert_eq!(i18n.addon_name("laser-peeler"), "laser-peeler");
        assert_eq!(i18n.upgrade_name("delta-sorting"), "Tri Delta");
    }

    #[test]
    fn test_toggle_switches_labels() {
        let mut i18n = I18n::new("en");
        let english = i18n.get("estimate.title");

        assert_eq!(i18n.toggle(), Language::Fr);
        assert_ne!(i18n.get("estimate.title"), english);
        assert_eq!(i18n.toggle(), Language::En);
        assert_eq!(i18n.get("estimate.title"), english);
    }

    #[test]
    fn test_unsupported_code_falls_back_to_english() {
        assert_eq!(Language::resolve("de"), Language::En);
        assert_eq!(Language::resolve("fr"), Language::Fr);
    }

    #[test]
    fn test_both_languages_cover_the_same_keys() {
        let en = en::get_translations();
        let fr = fr::get_translations();

        let mut missing: Vec<_> = en.keys().filter(|k| !fr.contains_key(*k)).collect();
        missing.sort();
        assert!(missing.is_empty(), "missing French keys: {:?}", missing);
        assert_eq!(en.len(), fr.len());
    }
}
