//! Configuration management

use crate::core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub pricing: PricingConfig,
}

impl Config {
    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("qatmeer-landing").join("config.toml"))
    }

    /// Load configuration from the default location, writing the defaults there on first run
    pub fn load() -> Result<Self> {
        Self::load_or_create(&Self::config_path()?)
    }

    /// Load configuration from an explicit file, which must exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::Config(format!("Config file not found: {}", path.display())));
        }

        let content = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        log::info!("Loaded config from {}", path.display());

        Ok(config)
    }

    fn load_or_create(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::info!("No config at {}, writing defaults", path.display());
            let config = Self::default();
            config.save_to(path)?;
            return Ok(config);
        }

        Self::load_from(path)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)
            .map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))?;

        for warning in config.pricing.warnings() {
            log::warn!("{}", warning);
        }

        Ok(config)
    }

    /// Save configuration to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to a file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Serialization(e.to_string()))?;
        fs::write(path, content)?;
        Ok(())
    }
}

/// General application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Language: "auto", "en", "fr"
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_language() -> String { "auto".to_string() }

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
        }
    }
}

/// Pricing configuration: catalogs, initial tier and display format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Tier selected when the calculator starts
    #[serde(default = "default_tier")]
    pub default_tier: String,
    /// Replace upgrade and add-ons with the tier's recommendation on every tier change
    #[serde(default = "default_true")]
    pub auto_apply_recommendations: bool,
    /// Currency display format
    #[serde(default)]
    pub format: CurrencyFormat,
    /// Tier identifier -> base price
    #[serde(default = "default_tiers")]
    pub tiers: BTreeMap<String, u64>,
    /// Upgrade identifier -> cost
    #[serde(default = "default_upgrades")]
    pub upgrades: BTreeMap<String, u64>,
    /// Add-on identifier -> cost
    #[serde(default = "default_addons")]
    pub addons: BTreeMap<String, u64>,
    /// Tier identifier -> recommended configuration
    #[serde(default = "default_recommendations")]
    pub recommendations: BTreeMap<String, TierRecommendation>,
}

fn default_tier() -> String { "pilot".to_string() }
fn default_true() -> bool { true }

fn default_tiers() -> BTreeMap<String, u64> {
    BTreeMap::from([
        ("pilot".to_string(), 15_000),
        ("production".to_string(), 35_000),
        ("enterprise".to_string(), 65_000),
    ])
}

fn default_upgrades() -> BTreeMap<String, u64> {
    BTreeMap::from([("delta-sorting".to_string(), 5_000)])
}

fn default_addons() -> BTreeMap<String, u64> {
    BTreeMap::from([
        ("delay-machine".to_string(), 3_000),
        ("washing-station".to_string(), 4_000),
    ])
}

fn default_recommendations() -> BTreeMap<String, TierRecommendation> {
    BTreeMap::from([
        (
            "pilot".to_string(),
            TierRecommendation {
                throughput: "500kg/hour".to_string(),
                upgrade: None,
                addons: vec!["washing-station".to_string()],
            },
        ),
        (
            "production".to_string(),
            TierRecommendation {
                throughput: "2,000kg/hour".to_string(),
                upgrade: Some("delta-sorting".to_string()),
                addons: vec!["delay-machine".to_string()],
            },
        ),
        (
            "enterprise".to_string(),
            TierRecommendation {
                throughput: "5,000kg/hour+".to_string(),
                upgrade: Some("delta-sorting".to_string()),
                addons: vec!["delay-machine".to_string(), "washing-station".to_string()],
            },
        ),
    ])
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            default_tier: default_tier(),
            auto_apply_recommendations: true,
            format: CurrencyFormat::default(),
            tiers: default_tiers(),
            upgrades: default_upgrades(),
            addons: default_addons(),
            recommendations: default_recommendations(),
        }
    }
}

impl PricingConfig {
    /// Non-fatal inconsistencies between the catalogs
    ///
    /// Unknown identifiers only ever contribute 0 to an estimate, so these are
    /// reported rather than rejected.
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        if !self.tiers.contains_key(&self.default_tier) {
            warnings.push(format!("Default tier '{}' is not in the tier catalog", self.default_tier));
        }

        for (tier, rec) in &self.recommendations {
            if !self.tiers.contains_key(tier) {
                warnings.push(format!("Recommendation for unknown tier '{}'", tier));
            }
            if let Some(upgrade) = &rec.upgrade {
                if !self.upgrades.contains_key(upgrade) {
                    warnings.push(format!("Tier '{}' recommends unknown upgrade '{}'", tier, upgrade));
                }
            }
            for addon in &rec.addons {
                if !self.addons.contains_key(addon) {
                    warnings.push(format!("Tier '{}' recommends unknown add-on '{}'", tier, addon));
                }
            }
        }

        warnings
    }
}

/// Recommended setup shown (and optionally auto-selected) for a tier
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierRecommendation {
    /// Human-readable throughput, e.g. "500kg/hour"
    #[serde(default)]
    pub throughput: String,
    /// Recommended upgrade, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upgrade: Option<String>,
    /// Recommended add-ons
    #[serde(default)]
    pub addons: Vec<String>,
}

/// Where the currency symbol goes relative to the number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolPosition {
    Prefix,
    Suffix,
}

/// Currency display format applied to every total
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyFormat {
    /// Currency symbol or label ("$", "USD", "\u{20AC}")
    #[serde(default = "default_symbol")]
    pub symbol: String,
    #[serde(default = "default_position")]
    pub position: SymbolPosition,
    /// Thousands separator
    #[serde(default = "default_grouping_separator")]
    pub grouping_separator: String,
    /// Put a space between the number and the symbol
    #[serde(default)]
    pub spaced: bool,
}

fn default_symbol() -> String { "$".to_string() }
fn default_position() -> SymbolPosition { SymbolPosition::Prefix }
fn default_grouping_separator() -> String { ",".to_string() }

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self {
            symbol: default_symbol(),
            position: default_position(),
            grouping_separator: default_grouping_separator(),
            spaced: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::from_toml_str("").unwrap();

        assert_eq!(config.general.language, "auto");
        assert_eq!(config.pricing.default_tier, "pilot");
        assert_eq!(config.pricing.tiers.get("production"), Some(&35_000));
        assert_eq!(config.pricing.upgrades.get("delta-sorting"), Some(&5_000));
        assert_eq!(config.pricing.addons.get("washing-station"), Some(&4_000));
        assert!(config.pricing.auto_apply_recommendations);
        assert!(config.pricing.warnings().is_empty());
    }

    #[test]
    fn test_partial_catalog_override() {
        let config = Config::from_toml_str(
            r#"
            [pricing]
            default_tier = "basic"

            [pricing.tiers]
            basic = 1000

            [pricing.format]
            symbol = "EUR"
            position = "suffix"
            spaced = true
            "#,
        )
        .unwrap();

        assert_eq!(config.pricing.tiers.len(), 1);
        assert_eq!(config.pricing.addons.len(), 2);
        assert_eq!(config.pricing.format.position, SymbolPosition::Suffix);
        assert_eq!(config.pricing.format.grouping_separator, ",");
    }

    #[test]
    fn test_negative_price_is_rejected() {
        let result = Config::from_toml_str("[pricing.addons]\ndelay-machine = -3000\n");
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_warnings_for_dangling_identifiers() {
        let mut pricing = PricingConfig::default();
        pricing.default_tier = "missing".to_string();
        pricing.upgrades.clear();

        let warnings = pricing.warnings();
        assert!(warnings.iter().any(|w| w.contains("Default tier 'missing'")));
        assert!(warnings.iter().any(|w| w.contains("unknown upgrade 'delta-sorting'")));
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.general.language = "fr".to_string();
        config.pricing.addons.insert("dryer".to_string(), 2_500);
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.general.language, "fr");
        assert_eq!(loaded.pricing.addons.get("dryer"), Some(&2_500));
        assert_eq!(loaded.pricing.recommendations, config.pricing.recommendations);
    }

    #[test]
    fn test_load_from_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("typo").join("config.toml");

        let result = Config::load_from(&path);
        assert!(matches!(result, Err(Error::Config(_))));
        assert!(!path.exists());
        assert!(!dir.path().join("typo").exists());
    }

    #[test]
    fn test_first_run_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let config = Config::load_or_create(&path).unwrap();
        assert!(path.exists());
        assert_eq!(config.pricing.tiers, PricingConfig::default().tiers);
    }
}
