//! Immutable price catalogs built once from configuration

use crate::core::{PricingConfig, TierRecommendation};
use crate::i18n::I18n;
use std::collections::BTreeMap;

/// Tier, upgrade and add-on price lists
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    tiers: BTreeMap<String, u64>,
    upgrades: BTreeMap<String, u64>,
    addons: BTreeMap<String, u64>,
    recommendations: BTreeMap<String, TierRecommendation>,
}

impl Catalog {
    pub fn from_config(config: &PricingConfig) -> Self {
        Self {
            tiers: config.tiers.clone(),
            upgrades: config.upgrades.clone(),
            addons: config.addons.clone(),
            recommendations: config.recommendations.clone(),
        }
    }

    pub fn tier_price(&self, id: &str) -> Option<u64> {
        self.tiers.get(id).copied()
    }

    pub fn upgrade_cost(&self, id: &str) -> Option<u64> {
        self.upgrades.get(id).copied()
    }

    pub fn addon_cost(&self, id: &str) -> Option<u64> {
        self.addons.get(id).copied()
    }

    pub fn has_upgrade(&self, id: &str) -> bool {
        self.upgrades.contains_key(id)
    }

    pub fn has_addon(&self, id: &str) -> bool {
        self.addons.contains_key(id)
    }

    pub fn tiers(&self) -> impl Iterator<Item = (&str, u64)> {
        self.tiers.iter().map(|(id, price)| (id.as_str(), *price))
    }

    pub fn upgrades(&self) -> impl Iterator<Item = (&str, u64)> {
        self.upgrades.iter().map(|(id, cost)| (id.as_str(), *cost))
    }

    pub fn addons(&self) -> impl Iterator<Item = (&str, u64)> {
        self.addons.iter().map(|(id, cost)| (id.as_str(), *cost))
    }

    /// Recommended setup for a tier, if one is configured
    pub fn recommendation(&self, tier: &str) -> Option<&TierRecommendation> {
        self.recommendations.get(tier)
    }

    /// Localized, comma-separated names of the recommended add-ons for a tier
    ///
    /// Add-ons missing from the catalog are skipped; an empty list renders as
    /// the localized "None".
    pub fn recommended_addon_labels(&self, tier: &str, i18n: &I18n) -> String {
        let names: Vec<String> = self
            .recommendation(tier)
            .map(|rec| {
                rec.addons
                    .iter()
                    .filter(|id| self.has_addon(id))
                    .map(|id| i18n.addon_name(id))
                    .collect()
            })
            .unwrap_or_default();

        if names.is_empty() {
            i18n.get("common.none")
        } else {
            names.join(", ")
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::from_config(&PricingConfig::default())
    }
}
