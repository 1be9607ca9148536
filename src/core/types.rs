//! Common types used across the application

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Current user selections feeding the estimator
///
/// At most one upgrade can be held at a time; add-ons behave as a set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    /// Selected tier identifier (e.g. "pilot")
    pub tier: Option<String>,
    /// Selected upgrade identifier, if any
    pub upgrade: Option<String>,
    /// Active add-on identifiers
    #[serde(default)]
    pub addons: BTreeSet<String>,
}

impl Selection {
    pub fn new(tier: Option<&str>) -> Self {
        Self {
            tier: tier.map(str::to_string),
            ..Default::default()
        }
    }

    pub fn with_upgrade(mut self, upgrade: &str) -> Self {
        self.upgrade = Some(upgrade.to_string());
        self
    }

    pub fn with_addon(mut self, addon: &str) -> Self {
        self.addons.insert(addon.to_string());
        self
    }

    /// Apply a change event, returning whether the selection actually changed
    pub fn apply(&mut self, change: &SelectionChange) -> bool {
        match change {
            SelectionChange::SelectTier(id) => replace(&mut self.tier, Some(id.clone())),
            SelectionChange::ClearTier => replace(&mut self.tier, None),
            SelectionChange::SelectUpgrade(id) => replace(&mut self.upgrade, Some(id.clone())),
            SelectionChange::ClearUpgrade => replace(&mut self.upgrade, None),
            SelectionChange::SetAddon { id, active: true } => self.addons.insert(id.clone()),
            SelectionChange::SetAddon { id, active: false } => self.addons.remove(id),
            SelectionChange::ToggleAddon(id) => {
                if !self.addons.remove(id) {
                    self.addons.insert(id.clone());
                }
                true
            }
            SelectionChange::ClearAddons => {
                let changed = !self.addons.is_empty();
                self.addons.clear();
                changed
            }
        }
    }
}

fn replace(slot: &mut Option<String>, value: Option<String>) -> bool {
    if *slot == value {
        false
    } else {
        *slot = value;
        true
    }
}

/// A single change notification from the selection source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionChange {
    SelectTier(String),
    ClearTier,
    SelectUpgrade(String),
    ClearUpgrade,
    SetAddon { id: String, active: bool },
    ToggleAddon(String),
    ClearAddons,
}

/// Computed cost estimate for the current selections
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Estimate {
    /// Tier the base price was looked up for
    pub tier: Option<String>,
    /// Tier base price (0 when the tier is absent or unknown)
    pub base: u64,
    /// Upgrade cost (0 when no upgrade or unknown)
    pub upgrade: u64,
    /// Sum of the known active add-ons
    pub addons: u64,
    /// base + upgrade + addons
    pub total: u64,
    /// Total rendered with the configured currency format
    pub formatted: String,
}
