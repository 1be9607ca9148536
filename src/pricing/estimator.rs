//! Running cost total for the current selections

use super::{Catalog, DisplaySink, SelectionSource};
use crate::core::{CurrencyFormat, Estimate, PricingConfig};
use std::collections::BTreeSet;

/// Computes the estimate and publishes it to a display sink
///
/// Missing or unrecognized identifiers contribute 0; nothing here can fail.
pub struct PriceEstimator {
    catalog: Catalog,
    format: CurrencyFormat,
    current: Option<Estimate>,
}

impl PriceEstimator {
    /// Create a new estimator with the given pricing configuration
    pub fn new(config: &PricingConfig) -> Self {
        Self::with_catalog(Catalog::from_config(config), config.format.clone())
    }

    pub fn with_catalog(catalog: Catalog, format: CurrencyFormat) -> Self {
        Self {
            catalog,
            format,
            current: None,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn format(&self) -> &CurrencyFormat {
        &self.format
    }

    /// Last published estimate, `None` before the first `recompute`
    pub fn current(&self) -> Option<&Estimate> {
        self.current.as_ref()
    }

    /// Compute the estimate for `source` without publishing it
    pub fn estimate<S: SelectionSource + ?Sized>(&self, source: &S) -> Estimate {
        let tier = source.selected_tier();
        let base = tier.map_or(0, |id| {
            self.catalog.tier_price(id).unwrap_or_else(|| {
                log::debug!("Unknown tier '{}', base price 0", id);
                0
            })
        });

        let upgrade = source.selected_upgrade().map_or(0, |id| {
            self.catalog.upgrade_cost(id).unwrap_or_else(|| {
                log::debug!("Unknown upgrade '{}', cost 0", id);
                0
            })
        });

        let active: BTreeSet<&str> = source.active_addons().into_iter().collect();
        let addons = active.iter().fold(0u64, |sum, id| {
            let cost = self.catalog.addon_cost(id).unwrap_or_else(|| {
                log::debug!("Unknown add-on '{}', cost 0", id);
                0
            });
            sum.saturating_add(cost)
        });

        let total = base.saturating_add(upgrade).saturating_add(addons);

        Estimate {
            tier: tier.map(str::to_string),
            base,
            upgrade,
            addons,
            total,
            formatted: self.format.format(total),
        }
    }

    /// Recompute from `source` and overwrite the sink with the formatted total
    pub fn recompute<S, D>(&mut self, source: &S, sink: &mut D) -> &Estimate
    where
        S: SelectionSource + ?Sized,
        D: DisplaySink + ?Sized,
    {
        let estimate = self.estimate(source);
        sink.publish(&estimate.formatted);
        self.current.insert(estimate)
    }
}
