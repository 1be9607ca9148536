//! Selection state wired to the estimator and a display sink

use super::{DisplaySink, PriceEstimator};
use crate::core::{Estimate, PricingConfig, Selection, SelectionChange};

/// Owns the selection, recomputing and publishing after every change
pub struct PriceCalculator<D: DisplaySink> {
    estimator: PriceEstimator,
    selection: Selection,
    sink: D,
    auto_apply: bool,
    estimate: Estimate,
}

impl<D: DisplaySink> PriceCalculator<D> {
    /// Start on the configured default tier and publish the first estimate
    pub fn new(config: &PricingConfig, sink: D) -> Self {
        let estimator = PriceEstimator::new(config);
        let mut selection = Selection::new(Some(config.default_tier.as_str()));

        if config.auto_apply_recommendations {
            apply_recommendation(&estimator, &mut selection);
        }

        Self::with_selection(estimator, selection, sink, config.auto_apply_recommendations)
    }

    /// Start from an explicit selection, publishing the first estimate
    pub fn with_selection(estimator: PriceEstimator, selection: Selection, sink: D, auto_apply: bool) -> Self {
        let mut calculator = Self {
            estimator,
            selection,
            sink,
            auto_apply,
            estimate: Estimate::default(),
        };
        calculator.recompute();
        calculator
    }

    /// Apply a selection change and republish before returning
    pub fn apply(&mut self, change: SelectionChange) -> &Estimate {
        let changed = self.selection.apply(&change);

        if self.auto_apply && changed && matches!(change, SelectionChange::SelectTier(_)) {
            apply_recommendation(&self.estimator, &mut self.selection);
        }

        log::debug!("Applied {:?} (changed: {})", change, changed);
        self.recompute()
    }

    pub fn estimate(&self) -> &Estimate {
        &self.estimate
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn estimator(&self) -> &PriceEstimator {
        &self.estimator
    }

    pub fn sink(&self) -> &D {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut D {
        &mut self.sink
    }

    pub fn into_sink(self) -> D {
        self.sink
    }

    fn recompute(&mut self) -> &Estimate {
        self.estimate = self.estimator.recompute(&self.selection, &mut self.sink).clone();
        &self.estimate
    }
}

/// Replace upgrade and add-ons with the selected tier's recommendation
///
/// Tiers without a recommendation leave the selection untouched.
fn apply_recommendation(estimator: &PriceEstimator, selection: &mut Selection) {
    let catalog = estimator.catalog();
    let Some(rec) = selection.tier.as_deref().and_then(|tier| catalog.recommendation(tier)) else {
        return;
    };

    selection.upgrade = rec.upgrade.clone().filter(|id| catalog.has_upgrade(id));
    selection.addons = rec
        .addons
        .iter()
        .filter(|id| catalog.has_addon(id))
        .cloned()
        .collect();
}
