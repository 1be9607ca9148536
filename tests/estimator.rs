use qatmeer_landing_lib::core::{Config, PricingConfig, Selection, SelectionChange, SymbolPosition};
use qatmeer_landing_lib::pricing::{PriceCalculator, PriceEstimator, RecordingSink};

#[test]
fn total_is_sum_for_every_catalog_combination() {
    let pricing = PricingConfig::default();
    let estimator = PriceEstimator::new(&pricing);
    let addon_ids: Vec<&String> = pricing.addons.keys().collect();

    for (tier, base) in &pricing.tiers {
        let upgrades = std::iter::once(None).chain(pricing.upgrades.iter().map(Some));
        for upgrade in upgrades {
            for mask in 0..(1u32 << addon_ids.len()) {
                let mut selection = Selection::new(Some(tier.as_str()));
                let mut expected = *base;

                if let Some((id, cost)) = upgrade {
                    selection = selection.with_upgrade(id);
                    expected += cost;
                }
                for (bit, id) in addon_ids.iter().enumerate() {
                    if mask & (1 << bit) != 0 {
                        selection = selection.with_addon(id);
                        expected += pricing.addons[*id];
                    }
                }

                assert_eq!(estimator.estimate(&selection).total, expected, "{:?}", selection);
            }
        }
    }
}

#[test]
fn configured_catalog_and_format_drive_display() {
    let config = Config::from_toml_str(
        r#"
        [pricing]
        default_tier = "starter"
        auto_apply_recommendations = false

        [pricing.format]
        symbol = "EUR"
        position = "suffix"
        grouping_separator = "."
        spaced = true

        [pricing.tiers]
        starter = 1200000

        [pricing.addons]
        dryer = 2500
        "#,
    )
    .unwrap();
    assert_eq!(config.pricing.format.position, SymbolPosition::Suffix);

    let mut calculator = PriceCalculator::new(&config.pricing, RecordingSink::default());
    assert_eq!(calculator.sink().last(), Some("1.200.000 EUR"));

    calculator.apply(SelectionChange::ToggleAddon("dryer".into()));
    assert_eq!(calculator.sink().last(), Some("1.202.500 EUR"));

    // upgrades fall back to the default catalog when the section is absent
    let estimate = calculator.apply(SelectionChange::SelectUpgrade("delta-sorting".into()));
    assert_eq!(estimate.total, 1_207_500);
}

#[test]
fn string_display_shows_latest_estimate_only() {
    let pricing = PricingConfig::default();
    let mut calculator = PriceCalculator::new(&pricing, String::new());

    calculator.apply(SelectionChange::SelectTier("production".into()));
    calculator.apply(SelectionChange::ClearUpgrade);
    calculator.apply(SelectionChange::ClearAddons);

    assert_eq!(calculator.sink(), "$35,000");
    assert_eq!(calculator.estimate().total, 35_000);
}

#[test]
fn estimate_serializes_for_json_output() {
    let estimator = PriceEstimator::new(&PricingConfig::default());
    let estimate = estimator.estimate(&Selection::new(Some("pilot")).with_addon("delay-machine"));

    let json = serde_json::to_value(&estimate).unwrap();
    assert_eq!(json["total"], 18_000);
    assert_eq!(json["formatted"], "$18,000");
    assert_eq!(json["tier"], "pilot");
}
