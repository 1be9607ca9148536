//! English translations

use std::collections::HashMap;

pub fn get_translations() -> HashMap<String, String> {
    let mut t = HashMap::new();

    // App general
    t.insert("app.title".into(), "Qatmeer Price Estimator".into());
    t.insert("common.none".into(), "None".into());

    // Estimate
    t.insert("estimate.title".into(), "Estimated cost".into());
    t.insert("estimate.tier".into(), "Tier".into());
    t.insert("estimate.base".into(), "Base price".into());
    t.insert("estimate.upgrade".into(), "Upgrade".into());
    t.insert("estimate.addons".into(), "Add-ons".into());
    t.insert("estimate.total".into(), "Total".into());
    t.insert("estimate.throughput".into(), "Recommended throughput".into());
    t.insert("estimate.recommended_addons".into(), "Recommended add-ons".into());

    // Catalog
    t.insert("catalog.tiers".into(), "Tiers".into());
    t.insert("catalog.upgrades".into(), "Upgrades".into());
    t.insert("catalog.addons".into(), "Add-ons".into());

    // Tiers
    t.insert("tier.pilot".into(), "Pilot".into());
    t.insert("tier.production".into(), "Production".into());
    t.insert("tier.enterprise".into(), "Enterprise".into());

    // Upgrades
    t.insert("upgrade.delta-sorting".into(), "Delta Sorting".into());

    // Add-ons
    t.insert("addon.delay-machine".into(), "Delay Machine".into());
    t.insert("addon.washing-station".into(), "Washing Station".into());

    // Cookie consent
    t.insert("consent.banner".into(), "We store your preferences on this device. Run `consent --accept` to accept.".into());
    t.insert("consent.accepted".into(), "Preferences accepted.".into());
    t.insert("consent.given".into(), "Consent: accepted".into());
    t.insert("consent.pending".into(), "Consent: not given".into());

    // Interactive session
    t.insert("interactive.welcome".into(), "Type `help` for commands, `quit` to exit.".into());
    t.insert("interactive.help".into(), "Commands: tier <id> | upgrade <id|none> | addon <id> | show | lang [en|fr] | help | quit".into());
    t.insert("interactive.unknown".into(), "Unknown command".into());
    t.insert("lang.switched".into(), "Language: English".into());

    t
}
