//! Qatmeer Price Estimator - Demo CLI
//!
//! Walks through a scripted series of selection changes and shows the
//! estimate the landing page calculator would display after each one.

use qatmeer_landing_lib::core::{PricingConfig, SelectionChange};
use qatmeer_landing_lib::i18n::{I18n, Language};
use qatmeer_landing_lib::pricing::{PriceCalculator, RecordingSink};

fn main() {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!("==============================================");
    println!("   Qatmeer Price Estimator - Demo");
    println!("==============================================\n");

    // 1. Catalog
    println!("[1/3] Loading default catalog...");
    let pricing = PricingConfig::default();
    let i18n = I18n::with_language(Language::En);
    for (id, price) in &pricing.tiers {
        println!("      {:<12} {}", i18n.tier_name(id), pricing.format.format(*price));
    }
    println!();

    // 2. Calculator
    println!("[2/3] Starting calculator on tier '{}'...", pricing.default_tier);
    let mut calculator = PriceCalculator::new(&pricing, RecordingSink::default());
    println!("      Initial estimate: {}\n", calculator.estimate().formatted);

    // 3. Scripted changes
    println!("[3/3] Applying selection changes...\n");
    println!("----------------------------------------------");
    println!("  Change                          |  Estimate");
    println!("----------------------------------------------");

    let script = vec![
        SelectionChange::SelectUpgrade("delta-sorting".into()),
        SelectionChange::SetAddon { id: "delay-machine".into(), active: true },
        SelectionChange::SetAddon { id: "washing-station".into(), active: false },
        SelectionChange::SelectTier("production".into()),
        SelectionChange::ToggleAddon("washing-station".into()),
        SelectionChange::SelectTier("enterprise".into()),
        SelectionChange::ClearUpgrade,
        SelectionChange::SelectTier("unknown-tier".into()),
    ];

    for change in script {
        let label = describe(&change);
        let estimate = calculator.apply(change);
        println!("  {:<31} | {:>9}", label, estimate.formatted);
    }

    println!("----------------------------------------------\n");

    let sink = calculator.into_sink();
    println!("=== Summary ===\n");
    println!("  Estimates published: {}", sink.publish_count());
    println!("  Last displayed:      {}", sink.last().unwrap_or("-"));

    let fr = I18n::with_language(Language::Fr);
    println!("\n  {} / {}", i18n.get("estimate.title"), fr.get("estimate.title"));
    println!("\n==============================================\n");
}

fn describe(change: &SelectionChange) -> String {
    match change {
        SelectionChange::SelectTier(id) => format!("tier = {}", id),
        SelectionChange::ClearTier => "tier cleared".to_string(),
        SelectionChange::SelectUpgrade(id) => format!("upgrade = {}", id),
        SelectionChange::ClearUpgrade => "upgrade cleared".to_string(),
        SelectionChange::SetAddon { id, active } => format!("{} {}", if *active { "+" } else { "-" }, id),
        SelectionChange::ToggleAddon(id) => format!("toggle {}", id),
        SelectionChange::ClearAddons => "add-ons cleared".to_string(),
    }
}
