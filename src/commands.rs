//! Command bodies for the estimator binary
//!
//! Each command writes to a caller-supplied writer so it can run against
//! stdout or an in-memory buffer.

use anyhow::Result;
use qatmeer_landing_lib::core::{Config, Estimate, PricingConfig, Selection};
use qatmeer_landing_lib::i18n::I18n;
use qatmeer_landing_lib::prefs::PreferenceStore;
use qatmeer_landing_lib::pricing::{DisplaySink, PriceCalculator, PriceEstimator, WriterSink};
use std::io::{self, BufRead, Write};
use std::path::Path;

use crate::cli::{self, EstimateArgs, SessionCommand};

/// Load configuration
///
/// An explicit path must exist and parse. The default location is created on
/// first run and falls back to built-in defaults when it cannot be read.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Ok(Config::load_from(path)?),
        None => Ok(Config::load().unwrap_or_else(|e| {
            log::warn!("Failed to load config, using defaults: {}", e);
            Config::default()
        })),
    }
}

/// Calculator after applying the command-line selections
pub fn estimate_calculator(pricing: &PricingConfig, opts: &EstimateArgs) -> PriceCalculator<String> {
    let mut pricing = pricing.clone();
    if opts.no_recommend {
        pricing.auto_apply_recommendations = false;
    }

    let mut calculator = PriceCalculator::new(&pricing, String::new());
    for change in opts.changes() {
        calculator.apply(change);
    }
    calculator
}

pub fn run_estimate<W: Write>(pricing: &PricingConfig, i18n: &I18n, opts: &EstimateArgs, out: &mut W) -> Result<()> {
    let calculator = estimate_calculator(pricing, opts);

    if opts.json {
        writeln!(out, "{}", serde_json::to_string_pretty(calculator.estimate())?)?;
    } else {
        write_breakdown(out, calculator.estimator(), calculator.selection(), calculator.estimate(), i18n)?;
        writeln!(out, "{}: {}", i18n.get("estimate.title"), calculator.sink())?;
    }

    Ok(())
}

/// Show the consent state, or accept and persist it
///
/// The store at `prefs_path` must open cleanly; a corrupt file is reported
/// instead of being replaced.
pub fn consent<W: Write>(prefs_path: &Path, accept: bool, i18n: &I18n, out: &mut W) -> Result<()> {
    let mut store = PreferenceStore::open_at(prefs_path)?;

    if accept {
        store.accept_consent()?;
        writeln!(out, "{}", i18n.get("consent.accepted"))?;
    } else if store.has_consent() {
        writeln!(out, "{}", i18n.get("consent.given"))?;
    } else {
        writeln!(out, "{}", i18n.get("consent.pending"))?;
    }

    Ok(())
}

/// Read session commands until quit or end of input
///
/// Estimates go to `sink`; prompts, breakdowns and messages go to `out`.
/// Returns the sink so callers can inspect what was published.
pub fn run_session<R, W, S>(
    pricing: &PricingConfig,
    i18n: &mut I18n,
    prefs: &mut PreferenceStore,
    input: R,
    out: &mut W,
    sink: WriterSink<S>,
) -> Result<WriterSink<S>>
where
    R: BufRead,
    W: Write,
    S: Write,
{
    writeln!(out, "{}", i18n.get("app.title"))?;
    writeln!(out, "{}", i18n.get("interactive.welcome"))?;

    let mut calculator = PriceCalculator::new(pricing, sink);
    let mut lines = input.lines();

    loop {
        write!(out, "> ")?;
        out.flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;

        match cli::parse_session_command(&line) {
            Some(SessionCommand::Change(change)) => {
                calculator.apply(change);
            }
            Some(SessionCommand::Show) => {
                write_breakdown(out, calculator.estimator(), calculator.selection(), calculator.estimate(), i18n)?;
            }
            Some(SessionCommand::Lang(lang)) => {
                let lang = match lang {
                    Some(lang) => {
                        i18n.set_language(lang);
                        lang
                    }
                    None => i18n.toggle(),
                };
                if let Err(e) = prefs.set_language(lang) {
                    log::warn!("Failed to save language preference: {}", e);
                }
                writeln!(out, "{}", i18n.get("lang.switched"))?;

                let title = i18n.get("estimate.title");
                calculator.sink_mut().set_label(&title);
                let formatted = calculator.estimate().formatted.clone();
                calculator.sink_mut().publish(&formatted);
            }
            Some(SessionCommand::Help) => writeln!(out, "{}", i18n.get("interactive.help"))?,
            Some(SessionCommand::Quit) => break,
            None => writeln!(out, "{}: {}", i18n.get("interactive.unknown"), line.trim())?,
        }
    }

    Ok(calculator.into_sink())
}

pub fn write_breakdown<W: Write>(
    out: &mut W,
    estimator: &PriceEstimator,
    selection: &Selection,
    estimate: &Estimate,
    i18n: &I18n,
) -> io::Result<()> {
    let catalog = estimator.catalog();
    let format = estimator.format();
    let none = i18n.get("common.none");

    let tier = selection.tier.as_deref();
    let tier_name = tier.map_or_else(|| none.clone(), |id| i18n.tier_name(id));
    writeln!(out, "{}: {}", i18n.get("estimate.tier"), tier_name)?;

    if let Some(rec) = tier.and_then(|id| catalog.recommendation(id)) {
        writeln!(out, "  {}: {}", i18n.get("estimate.throughput"), rec.throughput)?;
    }
    if let Some(id) = tier {
        writeln!(
            out,
            "  {}: {}",
            i18n.get("estimate.recommended_addons"),
            catalog.recommended_addon_labels(id, i18n)
        )?;
    }

    writeln!(out, "  {}: {}", i18n.get("estimate.base"), format.format(estimate.base))?;

    let upgrade_name = selection
        .upgrade
        .as_deref()
        .map_or_else(|| none.clone(), |id| i18n.upgrade_name(id));
    writeln!(
        out,
        "  {} ({}): {}",
        i18n.get("estimate.upgrade"),
        upgrade_name,
        format.format(estimate.upgrade)
    )?;

    let addon_names: Vec<String> = selection.addons.iter().map(|id| i18n.addon_name(id)).collect();
    let addon_names = if addon_names.is_empty() { none } else { addon_names.join(", ") };
    writeln!(
        out,
        "  {} ({}): {}",
        i18n.get("estimate.addons"),
        addon_names,
        format.format(estimate.addons)
    )?;

    writeln!(out, "  {}: {}", i18n.get("estimate.total"), estimate.formatted)
}

pub fn write_catalog<W: Write>(out: &mut W, estimator: &PriceEstimator, i18n: &I18n) -> io::Result<()> {
    let catalog = estimator.catalog();
    let format = estimator.format();

    writeln!(out, "{}", i18n.get("catalog.tiers"))?;
    for (id, price) in catalog.tiers() {
        let throughput = catalog
            .recommendation(id)
            .map(|rec| format!(" [{}]", rec.throughput))
            .unwrap_or_default();
        writeln!(
            out,
            "  {:<16} {:<24} {:>12}{}",
            id,
            i18n.tier_name(id),
            format.format(price),
            throughput
        )?;
    }

    writeln!(out, "{}", i18n.get("catalog.upgrades"))?;
    for (id, cost) in catalog.upgrades() {
        writeln!(out, "  {:<16} {:<24} {:>12}", id, i18n.upgrade_name(id), format.format(cost))?;
    }

    writeln!(out, "{}", i18n.get("catalog.addons"))?;
    for (id, cost) in catalog.addons() {
        writeln!(out, "  {:<16} {:<24} {:>12}", id, i18n.addon_name(id), format.format(cost))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use clap::Parser;
    use qatmeer_landing_lib::i18n::Language;
    use std::fs;

    fn estimate_args(argv: &[&str]) -> EstimateArgs {
        let cli = Cli::try_parse_from(argv.iter().copied()).unwrap();
        match cli.get_command() {
            Commands::Estimate(args) => args,
            other => panic!("Expected Estimate command, got {:?}", other),
        }
    }

    #[test]
    fn test_addon_replaces_recommended_addons_only() {
        let opts = estimate_args(&[
            "qatmeer-estimator",
            "estimate",
            "--tier",
            "production",
            "--addon",
            "washing-station",
        ]);
        let calc = estimate_calculator(&PricingConfig::default(), &opts);

        // production 35,000 + recommended delta-sorting 5,000 + washing-station 4,000
        assert_eq!(calc.estimate().total, 44_000);
        assert_eq!(calc.sink(), "$44,000");
        assert_eq!(calc.selection().upgrade.as_deref(), Some("delta-sorting"));
        assert_eq!(calc.selection().addons.len(), 1);
    }

    #[test]
    fn test_upgrade_none_drops_recommended_upgrade() {
        let opts = estimate_args(&[
            "qatmeer-estimator",
            "estimate",
            "--tier",
            "production",
            "--upgrade",
            "none",
            "--addon",
            "washing-station",
        ]);
        let calc = estimate_calculator(&PricingConfig::default(), &opts);

        assert_eq!(calc.estimate().total, 39_000);
        assert!(calc.selection().upgrade.is_none());
    }

    #[test]
    fn test_no_recommend_prices_tier_alone() {
        let opts = estimate_args(&["qatmeer-estimator", "estimate", "--tier", "production", "--no-recommend"]);
        let calc = estimate_calculator(&PricingConfig::default(), &opts);

        assert_eq!(calc.estimate().total, 35_000);
        assert_eq!(calc.sink(), "$35,000");
        assert!(calc.selection().upgrade.is_none());
        assert!(calc.selection().addons.is_empty());
    }

    #[test]
    fn test_run_estimate_prints_breakdown_and_total() {
        let opts = estimate_args(&["qatmeer-estimator", "estimate", "--tier", "enterprise"]);
        let mut out = Vec::new();
        run_estimate(&PricingConfig::default(), &I18n::new("en"), &opts, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("5,000kg/hour+"));
        assert!(text.ends_with("Estimated cost: $77,000\n"));
    }

    #[test]
    fn test_run_estimate_json() {
        let opts = estimate_args(&["qatmeer-estimator", "estimate", "--tier", "pilot", "--json"]);
        let mut out = Vec::new();
        run_estimate(&PricingConfig::default(), &I18n::new("en"), &opts, &mut out).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["total"], 19_000);
        assert_eq!(value["formatted"], "$19,000");
    }

    #[test]
    fn test_consent_accept_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.toml");
        let i18n = I18n::new("en");

        let mut out = Vec::new();
        consent(&path, false, &i18n, &mut out).unwrap();
        consent(&path, true, &i18n, &mut out).unwrap();
        consent(&path, false, &i18n, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "Consent: not given\nPreferences accepted.\nConsent: accepted\n");
        assert!(PreferenceStore::open_at(&path).unwrap().has_consent());
    }

    #[test]
    fn test_consent_accept_with_corrupt_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.toml");
        fs::write(&path, "language = ").unwrap();

        let mut out = Vec::new();
        let result = consent(&path, true, &I18n::new("en"), &mut out);

        assert!(result.is_err());
        assert!(out.is_empty());
        assert_eq!(fs::read_to_string(&path).unwrap(), "language = ");
    }

    #[test]
    fn test_missing_explicit_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("qatmeer.toml");

        assert!(load_config(Some(&path)).is_err());
        assert!(!path.exists());
    }

    #[test]
    fn test_session_publishes_and_switches_language() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.toml");
        let mut prefs = PreferenceStore::open_at(&path).unwrap();
        let mut i18n = I18n::new("en");

        let input = "tier production\naddon washing-station\ndance\nlang\nquit\nshow\n";
        let sink = WriterSink::new(&i18n.get("estimate.title"), Vec::new());
        let mut out = Vec::new();
        let sink = run_session(&PricingConfig::default(), &mut i18n, &mut prefs, input.as_bytes(), &mut out, sink).unwrap();

        let published = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(
            published,
            "Estimated cost: $19,000\n\
             Estimated cost: $43,000\n\
             Estimated cost: $47,000\n\
             Co\u{00FB}t estim\u{00E9}: $47,000\n"
        );

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Unknown command: dance"));
        assert!(text.contains("Langue : fran\u{00E7}ais"));
        assert!(!text.contains("Total"));
        assert_eq!(PreferenceStore::open_at(&path).unwrap().language(), Some(Language::Fr));
    }
}
