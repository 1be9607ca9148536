//! Qatmeer Price Estimator - Main entry point
//!
//! Command-line host for the estimator: reads selections from arguments or
//! an interactive session and prints the running estimate.

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use qatmeer_landing_lib::i18n::I18n;
use qatmeer_landing_lib::prefs::PreferenceStore;
use qatmeer_landing_lib::pricing::{PriceEstimator, WriterSink};
use std::io;

use crate::cli::Commands;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = cli::Cli::parse();
    log::info!("Starting Qatmeer estimator v{}", env!("CARGO_PKG_VERSION"));

    let config = commands::load_config(args.config.as_deref())?;

    let prefs = PreferenceStore::open();
    if let Err(e) = &prefs {
        log::warn!("Failed to open preferences: {}", e);
    }
    let saved_language = prefs.as_ref().ok().and_then(PreferenceStore::language);

    let language = cli::resolve_language(args.lang.as_deref(), saved_language, &config.general.language);
    let mut i18n = I18n::with_language(language);
    let mut stdout = io::stdout();

    match args.get_command() {
        Commands::Estimate(opts) => commands::run_estimate(&config.pricing, &i18n, &opts, &mut stdout)?,
        Commands::Catalog => commands::write_catalog(&mut stdout, &PriceEstimator::new(&config.pricing), &i18n)?,
        Commands::Interactive => {
            let mut prefs = prefs.unwrap_or_else(|_| PreferenceStore::in_memory());
            if !prefs.has_consent() {
                eprintln!("{}", i18n.get("consent.banner"));
            }

            let sink = WriterSink::stdout(&i18n.get("estimate.title"));
            let stdin = io::stdin();
            commands::run_session(&config.pricing, &mut i18n, &mut prefs, stdin.lock(), &mut stdout, sink)?;
        }
        Commands::Consent { accept } => {
            commands::consent(&PreferenceStore::prefs_path()?, accept, &i18n, &mut stdout)?;
        }
    }

    Ok(())
}
