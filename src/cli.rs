use clap::{Args, Parser, Subcommand};
use qatmeer_landing_lib::core::SelectionChange;
use qatmeer_landing_lib::i18n::Language;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "qatmeer-estimator", version, about = "Qatmeer price estimator")]
pub struct Cli {
    /// Configuration file path (defaults to the user config directory)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Display language: auto, en, fr
    #[arg(short, long, global = true, env = "QATMEER_LANG")]
    pub lang: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Compute a single estimate (default)
    Estimate(EstimateArgs),

    /// List tiers, upgrades and add-ons with their prices
    Catalog,

    /// Adjust selections line by line and watch the estimate update
    Interactive,

    /// Show or accept the cookie-consent preference
    Consent {
        /// Accept and remember consent
        #[arg(long)]
        accept: bool,
    },
}

#[derive(Args, Debug, Clone, Default)]
pub struct EstimateArgs {
    /// Tier identifier (defaults to the configured default tier)
    #[arg(short, long)]
    pub tier: Option<String>,

    /// Upgrade identifier, or "none"
    #[arg(short, long)]
    pub upgrade: Option<String>,

    /// Add-on identifier; repeat for several. Replaces the recommended add-ons,
    /// but the recommended upgrade stays unless --upgrade is given
    #[arg(short, long = "addon")]
    pub addons: Vec<String>,

    /// Do not auto-select the tier's recommended upgrade and add-ons
    #[arg(long)]
    pub no_recommend: bool,

    /// Print the estimate as JSON
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Get the command to execute, defaulting to a plain estimate
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or_else(|| Commands::Estimate(EstimateArgs::default()))
    }
}

impl EstimateArgs {
    /// Selection changes to apply on top of the calculator's initial state
    pub fn changes(&self) -> Vec<SelectionChange> {
        let mut changes = Vec::new();

        if let Some(tier) = &self.tier {
            changes.push(SelectionChange::SelectTier(tier.clone()));
        }

        match self.upgrade.as_deref() {
            Some("none") => changes.push(SelectionChange::ClearUpgrade),
            Some(id) => changes.push(SelectionChange::SelectUpgrade(id.to_string())),
            None => {}
        }

        if !self.addons.is_empty() {
            changes.push(SelectionChange::ClearAddons);
            changes.extend(
                self.addons
                    .iter()
                    .map(|id| SelectionChange::SetAddon { id: id.clone(), active: true }),
            );
        }

        changes
    }
}

/// Pick the display language: command line, then saved preference, then config
pub fn resolve_language(flag: Option<&str>, saved: Option<Language>, configured: &str) -> Language {
    match (flag, saved) {
        (Some(code), _) => Language::resolve(code),
        (None, Some(lang)) => lang,
        (None, None) => Language::resolve(configured),
    }
}

/// One line of input in an interactive session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Change(SelectionChange),
    Show,
    /// Switch language; `None` toggles between the two
    Lang(Option<Language>),
    Help,
    Quit,
}

/// Parse an interactive command, `None` when it is not recognized
pub fn parse_session_command(line: &str) -> Option<SessionCommand> {
    let mut words = line.split_whitespace();
    let command = words.next().unwrap_or("show");
    let arg = words.next();

    if words.next().is_some() {
        return None;
    }

    let parsed = match (command, arg) {
        ("show", None) => SessionCommand::Show,
        ("help", None) => SessionCommand::Help,
        ("quit" | "exit", None) => SessionCommand::Quit,
        ("lang", None) => SessionCommand::Lang(None),
        ("lang", Some(code @ ("en" | "fr"))) => SessionCommand::Lang(Some(Language::resolve(code))),
        ("tier", Some("none")) => SessionCommand::Change(SelectionChange::ClearTier),
        ("tier", Some(id)) => SessionCommand::Change(SelectionChange::SelectTier(id.to_string())),
        ("upgrade", Some("none")) => SessionCommand::Change(SelectionChange::ClearUpgrade),
        ("upgrade", Some(id)) => SessionCommand::Change(SelectionChange::SelectUpgrade(id.to_string())),
        ("addon", Some(id)) => SessionCommand::Change(SelectionChange::ToggleAddon(id.to_string())),
        ("clear", None) => SessionCommand::Change(SelectionChange::ClearAddons),
        _ => return None,
    };

    Some(parsed)
}
