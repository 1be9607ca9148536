//! Core module - Configuration, errors, and common types

mod config;
mod error;
mod types;

pub use config::{Config, CurrencyFormat, GeneralConfig, PricingConfig, SymbolPosition, TierRecommendation};
pub use error::{Error, Result};
pub use types::{Estimate, Selection, SelectionChange};
