//! Qatmeer landing page estimator library
//!
//! This module exposes the core functionality for use in tests
//! and by the command-line hosts.

pub mod core;
pub mod i18n;
pub mod prefs;
pub mod pricing;
