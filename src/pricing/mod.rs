//! Price estimation for the landing page calculator
//!
//! The estimate is the tier base price, plus the selected upgrade, plus every
//! active add-on:
//! - `Catalog`: immutable price lists loaded from configuration
//! - `PriceEstimator`: computes and publishes the total
//! - `PriceCalculator`: owns the selection and recomputes on every change

mod calculator;
mod catalog;
mod estimator;
mod format;

pub use calculator::PriceCalculator;
pub use catalog::Catalog;
pub use estimator::PriceEstimator;

use crate::core::Selection;
use std::io::{self, Write};

/// Read side of the user's current selections
pub trait SelectionSource {
    /// Selected tier identifier, if any
    fn selected_tier(&self) -> Option<&str>;

    /// Selected upgrade identifier, if any
    fn selected_upgrade(&self) -> Option<&str>;

    /// Active add-on identifiers; duplicates are ignored by the estimator
    fn active_addons(&self) -> Vec<&str>;
}

/// Destination for the formatted estimate
pub trait DisplaySink {
    /// Replace whatever is currently shown
    fn publish(&mut self, formatted: &str);
}

impl SelectionSource for Selection {
    fn selected_tier(&self) -> Option<&str> {
        self.tier.as_deref()
    }

    fn selected_upgrade(&self) -> Option<&str> {
        self.upgrade.as_deref()
    }

    fn active_addons(&self) -> Vec<&str> {
        self.addons.iter().map(String::as_str).collect()
    }
}

impl DisplaySink for String {
    fn publish(&mut self, formatted: &str) {
        self.clear();
        self.push_str(formatted);
    }
}

/// Sink that remembers the last published value
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    last: Option<String>,
    publish_count: usize,
}

impl RecordingSink {
    pub fn last(&self) -> Option<&str> {
        self.last.as_deref()
    }

    pub fn publish_count(&self) -> usize {
        self.publish_count
    }
}

impl DisplaySink for RecordingSink {
    fn publish(&mut self, formatted: &str) {
        self.last = Some(formatted.to_string());
        self.publish_count += 1;
    }
}

/// Sink that writes each estimate as a labelled line
pub struct WriterSink<W: Write> {
    label: String,
    out: W,
}

impl WriterSink<io::Stdout> {
    pub fn stdout(label: &str) -> Self {
        Self::new(label, io::stdout())
    }
}

impl<W: Write> WriterSink<W> {
    pub fn new(label: &str, out: W) -> Self {
        Self {
            label: label.to_string(),
            out,
        }
    }

    pub fn set_label(&mut self, label: &str) {
        self.label = label.to_string();
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> DisplaySink for WriterSink<W> {
    fn publish(&mut self, formatted: &str) {
        if let Err(e) = writeln!(self.out, "{}: {}", self.label, formatted) {
            log::warn!("Failed to display estimate: {}", e);
        }
    }
}
