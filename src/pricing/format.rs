//! Currency formatting for estimate totals

use crate::core::{CurrencyFormat, SymbolPosition};

impl CurrencyFormat {
    /// Format a whole-unit amount, e.g. `23000` -> `"$23,000"`
    pub fn format(&self, amount: u64) -> String {
        let number = group_digits(amount, &self.grouping_separator);
        let space = if self.spaced { " " } else { "" };

        match self.position {
            SymbolPosition::Prefix => format!("{}{}{}", self.symbol, space, number),
            SymbolPosition::Suffix => format!("{}{}{}", number, space, self.symbol),
        }
    }
}

/// Insert `separator` between every group of three digits, counting from the right
fn group_digits(amount: u64, separator: &str) -> String {
    let digits = amount.to_string();
    let len = digits.len();
    let mut out = String::with_capacity(len + (len / 3) * separator.len());

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(ch);
    }

    out
}
