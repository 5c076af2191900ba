//! Order total computation and currency display.
//!
//! The total is always derived from its inputs:
//!
//! ```text
//! total = base_quantity * unit_price + sum(extra.quantity * extra.value)
//! ```
//!
//! Display formatting is a separate, pure step behind [`CurrencyFormatter`].
//! The raw [`Price`] is what flows into an order payload, never the string.

use rust_decimal::{Decimal, RoundingStrategy};

use super::money::Price;

/// Compute the order total from the base quantity, base unit price, and
/// `(quantity, unit value)` pairs for every extra.
///
/// Returns `None` if the total does not fit in a [`Price`].
#[must_use]
pub fn compute_total<I>(base_quantity: u32, unit_price: Price, extras: I) -> Option<Price>
where
    I: IntoIterator<Item = (u32, Price)>,
{
    let base = Decimal::from(base_quantity).checked_mul(unit_price)?;
    extras.into_iter().try_fold(base, |total, (quantity, value)| {
        total.checked_add(Decimal::from(quantity).checked_mul(value)?)
    })
}

/// Turns an amount into a display string.
pub trait CurrencyFormatter: Send + Sync {
    fn format(&self, amount: Price) -> String;
}

/// Locale-style formatter: symbol prefix, grouped thousands, fixed decimals.
///
/// The default matches Brazilian real formatting, e.g. `R$ 1.234,50`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleFormatter {
    symbol: String,
    decimal_separator: String,
    thousands_separator: String,
    decimals: u32,
}

impl LocaleFormatter {
    #[must_use]
    pub fn new(
        symbol: impl Into<String>,
        decimal_separator: impl Into<String>,
        thousands_separator: impl Into<String>,
        decimals: u32,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            decimal_separator: decimal_separator.into(),
            thousands_separator: thousands_separator.into(),
            decimals,
        }
    }

    fn group_thousands(&self, digits: &str) -> String {
        let len = digits.len();
        let mut out = String::with_capacity(len + len / 3 * self.thousands_separator.len());
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (len - i) % 3 == 0 {
                out.push_str(&self.thousands_separator);
            }
            out.push(ch);
        }
        out
    }
}

impl Default for LocaleFormatter {
    fn default() -> Self {
        Self::new("R$", ",", ".", 2)
    }
}

impl CurrencyFormatter for LocaleFormatter {
    fn format(&self, amount: Price) -> String {
        let rounded =
            amount.round_dp_with_strategy(self.decimals, RoundingStrategy::MidpointAwayFromZero);
        let negative = rounded.is_sign_negative() && !rounded.is_zero();

        let mut magnitude = rounded.abs();
        magnitude.rescale(self.decimals);
        let text = magnitude.to_string();
        let (integer, fraction) = match text.split_once('.') {
            Some((i, f)) => (i, Some(f)),
            None => (text.as_str(), None),
        };

        let mut out = String::new();
        if negative {
            out.push('-');
        }
        out.push_str(&self.symbol);
        out.push(' ');
        out.push_str(&self.group_thousands(integer));
        if let Some(fraction) = fraction {
            out.push_str(&self.decimal_separator);
            out.push_str(fraction);
        }
        out
    }
}
