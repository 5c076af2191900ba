//! Currency display settings.

use serde::Deserialize;

use crate::domain::LocaleFormatter;
use crate::error::ConfigError;

/// Most fraction digits a currency may be configured with.
const MAX_DECIMALS: u32 = 6;

/// How totals and prices are rendered for display.
///
/// Defaults to Brazilian real: `R$ 1.234,50`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CurrencyConfig {
    pub symbol: String,
    pub decimal_separator: String,
    pub thousands_separator: String,
    pub decimals: u32,
}

impl CurrencyConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.decimals > MAX_DECIMALS {
            return Err(ConfigError::InvalidValue {
                field: "decimals",
                reason: format!("must be at most {MAX_DECIMALS}, got {}", self.decimals),
            });
        }
        if self.decimal_separator == self.thousands_separator {
            return Err(ConfigError::InvalidValue {
                field: "decimal_separator",
                reason: "must differ from thousands_separator".into(),
            });
        }
        Ok(())
    }

    /// Build the formatter these settings describe.
    #[must_use]
    pub fn formatter(&self) -> LocaleFormatter {
        LocaleFormatter::new(
            self.symbol.clone(),
            self.decimal_separator.clone(),
            self.thousands_separator.clone(),
            self.decimals,
        )
    }
}

impl Default for CurrencyConfig {
    fn default() -> Self {
        Self {
            symbol: "R$".into(),
            decimal_separator: ",".into(),
            thousands_separator: ".".into(),
            decimals: 2,
        }
    }
}
