//! User settings for Mahana Budget
//!
//! Holds the display currency, the first-run budget setup flag and the
//! month overflow policy used when resolving budget cycles.

use serde::{Deserialize, Serialize};

use crate::error::{MahanaError, MahanaResult};
use crate::models::MonthOverflow;

/// Supported currencies as (code, symbol)
///
/// Only the symbol changes with the currency; amounts are never converted.
pub const CURRENCIES: &[(&str, &str)] = &[
    ("PKR", "₨"),
    ("USD", "$"),
    ("EUR", "€"),
    ("GBP", "£"),
    ("INR", "₹"),
    ("JPY", "¥"),
    ("AED", "د.إ"),
];

/// Look up the symbol for a currency code (case-insensitive)
pub fn currency_symbol(code: &str) -> Option<&'static str> {
    let code = code.trim();
    CURRENCIES
        .iter()
        .find(|(c, _)| c.eq_ignore_ascii_case(code))
        .map(|(_, symbol)| *symbol)
}

/// User settings for Mahana Budget
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// ISO currency code, e.g. "PKR"
    #[serde(default = "default_currency_code")]
    pub currency_code: String,

    /// Symbol printed in front of amounts
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,

    /// Whether the first-run budget setup has been completed or dismissed
    #[serde(default)]
    pub budget_setup_completed: bool,

    /// How cycle days missing from short months are handled
    #[serde(default)]
    pub month_overflow: MonthOverflow,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency_code() -> String {
    "PKR".to_string()
}

fn default_currency_symbol() -> String {
    "₨".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_code: default_currency_code(),
            currency_symbol: default_currency_symbol(),
            budget_setup_completed: false,
            month_overflow: MonthOverflow::default(),
        }
    }
}

impl Settings {
    /// Switch the display currency
    pub fn set_currency(&mut self, code: &str) -> MahanaResult<()> {
        let symbol = currency_symbol(code).ok_or_else(|| {
            MahanaError::Validation(format!(
                "Unsupported currency '{}'. Supported: {}",
                code.trim(),
                CURRENCIES
                    .iter()
                    .map(|(c, _)| *c)
                    .collect::<Vec<_>>()
                    .join(", ")
            ))
        })?;

        self.currency_code = code.trim().to_uppercase();
        self.currency_symbol = symbol.to_string();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency_code, "PKR");
        assert_eq!(settings.currency_symbol, "₨");
        assert!(!settings.budget_setup_completed);
        assert_eq!(settings.month_overflow, MonthOverflow::Roll);
    }

    #[test]
    fn test_set_currency() {
        let mut settings = Settings::default();
        settings.set_currency("usd").unwrap();
        assert_eq!(settings.currency_code, "USD");
        assert_eq!(settings.currency_symbol, "$");
    }

    #[test]
    fn test_unknown_currency_leaves_settings_unchanged() {
        let mut settings = Settings::default();
        let err = settings.set_currency("XYZ").unwrap_err();
        assert!(err.is_validation());
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"currency_code":"EUR"}"#).unwrap();
        assert_eq!(settings.currency_code, "EUR");
        assert_eq!(settings.currency_symbol, "₨");
        assert_eq!(settings.schema_version, 1);
    }
}
