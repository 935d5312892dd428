//! Registry of currencies the gateway settles in.
//!
//! Membership here is a standalone capability. Request validation only
//! checks the three-character shape of a currency code and never consults
//! this list; callers that want the stricter check opt in with
//! [`ensure_supported_currency`].

use crate::validate::ValidationError;

/// Currencies the gateway settles in, upper-case ISO 4217 codes.
pub const SUPPORTED_CURRENCIES: [&str; 20] = [
    "USD", "EUR", "GBP", "CAD", "AUD", "JPY", "CHF", "SGD", "HKD", "SEK", "NOK", "DKK", "PLN",
    "CZK", "HUF", "ILS", "MXN", "BRL", "ARS", "CLP",
];

/// Returns the supported currency codes.
pub fn supported_currencies() -> &'static [&'static str] {
    &SUPPORTED_CURRENCIES
}

/// Case-insensitive membership test against [`SUPPORTED_CURRENCIES`].
/// The empty string is not a currency and returns `false`.
pub fn is_supported_currency(code: &str) -> bool {
    SUPPORTED_CURRENCIES
        .iter()
        .any(|supported| supported.eq_ignore_ascii_case(code))
}

/// Opt-in strict check returning
/// [`ValidationError::UnsupportedCurrency`] for codes outside the list.
pub fn ensure_supported_currency(code: &str) -> Result<(), ValidationError> {
    if is_supported_currency(code) {
        Ok(())
    } else {
        Err(ValidationError::UnsupportedCurrency {
            code: code.to_string(),
        })
    }
}
