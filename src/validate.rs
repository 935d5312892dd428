//! Pre-flight validation of caller-constructed requests.
//!
//! Every check here is a pure decision over an in-memory record: no I/O,
//! no clock, no mutation of the input. A request that fails validation is
//! never sent; the first failing check in the documented sequence is the
//! one reported, so verdicts are reproducible.
//!
//! Amount, currency, and merchant checks are shape checks only. In
//! particular the currency check accepts any three-character code; the
//! supported-currency allow-list in [`crate::currency`] is a separate
//! capability that these validators deliberately do not consult.

use regex::Regex;
use std::sync::LazyLock;

use crate::types::{
    CAPTURE_MODE_AUTO, CAPTURE_MODE_MANUAL, CardDetails, PaymentRequest, SearchTransactionsRequest,
    TokenRequest, TransactionRequest,
};

/// Lowest expiry year accepted. Policy bound, not a calendar check: cards
/// expiring before 2020 are rejected without consulting wall-clock time.
pub const MIN_EXPIRY_YEAR: u16 = 2020;

/// Highest expiry year accepted.
pub const MAX_EXPIRY_YEAR: u16 = 2099;

static CARD_NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{13,19}$").expect("valid card number regex"));

/// A classified reason a request failed pre-flight validation.
///
/// Each kind is a distinct variant so callers can match on the failure
/// instead of parsing messages. The display string carries the
/// human-readable detail.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The card number is not 13 to 19 decimal digits once space
    /// characters are stripped.
    #[error("invalid card number")]
    InvalidCardNumber,
    /// The expiry month or year is outside the accepted range.
    #[error("invalid expiry date: {detail}")]
    InvalidExpiryDate { detail: &'static str },
    /// The CVV is not 3 or 4 characters long. Content is not inspected;
    /// any 3 or 4 character string is accepted.
    #[error("invalid CVV")]
    InvalidCvv,
    /// The card holder name is blank.
    #[error("card holder name cannot be empty")]
    EmptyHolderName,
    /// Card details embedded in a payment or transaction request failed
    /// validation. The underlying verdict is preserved.
    #[error("invalid card details: {0}")]
    InvalidCardDetails(Box<ValidationError>),
    /// The amount is zero or negative.
    #[error("invalid amount")]
    InvalidAmount,
    /// The currency code is empty or not exactly three characters.
    #[error("invalid currency: {detail}")]
    InvalidCurrency { detail: &'static str },
    /// The currency code is well-formed but not in the supported list.
    /// Produced only by [`crate::currency::ensure_supported_currency`],
    /// never by the request validators.
    #[error("unsupported currency: {code}")]
    UnsupportedCurrency { code: String },
    /// The merchant identifier is blank.
    #[error("merchant id cannot be empty")]
    EmptyMerchantId,
    /// Neither a card token nor card details were supplied.
    #[error("either a card token or card details must be provided")]
    MissingPaymentMethod,
    /// The capture mode is non-empty and neither `auto` nor `manual`.
    #[error("capture mode must be \"auto\" or \"manual\"")]
    InvalidCaptureMode,
    /// A token creation request has no card details.
    #[error("card details are required for token creation")]
    MissingCardDetails,
    /// A search request has an empty query string.
    #[error("search query cannot be empty")]
    MissingSearchQuery,
}

/// Checks card details: number shape, expiry range, CVV length, holder
/// name. Checks run in that order and the first failure wins.
pub fn validate_card_details(card: &CardDetails) -> Result<(), ValidationError> {
    let number = card.number.replace(' ', "");
    if !CARD_NUMBER_RE.is_match(&number) {
        return Err(ValidationError::InvalidCardNumber);
    }

    if !(1..=12).contains(&card.expiry_month) {
        return Err(ValidationError::InvalidExpiryDate {
            detail: "month must be 1-12",
        });
    }
    if !(MIN_EXPIRY_YEAR..=MAX_EXPIRY_YEAR).contains(&card.expiry_year) {
        return Err(ValidationError::InvalidExpiryDate {
            detail: "year must be 2020-2099",
        });
    }

    if card.cvv.len() < 3 || card.cvv.len() > 4 {
        return Err(ValidationError::InvalidCvv);
    }

    if card.holder_name.trim().is_empty() {
        return Err(ValidationError::EmptyHolderName);
    }

    Ok(())
}

/// Checks a payment request before it is sent.
///
/// Sequence: amount, currency shape, merchant id, payment method
/// presence, then the embedded card details when present. A card failure
/// is reported as [`ValidationError::InvalidCardDetails`] wrapping the
/// specific verdict.
pub fn validate_payment_request(request: &PaymentRequest) -> Result<(), ValidationError> {
    validate_charge(
        request.amount,
        &request.currency,
        &request.merchant_id,
        request.card_token.as_deref(),
        request.card_details.as_ref(),
    )
}

/// Checks a transaction authorization request before it is sent.
///
/// Runs the same sequence as [`validate_payment_request`], then checks the
/// capture mode against the two accepted values. An empty capture mode is
/// "gateway default" and passes.
pub fn validate_transaction_request(request: &TransactionRequest) -> Result<(), ValidationError> {
    validate_charge(
        request.amount,
        &request.currency,
        &request.merchant_id,
        request.card_token.as_deref(),
        request.card_details.as_ref(),
    )?;

    match request.capture_mode.as_str() {
        "" | CAPTURE_MODE_AUTO | CAPTURE_MODE_MANUAL => Ok(()),
        _ => Err(ValidationError::InvalidCaptureMode),
    }
}

/// Checks a token creation request: card details must be present, then
/// the card checks apply as-is. The card verdict is returned unwrapped.
pub fn validate_token_request(request: &TokenRequest) -> Result<(), ValidationError> {
    let card = request
        .card_details
        .as_ref()
        .ok_or(ValidationError::MissingCardDetails)?;
    validate_card_details(card)
}

/// Checks a transaction search request: the query string must be
/// non-empty. Filter fields are always optional.
pub fn validate_search_request(request: &SearchTransactionsRequest) -> Result<(), ValidationError> {
    if request.query.is_empty() {
        return Err(ValidationError::MissingSearchQuery);
    }
    Ok(())
}

/// The charge checks shared by payment and transaction requests, in their
/// reporting order.
fn validate_charge(
    amount: f64,
    currency: &str,
    merchant_id: &str,
    card_token: Option<&str>,
    card_details: Option<&CardDetails>,
) -> Result<(), ValidationError> {
    if amount <= 0.0 {
        return Err(ValidationError::InvalidAmount);
    }

    if currency.is_empty() {
        return Err(ValidationError::InvalidCurrency {
            detail: "currency cannot be empty",
        });
    }
    if currency.chars().count() != 3 {
        return Err(ValidationError::InvalidCurrency {
            detail: "currency must be 3 characters",
        });
    }

    if merchant_id.trim().is_empty() {
        return Err(ValidationError::EmptyMerchantId);
    }

    // An empty card token counts as absent.
    let has_token = card_token.is_some_and(|token| !token.is_empty());
    if !has_token && card_details.is_none() {
        return Err(ValidationError::MissingPaymentMethod);
    }

    if let Some(card) = card_details {
        validate_card_details(card)
            .map_err(|err| ValidationError::InvalidCardDetails(Box::new(err)))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_card() -> CardDetails {
        CardDetails {
            number: "4111111111111111".to_string(),
            expiry_month: 12,
            expiry_year: 2025,
            cvv: "123".to_string(),
            holder_name: "John Doe".to_string(),
        }
    }

    fn token_payment() -> PaymentRequest {
        PaymentRequest {
            amount: 100.0,
            currency: "USD".to_string(),
            merchant_id: "merchant_123".to_string(),
            card_token: Some("token_123".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn accepts_valid_card() {
        assert_eq!(validate_card_details(&valid_card()), Ok(()));
    }

    #[test]
    fn strips_spaces_from_card_number() {
        let card = CardDetails {
            number: "4111 1111 1111 1111".to_string(),
            ..valid_card()
        };
        assert_eq!(validate_card_details(&card), Ok(()));
    }

    #[test]
    fn rejects_card_number_outside_digit_range() {
        for number in ["123", "4111111111111111123456", "4111-1111-1111-1111", ""] {
            let card = CardDetails {
                number: number.to_string(),
                ..valid_card()
            };
            assert_eq!(
                validate_card_details(&card),
                Err(ValidationError::InvalidCardNumber),
                "number {number:?} should be rejected"
            );
        }
    }

    #[test]
    fn expiry_month_bounds_are_inclusive() {
        for month in [1, 12] {
            let card = CardDetails {
                expiry_month: month,
                ..valid_card()
            };
            assert_eq!(validate_card_details(&card), Ok(()));
        }
        for month in [0, 13] {
            let card = CardDetails {
                expiry_month: month,
                ..valid_card()
            };
            assert_eq!(
                validate_card_details(&card),
                Err(ValidationError::InvalidExpiryDate {
                    detail: "month must be 1-12"
                })
            );
        }
    }

    #[test]
    fn expiry_year_bounds_are_inclusive() {
        for year in [2020, 2099] {
            let card = CardDetails {
                expiry_year: year,
                ..valid_card()
            };
            assert_eq!(validate_card_details(&card), Ok(()));
        }
        for year in [2019, 2100] {
            let card = CardDetails {
                expiry_year: year,
                ..valid_card()
            };
            assert_eq!(
                validate_card_details(&card),
                Err(ValidationError::InvalidExpiryDate {
                    detail: "year must be 2020-2099"
                })
            );
        }
    }

    #[test]
    fn cvv_is_checked_by_length_only() {
        let card = CardDetails {
            cvv: "12".to_string(),
            ..valid_card()
        };
        assert_eq!(validate_card_details(&card), Err(ValidationError::InvalidCvv));

        let card = CardDetails {
            cvv: "12345".to_string(),
            ..valid_card()
        };
        assert_eq!(validate_card_details(&card), Err(ValidationError::InvalidCvv));

        // Digit content is intentionally not inspected.
        let card = CardDetails {
            cvv: "abcd".to_string(),
            ..valid_card()
        };
        assert_eq!(validate_card_details(&card), Ok(()));
    }

    #[test]
    fn rejects_blank_holder_name() {
        for name in ["", "   "] {
            let card = CardDetails {
                holder_name: name.to_string(),
                ..valid_card()
            };
            assert_eq!(
                validate_card_details(&card),
                Err(ValidationError::EmptyHolderName)
            );
        }
    }

    #[test]
    fn accepts_payment_with_token_or_card() {
        assert_eq!(validate_payment_request(&token_payment()), Ok(()));

        let request = PaymentRequest {
            card_token: None,
            card_details: Some(valid_card()),
            ..token_payment()
        };
        assert_eq!(validate_payment_request(&request), Ok(()));

        // Both present is allowed; the gateway decides precedence.
        let request = PaymentRequest {
            card_details: Some(valid_card()),
            ..token_payment()
        };
        assert_eq!(validate_payment_request(&request), Ok(()));
    }

    #[test]
    fn rejects_non_positive_amount() {
        for amount in [0.0, -0.01, -100.0] {
            let request = PaymentRequest {
                amount,
                ..token_payment()
            };
            assert_eq!(
                validate_payment_request(&request),
                Err(ValidationError::InvalidAmount)
            );
        }
    }

    #[test]
    fn rejects_malformed_currency_regardless_of_content() {
        let request = PaymentRequest {
            currency: String::new(),
            ..token_payment()
        };
        assert_eq!(
            validate_payment_request(&request),
            Err(ValidationError::InvalidCurrency {
                detail: "currency cannot be empty"
            })
        );

        for currency in ["US", "USDX", "A"] {
            let request = PaymentRequest {
                currency: currency.to_string(),
                ..token_payment()
            };
            assert_eq!(
                validate_payment_request(&request),
                Err(ValidationError::InvalidCurrency {
                    detail: "currency must be 3 characters"
                }),
                "currency {currency:?} should be rejected"
            );
        }
    }

    #[test]
    fn unsupported_but_well_formed_currency_passes() {
        // The allow-list is a standalone capability; request validation
        // only checks the three-character shape.
        let request = PaymentRequest {
            currency: "XXX".to_string(),
            ..token_payment()
        };
        assert_eq!(validate_payment_request(&request), Ok(()));
    }

    #[test]
    fn rejects_blank_merchant_id() {
        for merchant_id in ["", "  "] {
            let request = PaymentRequest {
                merchant_id: merchant_id.to_string(),
                ..token_payment()
            };
            assert_eq!(
                validate_payment_request(&request),
                Err(ValidationError::EmptyMerchantId)
            );
        }
    }

    #[test]
    fn rejects_missing_payment_method() {
        let request = PaymentRequest {
            card_token: None,
            ..token_payment()
        };
        assert_eq!(
            validate_payment_request(&request),
            Err(ValidationError::MissingPaymentMethod)
        );

        // An empty token string counts as absent.
        let request = PaymentRequest {
            card_token: Some(String::new()),
            ..token_payment()
        };
        assert_eq!(
            validate_payment_request(&request),
            Err(ValidationError::MissingPaymentMethod)
        );
    }

    #[test]
    fn wraps_embedded_card_failure_and_keeps_the_kind() {
        let request = PaymentRequest {
            card_token: None,
            card_details: Some(CardDetails {
                cvv: "12".to_string(),
                ..valid_card()
            }),
            ..token_payment()
        };
        let err = validate_payment_request(&request).unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidCardDetails(Box::new(ValidationError::InvalidCvv))
        );
        assert_eq!(err.to_string(), "invalid card details: invalid CVV");
    }

    #[test]
    fn first_failing_check_wins() {
        // Amount and currency are both invalid; amount is checked first.
        let request = PaymentRequest {
            amount: -1.0,
            currency: "U".to_string(),
            merchant_id: String::new(),
            ..Default::default()
        };
        assert_eq!(
            validate_payment_request(&request),
            Err(ValidationError::InvalidAmount)
        );
    }

    fn token_transaction() -> TransactionRequest {
        TransactionRequest {
            amount: 100.0,
            currency: "USD".to_string(),
            merchant_id: "merchant_123".to_string(),
            card_token: Some("token_123".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn transaction_capture_mode_allows_auto_manual_and_empty() {
        for mode in ["", "auto", "manual"] {
            let request = TransactionRequest {
                capture_mode: mode.to_string(),
                ..token_transaction()
            };
            assert_eq!(
                validate_transaction_request(&request),
                Ok(()),
                "capture mode {mode:?} should pass"
            );
        }

        let request = TransactionRequest {
            capture_mode: "invalid".to_string(),
            ..token_transaction()
        };
        assert_eq!(
            validate_transaction_request(&request),
            Err(ValidationError::InvalidCaptureMode)
        );
    }

    #[test]
    fn transaction_shares_the_charge_checks() {
        let request = TransactionRequest {
            amount: 0.0,
            ..token_transaction()
        };
        assert_eq!(
            validate_transaction_request(&request),
            Err(ValidationError::InvalidAmount)
        );

        let request = TransactionRequest {
            card_token: None,
            capture_mode: "invalid".to_string(),
            ..token_transaction()
        };
        // The missing payment method is reported before the capture mode.
        assert_eq!(
            validate_transaction_request(&request),
            Err(ValidationError::MissingPaymentMethod)
        );
    }

    #[test]
    fn transaction_with_full_card_and_checks_passes() {
        let request = TransactionRequest {
            card_token: None,
            card_details: Some(valid_card()),
            capture_mode: CAPTURE_MODE_MANUAL.to_string(),
            cvv_check: true,
            avs_check: true,
            ..token_transaction()
        };
        assert_eq!(validate_transaction_request(&request), Ok(()));
    }

    #[test]
    fn token_request_requires_card_details() {
        let request = TokenRequest::default();
        assert_eq!(
            validate_token_request(&request),
            Err(ValidationError::MissingCardDetails)
        );
    }

    #[test]
    fn token_request_defers_to_card_checks_unwrapped() {
        let request = TokenRequest {
            card_details: Some(CardDetails {
                number: "123".to_string(),
                ..valid_card()
            }),
            ..Default::default()
        };
        assert_eq!(
            validate_token_request(&request),
            Err(ValidationError::InvalidCardNumber)
        );

        let request = TokenRequest {
            card_details: Some(valid_card()),
            single_use: true,
            ..Default::default()
        };
        assert_eq!(validate_token_request(&request), Ok(()));
    }

    #[test]
    fn search_request_requires_a_query() {
        let request = SearchTransactionsRequest::default();
        assert_eq!(
            validate_search_request(&request),
            Err(ValidationError::MissingSearchQuery)
        );

        let request = SearchTransactionsRequest {
            query: "txn_123".to_string(),
            ..Default::default()
        };
        assert_eq!(validate_search_request(&request), Ok(()));
    }

    #[test]
    fn validation_is_deterministic_and_does_not_mutate() {
        let request = token_payment();
        let snapshot = request.clone();
        let first = validate_payment_request(&request);
        let second = validate_payment_request(&request);
        assert_eq!(first, second);
        assert_eq!(request, snapshot);
    }
}
