//! Domain types for the Payrail API.
//!
//! Every request and response exchanged with the gateway is a plain value
//! shape defined here. Request records are built by the caller, checked by
//! [`crate::validate`], and serialized as JSON bodies or query strings.
//! Response records are deserialization targets only; the library never
//! constructs them itself.
//!
//! Wire keys are `snake_case`. Optional fields are omitted from the JSON
//! body entirely when absent, never emitted as `null`.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use time::OffsetDateTime;

/// Capture mode value for a [`TransactionRequest`]: the processor captures
/// funds automatically once the authorization succeeds.
pub const CAPTURE_MODE_AUTO: &str = "auto";

/// Capture mode value for a [`TransactionRequest`]: the authorization is
/// held until an explicit follow-up capture call.
pub const CAPTURE_MODE_MANUAL: &str = "manual";

/// Raw card information supplied when no card token is available.
///
/// The number is kept as a string so embedded spaces survive until
/// validation strips them. Expiry is an absolute month/year pair; the
/// accepted year range is a policy window, not a calendar check.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CardDetails {
    /// Card number, 13 to 19 decimal digits once spaces are removed.
    pub number: String,
    /// Expiry month, 1 through 12.
    pub expiry_month: u8,
    /// Expiry year as a full four-digit year.
    pub expiry_year: u16,
    /// Card verification value, 3 or 4 characters.
    pub cvv: String,
    /// Name of the card holder as printed on the card.
    pub holder_name: String,
}

/// Postal address attached to a payment or merchant record.
///
/// Free-form; the gateway interprets the fields, this library never
/// validates them on their own.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub line1: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line2: Option<String>,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: String,
}

/// Request to create a payment.
///
/// Exactly one of `card_token` or `card_details` must carry a value;
/// supplying both is accepted and the gateway decides precedence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentRequest {
    /// Amount in major currency units. Must be strictly positive.
    pub amount: f64,
    /// Three-letter currency code.
    pub currency: String,
    /// Identifier of the merchant receiving the payment.
    pub merchant_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    /// Opaque token standing in for raw card details.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_details: Option<CardDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub billing_address: Option<Address>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<Address>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub metadata: HashMap<String, String>,
}

/// A payment as reported by the gateway.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentResponse {
    pub id: String,
    pub status: String,
    pub amount: f64,
    pub currency: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub reference: String,
    #[serde(default)]
    pub transaction_id: String,
    #[serde(default)]
    pub authorization_code: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(
        default,
        with = "time::serde::rfc3339::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub processed_at: Option<OffsetDateTime>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub metadata: HashMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure_reason: Option<String>,
}

/// Request to refund a settled payment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RefundRequest {
    /// Payment to refund.
    pub payment_id: String,
    /// Amount to return, in major currency units.
    pub amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}

/// A refund as reported by the gateway.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RefundResponse {
    pub id: String,
    pub payment_id: String,
    pub amount: f64,
    pub currency: String,
    pub status: String,
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub reference: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub processed_at: OffsetDateTime,
}

/// Request to exchange raw card details for a reusable token.
///
/// `card_details` is required; the option only exists so a missing value
/// is reported as a validation verdict instead of a construction error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TokenRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_details: Option<CardDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// When set, the token is invalidated after its first use.
    #[serde(default, skip_serializing_if = "is_false")]
    pub single_use: bool,
}

/// A stored card token as reported by the gateway.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub id: String,
    pub token: String,
    #[serde(default)]
    pub customer_id: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub card_last4: String,
    #[serde(default)]
    pub card_brand: String,
    pub expiry_month: u8,
    pub expiry_year: u16,
    #[serde(default)]
    pub single_use: bool,
    #[serde(default)]
    pub used: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub expires_at: OffsetDateTime,
}

/// Filter parameters for listing stored tokens.
///
/// Empty strings and zero integers mean "unset" and are never emitted as
/// query parameters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListTokensRequest {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub customer_id: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub limit: u32,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub offset: u32,
}

/// A page of stored tokens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListTokensResponse {
    pub tokens: Vec<TokenResponse>,
    #[serde(default)]
    pub total_count: u32,
    #[serde(default)]
    pub has_more: bool,
}

/// Request to authorize a transaction.
///
/// Carries the same charge fields as [`PaymentRequest`] plus the capture
/// mode and the pass-through fraud screening flags. `capture_mode` stays a
/// plain string: the empty string means "gateway default", anything else
/// must be [`CAPTURE_MODE_AUTO`] or [`CAPTURE_MODE_MANUAL`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionRequest {
    /// Amount in major currency units. Must be strictly positive.
    pub amount: f64,
    /// Three-letter currency code.
    pub currency: String,
    /// Identifier of the merchant receiving the payment.
    pub merchant_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_details: Option<CardDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub billing_address: Option<Address>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<Address>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub metadata: HashMap<String, String>,
    /// Empty, [`CAPTURE_MODE_AUTO`], or [`CAPTURE_MODE_MANUAL`].
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub capture_mode: String,
    /// Ask the processor to run its CVV check. Forwarded unmodified.
    #[serde(default, skip_serializing_if = "is_false")]
    pub cvv_check: bool,
    /// Ask the processor to run its address verification check. Forwarded
    /// unmodified.
    #[serde(default, skip_serializing_if = "is_false")]
    pub avs_check: bool,
}

/// A transaction as reported by the gateway.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionResponse {
    pub id: String,
    pub status: String,
    #[serde(rename = "type", default)]
    pub transaction_type: String,
    pub amount: f64,
    pub currency: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub reference: String,
    #[serde(default)]
    pub transaction_id: String,
    #[serde(default)]
    pub authorization_code: String,
    #[serde(default)]
    pub processor_response: String,
    #[serde(default)]
    pub merchant_id: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(
        default,
        with = "time::serde::rfc3339::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub processed_at: Option<OffsetDateTime>,
    #[serde(
        default,
        with = "time::serde::rfc3339::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub expires_at: Option<OffsetDateTime>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub metadata: HashMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure_reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure_code: Option<String>,
    /// Outcome of the processor CVV check, when one ran.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cvv_result: Option<String>,
    /// Outcome of the processor address verification check, when one ran.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avs_result: Option<String>,
}

/// Body for capturing a previously authorized transaction.
///
/// `amount: None` captures the full authorized amount; the key is omitted
/// from the body. `Some(0.0)` is sent as an explicit zero, so the three
/// states {unset, zero, positive} stay distinguishable on the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CaptureTransactionRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub metadata: HashMap<String, String>,
}

/// Body for voiding a previously authorized transaction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VoidTransactionRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub metadata: HashMap<String, String>,
}

/// Body for refunding a captured transaction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RefundTransactionRequest {
    /// Amount to return, in major currency units.
    pub amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub metadata: HashMap<String, String>,
}

/// A transaction refund as reported by the gateway.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RefundTransactionResponse {
    pub id: String,
    pub transaction_id: String,
    pub amount: f64,
    pub currency: String,
    pub status: String,
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub reference: String,
    #[serde(default)]
    pub refund_id: String,
    #[serde(default)]
    pub processor_response: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(
        default,
        with = "time::serde::rfc3339::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub processed_at: Option<OffsetDateTime>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub metadata: HashMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure_reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure_code: Option<String>,
}

/// Filter parameters for listing transactions.
///
/// All fields are optional. Empty strings and zero integers mean "unset"
/// and are never emitted as query parameters. Note that this makes an
/// explicit `limit=0` inexpressible; whether the gateway treats an absent
/// limit the same way is its own contract.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListTransactionsRequest {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub merchant_id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub status: String,
    #[serde(rename = "type", default, skip_serializing_if = "String::is_empty")]
    pub transaction_type: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub start_date: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub end_date: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub reference: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub min_amount: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub max_amount: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub currency: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub limit: u32,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub offset: u32,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub sort_by: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub sort_order: String,
}

/// A page of transactions, shared by the list and search operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListTransactionsResponse {
    pub transactions: Vec<TransactionResponse>,
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub limit: u32,
    #[serde(default)]
    pub offset: u32,
    #[serde(default)]
    pub has_more: bool,
}

/// Free-text search over transactions.
///
/// `query` is required; everything else narrows the search.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchTransactionsRequest {
    pub query: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub merchant_id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub start_date: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub end_date: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub limit: u32,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub offset: u32,
}

/// Merchant account details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MerchantInfo {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    #[serde(default)]
    pub business_type: String,
    pub status: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

/// Per-day transaction totals for a merchant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionSummary {
    pub date: String,
    pub total_amount: f64,
    pub total_count: u32,
    pub successful_count: u32,
    pub failed_count: u32,
    pub currency: String,
}

/// A settlement batch paid out to a merchant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettlementInfo {
    pub id: String,
    pub merchant_id: String,
    pub amount: f64,
    pub currency: String,
    pub status: String,
    #[serde(with = "time::serde::rfc3339")]
    pub settled_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(default)]
    pub reference: String,
}

fn is_false(value: &bool) -> bool {
    !*value
}

fn is_zero(value: &u32) -> bool {
    *value == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payment_request_omits_absent_optionals() {
        let request = PaymentRequest {
            amount: 100.0,
            currency: "USD".to_string(),
            merchant_id: "merchant_123".to_string(),
            card_token: Some("token_123".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["amount"], 100.0);
        assert_eq!(json["currency"], "USD");
        assert_eq!(json["card_token"], "token_123");
        let object = json.as_object().unwrap();
        assert!(!object.contains_key("description"));
        assert!(!object.contains_key("card_details"));
        assert!(!object.contains_key("billing_address"));
        assert!(!object.contains_key("metadata"));
        assert!(!json.to_string().contains("null"));
    }

    #[test]
    fn transaction_request_omits_empty_capture_mode_and_false_flags() {
        let request = TransactionRequest {
            amount: 50.0,
            currency: "USD".to_string(),
            merchant_id: "merchant_123".to_string(),
            card_token: Some("token_123".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(&request).unwrap();
        let object = json.as_object().unwrap();
        assert!(!object.contains_key("capture_mode"));
        assert!(!object.contains_key("cvv_check"));
        assert!(!object.contains_key("avs_check"));

        let request = TransactionRequest {
            capture_mode: CAPTURE_MODE_MANUAL.to_string(),
            cvv_check: true,
            avs_check: true,
            ..request
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["capture_mode"], "manual");
        assert_eq!(json["cvv_check"], true);
        assert_eq!(json["avs_check"], true);
    }

    #[test]
    fn capture_request_distinguishes_unset_from_zero_amount() {
        let unset = CaptureTransactionRequest::default();
        let json = serde_json::to_value(&unset).unwrap();
        assert!(!json.as_object().unwrap().contains_key("amount"));

        let zero = CaptureTransactionRequest {
            amount: Some(0.0),
            ..Default::default()
        };
        let json = serde_json::to_value(&zero).unwrap();
        assert_eq!(json["amount"], 0.0);
    }

    #[test]
    fn payment_response_deserializes_with_and_without_processed_at() {
        let body = r#"{
            "id": "pay_1",
            "status": "captured",
            "amount": 100.25,
            "currency": "USD",
            "transaction_id": "txn_1",
            "created_at": "2024-03-01T12:00:00Z",
            "processed_at": "2024-03-01T12:00:02Z"
        }"#;
        let payment: PaymentResponse = serde_json::from_str(body).unwrap();
        assert_eq!(payment.id, "pay_1");
        assert_eq!(payment.amount, 100.25);
        assert!(payment.processed_at.is_some());
        assert!(payment.failure_reason.is_none());
        assert_eq!(payment.authorization_code, "");

        let body = r#"{
            "id": "pay_2",
            "status": "pending",
            "amount": 10.0,
            "currency": "EUR",
            "created_at": "2024-03-01T12:00:00Z"
        }"#;
        let payment: PaymentResponse = serde_json::from_str(body).unwrap();
        assert!(payment.processed_at.is_none());
        assert!(payment.metadata.is_empty());
    }

    #[test]
    fn transaction_response_maps_type_key() {
        let body = r#"{
            "id": "txn_1",
            "status": "authorized",
            "type": "authorization",
            "amount": 42.0,
            "currency": "GBP",
            "created_at": "2024-05-06T07:08:09Z"
        }"#;
        let transaction: TransactionResponse = serde_json::from_str(body).unwrap();
        assert_eq!(transaction.transaction_type, "authorization");
        assert!(transaction.expires_at.is_none());

        let json = serde_json::to_value(&transaction).unwrap();
        let object = json.as_object().unwrap();
        assert!(object.contains_key("type"));
        assert!(!object.contains_key("transaction_type"));
    }

    #[test]
    fn merchant_info_allows_missing_address() {
        let body = r#"{
            "id": "merchant_1",
            "name": "Acme Stores",
            "status": "active",
            "created_at": "2023-01-01T00:00:00Z",
            "updated_at": "2024-01-01T00:00:00Z"
        }"#;
        let merchant: MerchantInfo = serde_json::from_str(body).unwrap();
        assert!(merchant.address.is_none());
        assert_eq!(merchant.business_type, "");
    }
}
