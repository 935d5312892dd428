//! Core types and pre-flight checks for the Payrail payment API.
//!
//! This crate holds everything about talking to the Payrail gateway that
//! does not touch the network: the domain records exchanged with the API,
//! the validation rules applied before a request is sent, the supported
//! currency registry, and the query-string encoding for list and search
//! operations. The heavy lifting (fraud scoring, settlement, card
//! processing) happens on the gateway; this side of the wire only decides
//! whether a request is well-formed and how it looks in transit.
//!
//! The companion `payrail-reqwest` crate layers the HTTP transport and
//! the per-resource service calls on top of these types.
//!
//! # Modules
//!
//! - [`types`] — Request and response records for payments, tokens,
//!   transactions, and merchant reporting.
//! - [`validate`] — Pure validators returning a classified
//!   [`ValidationError`] verdict per request family.
//! - [`currency`] — The fixed supported-currency registry and its
//!   standalone membership check.
//! - [`query`] — Deterministic query-parameter encoding for filter
//!   records.
//! - [`util`] — Small helpers, currently amount truncation.
//!
//! # Example
//!
//! ```rust
//! use payrail::types::PaymentRequest;
//! use payrail::validate::validate_payment_request;
//!
//! let request = PaymentRequest {
//!     amount: 100.0,
//!     currency: "USD".to_string(),
//!     merchant_id: "merchant_123".to_string(),
//!     card_token: Some("token_123".to_string()),
//!     ..Default::default()
//! };
//! assert!(validate_payment_request(&request).is_ok());
//! ```

pub mod currency;
pub mod query;
pub mod types;
pub mod util;
pub mod validate;

pub use validate::ValidationError;
