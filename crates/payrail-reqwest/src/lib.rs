//! Reqwest-based client for the [Payrail](https://payrail.io) payment API.
//!
//! This crate wires the pure core from the `payrail` crate to an actual
//! HTTP transport. Each resource family gets a small service handle off
//! the central [`Client`]: payments, card tokens, transactions, and
//! merchant reporting. Every call validates its request first, performs a
//! single HTTP round trip, and decodes the JSON response into the typed
//! records from `payrail::types`.
//!
//! ## Quickstart
//!
//! ```rust,no_run
//! use payrail::types::PaymentRequest;
//! use payrail_reqwest::{Client, Config};
//!
//! # async fn run() -> Result<(), payrail_reqwest::Error> {
//! let client = Client::new(Config::new("api_key", "api_secret"))?;
//!
//! let request = PaymentRequest {
//!     amount: 100.0,
//!     currency: "USD".to_string(),
//!     merchant_id: "merchant_123".to_string(),
//!     card_token: Some("token_123".to_string()),
//!     ..Default::default()
//! };
//! let payment = client.payments().create(&request).await?;
//! println!("payment {} is {}", payment.id, payment.status);
//! # Ok(())
//! # }
//! ```
//!
//! ## Error tiers
//!
//! [`Error`] separates what went wrong: [`Error::Validation`] means the
//! request never left the process; [`Error::Api`] carries the gateway's
//! structured error response; [`Error::Http`] and [`Error::Decode`]
//! cover transport and decoding failures. There is no automatic retry at
//! any tier.

mod client;
mod config;
mod merchants;
mod payments;
mod tokens;
mod transactions;

pub use client::{ApiError, Client, Error, VERSION};
pub use config::{Config, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use merchants::Merchants;
pub use payments::Payments;
pub use tokens::Tokens;
pub use transactions::Transactions;
