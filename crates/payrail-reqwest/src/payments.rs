//! Payment operations: create, fetch, capture, void, refund.

use payrail::query::QueryPairs;
use payrail::types::{PaymentRequest, PaymentResponse, RefundRequest, RefundResponse};
use payrail::validate::validate_payment_request;
use serde::Serialize;

use crate::client::{Client, Error};

/// Payment operations on a [`Client`]. Obtained via [`Client::payments`].
pub struct Payments<'a> {
    client: &'a Client,
}

impl Client {
    /// Payment operations.
    pub fn payments(&self) -> Payments<'_> {
        Payments { client: self }
    }
}

#[derive(Serialize)]
struct CaptureBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    amount: Option<f64>,
}

impl Payments<'_> {
    /// Creates a payment.
    ///
    /// The request is validated first; a validation failure returns
    /// [`Error::Validation`] without touching the network.
    pub async fn create(&self, request: &PaymentRequest) -> Result<PaymentResponse, Error> {
        validate_payment_request(request)?;
        self.client.post("/payments", request).await
    }

    /// Fetches a payment by id.
    pub async fn get(&self, payment_id: &str) -> Result<PaymentResponse, Error> {
        self.client
            .get(&format!("/payments/{payment_id}"), &QueryPairs::new())
            .await
    }

    /// Captures an authorized payment. `None` captures the full
    /// authorized amount.
    pub async fn capture(
        &self,
        payment_id: &str,
        amount: Option<f64>,
    ) -> Result<PaymentResponse, Error> {
        self.client
            .post(&format!("/payments/{payment_id}/capture"), &CaptureBody { amount })
            .await
    }

    /// Voids an authorized payment.
    pub async fn void(&self, payment_id: &str) -> Result<PaymentResponse, Error> {
        self.client
            .post_empty(&format!("/payments/{payment_id}/void"))
            .await
    }

    /// Refunds a settled payment.
    pub async fn refund(&self, request: &RefundRequest) -> Result<RefundResponse, Error> {
        self.client.post("/refunds", request).await
    }
}
