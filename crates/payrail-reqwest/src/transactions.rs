//! Transaction operations: authorize, fetch, capture, void, refund,
//! list, and search.

use payrail::query::{QueryParams, QueryPairs};
use payrail::types::{
    CaptureTransactionRequest, ListTransactionsRequest, ListTransactionsResponse,
    RefundTransactionRequest, RefundTransactionResponse, SearchTransactionsRequest,
    TransactionRequest, TransactionResponse, VoidTransactionRequest,
};
use payrail::validate::{validate_search_request, validate_transaction_request};

use crate::client::{Client, Error};

/// Transaction operations on a [`Client`]. Obtained via
/// [`Client::transactions`].
pub struct Transactions<'a> {
    client: &'a Client,
}

impl Client {
    /// Transaction operations.
    pub fn transactions(&self) -> Transactions<'_> {
        Transactions { client: self }
    }
}

impl Transactions<'_> {
    /// Authorizes a transaction.
    ///
    /// The request is validated first; a validation failure returns
    /// [`Error::Validation`] without touching the network. Whether funds
    /// are captured right away depends on the request's capture mode.
    pub async fn authorize(
        &self,
        request: &TransactionRequest,
    ) -> Result<TransactionResponse, Error> {
        validate_transaction_request(request)?;
        self.client.post("/transactions/authorize", request).await
    }

    /// Fetches a transaction by id.
    pub async fn get(&self, transaction_id: &str) -> Result<TransactionResponse, Error> {
        self.client
            .get(&format!("/transactions/{transaction_id}"), &QueryPairs::new())
            .await
    }

    /// Fetches the current status of a transaction.
    pub async fn status(&self, transaction_id: &str) -> Result<TransactionResponse, Error> {
        self.client
            .get(
                &format!("/transactions/{transaction_id}/status"),
                &QueryPairs::new(),
            )
            .await
    }

    /// Captures a previously authorized transaction. An all-default
    /// request captures the full authorized amount.
    pub async fn capture(
        &self,
        transaction_id: &str,
        request: &CaptureTransactionRequest,
    ) -> Result<TransactionResponse, Error> {
        self.client
            .post(&format!("/transactions/{transaction_id}/capture"), request)
            .await
    }

    /// Voids a previously authorized transaction.
    pub async fn void(
        &self,
        transaction_id: &str,
        request: &VoidTransactionRequest,
    ) -> Result<TransactionResponse, Error> {
        self.client
            .post(&format!("/transactions/{transaction_id}/void"), request)
            .await
    }

    /// Refunds a captured transaction.
    pub async fn refund(
        &self,
        transaction_id: &str,
        request: &RefundTransactionRequest,
    ) -> Result<RefundTransactionResponse, Error> {
        self.client
            .post(&format!("/transactions/{transaction_id}/refund"), request)
            .await
    }

    /// Lists transactions matching the filter.
    pub async fn list(
        &self,
        request: &ListTransactionsRequest,
    ) -> Result<ListTransactionsResponse, Error> {
        self.client
            .get("/transactions", &request.query_params())
            .await
    }

    /// Searches transactions by free text.
    ///
    /// The query string is required; an empty one returns
    /// [`Error::Validation`] without touching the network.
    pub async fn search(
        &self,
        request: &SearchTransactionsRequest,
    ) -> Result<ListTransactionsResponse, Error> {
        validate_search_request(request)?;
        self.client
            .get("/transactions/search", &request.query_params())
            .await
    }
}
