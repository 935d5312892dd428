//! Card token operations: create, fetch, delete, list.

use payrail::query::{QueryParams, QueryPairs};
use payrail::types::{ListTokensRequest, ListTokensResponse, TokenRequest, TokenResponse};
use payrail::validate::validate_token_request;

use crate::client::{Client, Error};

/// Token operations on a [`Client`]. Obtained via [`Client::tokens`].
pub struct Tokens<'a> {
    client: &'a Client,
}

impl Client {
    /// Card token operations.
    pub fn tokens(&self) -> Tokens<'_> {
        Tokens { client: self }
    }
}

impl Tokens<'_> {
    /// Exchanges card details for a reusable token.
    ///
    /// The request is validated first; a validation failure returns
    /// [`Error::Validation`] without touching the network.
    pub async fn create(&self, request: &TokenRequest) -> Result<TokenResponse, Error> {
        validate_token_request(request)?;
        self.client.post("/tokens", request).await
    }

    /// Fetches a token by id.
    pub async fn get(&self, token_id: &str) -> Result<TokenResponse, Error> {
        self.client
            .get(&format!("/tokens/{token_id}"), &QueryPairs::new())
            .await
    }

    /// Deletes a token. Deleted tokens cannot be used for new charges.
    pub async fn delete(&self, token_id: &str) -> Result<(), Error> {
        self.client.delete(&format!("/tokens/{token_id}")).await
    }

    /// Lists stored tokens matching the filter.
    pub async fn list(&self, request: &ListTokensRequest) -> Result<ListTokensResponse, Error> {
        self.client.get("/tokens", &request.query_params()).await
    }
}
