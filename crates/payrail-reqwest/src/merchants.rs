//! Merchant reporting: account details, transaction summaries, and
//! settlement batches.

use payrail::query::QueryPairs;
use payrail::types::{MerchantInfo, SettlementInfo, TransactionSummary};

use crate::client::{Client, Error};

/// Merchant operations on a [`Client`]. Obtained via
/// [`Client::merchants`].
pub struct Merchants<'a> {
    client: &'a Client,
}

impl Client {
    /// Merchant reporting operations.
    pub fn merchants(&self) -> Merchants<'_> {
        Merchants { client: self }
    }
}

impl Merchants<'_> {
    /// Fetches a merchant's account details.
    pub async fn info(&self, merchant_id: &str) -> Result<MerchantInfo, Error> {
        self.client
            .get(&format!("/merchants/{merchant_id}"), &QueryPairs::new())
            .await
    }

    /// Fetches per-day transaction totals for the given date range.
    /// Empty date bounds are omitted and the gateway applies its own
    /// defaults.
    pub async fn transaction_summary(
        &self,
        merchant_id: &str,
        start_date: &str,
        end_date: &str,
    ) -> Result<Vec<TransactionSummary>, Error> {
        let mut query = QueryPairs::new();
        query.push_str("start_date", start_date);
        query.push_str("end_date", end_date);
        self.client
            .get(
                &format!("/merchants/{merchant_id}/transactions/summary"),
                &query,
            )
            .await
    }

    /// Fetches settlement batches for a merchant. Zero `limit` or
    /// `offset` means "gateway default" and is not sent.
    pub async fn settlements(
        &self,
        merchant_id: &str,
        limit: u32,
        offset: u32,
    ) -> Result<Vec<SettlementInfo>, Error> {
        let mut query = QueryPairs::new();
        query.push_int("limit", limit);
        query.push_int("offset", offset);
        self.client
            .get(&format!("/merchants/{merchant_id}/settlements"), &query)
            .await
    }
}
