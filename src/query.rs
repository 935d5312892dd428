//! Query-string encoding for list and search requests.
//!
//! Filter records are flattened into an ordered list of key/value pairs
//! for transport as URL query parameters. The push helpers on
//! [`QueryPairs`] encode the skip rules once, and each filter shape lists
//! its fields in declaration order through the [`QueryParams`] trait, so
//! the same record always encodes to the same pairs.
//!
//! Skip rules: empty strings and zero numbers mean "unset" and emit
//! nothing; booleans are always emitted, `false` included. One
//! consequence worth knowing: an explicit `limit=0` is inexpressible.
//! Encoding never fails.

use crate::types::{ListTokensRequest, ListTransactionsRequest, SearchTransactionsRequest};

/// An ordered collection of query key/value pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryPairs(Vec<(&'static str, String)>);

impl QueryPairs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Emits `key=value` unless the value is empty.
    pub fn push_str(&mut self, key: &'static str, value: &str) {
        if !value.is_empty() {
            self.0.push((key, value.to_string()));
        }
    }

    /// Emits the decimal form of `value` unless it is zero.
    pub fn push_int(&mut self, key: &'static str, value: u32) {
        if value != 0 {
            self.0.push((key, value.to_string()));
        }
    }

    /// Emits the shortest round-trippable decimal form of `value` unless
    /// it is zero.
    pub fn push_float(&mut self, key: &'static str, value: f64) {
        if value != 0.0 {
            self.0.push((key, value.to_string()));
        }
    }

    /// Emits `"true"` or `"false"`. Booleans have no "unset" value, so
    /// `false` is emitted like any other.
    pub fn push_bool(&mut self, key: &'static str, value: bool) {
        self.0.push((key, value.to_string()));
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Pairs in the order they were pushed.
    pub fn as_slice(&self) -> &[(&'static str, String)] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &(&'static str, String)> {
        self.0.iter()
    }
}

impl IntoIterator for QueryPairs {
    type Item = (&'static str, String);
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Conversion of a filter record into its query-string pairs.
pub trait QueryParams {
    fn query_params(&self) -> QueryPairs;
}

impl QueryParams for ListTransactionsRequest {
    fn query_params(&self) -> QueryPairs {
        let mut pairs = QueryPairs::new();
        pairs.push_str("merchant_id", &self.merchant_id);
        pairs.push_str("status", &self.status);
        pairs.push_str("type", &self.transaction_type);
        pairs.push_str("start_date", &self.start_date);
        pairs.push_str("end_date", &self.end_date);
        pairs.push_str("reference", &self.reference);
        pairs.push_str("min_amount", &self.min_amount);
        pairs.push_str("max_amount", &self.max_amount);
        pairs.push_str("currency", &self.currency);
        pairs.push_int("limit", self.limit);
        pairs.push_int("offset", self.offset);
        pairs.push_str("sort_by", &self.sort_by);
        pairs.push_str("sort_order", &self.sort_order);
        pairs
    }
}

impl QueryParams for SearchTransactionsRequest {
    fn query_params(&self) -> QueryPairs {
        let mut pairs = QueryPairs::new();
        pairs.push_str("q", &self.query);
        pairs.push_str("merchant_id", &self.merchant_id);
        pairs.push_str("start_date", &self.start_date);
        pairs.push_str("end_date", &self.end_date);
        pairs.push_int("limit", self.limit);
        pairs.push_int("offset", self.offset);
        pairs
    }
}

impl QueryParams for ListTokensRequest {
    fn query_params(&self) -> QueryPairs {
        let mut pairs = QueryPairs::new();
        pairs.push_str("customer_id", &self.customer_id);
        pairs.push_int("limit", self.limit);
        pairs.push_int("offset", self.offset);
        pairs
    }
}
