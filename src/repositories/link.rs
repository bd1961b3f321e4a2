// src/repositories/link.rs - Mapping store contract
use async_trait::async_trait;

use crate::errors::StoreError;
use crate::models::{LinkQueryParams, LinkRecord, LinkStats};

type Result<T> = std::result::Result<T, StoreError>;

/// Atomicity contract over the backing key-value medium.
///
/// Codes are independent keys; implementations must serialize concurrent
/// writers per code but never require a global lock. Every failure is a
/// typed `StoreError`, and only `StoreError::Timeout` leaves the outcome
/// of a write in doubt.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkStore: Send + Sync {
    /// Inserts the record if and only if its code is unassigned
    ///
    /// ### Returns
    /// * `Ok(true)` - the record was inserted and the code is now owned
    /// * `Ok(false)` - the code already exists; nothing was mutated
    ///
    /// ### Errors
    /// * `StoreError::Unavailable` - the insert definitely did not happen
    /// * `StoreError::Timeout` - the insert may or may not have happened
    async fn put_if_absent(&self, record: &LinkRecord) -> Result<bool>;

    /// Looks up the record for a code, `None` when unassigned or deleted
    async fn get(&self, code: &str) -> Result<Option<LinkRecord>>;

    /// Atomically adds one click to a code's counter
    ///
    /// Concurrent increments for the same code must all be counted; no
    /// lost updates. Returns `Ok(false)` if the code does not exist
    /// (e.g. deleted between lookup and increment).
    async fn increment_clicks(&self, code: &str) -> Result<bool>;

    /// Removes a mapping; `Ok(false)` when the code was not assigned
    async fn delete(&self, code: &str) -> Result<bool>;

    /// Lists records, newest first, with optional substring search
    /// over code and target plus limit/offset pagination
    async fn find(&self, params: &LinkQueryParams) -> Result<Vec<LinkRecord>>;

    /// Aggregate link and click counters across the whole store
    async fn stats(&self) -> Result<LinkStats>;
}
