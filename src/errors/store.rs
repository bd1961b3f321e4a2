use thiserror::Error;

/// Failures raised by the mapping store.
///
/// Callers rely on the distinction between `Unavailable` (the operation
/// definitely did not happen) and `Timeout` (the outcome is unknown, the
/// statement may or may not have been applied). The code generator must
/// re-verify after a `Timeout` before trusting the code namespace again.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store rejected or never received the operation
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    /// The operation was sent but its outcome is unknown
    #[error("Store timeout: {0}")]
    Timeout(String),

    /// A stored row could not be mapped back into a record
    #[error("Corrupted record: {0}")]
    Corrupted(String),
}

impl StoreError {
    /// True when the operation may have been applied despite the error.
    pub fn is_ambiguous(&self) -> bool {
        matches!(self, StoreError::Timeout(_))
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            // Never acquired a connection: the statement was never sent
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => {
                StoreError::Unavailable(err.to_string())
            }
            // The connection broke mid-flight: the statement may have landed
            sqlx::Error::Io(e) => StoreError::Timeout(e.to_string()),
            sqlx::Error::Protocol(e) => StoreError::Timeout(e),
            // Row exists but does not map to the record shape
            sqlx::Error::ColumnDecode { .. }
            | sqlx::Error::ColumnNotFound(_)
            | sqlx::Error::Decode(_)
            | sqlx::Error::TypeNotFound { .. } => StoreError::Corrupted(err.to_string()),
            _ => StoreError::Unavailable(err.to_string()),
        }
    }
}
