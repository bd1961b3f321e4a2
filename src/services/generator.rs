// src/services/generator.rs - Store-coordinated code assignment
use std::sync::Arc;

use log::{debug, warn};

use crate::errors::ServiceError;
use crate::models::LinkRecord;
use crate::repositories::LinkStore;
use crate::utils::id_generator;

type Result<T> = std::result::Result<T, ServiceError>;

/// Allocates unguessable short codes that are guaranteed unassigned.
///
/// A candidate is only handed out once the store's create-if-absent
/// insert has accepted it, so two concurrent callers can never receive
/// the same code. Collisions trigger regeneration up to `max_attempts`
/// times; running out of attempts means the namespace is too small or
/// under heavy contention and surfaces as `GenerationExhausted`.
pub struct CodeGenerator {
    store: Arc<dyn LinkStore>,
    code_length: usize,
    max_attempts: usize,
}

impl CodeGenerator {
    pub fn new(store: Arc<dyn LinkStore>, code_length: usize, max_attempts: usize) -> Self {
        Self {
            store,
            code_length,
            max_attempts,
        }
    }

    /// Creates and persists a record for `target` under a fresh code
    pub async fn generate(&self, target: &str) -> Result<LinkRecord> {
        for attempt in 1..=self.max_attempts {
            let code = id_generator::generate_short_id(self.code_length);
            let record = LinkRecord::new(code, target.to_string());

            match self.store.put_if_absent(&record).await {
                Ok(true) => {
                    debug!(
                        "Assigned code '{}' on attempt {}/{}",
                        record.code, attempt, self.max_attempts
                    );
                    return Ok(record);
                }
                Ok(false) => {
                    debug!(
                        "Code '{}' already assigned, regenerating (attempt {}/{})",
                        record.code, attempt, self.max_attempts
                    );
                }
                Err(err) if err.is_ambiguous() => {
                    // The insert may have landed. A possibly-taken code must
                    // never be claimed, so confirm the store is answering
                    // again and retry with a fresh code. If the insert did
                    // land, the orphaned row keeps its code out of circulation.
                    warn!(
                        "Ambiguous insert for code '{}': {}; re-verifying before retry",
                        record.code, err
                    );
                    self.store.get(&record.code).await?;
                }
                Err(err) => return Err(ServiceError::StoreUnavailable(err.to_string())),
            }
        }

        Err(ServiceError::GenerationExhausted {
            attempts: self.max_attempts,
        })
    }
}

#[cfg(test)]
mod tests {
    use mockall::predicate::always;

    use super::*;
    use crate::errors::StoreError;
    use crate::repositories::MockLinkStore;
    use crate::utils::base62::is_base62;

    #[tokio::test]
    async fn test_generate_assigns_code_of_configured_length() {
        let mut store = MockLinkStore::new();
        store
            .expect_put_if_absent()
            .with(always())
            .times(1)
            .returning(|_| Ok(true));

        let generator = CodeGenerator::new(Arc::new(store), 6, 5);
        let record = generator.generate("https://example.com").await.unwrap();

        assert_eq!(record.code.len(), 6);
        assert!(is_base62(&record.code));
        assert_eq!(record.target, "https://example.com");
        assert_eq!(record.clicks, 0);
    }

    #[tokio::test]
    async fn test_generate_retries_on_collision() {
        let mut store = MockLinkStore::new();
        let mut seq = mockall::Sequence::new();
        store
            .expect_put_if_absent()
            .times(2)
            .in_sequence(&mut seq)
            .returning(|_| Ok(false));
        store
            .expect_put_if_absent()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(true));

        let generator = CodeGenerator::new(Arc::new(store), 6, 5);
        assert!(generator.generate("https://example.com").await.is_ok());
    }

    #[tokio::test]
    async fn test_generate_exhausts_after_max_attempts() {
        let mut store = MockLinkStore::new();
        store
            .expect_put_if_absent()
            .times(5)
            .returning(|_| Ok(false));

        let generator = CodeGenerator::new(Arc::new(store), 6, 5);
        let err = generator.generate("https://example.com").await.unwrap_err();

        assert!(matches!(
            err,
            ServiceError::GenerationExhausted { attempts: 5 }
        ));
    }

    #[tokio::test]
    async fn test_ambiguous_insert_reverifies_then_retries_with_new_code() {
        let mut store = MockLinkStore::new();
        let mut seq = mockall::Sequence::new();
        store
            .expect_put_if_absent()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Err(StoreError::Timeout("connection reset".into())));
        store
            .expect_get()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(None));
        store
            .expect_put_if_absent()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(true));

        let generator = CodeGenerator::new(Arc::new(store), 6, 5);
        assert!(generator.generate("https://example.com").await.is_ok());
    }

    #[tokio::test]
    async fn test_unavailable_store_propagates() {
        let mut store = MockLinkStore::new();
        store
            .expect_put_if_absent()
            .times(1)
            .returning(|_| Err(StoreError::Unavailable("pool closed".into())));

        let generator = CodeGenerator::new(Arc::new(store), 6, 5);
        let err = generator.generate("https://example.com").await.unwrap_err();

        assert!(matches!(err, ServiceError::StoreUnavailable(_)));
    }

    #[tokio::test]
    async fn test_reverify_failure_propagates() {
        let mut store = MockLinkStore::new();
        store
            .expect_put_if_absent()
            .times(1)
            .returning(|_| Err(StoreError::Timeout("connection reset".into())));
        store
            .expect_get()
            .times(1)
            .returning(|_| Err(StoreError::Unavailable("still down".into())));

        let generator = CodeGenerator::new(Arc::new(store), 6, 5);
        let err = generator.generate("https://example.com").await.unwrap_err();

        assert!(matches!(err, ServiceError::StoreUnavailable(_)));
    }
}
