// src/services/link.rs - Business logic
use std::sync::Arc;

use log::info;
use validator::Validate;

use crate::errors::ServiceError;
use crate::models::{LinkQueryParams, LinkRecord, LinkStats, ShortenRequest, ShortenResponse};
use crate::repositories::LinkStore;
use crate::services::{ClickAccounting, CodeGenerator};

type Result<T> = std::result::Result<T, ServiceError>;

pub struct LinkService {
    store: Arc<dyn LinkStore>,
    generator: CodeGenerator,
    clicks: ClickAccounting,
    base_url: String,
}

impl LinkService {
    pub fn new(
        store: Arc<dyn LinkStore>,
        generator: CodeGenerator,
        clicks: ClickAccounting,
        base_url: String,
    ) -> Self {
        Self {
            store,
            generator,
            clicks,
            base_url,
        }
    }

    /// Validates the target URL and assigns it a fresh short code.
    ///
    /// Identical targets may legitimately receive different codes; there
    /// is no dedup. The generator guarantees no two callers ever share one.
    pub async fn shorten(&self, request: ShortenRequest) -> Result<ShortenResponse> {
        request.validate()?;

        let record = self.generator.generate(&request.url).await?;
        info!("Shortened '{}' as '{}'", record.target, record.code);

        Ok(ShortenResponse::from_record(record, &self.base_url))
    }

    /// Resolves a code to its record, counting the click.
    ///
    /// Click accounting cannot change the outcome: once the lookup has
    /// succeeded the record is returned even if the counter update fails.
    pub async fn resolve(&self, code: &str) -> Result<LinkRecord> {
        let record = self
            .store
            .get(code)
            .await?
            .ok_or_else(|| ServiceError::NotFound(code.to_string()))?;

        self.clicks.record(code).await;

        Ok(record)
    }

    /// Read-only lookup for display; does not count a click
    pub async fn get_link(&self, code: &str) -> Result<LinkRecord> {
        self.store
            .get(code)
            .await?
            .ok_or_else(|| ServiceError::NotFound(code.to_string()))
    }

    /// Administrative delete; terminal for the code
    pub async fn delete(&self, code: &str) -> Result<()> {
        if self.store.delete(code).await? {
            info!("Deleted link '{}'", code);
            Ok(())
        } else {
            Err(ServiceError::NotFound(code.to_string()))
        }
    }

    pub async fn list(&self, params: &LinkQueryParams) -> Result<Vec<LinkRecord>> {
        Ok(self.store.find(params).await?)
    }

    pub async fn stats(&self) -> Result<LinkStats> {
        Ok(self.store.stats().await?)
    }
}
