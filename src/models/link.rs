// src/models/link.rs - Pure data structures
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::validations::validate_url;

// DTO for shortening a URL
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct ShortenRequest {
    #[validate(custom(function = "validate_url"))]
    pub url: String,
}

/// A short code mapped to its target URL
///
/// `code`, `target` and `created_at` are immutable once the record is
/// persisted. `clicks` only ever increases, and only through the store's
/// atomic increment.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkRecord {
    /// The generated short code that identifies this link
    pub code: String,

    /// The original, long URL that was shortened
    pub target: String,

    /// When this link was created
    pub created_at: DateTime<Utc>,

    /// Number of successful resolutions recorded for this link
    pub clicks: i64,

    /// When this link was last resolved
    pub last_accessed: Option<DateTime<Utc>>,
}

impl LinkRecord {
    pub fn new(code: String, target: String) -> Self {
        Self {
            code,
            target,
            created_at: Utc::now(),
            clicks: 0,
            last_accessed: None,
        }
    }
}

// DTO returned by the shorten endpoint
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenResponse {
    pub code: String,
    pub short_url: String,
    pub target: String,
    pub created_at: DateTime<Utc>,
}

impl ShortenResponse {
    pub fn from_record(record: LinkRecord, base_url: &str) -> Self {
        ShortenResponse {
            short_url: format!("{}/{}", base_url, record.code),
            code: record.code,
            target: record.target,
            created_at: record.created_at,
        }
    }
}

// Query parameters for listing links
#[derive(Debug, Default, Deserialize)]
pub struct LinkQueryParams {
    /// Case-insensitive substring match over code and target
    pub search: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

// Aggregate counters shown by the client header
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkStats {
    pub total_links: i64,
    pub total_clicks: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record_starts_unclicked() {
        let record = LinkRecord::new("Xk9pQ2".into(), "https://example.com".into());
        assert_eq!(record.clicks, 0);
        assert!(record.last_accessed.is_none());
    }

    #[test]
    fn test_shorten_response_builds_short_url() {
        let record = LinkRecord::new("Xk9pQ2".into(), "https://example.com/a/b?q=1".into());
        let dto = ShortenResponse::from_record(record, "https://short.ly");
        assert_eq!(dto.short_url, "https://short.ly/Xk9pQ2");
        assert_eq!(dto.target, "https://example.com/a/b?q=1");
    }
}
