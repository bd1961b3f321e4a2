// src/repositories/memory.rs - In-process mapping store
use async_trait::async_trait;
use chrono::Utc;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use crate::errors::StoreError;
use crate::models::{LinkQueryParams, LinkRecord, LinkStats};
use crate::repositories::LinkStore;

type Result<T> = std::result::Result<T, StoreError>;

/// Non-durable mapping store for development and tests.
///
/// Per-code atomicity comes from dashmap's shard locks: the entry API
/// holds the shard write lock across the occupancy check and insert, and
/// `get_mut` holds it across the counter bump.
#[derive(Default)]
pub struct MemoryLinkStore {
    links: DashMap<String, LinkRecord>,
}

impl MemoryLinkStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LinkStore for MemoryLinkStore {
    async fn put_if_absent(&self, record: &LinkRecord) -> Result<bool> {
        match self.links.entry(record.code.clone()) {
            Entry::Occupied(_) => Ok(false),
            Entry::Vacant(vacant) => {
                vacant.insert(record.clone());
                Ok(true)
            }
        }
    }

    async fn get(&self, code: &str) -> Result<Option<LinkRecord>> {
        Ok(self.links.get(code).map(|entry| entry.value().clone()))
    }

    async fn increment_clicks(&self, code: &str) -> Result<bool> {
        match self.links.get_mut(code) {
            Some(mut entry) => {
                entry.clicks += 1;
                entry.last_accessed = Some(Utc::now());
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, code: &str) -> Result<bool> {
        Ok(self.links.remove(code).is_some())
    }

    async fn find(&self, params: &LinkQueryParams) -> Result<Vec<LinkRecord>> {
        let needle = params.search.as_ref().map(|s| s.to_lowercase());

        let mut records: Vec<LinkRecord> = self
            .links
            .iter()
            .filter(|entry| match &needle {
                Some(needle) => {
                    entry.code.to_lowercase().contains(needle)
                        || entry.target.to_lowercase().contains(needle)
                }
                None => true,
            })
            .map(|entry| entry.value().clone())
            .collect();

        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let offset = params.offset.unwrap_or(0).max(0) as usize;
        let records = records.into_iter().skip(offset);
        let records = match params.limit {
            Some(limit) => records.take(limit.max(0) as usize).collect(),
            None => records.collect(),
        };

        Ok(records)
    }

    async fn stats(&self) -> Result<LinkStats> {
        let mut stats = LinkStats {
            total_links: 0,
            total_clicks: 0,
        };

        for entry in self.links.iter() {
            stats.total_links += 1;
            stats.total_clicks += entry.clicks;
        }

        Ok(stats)
    }
}
