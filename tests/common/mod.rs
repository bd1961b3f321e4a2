use std::sync::Arc;

use linkshort::repositories::{LinkStore, MemoryLinkStore};
use linkshort::services::{ClickAccounting, CodeGenerator, LinkService};

pub const BASE_URL: &str = "https://short.ly";
pub const CODE_LENGTH: usize = 6;

/// A link service wired to a fresh in-memory store, plus direct access
/// to the store for assertions the API does not expose.
pub fn memory_service() -> (Arc<MemoryLinkStore>, Arc<LinkService>) {
    let store = Arc::new(MemoryLinkStore::new());
    let dyn_store: Arc<dyn LinkStore> = store.clone();

    let service = LinkService::new(
        dyn_store.clone(),
        CodeGenerator::new(dyn_store.clone(), CODE_LENGTH, 5),
        ClickAccounting::new(dyn_store),
        BASE_URL.to_string(),
    );

    (store, Arc::new(service))
}
