use std::sync::Arc;

use actix_web::web;

mod clicks;
mod generator;
mod link;

pub use clicks::ClickAccounting;
pub use generator::CodeGenerator;
pub use link::LinkService;

use crate::{config::Config, repositories::LinkStore};

/// Service Register
pub fn register(store: Arc<dyn LinkStore>, config: &Config, cfg: &mut web::ServiceConfig) {
    let generator = CodeGenerator::new(
        store.clone(),
        config.shortener.code_length,
        config.shortener.max_generation_attempts,
    );
    let clicks = ClickAccounting::new(store.clone());
    let service = LinkService::new(store, generator, clicks, config.shortener.base_url.clone());
    cfg.app_data(web::Data::new(service));
}
