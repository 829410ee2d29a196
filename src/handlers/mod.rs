// src/handlers/mod.rs
// DOCUMENTATION: Handlers module organization
// PURPOSE: Re-export handler components and mount the versioned API

pub mod comments;
pub mod health;
pub mod params;
pub mod photos;

use crate::errors::{json_error_handler, path_error_handler};
use actix_web::web;

pub use health::config as health_config;

/// Routes under /api/v1 plus the extractor error handlers they rely on
pub fn api_config(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::PathConfig::default().error_handler(path_error_handler))
        .service(
            web::scope("/api/v1")
                .configure(photos::config)
                .configure(comments::config),
        );
}

#[cfg(test)]
pub(crate) fn test_state(
    store: &std::sync::Arc<crate::db::MemoryStore>,
) -> web::Data<crate::state::AppState> {
    web::Data::new(crate::state::AppState::new(store.clone(), store.clone()))
}
