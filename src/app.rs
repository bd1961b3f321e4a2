use std::sync::Arc;
use std::time::Instant;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;
use log::{debug, info, warn};

use crate::{
    config::{Config, Environment, StoreBackend},
    db::Database,
    errors::AppError,
    middleware::RequestLogger,
    repositories::{LinkStore, MemoryLinkStore, PgLinkStore},
    routes, services,
    types::AppState,
};

// Custom result type for the application
pub type AppResult<T> = Result<T, AppError>;

// Setup logging with custom format and configuration
fn setup_logging(config: &Config) -> Result<(), AppError> {
    // Configure log level based on environment and config
    let log_level = match config.app.environment {
        Environment::Development => config.app.log_level.clone(),
        Environment::Testing => "debug,actix_web=info".to_string(),
        Environment::Production => "info,actix_web=warn".to_string(),
    };

    let env = Env::default()
        .filter_or("RUST_LOG", log_level)
        .write_style_or("RUST_LOG_STYLE", "always");

    env_logger::try_init_from_env(env)
        .map_err(|e| AppError::Logger(format!("Failed to initialize logger: {}", e)))
}

// Build the configured mapping store backend
async fn build_store(config: &Config) -> AppResult<(Arc<dyn LinkStore>, Option<Database>)> {
    match config.shortener.store_backend {
        StoreBackend::Postgres => {
            let db = Database::connect(&config.db)
                .await
                .map_err(|e| AppError::Database(e.to_string()))?;
            Ok((Arc::new(PgLinkStore::new(db.clone())), Some(db)))
        }
        StoreBackend::Memory => {
            warn!("Using in-memory store; mappings will not survive a restart");
            Ok((Arc::new(MemoryLinkStore::new()), None))
        }
    }
}

pub async fn server() -> AppResult<()> {
    // Load application configuration
    let config = Config::load()?;

    // Setup enhanced logging based on configuration
    setup_logging(&config)?;

    // Capture start time for uptime calculation
    let start_time = Instant::now();

    // Log startup information
    info!("Starting {} v{}", config.app.name, config.app.version);
    info!("Environment: {:?}", config.app.environment);
    info!(
        "Binding to {}:{} with {} workers",
        config.server.host, config.server.port, config.server.workers
    );
    info!(
        "Issuing {}-character codes under {}",
        config.shortener.code_length, config.shortener.base_url
    );

    if config.app.environment == Environment::Development {
        debug!("Debug logging enabled");
        debug!("Full configuration: {:?}", config);
    }

    // Determine if we should enable more verbose logging
    let enable_debug_logging = config.app.environment != Environment::Production;

    // Connect the mapping store
    let (store, database) = build_store(&config).await?;

    // Create a cloned config for the closure
    let app_config = config.clone();

    // Determine log format based on environment
    let log_format = if enable_debug_logging {
        // Detailed format for development/testing
        "%a \"%r\" %s %b %T \"%{Referer}i\" \"%{User-Agent}i\""
    } else {
        // Simple format for production
        "%a \"%r\" %s %b %T"
    };

    // Start the HTTP server
    HttpServer::new(move || {
        // Browser clients call the API from other origins
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header();

        App::new()
            .app_data(web::Data::new(AppState {
                start_time,
                version: app_config.app.version.clone(),
            }))
            // Make the full configuration available to handlers
            .app_data(web::Data::new(app_config.clone()))
            .wrap(Logger::new(log_format))
            .wrap(cors)
            .wrap(RequestLogger::new(enable_debug_logging))
            .configure(|cfg| services::register(store.clone(), &app_config, cfg))
            // Configure routes
            .configure(routes::configure_routes)
    })
    .workers(config.server.workers)
    .bind((config.server.host.to_string(), config.server.port))?
    .run()
    .await?;

    // Release pooled connections once the server has stopped
    if let Some(db) = database {
        db.shutdown().await;
    }

    Ok(())
}
