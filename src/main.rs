mod config;
mod core;
mod models;
mod routes;
mod services;

use actix_cors::Cors;
use actix_web::{error, http::StatusCode, middleware, web, App, HttpResponse, HttpServer};
use crate::config::Settings;
use crate::core::{QueryEngine, DEFAULT_TRENDING_LIMIT};
use models::SortKey;
use routes::opportunities::AppState;
use services::{CatalogStore, QueryCache};
use std::sync::Arc;
use tracing::{error, info};

/// JSON error response for JSON payload errors
#[derive(Debug, serde::Serialize)]
pub struct JsonError {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

impl std::fmt::Display for JsonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error, self.message)
    }
}

impl std::error::Error for JsonError {}

impl error::ResponseError for JsonError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::BAD_REQUEST))
            .content_type("application/json")
            .body(serde_json::to_string(self).unwrap_or_default())
    }
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &actix_web::HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    JsonError {
        error: "invalid_json".to_string(),
        message: format!("Invalid JSON: {}", err),
        status_code: 400,
    }
    .into()
}

/// Handle query payload errors
pub fn handle_query_payload_error(err: error::QueryPayloadError, _req: &actix_web::HttpRequest) -> actix_web::Error {
    JsonError {
        error: "invalid_query".to_string(),
        message: format!("Invalid query: {}", err),
        status_code: 400,
    }
    .into()
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Initialize logging
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "json".to_string());

    let subscriber = tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }

    info!("Starting OppGrid opportunity query service (log level: {})...", log_level);

    // Load configuration
    let settings = Settings::load().unwrap_or_else(|e| {
        error!("Failed to load configuration: {}", e);
        panic!("Configuration error: {}", e);
    });

    info!("Configuration loaded successfully");

    // Initialize the catalog store from the configured file, or fall back to
    // the built-in sample catalog
    let catalog = match settings.catalog.data_file.as_deref() {
        Some(path) => match CatalogStore::from_file(path) {
            Ok(store) => {
                info!("Catalog loaded from {} ({} opportunities)", path, store.len());
                Arc::new(store)
            }
            Err(e) => {
                error!("Failed to load catalog from {}: {}", path, e);
                return Err(std::io::Error::new(std::io::ErrorKind::Other, e.to_string()));
            }
        },
        None => {
            let store = CatalogStore::with_samples();
            info!("Catalog initialized with built-in samples ({} opportunities)", store.len());
            Arc::new(store)
        }
    };

    // Initialize the query result cache
    let cache = Arc::new(QueryCache::new(
        settings.cache.capacity,
        settings.cache.ttl_secs,
    ));

    info!(
        "Query cache initialized (capacity: {} entries, TTL: {}s)",
        settings.cache.capacity, settings.cache.ttl_secs
    );

    // Initialize the engine with the configured default sort
    let default_sort = settings
        .query
        .default_sort
        .as_deref()
        .map(SortKey::parse)
        .unwrap_or_default();

    let engine = QueryEngine::new(default_sort);

    info!("Query engine initialized (default sort: {:?})", default_sort);

    // Build application state
    let app_state = AppState {
        catalog,
        cache,
        engine,
        trending_limit: settings.catalog.trending_limit.unwrap_or(DEFAULT_TRENDING_LIMIT),
    };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
