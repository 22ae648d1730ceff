use actix_cors::Cors;
use actix_web::{web, App, HttpServer, middleware};
use event_ranker::config::{LoggingSettings, Settings};
use event_ranker::routes::{self, AppState};
use event_ranker::services::Catalog;
use std::sync::Arc;
use tracing::{info, error};
use tracing_subscriber::EnvFilter;

fn init_logging(logging: &LoggingSettings) {
    // RUST_LOG wins over the configured level when present
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    match logging.format.as_str() {
        "pretty" => subscriber.pretty().init(),
        "compact" => subscriber.compact().init(),
        _ => subscriber.init(),
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = Settings::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e)
    })?;

    init_logging(&settings.logging);

    info!("Starting Event Ranker...");

    let catalog = match settings.catalog.path.as_deref() {
        Some(path) => Catalog::load(path).map_err(|e| {
            error!("Failed to load catalog from {}: {}", path, e);
            std::io::Error::new(std::io::ErrorKind::InvalidData, e)
        })?,
        None => {
            info!("No catalog path configured, using built-in catalog");
            Catalog::builtin()
        }
    };

    info!("Catalog ready with {} events across genres {:?}", catalog.len(), catalog.genres());

    let default_location = settings.location.to_user_location();
    info!(
        "Default location: {} ({}, {}), default policy: {}",
        default_location.name,
        default_location.lat,
        default_location.lng,
        settings.ranking.default_policy
    );

    let app_state = AppState {
        catalog: Arc::new(catalog),
        default_location,
        default_policy: settings.ranking.default_policy,
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
            .app_data(web::JsonConfig::default().error_handler(routes::handle_json_payload_error))
            .app_data(web::QueryConfig::default().error_handler(routes::handle_query_payload_error))
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
