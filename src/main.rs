use actix_cors::Cors;
use actix_web::{web, App, HttpServer, middleware};
use oliv_match::config::{LoggingSettings, Settings};
use oliv_match::core::IngredientMatcher;
use oliv_match::error::handle_json_payload_error;
use oliv_match::routes::{self, products::AppState};
use oliv_match::services::{CatalogRegistry, CatalogSource};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn init_logging(logging: &LoggingSettings) {
    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if logging.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.json().init();
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

    info!("Starting Oliv matching service...");

    let catalog = match &settings.catalog.path {
        Some(path) => {
            let registry = CatalogRegistry::load(path).await.map_err(|e| {
                tracing::error!("Failed to load catalog from {}: {}", path, e);
                std::io::Error::new(std::io::ErrorKind::InvalidData, e)
            })?;
            info!("Catalog loaded from {}", path);
            registry
        }
        None => {
            info!("No catalog path configured, using built-in catalogs");
            CatalogRegistry::builtin()
        }
    };

    info!("Supported supermarkets: {:?}", catalog.supermarkets());

    let matcher = IngredientMatcher::new(catalog)
        .with_fallback_image(settings.matching.fallback_image.clone());

    let app_state = AppState::new(matcher);

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers;

    info!("Starting HTTP server on {}:{}", host, port);

    let mut server = HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    });

    // actix defaults to one worker per physical core
    if let Some(workers) = workers {
        info!("Using {} workers", workers);
        server = server.workers(workers);
    }

    server.bind((host, port))?.run().await
}
