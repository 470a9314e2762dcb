use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use resume_match::config::Settings;
use resume_match::core::Matcher;
use resume_match::feedback::unknown_template_terms;
use resume_match::routes::{self, AppState};
use resume_match::services::SemanticAdapter;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Load configuration; logging is not up yet, so failures go to stderr
    let settings = Settings::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    })?;

    // Initialize logging, LOG_LEVEL / LOG_FORMAT override the config file
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| settings.logging.level.clone());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| settings.logging.format.clone());

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }

    info!("Starting resume match service...");

    let unknown = unknown_template_terms();
    if !unknown.is_empty() {
        error!("Template tables reference non-skill terms: {:?}", unknown);
        return Err(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            "template tables out of sync with skill allowlist",
        ));
    }

    info!("Configuration loaded successfully");

    let weights = settings.scoring.to_weights();
    let matcher = Matcher::new(weights);

    info!("Matcher initialized with weights: {:?}", weights);

    // Embedding backend is resolved lazily on the first request
    let semantic = Arc::new(SemanticAdapter::new(settings.semantic.clone()));

    let max_text_chars = settings.limits.effective_max_text_chars();
    let app_state = AppState {
        matcher,
        semantic,
        max_text_chars,
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
            .app_data(routes::json_config(max_text_chars))
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
