use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use helper_match::config::{LoggingSettings, Settings};
use helper_match::{configure_app, AppState, Catalog, Matcher};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn init_logging(logging: &LoggingSettings) {
    // RUST_LOG wins over the configured level when set
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if logging.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            init_logging(&LoggingSettings::default());
            error!("Failed to load configuration: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()));
        }
    };

    init_logging(&settings.logging);

    info!("Starting Helper Match service...");

    let catalog = Arc::new(
        Catalog::load(settings.catalog.seed_path.as_deref())
            .with_capacity(settings.catalog.max_entries()),
    );
    let (job_count, worker_count) = catalog.counts().await;

    info!("Catalog initialized ({} jobs, {} workers)", job_count, worker_count);

    let weights = settings.weights();
    let matcher = Matcher::new(weights, settings.matching.min_score());

    info!(
        "Matcher initialized with weights: {:?}, min score: {}",
        weights,
        matcher.min_score()
    );

    let app_state = AppState {
        catalog,
        matcher,
        default_limit: settings.matching.default_limit(),
        max_limit: settings.matching.max_limit(),
    };

    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(configure_app)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
