use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use intern_match::config::{LoggingSettings, Settings, StorageBackend};
use intern_match::core::{CandidatePool, Catalog, Matcher};
use intern_match::routes::{self, AppState};
use intern_match::services::{
    FileProfileRepository, MemoryProfileRepository, ProfileRepository, ProfileService,
};
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
        subscriber.json().init();
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()));
        }
    };

    init_logging(&settings.logging);

    info!("Starting Intern Match recommendation service...");

    let repository: Arc<dyn ProfileRepository> = match settings.storage.backend {
        StorageBackend::Memory => {
            info!("Using in-memory profile store (capacity: {})", settings.storage.max_profiles);
            Arc::new(MemoryProfileRepository::new(settings.storage.max_profiles))
        }
        StorageBackend::File => match FileProfileRepository::open(&settings.storage.path).await {
            Ok(repo) => {
                info!("Using file profile store at {}", settings.storage.path);
                Arc::new(repo)
            }
            Err(e) => {
                error!("Failed to open profile store at {}: {}", settings.storage.path, e);
                return Err(std::io::Error::new(std::io::ErrorKind::Other, e.to_string()));
            }
        },
    };

    let catalog = Arc::new(Catalog::builtin());
    info!("Loaded catalog with {} postings", catalog.len());

    let weights = settings.matching.weights();
    let matcher = Matcher::new(weights);
    info!("Matcher initialized with weights: {:?}", weights);

    let app_state = AppState {
        profiles: ProfileService::new(repository),
        catalog,
        candidates: Arc::new(CandidatePool::builtin()),
        matcher,
    };

    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(routes::json_config())
            .app_data(routes::query_config())
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
