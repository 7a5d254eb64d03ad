use actix_cors::Cors;
use actix_web::{error, http::StatusCode, middleware, web, App, HttpResponse, HttpServer};
use jobmatch::config::Settings;
use jobmatch::core::Matcher;
use jobmatch::models::ScoringWeights;
use jobmatch::routes;
use jobmatch::routes::jobs::AppState;
use jobmatch::scheduler;
use jobmatch::services::{AdzunaClient, JobCache, MatchPipeline, ResendClient, UserRegistry};
use std::sync::Arc;
use std::time::Duration;
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
            .body(serde_json::to_string(self).unwrap())
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
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "json".to_string());

    let subscriber = tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }

    info!("Starting jobmatch service...");

    // Load configuration
    let settings = Settings::load().unwrap_or_else(|e| {
        error!("Failed to load configuration: {}", e);
        panic!("Configuration error: {}", e);
    });

    info!("Configuration loaded successfully");

    // Initialize upstream clients
    let adzuna = Arc::new(AdzunaClient::new(
        settings.adzuna.base_url,
        settings.adzuna.app_id,
        settings.adzuna.app_key,
        settings.matching.results_per_page,
    ));

    let mailer = Arc::new(ResendClient::new(
        settings.resend.base_url,
        settings.resend.api_key,
        settings.resend.from_address,
    ));

    info!("Upstream API clients initialized");

    // Initialize the search cache
    let cache = Arc::new(JobCache::new(Duration::from_secs(settings.cache.ttl_secs)));
    info!("Job cache initialized (TTL: {}s)", settings.cache.ttl_secs);

    // Initialize the subscriber registry
    let registry = Arc::new(UserRegistry::new());

    // Initialize matcher with configured weights
    let weights = ScoringWeights {
        title: settings.scoring.weights.title,
        location: settings.scoring.weights.location,
        skill_points: settings.scoring.weights.skill_points,
        skill_cap: settings.scoring.weights.skill_cap,
        salary_bonus: settings.scoring.weights.salary_bonus,
    };

    let matcher = Matcher::new(
        weights,
        settings.matching.score_threshold,
        settings.matching.max_matches,
    );

    info!("Matcher initialized with weights: {:?}", weights);

    // Build the shared pipeline
    let pipeline = Arc::new(MatchPipeline::new(
        adzuna,
        mailer,
        cache.clone(),
        registry.clone(),
        matcher,
        settings.matching.default_country,
        settings.matching.search_limit,
    ));

    // Spawn the daily matching task
    let scheduler = if settings.schedule.enabled {
        Some(scheduler::spawn_daily(
            pipeline.clone(),
            settings.schedule.hour,
            settings.schedule.minute,
        ))
    } else {
        info!("Daily matching schedule disabled");
        None
    };

    // Build application state
    let app_state = AppState {
        pipeline,
        registry,
        cache,
    };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    let result = HttpServer::new(move || {
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
    .await;

    if let Some(scheduler) = scheduler {
        scheduler.shutdown().await;
    }

    result
}
