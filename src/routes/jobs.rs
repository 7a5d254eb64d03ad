use crate::models::{
    is_supported_country, ErrorResponse, HealthResponse, RegisterUserRequest, RegisterUserResponse,
    RunMatchingResponse, SearchJobsRequest, SearchJobsResponse, UserProfile,
};
use crate::services::{JobCache, MatchPipeline, UserRegistry};
use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<MatchPipeline>,
    pub registry: Arc<UserRegistry>,
    pub cache: Arc<JobCache>,
}

/// Configure all job-matching routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/users/register", web::post().to(register_user))
        .route("/matching/run", web::post().to(run_matching))
        .route("/jobs/search", web::post().to(search_jobs));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let cache_stats = state.cache.stats().await;

    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        registered_users: state.registry.len().await,
        cached_queries: cache_stats.entries,
    })
}

/// Register a subscriber
///
/// POST /api/v1/users/register
///
/// Request body:
/// ```json
/// {
///   "name": "string",
///   "email": "string",
///   "location": "string",
///   "roles": "comma, separated",
///   "skills": "comma, separated",
///   "minSalary": 50000
/// }
/// ```
async fn register_user(
    state: web::Data<AppState>,
    req: web::Json<RegisterUserRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for register_user request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let profile = UserProfile::from_registration(
        &req.name,
        &req.email,
        &req.location,
        &req.roles,
        &req.skills,
        req.min_salary,
    );

    if profile.roles.is_empty() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: "At least one preferred role is required".to_string(),
            status_code: 400,
        });
    }

    let response = RegisterUserResponse {
        message: format!("Added user: {}", profile.name),
        user_id: profile.user_id.clone(),
        roles: profile.roles.len(),
        skills: profile.skills.len(),
    };

    state.registry.register(profile).await;

    HttpResponse::Ok().json(response)
}

/// Run matching for all registered users
///
/// POST /api/v1/matching/run
///
/// Shares its logic with the daily scheduled trigger; returns one summary
/// line per user.
async fn run_matching(state: web::Data<AppState>) -> impl Responder {
    let results = state.pipeline.run_for_all_users().await;
    let users = results.len();

    HttpResponse::Ok().json(RunMatchingResponse { results, users })
}

/// Search available jobs
///
/// POST /api/v1/jobs/search
///
/// Request body:
/// ```json
/// {
///   "query": "string",
///   "location": "string",
///   "country": "gb"
/// }
/// ```
async fn search_jobs(
    state: web::Data<AppState>,
    req: web::Json<SearchJobsRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for search_jobs request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    if !is_supported_country(&req.country) {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Unsupported country".to_string(),
            message: format!("Country code '{}' is not supported", req.country),
            status_code: 400,
        });
    }

    match state
        .pipeline
        .search_available_jobs(&req.query, &req.location, &req.country)
        .await
    {
        Ok(jobs) => {
            let message = if jobs.is_empty() {
                Some("No jobs found for the given criteria.".to_string())
            } else {
                None
            };
            HttpResponse::Ok().json(SearchJobsResponse { jobs, message })
        }
        Err(e) => {
            tracing::error!("Job search failed: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Job search failed".to_string(),
                message: e,
                status_code: 500,
            })
        }
    }
}
