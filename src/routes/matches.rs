use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::models::{
    ErrorResponse, HealthResponse, JobsForWorkerRequest, LimitQuery, RecommendationsResponse,
    ScoreRequest, ScoreResponse, WorkersForJobRequest,
};
use crate::services::{Catalog, CatalogError};
use crate::core::Matcher;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub matcher: Matcher,
    pub default_limit: usize,
    pub max_limit: usize,
}

impl AppState {
    /// Resolve a requested limit against the configured default and cap
    ///
    /// An explicit limit above `max_limit` is rejected; the default is capped.
    pub fn resolve_limit(&self, requested: Option<u16>) -> Result<usize, ErrorResponse> {
        match requested.map(usize::from) {
            Some(limit) if limit > self.max_limit => Err(ErrorResponse {
                error: "Validation failed".to_string(),
                message: format!("limit: must be at most {}", self.max_limit),
                status_code: 400,
            }),
            Some(limit) => Ok(limit),
            None => Ok(self.default_limit.min(self.max_limit)),
        }
    }
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/matches/score", web::post().to(score_match))
        .route("/matches/jobs", web::post().to(jobs_for_worker))
        .route("/matches/workers", web::post().to(workers_for_job))
        .route("/jobs/{id}/recommendations", web::get().to(recommended_workers))
        .route("/workers/{id}/recommendations", web::get().to(recommended_jobs));
}

pub(crate) fn validation_error(errors: validator::ValidationErrors) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: "Validation failed".to_string(),
        message: errors.to_string(),
        status_code: 400,
    })
}

pub(crate) fn catalog_error(err: CatalogError) -> HttpResponse {
    match err {
        CatalogError::NotFound(_) => HttpResponse::NotFound().json(ErrorResponse {
            error: "Not found".to_string(),
            message: err.to_string(),
            status_code: 404,
        }),
        CatalogError::Duplicate(_) => HttpResponse::Conflict().json(ErrorResponse {
            error: "Already exists".to_string(),
            message: err.to_string(),
            status_code: 409,
        }),
        CatalogError::Full(_) => {
            tracing::warn!("Rejected catalog insert: {}", err);
            HttpResponse::InsufficientStorage().json(ErrorResponse {
                error: "Catalog full".to_string(),
                message: err.to_string(),
                status_code: 507,
            })
        }
        CatalogError::SeedIo(_) | CatalogError::SeedParse(_) => {
            tracing::error!("Catalog error: {}", err);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Catalog error".to_string(),
                message: err.to_string(),
                status_code: 500,
            })
        }
    }
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let (jobs, workers) = state.catalog.counts().await;

    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        jobs,
        workers,
    })
}

/// Score endpoint
///
/// POST /api/v1/matches/score
///
/// Request body:
/// ```json
/// {
///   "job": { ... },
///   "worker": { ... }
/// }
/// ```
async fn score_match(
    state: web::Data<AppState>,
    req: web::Json<ScoreRequest>,
) -> impl Responder {
    let (score, reasons) = state.matcher.explain(&req.job, &req.worker);

    tracing::debug!(
        "Scored job {} against worker {}: {:.3}",
        score.job_id,
        score.worker_id,
        score.total_score
    );

    HttpResponse::Ok().json(ScoreResponse { score, reasons })
}

/// Rank jobs for a worker
///
/// POST /api/v1/matches/jobs
///
/// Request body:
/// ```json
/// {
///   "worker": { ... },
///   "jobs": [ ... ],
///   "limit": 10
/// }
/// ```
async fn jobs_for_worker(
    state: web::Data<AppState>,
    req: web::Json<JobsForWorkerRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for jobs_for_worker request: {:?}", errors);
        return validation_error(errors);
    }

    let req = req.into_inner();
    let limit = match state.resolve_limit(req.limit) {
        Ok(limit) => limit,
        Err(e) => return HttpResponse::BadRequest().json(e),
    };
    let jobs = match req.jobs {
        Some(jobs) => jobs,
        None => state.catalog.jobs().await,
    };

    let recommendations = state.matcher.jobs_for_worker(&req.worker, &jobs, limit);

    tracing::info!(
        "Returning {} jobs for worker {} (from {} candidates)",
        recommendations.len(),
        req.worker.id,
        jobs.len()
    );

    HttpResponse::Ok().json(RecommendationsResponse {
        recommendations,
        total_candidates: jobs.len(),
    })
}

/// Rank workers for a job
///
/// POST /api/v1/matches/workers
///
/// Request body:
/// ```json
/// {
///   "job": { ... },
///   "workers": [ ... ],
///   "limit": 10
/// }
/// ```
async fn workers_for_job(
    state: web::Data<AppState>,
    req: web::Json<WorkersForJobRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for workers_for_job request: {:?}", errors);
        return validation_error(errors);
    }

    let req = req.into_inner();
    let limit = match state.resolve_limit(req.limit) {
        Ok(limit) => limit,
        Err(e) => return HttpResponse::BadRequest().json(e),
    };
    let workers = match req.workers {
        Some(workers) => workers,
        None => state.catalog.workers().await,
    };

    let recommendations = state.matcher.workers_for_job(&req.job, &workers, limit);

    tracing::info!(
        "Returning {} workers for job {} (from {} candidates)",
        recommendations.len(),
        req.job.id,
        workers.len()
    );

    HttpResponse::Ok().json(RecommendationsResponse {
        recommendations,
        total_candidates: workers.len(),
    })
}

/// Catalog workers ranked for a catalog job
///
/// GET /api/v1/jobs/{id}/recommendations?limit={limit}
async fn recommended_workers(
    state: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<LimitQuery>,
) -> impl Responder {
    if let Err(errors) = query.validate() {
        return validation_error(errors);
    }

    let job = match state.catalog.job(&path).await {
        Ok(job) => job,
        Err(e) => return catalog_error(e),
    };
    let workers = state.catalog.workers().await;
    let limit = match state.resolve_limit(query.limit) {
        Ok(limit) => limit,
        Err(e) => return HttpResponse::BadRequest().json(e),
    };

    let recommendations = state.matcher.workers_for_job(&job, &workers, limit);

    tracing::info!("Recommending {} workers for job {}", recommendations.len(), job.id);

    HttpResponse::Ok().json(RecommendationsResponse {
        recommendations,
        total_candidates: workers.len(),
    })
}

/// Catalog jobs ranked for a catalog worker
///
/// GET /api/v1/workers/{id}/recommendations?limit={limit}
async fn recommended_jobs(
    state: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<LimitQuery>,
) -> impl Responder {
    if let Err(errors) = query.validate() {
        return validation_error(errors);
    }

    let worker = match state.catalog.worker(&path).await {
        Ok(worker) => worker,
        Err(e) => return catalog_error(e),
    };
    let jobs = state.catalog.jobs().await;
    let limit = match state.resolve_limit(query.limit) {
        Ok(limit) => limit,
        Err(e) => return HttpResponse::BadRequest().json(e),
    };

    let recommendations = state.matcher.jobs_for_worker(&worker, &jobs, limit);

    tracing::info!("Recommending {} jobs for worker {}", recommendations.len(), worker.id);

    HttpResponse::Ok().json(RecommendationsResponse {
        recommendations,
        total_candidates: jobs.len(),
    })
}
