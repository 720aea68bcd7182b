use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::models::{CreateJobRequest, CreateWorkerRequest};
use super::matches::{catalog_error, validation_error, AppState};

/// Configure job and worker catalog routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .service(
            web::resource("/jobs")
                .route(web::get().to(list_jobs))
                .route(web::post().to(create_job)),
        )
        .route("/jobs/{id}", web::get().to(get_job))
        .service(
            web::resource("/workers")
                .route(web::get().to(list_workers))
                .route(web::post().to(create_worker)),
        )
        .route("/workers/{id}", web::get().to(get_worker));
}

async fn list_jobs(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.catalog.jobs().await)
}

async fn get_job(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    match state.catalog.job(&path).await {
        Ok(job) => HttpResponse::Ok().json(job),
        Err(e) => catalog_error(e),
    }
}

/// Post a job
///
/// POST /api/v1/jobs
///
/// The id is assigned by the server.
async fn create_job(
    state: web::Data<AppState>,
    req: web::Json<CreateJobRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for create_job request: {:?}", errors);
        return validation_error(errors);
    }

    let job = req.into_inner().into_job(uuid::Uuid::new_v4().to_string());

    match state.catalog.add_job(job).await {
        Ok(job) => {
            tracing::info!("Created job {} ({})", job.id, job.service_type);
            HttpResponse::Created().json(job)
        }
        Err(e) => catalog_error(e),
    }
}

async fn list_workers(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.catalog.workers().await)
}

async fn get_worker(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    match state.catalog.worker(&path).await {
        Ok(worker) => HttpResponse::Ok().json(worker),
        Err(e) => catalog_error(e),
    }
}

/// Register a worker profile
///
/// POST /api/v1/workers
async fn create_worker(
    state: web::Data<AppState>,
    req: web::Json<CreateWorkerRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for create_worker request: {:?}", errors);
        return validation_error(errors);
    }

    let worker = req.into_inner().into_worker(uuid::Uuid::new_v4().to_string());

    match state.catalog.add_worker(worker).await {
        Ok(worker) => {
            tracing::info!("Created worker {}", worker.id);
            HttpResponse::Created().json(worker)
        }
        Err(e) => catalog_error(e),
    }
}
