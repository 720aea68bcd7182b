//! Helper Match - job and worker matching service for the Helper marketplace
//!
//! This library provides the scoring engine that ranks jobs for domestic
//! workers and workers for jobs, along with the HTTP surface that serves it.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

use actix_web::web;

// Re-export commonly used types
pub use crate::core::{Matcher, calculate_match_score, generate_match_reasons};
pub use crate::models::{Job, WorkerProfile, MatchScore, ScoreBreakdown, Recommendation, ScoringWeights};
pub use crate::routes::matches::AppState;
pub use crate::services::Catalog;

/// Register extractor error handlers and all API routes
pub fn configure_app(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(error::handle_json_payload_error))
        .app_data(web::QueryConfig::default().error_handler(error::handle_query_payload_error))
        .app_data(web::PathConfig::default().error_handler(error::handle_path_error));

    routes::configure_routes(cfg);
}
