use serde::{Deserialize, Serialize};
use crate::models::domain::{MatchScore, Recommendation};

/// Response for the score endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreResponse {
    pub score: MatchScore,
    pub reasons: Vec<String>,
}

/// Response for recommendation endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationsResponse<T> {
    pub recommendations: Vec<Recommendation<T>>,
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub jobs: usize,
    pub workers: usize,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
