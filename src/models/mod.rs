// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Availability, Budget, CycleType, Job, JobRequirements, Location, MatchScore, RateRange, Recommendation, Schedule, ScoreBreakdown, ScoringWeights, WorkerProfile};
pub use requests::{CreateJobRequest, CreateWorkerRequest, JobsForWorkerRequest, LimitQuery, ScoreRequest, WorkersForJobRequest};
pub use responses::{ErrorResponse, HealthResponse, RecommendationsResponse, ScoreResponse};
