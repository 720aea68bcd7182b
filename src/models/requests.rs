use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};
use crate::models::domain::{
    Availability, Budget, Job, JobRequirements, Location, RateRange, Schedule, WorkerProfile,
};

/// Request to score one job against one worker
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreRequest {
    pub job: Job,
    pub worker: WorkerProfile,
}

/// Request to rank jobs for a worker
///
/// When `jobs` is omitted the catalog's jobs are ranked.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct JobsForWorkerRequest {
    pub worker: WorkerProfile,
    #[serde(default)]
    pub jobs: Option<Vec<Job>>,
    #[validate(range(min = 1))]
    #[serde(default)]
    pub limit: Option<u16>,
}

/// Request to rank workers for a job
///
/// When `workers` is omitted the catalog's workers are ranked.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct WorkersForJobRequest {
    pub job: Job,
    #[serde(default)]
    pub workers: Option<Vec<WorkerProfile>>,
    #[validate(range(min = 1))]
    #[serde(default)]
    pub limit: Option<u16>,
}

/// `?limit=` on recommendation routes
///
/// The upper bound is the configured `matching.max_limit`, checked by the handler.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LimitQuery {
    #[validate(range(min = 1))]
    pub limit: Option<u16>,
}

/// Request to post a new job
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_job_budget"))]
pub struct CreateJobRequest {
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(length(min = 1))]
    #[serde(rename = "serviceType")]
    pub service_type: String,
    #[serde(default)]
    pub requirements: Option<JobRequirements>,
    pub budget: Budget,
    pub location: Location,
    pub schedule: Schedule,
}

impl CreateJobRequest {
    pub fn into_job(self, id: String) -> Job {
        Job {
            id,
            title: self.title,
            service_type: self.service_type,
            requirements: self.requirements,
            budget: self.budget,
            location: self.location,
            schedule: self.schedule,
            created_at: Some(chrono::Utc::now()),
        }
    }
}

/// Request to register a worker profile
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_worker_rate"))]
pub struct CreateWorkerRequest {
    #[validate(length(min = 1))]
    pub name: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[validate(range(min = 0.0))]
    #[serde(default)]
    pub experience: f64,
    #[serde(rename = "hourlyRate", default)]
    pub hourly_rate: Option<RateRange>,
    #[serde(default)]
    pub location: Option<Location>,
    #[serde(default)]
    pub availability: Option<Availability>,
    #[validate(range(min = 0.0, max = 5.0))]
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(rename = "reviewCount", default)]
    pub review_count: u32,
}

impl CreateWorkerRequest {
    pub fn into_worker(self, id: String) -> WorkerProfile {
        WorkerProfile {
            id,
            name: self.name,
            skills: self.skills,
            experience: self.experience,
            hourly_rate: self.hourly_rate,
            location: self.location,
            availability: self.availability,
            rating: self.rating,
            review_count: self.review_count,
        }
    }
}

fn validate_job_budget(req: &CreateJobRequest) -> Result<(), ValidationError> {
    if req.budget.min < 0.0 || req.budget.min > req.budget.max {
        return Err(ValidationError::new("budget_range"));
    }
    Ok(())
}

fn validate_worker_rate(req: &CreateWorkerRequest) -> Result<(), ValidationError> {
    match req.hourly_rate {
        Some(rate) if rate.min < 0.0 || rate.min > rate.max => {
            Err(ValidationError::new("hourly_rate_range"))
        }
        _ => Ok(()),
    }
}
