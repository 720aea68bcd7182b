use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tokio::sync::RwLock;

use crate::models::{
    Availability, Budget, CycleType, Job, JobRequirements, Location, RateRange, Schedule,
    WorkerProfile,
};

/// Errors that can occur with catalog operations
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate id: {0}")]
    Duplicate(String),

    #[error("Catalog full: {0}")]
    Full(String),

    #[error("Seed file error: {0}")]
    SeedIo(#[from] std::io::Error),

    #[error("Seed parse error: {0}")]
    SeedParse(#[from] serde_json::Error),
}

/// On-disk seed format
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogSeed {
    #[serde(default)]
    pub jobs: Vec<Job>,
    #[serde(default)]
    pub workers: Vec<WorkerProfile>,
}

/// Default cap on jobs (and, separately, workers) held in memory
pub const DEFAULT_CAPACITY: usize = 10_000;

/// In-memory catalog of jobs and worker profiles
///
/// Entries keep insertion order, which is also the order candidates are
/// ranked in when scores tie. Nothing is persisted. Each collection holds
/// at most `capacity` entries; seeding is not subject to the cap.
pub struct Catalog {
    jobs: RwLock<Vec<Job>>,
    workers: RwLock<Vec<WorkerProfile>>,
    capacity: usize,
}

impl Catalog {
    pub fn new(jobs: Vec<Job>, workers: Vec<WorkerProfile>) -> Self {
        Self {
            jobs: RwLock::new(jobs),
            workers: RwLock::new(workers),
            capacity: DEFAULT_CAPACITY,
        }
    }

    /// Limit how many jobs and workers `add_job`/`add_worker` will accept
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn empty() -> Self {
        Self::new(vec![], vec![])
    }

    /// Catalog populated with the built-in mock data
    pub fn seeded() -> Self {
        let seed = builtin_seed();
        Self::new(seed.jobs, seed.workers)
    }

    /// Load a catalog from a JSON seed file (`{"jobs": [...], "workers": [...]}`)
    pub fn from_seed_file<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let contents = std::fs::read_to_string(path)?;
        let seed: CatalogSeed = serde_json::from_str(&contents)?;
        Ok(Self::new(seed.jobs, seed.workers))
    }

    /// Load from `seed_path` when given, falling back to the built-in seed
    pub fn load(seed_path: Option<&str>) -> Self {
        let Some(path) = seed_path else {
            return Self::seeded();
        };

        match Self::from_seed_file(path) {
            Ok(catalog) => {
                tracing::info!("Loaded catalog seed from {}", path);
                catalog
            }
            Err(e) => {
                tracing::warn!("Failed to load catalog seed {} ({}), using built-in seed", path, e);
                Self::seeded()
            }
        }
    }

    /// Snapshot of all jobs
    pub async fn jobs(&self) -> Vec<Job> {
        self.jobs.read().await.clone()
    }

    pub async fn job(&self, id: &str) -> Result<Job, CatalogError> {
        self.jobs
            .read()
            .await
            .iter()
            .find(|j| j.id == id)
            .cloned()
            .ok_or_else(|| CatalogError::NotFound(format!("job {}", id)))
    }

    pub async fn add_job(&self, job: Job) -> Result<Job, CatalogError> {
        let mut jobs = self.jobs.write().await;
        if jobs.iter().any(|j| j.id == job.id) {
            return Err(CatalogError::Duplicate(job.id));
        }
        if jobs.len() >= self.capacity {
            return Err(CatalogError::Full(format!("{} jobs", self.capacity)));
        }
        jobs.push(job.clone());
        tracing::debug!("Added job {} ({} total)", job.id, jobs.len());
        Ok(job)
    }

    /// Snapshot of all worker profiles
    pub async fn workers(&self) -> Vec<WorkerProfile> {
        self.workers.read().await.clone()
    }

    pub async fn worker(&self, id: &str) -> Result<WorkerProfile, CatalogError> {
        self.workers
            .read()
            .await
            .iter()
            .find(|w| w.id == id)
            .cloned()
            .ok_or_else(|| CatalogError::NotFound(format!("worker {}", id)))
    }

    pub async fn add_worker(&self, worker: WorkerProfile) -> Result<WorkerProfile, CatalogError> {
        let mut workers = self.workers.write().await;
        if workers.iter().any(|w| w.id == worker.id) {
            return Err(CatalogError::Duplicate(worker.id));
        }
        if workers.len() >= self.capacity {
            return Err(CatalogError::Full(format!("{} workers", self.capacity)));
        }
        workers.push(worker.clone());
        tracing::debug!("Added worker {} ({} total)", worker.id, workers.len());
        Ok(worker)
    }

    /// Number of (jobs, workers) currently held
    pub async fn counts(&self) -> (usize, usize) {
        (self.jobs.read().await.len(), self.workers.read().await.len())
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::seeded()
    }
}

fn location(city: &str, country: &str) -> Location {
    Location {
        city: city.to_string(),
        country: country.to_string(),
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn seed_job(
    id: &str,
    title: &str,
    service_type: &str,
    skills: &[&str],
    experience: f64,
    budget: (f64, f64),
    city: &str,
    cycle_type: CycleType,
) -> Job {
    Job {
        id: id.to_string(),
        title: title.to_string(),
        service_type: service_type.to_string(),
        requirements: Some(JobRequirements {
            skills: Some(strings(skills)),
            experience: Some(experience),
        }),
        budget: Budget {
            min: budget.0,
            max: budget.1,
            currency: "AED".to_string(),
        },
        location: location(city, "UAE"),
        schedule: Schedule { cycle_type },
        created_at: None,
    }
}

fn seed_worker(
    id: &str,
    name: &str,
    skills: &[&str],
    experience: f64,
    rate: (f64, f64),
    city: &str,
    days: &[&str],
    rating: f64,
    review_count: u32,
) -> WorkerProfile {
    WorkerProfile {
        id: id.to_string(),
        name: name.to_string(),
        skills: strings(skills),
        experience,
        hourly_rate: Some(RateRange {
            min: rate.0,
            max: rate.1,
        }),
        location: Some(location(city, "UAE")),
        availability: Some(Availability { days: strings(days) }),
        rating: Some(rating),
        review_count,
    }
}

/// Mock marketplace data served when no seed file is configured
pub fn builtin_seed() -> CatalogSeed {
    const WEEKDAYS: &[&str] = &["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"];

    CatalogSeed {
        jobs: vec![
            seed_job(
                "job_1",
                "Weekly housekeeper for family villa",
                "housekeeping",
                &["cooking", "cleaning"],
                3.0,
                (40.0, 60.0),
                "Dubai",
                CycleType::Weekly,
            ),
            seed_job(
                "job_2",
                "Full-time nanny for two children",
                "childcare",
                &["childcare", "first aid"],
                5.0,
                (50.0, 70.0),
                "Abu Dhabi",
                CycleType::Daily,
            ),
            seed_job(
                "job_3",
                "Deep clean before moving out",
                "cleaning",
                &["cleaning"],
                0.0,
                (30.0, 45.0),
                "Sharjah",
                CycleType::OneTime,
            ),
            seed_job(
                "job_4",
                "Elderly care assistant",
                "eldercare",
                &["eldercare", "cooking", "medication"],
                4.0,
                (55.0, 80.0),
                "Dubai",
                CycleType::Monthly,
            ),
        ],
        workers: vec![
            seed_worker(
                "worker_1",
                "Maria Santos",
                &["cooking", "cleaning", "laundry"],
                5.0,
                (45.0, 55.0),
                "Dubai",
                &["Saturday", "Monday"],
                4.8,
                20,
            ),
            seed_worker(
                "worker_2",
                "Grace Wanjiru",
                &["childcare", "first aid", "cooking"],
                7.0,
                (55.0, 65.0),
                "Abu Dhabi",
                WEEKDAYS,
                4.6,
                14,
            ),
            seed_worker(
                "worker_3",
                "Siti Rahma",
                &["cleaning", "ironing"],
                2.0,
                (30.0, 40.0),
                "Sharjah",
                &["Sunday"],
                4.2,
                2,
            ),
            seed_worker(
                "worker_4",
                "Lakshmi Nair",
                &["eldercare", "medication", "cooking"],
                9.0,
                (70.0, 90.0),
                "Dubai",
                WEEKDAYS,
                4.9,
                31,
            ),
        ],
    }
}
