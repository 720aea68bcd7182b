use serde::{Deserialize, Serialize};

/// City/country pair used by both jobs and worker profiles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub city: String,
    pub country: String,
}

/// Budget a family is willing to pay, per hour
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    pub min: f64,
    pub max: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_currency() -> String { "AED".to_string() }

/// Hourly rate range a worker expects
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateRange {
    pub min: f64,
    pub max: f64,
}

/// How often a job recurs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CycleType {
    OneTime,
    Daily,
    Weekly,
    Monthly,
    Custom,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Schedule {
    #[serde(rename = "cycleType")]
    pub cycle_type: CycleType,
}

/// Optional requirements attached to a job posting
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobRequirements {
    #[serde(default)]
    pub skills: Option<Vec<String>>,
    #[serde(default)]
    pub experience: Option<f64>,
}

/// A job posted by a family or agency
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    pub id: String,
    pub title: String,
    #[serde(rename = "serviceType")]
    pub service_type: String,
    #[serde(default)]
    pub requirements: Option<JobRequirements>,
    pub budget: Budget,
    pub location: Location,
    pub schedule: Schedule,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl Job {
    /// Required skills, empty when the posting lists none
    pub fn required_skills(&self) -> &[String] {
        self.requirements
            .as_ref()
            .and_then(|r| r.skills.as_deref())
            .unwrap_or(&[])
    }

    /// Required years of experience, defaulting to zero
    pub fn required_experience(&self) -> f64 {
        self.requirements
            .as_ref()
            .and_then(|r| r.experience)
            .unwrap_or(0.0)
    }

    pub fn cycle_type(&self) -> CycleType {
        self.schedule.cycle_type
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Availability {
    #[serde(default)]
    pub days: Vec<String>,
}

/// A worker's public profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkerProfile {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub skills: Vec<String>,
    /// Years of experience, fractional values allowed
    #[serde(default)]
    pub experience: f64,
    #[serde(rename = "hourlyRate", default)]
    pub hourly_rate: Option<RateRange>,
    #[serde(default)]
    pub location: Option<Location>,
    #[serde(default)]
    pub availability: Option<Availability>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(rename = "reviewCount", default)]
    pub review_count: u32,
}

impl WorkerProfile {
    /// Declared availability days, empty when unknown
    pub fn available_days(&self) -> &[String] {
        self.availability
            .as_ref()
            .map(|a| a.days.as_slice())
            .unwrap_or(&[])
    }
}

/// Per-factor breakdown of a match
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    #[serde(rename = "skillsMatch")]
    pub skills_match: f64,
    #[serde(rename = "locationMatch")]
    pub location_match: f64,
    #[serde(rename = "availabilityMatch")]
    pub availability_match: f64,
    #[serde(rename = "budgetMatch")]
    pub budget_match: f64,
    #[serde(rename = "experienceMatch")]
    pub experience_match: f64,
    #[serde(rename = "ratingBonus")]
    pub rating_bonus: f64,
}

/// Compatibility of one (job, worker) pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchScore {
    #[serde(rename = "workerId")]
    pub worker_id: String,
    #[serde(rename = "jobId")]
    pub job_id: String,
    #[serde(rename = "totalScore")]
    pub total_score: f64,
    pub breakdown: ScoreBreakdown,
}

/// A ranked candidate, either a job or a worker
///
/// The candidate's own fields are inlined next to `matchScore`,
/// `breakdown` and `reasons` when serialized.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation<T> {
    #[serde(flatten)]
    pub item: T,
    #[serde(rename = "matchScore")]
    pub match_score: f64,
    pub breakdown: ScoreBreakdown,
    pub reasons: Vec<String>,
}

/// Scoring weights
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    pub skills: f64,
    pub location: f64,
    pub availability: f64,
    pub budget: f64,
    pub experience: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            skills: 0.30,
            location: 0.25,
            availability: 0.20,
            budget: 0.15,
            experience: 0.10,
        }
    }
}
