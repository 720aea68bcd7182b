use std::cmp::Ordering;

use crate::models::{Job, MatchScore, Recommendation, ScoringWeights, WorkerProfile};
use crate::core::{reasons::generate_match_reasons, scoring::calculate_match_score};

/// Totals at or below this are never recommended
pub const DEFAULT_MIN_SCORE: f64 = 0.4;

/// Default length of a recommendation list
pub const DEFAULT_LIMIT: usize = 10;

/// Ranks jobs for workers and workers for jobs
///
/// # Pipeline Stages
/// 1. Score every candidate against the target
/// 2. Attach match reasons
/// 3. Drop candidates at or below the minimum score
/// 4. Stable sort by score (descending) and truncate
#[derive(Debug, Clone)]
pub struct Matcher {
    weights: ScoringWeights,
    min_score: f64,
}

impl Matcher {
    pub fn new(weights: ScoringWeights, min_score: f64) -> Self {
        Self { weights, min_score }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: ScoringWeights::default(),
            min_score: DEFAULT_MIN_SCORE,
        }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    pub fn min_score(&self) -> f64 {
        self.min_score
    }

    /// Score a single (job, worker) pair
    pub fn score(&self, job: &Job, worker: &WorkerProfile) -> MatchScore {
        calculate_match_score(job, worker, &self.weights)
    }

    /// Score a pair and explain it
    pub fn explain(&self, job: &Job, worker: &WorkerProfile) -> (MatchScore, Vec<String>) {
        let score = self.score(job, worker);
        let reasons = generate_match_reasons(&score, job, worker);
        (score, reasons)
    }

    /// Best jobs for a worker
    ///
    /// # Arguments
    /// * `worker` - The worker looking for jobs
    /// * `jobs` - Candidate jobs
    /// * `limit` - Maximum number of recommendations to return
    pub fn jobs_for_worker(
        &self,
        worker: &WorkerProfile,
        jobs: &[Job],
        limit: usize,
    ) -> Vec<Recommendation<Job>> {
        let recommendations = jobs
            .iter()
            .map(|job| {
                let (score, reasons) = self.explain(job, worker);
                Recommendation {
                    item: job.clone(),
                    match_score: score.total_score,
                    breakdown: score.breakdown,
                    reasons,
                }
            })
            .collect();

        self.rank(recommendations, limit)
    }

    /// Best workers for a job
    ///
    /// # Arguments
    /// * `job` - The job being staffed
    /// * `workers` - Candidate workers
    /// * `limit` - Maximum number of recommendations to return
    pub fn workers_for_job(
        &self,
        job: &Job,
        workers: &[WorkerProfile],
        limit: usize,
    ) -> Vec<Recommendation<WorkerProfile>> {
        let recommendations = workers
            .iter()
            .map(|worker| {
                let (score, reasons) = self.explain(job, worker);
                Recommendation {
                    item: worker.clone(),
                    match_score: score.total_score,
                    breakdown: score.breakdown,
                    reasons,
                }
            })
            .collect();

        self.rank(recommendations, limit)
    }

    fn rank<T>(&self, recommendations: Vec<Recommendation<T>>, limit: usize) -> Vec<Recommendation<T>> {
        let mut ranked: Vec<Recommendation<T>> = recommendations
            .into_iter()
            .filter(|r| r.match_score > self.min_score)
            .collect();

        // sort_by is stable: equal scores keep their input order
        ranked.sort_by(|a, b| {
            b.match_score
                .partial_cmp(&a.match_score)
                .unwrap_or(Ordering::Equal)
        });

        ranked.truncate(limit);
        ranked
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Availability, Budget, CycleType, JobRequirements, Location, RateRange, Schedule};

    fn create_job(id: &str, city: &str, country: &str, budget_max: f64) -> Job {
        Job {
            id: id.to_string(),
            title: format!("Job {}", id),
            service_type: "cleaning".to_string(),
            requirements: Some(JobRequirements {
                skills: Some(vec!["cleaning".to_string(), "ironing".to_string()]),
                experience: Some(2.0),
            }),
            budget: Budget { min: 30.0, max: budget_max, currency: "AED".to_string() },
            location: Location { city: city.to_string(), country: country.to_string() },
            schedule: Schedule { cycle_type: CycleType::Weekly },
            created_at: None,
        }
    }

    fn create_worker(id: &str, city: &str, country: &str, skills: &[&str]) -> WorkerProfile {
        WorkerProfile {
            id: id.to_string(),
            name: format!("Worker {}", id),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            experience: 3.0,
            hourly_rate: Some(RateRange { min: 35.0, max: 45.0 }),
            location: Some(Location { city: city.to_string(), country: country.to_string() }),
            availability: Some(Availability { days: vec!["Saturday".to_string()] }),
            rating: None,
            review_count: 0,
        }
    }

    #[test]
    fn test_jobs_for_worker_sorted_and_filtered() {
        let matcher = Matcher::with_default_weights();
        let worker = create_worker("w1", "Dubai", "UAE", &["cleaning"]);

        let jobs = vec![
            create_job("far", "Doha", "Qatar", 50.0),
            create_job("near", "Dubai", "UAE", 50.0),
            create_job("region", "Sharjah", "UAE", 50.0),
        ];

        let result = matcher.jobs_for_worker(&worker, &jobs, 10);

        let ids: Vec<&str> = result.iter().map(|r| r.item.id.as_str()).collect();
        assert_eq!(ids, vec!["near", "region", "far"]);
        for r in &result {
            assert!(r.match_score > DEFAULT_MIN_SCORE);
            assert!(r.reasons.len() <= 3);
        }
    }

    #[test]
    fn test_ties_keep_input_order() {
        let matcher = Matcher::with_default_weights();
        let worker = create_worker("w1", "Dubai", "UAE", &["cleaning", "ironing"]);

        let jobs: Vec<Job> = (0..5)
            .map(|i| create_job(&format!("job_{}", i), "Dubai", "UAE", 50.0))
            .collect();

        let result = matcher.jobs_for_worker(&worker, &jobs, 10);

        let ids: Vec<String> = result.iter().map(|r| r.item.id.clone()).collect();
        assert_eq!(ids, vec!["job_0", "job_1", "job_2", "job_3", "job_4"]);
    }

    #[test]
    fn test_respects_limit() {
        let matcher = Matcher::with_default_weights();
        let job = create_job("j1", "Dubai", "UAE", 50.0);

        let workers: Vec<WorkerProfile> = (0..20)
            .map(|i| create_worker(&i.to_string(), "Dubai", "UAE", &["cleaning"]))
            .collect();

        let result = matcher.workers_for_job(&job, &workers, 5);

        assert_eq!(result.len(), 5);
    }

    #[test]
    fn test_min_score_excludes_weak_candidates() {
        let matcher = Matcher::new(ScoringWeights::default(), 0.9);
        let job = create_job("j1", "Dubai", "UAE", 50.0);

        let workers = vec![
            create_worker("strong", "Dubai", "UAE", &["cleaning", "ironing"]),
            create_worker("weak", "Doha", "Qatar", &[]),
        ];

        let result = matcher.workers_for_job(&job, &workers, 10);

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].item.id, "strong");
    }

    #[test]
    fn test_score_equal_to_threshold_is_excluded() {
        let weights = ScoringWeights {
            skills: 0.4,
            location: 0.0,
            availability: 0.0,
            budget: 0.0,
            experience: 0.0,
        };
        let job = create_job("j1", "Doha", "Qatar", 50.0);
        let workers = vec![create_worker("exact", "Dubai", "UAE", &["cleaning", "ironing"])];

        let matcher = Matcher::new(weights, 0.4);
        assert_eq!(matcher.score(&job, &workers[0]).total_score, 0.4);
        assert!(matcher.workers_for_job(&job, &workers, 10).is_empty());
        assert!(matcher.jobs_for_worker(&workers[0], &[job.clone()], 10).is_empty());

        let matcher = Matcher::new(weights, 0.39);
        assert_eq!(matcher.workers_for_job(&job, &workers, 10).len(), 1);
    }

    #[test]
    fn test_explain_matches_score() {
        let matcher = Matcher::default();
        let job = create_job("j1", "Dubai", "UAE", 50.0);
        let worker = create_worker("w1", "Dubai", "UAE", &["cleaning", "ironing"]);

        let (score, reasons) = matcher.explain(&job, &worker);

        assert_eq!(score, matcher.score(&job, &worker));
        assert_eq!(reasons[0], "Perfect skill match for cleaning");
    }
}
