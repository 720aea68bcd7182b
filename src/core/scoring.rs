use crate::models::{Job, MatchScore, ScoreBreakdown, ScoringWeights, WorkerProfile};
use crate::core::factors::{
    availability_match, budget_match, experience_match, location_match, rating_bonus,
    skills_match,
};

/// Calculate a match score (0-1) for a worker against a job
///
/// Scoring formula:
/// score = min(1.0,
///     skills_match * 0.30 +        # Required skills the worker has
///     location_match * 0.25 +      # Same city > same country > elsewhere
///     availability_match * 0.20 +  # Declared days vs job cycle
///     budget_match * 0.15 +        # Job budget vs hourly rate
///     experience_match * 0.10 +    # Years vs requirement
///     rating_bonus                 # Up to 0.1 for ratings above 4.0
/// )
pub fn calculate_match_score(
    job: &Job,
    worker: &WorkerProfile,
    weights: &ScoringWeights,
) -> MatchScore {
    let breakdown = ScoreBreakdown {
        skills_match: skills_match(job, worker),
        location_match: location_match(job, worker),
        availability_match: availability_match(job, worker),
        budget_match: budget_match(job, worker),
        experience_match: experience_match(job, worker),
        rating_bonus: rating_bonus(worker),
    };

    let weighted = breakdown.skills_match * weights.skills
        + breakdown.location_match * weights.location
        + breakdown.availability_match * weights.availability
        + breakdown.budget_match * weights.budget
        + breakdown.experience_match * weights.experience;

    MatchScore {
        worker_id: worker.id.clone(),
        job_id: job.id.clone(),
        total_score: (weighted + breakdown.rating_bonus).min(1.0),
        breakdown,
    }
}
