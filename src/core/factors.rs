use crate::models::{CycleType, Job, WorkerProfile};

/// Days counted as weekend availability for weekly jobs
const WEEKEND_DAYS: [&str; 2] = ["saturday", "sunday"];

/// Minimum available days for a worker to cover a daily job
const DAILY_MIN_DAYS: usize = 5;

/// Reviews needed before a rating earns a bonus
const MIN_REVIEWS_FOR_BONUS: u32 = 3;

/// Rating above which the bonus starts to accrue
const RATING_BONUS_FLOOR: f64 = 4.0;

/// Fraction of the job's max budget tolerated as a rate gap
const BUDGET_TOLERANCE: f64 = 0.2;

/// Skill overlap (0-1)
///
/// A required skill counts as matched when the worker lists it, or when it
/// names the job's service category. Comparison is case-insensitive.
#[inline]
pub fn skills_match(job: &Job, worker: &WorkerProfile) -> f64 {
    let required = job.required_skills();
    if required.is_empty() {
        return 1.0;
    }

    let worker_skills: Vec<String> = worker.skills.iter().map(|s| s.to_lowercase()).collect();
    let service_type = job.service_type.to_lowercase();

    let matched = required
        .iter()
        .map(|s| s.to_lowercase())
        .filter(|skill| worker_skills.contains(skill) || *skill == service_type)
        .count();

    matched as f64 / required.len() as f64
}

/// Location proximity (0-1): same city, same country, or elsewhere
#[inline]
pub fn location_match(job: &Job, worker: &WorkerProfile) -> f64 {
    let Some(location) = worker.location.as_ref() else {
        return 0.3;
    };

    if location.city.to_lowercase() == job.location.city.to_lowercase() {
        1.0
    } else if location.country.to_lowercase() == job.location.country.to_lowercase() {
        0.7
    } else {
        0.3
    }
}

/// Schedule fit (0-1) between the job's cycle and the worker's declared days
#[inline]
pub fn availability_match(job: &Job, worker: &WorkerProfile) -> f64 {
    let days = worker.available_days();
    if days.is_empty() {
        // Unknown availability is neutral
        return 0.5;
    }

    let has_weekend = days
        .iter()
        .any(|d| WEEKEND_DAYS.contains(&d.to_lowercase().as_str()));

    match job.cycle_type() {
        CycleType::Daily if days.len() >= DAILY_MIN_DAYS => 1.0,
        CycleType::Weekly if has_weekend => 0.9,
        CycleType::OneTime => 0.8,
        _ => 0.6,
    }
}

/// Budget fit (0-1) between the job's budget and the worker's hourly rate
///
/// Outside an overlap the gap is measured between the job's max and the
/// worker's min only.
#[inline]
pub fn budget_match(job: &Job, worker: &WorkerProfile) -> f64 {
    let Some(rate) = worker.hourly_rate.as_ref() else {
        return 0.5;
    };
    let budget = &job.budget;

    if budget.max >= rate.min && budget.min <= rate.max {
        return 1.0;
    }

    let gap = (budget.max - rate.min).abs();
    let tolerance = budget.max * BUDGET_TOLERANCE;

    if gap <= tolerance {
        0.8
    } else if gap <= tolerance * 2.0 {
        0.6
    } else {
        0.3
    }
}

/// Experience against the job's requirement (0.4-1)
#[inline]
pub fn experience_match(job: &Job, worker: &WorkerProfile) -> f64 {
    let required = job.required_experience();
    let experience = worker.experience;

    if experience >= required {
        1.0
    } else if experience >= required * 0.7 {
        0.8
    } else if experience >= required * 0.5 {
        0.6
    } else {
        0.4
    }
}

/// Additive bonus for well-reviewed workers rated above 4.0
#[inline]
pub fn rating_bonus(worker: &WorkerProfile) -> f64 {
    match worker.rating {
        Some(rating) if worker.review_count >= MIN_REVIEWS_FOR_BONUS => {
            ((rating - RATING_BONUS_FLOOR) * 0.1).max(0.0)
        }
        _ => 0.0,
    }
}
