// Unit tests for Helper Match

use helper_match::core::{
    factors::{availability_match, budget_match, experience_match, location_match, rating_bonus, skills_match},
    reasons::generate_match_reasons,
    scoring::calculate_match_score,
    Matcher,
};
use helper_match::models::{
    Availability, Budget, CycleType, Job, JobRequirements, Location, RateRange, Schedule,
    ScoringWeights, WorkerProfile,
};

fn dubai_job() -> Job {
    Job {
        id: "job_dubai".to_string(),
        title: "Weekly housekeeper".to_string(),
        service_type: "housekeeping".to_string(),
        requirements: Some(JobRequirements {
            skills: Some(vec!["cooking".to_string(), "cleaning".to_string()]),
            experience: Some(5.0),
        }),
        budget: Budget { min: 40.0, max: 60.0, currency: "AED".to_string() },
        location: Location { city: "Dubai".to_string(), country: "UAE".to_string() },
        schedule: Schedule { cycle_type: CycleType::Weekly },
        created_at: None,
    }
}

fn dubai_worker() -> WorkerProfile {
    WorkerProfile {
        id: "worker_dubai".to_string(),
        name: "Maria".to_string(),
        skills: vec!["cooking".to_string(), "cleaning".to_string(), "laundry".to_string()],
        experience: 5.0,
        hourly_rate: Some(RateRange { min: 45.0, max: 55.0 }),
        location: Some(Location { city: "Dubai".to_string(), country: "UAE".to_string() }),
        availability: Some(Availability {
            days: vec!["Saturday".to_string(), "Monday".to_string()],
        }),
        rating: Some(4.8),
        review_count: 20,
    }
}

/// A spread of jobs covering every cycle type, budget shape and requirement
fn job_grid() -> Vec<Job> {
    let cycles = [
        CycleType::OneTime,
        CycleType::Daily,
        CycleType::Weekly,
        CycleType::Monthly,
        CycleType::Custom,
    ];
    let budgets = [(0.0, 0.0), (10.0, 20.0), (40.0, 60.0), (100.0, 150.0)];
    let requirements = [
        None,
        Some(JobRequirements { skills: None, experience: None }),
        Some(JobRequirements { skills: Some(vec!["Cooking".to_string()]), experience: Some(2.0) }),
        Some(JobRequirements {
            skills: Some(vec!["childcare".to_string(), "driving".to_string(), "swimming".to_string()]),
            experience: Some(12.0),
        }),
    ];

    let mut jobs = Vec::new();
    for (c, cycle) in cycles.iter().enumerate() {
        for (b, budget) in budgets.iter().enumerate() {
            for (r, req) in requirements.iter().enumerate() {
                jobs.push(Job {
                    id: format!("job_{}_{}_{}", c, b, r),
                    title: "Grid job".to_string(),
                    service_type: "childcare".to_string(),
                    requirements: req.clone(),
                    budget: Budget { min: budget.0, max: budget.1, currency: "AED".to_string() },
                    location: Location {
                        city: if b % 2 == 0 { "Dubai" } else { "Doha" }.to_string(),
                        country: if b % 2 == 0 { "UAE" } else { "Qatar" }.to_string(),
                    },
                    schedule: Schedule { cycle_type: *cycle },
                    created_at: None,
                });
            }
        }
    }
    jobs
}

/// A spread of workers including ones with every optional field missing
fn worker_grid() -> Vec<WorkerProfile> {
    let mut workers = vec![WorkerProfile {
        id: "bare".to_string(),
        name: "Bare".to_string(),
        skills: vec![],
        experience: 0.0,
        hourly_rate: None,
        location: None,
        availability: None,
        rating: None,
        review_count: 0,
    }];

    for i in 0..12u32 {
        workers.push(WorkerProfile {
            id: format!("worker_{}", i),
            name: format!("Worker {}", i),
            skills: if i % 2 == 0 { vec!["cooking".to_string()] } else { vec!["Childcare".to_string()] },
            experience: i as f64,
            hourly_rate: Some(RateRange { min: 10.0 * i as f64, max: 10.0 * i as f64 + 15.0 }),
            location: Some(Location {
                city: if i % 3 == 0 { "DUBAI" } else { "Abu Dhabi" }.to_string(),
                country: "uae".to_string(),
            }),
            availability: Some(Availability {
                days: ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday"]
                    .iter()
                    .take(i as usize % 8)
                    .map(|d| d.to_string())
                    .collect(),
            }),
            rating: Some(i as f64 * 0.45),
            review_count: i,
        });
    }
    workers
}

#[test]
fn test_sub_scores_within_unit_interval() {
    let weights = ScoringWeights::default();

    for job in job_grid() {
        for worker in worker_grid() {
            let score = calculate_match_score(&job, &worker, &weights);
            let b = score.breakdown;
            for (name, value) in [
                ("skills", b.skills_match),
                ("location", b.location_match),
                ("availability", b.availability_match),
                ("budget", b.budget_match),
                ("experience", b.experience_match),
            ] {
                assert!(
                    (0.0..=1.0).contains(&value),
                    "{} = {} out of range for {} / {}",
                    name,
                    value,
                    job.id,
                    worker.id
                );
            }
            assert!(b.rating_bonus >= 0.0);
            assert!(score.total_score <= 1.0, "Total {} exceeds 1.0", score.total_score);
        }
    }
}

#[test]
fn test_skills_match_without_requirements() {
    let mut job = dubai_job();

    job.requirements = None;
    for worker in worker_grid() {
        assert_eq!(skills_match(&job, &worker), 1.0);
    }

    job.requirements = Some(JobRequirements { skills: None, experience: Some(3.0) });
    for worker in worker_grid() {
        assert_eq!(skills_match(&job, &worker), 1.0);
    }
}

#[test]
fn test_location_match_ignores_case() {
    let job = dubai_job();
    let mut worker = dubai_worker();
    worker.location = Some(Location { city: "dubai".to_string(), country: "Oman".to_string() });

    assert_eq!(location_match(&job, &worker), 1.0);
}

#[test]
fn test_budget_match_on_overlap() {
    let job = dubai_job();
    let mut worker = dubai_worker();

    // Touching at a single point still overlaps
    for (min, max) in [(60.0, 90.0), (20.0, 40.0), (45.0, 50.0), (10.0, 200.0)] {
        worker.hourly_rate = Some(RateRange { min, max });
        assert_eq!(budget_match(&job, &worker), 1.0, "rate {}-{}", min, max);
    }
}

#[test]
fn test_rating_bonus_requires_three_reviews() {
    let mut worker = dubai_worker();

    for review_count in 0..3 {
        for rating in [4.1, 4.5, 4.9, 5.0] {
            worker.review_count = review_count;
            worker.rating = Some(rating);
            assert_eq!(rating_bonus(&worker), 0.0);
        }
    }
}

#[test]
fn test_rating_bonus_two_reviews_exactly_zero() {
    let mut worker = dubai_worker();
    worker.review_count = 2;
    worker.rating = Some(4.9);

    assert_eq!(rating_bonus(&worker), 0.0);
}

#[test]
fn test_end_to_end_dubai_housekeeping() {
    let job = dubai_job();
    let worker = dubai_worker();

    assert_eq!(skills_match(&job, &worker), 1.0);
    assert_eq!(location_match(&job, &worker), 1.0);
    assert_eq!(budget_match(&job, &worker), 1.0);
    assert_eq!(availability_match(&job, &worker), 0.9);
    assert_eq!(experience_match(&job, &worker), 1.0);
    assert!((rating_bonus(&worker) - 0.08).abs() < 1e-9);

    let score = calculate_match_score(&job, &worker, &ScoringWeights::default());
    assert_eq!(score.total_score, 1.0);

    let reasons = generate_match_reasons(&score, &job, &worker);
    assert_eq!(
        reasons,
        vec![
            "Perfect skill match for housekeeping",
            "Located in same area",
            "Budget aligns with rate expectations",
        ]
    );
}

#[test]
fn test_jobs_for_worker_threshold_and_order() {
    let matcher = Matcher::with_default_weights();

    for worker in worker_grid() {
        let jobs = job_grid();
        let result = matcher.jobs_for_worker(&worker, &jobs, 100);

        for r in &result {
            assert!(r.match_score > 0.4, "Recommended job with score {}", r.match_score);
            assert!(r.reasons.len() <= 3);
        }

        for pair in result.windows(2) {
            assert!(pair[0].match_score >= pair[1].match_score);
            if pair[0].match_score == pair[1].match_score {
                let first = jobs.iter().position(|j| j.id == pair[0].item.id);
                let second = jobs.iter().position(|j| j.id == pair[1].item.id);
                assert!(first < second, "Tie broke input order");
            }
        }
    }
}

#[test]
fn test_workers_for_job_limit() {
    let matcher = Matcher::with_default_weights();
    let workers = worker_grid();

    for limit in [0, 1, 3] {
        let result = matcher.workers_for_job(&dubai_job(), &workers, limit);
        assert!(result.len() <= limit);
    }
}

#[test]
fn test_scoring_is_deterministic() {
    let matcher = Matcher::with_default_weights();
    let job = dubai_job();
    let worker = dubai_worker();

    assert_eq!(matcher.score(&job, &worker), matcher.score(&job, &worker));
}
