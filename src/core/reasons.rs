use crate::models::{Job, MatchScore, WorkerProfile};

/// Maximum number of reasons attached to a recommendation
pub const MAX_REASONS: usize = 3;

/// Inputs a reason may draw on when rendering
pub struct ReasonContext<'a> {
    pub score: &'a MatchScore,
    pub job: &'a Job,
    pub worker: &'a WorkerProfile,
}

/// One entry of the reason table
pub struct ReasonRule {
    pub applies: fn(&ReasonContext) -> bool,
    pub render: fn(&ReasonContext) -> String,
}

/// Reason rules in evaluation order. The order is part of the output
/// contract: only the first `MAX_REASONS` that apply are kept.
pub static REASON_RULES: &[ReasonRule] = &[
    ReasonRule { applies: perfect_skills, render: render_perfect_skills },
    ReasonRule { applies: good_skills, render: render_good_skills },
    ReasonRule { applies: same_area, render: render_same_area },
    ReasonRule { applies: same_region, render: render_same_region },
    ReasonRule { applies: budget_aligned, render: render_budget_aligned },
    ReasonRule { applies: experienced, render: render_experienced },
    ReasonRule { applies: highly_rated, render: render_highly_rated },
    ReasonRule { applies: flexible_schedule, render: render_flexible_schedule },
];

// Skills and location each yield at most one reason, so the lower tier
// excludes the range the upper tier already covers.

fn perfect_skills(ctx: &ReasonContext) -> bool {
    ctx.score.breakdown.skills_match >= 0.8
}

fn render_perfect_skills(ctx: &ReasonContext) -> String {
    format!("Perfect skill match for {}", ctx.job.service_type)
}

fn good_skills(ctx: &ReasonContext) -> bool {
    (0.6..0.8).contains(&ctx.score.breakdown.skills_match)
}

fn render_good_skills(_: &ReasonContext) -> String {
    "Good skill compatibility".to_string()
}

fn same_area(ctx: &ReasonContext) -> bool {
    ctx.score.breakdown.location_match >= 0.9
}

fn render_same_area(_: &ReasonContext) -> String {
    "Located in same area".to_string()
}

fn same_region(ctx: &ReasonContext) -> bool {
    (0.7..0.9).contains(&ctx.score.breakdown.location_match)
}

fn render_same_region(_: &ReasonContext) -> String {
    "Located in same region".to_string()
}

fn budget_aligned(ctx: &ReasonContext) -> bool {
    ctx.score.breakdown.budget_match >= 0.8
}

fn render_budget_aligned(_: &ReasonContext) -> String {
    "Budget aligns with rate expectations".to_string()
}

fn experienced(ctx: &ReasonContext) -> bool {
    ctx.score.breakdown.experience_match >= 0.9
}

fn render_experienced(ctx: &ReasonContext) -> String {
    format!("{}+ years experience", ctx.worker.experience)
}

fn highly_rated(ctx: &ReasonContext) -> bool {
    ctx.score.breakdown.rating_bonus > 0.0
}

fn render_highly_rated(ctx: &ReasonContext) -> String {
    format!("Highly rated ({}★)", ctx.worker.rating.unwrap_or_default())
}

fn flexible_schedule(ctx: &ReasonContext) -> bool {
    ctx.score.breakdown.availability_match >= 0.8
}

fn render_flexible_schedule(_: &ReasonContext) -> String {
    "Schedule flexibility matches".to_string()
}

/// Human-readable reasons for a computed match, at most `MAX_REASONS`
pub fn generate_match_reasons(score: &MatchScore, job: &Job, worker: &WorkerProfile) -> Vec<String> {
    let ctx = ReasonContext { score, job, worker };

    REASON_RULES
        .iter()
        .filter(|rule| (rule.applies)(&ctx))
        .take(MAX_REASONS)
        .map(|rule| (rule.render)(&ctx))
        .collect()
}
