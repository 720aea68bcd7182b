// Core algorithm exports
pub mod factors;
pub mod matcher;
pub mod reasons;
pub mod scoring;

pub use factors::{availability_match, budget_match, experience_match, location_match, rating_bonus, skills_match};
pub use matcher::{Matcher, DEFAULT_LIMIT, DEFAULT_MIN_SCORE};
pub use reasons::{generate_match_reasons, MAX_REASONS};
pub use scoring::calculate_match_score;
