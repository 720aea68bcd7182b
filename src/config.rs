use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::core::{DEFAULT_LIMIT, DEFAULT_MIN_SCORE};
use crate::models::ScoringWeights;
use crate::services::catalog::DEFAULT_CAPACITY;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub catalog: CatalogSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MatchingSettings {
    pub default_limit: Option<usize>,
    pub max_limit: Option<usize>,
    pub min_score: Option<f64>,
}

impl MatchingSettings {
    pub fn default_limit(&self) -> usize {
        self.default_limit.unwrap_or(DEFAULT_LIMIT)
    }

    pub fn max_limit(&self) -> usize {
        self.max_limit.unwrap_or(100)
    }

    pub fn min_score(&self) -> f64 {
        self.min_score.unwrap_or(DEFAULT_MIN_SCORE)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_skills_weight")]
    pub skills: f64,
    #[serde(default = "default_location_weight")]
    pub location: f64,
    #[serde(default = "default_availability_weight")]
    pub availability: f64,
    #[serde(default = "default_budget_weight")]
    pub budget: f64,
    #[serde(default = "default_experience_weight")]
    pub experience: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            skills: default_skills_weight(),
            location: default_location_weight(),
            availability: default_availability_weight(),
            budget: default_budget_weight(),
            experience: default_experience_weight(),
        }
    }
}

impl From<&WeightsConfig> for ScoringWeights {
    fn from(config: &WeightsConfig) -> Self {
        Self {
            skills: config.skills,
            location: config.location,
            availability: config.availability,
            budget: config.budget,
            experience: config.experience,
        }
    }
}

fn default_skills_weight() -> f64 { 0.30 }
fn default_location_weight() -> f64 { 0.25 }
fn default_availability_weight() -> f64 { 0.20 }
fn default_budget_weight() -> f64 { 0.15 }
fn default_experience_weight() -> f64 { 0.10 }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogSettings {
    pub seed_path: Option<String>,
    /// Cap on jobs and on workers accepted through the create routes
    pub max_entries: Option<usize>,
}

impl CatalogSettings {
    pub fn max_entries(&self) -> usize {
        self.max_entries.unwrap_or(DEFAULT_CAPACITY)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with HELPER__)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., HELPER__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("HELPER")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080)?
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("HELPER")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    pub fn weights(&self) -> ScoringWeights {
        ScoringWeights::from(&self.scoring.weights)
    }
}
