use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

use crate::core::{Matcher, SkillSuggestions, TopSkillMapping};
use crate::models::{MatchThresholds, DEFAULT_MIN_MATCH_PERCENTAGE, MAX_ADVISORY_SKILLS, SKILL_ADVISORY_PERCENTAGE};
use crate::services::StoreCollections;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub store: StoreSettings,
    pub collection: CollectionSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StoreSettings {
    pub endpoint: String,
    pub api_key: String,
    pub project_id: String,
    pub database_id: String,
    pub timeout_secs: Option<u64>,
}

impl StoreSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.unwrap_or(30))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CollectionSettings {
    pub students: String,
    pub companies: String,
    pub jobs: String,
    pub internal_jobs: String,
}

impl From<CollectionSettings> for StoreCollections {
    fn from(value: CollectionSettings) -> Self {
        Self {
            students: value.students,
            companies: value.companies,
            jobs: value.jobs,
            internal_jobs: value.internal_jobs,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    #[serde(default = "default_min_match_percentage")]
    pub min_match_percentage: u8,
    #[serde(default = "default_skill_advisory_percentage")]
    pub skill_advisory_percentage: u8,
    #[serde(default = "default_max_advisory_skills")]
    pub max_advisory_skills: usize,
    #[serde(default)]
    pub top_skill_companies: Vec<TopSkillRule>,
    #[serde(default)]
    pub skill_suggestions: Vec<BranchSuggestions>,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            min_match_percentage: default_min_match_percentage(),
            skill_advisory_percentage: default_skill_advisory_percentage(),
            max_advisory_skills: default_max_advisory_skills(),
            top_skill_companies: Vec::new(),
            skill_suggestions: Vec::new(),
        }
    }
}

impl MatchingSettings {
    pub fn thresholds(&self) -> MatchThresholds {
        MatchThresholds {
            min_match_percentage: self.min_match_percentage.min(100),
            skill_advisory_percentage: self.skill_advisory_percentage.min(100),
            max_advisory_skills: self.max_advisory_skills,
        }
    }

    /// Build the matcher with the configured thresholds and tables
    pub fn matcher(&self) -> Matcher {
        let top_skills = TopSkillMapping::new(
            self.top_skill_companies
                .iter()
                .map(|rule| (rule.skill.as_str(), rule.company.clone())),
        );
        let suggestions = SkillSuggestions::new(
            self.skill_suggestions
                .iter()
                .map(|entry| (entry.branch.as_str(), entry.skills.clone())),
        );

        Matcher::new(self.thresholds(), top_skills, suggestions)
    }
}

/// One `skill -> company` row of the top-skill table
#[derive(Debug, Clone, Deserialize)]
pub struct TopSkillRule {
    pub skill: String,
    pub company: String,
}

/// Skills suggested to students of one branch
#[derive(Debug, Clone, Deserialize)]
pub struct BranchSuggestions {
    pub branch: String,
    pub skills: Vec<String>,
}

fn default_min_match_percentage() -> u8 { DEFAULT_MIN_MATCH_PERCENTAGE }
fn default_skill_advisory_percentage() -> u8 { SKILL_ADVISORY_PERCENTAGE }
fn default_max_advisory_skills() -> usize { MAX_ADVISORY_SKILLS }

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
    /// 4. Environment variables (prefixed with PLACEMENT_)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., PLACEMENT__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("PLACEMENT")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings = apply_store_env_overrides(settings)?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("PLACEMENT")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

/// Let the conventional `STORE_ENDPOINT` / `STORE_API_KEY` variables override
/// the store credentials
fn apply_store_env_overrides(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let mut builder = Config::builder().add_source(settings);

    if let Ok(endpoint) = env::var("STORE_ENDPOINT") {
        builder = builder.set_override("store.endpoint", endpoint)?;
    }
    if let Ok(api_key) = env::var("STORE_API_KEY") {
        builder = builder.set_override("store.api_key", api_key)?;
    }

    builder.build()
}
