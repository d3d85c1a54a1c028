use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::models::ScoringWeights;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub data: DataSettings,
    #[serde(default)]
    pub cors: CorsSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8000 }

#[derive(Debug, Clone, Deserialize)]
pub struct DataSettings {
    /// Seed file loaded at startup when present
    #[serde(default = "default_data_file")]
    pub file_path: String,
}

impl Default for DataSettings {
    fn default() -> Self {
        Self { file_path: default_data_file() }
    }
}

fn default_data_file() -> String { "data.json".to_string() }

#[derive(Debug, Clone, Deserialize)]
pub struct CorsSettings {
    /// Allowed origins; "*" allows any
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: Vec<String>,
}

impl Default for CorsSettings {
    fn default() -> Self {
        Self { allowed_origins: default_allowed_origins() }
    }
}

impl CorsSettings {
    pub fn allows_any(&self) -> bool {
        self.allowed_origins.is_empty() || self.allowed_origins.iter().any(|o| o == "*")
    }
}

fn default_allowed_origins() -> Vec<String> { vec!["*".to_string()] }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_skill_match_weight")]
    pub skill_match: f64,
    #[serde(default = "default_availability_weight")]
    pub availability: f64,
    #[serde(default = "default_experience_weight")]
    pub experience: f64,
    #[serde(default = "default_cost_weight")]
    pub cost: f64,
    #[serde(default = "default_location_weight")]
    pub location: f64,
    #[serde(default = "default_certification_weight")]
    pub certification: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            skill_match: default_skill_match_weight(),
            availability: default_availability_weight(),
            experience: default_experience_weight(),
            cost: default_cost_weight(),
            location: default_location_weight(),
            certification: default_certification_weight(),
        }
    }
}

fn default_skill_match_weight() -> f64 { 0.35 }
fn default_availability_weight() -> f64 { 0.25 }
fn default_experience_weight() -> f64 { 0.20 }
fn default_cost_weight() -> f64 { 0.10 }
fn default_location_weight() -> f64 { 0.05 }
fn default_certification_weight() -> f64 { 0.05 }

impl WeightsConfig {
    /// Configured weights, or the defaults when the set is out of range or
    /// does not sum to 1.0
    pub fn resolve(&self) -> ScoringWeights {
        let weights = ScoringWeights {
            skill_match: self.skill_match,
            availability: self.availability,
            experience: self.experience,
            cost: self.cost,
            location: self.location,
            certification: self.certification,
        };

        let in_range = [
            weights.skill_match,
            weights.availability,
            weights.experience,
            weights.cost,
            weights.location,
            weights.certification,
        ]
        .iter()
        .all(|w| (0.0..=1.0).contains(w));

        if in_range && weights.is_normalized() {
            weights
        } else {
            tracing::warn!(
                "Configured weights {:?} are invalid (sum {:.3}), using defaults",
                weights,
                weights.total()
            );
            ScoringWeights::default()
        }
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
    /// 4. Environment variables (prefixed with TEAM__)
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., TEAM__SERVER__PORT -> server.port
            .add_source(environment())
            .build()?
            .try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(environment())
            .build()?
            .try_deserialize()
    }
}

fn environment() -> Environment {
    Environment::with_prefix("TEAM")
        .prefix_separator("__")
        .separator("__")
        .list_separator(",")
        .with_list_parse_key("cors.allowed_origins")
        .try_parsing(true)
}
