use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use crate::models::ScoringWeights;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub speech: SpeechSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub generation: GenerationSettings,
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

fn default_host() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16 { 8080 }

#[derive(Debug, Clone, Deserialize)]
pub struct SpeechSettings {
    #[serde(default = "default_speech_base_url")]
    pub base_url: String,
    pub api_key: Option<String>,
    pub voice_id: Option<String>,
}

impl Default for SpeechSettings {
    fn default() -> Self {
        Self {
            base_url: default_speech_base_url(),
            api_key: None,
            voice_id: None,
        }
    }
}

fn default_speech_base_url() -> String { crate::services::elevenlabs::DEFAULT_BASE_URL.to_string() }

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    #[serde(default = "default_max_results")]
    pub max_results: usize,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self { max_results: default_max_results() }
    }
}

fn default_max_results() -> usize { crate::core::DEFAULT_MAX_RESULTS }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_in_budget_bonus")]
    pub in_budget_bonus: f64,
    #[serde(default = "default_budget_penalty_divisor")]
    pub budget_penalty_divisor: f64,
    #[serde(default = "default_area_bonus")]
    pub area_bonus: f64,
    #[serde(default = "default_vibe_weight")]
    pub vibe_weight: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            in_budget_bonus: default_in_budget_bonus(),
            budget_penalty_divisor: default_budget_penalty_divisor(),
            area_bonus: default_area_bonus(),
            vibe_weight: default_vibe_weight(),
        }
    }
}

impl From<&WeightsConfig> for ScoringWeights {
    fn from(config: &WeightsConfig) -> Self {
        Self {
            in_budget_bonus: config.in_budget_bonus,
            budget_penalty_divisor: config.budget_penalty_divisor,
            area_bonus: config.area_bonus,
            vibe_weight: config.vibe_weight,
        }
    }
}

fn default_in_budget_bonus() -> f64 { 4.0 }
fn default_budget_penalty_divisor() -> f64 { 50.0 }
fn default_area_bonus() -> f64 { 3.0 }
fn default_vibe_weight() -> f64 { 1.5 }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerationSettings {
    /// Artificial pause before a reply is returned, in milliseconds
    #[serde(default)]
    pub simulated_latency_ms: u64,
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
fn default_log_format() -> String { "compact".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with HOUSR__)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., HOUSR__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("HOUSR")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings = substitute_env_vars(settings)?;

        settings.try_deserialize()
    }

    pub fn scoring_weights(&self) -> ScoringWeights {
        ScoringWeights::from(&self.scoring.weights)
    }
}

/// Pick up the plain ElevenLabs variables the dashboard has always used
fn substitute_env_vars(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let api_key = env::var("ELEVENLABS_API_KEY").ok();
    let voice_id = env::var("ELEVENLABS_VOICE_ID").ok();

    let mut builder = Config::builder().add_source(settings);

    if let Some(api_key) = api_key {
        builder = builder.set_override("speech.api_key", api_key)?;
    }
    if let Some(voice_id) = voice_id {
        builder = builder.set_override("speech.voice_id", voice_id)?;
    }

    builder.build()
}
