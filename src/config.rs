use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use smartchef_recipe::Generator;
use std::env;

/// Application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    #[serde(default)]
    pub gemini: GeminiConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

/// Primary recipe provider settings. Without an API key every generation is
/// served by the local generator.
#[derive(Debug, Deserialize, Clone)]
pub struct GeminiConfig {
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_gemini_model")]
    pub model: String,
    #[serde(default = "default_gemini_base_url")]
    pub base_url: String,
    #[serde(default = "default_gemini_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_gemini_model(),
            base_url: default_gemini_base_url(),
            timeout_secs: default_gemini_timeout_secs(),
        }
    }
}

fn default_gemini_model() -> String {
    smartchef_recipe::DEFAULT_MODEL.to_string()
}

fn default_gemini_base_url() -> String {
    smartchef_recipe::API_BASE_URL.to_string()
}

fn default_gemini_timeout_secs() -> u64 {
    30
}

impl GeminiConfig {
    /// The API key, if one is set and not blank.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }

    /// Builds the generation service: Gemini first when a key is configured,
    /// the local generator otherwise.
    pub fn generator(&self) -> anyhow::Result<Generator> {
        let Some(api_key) = self.api_key() else {
            tracing::info!("no Gemini API key configured, using local recipe generator");
            return Ok(Generator::local());
        };

        let provider = smartchef_recipe::GeminiProvider::new(api_key)
            .with_model(&self.model)
            .with_base_url(&self.base_url)
            .with_timeout(std::time::Duration::from_secs(self.timeout_secs))?;

        Ok(Generator::new(provider))
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Legacy variables (DATABASE_URL, GEMINI_API_KEY)
    /// 2. Environment variables (SMARTCHEF__DATABASE__URL, etc.)
    /// 3. Config file specified by path, CONFIG_PATH or config/default.toml
    /// 4. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder()
            .set_default("database.url", "sqlite:smartchef.db")?
            .set_default("database.max_connections", 5)?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("SMARTCHEF")
                .separator("__")
                .try_parsing(true),
        );

        if let Ok(database_url) = env::var("DATABASE_URL") {
            builder = builder.set_override("database.url", database_url)?;
        }
        if let Ok(api_key) = env::var("GEMINI_API_KEY") {
            builder = builder.set_override("gemini.api_key", api_key)?;
        }

        builder.build()?.try_deserialize()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.database.max_connections < 1 {
            return Err("Database max_connections must be at least 1".to_string());
        }
        if self.gemini.timeout_secs == 0 {
            return Err("Gemini timeout_secs must be greater than 0".to_string());
        }
        if self.gemini.model.trim().is_empty() {
            return Err("Gemini model must not be empty".to_string());
        }
        Ok(())
    }
}
