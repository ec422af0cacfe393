use std::time::Duration;

use serde::Deserialize;

use crate::domain::ClientConfig;
use crate::infrastructure::knowledge_base::DEFAULT_COZE_BASE_URL;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub coze: CozeConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CozeConfig {
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub dataset_id: Option<String>,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout; none when unset
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

fn default_base_url() -> String {
    DEFAULT_COZE_BASE_URL.to_string()
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            coze: CozeConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for CozeConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            dataset_id: None,
            base_url: default_base_url(),
            timeout_secs: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: LogFormat::default(),
        }
    }
}

impl CozeConfig {
    /// Credentials in the shape the client validates
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            api_key: self.api_key.clone(),
            dataset_id: self.dataset_id.clone(),
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(environment())
            .build()?;

        config.try_deserialize()
    }
}

/// `COZE_KB__SECTION__KEY` variables, kept as raw strings
///
/// Dataset IDs are numeric-looking; parsing them would drop leading zeros
/// or lose precision. Typed fields such as `timeout_secs` are converted on
/// deserialization instead.
fn environment() -> config::Environment {
    config::Environment::with_prefix("COZE_KB").separator("__")
}
