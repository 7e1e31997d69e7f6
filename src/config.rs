/// Service configuration
///
/// Settings come from a TOML file (default `aquaguardian.toml`); every
/// field has a default so a missing file is not an error. Connection details
/// can be overridden from the environment (and a `.env` file), which keeps
/// access tokens out of the config file:
///
///   AQUAGUARDIAN_API_URL        → api.base_url
///   AQUAGUARDIAN_USER_ID        → api.user_id
///   AQUAGUARDIAN_ACCESS_TOKEN   → api.access_token
///   AQUAGUARDIAN_REGION_ID      → api.region_id

use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use crate::logging::LogLevel;

pub const DEFAULT_CONFIG_PATH: &str = "aquaguardian.toml";

pub const ENV_API_URL: &str = "AQUAGUARDIAN_API_URL";
pub const ENV_USER_ID: &str = "AQUAGUARDIAN_USER_ID";
pub const ENV_ACCESS_TOKEN: &str = "AQUAGUARDIAN_ACCESS_TOKEN";
pub const ENV_REGION_ID: &str = "AQUAGUARDIAN_REGION_ID";

// ---------------------------------------------------------------------------
// Configuration types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    /// The manager on whose behalf examinations are read and notices sent.
    pub user_id: Option<String>,
    pub access_token: Option<String>,
    /// The manager's region; its followers receive the notices.
    pub region_id: Option<String>,
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3001".to_string(),
            user_id: None,
            access_token: None,
            region_id: None,
            timeout_secs: 30,
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub file: Option<String>,
    pub timestamps: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
            timestamps: false,
        }
    }
}

impl LoggingConfig {
    /// The configured level, falling back to Info for unknown names.
    pub fn min_level(&self) -> LogLevel {
        LogLevel::from_name(&self.level).unwrap_or(LogLevel::Info)
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub enum ConfigError {
    Io(String, std::io::Error),
    Parse(String, toml::de::Error),
    /// A value required by the requested operation is missing.
    Missing(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(path, e) => write!(f, "Cannot read config {}: {}", path, e),
            ConfigError::Parse(path, e) => write!(f, "Invalid config {}: {}", path, e),
            ConfigError::Missing(what) => write!(f, "Missing configuration value: {}", what),
        }
    }
}

impl std::error::Error for ConfigError {}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// Parses configuration from TOML text.
pub fn parse_config(text: &str, origin: &str) -> Result<AppConfig, ConfigError> {
    toml::from_str(text).map_err(|e| ConfigError::Parse(origin.to_string(), e))
}

/// Loads the config file at `path`. A missing file yields the defaults.
pub fn load_config(path: &str) -> Result<AppConfig, ConfigError> {
    if !Path::new(path).exists() {
        return Ok(AppConfig::default());
    }
    let text = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(path.to_string(), e))?;
    parse_config(&text, path)
}

impl AppConfig {
    /// Applies overrides from a variable lookup. Empty values are ignored.
    pub fn apply_overrides(&mut self, vars: &HashMap<String, String>) {
        let get = |key: &str| vars.get(key).filter(|v| !v.trim().is_empty()).cloned();

        if let Some(url) = get(ENV_API_URL) {
            self.api.base_url = url;
        }
        if let Some(user) = get(ENV_USER_ID) {
            self.api.user_id = Some(user);
        }
        if let Some(token) = get(ENV_ACCESS_TOKEN) {
            self.api.access_token = Some(token);
        }
        if let Some(region) = get(ENV_REGION_ID) {
            self.api.region_id = Some(region);
        }
    }

    /// Loads `.env`, then the config file, then applies environment overrides.
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        let mut config = load_config(path)?;
        let vars: HashMap<String, String> = std::env::vars().collect();
        config.apply_overrides(&vars);
        Ok(config)
    }

    /// The acting manager id, required by every operation that talks to the API.
    pub fn require_user_id(&self) -> Result<&str, ConfigError> {
        self.api
            .user_id
            .as_deref()
            .ok_or(ConfigError::Missing("api.user_id / AQUAGUARDIAN_USER_ID"))
    }

    /// The manager's region, required to list its preferred users.
    pub fn require_region_id(&self) -> Result<&str, ConfigError> {
        self.api
            .region_id
            .as_deref()
            .ok_or(ConfigError::Missing("api.region_id / AQUAGUARDIAN_REGION_ID"))
    }
}
