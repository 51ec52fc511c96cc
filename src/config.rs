use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::Path;
use tracing::{info, warn};
use url::Url;

use crate::constants::{provider, server};
use crate::error::{AdvisorError, AdvisorResult};

#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    #[default]
    Finnhub,
    /// Fixed in-process quotes for local development
    Static,
}

impl ProviderKind {
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "finnhub" => Some(ProviderKind::Finnhub),
            "static" => Some(ProviderKind::Static),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: server::DEFAULT_BIND_ADDR.to_string(),
        }
    }
}

#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct FinnhubConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    /// Request timeout; unset leaves reqwest's default (no timeout)
    pub timeout_secs: Option<u64>,
}

impl Default for FinnhubConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: provider::FINNHUB_BASE_URL.to_string(),
            timeout_secs: None,
        }
    }
}

impl FinnhubConfig {
    /// The configured credential, treating blank values as unset.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
    }
}

// Keeps the credential out of startup logs.
impl fmt::Debug for FinnhubConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FinnhubConfig")
            .field("api_key", &self.api_key().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub provider: ProviderKind,
    pub server: ServerConfig,
    pub finnhub: FinnhubConfig,
}

impl AppConfig {
    pub fn load() -> AdvisorResult<Self> {
        Self::load_from_path("config.yaml", |key| std::env::var(key).ok())
    }

    /// Reads `path` if it exists, then applies environment overrides from `env`.
    pub fn load_from_path<F>(path: impl AsRef<Path>, env: F) -> AdvisorResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let path = path.as_ref();
        let mut config = if path.exists() {
            let content = fs::read_to_string(path).map_err(|e| {
                AdvisorError::Configuration(format!("Failed to read {}: {}", path.display(), e))
            })?;
            info!("Loaded configuration file {}", path.display());
            Self::from_yaml_str(&content)?
        } else {
            warn!("⚠️ {} not found, using defaults", path.display());
            Self::default()
        };

        config.apply_env_overrides(env)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_yaml_str(content: &str) -> AdvisorResult<Self> {
        // Strip BOM if present
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(content)
            .map_err(|e| AdvisorError::Configuration(format!("Failed to parse config: {}", e)))
    }

    pub fn apply_env_overrides<F>(&mut self, env: F) -> AdvisorResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = env(provider::FINNHUB_API_KEY_ENV) {
            self.finnhub.api_key = Some(key);
        }

        if let Some(name) = env("QUOTE_PROVIDER") {
            self.provider = ProviderKind::parse(&name).ok_or_else(|| {
                AdvisorError::Configuration(format!(
                    "Unknown QUOTE_PROVIDER='{}' (expected finnhub|static)",
                    name
                ))
            })?;
        }

        if let Some(addr) = env("BIND_ADDR") {
            self.server.bind_addr = addr;
        } else if let Some(port) = env("PORT") {
            let port: u16 = port
                .trim()
                .parse()
                .map_err(|_| AdvisorError::Configuration(format!("Invalid PORT '{}'", port)))?;
            self.server.bind_addr = format!("0.0.0.0:{}", port);
        }

        Ok(())
    }

    pub fn validate(&self) -> AdvisorResult<()> {
        let url = Url::parse(&self.finnhub.base_url).map_err(|e| {
            AdvisorError::Configuration(format!(
                "Invalid finnhub.base_url '{}': {}",
                self.finnhub.base_url, e
            ))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(AdvisorError::Configuration(format!(
                "finnhub.base_url must be http(s), got '{}'",
                url.scheme()
            )));
        }

        if self.finnhub.timeout_secs == Some(0) {
            return Err(AdvisorError::Configuration(
                "finnhub.timeout_secs must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }
}
