use serde::Deserialize;

use crate::domain::DomainError;
use crate::infrastructure::auth::{Secret, TokenConfig, DEFAULT_EXPIRES_IN_SECS};

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub auth: AuthConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Token settings
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Token lifetime in seconds
    pub expires_in_secs: u64,
    /// Fixed signing secret; a random one is generated per process when unset
    pub secret: Option<String>,
    /// Principals known to the in-memory directory; empty disables the lookup
    pub principals: Vec<i64>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            expires_in_secs: DEFAULT_EXPIRES_IN_SECS,
            secret: None,
            principals: Vec::new(),
        }
    }
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("expires_in_secs", &self.expires_in_secs)
            .field("secret", &self.secret.as_ref().map(|_| "[hidden]"))
            .field("principals", &self.principals)
            .finish()
    }
}

impl AuthConfig {
    pub fn token_config(&self) -> TokenConfig {
        TokenConfig::new(self.expires_in_secs)
    }

    /// The configured secret, or a freshly generated one
    pub fn resolve_secret(&self) -> Result<Secret, DomainError> {
        match &self.secret {
            Some(secret) => Secret::from_bytes(secret),
            None => Ok(Secret::generate()),
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("auth.principals"),
            )
            .build()?;

        config.try_deserialize()
    }
}
