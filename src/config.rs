use crate::error::{Result, TriageError};
use serde::Deserialize;
use std::net::SocketAddr;

/// Main configuration structure loaded from symptom_triage.toml and environment variables
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    /// Runtime configuration loaded from environment variables
    #[serde(skip)]
    pub runtime: RuntimeConfig,
}

/// HTTP transport configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub http_bind: SocketAddr,
    pub request_timeout_ms: u64,
    /// Allow any origin to call /chat from a browser
    pub cors_permissive: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_bind: SocketAddr::from(([127, 0, 0, 1], 5000)),
            request_timeout_ms: 10_000,
            cors_permissive: true,
        }
    }
}

/// Runtime configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub log_level: String,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            log_level: "symptom_triage=info".to_string(),
        }
    }
}

impl RuntimeConfig {
    /// Load runtime configuration from environment variables
    pub fn load_from_env() -> Self {
        Self {
            log_level: std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "symptom_triage=info".to_string()),
        }
    }
}

impl Config {
    /// Load configuration from TOML file and environment variables.
    /// Uses SYMPTOM_TRIAGE_CONFIG or defaults to "symptom_triage.toml".
    pub fn load() -> Result<Self> {
        if let Ok(env_path) = std::env::var("TRIAGE_ENV_FILE") {
            let _ = dotenvy::from_path(env_path);
        } else {
            let _ = dotenvy::dotenv();
        }

        let config_path = std::env::var("SYMPTOM_TRIAGE_CONFIG")
            .unwrap_or_else(|_| "symptom_triage.toml".to_string());

        let mut config = match std::fs::read_to_string(&config_path) {
            Ok(content) => Self::from_toml(&content)?,
            Err(_) => {
                tracing::warn!("Config file {} not found, using defaults", config_path);
                Self::default()
            }
        };

        config.apply_env_overrides();
        config.runtime = RuntimeConfig::load_from_env();
        config.validate()?;
        Ok(config)
    }

    /// Parse the file layer only, without env overrides
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Apply TRIAGE_HTTP_* overrides (env-first). Unparseable values are ignored.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(v) = std::env::var("TRIAGE_HTTP_BIND") {
            match v.parse::<SocketAddr>() {
                Ok(bind) => {
                    self.server.http_bind = bind;
                    tracing::debug!("TRIAGE_HTTP_BIND env override applied");
                }
                Err(_) => tracing::warn!("Ignoring invalid TRIAGE_HTTP_BIND '{}'", v),
            }
        }
        if let Ok(v) = std::env::var("TRIAGE_HTTP_REQUEST_TIMEOUT_MS") {
            match v.parse::<u64>() {
                Ok(ms) => self.server.request_timeout_ms = ms,
                Err(_) => tracing::warn!("Ignoring invalid TRIAGE_HTTP_REQUEST_TIMEOUT_MS '{}'", v),
            }
        }
        if let Ok(v) = std::env::var("TRIAGE_HTTP_CORS") {
            self.server.cors_permissive = v == "1" || v.eq_ignore_ascii_case("true");
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.request_timeout_ms == 0 {
            return Err(TriageError::Config {
                message: "request_timeout_ms must be greater than 0".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::default();
        assert_eq!(config.server.http_bind.to_string(), "127.0.0.1:5000");
        assert!(config.server.cors_permissive);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = Config::from_toml(
            r#"
            [server]
            http_bind = "0.0.0.0:8080"
            "#,
        )
        .unwrap();
        assert_eq!(config.server.http_bind.port(), 8080);
        assert_eq!(config.server.request_timeout_ms, 10_000);
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config.server.http_bind, ServerConfig::default().http_bind);
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = Config::from_toml("[server]\nhttp_bind = 5").unwrap_err();
        assert!(matches!(err, TriageError::Config { .. }));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let mut config = Config::default();
        config.server.request_timeout_ms = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_env_overrides() {
        unsafe {
            std::env::set_var("TRIAGE_HTTP_BIND", "127.0.0.1:9191");
            std::env::set_var("TRIAGE_HTTP_CORS", "false");
        }

        let mut config = Config::default();
        config.apply_env_overrides();
        assert_eq!(config.server.http_bind.port(), 9191);
        assert!(!config.server.cors_permissive);

        unsafe {
            std::env::set_var("TRIAGE_HTTP_BIND", "not-an-address");
        }
        let mut config = Config::default();
        config.apply_env_overrides();
        assert_eq!(config.server.http_bind.port(), 5000);

        unsafe {
            std::env::remove_var("TRIAGE_HTTP_BIND");
            std::env::remove_var("TRIAGE_HTTP_CORS");
        }
    }
}
