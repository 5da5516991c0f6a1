//! API configuration.

use thiserror::Error;

/// Configuration errors that are fatal at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("ACCESS_TOKEN_SECRET must be set to a non-empty signing key")]
    MissingTokenSecret,
}

/// API server configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// CORS origins
    pub cors_origins: Vec<String>,
    /// Rate limit requests per second
    pub rate_limit_rps: u32,
    /// Max request body size
    pub max_body_size: usize,
    /// Environment (development/production)
    pub environment: String,
    /// HS256 signing key for access tokens
    pub token_secret: String,
}

impl ApiConfig {
    /// Create config from environment variables.
    ///
    /// A missing or empty signing key is a hard error: token issuance
    /// must never fail per-request because of misconfiguration.
    pub fn from_env() -> Result<Self, ConfigError> {
        let token_secret = std::env::var("ACCESS_TOKEN_SECRET").unwrap_or_default();
        if token_secret.is_empty() {
            return Err(ConfigError::MissingTokenSecret);
        }

        Ok(Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(5000),
            cors_origins: std::env::var("CORS_ORIGINS")
                .map(|s| s.split(',').map(|s| s.trim().to_string()).collect())
                .unwrap_or_else(|_| vec!["*".to_string()]),
            rate_limit_rps: std::env::var("RATE_LIMIT_RPS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(10),
            max_body_size: std::env::var("MAX_BODY_SIZE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(2 * 1024 * 1024),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            token_secret,
        })
    }

    /// Check if running in production mode.
    pub fn is_production(&self) -> bool {
        self.environment.to_lowercase() == "production"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_missing_secret_is_fatal() {
        std::env::remove_var("ACCESS_TOKEN_SECRET");
        assert!(matches!(
            ApiConfig::from_env(),
            Err(ConfigError::MissingTokenSecret)
        ));
    }

    #[test]
    #[serial]
    fn test_defaults() {
        std::env::set_var("ACCESS_TOKEN_SECRET", "test-secret");
        std::env::remove_var("PORT");
        std::env::remove_var("CORS_ORIGINS");
        std::env::remove_var("ENVIRONMENT");
        let config = ApiConfig::from_env().unwrap();
        assert_eq!(config.port, 5000);
        assert_eq!(config.cors_origins, vec!["*".to_string()]);
        assert!(!config.is_production());
    }

    #[test]
    #[serial]
    fn test_port_override() {
        std::env::set_var("ACCESS_TOKEN_SECRET", "test-secret");
        std::env::set_var("PORT", "8080");
        let config = ApiConfig::from_env().unwrap();
        assert_eq!(config.port, 8080);
        std::env::remove_var("PORT");
    }
}
