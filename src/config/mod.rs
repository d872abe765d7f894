use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub security: SecurityConfig,
    pub api: ApiConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Environment {
    Development,
    Staging,
    Production,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityConfig {
    /// Name of the environment variable holding the shared bearer secret.
    /// The secret itself never lives in the config; the gate reads it per request.
    pub api_key_env: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub enable_cors: bool,
    pub enable_request_logging: bool,
    pub max_request_size_bytes: usize,
}

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let environment = match env::var("APP_ENV").as_deref() {
            Ok("production") | Ok("prod") => Environment::Production,
            Ok("staging") | Ok("stage") => Environment::Staging,
            _ => Environment::Development,
        };

        // Set defaults based on environment, then override with specific env vars
        Self::for_environment(environment).with_env_overrides()
    }

    pub fn for_environment(environment: Environment) -> Self {
        match environment {
            Environment::Production => Self::production(),
            Environment::Staging => Self::staging(),
            Environment::Development => Self::development(),
        }
    }

    fn with_env_overrides(mut self) -> Self {
        // Server overrides
        if let Ok(v) = env::var("MCP_HOST") {
            self.server.host = v;
        }
        if let Some(port) = env::var("MCP_PORT")
            .ok()
            .or_else(|| env::var("PORT").ok())
            .and_then(|s| s.parse::<u16>().ok())
        {
            self.server.port = port;
        }

        // Security overrides
        if let Ok(v) = env::var("API_KEY_ENV_VAR") {
            if !v.trim().is_empty() {
                self.security.api_key_env = v.trim().to_string();
            }
        }

        // API overrides
        if let Ok(v) = env::var("API_ENABLE_CORS") {
            self.api.enable_cors = v.parse().unwrap_or(self.api.enable_cors);
        }
        if let Ok(v) = env::var("API_ENABLE_REQUEST_LOGGING") {
            self.api.enable_request_logging = v.parse().unwrap_or(self.api.enable_request_logging);
        }
        if let Ok(v) = env::var("API_MAX_REQUEST_SIZE_BYTES") {
            self.api.max_request_size_bytes = v.parse().unwrap_or(self.api.max_request_size_bytes);
        }

        self
    }

    fn development() -> Self {
        Self {
            environment: Environment::Development,
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8000,
            },
            security: SecurityConfig {
                api_key_env: "API_KEY".to_string(),
            },
            api: ApiConfig {
                enable_cors: true,
                enable_request_logging: true,
                max_request_size_bytes: 1024 * 1024, // 1MB
            },
        }
    }

    fn staging() -> Self {
        Self {
            environment: Environment::Staging,
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 8000,
            },
            security: SecurityConfig {
                api_key_env: "API_KEY".to_string(),
            },
            api: ApiConfig {
                enable_cors: true,
                enable_request_logging: true,
                max_request_size_bytes: 256 * 1024,
            },
        }
    }

    fn production() -> Self {
        Self {
            environment: Environment::Production,
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 8000,
            },
            security: SecurityConfig {
                api_key_env: "API_KEY".to_string(),
            },
            api: ApiConfig {
                enable_cors: false,
                enable_request_logging: false,
                max_request_size_bytes: 64 * 1024,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_development_config() {
        let config = AppConfig::development();
        assert_eq!(config.environment, Environment::Development);
        assert_eq!(config.server.bind_addr(), "127.0.0.1:8000");
        assert_eq!(config.security.api_key_env, "API_KEY");
        assert!(config.api.enable_cors);
    }

    #[test]
    fn test_default_production_config() {
        let config = AppConfig::production();
        assert_eq!(config.server.host, "0.0.0.0");
        assert!(!config.api.enable_cors);
        assert!(!config.api.enable_request_logging);
        assert!(config.api.max_request_size_bytes < AppConfig::development().api.max_request_size_bytes);
    }

    #[test]
    fn test_every_environment_reads_api_key() {
        for env in [Environment::Development, Environment::Staging, Environment::Production] {
            assert_eq!(AppConfig::for_environment(env).security.api_key_env, "API_KEY");
        }
    }
}
