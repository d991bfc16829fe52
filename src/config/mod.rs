use std::env;
use std::fmt;

const DEFAULT_GATEWAY_URL: &str = "http://127.0.0.1:5000/api/generate-tenancy-pack";

/// Distinguishes runtime behavior for different stages of the tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub gateway: GatewayConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let endpoint =
            env::var("PACK_GATEWAY_URL").unwrap_or_else(|_| DEFAULT_GATEWAY_URL.to_string());
        if endpoint.trim().is_empty() {
            return Err(ConfigError::EmptyGatewayUrl);
        }

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            gateway: GatewayConfig { endpoint },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

/// Where generated tenancy packs are requested from.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub endpoint: String,
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    EmptyGatewayUrl,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyGatewayUrl => {
                write!(f, "PACK_GATEWAY_URL must not be set to an empty value")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
