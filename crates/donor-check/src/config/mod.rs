use crate::eligibility::{CriteriaError, EligibilityConfig, ReasonPolicy, ResourceLink};
use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

/// Distinguishes runtime behavior for different stages of the service.
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
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub eligibility: EligibilityConfig,
    pub resource: ResourceLink,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let eligibility = load_eligibility()?;
        eligibility.validate().map_err(ConfigError::Criteria)?;

        let resource = env::var("DONOR_INFO_URL")
            .map(ResourceLink::new)
            .unwrap_or_default();

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            eligibility,
            resource,
        })
    }
}

fn load_eligibility() -> Result<EligibilityConfig, ConfigError> {
    let defaults = EligibilityConfig::standard();

    let reason_policy = match env::var("DONOR_REASON_POLICY") {
        Ok(raw) => ReasonPolicy::parse(&raw).ok_or(ConfigError::InvalidReasonPolicy(raw))?,
        Err(_) => defaults.reason_policy,
    };

    Ok(EligibilityConfig {
        min_age: env_or("DONOR_MIN_AGE", defaults.min_age)?,
        max_age: env_or("DONOR_MAX_AGE", defaults.max_age)?,
        min_weight_kg: env_or("DONOR_MIN_WEIGHT_KG", defaults.min_weight_kg)?,
        high_volume_weight_threshold_kg: env_or(
            "DONOR_HIGH_VOLUME_THRESHOLD_KG",
            defaults.high_volume_weight_threshold_kg,
        )?,
        standard_volume_ml: env_or("DONOR_STANDARD_VOLUME_ML", defaults.standard_volume_ml)?,
        high_volume_ml: env_or("DONOR_HIGH_VOLUME_ML", defaults.high_volume_ml)?,
        reason_policy,
    })
}

fn env_or<T: FromStr>(key: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::InvalidNumber { key, value: raw }),
        Err(_) => Ok(default),
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidNumber { key: &'static str, value: String },
    InvalidReasonPolicy(String),
    Criteria(CriteriaError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidNumber { key, value } => {
                write!(f, "{key} must be numeric (found '{value}')")
            }
            ConfigError::InvalidReasonPolicy(value) => write!(
                f,
                "DONOR_REASON_POLICY must be collect_all or first_failure (found '{value}')"
            ),
            ConfigError::Criteria(err) => write!(f, "invalid eligibility criteria: {err}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::Criteria(err) => Some(err),
            ConfigError::InvalidPort
            | ConfigError::InvalidNumber { .. }
            | ConfigError::InvalidReasonPolicy(_) => None,
        }
    }
}
