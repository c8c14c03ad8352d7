use std::env;
use std::fmt;
use std::path::PathBuf;

/// Distinguishes runtime behavior for different stages of the tooling.
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
    pub reporting: ReportingConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let top_companies = env::var("APP_TOP_COMPANIES")
            .unwrap_or_else(|_| "5".to_string())
            .parse::<usize>()
            .map_err(|_| ConfigError::InvalidTopCompanies)?;
        if top_companies == 0 {
            return Err(ConfigError::InvalidTopCompanies);
        }

        let export_dir = PathBuf::from(env::var("APP_EXPORT_DIR").unwrap_or_else(|_| ".".to_string()));

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            reporting: ReportingConfig {
                top_companies,
                export_dir,
            },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

/// Settings controlling dashboard reporting and exports.
#[derive(Debug, Clone)]
pub struct ReportingConfig {
    /// How many companies the top-hiring ranking keeps.
    pub top_companies: usize,
    /// Directory the drive export is written into.
    pub export_dir: PathBuf,
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidTopCompanies,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTopCompanies => {
                write!(f, "APP_TOP_COMPANIES must be a positive integer")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
