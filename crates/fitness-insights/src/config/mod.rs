use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

/// Sheet backing the recruitment dashboard when `APP_SHEET_ID` is not set.
pub const DEFAULT_SHEET_ID: &str = "1F0LGfxAmq3osuX_Zg2yidVR3TlmG_geNW8AHscvyMng";

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
    pub sheets: SheetsConfig,
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

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig {
                log_level,
                compact: environment != AppEnvironment::Production,
            },
            sheets: SheetsConfig::from_env()?,
        })
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
    pub compact: bool,
}

/// Where candidate rows come from and what to use when the sheet is unreachable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetsConfig {
    /// `None` disables the remote fetch entirely.
    pub sheet_id: Option<String>,
    pub gid: String,
    pub api_key: Option<String>,
    pub range: String,
    pub export_base_url: String,
    pub api_base_url: String,
    pub timeout: Duration,
    pub fallback_csv: Option<PathBuf>,
}

impl Default for SheetsConfig {
    fn default() -> Self {
        Self {
            sheet_id: Some(DEFAULT_SHEET_ID.to_string()),
            gid: "0".to_string(),
            api_key: None,
            range: "Sheet1!A:C".to_string(),
            export_base_url: "https://docs.google.com".to_string(),
            api_base_url: "https://sheets.googleapis.com".to_string(),
            timeout: Duration::from_secs(10),
            fallback_csv: None,
        }
    }
}

impl SheetsConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let sheet_id = match env::var("APP_SHEET_ID") {
            Ok(value) => non_empty(value),
            Err(_) => defaults.sheet_id,
        };

        let timeout = match env::var("APP_FETCH_TIMEOUT_SECS") {
            Ok(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => return Err(ConfigError::InvalidTimeout),
            },
            Err(_) => defaults.timeout,
        };

        Ok(Self {
            sheet_id,
            gid: env::var("APP_SHEET_GID").unwrap_or(defaults.gid),
            api_key: env::var("APP_SHEETS_API_KEY").ok().and_then(non_empty),
            range: env::var("APP_SHEET_RANGE").unwrap_or(defaults.range),
            export_base_url: env::var("APP_SHEETS_BASE_URL").unwrap_or(defaults.export_base_url),
            api_base_url: env::var("APP_SHEETS_API_BASE_URL").unwrap_or(defaults.api_base_url),
            timeout,
            fallback_csv: env::var("APP_FALLBACK_CSV")
                .ok()
                .and_then(non_empty)
                .map(PathBuf::from),
        })
    }
}

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidTimeout,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidTimeout => {
                write!(f, "APP_FETCH_TIMEOUT_SECS must be a positive number of seconds")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidPort | ConfigError::InvalidTimeout => None,
            ConfigError::InvalidHost { source } => Some(source),
        }
    }
}
