use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub backend_url_development: String,
    pub backend_url_production: String,
    pub environment: String,
    pub use_mock_api: bool,
    pub enable_logging: bool,
    pub mock_latency: MockLatency,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url_development: "http://localhost:3000".to_string(),
            backend_url_production: "https://api.tutors.example.com".to_string(),
            environment: "development".to_string(),
            use_mock_api: true,
            enable_logging: true,
            mock_latency: MockLatency::default(),
        }
    }
}

/// Simulated round-trip time of the in-memory data source, in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MockLatency {
    pub login_ms: u32,
    pub list_ms: u32,
    pub assign_ms: u32,
}

impl MockLatency {
    pub const NONE: Self = Self {
        login_ms: 0,
        list_ms: 0,
        assign_ms: 0,
    };
}

impl Default for MockLatency {
    fn default() -> Self {
        Self {
            login_ms: 800,
            list_ms: 500,
            assign_ms: 1000,
        }
    }
}

impl AppConfig {
    /// Build the configuration from compile-time environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            backend_url_development: option_env!("BACKEND_URL_DEVELOPMENT")
                .map(str::to_string)
                .unwrap_or(defaults.backend_url_development),
            backend_url_production: option_env!("BACKEND_URL_PRODUCTION")
                .map(str::to_string)
                .unwrap_or(defaults.backend_url_production),
            environment: option_env!("ENVIRONMENT")
                .map(str::to_string)
                .unwrap_or(defaults.environment),
            use_mock_api: parse_or(option_env!("USE_MOCK_API"), defaults.use_mock_api),
            enable_logging: parse_or(option_env!("ENABLE_LOGGING"), defaults.enable_logging),
            mock_latency: MockLatency {
                login_ms: parse_or(option_env!("MOCK_LOGIN_LATENCY_MS"), defaults.mock_latency.login_ms),
                list_ms: parse_or(option_env!("MOCK_LIST_LATENCY_MS"), defaults.mock_latency.list_ms),
                assign_ms: parse_or(option_env!("MOCK_ASSIGN_LATENCY_MS"), defaults.mock_latency.assign_ms),
            },
        }
    }

    /// Backend URL for the current environment
    pub fn backend_url(&self) -> &str {
        match self.environment.as_str() {
            "production" => &self.backend_url_production,
            _ => &self.backend_url_development,
        }
    }

    /// Whether the browser logger gets installed
    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }
}

fn parse_or<T: std::str::FromStr>(raw: Option<&str>, default: T) -> T {
    raw.and_then(|value| value.trim().parse().ok()).unwrap_or(default)
}

lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
