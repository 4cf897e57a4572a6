//! Server configuration

/// Server configuration, loaded from environment variables
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | DATABASE_URL | sqlite:employees.db | SQLite path or URL, `memory` for an in-memory store |
/// | HTTP_HOST | 0.0.0.0 | Bind address |
/// | HTTP_PORT | 8080 | HTTP port |
/// | ENVIRONMENT | development | development / staging / production |
/// | LOG_LEVEL | info | Default log filter |
/// | LOG_JSON | true in production | JSON console output |
/// | LOG_DIR | (unset) | Enables daily rotating file logs |
/// | DB_MAX_CONNECTIONS | 5 | Pool size |
///
/// # Example
///
/// ```ignore
/// DATABASE_URL=sqlite:/data/employees.db HTTP_PORT=9000 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite database URL or path
    pub database_url: String,
    /// Bind address
    pub http_host: String,
    /// HTTP API port
    pub http_port: u16,
    /// Environment: development | staging | production
    pub environment: String,
    /// Default log level
    pub log_level: String,
    /// JSON console logs
    pub log_json: bool,
    /// Directory for rotating file logs
    pub log_dir: Option<String>,
    /// Maximum pooled connections
    pub db_max_connections: u32,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Unset variables fall back to defaults
    pub fn from_env() -> Self {
        let environment = std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into());
        let is_production = environment == "production";

        Self {
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite:employees.db".into()),
            http_host: std::env::var("HTTP_HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_json: std::env::var("LOG_JSON")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(is_production),
            log_dir: std::env::var("LOG_DIR").ok().filter(|s| !s.is_empty()),
            db_max_connections: std::env::var("DB_MAX_CONNECTIONS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5),
            environment,
        }
    }

    /// Override the database and port, keeping the rest from the environment
    ///
    /// Used by tests
    pub fn with_overrides(database_url: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.database_url = database_url.into();
        config.http_port = http_port;
        config
    }

    /// Socket address string for the HTTP listener
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.http_host, self.http_port)
    }

    /// Whether the store lives only in memory
    pub fn is_in_memory(&self) -> bool {
        matches!(
            self.database_url.as_str(),
            "memory" | ":memory:" | "sqlite::memory:"
        )
    }
}
