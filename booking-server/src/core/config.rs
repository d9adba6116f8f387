//! Server configuration
//!
//! All settings come from environment variables (optionally via `.env`):
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | DATABASE_URL | sqlite:booking.db | SQLite database URL |
//! | HTTP_PORT | 8080 | HTTP API port |
//! | ENVIRONMENT | development | development \| staging \| production |
//! | LOG_LEVEL | info | tracing max level |
//! | LOG_DIR | (unset) | daily-rolling log file directory |

#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite database URL
    pub database_url: String,
    /// HTTP API port
    pub http_port: u16,
    /// Runtime environment: development | staging | production
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables, falling back to
    /// defaults when unset
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite:booking.db".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
