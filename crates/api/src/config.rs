use produtos_core::pagination::{PageLimits, DEFAULT_LIMIT, MAX_LIMIT};

/// Server configuration loaded from environment variables.
///
/// All fields except the database URL have defaults suitable for local
/// development. In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Seconds to wait for in-flight requests after a shutdown signal (default: `30`).
    pub shutdown_timeout_secs: u64,
    /// PostgreSQL connection string (required).
    pub database_url: String,
    /// Maximum pool size (default: `20`).
    pub db_max_connections: u32,
    /// Page size for list endpoints when `limit` is omitted (default: `50`).
    pub default_page_size: i64,
    /// Largest page a list request may ask for (default: `200`).
    pub max_page_size: i64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `SHUTDOWN_TIMEOUT_SECS`| `30`                       |
    /// | `DATABASE_URL`         | (required)                 |
    /// | `DB_MAX_CONNECTIONS`   | `20`                       |
    /// | `DEFAULT_PAGE_SIZE`    | `50`                       |
    /// | `MAX_PAGE_SIZE`        | `200`                      |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins = parse_origins(
            &std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "http://localhost:5173".into()),
        );

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let shutdown_timeout_secs: u64 = std::env::var("SHUTDOWN_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("SHUTDOWN_TIMEOUT_SECS must be a valid u64");

        let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

        let db_max_connections: u32 = std::env::var("DB_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "20".into())
            .parse()
            .expect("DB_MAX_CONNECTIONS must be a valid u32");

        let default_page_size: i64 = std::env::var("DEFAULT_PAGE_SIZE")
            .unwrap_or_else(|_| DEFAULT_LIMIT.to_string())
            .parse()
            .expect("DEFAULT_PAGE_SIZE must be a valid i64");

        let max_page_size: i64 = std::env::var("MAX_PAGE_SIZE")
            .unwrap_or_else(|_| MAX_LIMIT.to_string())
            .parse()
            .expect("MAX_PAGE_SIZE must be a valid i64");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            shutdown_timeout_secs,
            database_url,
            db_max_connections,
            default_page_size,
            max_page_size,
        }
    }

    /// Page-size bounds applied to list endpoints.
    pub fn page_limits(&self) -> PageLimits {
        PageLimits::new(self.default_page_size, self.max_page_size)
    }
}

/// Split a comma-separated origin list, dropping blanks.
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
