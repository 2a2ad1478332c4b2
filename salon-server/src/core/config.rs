use std::path::PathBuf;

/// Server configuration
///
/// # Environment variables
///
/// | Variable | Default | Purpose |
/// |----------|---------|---------|
/// | WORK_DIR | /var/lib/bristle | Working directory (database, logs) |
/// | HTTP_PORT | 3000 | HTTP API port |
/// | TIMEZONE | America/New_York | Salon-local timezone for "today" |
/// | STRIPE_SECRET_KEY | (unset) | Stripe secret key; Stripe is disabled without it |
/// | STRIPE_API_URL | https://api.stripe.com | Stripe API base, overridable for tests |
/// | REQUEST_TIMEOUT_MS | 30000 | Outbound HTTP request timeout |
/// | ENVIRONMENT | development | development | staging | production |
///
/// # Example
///
/// ```ignore
/// WORK_DIR=/data/bristle HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Working directory holding the database and log files
    pub work_dir: String,
    /// HTTP API port
    pub http_port: u16,
    /// Salon-local timezone, used when an endpoint needs "today"
    pub timezone: chrono_tz::Tz,
    /// Stripe secret key; `None` leaves Stripe endpoints unconfigured
    pub stripe_secret_key: Option<String>,
    /// Stripe API base URL override
    pub stripe_api_url: Option<String>,
    /// Outbound request timeout in milliseconds
    pub request_timeout_ms: u64,
    /// development | staging | production
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables, with defaults for
    /// anything unset
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "/var/lib/bristle".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            timezone: std::env::var("TIMEZONE")
                .ok()
                .and_then(|tz| tz.parse().ok())
                .unwrap_or(chrono_tz::America::New_York),
            stripe_secret_key: std::env::var("STRIPE_SECRET_KEY")
                .ok()
                .filter(|k| !k.is_empty()),
            stripe_api_url: std::env::var("STRIPE_API_URL").ok().filter(|u| !u.is_empty()),
            request_timeout_ms: std::env::var("REQUEST_TIMEOUT_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(30000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }

    /// Override work dir and port, keeping everything else from the
    /// environment. For tests.
    pub fn with_overrides(work_dir: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.http_port = http_port;
        config
    }

    pub fn database_path(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("database").join("bristle.redb")
    }

    pub fn log_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("logs")
    }

    /// Create the work directory layout if missing
    pub fn ensure_work_dir_structure(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(PathBuf::from(&self.work_dir).join("database"))?;
        std::fs::create_dir_all(self.log_dir())?;
        Ok(())
    }

    pub fn request_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.request_timeout_ms)
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
