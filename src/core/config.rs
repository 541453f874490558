use std::path::PathBuf;

/// Default operational admin username
pub const DEFAULT_ADMIN_USERNAME: &str = "actuator";
/// Default operational admin secret
pub const DEFAULT_ADMIN_PASSWORD: &str = "actuator";

/// Server configuration
///
/// # Environment variables
///
/// Every item can be overridden through environment variables:
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | WORK_DIR | /var/lib/roster | working directory (database, logs) |
/// | HTTP_PORT | 8080 | HTTP API port |
/// | ENVIRONMENT | development | runtime environment |
/// | ADMIN_USERNAME | actuator | operational admin username |
/// | ADMIN_PASSWORD | actuator | operational admin secret |
/// | LOG_LEVEL | info | log level when RUST_LOG is unset |
///
/// The `actuator`/`actuator` default credential is a deliberate template
/// default; [`ServerState::initialize`](crate::core::ServerState::initialize)
/// logs a warning whenever it is still in place.
#[derive(Debug, Clone)]
pub struct Config {
    /// Working directory holding the database and log files
    pub work_dir: String,
    /// HTTP API port
    pub http_port: u16,
    /// Runtime environment: development | staging | production
    pub environment: String,
    /// Operational admin username
    pub admin_username: String,
    /// Operational admin secret (hashed at startup, never stored in plain)
    pub admin_password: String,
    /// Log level used when RUST_LOG is unset
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "/var/lib/roster".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            admin_username: std::env::var("ADMIN_USERNAME")
                .unwrap_or_else(|_| DEFAULT_ADMIN_USERNAME.into()),
            admin_password: std::env::var("ADMIN_PASSWORD")
                .unwrap_or_else(|_| DEFAULT_ADMIN_PASSWORD.into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
        }
    }

    /// Override work dir and port, commonly for tests
    pub fn with_overrides(work_dir: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.http_port = http_port;
        config
    }

    /// Directory holding the SQLite database file
    pub fn database_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("database")
    }

    /// Directory holding rolling log files
    pub fn log_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("logs")
    }

    /// Ensure the working directory structure exists
    pub fn ensure_work_dir_structure(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(self.database_dir())?;
        std::fs::create_dir_all(self.log_dir())?;
        Ok(())
    }

    /// True while the known-weak default credential is still in place
    pub fn uses_default_admin_credentials(&self) -> bool {
        self.admin_username == DEFAULT_ADMIN_USERNAME
            && self.admin_password == DEFAULT_ADMIN_PASSWORD
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_credentials_are_detected() {
        let mut config = Config::with_overrides("/tmp/roster-test", 0);
        config.admin_username = DEFAULT_ADMIN_USERNAME.to_string();
        config.admin_password = DEFAULT_ADMIN_PASSWORD.to_string();
        assert!(config.uses_default_admin_credentials());

        config.admin_password = "rotated".to_string();
        assert!(!config.uses_default_admin_credentials());
    }

    #[test]
    fn work_dir_layout() {
        let config = Config::with_overrides("/data/roster", 0);
        assert_eq!(config.database_dir(), PathBuf::from("/data/roster/database"));
        assert_eq!(config.log_dir(), PathBuf::from("/data/roster/logs"));
    }
}
