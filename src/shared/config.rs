use std::env;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(String),

    #[error("Invalid {key}: {reason}")]
    Invalid { key: String, reason: String },
}

/// Server-level settings read from the process environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: String,
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub run_migrations: bool,
    pub db_max_connections: u32,
    pub db_min_connections: u32,
}

impl AppConfig {
    /// Loads `.env.{RUST_ENV}` first and falls back to `.env`.
    pub fn load_env_files() {
        let environment = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        let env_file = format!(".env.{}", environment);
        if dotenvy::from_filename(&env_file).is_err() {
            dotenvy::dotenv().ok();
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = lookup("RUST_ENV").unwrap_or_else(|| "development".to_string());
        let database_url = required(&lookup, "DATABASE_URL")?;
        let host = required(&lookup, "HOST")?;
        let port = parse_or(&lookup, "PORT", 8080u16)?;
        let run_migrations = parse_or(&lookup, "RUN_MIGRATIONS", false)?;
        let db_max_connections = parse_or(&lookup, "DB_MAX_CONNECTIONS", 50u32)?;
        let db_min_connections = parse_or(&lookup, "DB_MIN_CONNECTIONS", 10u32)?;

        if db_min_connections > db_max_connections {
            return Err(ConfigError::Invalid {
                key: "DB_MIN_CONNECTIONS".to_string(),
                reason: "must not exceed DB_MAX_CONNECTIONS".to_string(),
            });
        }

        Ok(Self {
            environment,
            database_url,
            host,
            port,
            run_migrations,
            db_max_connections,
            db_min_connections,
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

pub(crate) fn required<F>(lookup: &F, key: &str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| ConfigError::Missing(key.to_string()))
}

pub(crate) fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw.trim().parse::<T>().map_err(|e| ConfigError::Invalid {
            key: key.to_string(),
            reason: e.to_string(),
        }),
    }
}
