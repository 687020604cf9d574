use std::env;

use crate::shared::config::{parse_or, required, ConfigError};

const MIN_SECRET_LEN: usize = 32;
const MAX_ACCESS_EXPIRY_SECS: i64 = 86_400;

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub issuer: String,
    pub access_token_expiry: i64, // Expiration in seconds
}

impl JwtConfig {
    /// Load JWT configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret_key = required(&lookup, "JWT_SECRET")?;

        // HS256 requires at least 32 bytes
        if secret_key.len() < MIN_SECRET_LEN {
            return Err(ConfigError::Invalid {
                key: "JWT_SECRET".to_string(),
                reason: format!("must be at least {} characters long", MIN_SECRET_LEN),
            });
        }

        let access_token_expiry = parse_or(&lookup, "JWT_ACCESS_EXPIRY", 1800i64)?;
        if access_token_expiry <= 0 || access_token_expiry > MAX_ACCESS_EXPIRY_SECS {
            return Err(ConfigError::Invalid {
                key: "JWT_ACCESS_EXPIRY".to_string(),
                reason: "must be between 1 and 86400 seconds".to_string(),
            });
        }

        let issuer = lookup("JWT_ISSUER").unwrap_or_else(|| "estate-backend".to_string());

        Ok(Self {
            secret_key,
            issuer,
            access_token_expiry,
        })
    }
}
