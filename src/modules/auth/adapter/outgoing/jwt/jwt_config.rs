use std::env;

const MIN_SECRET_LEN: usize = 32;
const MAX_TOKEN_TTL_SECONDS: i64 = 72 * 60 * 60;

#[derive(Debug, thiserror::Error)]
pub enum JwtConfigError {
    #[error("JWT_SECRET must be set")]
    MissingSecret,

    #[error("JWT_SECRET must be at least 32 characters long for HS256")]
    SecretTooShort,

    #[error("JWT_ACCESS_EXPIRY must be an integer between 1 and 259200 seconds")]
    InvalidExpiry,
}

#[derive(Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub issuer: String,
    /// Token lifetime in seconds.
    pub token_ttl: i64,
}

impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret_key", &"<redacted>")
            .field("issuer", &self.issuer)
            .field("token_ttl", &self.token_ttl)
            .finish()
    }
}

impl JwtConfig {
    /// Load JWT configuration from environment variables
    pub fn from_env() -> Result<Self, JwtConfigError> {
        let secret_key = env::var("JWT_SECRET").map_err(|_| JwtConfigError::MissingSecret)?;
        let issuer = env::var("JWT_ISSUER").unwrap_or_else(|_| "medical-platform".to_string());
        let token_ttl = env::var("JWT_ACCESS_EXPIRY")
            .unwrap_or_else(|_| "86400".to_string())
            .trim()
            .parse::<i64>()
            .map_err(|_| JwtConfigError::InvalidExpiry)?;

        Self::new(secret_key, issuer, token_ttl)
    }

    pub fn new(secret_key: String, issuer: String, token_ttl: i64) -> Result<Self, JwtConfigError> {
        if secret_key.len() < MIN_SECRET_LEN {
            return Err(JwtConfigError::SecretTooShort);
        }

        if token_ttl <= 0 || token_ttl > MAX_TOKEN_TTL_SECONDS {
            return Err(JwtConfigError::InvalidExpiry);
        }

        Ok(Self {
            secret_key,
            issuer,
            token_ttl,
        })
    }
}
