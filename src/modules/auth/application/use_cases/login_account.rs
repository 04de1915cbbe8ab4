use async_trait::async_trait;
use email_address::EmailAddress;
use serde::{Deserialize, Deserializer};
use std::fmt;

use crate::auth::application::domain::entities::{normalize_email, Account};
use crate::auth::application::ports::outgoing::AccountQueryError;

// ========================= Login Request =========================
/// Validated login request, deserialized directly from JSON.
#[derive(Clone)]
pub struct LoginRequest {
    email: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LoginRequestError {
    #[error("Email cannot be empty")]
    EmptyEmail,

    #[error("Invalid email format")]
    InvalidEmailFormat,

    #[error("Password cannot be empty")]
    EmptyPassword,
}

impl LoginRequest {
    pub fn new(email: String, password: String) -> Result<Self, LoginRequestError> {
        let email = Self::validate_email(&email)?;
        if password.is_empty() {
            return Err(LoginRequestError::EmptyPassword);
        }

        Ok(Self { email, password })
    }

    /// Normalized (trimmed, lowercased) email.
    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    fn validate_email(email: &str) -> Result<String, LoginRequestError> {
        let email = normalize_email(email);

        if email.is_empty() {
            return Err(LoginRequestError::EmptyEmail);
        }

        if !EmailAddress::is_valid(&email) {
            return Err(LoginRequestError::InvalidEmailFormat);
        }

        Ok(email)
    }
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl<'de> Deserialize<'de> for LoginRequest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct LoginRequestHelper {
            email: String,
            password: String,
        }

        let helper = LoginRequestHelper::deserialize(deserializer)?;
        LoginRequest::new(helper.email, helper.password).map_err(serde::de::Error::custom)
    }
}

// ====================== Login Error =============================
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LoginError {
    /// Unknown email and wrong password are deliberately the same variant.
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Account is not active")]
    AccountNotActive { requires_verification: bool },

    #[error("Password verification failed: {0}")]
    PasswordVerificationFailed(String),

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Query error: {0}")]
    QueryError(String),
}

impl From<AccountQueryError> for LoginError {
    fn from(err: AccountQueryError) -> Self {
        match err {
            AccountQueryError::Unavailable(msg) => Self::ServiceUnavailable(msg),
            AccountQueryError::DatabaseError(msg) => Self::QueryError(msg),
        }
    }
}

// ============================ Login Output =================================
#[derive(Debug, Clone)]
pub struct LoginOutput {
    pub token: String,
    pub profile_complete: bool,
    pub account: Account,
}

#[async_trait]
pub trait LoginAccountUseCase: Send + Sync {
    async fn execute(&self, request: LoginRequest) -> Result<LoginOutput, LoginError>;
}
