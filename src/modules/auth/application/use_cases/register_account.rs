use async_trait::async_trait;
use std::fmt;

use crate::auth::application::domain::entities::{AccountId, ProfileFields};
use crate::auth::application::ports::outgoing::{AccountQueryError, AccountRepositoryError};

#[derive(Clone, Default)]
pub struct RegisterAccountInput {
    pub email: String,
    pub password: String,
    pub role: Option<i32>,
    /// Optional personal fields captured on the sign-up form.
    pub profile: ProfileFields,
}

impl fmt::Debug for RegisterAccountInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterAccountInput")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("role", &self.role)
            .finish()
    }
}

/// Carries the freshly issued code so the caller can dispatch it. It must
/// never be copied into an HTTP response.
#[derive(Clone)]
pub struct RegisterAccountOutput {
    pub account_id: AccountId,
    pub email: String,
    pub otp_code: String,
}

impl fmt::Debug for RegisterAccountOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterAccountOutput")
            .field("account_id", &self.account_id)
            .field("email", &self.email)
            .field("otp_code", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RegisterAccountError {
    #[error("{0}")]
    InvalidEmail(String),

    #[error("{0}")]
    InvalidPassword(String),

    #[error("{0}")]
    InvalidRole(String),

    #[error("{0}")]
    InvalidProfile(String),

    #[error("An account with this email already exists")]
    EmailAlreadyExists,

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<AccountQueryError> for RegisterAccountError {
    fn from(err: AccountQueryError) -> Self {
        match err {
            AccountQueryError::Unavailable(msg) => Self::ServiceUnavailable(msg),
            AccountQueryError::DatabaseError(msg) => Self::RepositoryError(msg),
        }
    }
}

impl From<AccountRepositoryError> for RegisterAccountError {
    fn from(err: AccountRepositoryError) -> Self {
        match err {
            AccountRepositoryError::EmailAlreadyExists => Self::EmailAlreadyExists,
            AccountRepositoryError::Unavailable(msg) => Self::ServiceUnavailable(msg),
            other => Self::RepositoryError(other.to_string()),
        }
    }
}

#[async_trait]
pub trait RegisterAccountUseCase: Send + Sync {
    async fn execute(
        &self,
        input: RegisterAccountInput,
    ) -> Result<RegisterAccountOutput, RegisterAccountError>;
}
