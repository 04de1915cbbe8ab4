use async_trait::async_trait;

use crate::auth::application::domain::entities::Account;
use crate::auth::application::ports::outgoing::{AccountQueryError, AccountRepositoryError};

#[derive(Debug, Clone)]
pub struct VerifyOtpInput {
    pub email: String,
    pub code: String,
}

#[derive(Debug, Clone)]
pub struct VerifyOtpOutput {
    pub token: String,
    pub requires_profile_completion: bool,
    pub account: Account,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum VerifyOtpError {
    #[error("{0}")]
    InvalidEmail(String),

    #[error("{0}")]
    InvalidCodeFormat(String),

    #[error("Account not found")]
    AccountNotFound,

    #[error("Verification code has expired")]
    Expired,

    #[error("Invalid verification code")]
    InvalidCode,

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<AccountQueryError> for VerifyOtpError {
    fn from(err: AccountQueryError) -> Self {
        match err {
            AccountQueryError::Unavailable(msg) => Self::ServiceUnavailable(msg),
            AccountQueryError::DatabaseError(msg) => Self::RepositoryError(msg),
        }
    }
}

impl From<AccountRepositoryError> for VerifyOtpError {
    fn from(err: AccountRepositoryError) -> Self {
        match err {
            AccountRepositoryError::AccountNotFound => Self::AccountNotFound,
            AccountRepositoryError::Unavailable(msg) => Self::ServiceUnavailable(msg),
            other => Self::RepositoryError(other.to_string()),
        }
    }
}

#[async_trait]
pub trait VerifyOtpUseCase: Send + Sync {
    async fn execute(&self, input: VerifyOtpInput) -> Result<VerifyOtpOutput, VerifyOtpError>;
}
