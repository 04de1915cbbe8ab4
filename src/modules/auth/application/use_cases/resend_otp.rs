use async_trait::async_trait;
use std::fmt;

use crate::auth::application::domain::entities::AccountId;
use crate::auth::application::ports::outgoing::{AccountQueryError, AccountRepositoryError};

#[derive(Debug, Clone)]
pub struct ResendOtpInput {
    pub email: String,
}

#[derive(Clone)]
pub struct ResendOtpOutput {
    pub account_id: AccountId,
    pub email: String,
    pub otp_code: String,
}

impl fmt::Debug for ResendOtpOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResendOtpOutput")
            .field("account_id", &self.account_id)
            .field("email", &self.email)
            .field("otp_code", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ResendOtpError {
    #[error("{0}")]
    InvalidEmail(String),

    #[error("Account not found")]
    AccountNotFound,

    #[error("Email already verified")]
    AlreadyVerified,

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<AccountQueryError> for ResendOtpError {
    fn from(err: AccountQueryError) -> Self {
        match err {
            AccountQueryError::Unavailable(msg) => Self::ServiceUnavailable(msg),
            AccountQueryError::DatabaseError(msg) => Self::RepositoryError(msg),
        }
    }
}

impl From<AccountRepositoryError> for ResendOtpError {
    fn from(err: AccountRepositoryError) -> Self {
        match err {
            AccountRepositoryError::AccountNotFound => Self::AccountNotFound,
            AccountRepositoryError::Unavailable(msg) => Self::ServiceUnavailable(msg),
            other => Self::RepositoryError(other.to_string()),
        }
    }
}

#[async_trait]
pub trait ResendOtpUseCase: Send + Sync {
    async fn execute(&self, input: ResendOtpInput) -> Result<ResendOtpOutput, ResendOtpError>;
}
