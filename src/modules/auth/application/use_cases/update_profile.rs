use async_trait::async_trait;

use crate::auth::application::domain::entities::{Account, AccountId, ProfilePatch};
use crate::auth::application::ports::outgoing::AccountRepositoryError;

#[derive(Clone, Debug)]
pub struct UpdateProfileInput {
    pub account_id: AccountId,
    pub patch: ProfilePatch,
}

#[derive(Debug, thiserror::Error, Clone, PartialEq)]
pub enum UpdateProfileError {
    #[error("No updatable fields supplied")]
    EmptyUpdate,

    #[error("{0}")]
    InvalidField(String),

    #[error("Account not found")]
    AccountNotFound,

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<AccountRepositoryError> for UpdateProfileError {
    fn from(err: AccountRepositoryError) -> Self {
        match err {
            AccountRepositoryError::AccountNotFound => Self::AccountNotFound,
            AccountRepositoryError::Unavailable(msg) => Self::ServiceUnavailable(msg),
            other => Self::RepositoryError(other.to_string()),
        }
    }
}

#[async_trait]
pub trait UpdateProfileUseCase: Send + Sync {
    async fn execute(&self, input: UpdateProfileInput) -> Result<Account, UpdateProfileError>;
}
