use async_trait::async_trait;

use crate::auth::application::domain::entities::{Account, AccountId, ProfileFields};
use crate::auth::application::ports::outgoing::AccountRepositoryError;
use crate::location::application::ports::outgoing::LocationQueryError;

#[derive(Debug, Clone)]
pub struct CompleteProfileInput {
    pub account_id: AccountId,
    pub profile: ProfileFields,
}

/// The token is reissued so clients pick up the post-completion state.
#[derive(Debug, Clone)]
pub struct CompleteProfileOutput {
    pub token: String,
    pub account: Account,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CompleteProfileError {
    #[error("{0}")]
    InvalidProfile(String),

    #[error("Account not found")]
    AccountNotFound,

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<AccountRepositoryError> for CompleteProfileError {
    fn from(err: AccountRepositoryError) -> Self {
        match err {
            AccountRepositoryError::AccountNotFound => Self::AccountNotFound,
            AccountRepositoryError::Unavailable(msg) => Self::ServiceUnavailable(msg),
            other => Self::RepositoryError(other.to_string()),
        }
    }
}

impl From<LocationQueryError> for CompleteProfileError {
    fn from(err: LocationQueryError) -> Self {
        match err {
            LocationQueryError::Unavailable(msg) => Self::ServiceUnavailable(msg),
            other => Self::RepositoryError(other.to_string()),
        }
    }
}

#[async_trait]
pub trait CompleteProfileUseCase: Send + Sync {
    async fn execute(
        &self,
        input: CompleteProfileInput,
    ) -> Result<CompleteProfileOutput, CompleteProfileError>;
}
