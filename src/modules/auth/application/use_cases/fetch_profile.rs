use async_trait::async_trait;

use crate::auth::application::domain::entities::{Account, AccountId};
use crate::auth::application::ports::outgoing::AccountQueryError;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FetchProfileError {
    #[error("Account not found")]
    AccountNotFound,

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Query error: {0}")]
    QueryError(String),
}

impl From<AccountQueryError> for FetchProfileError {
    fn from(err: AccountQueryError) -> Self {
        match err {
            AccountQueryError::Unavailable(msg) => Self::ServiceUnavailable(msg),
            AccountQueryError::DatabaseError(msg) => Self::QueryError(msg),
        }
    }
}

#[async_trait]
pub trait FetchProfileUseCase: Send + Sync {
    async fn execute(&self, account_id: AccountId) -> Result<Account, FetchProfileError>;
}
