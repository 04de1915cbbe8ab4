use async_trait::async_trait;
use std::sync::Arc;

use crate::auth::application::domain::entities::{Account, AccountId};

#[derive(Debug, Clone, thiserror::Error)]
pub enum AccountQueryError {
    #[error("Account store unavailable: {0}")]
    Unavailable(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Point lookups against the account store. Soft-deleted rows are never returned.
#[async_trait]
pub trait AccountQuery: Send + Sync {
    async fn find_by_id(&self, account_id: AccountId) -> Result<Option<Account>, AccountQueryError>;

    /// `email` is normalised by the implementation before lookup.
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, AccountQueryError>;
}

#[async_trait]
impl<T: AccountQuery + ?Sized> AccountQuery for Arc<T> {
    async fn find_by_id(&self, account_id: AccountId) -> Result<Option<Account>, AccountQueryError> {
        (**self).find_by_id(account_id).await
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, AccountQueryError> {
        (**self).find_by_email(email).await
    }
}
