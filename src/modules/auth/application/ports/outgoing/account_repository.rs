use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::auth::application::domain::entities::{
    Account, AccountId, AccountStatus, ProfileFields, ProfilePatch,
};

#[derive(Clone)]
pub struct NewAccount {
    pub email: String,
    pub password_hash: String,
    pub role: i32,
    pub status: AccountStatus,
    pub profile: ProfileFields,
    pub otp_code: String,
    pub otp_issued_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AccountRepositoryError {
    #[error("An account with this email already exists")]
    EmailAlreadyExists,

    #[error("Account not found")]
    AccountNotFound,

    #[error("Account store unavailable: {0}")]
    Unavailable(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Fails with `EmailAlreadyExists` when the storage uniqueness constraint trips.
    async fn create_account(&self, account: NewAccount) -> Result<Account, AccountRepositoryError>;

    /// Overwrites the code and its timestamp in a single conditional write that
    /// only applies while the account is still unverified. Returns `false` when
    /// nothing was written.
    async fn replace_otp(
        &self,
        account_id: AccountId,
        code: &str,
        issued_at: DateTime<Utc>,
    ) -> Result<bool, AccountRepositoryError>;

    /// Clears the code and activates the account, but only if the stored code is
    /// still `code`. Returns `false` if it was consumed or replaced meanwhile.
    async fn consume_otp(
        &self,
        account_id: AccountId,
        code: &str,
    ) -> Result<bool, AccountRepositoryError>;

    /// Stores the full profile, marks it complete and promotes `Verified` to `Active`.
    async fn complete_profile(
        &self,
        account_id: AccountId,
        profile: ProfileFields,
    ) -> Result<Account, AccountRepositoryError>;

    async fn update_profile(
        &self,
        account_id: AccountId,
        patch: ProfilePatch,
    ) -> Result<Account, AccountRepositoryError>;
}

#[async_trait]
impl<T: AccountRepository + ?Sized> AccountRepository for Arc<T> {
    async fn create_account(&self, account: NewAccount) -> Result<Account, AccountRepositoryError> {
        (**self).create_account(account).await
    }

    async fn replace_otp(
        &self,
        account_id: AccountId,
        code: &str,
        issued_at: DateTime<Utc>,
    ) -> Result<bool, AccountRepositoryError> {
        (**self).replace_otp(account_id, code, issued_at).await
    }

    async fn consume_otp(
        &self,
        account_id: AccountId,
        code: &str,
    ) -> Result<bool, AccountRepositoryError> {
        (**self).consume_otp(account_id, code).await
    }

    async fn complete_profile(
        &self,
        account_id: AccountId,
        profile: ProfileFields,
    ) -> Result<Account, AccountRepositoryError> {
        (**self).complete_profile(account_id, profile).await
    }

    async fn update_profile(
        &self,
        account_id: AccountId,
        patch: ProfilePatch,
    ) -> Result<Account, AccountRepositoryError> {
        (**self).update_profile(account_id, patch).await
    }
}
