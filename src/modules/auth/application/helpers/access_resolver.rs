use std::sync::Arc;
use tracing::debug;

use crate::auth::application::domain::entities::{AccountId, AccountStatus};
use crate::auth::application::ports::outgoing::{AccountQuery, AccountQueryError, TokenProvider};

/// Which account statuses a route accepts once the token itself checks out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessPolicy {
    ActiveOnly,
    /// Profile completion also admits `Verified` rows from older deployments.
    VerifiedOrActive,
}

impl AccessPolicy {
    fn admits(&self, status: AccountStatus) -> bool {
        match self {
            AccessPolicy::ActiveOnly => status.is_active(),
            AccessPolicy::VerifiedOrActive => {
                matches!(status, AccountStatus::Verified | AccountStatus::Active)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AuthorizedAccount {
    pub account_id: AccountId,
    /// Current role from the store, not the one baked into the token.
    pub role: i32,
    pub status: AccountStatus,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AccessError {
    #[error("Invalid or expired token")]
    InvalidToken,

    #[error("Account not found")]
    AccountNotFound,

    #[error("Account is not active")]
    NotActive,

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Verifies a bearer token and then re-reads the account, so deactivating an
/// account locks out tokens that have not expired yet.
#[derive(Clone)]
pub struct AccessResolver {
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
    account_query: Arc<dyn AccountQuery + Send + Sync>,
}

impl AccessResolver {
    pub fn new(
        token_provider: Arc<dyn TokenProvider + Send + Sync>,
        account_query: Arc<dyn AccountQuery + Send + Sync>,
    ) -> Self {
        Self {
            token_provider,
            account_query,
        }
    }

    pub async fn resolve(
        &self,
        token: &str,
        policy: AccessPolicy,
    ) -> Result<AuthorizedAccount, AccessError> {
        let claims = self
            .token_provider
            .verify_token(token)
            .map_err(|_| AccessError::InvalidToken)?;

        let account_id = AccountId::from(claims.sub);
        let account = match self.account_query.find_by_id(account_id).await {
            Ok(Some(account)) => account,
            Ok(None) => return Err(AccessError::AccountNotFound),
            Err(AccountQueryError::Unavailable(msg)) => {
                return Err(AccessError::ServiceUnavailable(msg))
            }
            Err(AccountQueryError::DatabaseError(msg)) => return Err(AccessError::Internal(msg)),
        };

        if !policy.admits(account.status) {
            debug!(account_id = %account_id, status = %account.status, "Token holder not admitted");
            return Err(AccessError::NotActive);
        }

        Ok(AuthorizedAccount {
            account_id,
            role: account.role,
            status: account.status,
        })
    }
}
