use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};

use crate::auth::application::ports::outgoing::{AccountQuery, TokenProvider};
use crate::auth::application::services::hash::PasswordHashingService;
use crate::auth::application::use_cases::login_account::{
    LoginAccountUseCase, LoginError, LoginOutput, LoginRequest,
};

pub struct LoginAccountService<Q>
where
    Q: AccountQuery + Send + Sync,
{
    query: Q,
    password_hasher: PasswordHashingService,
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
}

impl<Q> LoginAccountService<Q>
where
    Q: AccountQuery + Send + Sync,
{
    pub fn new(
        query: Q,
        password_hasher: PasswordHashingService,
        token_provider: Arc<dyn TokenProvider + Send + Sync>,
    ) -> Self {
        Self {
            query,
            password_hasher,
            token_provider,
        }
    }
}

#[async_trait]
impl<Q> LoginAccountUseCase for LoginAccountService<Q>
where
    Q: AccountQuery + Send + Sync,
{
    async fn execute(&self, request: LoginRequest) -> Result<LoginOutput, LoginError> {
        let Some(account) = self.query.find_by_email(request.email()).await? else {
            debug!("Login failed: unknown email");
            return Err(LoginError::InvalidCredentials);
        };

        let is_valid = self
            .password_hasher
            .verify_password(request.password(), &account.password_hash)
            .await
            .map_err(|e| LoginError::PasswordVerificationFailed(e.to_string()))?;

        if !is_valid {
            debug!(account_id = %account.id, "Login failed: wrong password");
            return Err(LoginError::InvalidCredentials);
        }

        // Status is only revealed to someone who proved the password.
        if !account.status.is_active() {
            return Err(LoginError::AccountNotActive {
                requires_verification: account.status.is_unverified(),
            });
        }

        let token = self
            .token_provider
            .issue_token(account.id, account.role)
            .map_err(|e| LoginError::TokenGenerationFailed(e.to_string()))?;

        info!(account_id = %account.id, "Account logged in");

        Ok(LoginOutput {
            token,
            profile_complete: account.profile_completed,
            account,
        })
    }
}
