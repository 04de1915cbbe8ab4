use async_trait::async_trait;
use email_address::EmailAddress;
use std::sync::Arc;
use tracing::{debug, info};

use crate::auth::application::domain::entities::{normalize_email, AccountStatus, OneTimeCode};
use crate::auth::application::ports::outgoing::{
    AccountQuery, AccountRepository, Clock, TokenProvider,
};
use crate::auth::application::use_cases::verify_otp::{
    VerifyOtpError, VerifyOtpInput, VerifyOtpOutput, VerifyOtpUseCase,
};

pub struct VerifyOtpService<Q, R>
where
    Q: AccountQuery + Send + Sync,
    R: AccountRepository + Send + Sync,
{
    query: Q,
    repository: R,
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
    clock: Arc<dyn Clock + Send + Sync>,
}

impl<Q, R> VerifyOtpService<Q, R>
where
    Q: AccountQuery + Send + Sync,
    R: AccountRepository + Send + Sync,
{
    pub fn new(
        query: Q,
        repository: R,
        token_provider: Arc<dyn TokenProvider + Send + Sync>,
        clock: Arc<dyn Clock + Send + Sync>,
    ) -> Self {
        Self {
            query,
            repository,
            token_provider,
            clock,
        }
    }
}

#[async_trait]
impl<Q, R> VerifyOtpUseCase for VerifyOtpService<Q, R>
where
    Q: AccountQuery + Send + Sync,
    R: AccountRepository + Send + Sync,
{
    async fn execute(&self, input: VerifyOtpInput) -> Result<VerifyOtpOutput, VerifyOtpError> {
        let email = normalize_email(&input.email);
        if !EmailAddress::is_valid(&email) {
            return Err(VerifyOtpError::InvalidEmail(
                "Invalid email format".to_string(),
            ));
        }
        let code = OneTimeCode::parse(&input.code)
            .map_err(|e| VerifyOtpError::InvalidCodeFormat(e.to_string()))?;

        let mut account = self
            .query
            .find_by_email(&email)
            .await?
            .ok_or(VerifyOtpError::AccountNotFound)?;

        if !account.has_pending_otp() {
            debug!(account_id = %account.id, "No outstanding code for account");
            return Err(VerifyOtpError::InvalidCode);
        }

        if account.otp_expired(self.clock.now()) {
            return Err(VerifyOtpError::Expired);
        }

        if !code.matches(&account.otp_code) {
            return Err(VerifyOtpError::InvalidCode);
        }

        // Conditional on the code still being the stored one, so a concurrent
        // verify or resend makes exactly one request win.
        if !self.repository.consume_otp(account.id, code.as_str()).await? {
            debug!(account_id = %account.id, "Code consumed or replaced concurrently");
            return Err(VerifyOtpError::InvalidCode);
        }

        account.status = AccountStatus::Active;
        account.otp_code.clear();
        account.otp_issued_at = None;

        let token = self
            .token_provider
            .issue_token(account.id, account.role)
            .map_err(|e| VerifyOtpError::TokenGenerationFailed(e.to_string()))?;

        info!(account_id = %account.id, "Email verified, account activated");

        Ok(VerifyOtpOutput {
            token,
            requires_profile_completion: !account.profile_completed,
            account,
        })
    }
}
