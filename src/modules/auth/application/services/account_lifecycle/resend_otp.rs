use async_trait::async_trait;
use email_address::EmailAddress;
use std::sync::Arc;
use tracing::info;

use crate::auth::application::domain::entities::normalize_email;
use crate::auth::application::ports::outgoing::{
    AccountQuery, AccountRepository, Clock, OtpGenerator,
};
use crate::auth::application::use_cases::resend_otp::{
    ResendOtpError, ResendOtpInput, ResendOtpOutput, ResendOtpUseCase,
};

pub struct ResendOtpService<Q, R>
where
    Q: AccountQuery + Send + Sync,
    R: AccountRepository + Send + Sync,
{
    query: Q,
    repository: R,
    otp_generator: Arc<dyn OtpGenerator + Send + Sync>,
    clock: Arc<dyn Clock + Send + Sync>,
}

impl<Q, R> ResendOtpService<Q, R>
where
    Q: AccountQuery + Send + Sync,
    R: AccountRepository + Send + Sync,
{
    pub fn new(
        query: Q,
        repository: R,
        otp_generator: Arc<dyn OtpGenerator + Send + Sync>,
        clock: Arc<dyn Clock + Send + Sync>,
    ) -> Self {
        Self {
            query,
            repository,
            otp_generator,
            clock,
        }
    }
}

#[async_trait]
impl<Q, R> ResendOtpUseCase for ResendOtpService<Q, R>
where
    Q: AccountQuery + Send + Sync,
    R: AccountRepository + Send + Sync,
{
    async fn execute(&self, input: ResendOtpInput) -> Result<ResendOtpOutput, ResendOtpError> {
        let email = normalize_email(&input.email);
        if !EmailAddress::is_valid(&email) {
            return Err(ResendOtpError::InvalidEmail(
                "Invalid email format".to_string(),
            ));
        }

        let account = self
            .query
            .find_by_email(&email)
            .await?
            .ok_or(ResendOtpError::AccountNotFound)?;

        if !account.status.is_unverified() {
            return Err(ResendOtpError::AlreadyVerified);
        }

        let otp_code = self.otp_generator.generate();

        // Code and timestamp are written together, and only while the account
        // is still unverified; losing that race means it was just verified.
        let replaced = self
            .repository
            .replace_otp(account.id, &otp_code, self.clock.now())
            .await?;
        if !replaced {
            return Err(ResendOtpError::AlreadyVerified);
        }

        info!(account_id = %account.id, "Verification code reissued");

        Ok(ResendOtpOutput {
            account_id: account.id,
            email: account.email,
            otp_code,
        })
    }
}
