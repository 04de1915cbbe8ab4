use async_trait::async_trait;
use email_address::EmailAddress;
use std::sync::Arc;
use tracing::{info, warn};

use crate::auth::application::domain::entities::{normalize_email, AccountStatus};
use crate::auth::application::ports::incoming::password_policy::PasswordPolicy;
use crate::auth::application::ports::outgoing::{
    AccountQuery, AccountRepository, Clock, NewAccount, OtpGenerator,
};
use crate::auth::application::services::hash::PasswordHashingService;
use crate::auth::application::services::user_profile::validation::validate_partial_profile;
use crate::auth::application::use_cases::register_account::{
    RegisterAccountError, RegisterAccountInput, RegisterAccountOutput, RegisterAccountUseCase,
};

const MAX_EMAIL_LENGTH: usize = 320;

pub struct RegisterAccountService<Q, R>
where
    Q: AccountQuery + Send + Sync,
    R: AccountRepository + Send + Sync,
{
    query: Q,
    repository: R,
    password_hasher: PasswordHashingService,
    password_policy: Arc<dyn PasswordPolicy + Send + Sync>,
    otp_generator: Arc<dyn OtpGenerator + Send + Sync>,
    clock: Arc<dyn Clock + Send + Sync>,
}

impl<Q, R> RegisterAccountService<Q, R>
where
    Q: AccountQuery + Send + Sync,
    R: AccountRepository + Send + Sync,
{
    pub fn new(
        query: Q,
        repository: R,
        password_hasher: PasswordHashingService,
        password_policy: Arc<dyn PasswordPolicy + Send + Sync>,
        otp_generator: Arc<dyn OtpGenerator + Send + Sync>,
        clock: Arc<dyn Clock + Send + Sync>,
    ) -> Self {
        Self {
            query,
            repository,
            password_hasher,
            password_policy,
            otp_generator,
            clock,
        }
    }

    fn validate_email(raw: &str) -> Result<String, RegisterAccountError> {
        let email = normalize_email(raw);

        if email.is_empty() {
            return Err(RegisterAccountError::InvalidEmail(
                "Email cannot be empty".to_string(),
            ));
        }
        if email.len() > MAX_EMAIL_LENGTH || !EmailAddress::is_valid(&email) {
            return Err(RegisterAccountError::InvalidEmail(
                "Invalid email format".to_string(),
            ));
        }

        Ok(email)
    }

    fn validate_role(role: Option<i32>) -> Result<i32, RegisterAccountError> {
        match role {
            Some(role) if role > 0 => Ok(role),
            Some(_) => Err(RegisterAccountError::InvalidRole(
                "Role is invalid".to_string(),
            )),
            None => Err(RegisterAccountError::InvalidRole(
                "Role is required".to_string(),
            )),
        }
    }
}

#[async_trait]
impl<Q, R> RegisterAccountUseCase for RegisterAccountService<Q, R>
where
    Q: AccountQuery + Send + Sync,
    R: AccountRepository + Send + Sync,
{
    async fn execute(
        &self,
        input: RegisterAccountInput,
    ) -> Result<RegisterAccountOutput, RegisterAccountError> {
        let email = Self::validate_email(&input.email)?;
        self.password_policy
            .validate(&input.password)
            .map_err(|e| RegisterAccountError::InvalidPassword(e.to_string()))?;
        let role = Self::validate_role(input.role)?;
        validate_partial_profile(&input.profile)
            .map_err(|e| RegisterAccountError::InvalidProfile(e.to_string()))?;

        if self.query.find_by_email(&email).await?.is_some() {
            warn!("Registration rejected: email already registered");
            return Err(RegisterAccountError::EmailAlreadyExists);
        }

        let password_hash = self
            .password_hasher
            .hash_password(&input.password)
            .await
            .map_err(|e| RegisterAccountError::HashingFailed(e.to_string()))?;

        let otp_code = self.otp_generator.generate();

        // The storage uniqueness constraint still guards concurrent sign-ups
        // that both pass the lookup above.
        let account = self
            .repository
            .create_account(NewAccount {
                email,
                password_hash,
                role,
                status: AccountStatus::Pending,
                profile: input.profile,
                otp_code: otp_code.clone(),
                otp_issued_at: self.clock.now(),
            })
            .await?;

        info!(account_id = %account.id, role = account.role, "Account registered");

        Ok(RegisterAccountOutput {
            account_id: account.id,
            email: account.email,
            otp_code,
        })
    }
}
