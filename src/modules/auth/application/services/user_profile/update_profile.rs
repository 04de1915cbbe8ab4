use crate::auth::application::{
    domain::entities::Account,
    ports::outgoing::AccountRepository,
    use_cases::update_profile::{UpdateProfileError, UpdateProfileInput, UpdateProfileUseCase},
};
use async_trait::async_trait;
use tracing::info;

use super::validation::validate_patch;

pub struct UpdateProfileService<R>
where
    R: AccountRepository + Send + Sync,
{
    account_repository: R,
}

impl<R> UpdateProfileService<R>
where
    R: AccountRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self {
            account_repository: repository,
        }
    }
}

#[async_trait]
impl<R> UpdateProfileUseCase for UpdateProfileService<R>
where
    R: AccountRepository + Send + Sync,
{
    async fn execute(&self, input: UpdateProfileInput) -> Result<Account, UpdateProfileError> {
        if input.patch.is_empty() {
            return Err(UpdateProfileError::EmptyUpdate);
        }
        validate_patch(&input.patch).map_err(|e| UpdateProfileError::InvalidField(e.to_string()))?;

        let account = self
            .account_repository
            .update_profile(input.account_id, input.patch)
            .await?;

        info!(account_id = %account.id, "Profile updated");

        Ok(account)
    }
}
