use async_trait::async_trait;

use crate::auth::application::{
    domain::entities::{Account, AccountId},
    ports::outgoing::AccountQuery,
    use_cases::fetch_profile::{FetchProfileError, FetchProfileUseCase},
};

pub struct FetchProfileService<Q>
where
    Q: AccountQuery + Send + Sync,
{
    account_query: Q,
}

impl<Q> FetchProfileService<Q>
where
    Q: AccountQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self {
            account_query: query,
        }
    }
}

#[async_trait]
impl<Q> FetchProfileUseCase for FetchProfileService<Q>
where
    Q: AccountQuery + Send + Sync,
{
    async fn execute(&self, account_id: AccountId) -> Result<Account, FetchProfileError> {
        self.account_query
            .find_by_id(account_id)
            .await?
            .ok_or(FetchProfileError::AccountNotFound)
    }
}
