use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

use crate::auth::application::ports::outgoing::{AccountRepository, TokenProvider};
use crate::auth::application::use_cases::complete_profile::{
    CompleteProfileError, CompleteProfileInput, CompleteProfileOutput, CompleteProfileUseCase,
};
use crate::location::application::domain::entities::RegionPath;
use crate::location::application::ports::outgoing::LocationQuery;

use super::validation::validate_complete_profile;

pub struct CompleteProfileService<R>
where
    R: AccountRepository + Send + Sync,
{
    repository: R,
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
    locations: Arc<dyn LocationQuery + Send + Sync>,
}

impl<R> CompleteProfileService<R>
where
    R: AccountRepository + Send + Sync,
{
    pub fn new(
        repository: R,
        token_provider: Arc<dyn TokenProvider + Send + Sync>,
        locations: Arc<dyn LocationQuery + Send + Sync>,
    ) -> Self {
        Self {
            repository,
            token_provider,
            locations,
        }
    }
}

#[async_trait]
impl<R> CompleteProfileUseCase for CompleteProfileService<R>
where
    R: AccountRepository + Send + Sync,
{
    async fn execute(
        &self,
        input: CompleteProfileInput,
    ) -> Result<CompleteProfileOutput, CompleteProfileError> {
        let mut profile = input.profile;
        validate_complete_profile(&profile)
            .map_err(|e| CompleteProfileError::InvalidProfile(e.to_string()))?;

        let region = RegionPath::parse(
            &profile.country_code,
            &profile.state_code,
            &profile.city_code,
            &profile.district_code,
        )
        .map_err(|e| CompleteProfileError::InvalidProfile(e.to_string()))?;

        if !self.locations.path_exists(&region).await? {
            warn!(account_id = %input.account_id, "Profile rejected: unknown region");
            return Err(CompleteProfileError::InvalidProfile(
                "Address codes do not match a known region".to_string(),
            ));
        }

        // Stored in the same case as the lookup tables.
        profile.country_code = region.country;
        profile.state_code = region.state;
        profile.city_code = region.city.unwrap_or_default();
        profile.district_code = region.district.unwrap_or_default();

        let account = self
            .repository
            .complete_profile(input.account_id, profile)
            .await?;

        let token = self
            .token_provider
            .issue_token(account.id, account.role)
            .map_err(|e| CompleteProfileError::TokenGenerationFailed(e.to_string()))?;

        info!(account_id = %account.id, status = %account.status, "Profile completed");

        Ok(CompleteProfileOutput { token, account })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::{AccountId, AccountStatus, ProfileFields};
    use crate::tests::support::fakes::test_jwt_service;
    use crate::tests::support::fixtures::{account, complete_profile_fields};
    use crate::tests::support::in_memory_locations::InMemoryLocations;
    use crate::tests::support::in_memory_store::InMemoryAccountStore;

    type Store = Arc<InMemoryAccountStore>;

    fn service(store: Store) -> CompleteProfileService<Store> {
        service_with(store, Arc::new(InMemoryLocations::seeded()))
    }

    fn service_with(
        store: Store,
        locations: Arc<InMemoryLocations>,
    ) -> CompleteProfileService<Store> {
        CompleteProfileService::new(store, Arc::new(test_jwt_service()), locations)
    }

    fn active_store() -> (Store, AccountId) {
        let store = Arc::new(InMemoryAccountStore::new());
        let active = account("a@x.com", AccountStatus::Active);
        store.insert(active.clone());
        (store, active.id)
    }

    #[tokio::test]
    async fn test_complete_profile_marks_account_complete() {
        let store = Arc::new(InMemoryAccountStore::new());
        let active = account("a@x.com", AccountStatus::Active);
        store.insert(active.clone());

        let output = service(store.clone())
            .execute(CompleteProfileInput {
                account_id: active.id,
                profile: complete_profile_fields(),
            })
            .await
            .unwrap();

        assert!(!output.token.is_empty());
        assert!(output.account.profile_completed);
        assert_eq!(output.account.profile.first_name, "Ana");
        assert!(store.get(active.id).unwrap().profile_completed);
    }

    #[tokio::test]
    async fn test_complete_profile_promotes_verified_status() {
        let store = Arc::new(InMemoryAccountStore::new());
        let verified = account("a@x.com", AccountStatus::Verified);
        store.insert(verified.clone());

        let output = service(store)
            .execute(CompleteProfileInput {
                account_id: verified.id,
                profile: complete_profile_fields(),
            })
            .await
            .unwrap();

        assert_eq!(output.account.status, AccountStatus::Active);
    }

    #[tokio::test]
    async fn test_incomplete_profile_rejected_without_write() {
        let store = Arc::new(InMemoryAccountStore::new());
        let active = account("a@x.com", AccountStatus::Active);
        store.insert(active.clone());

        let result = service(store.clone())
            .execute(CompleteProfileInput {
                account_id: active.id,
                profile: ProfileFields {
                    first_name: "Ana".to_string(),
                    ..Default::default()
                },
            })
            .await;

        assert_eq!(
            result.unwrap_err(),
            CompleteProfileError::InvalidProfile("lastName is required".to_string())
        );
        assert!(!store.get(active.id).unwrap().profile_completed);
    }

    #[tokio::test]
    async fn test_missing_account() {
        let store = Arc::new(InMemoryAccountStore::new());

        let result = service(store)
            .execute(CompleteProfileInput {
                account_id: AccountId::new(),
                profile: complete_profile_fields(),
            })
            .await;

        assert_eq!(result.unwrap_err(), CompleteProfileError::AccountNotFound);
    }

    #[tokio::test]
    async fn test_region_codes_are_stored_upper_case() {
        let (store, id) = active_store();
        let mut profile = complete_profile_fields();
        profile.country_code = "cn".to_string();
        profile.state_code = "gd".to_string();
        profile.city_code = "sz".to_string();
        profile.district_code = "ns".to_string();

        let output = service(store)
            .execute(CompleteProfileInput {
                account_id: id,
                profile,
            })
            .await
            .unwrap();

        assert_eq!(output.account.profile.country_code, "CN");
        assert_eq!(output.account.profile.city_code, "SZ");
        assert_eq!(output.account.profile.district_code, "NS");
    }

    #[tokio::test]
    async fn test_unknown_region_rejected_without_write() {
        let (store, id) = active_store();
        let mut profile = complete_profile_fields();
        profile.city_code = "GZ".to_string();
        profile.district_code = "NS".to_string();

        let result = service(store.clone())
            .execute(CompleteProfileInput {
                account_id: id,
                profile,
            })
            .await;

        assert_eq!(
            result.unwrap_err(),
            CompleteProfileError::InvalidProfile(
                "Address codes do not match a known region".to_string()
            )
        );
        assert!(!store.get(id).unwrap().profile_completed);
    }

    #[tokio::test]
    async fn test_state_outside_country_is_rejected() {
        let (store, id) = active_store();
        let mut profile = complete_profile_fields();
        profile.country_code = "US".to_string();
        profile.city_code = String::new();

        let result = service(store)
            .execute(CompleteProfileInput {
                account_id: id,
                profile,
            })
            .await;

        assert!(matches!(result, Err(CompleteProfileError::InvalidProfile(_))));
    }

    #[tokio::test]
    async fn test_district_without_city_is_rejected() {
        let (store, id) = active_store();
        let mut profile = complete_profile_fields();
        profile.city_code = String::new();
        profile.district_code = "NS".to_string();

        let result = service(store)
            .execute(CompleteProfileInput {
                account_id: id,
                profile,
            })
            .await;

        assert_eq!(
            result.unwrap_err(),
            CompleteProfileError::InvalidProfile("districtCode requires cityCode".to_string())
        );
    }

    #[tokio::test]
    async fn test_location_store_outage_is_service_unavailable() {
        let (store, id) = active_store();
        let locations = Arc::new(InMemoryLocations::seeded());
        locations.set_unavailable(true);

        let result = service_with(store.clone(), locations)
            .execute(CompleteProfileInput {
                account_id: id,
                profile: complete_profile_fields(),
            })
            .await;

        assert!(matches!(result, Err(CompleteProfileError::ServiceUnavailable(_))));
        assert!(!store.get(id).unwrap().profile_completed);
    }
}
