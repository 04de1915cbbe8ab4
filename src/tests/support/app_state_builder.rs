use crate::auth::application::domain::entities::{Account, AccountStatus};
use crate::auth::application::helpers::access_resolver::AccessResolver;
use crate::auth::application::orchestrator::account_registration::AccountRegistrationOrchestrator;
use crate::auth::application::ports::outgoing::TokenProvider;
use crate::auth::application::use_cases::{
    complete_profile::CompleteProfileUseCase, fetch_profile::FetchProfileUseCase,
    login_account::LoginAccountUseCase, update_profile::UpdateProfileUseCase,
    verify_otp::VerifyOtpUseCase,
};
use crate::tests::support::fakes::test_jwt_service;
use crate::tests::support::fixtures::account;
use crate::tests::support::in_memory_store::InMemoryAccountStore;
use crate::tests::support::stubs::*;
use crate::location::application::use_cases::list_regions::ListRegionsUseCase;
use crate::AppState;
use actix_web::web;
use std::sync::Arc;

pub struct TestAppStateBuilder {
    account_registration: Arc<AccountRegistrationOrchestrator>,
    verify_otp: Arc<dyn VerifyOtpUseCase + Send + Sync>,
    login_account: Arc<dyn LoginAccountUseCase + Send + Sync>,
    complete_profile: Arc<dyn CompleteProfileUseCase + Send + Sync>,
    update_profile: Arc<dyn UpdateProfileUseCase + Send + Sync>,
    fetch_profile: Arc<dyn FetchProfileUseCase + Send + Sync>,
    list_regions: Arc<dyn ListRegionsUseCase + Send + Sync>,
    access_resolver: AccessResolver,
}

pub fn default_test_account_registration_orchestrator() -> Arc<AccountRegistrationOrchestrator> {
    Arc::new(AccountRegistrationOrchestrator::new(
        Arc::new(StubRegisterAccountUseCase),
        Arc::new(StubResendOtpUseCase),
        Arc::new(StubOtpNotifier),
    ))
}

/// An access resolver over an empty store: every token is rejected.
pub fn default_test_access_resolver() -> AccessResolver {
    AccessResolver::new(
        Arc::new(test_jwt_service()),
        Arc::new(InMemoryAccountStore::new()),
    )
}

/// Seeds one account with the given status and returns a resolver that knows
/// about it, the account itself, and a bearer token for it.
pub fn seeded_access(status: AccountStatus) -> (AccessResolver, Account, String) {
    let store = Arc::new(InMemoryAccountStore::new());
    let seeded = account("patient@example.com", status);
    store.insert(seeded.clone());

    let jwt = test_jwt_service();
    let token = jwt
        .issue_token(seeded.id, seeded.role)
        .expect("test token should sign");
    let resolver = AccessResolver::new(Arc::new(jwt), store);

    (resolver, seeded, token)
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            account_registration: default_test_account_registration_orchestrator(),
            verify_otp: Arc::new(StubVerifyOtpUseCase),
            login_account: Arc::new(StubLoginAccountUseCase),
            complete_profile: Arc::new(StubCompleteProfileUseCase),
            update_profile: Arc::new(StubUpdateProfileUseCase),
            fetch_profile: Arc::new(StubFetchProfileUseCase),
            list_regions: Arc::new(StubListRegionsUseCase::default()),
            access_resolver: default_test_access_resolver(),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_account_registration(
        mut self,
        orchestrator: Arc<AccountRegistrationOrchestrator>,
    ) -> Self {
        self.account_registration = orchestrator;
        self
    }

    pub fn with_verify_otp(mut self, uc: impl VerifyOtpUseCase + Send + Sync + 'static) -> Self {
        self.verify_otp = Arc::new(uc);
        self
    }

    pub fn with_login_account(
        mut self,
        uc: impl LoginAccountUseCase + Send + Sync + 'static,
    ) -> Self {
        self.login_account = Arc::new(uc);
        self
    }

    pub fn with_complete_profile(
        mut self,
        uc: impl CompleteProfileUseCase + Send + Sync + 'static,
    ) -> Self {
        self.complete_profile = Arc::new(uc);
        self
    }

    pub fn with_update_profile(
        mut self,
        uc: impl UpdateProfileUseCase + Send + Sync + 'static,
    ) -> Self {
        self.update_profile = Arc::new(uc);
        self
    }

    pub fn with_fetch_profile(
        mut self,
        uc: impl FetchProfileUseCase + Send + Sync + 'static,
    ) -> Self {
        self.fetch_profile = Arc::new(uc);
        self
    }

    pub fn with_list_regions(
        mut self,
        uc: impl ListRegionsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.list_regions = Arc::new(uc);
        self
    }

    pub fn with_access_resolver(mut self, resolver: AccessResolver) -> Self {
        self.access_resolver = resolver;
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            account_registration: self.account_registration,
            verify_otp_use_case: self.verify_otp,
            login_account_use_case: self.login_account,
            complete_profile_use_case: self.complete_profile,
            update_profile_use_case: self.update_profile,
            fetch_profile_use_case: self.fetch_profile,
            list_regions_use_case: self.list_regions,
            access_resolver: self.access_resolver,
        })
    }
}
