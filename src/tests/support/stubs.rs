use async_trait::async_trait;

use crate::auth::application::domain::entities::{Account, AccountId};
use crate::auth::application::use_cases::complete_profile::{
    CompleteProfileError, CompleteProfileInput, CompleteProfileOutput, CompleteProfileUseCase,
};
use crate::auth::application::use_cases::fetch_profile::{FetchProfileError, FetchProfileUseCase};
use crate::auth::application::use_cases::login_account::{
    LoginAccountUseCase, LoginError, LoginOutput, LoginRequest,
};
use crate::auth::application::use_cases::register_account::{
    RegisterAccountError, RegisterAccountInput, RegisterAccountOutput, RegisterAccountUseCase,
};
use crate::auth::application::use_cases::resend_otp::{
    ResendOtpError, ResendOtpInput, ResendOtpOutput, ResendOtpUseCase,
};
use crate::auth::application::use_cases::update_profile::{
    UpdateProfileError, UpdateProfileInput, UpdateProfileUseCase,
};
use crate::auth::application::use_cases::verify_otp::{
    VerifyOtpError, VerifyOtpInput, VerifyOtpOutput, VerifyOtpUseCase,
};
use crate::email::application::ports::outgoing::otp_notifier::{
    OtpNotificationError, OtpNotifier,
};
use crate::location::application::domain::entities::{Region, RegionScope};
use crate::location::application::use_cases::list_regions::{
    ListRegionsError, ListRegionsUseCase,
};

// ============================================================================
// Account lifecycle
// ============================================================================

#[derive(Clone)]
pub struct StubRegisterAccountUseCase;

#[async_trait]
impl RegisterAccountUseCase for StubRegisterAccountUseCase {
    async fn execute(
        &self,
        _input: RegisterAccountInput,
    ) -> Result<RegisterAccountOutput, RegisterAccountError> {
        unimplemented!("not used in this test")
    }
}

#[derive(Clone)]
pub struct StubResendOtpUseCase;

#[async_trait]
impl ResendOtpUseCase for StubResendOtpUseCase {
    async fn execute(&self, _input: ResendOtpInput) -> Result<ResendOtpOutput, ResendOtpError> {
        unimplemented!("not used in this test")
    }
}

#[derive(Clone)]
pub struct StubVerifyOtpUseCase;

#[async_trait]
impl VerifyOtpUseCase for StubVerifyOtpUseCase {
    async fn execute(&self, _input: VerifyOtpInput) -> Result<VerifyOtpOutput, VerifyOtpError> {
        unimplemented!("not used in this test")
    }
}

#[derive(Clone)]
pub struct StubLoginAccountUseCase;

#[async_trait]
impl LoginAccountUseCase for StubLoginAccountUseCase {
    async fn execute(&self, _request: LoginRequest) -> Result<LoginOutput, LoginError> {
        unimplemented!("not used in this test")
    }
}

// ============================================================================
// Profile
// ============================================================================

#[derive(Clone)]
pub struct StubCompleteProfileUseCase;

#[async_trait]
impl CompleteProfileUseCase for StubCompleteProfileUseCase {
    async fn execute(
        &self,
        _input: CompleteProfileInput,
    ) -> Result<CompleteProfileOutput, CompleteProfileError> {
        unimplemented!("not used in this test")
    }
}

#[derive(Clone)]
pub struct StubUpdateProfileUseCase;

#[async_trait]
impl UpdateProfileUseCase for StubUpdateProfileUseCase {
    async fn execute(&self, _input: UpdateProfileInput) -> Result<Account, UpdateProfileError> {
        unimplemented!("not used in this test")
    }
}

#[derive(Clone)]
pub struct StubFetchProfileUseCase;

#[async_trait]
impl FetchProfileUseCase for StubFetchProfileUseCase {
    async fn execute(&self, _account_id: AccountId) -> Result<Account, FetchProfileError> {
        unimplemented!("not used in this test")
    }
}

// ============================================================================
// Notification
// ============================================================================

/// Swallows every code. Route tests never inspect delivery.
#[derive(Clone)]
pub struct StubOtpNotifier;

#[async_trait]
impl OtpNotifier for StubOtpNotifier {
    async fn send_verification_code(
        &self,
        _email: &str,
        _code: &str,
    ) -> Result<(), OtpNotificationError> {
        Ok(())
    }
}

// ============================================================================
// Location
// ============================================================================

#[derive(Clone, Default)]
pub struct StubListRegionsUseCase {
    error: Option<ListRegionsError>,
}

impl StubListRegionsUseCase {
    pub fn failing(error: ListRegionsError) -> Self {
        Self { error: Some(error) }
    }
}

#[async_trait]
impl ListRegionsUseCase for StubListRegionsUseCase {
    async fn execute(&self, _scope: RegionScope) -> Result<Vec<Region>, ListRegionsError> {
        match &self.error {
            Some(e) => Err(e.clone()),
            None => unimplemented!("not used in this test"),
        }
    }
}
