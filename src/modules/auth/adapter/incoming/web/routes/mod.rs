mod account_view;
mod complete_profile;
mod fetch_profile;
mod login_account;
mod register_account;
mod resend_otp;
mod update_profile;
mod verify_otp;

pub use account_view::{AccountResponse, AccountView, ProfileView};
pub use complete_profile::{
    complete_profile_handler, CompleteProfileRequest, CompleteProfileResponse,
};
pub use fetch_profile::fetch_profile_handler;
pub use login_account::{login_account_handler, LoginRequestDto, LoginResponse};
pub use register_account::{
    register_account_handler, RegisterAccountRequest, RegisterAccountResponse,
};
pub use resend_otp::{resend_otp_handler, ResendOtpRequest, ResendOtpResponse};
pub use update_profile::{update_profile_handler, UpdateProfileRequest};
pub use verify_otp::{verify_otp_handler, VerifyOtpRequest, VerifyOtpResponse};

#[doc(hidden)]
pub use complete_profile::__path_complete_profile_handler;
#[doc(hidden)]
pub use fetch_profile::__path_fetch_profile_handler;
#[doc(hidden)]
pub use login_account::__path_login_account_handler;
#[doc(hidden)]
pub use register_account::__path_register_account_handler;
#[doc(hidden)]
pub use resend_otp::__path_resend_otp_handler;
#[doc(hidden)]
pub use update_profile::__path_update_profile_handler;
#[doc(hidden)]
pub use verify_otp::__path_verify_otp_handler;
