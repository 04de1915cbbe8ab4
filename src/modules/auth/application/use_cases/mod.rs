pub mod complete_profile;
pub mod fetch_profile;
pub mod login_account;
pub mod register_account;
pub mod resend_otp;
pub mod update_profile;
pub mod verify_otp;
