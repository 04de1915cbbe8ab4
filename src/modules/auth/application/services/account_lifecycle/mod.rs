mod login_account;
mod register_account;
mod resend_otp;
mod verify_otp;

pub use login_account::LoginAccountService;
pub use register_account::RegisterAccountService;
pub use resend_otp::ResendOtpService;
pub use verify_otp::VerifyOtpService;
