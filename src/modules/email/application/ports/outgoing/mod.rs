pub mod email_sender;
pub mod otp_notifier;
