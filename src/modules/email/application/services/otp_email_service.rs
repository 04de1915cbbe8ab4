use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;

use crate::auth::application::domain::entities::OTP_VALIDITY_SECONDS;
use crate::email::application::ports::outgoing::email_sender::EmailSender;
use crate::email::application::ports::outgoing::otp_notifier::{
    OtpNotificationError, OtpNotifier,
};

#[derive(Clone)]
pub struct OtpEmailService {
    sender: Arc<dyn EmailSender + Send + Sync>,
    platform_name: String,
}

impl fmt::Debug for OtpEmailService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OtpEmailService")
            .field("sender", &"<dyn EmailSender>")
            .field("platform_name", &self.platform_name)
            .finish()
    }
}

impl OtpEmailService {
    pub fn new(sender: Arc<dyn EmailSender + Send + Sync>, platform_name: &str) -> Self {
        Self {
            sender,
            platform_name: platform_name.to_string(),
        }
    }

    fn subject(&self) -> String {
        format!("{} - Verification Code", self.platform_name)
    }

    fn body(&self, code: &str) -> String {
        let minutes = OTP_VALIDITY_SECONDS / 60;
        format!(
            r#"<html>
<body style="font-family: Arial, sans-serif; line-height: 1.6;">
  <h2>{platform}</h2>
  <p>Your verification code is:</p>
  <p style="font-size: 28px; font-weight: bold; letter-spacing: 6px;">{code}</p>
  <p>This code expires in {minutes} minutes.</p>
  <p>If you did not create an account, you can ignore this email.</p>
</body>
</html>"#,
            platform = self.platform_name,
            code = code,
            minutes = minutes,
        )
    }
}

#[async_trait]
impl OtpNotifier for OtpEmailService {
    async fn send_verification_code(
        &self,
        email: &str,
        code: &str,
    ) -> Result<(), OtpNotificationError> {
        self.sender
            .send_email(email, &self.subject(), &self.body(code))
            .await
            .map_err(|e| OtpNotificationError::DeliveryFailed(e.to_string()))
    }
}
