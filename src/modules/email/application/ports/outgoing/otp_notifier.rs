use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum OtpNotificationError {
    #[error("Verification code delivery failed: {0}")]
    DeliveryFailed(String),
}

/// Delivers a one-time code to the account holder. Callers treat this as
/// best effort: a failure is logged, never surfaced to the client.
#[async_trait]
pub trait OtpNotifier: Send + Sync {
    async fn send_verification_code(
        &self,
        email: &str,
        code: &str,
    ) -> Result<(), OtpNotificationError>;
}
