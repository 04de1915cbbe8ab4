use std::sync::Arc;
use std::time::Duration;

use crate::auth::application::domain::entities::AccountId;
use crate::auth::application::use_cases::register_account::{
    RegisterAccountError, RegisterAccountInput, RegisterAccountUseCase,
};
use crate::auth::application::use_cases::resend_otp::{
    ResendOtpError, ResendOtpInput, ResendOtpUseCase,
};
use crate::email::application::ports::outgoing::otp_notifier::OtpNotifier;

// ============================================================================
// Outputs (never carry the code)
// ============================================================================
#[derive(Debug, Clone)]
pub struct AccountRegistrationOutput {
    pub account_id: AccountId,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct OtpResendOutput {
    pub email: String,
    pub message: String,
}

// ============================================================================
// Delivery retry policy
// ============================================================================
#[derive(Debug, Clone, Copy)]
pub struct DeliveryRetryPolicy {
    pub max_attempts: u32,
    /// Delay before retry `n` is `base_delay * 2^n`.
    pub base_delay: Duration,
}

impl Default for DeliveryRetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_secs(1),
        }
    }
}

// ============================================================================
// Account Registration Orchestrator
// ============================================================================

/// Runs the account use cases that mint a code, then hands the code to the
/// notifier on a background task. The HTTP caller only ever sees the result
/// of the use case.
#[derive(Clone)]
pub struct AccountRegistrationOrchestrator {
    register_use_case: Arc<dyn RegisterAccountUseCase + Send + Sync>,
    resend_use_case: Arc<dyn ResendOtpUseCase + Send + Sync>,
    notifier: Arc<dyn OtpNotifier + Send + Sync>,
    retry_policy: DeliveryRetryPolicy,
}

impl AccountRegistrationOrchestrator {
    pub fn new(
        register_use_case: Arc<dyn RegisterAccountUseCase + Send + Sync>,
        resend_use_case: Arc<dyn ResendOtpUseCase + Send + Sync>,
        notifier: Arc<dyn OtpNotifier + Send + Sync>,
    ) -> Self {
        Self {
            register_use_case,
            resend_use_case,
            notifier,
            retry_policy: DeliveryRetryPolicy::default(),
        }
    }

    pub fn with_retry_policy(mut self, retry_policy: DeliveryRetryPolicy) -> Self {
        self.retry_policy = retry_policy;
        self
    }

    pub async fn register(
        &self,
        input: RegisterAccountInput,
    ) -> Result<AccountRegistrationOutput, RegisterAccountError> {
        let created = self.register_use_case.execute(input).await?;

        self.dispatch(created.account_id, created.email.clone(), created.otp_code);

        Ok(AccountRegistrationOutput {
            account_id: created.account_id,
            email: created.email,
            message: "Registration successful. Please check your email for the verification code."
                .to_string(),
        })
    }

    pub async fn resend(&self, input: ResendOtpInput) -> Result<OtpResendOutput, ResendOtpError> {
        let reissued = self.resend_use_case.execute(input).await?;

        self.dispatch(reissued.account_id, reissued.email.clone(), reissued.otp_code);

        Ok(OtpResendOutput {
            email: reissued.email,
            message: "A new verification code has been sent to your email.".to_string(),
        })
    }

    fn dispatch(&self, account_id: AccountId, email: String, code: String) {
        let notifier = self.notifier.clone();
        let policy = self.retry_policy;

        tokio::spawn(async move {
            for attempt in 1..=policy.max_attempts {
                match notifier.send_verification_code(&email, &code).await {
                    Ok(_) => {
                        tracing::debug!(account_id = %account_id, attempt, "Verification code sent");
                        return;
                    }
                    Err(e) if attempt < policy.max_attempts => {
                        tracing::warn!(
                            account_id = %account_id,
                            "Verification email attempt {}/{} failed: {}. Retrying...",
                            attempt,
                            policy.max_attempts,
                            e
                        );
                        tokio::time::sleep(policy.base_delay * 2_u32.pow(attempt)).await;
                    }
                    Err(e) => {
                        tracing::error!(
                            account_id = %account_id,
                            "All {} verification email attempts failed: {}",
                            policy.max_attempts,
                            e
                        );
                    }
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::use_cases::register_account::RegisterAccountOutput;
    use crate::auth::application::use_cases::resend_otp::ResendOtpOutput;
    use crate::email::application::ports::outgoing::otp_notifier::OtpNotificationError;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Mutex;
    use tokio::sync::Notify;

    // =====================================================
    // Mock use cases
    // =====================================================

    struct MockRegister {
        result: Result<RegisterAccountOutput, RegisterAccountError>,
    }

    #[async_trait]
    impl RegisterAccountUseCase for MockRegister {
        async fn execute(
            &self,
            _input: RegisterAccountInput,
        ) -> Result<RegisterAccountOutput, RegisterAccountError> {
            self.result.clone()
        }
    }

    struct MockResend {
        result: Result<ResendOtpOutput, ResendOtpError>,
    }

    #[async_trait]
    impl ResendOtpUseCase for MockResend {
        async fn execute(&self, _input: ResendOtpInput) -> Result<ResendOtpOutput, ResendOtpError> {
            self.result.clone()
        }
    }

    // =====================================================
    // Mock notifier
    // =====================================================

    #[derive(Clone)]
    struct MockNotifier {
        failures_before_success: u32,
        calls: Arc<AtomicU32>,
        delivered: Arc<Mutex<Vec<(String, String)>>>,
        notify: Arc<Notify>,
    }

    impl MockNotifier {
        fn new(failures_before_success: u32) -> Self {
            Self {
                failures_before_success,
                calls: Arc::new(AtomicU32::new(0)),
                delivered: Arc::new(Mutex::new(Vec::new())),
                notify: Arc::new(Notify::new()),
            }
        }

        fn calls(&self) -> u32 {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl OtpNotifier for MockNotifier {
        async fn send_verification_code(
            &self,
            email: &str,
            code: &str,
        ) -> Result<(), OtpNotificationError> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
            self.notify.notify_one();

            if call <= self.failures_before_success {
                return Err(OtpNotificationError::DeliveryFailed("SMTP down".to_string()));
            }
            self.delivered
                .lock()
                .unwrap()
                .push((email.to_string(), code.to_string()));
            Ok(())
        }
    }

    // =====================================================
    // Helpers
    // =====================================================

    fn registered() -> RegisterAccountOutput {
        RegisterAccountOutput {
            account_id: AccountId::new(),
            email: "a@x.com".to_string(),
            otp_code: "482913".to_string(),
        }
    }

    fn fast_policy() -> DeliveryRetryPolicy {
        DeliveryRetryPolicy {
            max_attempts: 3,
            base_delay: Duration::from_millis(1),
        }
    }

    fn orchestrator(
        register: Result<RegisterAccountOutput, RegisterAccountError>,
        resend: Result<ResendOtpOutput, ResendOtpError>,
        notifier: MockNotifier,
    ) -> AccountRegistrationOrchestrator {
        AccountRegistrationOrchestrator::new(
            Arc::new(MockRegister { result: register }),
            Arc::new(MockResend { result: resend }),
            Arc::new(notifier),
        )
        .with_retry_policy(fast_policy())
    }

    async fn wait_for_calls(notifier: &MockNotifier, expected: u32) {
        tokio::time::timeout(Duration::from_secs(2), async {
            while notifier.calls() < expected {
                notifier.notify.notified().await;
            }
        })
        .await
        .expect("notifier should have been called in time");
    }

    // =====================================================
    // Tests
    // =====================================================

    #[tokio::test]
    async fn test_register_dispatches_code_in_background() {
        let notifier = MockNotifier::new(0);
        let service = orchestrator(
            Ok(registered()),
            Err(ResendOtpError::AccountNotFound),
            notifier.clone(),
        );

        let output = service.register(RegisterAccountInput::default()).await.unwrap();

        assert_eq!(output.email, "a@x.com");
        assert!(output.message.contains("verification code"));
        assert!(!format!("{:?}", output).contains("482913"));

        wait_for_calls(&notifier, 1).await;
        assert_eq!(
            notifier.delivered.lock().unwrap().clone(),
            vec![("a@x.com".to_string(), "482913".to_string())]
        );
    }

    #[tokio::test]
    async fn test_register_succeeds_even_when_delivery_keeps_failing() {
        let notifier = MockNotifier::new(u32::MAX);
        let service = orchestrator(
            Ok(registered()),
            Err(ResendOtpError::AccountNotFound),
            notifier.clone(),
        );

        let result = service.register(RegisterAccountInput::default()).await;

        assert!(result.is_ok());
        wait_for_calls(&notifier, 3).await;
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(notifier.calls(), 3, "retries stop at max_attempts");
    }

    #[tokio::test]
    async fn test_delivery_retries_until_success() {
        let notifier = MockNotifier::new(1);
        let service = orchestrator(
            Ok(registered()),
            Err(ResendOtpError::AccountNotFound),
            notifier.clone(),
        );

        service.register(RegisterAccountInput::default()).await.unwrap();

        wait_for_calls(&notifier, 2).await;
        tokio::time::sleep(Duration::from_millis(20)).await;
        assert_eq!(notifier.delivered.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_register_failure_skips_delivery() {
        let notifier = MockNotifier::new(0);
        let service = orchestrator(
            Err(RegisterAccountError::EmailAlreadyExists),
            Err(ResendOtpError::AccountNotFound),
            notifier.clone(),
        );

        let result = service.register(RegisterAccountInput::default()).await;

        assert_eq!(result.unwrap_err(), RegisterAccountError::EmailAlreadyExists);
        tokio::time::sleep(Duration::from_millis(10)).await;
        assert_eq!(notifier.calls(), 0);
    }

    #[tokio::test]
    async fn test_resend_dispatches_new_code() {
        let notifier = MockNotifier::new(0);
        let account_id = AccountId::new();
        let service = orchestrator(
            Err(RegisterAccountError::EmailAlreadyExists),
            Ok(ResendOtpOutput {
                account_id,
                email: "a@x.com".to_string(),
                otp_code: "111222".to_string(),
            }),
            notifier.clone(),
        );

        let output = service
            .resend(ResendOtpInput {
                email: "a@x.com".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(output.email, "a@x.com");
        wait_for_calls(&notifier, 1).await;
        assert_eq!(notifier.delivered.lock().unwrap()[0].1, "111222");
    }

    #[tokio::test]
    async fn test_resend_for_verified_account_sends_nothing() {
        let notifier = MockNotifier::new(0);
        let service = orchestrator(
            Err(RegisterAccountError::EmailAlreadyExists),
            Err(ResendOtpError::AlreadyVerified),
            notifier.clone(),
        );

        let result = service
            .resend(ResendOtpInput {
                email: "a@x.com".to_string(),
            })
            .await;

        assert_eq!(result.unwrap_err(), ResendOtpError::AlreadyVerified);
        tokio::time::sleep(Duration::from_millis(10)).await;
        assert_eq!(notifier.calls(), 0);
    }
}
