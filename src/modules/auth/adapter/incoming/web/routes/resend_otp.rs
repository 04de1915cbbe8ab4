use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::use_cases::resend_otp::{ResendOtpError, ResendOtpInput};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct ResendOtpRequest {
    #[schema(example = "patient@example.com")]
    pub email: String,
}

#[derive(Serialize, ToSchema)]
pub struct ResendOtpResponse {
    #[schema(example = "A new verification code has been sent to your email.")]
    pub message: String,
}

/// Issue a fresh verification code
///
/// Replaces the pending code of an unverified account and emails the new one.
#[utoipa::path(
    post,
    path = "/api/v1/auth/resend-otp",
    tag = "auth",
    request_body = ResendOtpRequest,
    responses(
        (status = 200, description = "New code dispatched", body = inline(SuccessResponse<ResendOtpResponse>)),
        (
            status = 400,
            description = "Invalid email or account already verified",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": "Email already verified",
                "code": "ALREADY_VERIFIED"
            })
        ),
        (status = 404, description = "No account for this email", body = ErrorResponse),
        (status = 503, description = "Account store unavailable", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/v1/auth/resend-otp")]
pub async fn resend_otp_handler(
    req: web::Json<ResendOtpRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let email = req.into_inner().email;
    debug!("Verification code resend requested");

    match data.account_registration.resend(ResendOtpInput { email }).await {
        Ok(output) => {
            info!("Verification code reissued");
            ApiResponse::success(ResendOtpResponse {
                message: output.message,
            })
        }

        Err(ResendOtpError::InvalidEmail(msg)) => {
            warn!("Resend rejected: {}", msg);
            ApiResponse::bad_request("INVALID_EMAIL", &msg)
        }

        Err(e @ ResendOtpError::AccountNotFound) => {
            warn!("Resend rejected: unknown email");
            ApiResponse::not_found("ACCOUNT_NOT_FOUND", &e.to_string())
        }

        Err(e @ ResendOtpError::AlreadyVerified) => {
            warn!("Resend rejected: account already verified");
            ApiResponse::bad_request("ALREADY_VERIFIED", &e.to_string())
        }

        Err(ResendOtpError::ServiceUnavailable(e)) => {
            error!(error = %e, "Account store unavailable during resend");
            ApiResponse::service_unavailable()
        }

        Err(ResendOtpError::RepositoryError(e)) => {
            error!(error = %e, "Failed to store reissued code");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::AccountId;
    use crate::auth::application::orchestrator::account_registration::AccountRegistrationOrchestrator;
    use crate::auth::application::use_cases::resend_otp::{ResendOtpOutput, ResendOtpUseCase};
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::{StubOtpNotifier, StubRegisterAccountUseCase};
    use actix_web::{test, App};
    use async_trait::async_trait;
    use std::sync::Arc;

    struct MockResend(Result<ResendOtpOutput, ResendOtpError>);

    #[async_trait]
    impl ResendOtpUseCase for MockResend {
        async fn execute(&self, _input: ResendOtpInput) -> Result<ResendOtpOutput, ResendOtpError> {
            self.0.clone()
        }
    }

    async fn call(
        result: Result<ResendOtpOutput, ResendOtpError>,
    ) -> (actix_web::http::StatusCode, serde_json::Value) {
        let orchestrator = Arc::new(AccountRegistrationOrchestrator::new(
            Arc::new(StubRegisterAccountUseCase),
            Arc::new(MockResend(result)),
            Arc::new(StubOtpNotifier),
        ));
        let app_state = TestAppStateBuilder::default()
            .with_account_registration(orchestrator)
            .build();

        let app =
            test::init_service(App::new().app_data(app_state).service(resend_otp_handler)).await;

        let req = test::TestRequest::post()
            .uri("/api/v1/auth/resend-otp")
            .set_json(serde_json::json!({ "email": "patient@example.com" }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn test_resend_success_hides_code() {
        let (status, body) = call(Ok(ResendOtpOutput {
            account_id: AccountId::new(),
            email: "patient@example.com".to_string(),
            otp_code: "555111".to_string(),
        }))
        .await;

        assert_eq!(status, 200);
        assert_eq!(body["success"], true);
        assert_eq!(
            body["data"]["message"],
            "A new verification code has been sent to your email."
        );
        assert!(!body.to_string().contains("555111"));
    }

    #[actix_web::test]
    async fn test_resend_already_verified() {
        let (status, body) = call(Err(ResendOtpError::AlreadyVerified)).await;

        assert_eq!(status, 400);
        assert_eq!(body["code"], "ALREADY_VERIFIED");
        assert_eq!(body["error"], "Email already verified");
    }

    #[actix_web::test]
    async fn test_resend_unknown_email() {
        let (status, body) = call(Err(ResendOtpError::AccountNotFound)).await;

        assert_eq!(status, 404);
        assert_eq!(body["code"], "ACCOUNT_NOT_FOUND");
    }

    #[actix_web::test]
    async fn test_resend_store_failures() {
        let (status, body) =
            call(Err(ResendOtpError::ServiceUnavailable("timeout".to_string()))).await;
        assert_eq!(status, 503);
        assert_eq!(body["code"], "SERVICE_UNAVAILABLE");

        let (status, body) = call(Err(ResendOtpError::RepositoryError("bad".to_string()))).await;
        assert_eq!(status, 500);
        assert_eq!(body["code"], "INTERNAL_ERROR");
    }
}
