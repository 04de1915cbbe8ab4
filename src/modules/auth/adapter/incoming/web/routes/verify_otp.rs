use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::routes::AccountView;
use crate::auth::application::use_cases::verify_otp::{VerifyOtpError, VerifyOtpInput};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct VerifyOtpRequest {
    #[schema(example = "patient@example.com")]
    pub email: String,

    /// Six digit code from the verification email
    #[serde(alias = "otp")]
    #[schema(example = "482913")]
    pub code: String,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VerifyOtpResponse {
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub token: String,

    #[schema(example = true)]
    pub requires_profile_completion: bool,

    pub account: AccountView,
}

/// Confirm an email address
///
/// Consumes the pending verification code, activates the account and
/// returns a bearer token. A code can be used once.
#[utoipa::path(
    post,
    path = "/api/v1/auth/verify-otp",
    tag = "auth",
    request_body = VerifyOtpRequest,
    responses(
        (status = 200, description = "Email verified", body = inline(SuccessResponse<VerifyOtpResponse>)),
        (
            status = 400,
            description = "Malformed, wrong or expired code",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": "Invalid verification code",
                "code": "INVALID_CODE"
            })
        ),
        (status = 404, description = "No account for this email", body = ErrorResponse),
        (status = 503, description = "Account store unavailable", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/v1/auth/verify-otp")]
pub async fn verify_otp_handler(
    req: web::Json<VerifyOtpRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let request = req.into_inner();
    debug!("Verification attempt");

    let input = VerifyOtpInput {
        email: request.email,
        code: request.code,
    };

    match data.verify_otp_use_case.execute(input).await {
        Ok(output) => {
            info!(account_id = %output.account.id, "Email verified");
            ApiResponse::success(VerifyOtpResponse {
                token: output.token,
                requires_profile_completion: output.requires_profile_completion,
                account: output.account.into(),
            })
        }

        Err(VerifyOtpError::InvalidEmail(msg)) => {
            warn!("Verification rejected: {}", msg);
            ApiResponse::bad_request("INVALID_EMAIL", &msg)
        }

        Err(VerifyOtpError::InvalidCodeFormat(msg)) => {
            warn!("Verification rejected: malformed code");
            ApiResponse::bad_request("INVALID_OTP_FORMAT", &msg)
        }

        Err(e @ VerifyOtpError::AccountNotFound) => {
            warn!("Verification rejected: unknown email");
            ApiResponse::not_found("ACCOUNT_NOT_FOUND", &e.to_string())
        }

        Err(e @ VerifyOtpError::Expired) => {
            warn!("Verification rejected: code expired");
            ApiResponse::bad_request("OTP_EXPIRED", &e.to_string())
        }

        Err(e @ VerifyOtpError::InvalidCode) => {
            warn!("Verification rejected: code mismatch");
            ApiResponse::bad_request("INVALID_CODE", &e.to_string())
        }

        Err(VerifyOtpError::ServiceUnavailable(e)) => {
            error!(error = %e, "Account store unavailable during verification");
            ApiResponse::service_unavailable()
        }

        Err(VerifyOtpError::TokenGenerationFailed(e)) => {
            error!(error = %e, "Token generation failed");
            ApiResponse::internal_error()
        }

        Err(VerifyOtpError::RepositoryError(e)) => {
            error!(error = %e, "Failed to update account during verification");
            ApiResponse::internal_error()
        }
    }
}
