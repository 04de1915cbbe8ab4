use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::routes::AccountView;
use crate::auth::application::use_cases::login_account::{LoginError, LoginRequest};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{http::StatusCode, post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};
use utoipa::ToSchema;

/// Login request from client
#[derive(Deserialize, ToSchema)]
pub struct LoginRequestDto {
    #[schema(example = "patient@example.com")]
    pub email: String,

    #[schema(example = "SecurePass123!")]
    pub password: String,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub token: String,

    /// False until the account has gone through profile completion
    #[schema(example = true)]
    pub profile_complete: bool,

    pub account: AccountView,
}

/// Account login
///
/// Authenticates with email and password. Only `Active` accounts receive a token.
#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    tag = "auth",
    request_body = LoginRequestDto,
    responses(
        (status = 200, description = "Login successful", body = inline(SuccessResponse<LoginResponse>)),
        (status = 400, description = "Malformed request", body = ErrorResponse),
        (
            status = 401,
            description = "Invalid credentials",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": "Invalid email or password",
                "code": "INVALID_CREDENTIALS"
            })
        ),
        (
            status = 403,
            description = "Account exists but is not active",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": "Please verify your email before logging in",
                "code": "ACCOUNT_NOT_ACTIVE",
                "details": { "requiresVerification": true }
            })
        ),
        (status = 503, description = "Account store unavailable", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/v1/auth/login")]
pub async fn login_account_handler(
    req: web::Json<LoginRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    debug!("Login attempt");

    let request = match LoginRequest::new(dto.email, dto.password) {
        Ok(req) => req,
        Err(e) => {
            return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string());
        }
    };

    match data.login_account_use_case.execute(request).await {
        Ok(output) => {
            info!(account_id = %output.account.id, "Account logged in");

            ApiResponse::success(LoginResponse {
                token: output.token,
                profile_complete: output.profile_complete,
                account: output.account.into(),
            })
        }

        Err(e @ LoginError::InvalidCredentials) => {
            warn!("Login failed: invalid credentials");
            ApiResponse::unauthorized("INVALID_CREDENTIALS", &e.to_string())
        }

        Err(LoginError::AccountNotActive {
            requires_verification,
        }) => {
            warn!(requires_verification, "Login refused: account not active");
            let message = if requires_verification {
                "Please verify your email before logging in"
            } else {
                "Account is not active"
            };
            ApiResponse::error_with_details(
                StatusCode::FORBIDDEN,
                "ACCOUNT_NOT_ACTIVE",
                message,
                serde_json::json!({ "requiresVerification": requires_verification }),
            )
        }

        Err(LoginError::ServiceUnavailable(ref e)) => {
            error!(error = %e, "Account store unavailable during login");
            ApiResponse::service_unavailable()
        }

        Err(LoginError::PasswordVerificationFailed(ref e)) => {
            error!(error = %e, "Password verification failed");
            ApiResponse::internal_error()
        }

        Err(LoginError::TokenGenerationFailed(ref e)) => {
            error!(error = %e, "Token generation failed");
            ApiResponse::internal_error()
        }

        Err(LoginError::QueryError(ref e)) => {
            error!(error = %e, "Database query failed");
            ApiResponse::internal_error()
        }
    }
}
