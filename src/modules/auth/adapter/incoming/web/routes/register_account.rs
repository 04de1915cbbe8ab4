use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::domain::entities::ProfileFields;
use crate::auth::application::use_cases::register_account::{
    RegisterAccountError, RegisterAccountInput,
};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, error, info, warn};
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterAccountRequest {
    #[schema(example = "patient@example.com")]
    pub email: String,

    #[schema(example = "SecurePass123!")]
    pub password: String,

    /// Numeric role id. Required.
    #[schema(example = 1)]
    pub role: Option<i32>,

    #[serde(default)]
    #[schema(example = "Ana")]
    pub first_name: Option<String>,

    #[serde(default)]
    #[schema(example = "Lee")]
    pub last_name: Option<String>,

    #[serde(default)]
    #[schema(example = "+86 138 0000 0000")]
    pub phone_number: Option<String>,

    #[serde(default)]
    #[schema(example = "Female")]
    pub gender: Option<String>,

    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
}

impl fmt::Debug for RegisterAccountRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterAccountRequest")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("role", &self.role)
            .finish()
    }
}

impl From<RegisterAccountRequest> for RegisterAccountInput {
    fn from(req: RegisterAccountRequest) -> Self {
        RegisterAccountInput {
            email: req.email,
            password: req.password,
            role: req.role,
            profile: ProfileFields {
                first_name: req.first_name.unwrap_or_default(),
                last_name: req.last_name.unwrap_or_default(),
                phone_number: req.phone_number.unwrap_or_default(),
                gender: req.gender.unwrap_or_default(),
                date_of_birth: req.date_of_birth,
                ..Default::default()
            },
        }
    }
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterAccountResponse {
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    pub account_id: String,

    #[schema(example = "patient@example.com")]
    pub email: String,

    #[schema(example = "Registration successful. Please check your email for the verification code.")]
    pub message: String,
}

/// Register a new account
///
/// Creates a `Pending` account and emails a six digit verification code.
/// The code is never part of the response.
#[utoipa::path(
    post,
    path = "/api/v1/auth/register",
    tag = "auth",
    request_body = RegisterAccountRequest,
    responses(
        (status = 201, description = "Account created", body = inline(SuccessResponse<RegisterAccountResponse>)),
        (
            status = 400,
            description = "Invalid email, password, role or profile field",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": "Password must be at least 8 characters",
                "code": "INVALID_PASSWORD"
            })
        ),
        (
            status = 409,
            description = "Email already registered",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": "An account with this email already exists",
                "code": "ACCOUNT_ALREADY_EXISTS"
            })
        ),
        (status = 503, description = "Account store unavailable", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/v1/auth/register")]
pub async fn register_account_handler(
    req: web::Json<RegisterAccountRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let request = req.into_inner();
    debug!("Registration attempt");

    match data.account_registration.register(request.into()).await {
        Ok(output) => {
            info!(account_id = %output.account_id, "Account registered");
            ApiResponse::created(RegisterAccountResponse {
                account_id: output.account_id.to_string(),
                email: output.email,
                message: output.message,
            })
        }

        Err(RegisterAccountError::InvalidEmail(msg)) => {
            warn!("Registration rejected: {}", msg);
            ApiResponse::bad_request("INVALID_EMAIL", &msg)
        }

        Err(RegisterAccountError::InvalidPassword(msg)) => {
            warn!("Registration rejected: {}", msg);
            ApiResponse::bad_request("INVALID_PASSWORD", &msg)
        }

        Err(RegisterAccountError::InvalidRole(msg)) => {
            warn!("Registration rejected: {}", msg);
            ApiResponse::bad_request("INVALID_ROLE", &msg)
        }

        Err(RegisterAccountError::InvalidProfile(msg)) => {
            warn!("Registration rejected: {}", msg);
            ApiResponse::bad_request("INVALID_PROFILE", &msg)
        }

        Err(e @ RegisterAccountError::EmailAlreadyExists) => {
            warn!("Registration rejected: email already registered");
            ApiResponse::conflict("ACCOUNT_ALREADY_EXISTS", &e.to_string())
        }

        Err(RegisterAccountError::ServiceUnavailable(e)) => {
            error!(error = %e, "Account store unavailable during registration");
            ApiResponse::service_unavailable()
        }

        Err(RegisterAccountError::HashingFailed(e)) => {
            error!(error = %e, "Password hashing failed");
            ApiResponse::internal_error()
        }

        Err(RegisterAccountError::RepositoryError(e)) => {
            error!(error = %e, "Failed to persist account");
            ApiResponse::internal_error()
        }
    }
}
