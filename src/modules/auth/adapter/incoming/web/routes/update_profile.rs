use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedAccount;
use crate::auth::adapter::incoming::web::routes::{AccountResponse, AccountView};
use crate::auth::application::domain::entities::ProfilePatch;
use crate::auth::application::use_cases::update_profile::{
    UpdateProfileError, UpdateProfileInput,
};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;

/// Partial profile update. Only the listed fields are accepted; a body that
/// names anything else (email, password, role, status...) is rejected.
#[derive(Deserialize, ToSchema, Default)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateProfileRequest {
    #[schema(example = "Ana")]
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    #[schema(example = "+86 139 1111 2222")]
    pub phone_number: Option<String>,
    pub languages: Option<String>,
    pub occupation: Option<String>,
    pub wechat_id: Option<String>,
    pub religion: Option<String>,
    pub marital_status: Option<String>,
    #[schema(example = 168)]
    pub height_cm: Option<i32>,
    pub weight_kg: Option<i32>,
    pub no_children: Option<i32>,
}

impl From<UpdateProfileRequest> for ProfilePatch {
    fn from(r: UpdateProfileRequest) -> Self {
        ProfilePatch {
            first_name: r.first_name,
            last_name: r.last_name,
            phone_number: r.phone_number,
            languages: r.languages,
            occupation: r.occupation,
            wechat_id: r.wechat_id,
            religion: r.religion,
            marital_status: r.marital_status,
            height_cm: r.height_cm,
            weight_kg: r.weight_kg,
            no_children: r.no_children,
        }
    }
}

/// Update own profile
#[utoipa::path(
    put,
    path = "/api/v1/auth/profile",
    tag = "auth",
    request_body = UpdateProfileRequest,
    responses(
        (status = 200, description = "Profile updated", body = inline(SuccessResponse<AccountResponse>)),
        (
            status = 400,
            description = "Empty update, unknown field or invalid value",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": "No updatable fields supplied",
                "code": "VALIDATION_ERROR"
            })
        ),
        (status = 401, description = "Missing, invalid or revoked token", body = ErrorResponse),
        (status = 404, description = "Account no longer exists", body = ErrorResponse),
        (status = 503, description = "Account store unavailable", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[put("/api/v1/auth/profile")]
pub async fn update_profile_handler(
    account: AuthenticatedAccount,
    req: web::Json<UpdateProfileRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    info!(account_id = %account.account_id, "Profile update");

    let input = UpdateProfileInput {
        account_id: account.account_id,
        patch: req.into_inner().into(),
    };

    match data.update_profile_use_case.execute(input).await {
        Ok(updated) => {
            info!(account_id = %updated.id, "Profile updated");
            ApiResponse::success(AccountResponse {
                account: AccountView::from(updated),
            })
        }

        Err(e @ UpdateProfileError::EmptyUpdate) => {
            warn!(account_id = %account.account_id, "Profile update without fields");
            ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string())
        }

        Err(UpdateProfileError::InvalidField(msg)) => {
            warn!(account_id = %account.account_id, "Profile update rejected: {}", msg);
            ApiResponse::bad_request("INVALID_PROFILE", &msg)
        }

        Err(e @ UpdateProfileError::AccountNotFound) => {
            warn!(account_id = %account.account_id, "Profile update for missing account");
            ApiResponse::not_found("ACCOUNT_NOT_FOUND", &e.to_string())
        }

        Err(UpdateProfileError::ServiceUnavailable(e)) => {
            error!(error = %e, "Account store unavailable during profile update");
            ApiResponse::service_unavailable()
        }

        Err(UpdateProfileError::RepositoryError(e)) => {
            error!(error = %e, "Failed to update profile");
            ApiResponse::internal_error()
        }
    }
}
