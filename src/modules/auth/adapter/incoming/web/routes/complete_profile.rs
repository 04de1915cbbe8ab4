use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::VerifiedAccount;
use crate::auth::adapter::incoming::web::routes::AccountView;
use crate::auth::application::domain::entities::ProfileFields;
use crate::auth::application::use_cases::complete_profile::{
    CompleteProfileError, CompleteProfileInput,
};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

/// Personal details submitted once after email verification. Missing
/// required fields are reported by validation rather than by the JSON layer.
#[derive(Deserialize, ToSchema, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct CompleteProfileRequest {
    #[schema(example = "Ana")]
    pub first_name: String,
    #[schema(example = "Lee")]
    pub last_name: String,
    /// `Male`, `Female` or `Other`
    #[schema(example = "Female")]
    pub gender: String,
    #[schema(example = "+86 138 0000 0000")]
    pub phone_number: String,
    #[schema(value_type = Option<String>, example = "1990-04-12")]
    pub date_of_birth: Option<NaiveDate>,
    pub wechat_id: String,
    pub languages: String,
    pub occupation: String,
    pub religion: String,
    pub height_cm: Option<i32>,
    pub weight_kg: Option<i32>,
    pub marital_status: String,
    pub no_children: Option<i32>,
    #[schema(example = "CN")]
    pub country_code: String,
    #[schema(example = "GD")]
    pub state_code: String,
    pub city_code: String,
    pub district_code: String,
    #[schema(example = "1 Shennan Road")]
    pub street_address: String,
    #[schema(example = "518000")]
    pub postal_code: String,
}

impl From<CompleteProfileRequest> for ProfileFields {
    fn from(r: CompleteProfileRequest) -> Self {
        ProfileFields {
            first_name: r.first_name,
            last_name: r.last_name,
            gender: r.gender,
            phone_number: r.phone_number,
            date_of_birth: r.date_of_birth,
            wechat_id: r.wechat_id,
            languages: r.languages,
            occupation: r.occupation,
            religion: r.religion,
            height_cm: r.height_cm,
            weight_kg: r.weight_kg,
            marital_status: r.marital_status,
            no_children: r.no_children,
            country_code: r.country_code,
            state_code: r.state_code,
            city_code: r.city_code,
            district_code: r.district_code,
            street_address: r.street_address,
            postal_code: r.postal_code,
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct CompleteProfileResponse {
    /// Fresh token reflecting the activated account
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub token: String,
    pub account: AccountView,
}

/// Complete the account profile
///
/// Stores the required personal fields, marks the profile complete and
/// activates the account.
#[utoipa::path(
    post,
    path = "/api/v1/auth/complete-profile",
    tag = "auth",
    request_body = CompleteProfileRequest,
    responses(
        (status = 200, description = "Profile completed", body = inline(SuccessResponse<CompleteProfileResponse>)),
        (
            status = 400,
            description = "Missing or invalid profile field",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": "lastName is required",
                "code": "INVALID_PROFILE"
            })
        ),
        (status = 401, description = "Missing, invalid or revoked token", body = ErrorResponse),
        (status = 404, description = "Account no longer exists", body = ErrorResponse),
        (status = 503, description = "Account store unavailable", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[post("/api/v1/auth/complete-profile")]
pub async fn complete_profile_handler(
    account: VerifiedAccount,
    req: web::Json<CompleteProfileRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    info!(account_id = %account.account_id, "Profile completion attempt");

    let input = CompleteProfileInput {
        account_id: account.account_id,
        profile: req.into_inner().into(),
    };

    match data.complete_profile_use_case.execute(input).await {
        Ok(output) => {
            info!(account_id = %output.account.id, "Profile completed");
            ApiResponse::success(CompleteProfileResponse {
                token: output.token,
                account: output.account.into(),
            })
        }

        Err(CompleteProfileError::InvalidProfile(msg)) => {
            warn!(account_id = %account.account_id, "Profile rejected: {}", msg);
            ApiResponse::bad_request("INVALID_PROFILE", &msg)
        }

        Err(e @ CompleteProfileError::AccountNotFound) => {
            warn!(account_id = %account.account_id, "Profile completion for missing account");
            ApiResponse::not_found("ACCOUNT_NOT_FOUND", &e.to_string())
        }

        Err(CompleteProfileError::ServiceUnavailable(e)) => {
            error!(error = %e, "Account store unavailable during profile completion");
            ApiResponse::service_unavailable()
        }

        Err(CompleteProfileError::TokenGenerationFailed(e)) => {
            error!(error = %e, "Token generation failed");
            ApiResponse::internal_error()
        }

        Err(CompleteProfileError::RepositoryError(e)) => {
            error!(error = %e, "Failed to store profile");
            ApiResponse::internal_error()
        }
    }
}
