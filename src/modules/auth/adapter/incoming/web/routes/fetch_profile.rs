use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedAccount;
use crate::auth::adapter::incoming::web::routes::{AccountResponse, AccountView};
use crate::auth::application::use_cases::fetch_profile::FetchProfileError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use tracing::{error, warn};

/// Current account
#[utoipa::path(
    get,
    path = "/api/v1/auth/me",
    tag = "auth",
    responses(
        (status = 200, description = "Account of the bearer", body = inline(SuccessResponse<AccountResponse>)),
        (status = 401, description = "Missing, invalid or revoked token", body = ErrorResponse),
        (status = 404, description = "Account no longer exists", body = ErrorResponse),
        (status = 503, description = "Account store unavailable", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[get("/api/v1/auth/me")]
pub async fn fetch_profile_handler(
    account: AuthenticatedAccount,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.fetch_profile_use_case.execute(account.account_id).await {
        Ok(found) => ApiResponse::success(AccountResponse {
            account: AccountView::from(found),
        }),

        Err(e @ FetchProfileError::AccountNotFound) => {
            warn!(account_id = %account.account_id, "Profile fetch for missing account");
            ApiResponse::not_found("ACCOUNT_NOT_FOUND", &e.to_string())
        }

        Err(FetchProfileError::ServiceUnavailable(e)) => {
            error!(error = %e, "Account store unavailable during profile fetch");
            ApiResponse::service_unavailable()
        }

        Err(FetchProfileError::QueryError(e)) => {
            error!(error = %e, "Failed to load profile");
            ApiResponse::internal_error()
        }
    }
}
