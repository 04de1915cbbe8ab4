use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use futures::future::LocalBoxFuture;

use crate::auth::application::domain::entities::AccountId;
use crate::auth::application::helpers::access_resolver::{
    AccessError, AccessPolicy, AuthorizedAccount,
};
use crate::{shared::api::ApiResponse, AppState};

/// Bearer of a valid token whose account is currently `Active`.
#[derive(Debug, Clone)]
pub struct AuthenticatedAccount {
    pub account_id: AccountId,
    pub role: i32,
}

/// Bearer of a valid token whose account is `Verified` or `Active`.
#[derive(Debug, Clone)]
pub struct VerifiedAccount {
    pub account_id: AccountId,
    pub role: i32,
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

fn access_error_response(err: AccessError) -> HttpResponse {
    match err {
        AccessError::InvalidToken => {
            ApiResponse::unauthorized("INVALID_TOKEN", "Invalid or expired token")
        }
        AccessError::AccountNotFound => {
            ApiResponse::unauthorized("UNAUTHORIZED", "Account no longer exists")
        }
        AccessError::NotActive => {
            ApiResponse::unauthorized("ACCOUNT_NOT_ACTIVE", "Account is not active")
        }
        AccessError::ServiceUnavailable(msg) => {
            tracing::error!("Account store unavailable during authorization: {}", msg);
            ApiResponse::service_unavailable()
        }
        AccessError::Internal(msg) => {
            tracing::error!("Authorization lookup failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

fn extract_token_from_header(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn authorize(
    req: &HttpRequest,
    policy: AccessPolicy,
) -> LocalBoxFuture<'static, Result<AuthorizedAccount, ActixError>> {
    let resolver = req
        .app_data::<web::Data<AppState>>()
        .map(|state| state.access_resolver.clone());
    let token = extract_token_from_header(req);

    Box::pin(async move {
        let Some(resolver) = resolver else {
            return Err(create_api_error(ApiResponse::internal_error()));
        };

        let Some(token) = token else {
            return Err(create_api_error(ApiResponse::unauthorized(
                "MISSING_AUTH_HEADER",
                "Missing or invalid authorization header",
            )));
        };

        resolver.resolve(&token, policy).await.map_err(|e| {
            tracing::warn!("Authorization rejected: {}", e);
            create_api_error(access_error_response(e))
        })
    })
}

impl FromRequest for AuthenticatedAccount {
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let authorized = authorize(req, AccessPolicy::ActiveOnly);
        Box::pin(async move {
            let account = authorized.await?;
            Ok(AuthenticatedAccount {
                account_id: account.account_id,
                role: account.role,
            })
        })
    }
}

impl FromRequest for VerifiedAccount {
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let authorized = authorize(req, AccessPolicy::VerifiedOrActive);
        Box::pin(async move {
            let account = authorized.await?;
            Ok(VerifiedAccount {
                account_id: account.account_id,
                role: account.role,
            })
        })
    }
}
