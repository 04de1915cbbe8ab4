use crate::api::schemas::ErrorResponse;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::auth::adapter::incoming::web::routes::{
    AccountResponse, AccountView, CompleteProfileRequest, CompleteProfileResponse,
    LoginRequestDto, LoginResponse, ProfileView, RegisterAccountRequest,
    RegisterAccountResponse, ResendOtpRequest, ResendOtpResponse, UpdateProfileRequest,
    VerifyOtpRequest, VerifyOtpResponse,
};
use crate::location::adapter::incoming::web::routes::RegionResponse;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Medical Platform Account API",
        version = "1.0.0",
        description = "Registration, email verification, login and profile management for platform accounts"
    ),
    paths(
        crate::auth::adapter::incoming::web::routes::register_account_handler,
        crate::auth::adapter::incoming::web::routes::verify_otp_handler,
        crate::auth::adapter::incoming::web::routes::resend_otp_handler,
        crate::auth::adapter::incoming::web::routes::login_account_handler,
        crate::auth::adapter::incoming::web::routes::complete_profile_handler,
        crate::auth::adapter::incoming::web::routes::update_profile_handler,
        crate::auth::adapter::incoming::web::routes::fetch_profile_handler,
        crate::location::adapter::incoming::web::routes::list_countries_handler,
        crate::location::adapter::incoming::web::routes::list_states_handler,
        crate::location::adapter::incoming::web::routes::list_cities_handler,
        crate::location::adapter::incoming::web::routes::list_districts_handler,
    ),
    components(
        schemas(
            ErrorResponse,
            AccountView,
            ProfileView,
            AccountResponse,
            RegisterAccountRequest,
            RegisterAccountResponse,
            VerifyOtpRequest,
            VerifyOtpResponse,
            ResendOtpRequest,
            ResendOtpResponse,
            LoginRequestDto,
            LoginResponse,
            CompleteProfileRequest,
            CompleteProfileResponse,
            UpdateProfileRequest,
            RegionResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Account lifecycle and profile endpoints"),
        (name = "location", description = "Address lookup tables for profile forms"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "BearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Token returned by verify-otp, login or complete-profile"))
                        .build(),
                ),
            )
        }
    }
}
