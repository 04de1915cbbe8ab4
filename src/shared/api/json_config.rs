// src/shared/api/json_config.rs
use crate::shared::api::ApiResponse;
use actix_web::error::JsonPayloadError;
use actix_web::http::StatusCode;
use actix_web::web::JsonConfig;

/// Account payloads are small; anything past this is refused before parsing.
pub const MAX_JSON_BODY_BYTES: usize = 16 * 1024;

pub fn custom_json_config() -> JsonConfig {
    JsonConfig::default()
        .limit(MAX_JSON_BODY_BYTES)
        .error_handler(|err, _req| {
            let response = match &err {
                JsonPayloadError::OverflowKnownLength { .. } | JsonPayloadError::Overflow { .. } => {
                    ApiResponse::error(
                        StatusCode::PAYLOAD_TOO_LARGE,
                        "PAYLOAD_TOO_LARGE",
                        "Request body is too large",
                    )
                }
                JsonPayloadError::ContentType => ApiResponse::bad_request(
                    "VALIDATION_ERROR",
                    "Content-Type must be application/json",
                ),
                _ => ApiResponse::bad_request("VALIDATION_ERROR", &err.to_string()),
            };
            actix_web::error::InternalError::from_response(err, response).into()
        })
}
